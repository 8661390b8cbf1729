pub mod attendance;
pub mod auth;
pub mod config;
pub mod consts;
pub mod error;
pub mod logging;
pub mod model;
pub mod notify;
pub mod recruitment;
pub mod store;

pub use error::{Error, Result};
