//! Project-wide constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Base domain used for event check-in links when nothing else is configured.
pub const DEFAULT_DOMAIN: &str = "http://localhost:3000";

/// Environment variable consulted for the base domain.
pub const DOMAIN_ENV_VAR: &str = "ORGDESK_DOMAIN";

/// Edge length, in pixels, of rendered check-in QR codes.
pub const QR_MIN_DIMENSION: u32 = 240;

/// Default database path: `~/.orgdesk/orgdesk.db`.
/// Single DB for documents, the session, and config.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".orgdesk").join("orgdesk.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!REPO.is_empty());
        assert!(DEFAULT_DOMAIN.starts_with("http"));
        assert!(!DOMAIN_ENV_VAR.is_empty());
    }

    #[test]
    fn default_domain_has_no_trailing_slash() {
        assert!(!DEFAULT_DOMAIN.ends_with('/'));
    }
}
