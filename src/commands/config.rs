use anyhow::Result;
use clap::Subcommand;

use orgdesk::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    Get { key: String },
    Set { key: String, value: String },
    Unset { key: String },
}

pub fn run(db: &str, action: ConfigAction) -> Result<()> {
    let config = Config::open(db)?;
    match action {
        ConfigAction::Get { key } => match config.get(&key)? {
            Some(value) => println!("{value}"),
            None => println!("{key} is not set"),
        },
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            println!("✓ {key} = {value}");
        }
        ConfigAction::Unset { key } => {
            config.remove(&key)?;
            println!("✓ {key} unset");
        }
    }
    Ok(())
}
