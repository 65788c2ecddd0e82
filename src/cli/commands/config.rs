use crate::cli::args::{ConfigArgs, ConfigCommand};
use crate::config::Config;
use crate::error::Result;

/// Execute config command
pub async fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("✅ Configuration updated: {} = {}", key, display_value(&key, &value));
            Ok(())
        }
        ConfigCommand::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}: {}", key, display_value(&key, &value));
                }
                None => {
                    println!("Configuration key '{}' not found", key);
                }
            }
            Ok(())
        }
        ConfigCommand::Path => {
            let path = Config::config_file_path()?;
            println!("Configuration file: {}", path.display());
            Ok(())
        }
        ConfigCommand::Init => {
            Config::initialize()?;
            println!("✅ Configuration initialized");
            println!();
            println!("To set your API token, run:");
            println!("  trabalhista config set escavador.token YOUR_TOKEN");
            println!();
            println!("or export ESCAVADOR_TOKEN (a .env file in the current directory also works).");
            Ok(())
        }
    }
}

/// Only secrets are masked
fn display_value(key: &str, value: &str) -> String {
    if key.ends_with(".token") {
        mask_value(value)
    } else {
        value.to_string()
    }
}

/// Mask sensitive values for display
fn mask_value(value: &str) -> String {
    let len = value.chars().count();
    if len > 10 {
        let prefix: String = value.chars().take(10).collect();
        format!("{}...({} characters)", prefix, len)
    } else {
        "*".repeat(len)
    }
}
