//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Init { force } => init_config(path, force, formatter),
        ConfigAction::Show => {
            let config = Config::load_from(path)?;
            println!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Write the default configuration, refusing to clobber an existing file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        init_config(&path, false, &formatter).unwrap();
        assert!(path.exists());
        assert!(matches!(
            init_config(&path, false, &formatter),
            Err(CliError::InvalidInput(_))
        ));
        assert!(init_config(&path, true, &formatter).is_ok());
    }
}
