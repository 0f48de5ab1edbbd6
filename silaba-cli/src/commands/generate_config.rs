//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        let Some(path) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        eprintln!("✓ Configuration written to {}", path.display());
        eprintln!("Use it with:");
        eprintln!("   silaba process -i words.txt --config {}", path.display());

        Ok(())
    }

    /// Default configuration as commented TOML
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!("# silaba configuration\n\n{body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: Some(PathBuf::from("silaba.toml")),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("silaba.toml"));
    }

    #[test]
    fn test_generate_template() {
        let template = GenerateConfigArgs { output: None }.generate_template().unwrap();
        assert!(template.starts_with("# silaba configuration"));
        assert!(template.contains("[processing]"));
        assert!(template.contains("[output]"));
        assert!(template.contains("[performance]"));
        assert_eq!(CliConfig::from_toml(&template).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("silaba.toml");

        let args = GenerateConfigArgs {
            output: Some(output_path.clone()),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let loaded = CliConfig::load(Some(output_path.as_path())).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }
}
