//! Split command implementation

use super::{init_logging, OutputFormat};
use crate::config::{CliConfig, OutputConfig};
use crate::error::CliError;
use crate::output::create_formatter;
use anyhow::Result;
use clap::Args;
use silaba_core::Syllabizer;
use std::io;
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Words to syllabize
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Uppercase the stressed syllable
    #[arg(short, long)]
    pub mark_stress: bool,

    /// Separator placed between syllables
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let output_config = self.output_config(config.output);

        let syllabizer = Syllabizer::new();
        let mut formatter = create_formatter(self.format, io::stdout(), &output_config);

        for word in &self.words {
            let result = syllabizer
                .syllabize(word)
                .map_err(|e| CliError::ProcessingError(e.to_string()))?;
            formatter.format_word(&result)?;
        }

        formatter.finish()
    }

    /// Apply the command line overrides to the configured output settings
    fn output_config(&self, mut config: OutputConfig) -> OutputConfig {
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
        config.mark_stress |= self.mark_stress;
        config
    }
}
