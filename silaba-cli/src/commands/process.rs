//! Process command implementation

use super::{init_logging, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{parse_word_list, resolve_patterns, FileReader};
use crate::output::create_formatter;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use silaba_core::{Syllabification, Syllabizer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Input value that reads the word list from standard input
const STDIN_MARKER: &str = "-";

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob), or '-' for stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force parallel processing even for short word lists
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting word list processing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;

        let words = self.read_words(&config)?;
        log::info!("Read {} words", words.len());

        let results = self.syllabize_words(&words, &config)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, BufWriter::new(writer), &config.output);

        for result in &results {
            formatter.format_word(result)?;
        }
        formatter.finish()?;

        log::info!("Syllabized {} words", results.len());
        Ok(())
    }

    /// Format from the command line, falling back to the configured default
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let name = &config.output.default_format;
        <OutputFormat as ValueEnum>::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }

    /// Collect the words of every input in order
    fn read_words(&self, config: &CliConfig) -> Result<Vec<String>> {
        let prefix = config.processing.comment_prefix.as_str();

        if self.input.iter().any(|input| input == STDIN_MARKER) {
            if self.input.len() > 1 {
                anyhow::bail!("'-' cannot be combined with other inputs");
            }
            let text = FileReader::read_stdin()?;
            return Ok(to_owned(parse_word_list(&text, prefix)));
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut words = Vec::new();
        for path in &files {
            let list = read_word_file(path, prefix)?;
            progress.file_completed(&display_name(path), list.len());
            words.extend(list);
        }
        progress.finish();

        Ok(words)
    }

    /// Syllabize all words, keeping input order
    fn syllabize_words(
        &self,
        words: &[String],
        config: &CliConfig,
    ) -> Result<Vec<Syllabification>> {
        let syllabizer = Syllabizer::new();
        let performance = &config.performance;
        let parallel = self.parallel || words.len() >= performance.parallel_threshold_words;

        let outcomes: Vec<_> = if parallel {
            let threads = performance.resolved_threads();
            log::debug!("Syllabizing in parallel on {threads} threads");

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| CliError::ProcessingError(e.to_string()))?;
            pool.install(|| words.par_iter().map(|w| syllabizer.syllabize(w)).collect())
        } else {
            words.iter().map(|w| syllabizer.syllabize(w)).collect()
        };

        let mut results = Vec::with_capacity(outcomes.len());
        for (word, outcome) in words.iter().zip(outcomes) {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) if config.processing.skip_invalid => {
                    log::warn!("Skipping {word:?}: {e}");
                }
                Err(e) => return Err(CliError::ProcessingError(e.to_string()).into()),
            }
        }

        Ok(results)
    }
}

fn read_word_file(path: &Path, comment_prefix: &str) -> Result<Vec<String>> {
    let text = FileReader::read_text(path)?;
    let size = FileReader::file_size(path)?;
    log::debug!("Read {} ({} bytes)", path.display(), size);
    Ok(to_owned(parse_word_list(&text, comment_prefix)))
}

fn to_owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
