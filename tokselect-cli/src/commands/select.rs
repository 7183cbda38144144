//! Select command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tokselect_api::{Config, ExecutionMode, Mode, TokenSelector};

/// Arguments for the select command
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Input corpus files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Dictionary file, one n-gram per line or a JSON array of arrays
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Keep or remove matched n-grams
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Replace unselected tokens with 0 instead of dropping them
    #[arg(long, overrides_with = "no_padding")]
    pub padding: bool,

    /// Drop unselected tokens, overriding the config file
    #[arg(long, overrides_with = "padding")]
    pub no_padding: bool,

    /// Context tokens selected before each match
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub window_left: Option<i64>,

    /// Context tokens selected after each match
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub window_right: Option<i64>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include per-file metadata in JSON output
    #[arg(long)]
    pub metadata: bool,

    /// Force parallel processing even for small corpora
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "COUNT", env = "TOKSELECT_THREADS")]
    pub threads: Option<usize>,

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

/// Selection mode on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Keep matched tokens
    Keep,
    /// Remove matched tokens
    Remove,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Keep => Mode::Keep,
            ModeArg::Remove => Mode::Remove,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One document per line, token ids separated by spaces
    Text,
    /// JSON array of `{source, documents}` objects
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Result<Self, CliError> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

impl SelectArgs {
    /// Execute the select command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting token selection");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let config = self.build_config(&file_config)?;
        let dictionary = FileReader::read_dictionary(&self.dictionary)?;
        let selector = TokenSelector::with_config(dictionary, config).map_err(CliError::from)?;

        let files = resolve_patterns(&self.input)?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&file_config.output.format)?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .with_metadata(self.metadata || file_config.output.include_metadata)
                    .pretty(file_config.output.pretty_json),
            ),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let source = path.display().to_string();
            let corpus = FileReader::read_corpus(path)?;
            let output = selector
                .select_corpus(corpus)
                .map_err(CliError::from)
                .with_context(|| format!("Failed to select tokens in {source}"))?;

            log::info!(
                "{}: {} documents, {} -> {} tokens, {} matches ({} mode, {}ms)",
                source,
                output.metadata.documents,
                output.metadata.tokens_in,
                output.metadata.tokens_out,
                output.metadata.matches,
                output.metadata.mode_used,
                output.metadata.processing_time_ms
            );

            formatter.format_source(&source, &output)?;
            progress.file_completed(&source);
        }

        formatter.finish()?;
        progress.finish();

        Ok(())
    }

    /// Merge file configuration with command-line overrides
    pub fn build_config(&self, file_config: &CliConfig) -> Result<Config> {
        let selection = &file_config.selection;
        let execution = &file_config.execution;

        let mode = match self.mode {
            Some(mode) => Mode::from(mode),
            None => selection.mode()?,
        };

        let threads = self.threads.or(match execution.worker_threads {
            0 => None,
            n => Some(n),
        });

        let execution_mode = if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        let config = Config::builder()
            .mode(mode)
            .padding(self.padding_override().unwrap_or(selection.padding))
            .window(
                self.window_left.unwrap_or(selection.window_left),
                self.window_right.unwrap_or(selection.window_right),
            )
            .execution_mode(execution_mode)
            .threads(threads)
            .parallel_threshold(execution.parallel_threshold_tokens)
            .partition_tokens(execution.partition_tokens)
            .build()
            .map_err(CliError::from)?;

        Ok(config)
    }

    /// Padding requested on the command line, if any
    fn padding_override(&self) -> Option<bool> {
        match (self.padding, self.no_padding) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokselect_api::Window;

    fn args() -> SelectArgs {
        SelectArgs {
            input: vec!["corpus.txt".to_string()],
            dictionary: PathBuf::from("dict.txt"),
            mode: None,
            padding: false,
            no_padding: false,
            window_left: None,
            window_right: None,
            output: None,
            format: None,
            metadata: false,
            parallel: false,
            threads: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults() {
        let config = args().build_config(&CliConfig::default()).unwrap();
        assert_eq!(config.mode(), Mode::Keep);
        assert!(!config.padding());
        assert_eq!(config.window(), Window::EXACT);
        assert_eq!(config.execution_mode(), ExecutionMode::Adaptive);
        assert_eq!(config.threads(), None);
    }

    #[test]
    fn test_flags_override_file() {
        let file_config = CliConfig::parse(
            "[selection]\nmode = \"keep\"\nwindow_left = 3\n\n[execution]\nworker_threads = 8\n",
        )
        .unwrap();

        let mut args = args();
        args.mode = Some(ModeArg::Remove);
        args.window_left = Some(1);
        args.threads = Some(2);
        args.parallel = true;

        let config = args.build_config(&file_config).unwrap();
        assert_eq!(config.mode(), Mode::Remove);
        assert_eq!(config.window(), Window::new(1, 0));
        assert_eq!(config.threads(), Some(2));
        assert_eq!(config.execution_mode(), ExecutionMode::Parallel);
    }

    #[test]
    fn test_file_values_used() {
        let file_config = CliConfig::parse(
            "[selection]\nmode = \"remove\"\npadding = true\nwindow_right = 2\n\n[execution]\nworker_threads = 3\n",
        )
        .unwrap();

        let config = args().build_config(&file_config).unwrap();
        assert_eq!(config.mode(), Mode::Remove);
        assert!(config.padding());
        assert_eq!(config.window(), Window::new(0, 2));
        assert_eq!(config.threads(), Some(3));
    }

    #[test]
    fn test_no_padding_overrides_file() {
        let file_config = CliConfig::parse("[selection]\npadding = true\n").unwrap();

        assert!(args().build_config(&file_config).unwrap().padding());

        let mut args = args();
        args.no_padding = true;
        assert!(!args.build_config(&file_config).unwrap().padding());
    }

    #[test]
    fn test_last_padding_flag_wins() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            select: SelectArgs,
        }

        let base = ["tokselect", "-i", "c.txt", "-d", "d.txt"];
        let parse = |extra: &[&str]| {
            let argv: Vec<&str> = base.iter().chain(extra).copied().collect();
            Wrapper::try_parse_from(argv).unwrap().select
        };

        let file_config = CliConfig::parse("[selection]\npadding = true\n").unwrap();
        let padded = |args: SelectArgs| args.build_config(&file_config).unwrap().padding();

        assert!(padded(parse(&[])));
        assert!(!padded(parse(&["--no-padding"])));
        assert!(padded(parse(&["--no-padding", "--padding"])));
        assert!(!padded(parse(&["--padding", "--no-padding"])));
    }

    #[test]
    fn test_negative_window_rejected() {
        let mut args = args();
        args.window_right = Some(-1);
        assert!(args.build_config(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut args = args();
        args.threads = Some(0);
        let err = args.build_config(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_name("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_name("markdown").is_err());
    }
}
