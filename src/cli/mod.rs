//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::compare::{CompareConfig, KeyOrder};
use crate::document::{CheckerConfig, LoadFailure, Session};
use crate::error::{CheckerError, CheckerErrorKind, CheckerResult};
use crate::parser::directory::find_json_files;
use crate::parser::limits::parse_size;
use crate::parser::JsonSource;
use crate::report::{OutputFormat, Report, ReportOptions};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "balance-checker")]
#[command(about = "Compare JSON balance files and find the fields that disagree")]
#[command(version)]
pub struct Args {
    /// JSON files or directories of JSON files, compared in the given order
    #[arg()]
    pub inputs: Vec<PathBuf>,

    /// Read one more document from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Add a document from inline JSON text (repeatable)
    #[arg(long = "json", value_name = "TEXT")]
    pub json: Vec<String>,

    /// Recursively collect JSON files from directories
    #[arg(long)]
    pub recursive: bool,

    /// Field path to leave out of the comparison (repeatable)
    #[arg(short, long = "ignore", value_name = "PATH")]
    pub ignore: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Only show fields that disagree
    #[arg(long)]
    pub only_inconsistent: bool,

    /// List the loaded documents
    #[arg(long)]
    pub show_documents: bool,

    /// Print each listed document's JSON (implies --show-documents)
    #[arg(long)]
    pub expand: bool,

    /// Compare objects regardless of key order
    #[arg(long)]
    pub sorted_keys: bool,

    /// Maximum nesting depth explored when discovering fields (default: 1000)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Largest file accepted (e.g., 10MB, default: 100MB)
    #[arg(long)]
    pub max_file_size: Option<String>,

    /// Abort on the first file that fails to load
    #[arg(long)]
    pub fail_fast: bool,

    /// Exit with status 1 when any active field is inconsistent
    #[arg(long)]
    pub check: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub checker_config: CheckerConfig,
    pub report_options: ReportOptions,
}

/// What a run produced, for the binary to print
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output: String,
    pub failures: Vec<LoadFailure>,
    pub inconsistent_count: usize,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> CheckerResult<Self> {
        let checker_config = Self::create_checker_config(&args)?;
        let report_options = ReportOptions {
            format: args.format.into(),
            only_inconsistent: args.only_inconsistent,
            show_documents: args.show_documents || args.expand,
            expand_documents: args.expand,
            color: !args.no_color && console::colors_enabled(),
        };

        Ok(Self {
            args,
            checker_config,
            report_options,
        })
    }

    fn create_checker_config(args: &Args) -> CheckerResult<CheckerConfig> {
        let mut compare = CompareConfig::default();
        if args.sorted_keys {
            compare = compare.with_key_order(KeyOrder::Sorted);
        }
        if let Some(depth) = args.max_depth {
            compare = compare.with_max_depth(Some(depth));
        }

        let mut config = CheckerConfig::default()
            .with_fail_fast(args.fail_fast)
            .with_compare(compare);
        if let Some(limit) = &args.max_file_size {
            let bytes = parse_size(limit).map_err(|message| {
                CheckerError::checker(CheckerErrorKind::configuration(message))
            })?;
            config = config.with_max_file_size(bytes);
        }

        config
            .validate()
            .map_err(|message| CheckerError::checker(CheckerErrorKind::configuration(message)))?;
        Ok(config)
    }

    /// Expand the inputs into sources: files, directory contents, inline JSON, stdin
    pub fn sources(&self) -> CheckerResult<Vec<JsonSource>> {
        let mut sources = Vec::new();

        for input in &self.args.inputs {
            if input.is_dir() {
                let files = find_json_files(input, self.args.recursive).map_err(|e| {
                    CheckerError::checker(CheckerErrorKind::io(e.to_string(), Some(input.clone())))
                })?;
                tracing::debug!(dir = %input.display(), files = files.len(), "collected directory");
                sources.extend(files.into_iter().map(JsonSource::File));
            } else if input.is_file() {
                sources.push(JsonSource::File(input.clone()));
            } else {
                return Err(CheckerError::checker(CheckerErrorKind::InputNotFound {
                    input: input.display().to_string(),
                }));
            }
        }

        sources.extend(self.args.json.iter().cloned().map(JsonSource::String));

        if self.args.stdin {
            sources.push(JsonSource::Stdin);
        }

        if sources.is_empty() {
            return Err(CheckerError::checker(CheckerErrorKind::configuration(
                "No input provided. Pass JSON files, --json or --stdin".to_string(),
            )));
        }

        Ok(sources)
    }
}

/// Load every source, compare all active fields and render the report
pub fn run(cli: &CliConfig) -> CheckerResult<RunOutcome> {
    let sources = cli.sources()?;

    let mut session = Session::new(cli.checker_config.clone());
    for path in &cli.args.ignore {
        session.ignored_mut().ignore(path.clone());
    }

    let outcome = session
        .documents_mut()
        .load_batch(&sources, &cli.checker_config)?;

    let report = Report::build(&session, &outcome.failures, &cli.report_options);
    let output = report.render(&cli.report_options)?;

    Ok(RunOutcome {
        output,
        failures: outcome.failures,
        inconsistent_count: report.summary.inconsistent_count,
    })
}
