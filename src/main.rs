use clap::Parser;
use std::process::ExitCode;

use balance_checker::cli::{run, Args, CliConfig};
use balance_checker::report::OutputFormat;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    let cli = match CliConfig::from_args(args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("✗ {}", e.user_message());
            return ExitCode::from(2);
        }
    };

    let outcome = match run(&cli) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("✗ {}", e.user_message());
            return ExitCode::from(2);
        }
    };

    for failure in &outcome.failures {
        eprintln!("✗ {}", failure.message);
    }

    if !cli.args.quiet || cli.report_options.format == OutputFormat::Json {
        print!("{}", outcome.output);
        if !outcome.output.ends_with('\n') {
            println!();
        }
    }

    if cli.args.check && outcome.inconsistent_count > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(args: &Args) {
    let default_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
