use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser as _};

use png_inspect::cli::Cli;
use png_inspect::{FrameReader, Parser, StdoutSink};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(path) = cli.path else {
        Cli::command().print_help().ok();
        println!();
        return ExitCode::SUCCESS;
    };
    if !cli.extra.is_empty() {
        eprintln!("too many arguments");
        return ExitCode::FAILURE;
    }

    match run(&cli, &path) {
        Ok(()) => {
            println!("validated {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = FrameReader::new(file);
    let mut sink = StdoutSink;
    let mut parser = match cli.max_chunk_bytes {
        Some(limit) => Parser::with_max_chunk_bytes(limit, &mut sink),
        None => Parser::new(&mut sink),
    };
    let outcome = reader
        .drive(&mut parser)
        .with_context(|| format!("reading {}", path.display()))?;
    outcome.context("validating PNG stream")
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
