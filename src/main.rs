use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use payroll_engine::config::ConfigLoader;
use payroll_engine::error::EngineError;
use payroll_engine::report;
use payroll_engine::run_payroll;

#[derive(Parser)]
#[command(name = "payroll")]
#[command(version)]
#[command(about = "Calculates a monthly payroll total from '-1'-delimited input.")]
struct CommandLine {
    /// Payroll input; read as one line from stdin when omitted
    #[arg(short, long)]
    input: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full result with per-employee breakdown as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(cli: &CommandLine) -> anyhow::Result<String> {
    if let Some(input) = &cli.input {
        return Ok(input.clone());
    }
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_until(b'\n', &mut bytes)
        .context("failed to read payroll input from stdin")?;
    decode_line(bytes)
}

/// Undecodable bytes are malformed input, not an I/O failure.
fn decode_line(bytes: Vec<u8>) -> anyhow::Result<String> {
    String::from_utf8(bytes).map_err(|err| {
        EngineError::malformed(
            "input",
            format!("invalid UTF-8 at byte {}", err.utf8_error().valid_up_to()),
        )
        .into()
    })
}

fn run(cli: &CommandLine) -> anyhow::Result<String> {
    let config = ConfigLoader::load_optional(cli.config.as_ref())?.into_config();
    debug!(?config, "Using payroll configuration");

    let input = read_input(cli)?;
    let result = run_payroll(&input, &config)?;

    if cli.json {
        report::render_json(&result).context("failed to serialize payroll result")
    } else {
        Ok(report::format_total(&result))
    }
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<EngineError>() {
        Some(engine_err) if engine_err.is_malformed_input() => ExitCode::from(1),
        _ => ExitCode::from(2),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = CommandLine::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_code_for(&err)
        }
    }
}
