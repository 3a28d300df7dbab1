mod driver;
mod select;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use colored::*;
use log::{info, LevelFilter};
use serde::Serialize;
use stepwise_sched::{
    workload::sink::{shared, WriterSink},
    ExecutionMode, RunReport,
};

use crate::select::ModeChoice;

#[derive(Parser, Debug)]
#[command(name = "stepwise")]
#[command(about = "Print a sequence through a cooperative single-threaded scheduler", long_about = None)]
struct Cli {
    /// Elements to print, one per scheduler turn
    #[arg(default_values = ["1", "2", "3", "4"])]
    items: Vec<String>,

    /// How the workload is expressed
    #[arg(long, value_enum, default_value_t = ModeArg::Random)]
    mode: ModeArg,

    /// Seed for `--mode random`
    #[arg(long)]
    seed: Option<u64>,

    /// Print the run report as JSON to stderr
    #[arg(long)]
    report: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    EventDriven,
    SequentialStyle,
    Random,
}

impl Cli {
    fn mode_choice(&self) -> ModeChoice {
        match self.mode {
            ModeArg::EventDriven => ModeChoice::Fixed(ExecutionMode::EventDriven),
            ModeArg::SequentialStyle => ModeChoice::Fixed(ExecutionMode::SequentialStyle),
            ModeArg::Random => ModeChoice::Random { seed: self.seed },
        }
    }
}

#[derive(Serialize)]
struct ReportOutput {
    mode: ExecutionMode,
    items: usize,
    #[serde(flatten)]
    report: RunReport,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let mode = cli.mode_choice().resolve();
    info!("selected {} mode", mode);

    let count = cli.items.len();
    let sink = shared(WriterSink::new(std::io::stdout()));
    let report = driver::run_workload(mode, cli.items, sink.clone())
        .map_err(|e| format!("Run failed: {e}"))?;
    sink.borrow_mut()
        .flush()
        .map_err(|e| format!("Failed to flush output: {e}"))?;

    if cli.report {
        let output = ReportOutput {
            mode,
            items: count,
            report,
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        eprintln!("{json}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
