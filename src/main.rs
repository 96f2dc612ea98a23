use anyhow::Result;
use clap::{Parser, Subcommand};

use cstress::{GeneratorConfig, Report, Variant};

#[derive(Parser)]
#[command(
    name = "cstress",
    about = "Generate oversized C sources for compiler and analyzer stress tests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print timing breakdown to stderr (for profiling)
    #[arg(long = "debug-timing", global = true, hide = true)]
    debug_timing: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Write test_big.c: many trivial functions and a main calling each one
    Big,
    /// Write many_lines.c: many one-line global declarations
    Long,
}

fn main() -> Result<()> {
    cstress::init_tracing();
    let cli = Cli::parse();

    let variant = match cli.command {
        Command::Big => Variant::FanOut,
        Command::Long => Variant::LineVolume,
    };
    let config = GeneratorConfig::for_variant(variant);

    let report = config.run()?;
    println!("{}", config.completion_message());

    if cli.debug_timing {
        print_timing(&config, &report);
    }

    Ok(())
}

fn print_timing(config: &GeneratorConfig, report: &Report) {
    let mb = report.megabytes();
    let secs = report.elapsed.as_secs_f64();
    eprintln!(
        "--- debug-timing: {} ({} units, {mb:.1} MB) ---",
        config.output_path, report.units
    );
    eprintln!("  total:  {:>8.2}ms  ({:.0} MB/s)", secs * 1000.0, mb / secs);
}
