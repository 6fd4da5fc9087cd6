use anyhow::Context;
use clap::Parser;

use dualex::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    dualex::init_logging()?;

    let job = Cli::parse().into_job()?;

    println!("DualEx version {}", dualex::VERSION);
    if job.dia_in != job.dia_new {
        println!(
            "Input file diameter: {}   Added extruder diameter: {}",
            job.dia_in, job.dia_new
        );
    }

    let report = dualex::convert_file(&job.input, &job.output, job.dia_in, job.dia_new)
        .with_context(|| format!("failed to convert {}", job.input.display()))?;

    println!("{} lines processed", report.lines_processed);

    Ok(())
}
