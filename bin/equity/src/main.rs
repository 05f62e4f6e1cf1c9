//! Equity Binary
//!
//! Monte Carlo win/tie equity for hold'em hands.
//!
//! Example: equity -p AcAd -p KhKs -b 2c7d9h -n 100000
//! Type "Q" + Enter to stop early and report completed trials.
mod args;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use pkc_equity::Report;
use pkc_equity::Simulator;

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();
    pkc_core::log();
    pkc_core::brb();
    let config = args.config();
    let simulator = Simulator::new(args.players()?, args.board()?).context("validating hands")?;
    log::info!(
        "{:<32}{:<32}",
        format!("players {}", holes(&simulator)),
        format!("board [{}]", simulator.board())
    );
    log::info!("{}", config);
    let report = simulator.run(&config).context("running simulation")?;
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => print(&simulator, &report),
    }
    Ok(())
}

fn holes(simulator: &Simulator) -> String {
    simulator
        .players()
        .iter()
        .map(|hole| hole.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print(simulator: &Simulator, report: &Report) {
    println!("{:<12}{}", "Players", holes(simulator).bold());
    println!("{:<12}{}", "Board", simulator.board().to_string().bold());
    println!("{:<12}{}", "Trials", report.trials());
    match report.partial() {
        true => print!("{}", report.to_string().yellow()),
        false => print!("{}", report.to_string().green()),
    }
}
