// src/bin/cli.rs
use clap::Parser;
use skin_explorer::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init_stderr();
    cli::run(cli::Args::parse())
}
