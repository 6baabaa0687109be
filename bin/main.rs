use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod input;
mod io;
mod session;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
