use clap::Subcommand;

use self::{config::ConfigArgs, run::RunArgs, table::TableArgs, trace::TraceArgs};
use crate::Env;

mod config;
mod run;
mod table;
mod trace;

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate the display and draw each animation step
    Run(RunArgs),
    /// Write a VCD waveform of the simulation
    Trace(TraceArgs),
    /// Print the frame to segment table
    Table(TableArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

pub trait Run {
    fn run(&self, env: &Env) -> anyhow::Result<()>;
}

impl Commands {
    pub fn run(&self, env: &Env) -> anyhow::Result<()> {
        match self {
            Self::Run(args) => args.run(env),
            Self::Trace(args) => args.run(env),
            Self::Table(args) => args.run(env),
            Self::Config(args) => args.run(env),
        }
    }
}
