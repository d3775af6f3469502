use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use racing_snake::simulation::{trace_vcd_file, ResetPulse};
use tracing::info;

use super::Run;
use crate::Env;

#[derive(Debug, Args)]
pub struct TraceArgs {
    /// Output VCD file
    #[arg(short, long)]
    output: PathBuf,
    /// Number of clock cycles to simulate
    #[arg(short, long, default_value_t = 10_000)]
    cycles: u64,
    /// Cycles the reset line is held asserted at power-up
    #[arg(long, default_value_t = 0)]
    reset_cycles: u64,
}

impl Run for TraceArgs {
    fn run(&self, env: &Env) -> anyhow::Result<()> {
        let config = env.config().clone();
        let stimulus = ResetPulse::new(self.reset_cycles, config.rst_polarity);
        info!(output = %self.output.display(), cycles = self.cycles, "tracing");

        trace_vcd_file(&self.output, config, stimulus, self.cycles)
            .with_context(|| format!("cannot write '{}'", self.output.display()))?;

        Ok(())
    }
}
