use clap::Args;

use super::Run;
use crate::Env;

#[derive(Debug, Args)]
pub struct ConfigArgs {}

impl Run for ConfigArgs {
    fn run(&self, env: &Env) -> anyhow::Result<()> {
        let config = env.config();
        println!("{}", serde_json::to_string_pretty(config)?);
        eprintln!(
            "tick every {} cycles, digit refresh {:.2} Hz",
            config.tick_max() + 1,
            config.refresh_hz()
        );

        Ok(())
    }
}
