use std::{
    fs,
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, ValueEnum};
use racing_snake::prelude::SnakeConfig;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Clock frequency in hertz
    #[arg(long, global = true)]
    pub clk_hz: Option<u64>,
    /// Width of the digit multiplexer counter
    #[arg(long, global = true)]
    pub mux_width: Option<u8>,
    /// Use colors
    #[arg(long, value_enum, global = true, default_value_t = Color::Auto)]
    pub color: Color,
}

impl GlobalArgs {
    /// Configuration file overridden by command line flags.
    pub fn snake_config(&self) -> anyhow::Result<SnakeConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("cannot read '{}'", path.display()))?;
                serde_json::from_str::<SnakeConfig>(&json)
                    .with_context(|| format!("cannot parse '{}'", path.display()))?
            }
            None => SnakeConfig::default(),
        };

        if let Some(clk_hz) = self.clk_hz {
            config.clk_hz = clk_hz;
        }
        if let Some(mux_width) = self.mux_width {
            config.mux_width = mux_width;
        }
        config.validate()?;

        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    Never,
    Auto,
    Always,
}

impl Color {
    pub fn use_colors(&self) -> bool {
        match self {
            Self::Never => false,
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
        }
    }
}
