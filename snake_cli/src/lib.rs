use std::io;

use anyhow::anyhow;
use clap::Parser;
use racing_snake::prelude::SnakeConfig;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

mod args;
mod commands;
mod styles;

pub use args::{Color, GlobalArgs};
use commands::Commands;

const LOG_ENV_VAR: &str = "SNAKE_LOG";

pub struct Env {
    config: SnakeConfig,
    color: Color,
}

impl Env {
    #[inline]
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    #[inline]
    pub fn use_colors(&self) -> bool {
        self.color.use_colors()
    }
}

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Racing snake seven-segment display simulator", long_about = None)]
#[command(styles = styles::get_styles())]
struct SnakeCli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

fn init_logger(color: Color) -> anyhow::Result<()> {
    let filter = EnvFilter::from_env(LOG_ENV_VAR);
    let subscriber = Registry::default().with(filter);
    let subscriber = subscriber.with(
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(color.use_colors())
            .with_target(true),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

pub fn run_cli() -> anyhow::Result<()> {
    let args = SnakeCli::parse();
    init_logger(args.global.color)?;

    let env = Env {
        config: args.global.snake_config()?,
        color: args.global.color,
    };

    args.command.run(&env)
}
