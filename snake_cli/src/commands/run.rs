use std::io::{self, BufWriter, Write};

use clap::Args;
use racing_snake::{
    prelude::*,
    snake::{render::display_rows, reset_sync::RST_STAGES, sequencer::SNAKE_CYCLE},
};
use tracing::debug;

use super::Run;
use crate::{styles, Env};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Number of clock cycles to simulate [default: one full snake cycle]
    #[arg(short, long)]
    cycles: Option<u64>,
    /// Cycles the reset line is held asserted at power-up
    #[arg(long, default_value_t = 0)]
    reset_cycles: u64,
    /// Draw every N cycles instead of on each animation step
    #[arg(long)]
    every: Option<u64>,
}

impl RunArgs {
    fn cycles(&self, config: &SnakeConfig) -> u64 {
        self.cycles.unwrap_or_else(|| {
            self.reset_cycles
                + RST_STAGES as u64
                + (config.tick_max() + 1) * SNAKE_CYCLE as u64
                + 1
        })
    }

    fn draw(&self, out: &mut impl Write, sample: &Sample, colors: bool) -> io::Result<()> {
        let frames = sample.state.frames;
        writeln!(
            out,
            "cycle {:>10}  frames {:>2} {:>2}  {}",
            sample.cycle, frames[0], frames[1], sample.output.digit
        )?;

        let rows = display_rows(frames.map(Frame::segments));
        for row in rows {
            if colors {
                let (left, right) = row.split_at(3);
                let (left_style, right_style) = match sample.output.digit {
                    Digit::Digit0 => (styles::active_digit(), styles::inactive_digit()),
                    Digit::Digit1 => (styles::inactive_digit(), styles::active_digit()),
                };
                writeln!(
                    out,
                    "  {}{}",
                    styles::paint(left_style, left),
                    styles::paint(right_style, right)
                )?;
            } else {
                writeln!(out, "  {row}")?;
            }
        }

        Ok(())
    }
}

impl Run for RunArgs {
    fn run(&self, env: &Env) -> anyhow::Result<()> {
        let config = env.config().clone();
        let cycles = self.cycles(&config);
        let stimulus = ResetPulse::new(self.reset_cycles, config.rst_polarity);
        let colors = env.use_colors();
        debug!(cycles, ?config, "simulating");

        let mut out = BufWriter::new(io::stdout().lock());
        let mut prev: Option<[Frame; 2]> = None;
        let sim = Simulation::new(RacingSnake::new(config)?, stimulus);
        for sample in sim.values().take(cycles as usize) {
            let redraw = match self.every {
                Some(every) => sample.cycle % every.max(1) == 0,
                None => prev != Some(sample.state.frames),
            };
            if redraw {
                self.draw(&mut out, &sample, colors)?;
            }
            prev = Some(sample.state.frames);
        }
        out.flush()?;

        Ok(())
    }
}
