//! The racing snake display design.
//!
//! Two snakes crawl around the two digits of a seven-segment display at
//! different speeds. Every register of the design is owned by [`RacingSnake`],
//! which is advanced one clock edge at a time.

pub mod config;
pub mod mux;
pub mod render;
pub mod reset_sync;
pub mod segments;
pub mod sequencer;

use serde::Serialize;

use self::{
    config::{ConfigError, SnakeConfig},
    mux::{Digit, DigitMux},
    reset_sync::{ResetSync, RST_STAGES},
    segments::{Frame, Segment, Segments},
    sequencer::{SnakeCnt, Snakes, SnakesInput},
};
use crate::{
    domain::Polarity, module::Module, signal::Reset, toolbox::counters::RiseEvery,
    unsigned::Unsigned,
};

/// Values driven on the output pins during one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayOutput {
    pub segments: Segments,
    pub digit: Digit,
}

/// Line levels of [`DisplayOutput`] after applying the output polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pins {
    /// Segments A..G
    pub seg: [bool; 7],
    pub dig_sel: bool,
}

impl DisplayOutput {
    pub fn pins(&self, polarity: Polarity) -> Pins {
        Pins {
            seg: self.segments.lines().map(|lit| polarity.bool(lit)),
            dig_sel: self.digit.sel(),
        }
    }

    pub fn is_lit(&self, seg: Segment) -> bool {
        self.segments.contains(seg)
    }
}

/// Register contents after a clock edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    pub rst_history: [bool; RST_STAGES],
    pub rst: Reset,
    pub tick_cnt: Unsigned,
    pub tick: bool,
    pub snake_cnt: SnakeCnt,
    pub frames: [Frame; 2],
    pub mux_cnt: Unsigned,
}

impl SnakeState {
    /// Every counter and frame holds its reset value.
    pub fn is_initial(&self) -> bool {
        self.tick_cnt.val() == 0
            && !self.tick
            && self.snake_cnt.is_min()
            && self.frames == [Frame::default(); 2]
            && self.mux_cnt.val() == 0
    }
}

#[derive(Debug, Clone)]
pub struct RacingSnake {
    config: SnakeConfig,
    rst_sync: ResetSync,
    tick: RiseEvery,
    snakes: Snakes,
    mux: DigitMux,
}

impl RacingSnake {
    pub fn new(config: SnakeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            rst_sync: ResetSync::new(config.rst_polarity),
            tick: RiseEvery::new(config.tick_max()),
            snakes: Snakes::new(),
            mux: DigitMux::new(config.mux_width),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Advances the design by one clock edge with `rst_level` sampled on the
    /// external reset line.
    #[inline]
    pub fn step(&mut self, rst_level: bool) -> DisplayOutput {
        self.logic(rst_level)
    }

    /// What the pins currently drive.
    pub fn output(&self) -> DisplayOutput {
        let digit = self.mux.digit();
        let frame = self.snakes.frames()[digit.idx()];

        DisplayOutput {
            segments: frame.segments(),
            digit,
        }
    }

    pub fn frames(&self) -> [Frame; 2] {
        self.snakes.frames()
    }

    pub fn state(&self) -> SnakeState {
        SnakeState {
            rst_history: self.rst_sync.history(),
            rst: self.rst_sync.rst(),
            tick_cnt: Unsigned::new(self.tick.width(), self.tick.cnt()),
            tick: self.tick.pulse(),
            snake_cnt: self.snakes.cnt(),
            frames: self.snakes.frames(),
            mux_cnt: self.mux.cnt(),
        }
    }
}

impl Module for RacingSnake {
    type Input = bool;
    type Output = DisplayOutput;

    fn logic(&mut self, rst_level: Self::Input) -> Self::Output {
        // Register outputs from before the edge.
        let rst = self.rst_sync.logic(rst_level);
        let tick = self.tick.pulse();

        self.snakes.logic(SnakesInput { rst, tick });
        self.tick.logic(rst);
        self.mux.logic(rst);

        self.output()
    }
}
