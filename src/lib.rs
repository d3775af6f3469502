pub mod const_functions;
pub mod domain;
pub mod error;
pub mod index;
pub mod module;
pub mod signal;
pub mod simulation;
pub mod snake;
pub mod toolbox;
pub mod trace;
pub mod unsigned;

pub use error::Error;

pub mod prelude {
    pub use crate::{
        domain::{hz_to_period, rate_divider, ClockDomain, Polarity},
        error::Error,
        index::Idx,
        module::Module,
        signal::{Reg, Reset, SignalValue},
        simulation::{ResetPulse, Sample, Simulate, Simulation, Stimulus},
        snake::{
            config::{ConfigError, SnakeConfig},
            mux::Digit,
            segments::{Frame, Segment, Segments},
            DisplayOutput, Pins, RacingSnake, SnakeState,
        },
        unsigned::Unsigned,
    };
}
