use std::{io::Write, path::Path};

use tracing::info;

use crate::{
    domain::Polarity,
    error::Error,
    module::Module,
    snake::{config::SnakeConfig, DisplayOutput, RacingSnake, SnakeState},
    trace::{IdCode, TraceTy, TraceVars, Traceable, Tracer},
};

pub trait Simulate: Sized {
    type Value;

    fn next(&mut self, cycle: u64) -> Self::Value;

    fn values(self) -> Values<Self> {
        Values {
            cycle: 0,
            source: self,
        }
    }
}

pub struct Values<S> {
    cycle: u64,
    source: S,
}

impl<S: Simulate> Values<S> {
    pub fn next_cycle(&mut self) -> S::Value {
        let value = self.source.next(self.cycle);
        self.cycle += 1;
        value
    }

    #[inline]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

impl<S: Simulate> Iterator for Values<S> {
    type Item = S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_cycle())
    }
}

/// Drives the external reset line.
pub trait Stimulus {
    /// Reset line level during `cycle`.
    fn rst_level(&mut self, cycle: u64) -> bool;
}

impl<F: FnMut(u64) -> bool> Stimulus for F {
    fn rst_level(&mut self, cycle: u64) -> bool {
        self(cycle)
    }
}

/// Reset held asserted for the first `cycles` cycles, then released.
#[derive(Debug, Clone, Copy)]
pub struct ResetPulse {
    pub cycles: u64,
    pub polarity: Polarity,
}

impl ResetPulse {
    pub fn new(cycles: u64, polarity: Polarity) -> Self {
        Self { cycles, polarity }
    }

    /// Reset line never asserted.
    pub fn released(polarity: Polarity) -> Self {
        Self::new(0, polarity)
    }
}

impl Stimulus for ResetPulse {
    fn rst_level(&mut self, cycle: u64) -> bool {
        self.polarity.bool(cycle < self.cycles)
    }
}

/// Design state observed after one clock edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub cycle: u64,
    pub rst_level: bool,
    pub output: DisplayOutput,
    pub state: SnakeState,
}

impl Traceable for Sample {
    fn add_vars(&self, vars: &mut TraceVars) {
        vars.field("rst_level", &self.rst_level);
        vars.field("rst_int", &self.state.rst);
        vars.field("rst_history", &self.state.rst_history);
        vars.field("tick_cnt", &self.state.tick_cnt);
        vars.field("tick", &self.state.tick);
        vars.field("snake_cnt", &self.state.snake_cnt);
        vars.push_sym("frame");
        for (idx, frame) in self.state.frames.iter().enumerate() {
            vars.push_idx(idx);
            frame.idx().add_vars(vars);
            vars.pop();
        }
        vars.pop();
        vars.field("mux_cnt", &self.state.mux_cnt);
        vars.push_sym("dig_sel");
        vars.add_ty(TraceTy::Wire);
        vars.pop();
        vars.push_sym("seg");
        vars.add_ty(TraceTy::Bus(7));
        vars.pop();
    }

    fn trace<W: Write>(&self, id: &mut IdCode, tracer: &mut Tracer<W>) -> std::io::Result<()> {
        self.rst_level.trace(id, tracer)?;
        self.state.rst.trace(id, tracer)?;
        self.state.rst_history.trace(id, tracer)?;
        self.state.tick_cnt.trace(id, tracer)?;
        self.state.tick.trace(id, tracer)?;
        self.state.snake_cnt.trace(id, tracer)?;
        for frame in self.state.frames {
            frame.idx().trace(id, tracer)?;
        }
        self.state.mux_cnt.trace(id, tracer)?;
        self.output.digit.sel().trace(id, tracer)?;
        self.output.segments.lines().trace(id, tracer)
    }
}

/// A [`RacingSnake`] driven by a reset stimulus.
pub struct Simulation<S> {
    top: RacingSnake,
    stimulus: S,
}

impl<S: Stimulus> Simulation<S> {
    pub fn new(top: RacingSnake, stimulus: S) -> Self {
        Self { top, stimulus }
    }

    #[inline]
    pub fn top(&self) -> &RacingSnake {
        &self.top
    }
}

impl<S: Stimulus> Simulate for Simulation<S> {
    type Value = Sample;

    fn next(&mut self, cycle: u64) -> Self::Value {
        let rst_level = self.stimulus.rst_level(cycle);
        let output = self.top.logic(rst_level);

        Sample {
            cycle,
            rst_level,
            output,
            state: self.top.state(),
        }
    }
}

/// Simulates `cycles` clock cycles and writes the waveform to `writer`.
pub fn trace_vcd<W: Write>(
    writer: W,
    config: SnakeConfig,
    stimulus: impl Stimulus,
    cycles: u64,
) -> Result<(), Error> {
    let period = config.period();
    let mut values = Simulation::new(RacingSnake::new(config)?, stimulus).values();
    let first = values.next_cycle();

    let vars = TraceVars::default()
        .add_var("clk", &false)
        .add_var("snake", &first);
    let mut tracer = Tracer::new(writer, vars, "racing_snake", None)?;

    for sample in std::iter::once(first).chain(values).take(cycles as usize) {
        let time = sample.cycle * period;
        tracer.dump_time(time)?;
        tracer.trace("clk", &true)?;
        tracer.trace("snake", &sample)?;
        tracer.dump_time(time + period / 2)?;
        tracer.trace("clk", &false)?;
    }
    tracer.flush()?;
    info!(cycles, "waveform written");

    Ok(())
}

pub fn trace_vcd_file<P: AsRef<Path>>(
    path: P,
    config: SnakeConfig,
    stimulus: impl Stimulus,
    cycles: u64,
) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    trace_vcd(std::io::BufWriter::new(file), config, stimulus, cycles)
}
