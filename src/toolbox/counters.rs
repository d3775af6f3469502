use tracing::trace;

use crate::{
    const_functions::clog2,
    module::Module,
    signal::{Reg, Reset},
};

/// Emits a one-cycle pulse every `max + 1` clock cycles.
///
/// The pulse is registered: it is high during the cycle after the counter
/// wraps.
#[derive(Debug, Clone)]
pub struct RiseEvery {
    max: u64,
    cnt: Reg<u64>,
    pulse: Reg<bool>,
}

impl RiseEvery {
    pub fn new(max: u64) -> Self {
        Self {
            max,
            cnt: Reg::new(0),
            pulse: Reg::new(false),
        }
    }

    #[inline]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Bits needed to hold the counter.
    #[inline]
    pub fn width(&self) -> u8 {
        clog2(self.max as usize) as u8
    }

    #[inline]
    pub fn cnt(&self) -> u64 {
        self.cnt.val()
    }

    #[inline]
    pub fn pulse(&self) -> bool {
        self.pulse.val()
    }
}

impl Module for RiseEvery {
    type Input = Reset;
    type Output = bool;

    fn logic(&mut self, rst: Self::Input) -> Self::Output {
        let wrap = self.cnt.val() == self.max;
        let max = self.max;
        self.cnt.reg(rst, |cnt| if cnt == max { 0 } else { cnt + 1 });
        let pulse = self.pulse.reg(rst, |_| wrap);
        if pulse {
            trace!(max, "tick");
        }

        pulse
    }
}
