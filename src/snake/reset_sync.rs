use tracing::debug;

use crate::{
    domain::Polarity,
    module::Module,
    signal::Reset,
    toolbox::shift_reg::{ShiftReg, ShiftRegInput},
};

pub const RST_STAGES: usize = 8;

/// Brings the external reset line into the clock domain.
///
/// Each sample is stored as "released"; the internal reset is asserted until
/// every stage of the history holds a released sample.
#[derive(Debug, Clone)]
pub struct ResetSync {
    polarity: Polarity,
    history: ShiftReg<bool, RST_STAGES>,
}

impl ResetSync {
    pub fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            history: ShiftReg::new(false),
        }
    }

    /// Internal reset driven during the current cycle.
    #[inline]
    pub fn rst(&self) -> Reset {
        !self.history.all(|released| *released)
    }

    pub fn history(&self) -> [bool; RST_STAGES] {
        self.history.values()
    }
}

impl Module for ResetSync {
    /// External reset line level.
    type Input = bool;
    /// Internal reset seen by the registers on this edge.
    type Output = Reset;

    fn logic(&mut self, level: Self::Input) -> Self::Output {
        let rst = self.rst();
        let released = !self.polarity.bool(level);
        self.history.logic(ShiftRegInput {
            next: true,
            data: released,
        });

        let next_rst = self.rst();
        if rst != next_rst {
            if next_rst {
                debug!("internal reset asserted");
            } else {
                debug!("internal reset released");
            }
        }

        rst
    }
}
