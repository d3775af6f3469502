use tracing::trace;

use super::segments::Frame;
use crate::{
    index::Idx,
    module::Module,
    signal::{Reg, Reset},
};

/// Least common multiple of the sequencer moduli.
pub const SNAKE_CYCLE: usize = 240;
pub const MODULI: [usize; 2] = [48, 40];

pub type SnakeCnt = Idx<SNAKE_CYCLE>;

#[derive(Debug, Clone)]
pub struct Sequencer {
    modulus: usize,
    frame: Reg<Frame>,
}

impl Sequencer {
    pub fn new(modulus: usize) -> Self {
        assert!(modulus > 0 && SNAKE_CYCLE % modulus == 0);
        Self {
            modulus,
            frame: Reg::default(),
        }
    }

    #[inline]
    pub fn frame(&self) -> Frame {
        self.frame.val()
    }

    fn advances(&self, cnt: SnakeCnt) -> bool {
        cnt.val() % self.modulus == 0
    }
}

/// Both snake sequencers and the counter they share.
#[derive(Debug, Clone)]
pub struct Snakes {
    cnt: Reg<SnakeCnt>,
    seqs: [Sequencer; 2],
}

impl Default for Snakes {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SnakesInput {
    pub rst: Reset,
    pub tick: bool,
}

impl Snakes {
    pub fn new() -> Self {
        Self {
            cnt: Reg::default(),
            seqs: MODULI.map(Sequencer::new),
        }
    }

    #[inline]
    pub fn cnt(&self) -> SnakeCnt {
        self.cnt.val()
    }

    pub fn frames(&self) -> [Frame; 2] {
        [self.seqs[0].frame(), self.seqs[1].frame()]
    }
}

impl Module for Snakes {
    type Input = SnakesInput;
    type Output = [Frame; 2];

    fn logic(&mut self, SnakesInput { rst, tick }: Self::Input) -> Self::Output {
        let cnt = self.cnt.val();
        for (idx, seq) in self.seqs.iter_mut().enumerate() {
            let en = tick && seq.advances(cnt);
            let frame = seq.frame.reg_en(rst, en, Frame::succ);
            if en && !rst {
                trace!(seq = idx, %cnt, %frame, "snake advanced");
            }
        }
        self.cnt.reg_en(rst, tick, SnakeCnt::succ);

        self.frames()
    }
}
