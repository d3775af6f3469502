use crate::{
    module::Module,
    signal::{Reg, SignalValue},
};

/// Chain of `N` registers. Stage 0 takes the new sample, the last stage
/// holds the oldest one.
#[derive(Debug, Clone)]
pub struct ShiftReg<T: SignalValue, const N: usize> {
    regs: [Reg<T>; N],
}

#[derive(Debug, Clone)]
pub struct ShiftRegInput<T> {
    pub next: bool,
    pub data: T,
}

impl<T: SignalValue, const N: usize> ShiftReg<T, N> {
    pub fn new(init: T) -> Self {
        Self {
            regs: std::array::from_fn(|_| Reg::new(init.clone())),
        }
    }

    pub fn values(&self) -> [T; N] {
        std::array::from_fn(|idx| self.regs[idx].val())
    }

    pub fn all(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.regs.iter().all(|reg| pred(reg.get()))
    }
}

impl<T: SignalValue, const N: usize> Module for ShiftReg<T, N> {
    type Input = ShiftRegInput<T>;
    type Output = [T; N];

    fn logic(&mut self, ShiftRegInput { next, data }: Self::Input) -> Self::Output {
        let mut prev = data;
        for reg in self.regs.iter_mut() {
            let cur = reg.val();
            reg.reg_en(false, next, |_| prev);
            prev = cur;
        }

        self.values()
    }
}
