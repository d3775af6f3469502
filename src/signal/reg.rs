use super::SignalValue;

/// Synchronous, active-high reset as seen by the registers of a design.
pub type Reset = bool;

/// Clocked register with a synchronous reset.
///
/// Every call to one of the `reg*` methods models a single rising clock edge:
/// the register either takes its init value (reset asserted), the value
/// computed by the next-state function (enabled), or keeps its value.
#[derive(Debug, Clone)]
pub struct Reg<T: SignalValue> {
    val: T,
    init_val: T,
}

impl<T: SignalValue + Default> Default for Reg<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: SignalValue> Reg<T> {
    pub fn new(init_val: T) -> Self {
        Self {
            val: init_val.clone(),
            init_val,
        }
    }

    /// Current register output.
    #[inline]
    pub fn val(&self) -> T {
        self.val.clone()
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.val
    }

    pub fn reg_en(&mut self, rst: Reset, en: bool, f: impl FnOnce(T) -> T) -> T {
        if rst {
            self.val = self.init_val.clone();
        } else if en {
            self.val = f(self.val.clone());
        }

        self.val.clone()
    }

    #[inline]
    pub fn reg(&mut self, rst: Reset, f: impl FnOnce(T) -> T) -> T {
        self.reg_en(rst, true, f)
    }
}
