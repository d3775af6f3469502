mod reg;

pub use reg::{Reg, Reset};

pub trait SignalValue: Clone + 'static {}

macro_rules! impl_signal_value {
    ($( $prim:ty ),+) => {
        $(
            impl SignalValue for $prim {}
        )+
    };
}

impl_signal_value!(bool, u8, u16, u32, u64, usize);

impl<T: SignalValue, const N: usize> SignalValue for [T; N] {}
