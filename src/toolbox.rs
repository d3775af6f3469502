pub mod counters;
pub mod shift_reg;
