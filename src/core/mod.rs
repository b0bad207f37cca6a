pub mod calculator;
pub mod filler;
pub mod log;
pub mod week;
