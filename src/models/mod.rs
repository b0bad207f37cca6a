pub mod day;
pub mod filler;
pub mod interval;
