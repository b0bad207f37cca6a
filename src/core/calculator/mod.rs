pub mod gaps;
pub mod grouper;
pub mod normalizer;
