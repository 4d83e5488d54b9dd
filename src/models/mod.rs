pub mod sequence;
pub mod value;
