mod format;
mod point;

pub use format::*;
pub use point::*;
