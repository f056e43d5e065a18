pub mod animation;
pub mod calculation;

pub use animation::*;
pub use calculation::*;
