mod normalize;
mod quarter;

pub use normalize::*;
pub use quarter::*;
