mod interface;
pub mod react;

pub use interface::*;
