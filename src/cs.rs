pub mod combinatorial;
pub mod select;
pub mod sequence;

// Re-export all modules
pub use combinatorial::*;
pub use select::*;
pub use sequence::*;
