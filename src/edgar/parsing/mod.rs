pub mod types;
pub mod xbrl;

#[cfg(test)]
pub mod tests;

pub use types::{Context, Dimension, Fact, Period, XbrlDocument};
pub use xbrl::decode_document;
