pub mod core;
pub mod edgar;
pub mod error;
pub mod financials;

// Re-exports
pub use error::{FinancialsError, Result};
pub use financials::{extract_statement, parse_xbrl, Statement};
