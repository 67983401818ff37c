pub mod parsing;
pub mod report;
