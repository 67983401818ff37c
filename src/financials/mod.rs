pub mod derived;
pub mod mapper;
pub mod parse;
pub mod period;
pub mod statement;

pub use derived::apply_derived_metrics;
pub use mapper::{map_facts, BalanceSheetField, Concept, DirectField};
pub use parse::{extract_statement, parse_xbrl};
pub use period::resolve_period_end;
pub use statement::{BalanceSheet, CashFlow, CompanyProfile, IncomeStatement, Statement};
