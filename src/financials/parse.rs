use chrono::Utc;
use std::fs;
use std::path::Path;

use super::derived::apply_derived_metrics;
use super::mapper::map_facts;
use super::period::{calendar_date, resolve_period_end};
use super::statement::Statement;
use crate::edgar::parsing::{decode_document, XbrlDocument};
use crate::edgar::report::ReportType;
use crate::error::{FinancialsError, Result};

/// Reads and decodes an XBRL instance file, then extracts its statement.
pub fn parse_xbrl<P: AsRef<Path>>(path: P) -> Result<Statement> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| FinancialsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = decode_document(&path.display().to_string(), &bytes)?;
    extract_statement(&doc)
}

/// Builds a statement from an already decoded document.
pub fn extract_statement(doc: &XbrlDocument) -> Result<Statement> {
    let mut statement = Statement {
        processing_date: Utc::now(),
        ..Default::default()
    };

    let period_end = resolve_period_end(&doc.facts);
    if period_end.is_empty() {
        log::warn!("{} has no DocumentPeriodEndDate, balance sheet stays empty", doc.name);
    }
    statement.calendar_date = calendar_date(&period_end);

    log::info!(
        "Parsed XBRL {}: {} facts, period end '{}'",
        doc.name,
        doc.facts.len(),
        period_end
    );

    map_facts(doc, &period_end, &mut statement)?;

    let report_type = statement.report_type();
    if !report_type.is_periodic() {
        log::warn!(
            "{} is a '{}' filing, expected one of {}",
            doc.name,
            report_type,
            ReportType::list_types()
        );
    }

    apply_derived_metrics(&mut statement.balance_sheet);

    Ok(statement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edgar::parsing::tests::{get_test_file_path, read_test_file};

    #[test]
    fn test_parse_fixture() {
        let statement = parse_xbrl(get_test_file_path("jef.xml")).unwrap();
        assert_eq!(statement.form_type, "10-Q");
        assert_eq!(statement.company_profile.cik, "0000096223");
        assert_eq!(
            statement.calendar_date,
            chrono::NaiveDate::from_ymd_opt(2024, 5, 31)
        );
        assert_eq!(statement.filing_date, None);
    }

    #[test]
    fn test_non_periodic_form_is_still_extracted() {
        let content = read_test_file("jef.xml").replace(
            "<dei:DocumentType contextRef=\"c-1\">10-Q</dei:DocumentType>",
            "<dei:DocumentType contextRef=\"c-1\">8-K</dei:DocumentType>",
        );
        let doc = decode_document("current-report.xml", content.as_bytes()).unwrap();
        let statement = extract_statement(&doc).unwrap();

        assert_eq!(statement.report_type(), ReportType::Form8K);
        assert!(!statement.report_type().is_periodic());
        assert!(statement.balance_sheet.total_assets.is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_xbrl("does/not/exist.xml").unwrap_err();
        assert!(matches!(err, FinancialsError::Read { .. }));
    }

    #[test]
    fn test_missing_period_leaves_balance_sheet_unset() {
        let content = read_test_file("jef.xml").replace(
            "<dei:DocumentPeriodEndDate contextRef=\"c-1\">2024-05-31</dei:DocumentPeriodEndDate>",
            "",
        );
        let doc = decode_document("no-period.xml", content.as_bytes()).unwrap();
        let statement = extract_statement(&doc).unwrap();

        assert_eq!(statement.balance_sheet, Default::default());
        assert_eq!(statement.calendar_date, None);
        assert_eq!(statement.company_profile.name, "JEFFERIES FINANCIAL GROUP INC.");
        assert_eq!(statement.company_profile.primary_ticker, "JEF");
        assert_eq!(statement.form_type, "10-Q");
    }
}
