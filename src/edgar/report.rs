use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// Forms that carry XBRL financial statements, as reported by `dei:DocumentType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "String", into = "String")]
pub enum ReportType {
    Form10K,
    Form10KT,
    Form10Q,
    Form10QT,
    Form20F,
    Form40F,
    Form6K,
    Form8K,
    Other(String),
}

impl TryFrom<String> for ReportType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ReportType::from_str(&s)
    }
}

impl From<ReportType> for String {
    fn from(report_type: ReportType) -> Self {
        report_type.to_string()
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Form10K => write!(f, "10-K"),
            ReportType::Form10KT => write!(f, "10-KT"),
            ReportType::Form10Q => write!(f, "10-Q"),
            ReportType::Form10QT => write!(f, "10-QT"),
            ReportType::Form20F => write!(f, "20-F"),
            ReportType::Form40F => write!(f, "40-F"),
            ReportType::Form6K => write!(f, "6-K"),
            ReportType::Form8K => write!(f, "8-K"),
            ReportType::Other(s) => write!(f, "{}", s),
        }
    }
}

pub static REPORT_TYPES: Lazy<String> = Lazy::new(|| {
    ReportType::iter()
        .filter(|t| !matches!(t, ReportType::Other(_)))
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
});

impl ReportType {
    pub fn list_types() -> &'static str {
        &REPORT_TYPES
    }

    pub fn is_quarterly(&self) -> bool {
        matches!(self, ReportType::Form10Q | ReportType::Form10QT)
    }

    pub fn is_annual(&self) -> bool {
        matches!(
            self,
            ReportType::Form10K | ReportType::Form10KT | ReportType::Form20F | ReportType::Form40F
        )
    }

    /// Forms whose balance sheet describes a full reporting period.
    pub fn is_periodic(&self) -> bool {
        self.is_quarterly() || self.is_annual()
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<ReportType, String> {
        match s.trim().to_uppercase().as_str() {
            "10-K" => Ok(ReportType::Form10K),
            "10-KT" => Ok(ReportType::Form10KT),
            "10-Q" => Ok(ReportType::Form10Q),
            "10-QT" => Ok(ReportType::Form10QT),
            "20-F" => Ok(ReportType::Form20F),
            "40-F" => Ok(ReportType::Form40F),
            "6-K" => Ok(ReportType::Form6K),
            "8-K" => Ok(ReportType::Form8K),
            _ => Ok(ReportType::Other(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_forms() {
        assert_eq!("10-q".parse::<ReportType>().unwrap(), ReportType::Form10Q);
        assert_eq!(" 10-K ".parse::<ReportType>().unwrap(), ReportType::Form10K);
        assert!(ReportType::Form10Q.is_quarterly());
        assert!(ReportType::Form20F.is_annual());
        assert!(!ReportType::Form8K.is_annual());
        assert!(ReportType::Form40F.is_periodic());
        assert!(!ReportType::Form6K.is_periodic());
        assert!(!ReportType::Other("S-1".to_string()).is_periodic());
    }

    #[test]
    fn test_unknown_form_is_kept_verbatim() {
        let parsed: ReportType = "10-K/A".parse().unwrap();
        assert_eq!(parsed, ReportType::Other("10-K/A".to_string()));
        assert_eq!(parsed.to_string(), "10-K/A");
    }

    #[test]
    fn test_list_types() {
        assert_eq!(
            ReportType::list_types(),
            "10-K, 10-KT, 10-Q, 10-QT, 20-F, 40-F, 6-K, 8-K"
        );
    }

    #[test]
    fn test_serde_uses_form_names() {
        let json = serde_json::to_string(&ReportType::Form10Q).unwrap();
        assert_eq!(json, "\"10-Q\"");
        let back: ReportType = serde_json::from_str("\"40-F\"").unwrap();
        assert_eq!(back, ReportType::Form40F);
    }
}
