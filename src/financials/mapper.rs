//! Concept dispatch from decoded facts onto statement fields.
//!
//! Two categories of concepts are recognized. Identity concepts are
//! assigned directly and the first accepted value wins. Balance-sheet
//! concepts only count when their context is an instant equal to the
//! resolved period end, and a value that then fails to parse aborts the
//! extraction. Anything else is ignored.

use crate::edgar::parsing::{Fact, XbrlDocument};
use crate::error::{FinancialsError, Result};

use super::statement::{BalanceSheet, Statement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectField {
    Name,
    PrimaryExchange,
    PrimaryTicker,
    FormType,
    Cik,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSheetField {
    TotalAssets,
    TotalLiabilities,
    CashAndEquiv,
    CurrentLoansReceivable,
    ReceivablesFromBrokers,
    ReceivablesFromCustomers,
    ReceivablesFromOther,
    FinancialInstrumentsOwnedAtFairValue,
    SegregatedCash,
    SecuritiesReceivedAsCollateral,
    Equity,
    RetainedEarnings,
}

impl BalanceSheetField {
    fn slot(self, sheet: &mut BalanceSheet) -> &mut Option<f64> {
        match self {
            BalanceSheetField::TotalAssets => &mut sheet.total_assets,
            BalanceSheetField::TotalLiabilities => &mut sheet.total_liabilities,
            BalanceSheetField::CashAndEquiv => &mut sheet.cash_and_equiv,
            BalanceSheetField::CurrentLoansReceivable => &mut sheet.current_loans_receivable,
            BalanceSheetField::ReceivablesFromBrokers => &mut sheet.receivables_from_brokers,
            BalanceSheetField::ReceivablesFromCustomers => &mut sheet.receivables_from_customers,
            BalanceSheetField::ReceivablesFromOther => &mut sheet.receivables_from_other,
            BalanceSheetField::FinancialInstrumentsOwnedAtFairValue => {
                &mut sheet.financial_instruments_owned_at_fair_value
            }
            BalanceSheetField::SegregatedCash => &mut sheet.segregated_cash,
            BalanceSheetField::SecuritiesReceivedAsCollateral => {
                &mut sheet.securities_received_as_collateral
            }
            BalanceSheetField::Equity => &mut sheet.equity,
            BalanceSheetField::RetainedEarnings => &mut sheet.retained_earnings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concept {
    /// Identity data, no context filtering.
    Direct(DirectField),
    /// Balance-sheet data, only taken from the period-end instant.
    Instant(BalanceSheetField),
}

impl Concept {
    pub fn from_name(name: &str) -> Option<Concept> {
        use BalanceSheetField as B;
        use DirectField as D;

        let concept = match name {
            "EntityRegistrantName" => Concept::Direct(D::Name),
            "SecurityExchangeName" => Concept::Direct(D::PrimaryExchange),
            "TradingSymbol" => Concept::Direct(D::PrimaryTicker),
            "DocumentType" => Concept::Direct(D::FormType),
            "EntityCentralIndexKey" => Concept::Direct(D::Cik),

            "Assets" => Concept::Instant(B::TotalAssets),
            "Liabilities" => Concept::Instant(B::TotalLiabilities),
            "CashAndCashEquivalentsAtCarryingValue" => Concept::Instant(B::CashAndEquiv),
            "InvestmentsInAffiliatesSubsidiariesAssociatesAndJointVentures" => {
                Concept::Instant(B::CurrentLoansReceivable)
            }
            "ReceivablesFromBrokersDealersAndClearingOrganizations" => {
                Concept::Instant(B::ReceivablesFromBrokers)
            }
            "ReceivablesFromCustomers" => Concept::Instant(B::ReceivablesFromCustomers),
            "FeesInterestAndOther" => Concept::Instant(B::ReceivablesFromOther),
            "FinancialInstrumentsOwnedAtFairValue" => {
                Concept::Instant(B::FinancialInstrumentsOwnedAtFairValue)
            }
            "CashAndSecuritiesSegregatedUnderFederalAndOtherRegulations" => {
                Concept::Instant(B::SegregatedCash)
            }
            "SecuritiesReceivedAsCollateral" => Concept::Instant(B::SecuritiesReceivedAsCollateral),
            "StockholdersEquity" => Concept::Instant(B::Equity),
            "RetainedEarningsAccumulatedDeficit" => Concept::Instant(B::RetainedEarnings),
            _ => return None,
        };
        Some(concept)
    }
}

/// Walks the valid facts of `doc` in order and populates `statement`.
pub fn map_facts(doc: &XbrlDocument, period_end: &str, statement: &mut Statement) -> Result<()> {
    for fact in doc.valid_facts() {
        match Concept::from_name(&fact.name) {
            Some(Concept::Direct(field)) => assign_direct(fact, field, statement),
            Some(Concept::Instant(field)) => {
                assign_instant(doc, fact, field, period_end, &mut statement.balance_sheet)?
            }
            None => {}
        }
    }
    Ok(())
}

fn assign_direct(fact: &Fact, field: DirectField, statement: &mut Statement) {
    let profile = &mut statement.company_profile;
    let target = match field {
        DirectField::Name => &mut profile.name,
        DirectField::PrimaryExchange => &mut profile.primary_exchange,
        DirectField::PrimaryTicker => {
            if fact.value.chars().any(char::is_whitespace) {
                log::debug!("Rejecting trading symbol '{}'", fact.value);
                return;
            }
            &mut profile.primary_ticker
        }
        DirectField::FormType => &mut statement.form_type,
        DirectField::Cik => &mut profile.cik,
    };

    if target.is_empty() {
        log::debug!("{:?} = {}", field, fact.value);
        *target = fact.value.clone();
    }
}

fn assign_instant(
    doc: &XbrlDocument,
    fact: &Fact,
    field: BalanceSheetField,
    period_end: &str,
    sheet: &mut BalanceSheet,
) -> Result<()> {
    if period_end.is_empty() {
        return Ok(());
    }

    let context_ref = fact.context_ref.as_deref().unwrap_or_default();
    let at_period_end = doc
        .context(context_ref)
        .and_then(|context| context.instant())
        .is_some_and(|instant| instant == period_end);
    if !at_period_end {
        return Ok(());
    }

    let value = fact
        .numeric_value()
        .map_err(|source| FinancialsError::NumericValue {
            document: doc.name.clone(),
            concept: fact.qualified_name(),
            context: context_ref.to_string(),
            value: fact.value.clone(),
            source,
        })?;

    log::debug!("{:?} = {} (context {})", field, value, context_ref);
    *field.slot(sheet) = Some(value);
    Ok(())
}
