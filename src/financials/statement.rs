use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::edgar::report::ReportType;

/// Normalized financial statement extracted from one filing.
///
/// Numeric fields are `None` until a fact or a derivation populates them,
/// so a reported zero stays distinguishable from a concept the filer never tagged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub filing_date: Option<NaiveDate>,
    pub calendar_date: Option<NaiveDate>,
    pub processing_date: DateTime<Utc>,

    pub form_type: String,

    pub company_profile: CompanyProfile,

    pub income_statement: IncomeStatement,
    pub balance_sheet: BalanceSheet,
    pub cash_flow: CashFlow,
}

impl Statement {
    pub fn report_type(&self) -> ReportType {
        ReportType::from_str(&self.form_type)
            .unwrap_or_else(|_| ReportType::Other(self.form_type.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub cik: String,
    pub cusips: Vec<String>,
    pub primary_ticker: String,
    pub primary_exchange: String,
    pub figi: String,
    pub composite_figi: String,
    pub share_class_figi: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub revenue: Option<f64>,
    pub cost_of_revenue: Option<f64>,
    pub selling_and_general_admin_exp: Option<f64>,
    pub research_and_devel_exp: Option<f64>,
    pub opex: Option<f64>,
    pub interest_exp: Option<f64>,
    pub tax_exp: Option<f64>,
    pub net_income_discontinued_operations: Option<f64>,
    pub consolidated_income: Option<f64>,
    pub net_income_nci: Option<f64>,
    pub preferred_dividend: Option<f64>,
    pub net_income_common_stock: Option<f64>,

    pub eps: Option<f64>,
    pub eps_diluted: Option<f64>,

    pub shares_weighted_avg: Option<f64>,
    pub shares_weighted_avg_diluted: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub cash_and_equiv: Option<f64>,
    pub total_investments: Option<f64>,
    pub current_investments: Option<f64>,
    pub non_current_investments: Option<f64>,

    pub total_assets: Option<f64>,
    pub current_assets: Option<f64>,
    pub non_current_assets: Option<f64>,

    pub total_liabilities: Option<f64>,
    pub current_liabilities: Option<f64>,
    pub non_current_liabilities: Option<f64>,

    pub total_debt: Option<f64>,
    pub current_debt: Option<f64>,
    pub non_current_debt: Option<f64>,

    /// Always derived, never read from a fact.
    pub working_capital: Option<f64>,

    pub deferred_revenue: Option<f64>,
    pub total_deposits: Option<f64>,
    pub net_property_plant_and_equip: Option<f64>,

    pub inventory_short_term: Option<f64>,

    pub tax_assets: Option<f64>,
    pub tax_liabilities: Option<f64>,

    pub current_loans_receivable: Option<f64>,
    pub receivables_from_brokers: Option<f64>,
    pub receivables_from_customers: Option<f64>,
    pub receivables_from_other: Option<f64>,
    pub total_receivables: Option<f64>,
    pub total_payables: Option<f64>,
    pub intangibles: Option<f64>,

    pub financial_instruments_owned_at_fair_value: Option<f64>,
    pub segregated_cash: Option<f64>,
    pub securities_received_as_collateral: Option<f64>,

    pub equity: Option<f64>,
    pub retained_earnings: Option<f64>,
    pub accumulated_other_comprehensive_income: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub capex: Option<f64>,
    pub net_business_acq_divestures: Option<f64>,
    pub net_investment_acq_divestures: Option<f64>,
    pub free_cash_flow_per_share: Option<f64>,
    pub net_cash_flow_from_financing: Option<f64>,
    pub total_issuance_repayment_debt: Option<f64>,
    pub total_issuance_repayment_equity: Option<f64>,
    pub common_dividend: Option<f64>,
    pub net_cash_flow_from_investments: Option<f64>,
    pub net_cash_flow_from_operations: Option<f64>,
    pub effect_of_foreign_exchange_rate_on_cash: Option<f64>,
    pub net_cash_flow: Option<f64>,
    pub stock_based_compensation: Option<f64>,
    pub depreciation_amortization: Option<f64>,
}
