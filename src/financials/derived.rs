use super::statement::BalanceSheet;

/// Fills aggregates the filer did not tag and recomputes working capital.
pub fn apply_derived_metrics(sheet: &mut BalanceSheet) {
    if sheet.current_assets.is_none() {
        sheet.current_assets = current_asset_components(sheet);
    }

    if sheet.current_liabilities.is_none() {
        sheet.current_liabilities = sheet.total_liabilities;
    }

    sheet.working_capital = match (sheet.current_assets, sheet.current_liabilities) {
        (Some(assets), Some(liabilities)) => Some(assets - liabilities),
        _ => None,
    };
}

// Sum of the populated components, None when none of them are.
fn current_asset_components(sheet: &BalanceSheet) -> Option<f64> {
    [
        sheet.cash_and_equiv,
        sheet.current_loans_receivable,
        sheet.receivables_from_brokers,
        sheet.receivables_from_customers,
        sheet.receivables_from_other,
        sheet.financial_instruments_owned_at_fair_value,
        sheet.segregated_cash,
        sheet.securities_received_as_collateral,
    ]
    .into_iter()
    .flatten()
    .reduce(|total, value| total + value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_assets_fallback_sums_components() {
        let mut sheet = BalanceSheet {
            cash_and_equiv: Some(7_508_508_000.0),
            current_loans_receivable: Some(1_003_117_000.0),
            receivables_from_brokers: Some(2_543_110_000.0),
            receivables_from_customers: Some(1_785_932_000.0),
            receivables_from_other: Some(412_695_000.0),
            financial_instruments_owned_at_fair_value: Some(13_877_461_000.0),
            segregated_cash: Some(1_241_098_000.0),
            securities_received_as_collateral: Some(1_655_519_000.0),
            ..Default::default()
        };
        apply_derived_metrics(&mut sheet);
        assert_eq!(sheet.current_assets, Some(30_027_440_000.0));
    }

    #[test]
    fn test_partial_components() {
        let mut sheet = BalanceSheet {
            cash_and_equiv: Some(10.0),
            segregated_cash: Some(0.5),
            ..Default::default()
        };
        apply_derived_metrics(&mut sheet);
        assert_eq!(sheet.current_assets, Some(10.5));
        assert_eq!(sheet.current_liabilities, None);
        assert_eq!(sheet.working_capital, None);
    }

    #[test]
    fn test_reported_current_assets_are_kept() {
        let mut sheet = BalanceSheet {
            current_assets: Some(0.0),
            cash_and_equiv: Some(10.0),
            current_liabilities: Some(4.0),
            total_liabilities: Some(9.0),
            ..Default::default()
        };
        apply_derived_metrics(&mut sheet);
        assert_eq!(sheet.current_assets, Some(0.0));
        assert_eq!(sheet.current_liabilities, Some(4.0));
        assert_eq!(sheet.working_capital, Some(-4.0));
    }

    #[test]
    fn test_current_liabilities_fall_back_to_total() {
        let mut sheet = BalanceSheet {
            cash_and_equiv: Some(100.0),
            total_liabilities: Some(30.0),
            ..Default::default()
        };
        apply_derived_metrics(&mut sheet);
        assert_eq!(sheet.current_liabilities, Some(30.0));
        assert_eq!(sheet.working_capital, Some(70.0));
    }

    #[test]
    fn test_working_capital_is_always_recomputed() {
        let mut sheet = BalanceSheet {
            current_assets: Some(5.0),
            current_liabilities: Some(2.0),
            working_capital: Some(1_000.0),
            ..Default::default()
        };
        apply_derived_metrics(&mut sheet);
        assert_eq!(sheet.working_capital, Some(3.0));

        let mut empty = BalanceSheet {
            working_capital: Some(1_000.0),
            ..Default::default()
        };
        apply_derived_metrics(&mut empty);
        assert_eq!(empty.current_assets, None);
        assert_eq!(empty.working_capital, None);
    }
}
