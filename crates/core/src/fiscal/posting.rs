//! Posting rules for journal dates.
//!
//! The backend finds the period whose range contains the journal date and
//! refuses the journal when none exists or the period is closed. The client
//! runs the same check so the user sees the problem before submitting.

use chrono::{Datelike, NaiveDate};

use super::error::FiscalError;
use super::period::FiscalPeriod;

/// Finds the period containing `date`, if any.
#[must_use]
pub fn find_period(periods: &[FiscalPeriod], date: NaiveDate) -> Option<&FiscalPeriod> {
    periods.iter().find(|p| p.contains(date))
}

/// Checks that a journal dated `date` can be posted.
///
/// Returns the covering period on success.
///
/// # Errors
///
/// * `FiscalError::NoFiscalPeriod` if no period contains the date
/// * `FiscalError::PeriodClosed` if the covering period is closed
pub fn check_posting_date(
    periods: &[FiscalPeriod],
    date: NaiveDate,
) -> Result<&FiscalPeriod, FiscalError> {
    let period = find_period(periods, date).ok_or(FiscalError::NoFiscalPeriod(date))?;

    if !period.is_open() {
        return Err(FiscalError::PeriodClosed {
            period_id: period.id,
            period_name: period.period_name.clone(),
        });
    }

    Ok(period)
}

/// Returns the start of the fiscal year containing `date`.
///
/// Falls back to January 1 of the same year when no period covers the date.
#[must_use]
pub fn fiscal_year_start(periods: &[FiscalPeriod], date: NaiveDate) -> NaiveDate {
    find_period(periods, date).map_or_else(
        || NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        |p| p.start_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerly_shared::types::FiscalPeriodId;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(id: i64, year: i32, start: NaiveDate, end: NaiveDate, is_closed: bool) -> FiscalPeriod {
        FiscalPeriod {
            id: FiscalPeriodId::new(id),
            period_year: year,
            period_number: 1,
            period_name: format!("FY{year}"),
            start_date: start,
            end_date: end,
            is_closed,
        }
    }

    fn periods() -> Vec<FiscalPeriod> {
        vec![
            period(1, 2024, date(2024, 4, 1), date(2025, 3, 31), true),
            period(2, 2025, date(2025, 4, 1), date(2026, 3, 31), false),
        ]
    }

    #[test]
    fn test_open_period_accepts_posting() {
        let periods = periods();
        let found = check_posting_date(&periods, date(2025, 4, 1)).unwrap();
        assert_eq!(found.id, FiscalPeriodId::new(2));

        let found = check_posting_date(&periods, date(2026, 3, 31)).unwrap();
        assert_eq!(found.id, FiscalPeriodId::new(2));
    }

    #[test]
    fn test_closed_period_rejects_posting() {
        let err = check_posting_date(&periods(), date(2025, 3, 31)).unwrap_err();
        assert_eq!(
            err,
            FiscalError::PeriodClosed {
                period_id: FiscalPeriodId::new(1),
                period_name: "FY2024".to_string(),
            }
        );
        assert_eq!(err.error_code(), "FISCAL_PERIOD_CLOSED");
    }

    #[test]
    fn test_missing_period_rejects_posting() {
        let err = check_posting_date(&periods(), date(2026, 4, 1)).unwrap_err();
        assert_eq!(err, FiscalError::NoFiscalPeriod(date(2026, 4, 1)));
        assert_eq!(err.to_string(), "No fiscal period covers 2026-04-01");
        assert!(check_posting_date(&[], date(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_fiscal_year_start() {
        let periods = periods();
        assert_eq!(fiscal_year_start(&periods, date(2025, 12, 31)), date(2025, 4, 1));
        assert_eq!(fiscal_year_start(&periods, date(2027, 6, 15)), date(2027, 1, 1));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A date inside an open period is always postable; outside it never is.
        #[test]
        fn prop_posting_follows_containment(offset in -400i64..800i64) {
            let start = date(2025, 4, 1);
            let end = date(2026, 3, 31);
            let open = vec![period(1, 2025, start, end, false)];
            let probe = start + chrono::Duration::days(offset);

            let inside = probe >= start && probe <= end;
            prop_assert_eq!(check_posting_date(&open, probe).is_ok(), inside);
        }
    }
}
