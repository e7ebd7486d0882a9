//! Drop Detector
//!
//! Pure comparison of the two most recent observations.

use rust_decimal::Decimal;

use crate::domain::price_monitoring::value_objects::{
    DropAlert, DropSignal, NoSignalReason, PriceObservation,
};
use crate::domain::shared::{CurrencyCode, NormalizedPrice};

/// Alert threshold used when none is configured.
pub const DEFAULT_THRESHOLD_PERCENT: Decimal = Decimal::TEN;

/// Percentage decrease from `previous` to `current`.
///
/// Negative when the price rose. `None` if `previous` is not positive.
#[must_use]
pub fn percent_drop(previous: Decimal, current: Decimal) -> Option<Decimal> {
    if previous <= Decimal::ZERO {
        return None;
    }
    (previous - current)
        .checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

/// Check the latest observations of a subject, newest first.
///
/// Only the first two entries are looked at; fewer than two is
/// [`NoSignalReason::InsufficientHistory`].
#[must_use]
pub fn detect_drop(latest: &[PriceObservation], threshold_percent: Decimal) -> DropSignal {
    match latest {
        [current, previous, ..] => compare_prices(
            previous.price(),
            current.price(),
            current.currency(),
            threshold_percent,
        ),
        _ => DropSignal::NoSignal(NoSignalReason::InsufficientHistory),
    }
}

/// Compare two prices against a threshold.
///
/// Sentinels (zero or negative) never alert. A drop of exactly the
/// threshold alerts.
#[must_use]
pub fn compare_prices(
    previous: NormalizedPrice,
    current: NormalizedPrice,
    currency: CurrencyCode,
    threshold_percent: Decimal,
) -> DropSignal {
    if previous.is_sentinel() || current.is_sentinel() {
        return DropSignal::NoSignal(NoSignalReason::SentinelPrice);
    }
    if current >= previous {
        return DropSignal::NoSignal(NoSignalReason::NoDecrease);
    }

    let Some(discount_percent) = percent_drop(previous.amount(), current.amount()) else {
        return DropSignal::NoSignal(NoSignalReason::SentinelPrice);
    };

    if discount_percent >= threshold_percent {
        DropSignal::Alert(DropAlert {
            previous,
            current,
            savings: previous - current,
            discount_percent,
            currency,
        })
    } else {
        DropSignal::NoSignal(NoSignalReason::BelowThreshold { discount_percent })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{SubjectId, Timestamp};
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    /// Build observations newest first from prices given oldest first.
    fn latest_of(prices: &[Decimal]) -> Vec<PriceObservation> {
        let subject = SubjectId::new("https://shop.example/item").unwrap();
        let start = Utc.with_ymd_and_hms(2026, 1, 19, 12, 0, 0).unwrap();
        let mut observations: Vec<_> = prices
            .iter()
            .enumerate()
            .map(|(i, price)| {
                PriceObservation::new(
                    subject.clone(),
                    NormalizedPrice::new(*price),
                    CurrencyCode::USD,
                    Timestamp::new(start + Duration::hours(i64::try_from(i).unwrap())),
                )
            })
            .collect();
        observations.reverse();
        observations
    }

    #[test]
    fn drop_above_threshold_alerts() {
        let signal = detect_drop(&latest_of(&[dec!(249.99), dec!(199.99)]), dec!(10));

        let alert = signal.alert().unwrap();
        assert_eq!(alert.previous.amount(), dec!(249.99));
        assert_eq!(alert.current.amount(), dec!(199.99));
        assert_eq!(alert.savings.amount(), dec!(50.00));
        assert_eq!(alert.discount_percent.round_dp(1), dec!(20.0));
        assert_eq!(alert.currency, CurrencyCode::USD);
    }

    #[test]
    fn single_observation_is_insufficient() {
        assert_eq!(
            detect_drop(&latest_of(&[dec!(99.99)]), dec!(10)),
            DropSignal::NoSignal(NoSignalReason::InsufficientHistory)
        );
        assert_eq!(
            detect_drop(&[], dec!(10)),
            DropSignal::NoSignal(NoSignalReason::InsufficientHistory)
        );
    }

    #[test]
    fn sentinel_previous_is_ignored() {
        assert_eq!(
            detect_drop(&latest_of(&[dec!(0.00), dec!(50.00)]), dec!(10)),
            DropSignal::NoSignal(NoSignalReason::SentinelPrice)
        );
        assert_eq!(
            detect_drop(&latest_of(&[dec!(50.00), dec!(-1)]), dec!(10)),
            DropSignal::NoSignal(NoSignalReason::SentinelPrice)
        );
    }

    #[test]
    fn unchanged_or_rising_is_no_decrease() {
        assert_eq!(
            detect_drop(&latest_of(&[dec!(100.00), dec!(100.00)]), dec!(10)),
            DropSignal::NoSignal(NoSignalReason::NoDecrease)
        );
        assert_eq!(
            detect_drop(&latest_of(&[dec!(100.00), dec!(120.00)]), dec!(10)),
            DropSignal::NoSignal(NoSignalReason::NoDecrease)
        );
    }

    #[test]
    fn small_drop_is_below_threshold() {
        let signal = detect_drop(&latest_of(&[dec!(100.00), dec!(95.00)]), dec!(10));
        assert_eq!(
            signal,
            DropSignal::NoSignal(NoSignalReason::BelowThreshold {
                discount_percent: dec!(5)
            })
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let signal = detect_drop(&latest_of(&[dec!(100.00), dec!(90.00)]), dec!(10));
        assert!(signal.is_alert());
    }

    #[test]
    fn only_latest_two_count() {
        let signal = detect_drop(&latest_of(&[dec!(500), dec!(100), dec!(99)]), dec!(10));
        assert!(matches!(
            signal,
            DropSignal::NoSignal(NoSignalReason::BelowThreshold { .. })
        ));
    }

    #[test]
    fn percent_drop_guards_zero() {
        assert_eq!(percent_drop(dec!(0), dec!(5)), None);
        assert_eq!(percent_drop(dec!(200), dec!(150)), Some(dec!(25)));
        assert_eq!(percent_drop(dec!(100), dec!(110)), Some(dec!(-10)));
    }
}
