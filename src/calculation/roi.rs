//! Return-on-investment metrics for the service fee.

use rust_decimal::Decimal;

use crate::models::Roi;

use super::rounding::{round_currency, round_to_tenths};

/// Days in a year, used for payback.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Computes ROI metrics for a credit against the service cost.
///
/// - `net_benefit` is the credit minus the cost.
/// - `roi_multiple` is credit / cost to one decimal place, or 0 when the
///   service is free.
/// - `payback_days` is 365 / `roi_multiple` rounded to whole days, or 0 when
///   the service is free. When the multiple rounds to 0 there is no finite
///   payback and it is `None`.
///
/// # Examples
///
/// ```
/// use rd_credit_engine::calculation::compute_roi;
/// use rust_decimal::Decimal;
///
/// let roi = compute_roi(Decimal::from(21_700), Decimal::from(2_500));
/// assert_eq!(roi.net_benefit, Decimal::from(19_200));
/// assert_eq!(roi.roi_multiple, Decimal::new(87, 1));
/// assert_eq!(roi.payback_days, Some(Decimal::from(42)));
///
/// let roi = compute_roi(Decimal::from(10), Decimal::from(750));
/// assert_eq!(roi.roi_multiple, Decimal::ZERO);
/// assert_eq!(roi.payback_days, None);
/// ```
pub fn compute_roi(credit_amount: Decimal, service_cost: Decimal) -> Roi {
    let net_benefit = credit_amount - service_cost;

    if service_cost <= Decimal::ZERO {
        return Roi {
            net_benefit,
            roi_multiple: Decimal::ZERO,
            payback_days: Some(Decimal::ZERO),
        };
    }

    // A near-zero fee can push the ratio past the representable range.
    let roi_multiple =
        round_to_tenths(credit_amount.checked_div(service_cost).unwrap_or(Decimal::MAX));
    let payback_days = if roi_multiple > Decimal::ZERO {
        Some(round_currency(DAYS_PER_YEAR / roi_multiple))
    } else {
        None
    };

    Roi {
        net_benefit,
        roi_multiple,
        payback_days,
    }
}
