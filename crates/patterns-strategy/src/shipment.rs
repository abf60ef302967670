//! Validated shipment parameters.
//!
//! Out-of-range inputs are rejected here, before any strategy sees them,
//! so every [`ShippingStrategy`](crate::strategy::ShippingStrategy) may
//! assume weight and distance lie in `0..=MAX_AMOUNT`.

use rust_decimal::Decimal;

use crate::error::DeliveryError;

/// Largest accepted weight or distance (one trillion).
///
/// Every formula stays below `2 * MAX_AMOUNT + 25`, far inside the range of
/// [`Decimal`], so pricing never overflows and printed costs can always be
/// padded to the configured scale.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// The inputs every shipping strategy prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shipment {
    weight: Decimal,
    distance: Decimal,
    night: bool,
}

impl Shipment {
    /// Build a shipment, rejecting out-of-range weight or distance.
    ///
    /// Weight is checked first.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::NegativeAmount`] or
    /// [`DeliveryError::AmountTooLarge`] naming the first bad field.
    pub fn new(weight: Decimal, distance: Decimal, night: bool) -> Result<Self, DeliveryError> {
        let weight = checked_amount("weight", weight)?;
        let distance = checked_amount("distance", distance)?;
        Ok(Self {
            weight,
            distance,
            night,
        })
    }

    /// Parcel weight in kilograms.
    pub const fn weight(&self) -> Decimal {
        self.weight
    }

    /// Delivery distance in kilometres.
    pub const fn distance(&self) -> Decimal {
        self.distance
    }

    /// Whether the delivery happens at night.
    pub const fn is_night(&self) -> bool {
        self.night
    }
}

/// Reject an amount below zero or above [`MAX_AMOUNT`] for the named field.
pub(crate) fn checked_amount(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, DeliveryError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DeliveryError::NegativeAmount { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(DeliveryError::AmountTooLarge {
            field,
            value,
            max: MAX_AMOUNT,
        });
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn accepts_zero_and_positive_amounts() {
        let s = Shipment::new(dec!(0), dec!(12.5), true).unwrap();
        assert_eq!(s.weight(), Decimal::ZERO);
        assert_eq!(s.distance(), dec!(12.5));
        assert!(s.is_night());
    }

    #[test]
    fn negative_zero_is_not_negative() {
        assert!(Shipment::new(-Decimal::ZERO, -Decimal::ZERO, false).is_ok());
    }

    #[test]
    fn rejects_negative_weight_first() {
        let err = Shipment::new(dec!(-1), dec!(-5), false).unwrap_err();
        assert!(matches!(
            err,
            DeliveryError::NegativeAmount { field: "weight", .. }
        ));
    }

    #[test]
    fn rejects_negative_distance() {
        let err = Shipment::new(dec!(1), dec!(-0.1), false).unwrap_err();
        match err {
            DeliveryError::NegativeAmount { field, value } => {
                assert_eq!(field, "distance");
                assert_eq!(value, dec!(-0.1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn max_amount_is_one_trillion() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000));
    }

    #[test]
    fn accepts_amounts_up_to_the_limit() {
        let s = Shipment::new(MAX_AMOUNT, MAX_AMOUNT, true).unwrap();
        assert_eq!(s.weight(), MAX_AMOUNT);
        assert_eq!(s.distance(), MAX_AMOUNT);
    }

    #[test]
    fn rejects_amounts_beyond_the_limit() {
        for (weight, distance, field) in [
            (Decimal::MAX, Decimal::MAX, "weight"),
            (dec!(1000000000000.01), dec!(1), "weight"),
            (dec!(1), Decimal::MAX, "distance"),
        ] {
            match Shipment::new(weight, distance, false).unwrap_err() {
                DeliveryError::AmountTooLarge {
                    field: got,
                    value,
                    max,
                } => {
                    assert_eq!(got, field);
                    assert!(value > max);
                    assert_eq!(max, MAX_AMOUNT);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
