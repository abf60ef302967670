//! Parsing of the raw console answers.
//!
//! Each parser takes one line of user input and either returns a typed
//! value or the [`DeliveryError`] to report. None of them read or write.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::DeliveryError;
use crate::shipment::checked_amount;
use crate::strategy::ShippingType;

/// Parse the shipping selector, falling back to `default` on a blank line.
///
/// # Errors
///
/// Returns [`DeliveryError::UnknownShippingType`] if the answer matches
/// no variant, or is blank with no default configured.
pub fn parse_shipping_type(
    raw: &str,
    default: Option<ShippingType>,
) -> Result<ShippingType, DeliveryError> {
    match (raw.trim(), default) {
        ("", Some(kind)) => Ok(kind),
        (answer, _) => answer.parse(),
    }
}

/// Parse a decimal amount in `0..=MAX_AMOUNT` for the named field.
///
/// # Errors
///
/// Returns [`DeliveryError::InvalidNumber`] if the text is not a decimal
/// number, [`DeliveryError::NegativeAmount`] if it is below zero, or
/// [`DeliveryError::AmountTooLarge`] if it exceeds
/// [`MAX_AMOUNT`](crate::shipment::MAX_AMOUNT).
pub fn parse_amount(field: &'static str, raw: &str) -> Result<Decimal, DeliveryError> {
    let text = raw.trim();
    let value = Decimal::from_str(text).map_err(|source| DeliveryError::InvalidNumber {
        field,
        input: text.to_owned(),
        source,
    })?;
    checked_amount(field, value)
}

/// Parse a yes/no answer to "night delivery?".
///
/// # Errors
///
/// Returns [`DeliveryError::InvalidNightFlag`] for anything other than
/// `y`, `yes`, `true`, `1`, `n`, `no`, `false` or `0` (case-insensitive).
pub fn parse_night_flag(raw: &str) -> Result<bool, DeliveryError> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(DeliveryError::InvalidNightFlag(raw.trim().to_owned())),
    }
}
