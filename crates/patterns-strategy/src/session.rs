//! One interactive quoting session.
//!
//! Reads four answers in order (shipping type, weight, distance, night
//! flag), validating each as soon as it is read, then prices the
//! shipment through a [`DeliveryContext`]. The first bad answer ends the
//! session with its error; nothing is re-prompted.

use std::io::{BufRead, Write};

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use crate::config::DeliveryConfig;
use crate::context::DeliveryContext;
use crate::error::DeliveryError;
use crate::input::{parse_amount, parse_night_flag, parse_shipping_type};
use crate::shipment::Shipment;
use crate::strategy::ShippingType;

/// The result of a successful session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// The selected shipping variant.
    pub shipping: ShippingType,
    /// The validated inputs.
    pub shipment: Shipment,
    /// The exact, unrounded cost.
    pub cost: Decimal,
}

/// Prompt for, validate and price one shipment.
///
/// # Errors
///
/// Returns the first validation failure, [`DeliveryError::UnexpectedEof`]
/// if input ends early, or [`DeliveryError::Io`] if reading or writing
/// fails.
pub fn run_session<R, W>(
    input: &mut R,
    output: &mut W,
    config: &DeliveryConfig,
) -> Result<Quote, DeliveryError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Select shipping type:")?;
    for kind in ShippingType::ALL {
        writeln!(output, "  {}. {kind}", kind.menu_number())?;
    }
    let selector_prompt = config
        .default_shipping
        .map_or_else(|| "> ".to_owned(), |default| format!("[{default}] > "));
    let shipping = parse_shipping_type(
        &prompt(input, output, "shipping type", &selector_prompt)?,
        config.default_shipping,
    )?;

    let weight = parse_amount("weight", &prompt(input, output, "weight", "Weight (kg): ")?)?;
    let distance = parse_amount(
        "distance",
        &prompt(input, output, "distance", "Distance (km): ")?,
    )?;
    let night = parse_night_flag(&prompt(
        input,
        output,
        "night delivery",
        "Night delivery? (y/n): ",
    )?)?;

    let shipment = Shipment::new(weight, distance, night)?;
    let mut context = DeliveryContext::new();
    context.set_strategy(shipping.strategy());
    let cost = context.compute_cost(&shipment)?;

    writeln!(
        output,
        "Delivery cost: {}",
        format_cost(cost, config.price_scale)
    )?;
    info!(shipping = %shipping, cost = %cost, "Quote produced");

    Ok(Quote {
        shipping,
        shipment,
        cost,
    })
}

/// Render `cost` with exactly `scale` decimal places, rounding half away
/// from zero.
pub fn format_cost(cost: Decimal, scale: u32) -> String {
    let mut rounded = cost.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded.to_string()
}

/// Write `text`, flush, and read one line for `field`.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    text: &str,
) -> Result<String, DeliveryError> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DeliveryError::UnexpectedEof { field });
    }
    Ok(line)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_cost_pads_and_rounds() {
        assert_eq!(format_cost(dec!(7), 2), "7.00");
        assert_eq!(format_cost(dec!(21.5), 2), "21.50");
        assert_eq!(format_cost(dec!(0.125), 2), "0.13");
        assert_eq!(format_cost(dec!(35.0), 0), "35");
    }

    #[test]
    fn format_cost_pads_the_largest_cost() {
        assert_eq!(format_cost(dec!(1500000000025), 2), "1500000000025.00");
        assert_eq!(
            format_cost(dec!(1500000000025), 15),
            "1500000000025.000000000000000"
        );
    }

    #[test]
    fn eof_names_the_missing_field() {
        let mut input: &[u8] = b"1\n10\n";
        let mut output = Vec::new();
        let err = run_session(&mut input, &mut output, &DeliveryConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            DeliveryError::UnexpectedEof { field: "distance" }
        ));
    }
}
