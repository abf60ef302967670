//! Configuration for the delivery-cost calculator.
//!
//! All configuration is loaded from environment variables and every
//! variable is optional.

use crate::error::DeliveryError;
use crate::strategy::ShippingType;

/// Most decimal places a cost can be printed with.
///
/// The largest possible cost has 13 integer digits, and a
/// [`rust_decimal::Decimal`] holds 28 significant digits.
const MAX_PRICE_SCALE: u32 = 15;

/// Complete calculator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Shipping type used when the selector answer is blank.
    pub default_shipping: Option<ShippingType>,
    /// Decimal places shown when printing a cost.
    pub price_scale: u32,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            default_shipping: None,
            price_scale: 2,
        }
    }
}

impl DeliveryConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `DELIVERY_DEFAULT_SHIPPING` -- selector used on a blank answer
    ///   (`1`/`standard`, `2`/`express`, `3`/`international`)
    /// - `DELIVERY_PRICE_SCALE` -- decimal places in printed costs (default 2)
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Config`] if a variable is set to an
    /// invalid value.
    pub fn from_env() -> Result<Self, DeliveryError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DeliveryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_shipping = match lookup("DELIVERY_DEFAULT_SHIPPING") {
            Some(raw) if !raw.trim().is_empty() => Some(raw.parse::<ShippingType>().map_err(
                |e| DeliveryError::Config(format!("invalid DELIVERY_DEFAULT_SHIPPING: {e}")),
            )?),
            _ => None,
        };

        let price_scale: u32 = lookup("DELIVERY_PRICE_SCALE")
            .unwrap_or_else(|| "2".to_owned())
            .trim()
            .parse()
            .map_err(|e| DeliveryError::Config(format!("invalid DELIVERY_PRICE_SCALE: {e}")))?;
        if price_scale > MAX_PRICE_SCALE {
            return Err(DeliveryError::Config(format!(
                "invalid DELIVERY_PRICE_SCALE: {price_scale} exceeds {MAX_PRICE_SCALE}"
            )));
        }

        Ok(Self {
            default_shipping,
            price_scale,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DeliveryConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DeliveryConfig::default());
    }

    #[test]
    fn reads_both_variables() {
        let config = DeliveryConfig::from_lookup(lookup_from(&[
            ("DELIVERY_DEFAULT_SHIPPING", "express"),
            ("DELIVERY_PRICE_SCALE", "3"),
        ]))
        .unwrap();
        assert_eq!(config.default_shipping, Some(ShippingType::Express));
        assert_eq!(config.price_scale, 3);
    }

    #[test]
    fn blank_default_shipping_is_none() {
        let config =
            DeliveryConfig::from_lookup(lookup_from(&[("DELIVERY_DEFAULT_SHIPPING", " ")]))
                .unwrap();
        assert!(config.default_shipping.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        for pairs in [
            [("DELIVERY_DEFAULT_SHIPPING", "teleport")],
            [("DELIVERY_PRICE_SCALE", "two")],
            [("DELIVERY_PRICE_SCALE", "16")],
        ] {
            assert!(matches!(
                DeliveryConfig::from_lookup(lookup_from(&pairs)),
                Err(DeliveryError::Config(_))
            ));
        }
    }
}
