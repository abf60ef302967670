//! Interchangeable shipping cost formulas.
//!
//! Each variant is a linear function of weight and distance plus a flat
//! fee, with a fixed surcharge for night deliveries:
//!
//! | Variant       | Formula                        |
//! |---------------|--------------------------------|
//! | Standard      | `w * 0.50 + d * 0.1`           |
//! | Express       | `w * 0.75 + d * 0.2 + 10`      |
//! | International | `w * 1.00 + d * 0.5 + 15`      |
//!
//! All arithmetic is [`Decimal`]. [`Shipment`] caps weight and distance at
//! [`MAX_AMOUNT`](crate::shipment::MAX_AMOUNT), so no formula can reach the
//! saturation bound and every result is exact.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::DeliveryError;
use crate::shipment::Shipment;

/// Flat amount added to any night delivery.
pub const NIGHT_SURCHARGE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// A cost formula the delivery context can delegate to.
pub trait ShippingStrategy {
    /// Short name for logs and output.
    fn name(&self) -> &'static str;

    /// Price a validated shipment.
    fn compute_cost(&self, shipment: &Shipment) -> Decimal;
}

/// Per-unit rates of one linear formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rates {
    per_kg: Decimal,
    per_km: Decimal,
    base_fee: Decimal,
}

impl Rates {
    fn price(self, shipment: &Shipment) -> Decimal {
        let cost = shipment
            .weight()
            .saturating_mul(self.per_kg)
            .saturating_add(shipment.distance().saturating_mul(self.per_km))
            .saturating_add(self.base_fee);
        if shipment.is_night() {
            cost.saturating_add(NIGHT_SURCHARGE)
        } else {
            cost
        }
    }
}

/// Ground shipping: cheapest, no base fee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardShipping;

impl StandardShipping {
    const RATES: Rates = Rates {
        per_kg: Decimal::from_parts(5, 0, 0, false, 1),
        per_km: Decimal::from_parts(1, 0, 0, false, 1),
        base_fee: Decimal::ZERO,
    };
}

impl ShippingStrategy for StandardShipping {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn compute_cost(&self, shipment: &Shipment) -> Decimal {
        Self::RATES.price(shipment)
    }
}

/// Express shipping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpressShipping;

impl ExpressShipping {
    const RATES: Rates = Rates {
        per_kg: Decimal::from_parts(75, 0, 0, false, 2),
        per_km: Decimal::from_parts(2, 0, 0, false, 1),
        base_fee: Decimal::from_parts(10, 0, 0, false, 0),
    };
}

impl ShippingStrategy for ExpressShipping {
    fn name(&self) -> &'static str {
        "express"
    }

    fn compute_cost(&self, shipment: &Shipment) -> Decimal {
        Self::RATES.price(shipment)
    }
}

/// Cross-border shipping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternationalShipping;

impl InternationalShipping {
    const RATES: Rates = Rates {
        per_kg: Decimal::ONE,
        per_km: Decimal::from_parts(5, 0, 0, false, 1),
        base_fee: Decimal::from_parts(15, 0, 0, false, 0),
    };
}

impl ShippingStrategy for InternationalShipping {
    fn name(&self) -> &'static str {
        "international"
    }

    fn compute_cost(&self, shipment: &Shipment) -> Decimal {
        Self::RATES.price(shipment)
    }
}

/// Console selector for a shipping variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShippingType {
    /// [`StandardShipping`], selector `1`.
    Standard,
    /// [`ExpressShipping`], selector `2`.
    Express,
    /// [`InternationalShipping`], selector `3`.
    International,
}

impl ShippingType {
    /// All variants in menu order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::International];

    /// Menu number for this variant.
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Express => 2,
            Self::International => 3,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Express => "Express",
            Self::International => "International",
        }
    }

    /// A fresh strategy instance for this variant.
    pub fn strategy(self) -> Box<dyn ShippingStrategy> {
        match self {
            Self::Standard => Box::new(StandardShipping),
            Self::Express => Box::new(ExpressShipping),
            Self::International => Box::new(InternationalShipping),
        }
    }
}

impl FromStr for ShippingType {
    type Err = DeliveryError;

    /// Accepts the menu number or the variant name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "standard" => Ok(Self::Standard),
            "2" | "express" => Ok(Self::Express),
            "3" | "international" => Ok(Self::International),
            _ => Err(DeliveryError::UnknownShippingType(s.trim().to_owned())),
        }
    }
}

impl core::fmt::Display for ShippingType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
