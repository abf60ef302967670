//! Strategy pattern demo: a delivery-cost calculator that delegates to
//! one of several interchangeable shipping formulas.
//!
//! # Modules
//!
//! - [`strategy`] -- The [`ShippingStrategy`] trait, its three variants
//!   and the [`ShippingType`] selector.
//! - [`context`] -- [`DeliveryContext`], which holds the active strategy.
//! - [`shipment`] -- [`Shipment`], validated weight/distance/night inputs.
//! - [`input`] -- Parsers for raw console answers.
//! - [`session`] -- One prompt-validate-price console session.
//! - [`config`] -- Environment configuration.
//! - [`error`] -- Error types.
//!
//! [`ShippingStrategy`]: strategy::ShippingStrategy
//! [`ShippingType`]: strategy::ShippingType
//! [`DeliveryContext`]: context::DeliveryContext
//! [`Shipment`]: shipment::Shipment

pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod session;
pub mod shipment;
pub mod strategy;

// Re-export primary types at crate root.
pub use config::DeliveryConfig;
pub use context::DeliveryContext;
pub use error::DeliveryError;
pub use session::{Quote, run_session};
pub use shipment::{MAX_AMOUNT, Shipment};
pub use strategy::{
    ExpressShipping, InternationalShipping, NIGHT_SURCHARGE, ShippingStrategy, ShippingType,
    StandardShipping,
};
