//! Error types for the delivery-cost calculator.
//!
//! Every failure is user-facing: the session reports it and stops. None
//! of them are retried.

use rust_decimal::Decimal;

/// Errors that can occur while collecting input or computing a cost.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// A numeric field did not parse as a decimal number.
    #[error("invalid {field}: {input:?} is not a number ({source})")]
    InvalidNumber {
        /// Which input was being read.
        field: &'static str,
        /// The raw text that failed to parse.
        input: String,
        /// The underlying decimal parse error.
        source: rust_decimal::Error,
    },

    /// Weight or distance was below zero.
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount {
        /// Which input was negative.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// Weight or distance exceeded the largest accepted amount.
    #[error("{field} must not exceed {max}, got {value}")]
    AmountTooLarge {
        /// Which input was too large.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
        /// The largest accepted value.
        max: Decimal,
    },

    /// The shipping selector matched no known variant.
    #[error("unknown shipping type: {0:?}")]
    UnknownShippingType(String),

    /// The night-delivery answer was not a recognised yes/no.
    #[error("invalid night delivery answer: {0:?}")]
    InvalidNightFlag(String),

    /// A cost was requested before any strategy was configured.
    #[error("no shipping strategy selected")]
    NoStrategySelected,

    /// Input ended before the named field could be read.
    #[error("unexpected end of input while reading {field}")]
    UnexpectedEof {
        /// The field that was being read.
        field: &'static str,
    },

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
