//! The delivery context: holds one active strategy and delegates to it.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::DeliveryError;
use crate::shipment::Shipment;
use crate::strategy::ShippingStrategy;

/// Delegates cost computation to the currently selected strategy.
///
/// Starts with no strategy. Computing a cost before
/// [`set_strategy`](Self::set_strategy) is a precondition failure, not a
/// zero cost.
#[derive(Default)]
pub struct DeliveryContext {
    strategy: Option<Box<dyn ShippingStrategy>>,
}

impl DeliveryContext {
    /// Create a context with no strategy selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active strategy unconditionally.
    pub fn set_strategy(&mut self, strategy: Box<dyn ShippingStrategy>) {
        debug!(
            previous = ?self.strategy_name(),
            strategy = strategy.name(),
            "Shipping strategy selected"
        );
        self.strategy = Some(strategy);
    }

    /// Name of the active strategy, if one is set.
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    /// Price `shipment` with the active strategy.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::NoStrategySelected`] if no strategy has
    /// been set.
    pub fn compute_cost(&self, shipment: &Shipment) -> Result<Decimal, DeliveryError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(DeliveryError::NoStrategySelected)?;
        let cost = strategy.compute_cost(shipment);
        debug!(
            strategy = strategy.name(),
            weight = %shipment.weight(),
            distance = %shipment.distance(),
            night = shipment.is_night(),
            cost = %cost,
            "Delivery cost computed"
        );
        Ok(cost)
    }
}

impl core::fmt::Debug for DeliveryContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeliveryContext")
            .field("strategy", &self.strategy_name())
            .finish()
    }
}
