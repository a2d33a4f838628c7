use crate::carriers::{AusPostApi, CarrierApi, FedExApi, UnknownCarrierApi};
use crate::domain::CarrierId;
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable carrier table, built once at startup and shared by `Arc`.
/// Lookup is total: unregistered identifiers resolve to the Unknown carrier.
pub struct CarrierRegistry {
    carriers: HashMap<CarrierId, Arc<dyn CarrierApi>>,
    unknown: Arc<dyn CarrierApi>,
}

impl CarrierRegistry {
    /// Default wiring: the mock AusPost and FedEx carriers.
    pub fn new() -> Self {
        let carriers: Vec<Arc<dyn CarrierApi>> =
            vec![Arc::new(AusPostApi::new()), Arc::new(FedExApi::new())];
        Self::with_carriers(carriers)
    }

    /// Builds a registry from an explicit carrier set, keyed by each
    /// carrier's own identifier. Identifiers outside the set still resolve
    /// to the Unknown carrier.
    pub fn with_carriers(list: Vec<Arc<dyn CarrierApi>>) -> Self {
        let mut carriers: HashMap<CarrierId, Arc<dyn CarrierApi>> = HashMap::new();
        for carrier in list {
            carriers.insert(carrier.carrier_id(), carrier);
        }

        Self {
            carriers,
            unknown: Arc::new(UnknownCarrierApi::new()),
        }
    }

    /// Returns the registered carrier for `id`, or the Unknown carrier when
    /// `id` is not in the table. Never fails.
    pub fn resolve(&self, id: CarrierId) -> Arc<dyn CarrierApi> {
        self.carriers
            .get(&id)
            .cloned()
            .unwrap_or_else(|| self.unknown.clone())
    }
}

impl Default for CarrierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_carriers() {
        let registry = CarrierRegistry::new();
        assert_eq!(
            registry.resolve(CarrierId::AusPost).carrier_name(),
            "Australia Post"
        );
        assert_eq!(registry.resolve(CarrierId::FedEx).carrier_name(), "FedEx");
    }

    #[test]
    fn unregistered_identifier_resolves_to_unknown() {
        let registry = CarrierRegistry::new();
        let carrier = registry.resolve(CarrierId::Unknown);
        assert_eq!(carrier.carrier_name(), "Unknown Carrier");

        // Malformed keys funnel through the same path.
        let carrier = registry.resolve(CarrierId::parse("DHL"));
        assert_eq!(carrier.carrier_id(), CarrierId::Unknown);
    }

    #[test]
    fn empty_carrier_set_resolves_everything_to_unknown() {
        let registry = CarrierRegistry::with_carriers(Vec::new());
        assert_eq!(
            registry.resolve(CarrierId::AusPost).carrier_id(),
            CarrierId::Unknown
        );
        assert_eq!(
            registry.resolve(CarrierId::FedEx).carrier_id(),
            CarrierId::Unknown
        );
    }

    #[tokio::test]
    async fn unknown_carrier_tracks_to_not_found_without_failing() {
        let registry = CarrierRegistry::new();
        let result = registry
            .resolve(CarrierId::Unknown)
            .track("whatever")
            .await
            .unwrap();

        assert_eq!(result.status, "Not Found");
        assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert!(result.events.is_none());
        assert!(result.estimated_delivery.is_none());
    }
}
