use crate::carriers::CarrierApi;
use crate::domain::{CarrierId, TrackingResult};
use crate::error::Result;

/// Stand-in carrier for identifiers the registry does not know. Its result
/// is always a "Not Found" business outcome, never a failure.
pub struct UnknownCarrierApi;

impl UnknownCarrierApi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnknownCarrierApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CarrierApi for UnknownCarrierApi {
    fn carrier_id(&self) -> CarrierId {
        CarrierId::Unknown
    }

    fn carrier_name(&self) -> &'static str {
        "Unknown Carrier"
    }

    async fn track(&self, tracking_number: &str) -> Result<TrackingResult> {
        Ok(TrackingResult {
            carrier: "Unknown".to_string(),
            tracking_number: tracking_number.to_string(),
            status: "Not Found".to_string(),
            estimated_delivery: None,
            events: None,
            error: Some(
                "Could not identify carrier pattern or tracking number not found.".to_string(),
            ),
        })
    }
}
