use crate::carriers::aus_post::timestamp;
use crate::carriers::CarrierApi;
use crate::domain::{CarrierId, TrackingEvent, TrackingResult};
use crate::error::Result;
use chrono::NaiveDate;

/// FedEx tracking backed by canned data: a shipment already delivered.
pub struct FedExApi;

impl FedExApi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FedExApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CarrierApi for FedExApi {
    fn carrier_id(&self) -> CarrierId {
        CarrierId::FedEx
    }

    fn carrier_name(&self) -> &'static str {
        "FedEx"
    }

    async fn track(&self, tracking_number: &str) -> Result<TrackingResult> {
        Ok(TrackingResult {
            carrier: self.carrier_name().to_string(),
            tracking_number: tracking_number.to_string(),
            status: "Delivered".to_string(),
            estimated_delivery: NaiveDate::from_ymd_opt(2026, 2, 10),
            events: Some(vec![
                TrackingEvent {
                    time: timestamp(2026, 2, 10, 14, 20),
                    description: "Delivered".to_string(),
                    location: "Melbourne, VIC".to_string(),
                },
                TrackingEvent {
                    time: timestamp(2026, 2, 9, 8, 45),
                    description: "On vehicle for delivery".to_string(),
                    location: "Melbourne, VIC".to_string(),
                },
            ]),
            error: None,
        })
    }
}
