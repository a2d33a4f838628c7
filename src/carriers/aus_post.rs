use crate::carriers::CarrierApi;
use crate::domain::{CarrierId, TrackingEvent, TrackingResult};
use crate::error::Result;
use chrono::{NaiveDate, NaiveDateTime};

/// Australia Post tracking backed by canned data.
///
/// A real integration would call the AusPost shipment API with credentialed
/// headers; this mock resolves immediately with a fixed in-transit timeline.
pub struct AusPostApi;

impl AusPostApi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AusPostApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CarrierApi for AusPostApi {
    fn carrier_id(&self) -> CarrierId {
        CarrierId::AusPost
    }

    fn carrier_name(&self) -> &'static str {
        "Australia Post"
    }

    async fn track(&self, tracking_number: &str) -> Result<TrackingResult> {
        Ok(TrackingResult {
            carrier: self.carrier_name().to_string(),
            tracking_number: tracking_number.to_string(),
            status: "In Transit".to_string(),
            estimated_delivery: NaiveDate::from_ymd_opt(2026, 2, 18),
            events: Some(vec![
                TrackingEvent {
                    time: timestamp(2026, 2, 14, 9, 0),
                    description: "Picked up by driver".to_string(),
                    location: "Sydney, NSW".to_string(),
                },
                TrackingEvent {
                    time: timestamp(2026, 2, 13, 15, 30),
                    description: "Processed at facility".to_string(),
                    location: "Chullora, NSW".to_string(),
                },
            ]),
            error: None,
        })
    }
}

pub(crate) fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}
