use crate::domain::{CarrierId, TrackingResult};
use crate::error::Result;

pub mod aus_post;
pub mod fed_ex;
pub mod unknown;

pub use aus_post::AusPostApi;
pub use fed_ex::FedExApi;
pub use unknown::UnknownCarrierApi;

/// Carrier-facing boundary. Mock and real integrations both satisfy this
/// contract, so the detector and handler never care which one is wired in.
#[async_trait::async_trait]
pub trait CarrierApi: Send + Sync {
    /// Registry identifier for this carrier
    fn carrier_id(&self) -> CarrierId;

    /// Display name shown in tracking results
    fn carrier_name(&self) -> &'static str;

    /// Look up a shipment by tracking number
    async fn track(&self, tracking_number: &str) -> Result<TrackingResult>;
}
