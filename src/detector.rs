use crate::domain::CarrierId;
use once_cell::sync::Lazy;
use regex::Regex;

// Approximations of real carrier formats, tested in priority order.
static AUSPOST_POSTAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(EM|CP|VV)[A-Z0-9]+AU$").unwrap());
static AUSPOST_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{20,22}$").unwrap());
static FEDEX_12_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
static FEDEX_15_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{15}$").unwrap());

/// Classifies a tracking number to a carrier from its format alone.
///
/// Total over all inputs: anything unrecognized falls back to Australia Post
/// rather than reporting "undetected" (demo policy; the registry still owns
/// the Unknown carrier for unregistered identifiers).
pub fn detect_carrier(tracking_number: &str) -> CarrierId {
    if AUSPOST_POSTAL.is_match(tracking_number) || AUSPOST_NUMERIC.is_match(tracking_number) {
        return CarrierId::AusPost;
    }
    if FEDEX_12_DIGIT.is_match(tracking_number) || FEDEX_15_DIGIT.is_match(tracking_number) {
        return CarrierId::FedEx;
    }
    // Fallback/Default
    CarrierId::AusPost
}
