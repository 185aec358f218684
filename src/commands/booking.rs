//! Booking Commands

use campus_core::Resource;

use super::latency;
use crate::config::delays;

/// Ask to book `resource`. Only available resources can be requested.
pub async fn request_booking(resource: Resource) -> Result<Resource, String> {
    if !resource.is_bookable() {
        return Err(format!("{} is {}", resource.name, resource.status.label().to_lowercase()));
    }
    latency(delays::BOOKING_MS).await;
    log::info!("[BOOKING] requested {} ({})", resource.name, resource.id);
    Ok(resource)
}
