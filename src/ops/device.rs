//! Show which NetBox device the local host maps to.

use crate::errors::AppResult;
use crate::netbox::{NetboxClient, Transport};

/// The local host's NetBox identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Device name looked up (the local hostname)
    pub hostname: String,
    /// NetBox id of the device with that name
    pub device_id: u64,
}

/// Resolves `hostname` to its NetBox device id.
pub fn device_info<T: Transport>(
    client: &NetboxClient<T>,
    hostname: &str,
) -> AppResult<DeviceInfo> {
    let device_id = client.device_id_by_name(hostname)?;
    Ok(DeviceInfo {
        hostname: hostname.to_string(),
        device_id,
    })
}
