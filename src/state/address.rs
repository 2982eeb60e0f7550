//! Lookup service record.

use serde::Deserialize;

/// Location and organization metadata returned by the lookup service.
///
/// Missing fields decode to the empty string and unknown fields are ignored,
/// so partial responses (e.g. bogon addresses) still render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddressInformation {
    /// The address the record describes.
    pub ip: String,
    pub city: String,
    pub region: String,
    /// Two-letter country code.
    pub country: String,
    /// Free-form diagnostic text from the service.
    pub log: String,
    /// Autonomous system and organization, e.g. `AS15169 Google LLC`.
    pub org: String,
    pub postal: String,
    pub timezone: String,
}
