//! Reporter logic: HTTP access, interface enumeration, and lookups.

pub mod http;
pub mod interfaces;
pub mod lookup;
pub mod public_ip;
