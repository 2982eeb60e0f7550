//! Data types shared by the reporters.

mod address;
mod interface;

pub use address::AddressInformation;
pub use interface::{AddressFamily, InterfaceAddress, InterfaceFilter, InterfaceSummary};
