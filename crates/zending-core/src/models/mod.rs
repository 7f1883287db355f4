//! Data models for consignments and country tables.

pub mod consignment;
pub mod countries;

pub use consignment::{AddressFormat, Consignment, DeliveryType};
pub use countries::{is_eu_country, EU_COUNTRIES};
