//! Consignment modeling and wire codec for the PostNL parcel API.
//!
//! This crate provides:
//! - Street-line splitting for Dutch addresses (street name, house number,
//!   suffix) and its inverse
//! - Bidirectional encoding between consignment records and the carrier's
//!   nested JSON payload, including customs declarations for non-EU
//!   destinations
//! - Mappings from checkout-session data onto a consignment
//!
//! Everything here is a pure transformation over owned values; transport,
//! persistence and UI concerns live with the caller.

pub mod address;
pub mod checkout;
pub mod codec;
pub mod error;
pub mod models;

pub use address::StreetParts;
pub use checkout::{delivery_type_from_checkout, CheckoutSelection};
pub use codec::wire::ShipmentPayload;
pub use codec::{decode, encode};
pub use error::{
    AddressError, CheckoutError, DecodeError, EncodeError, Result, ZendingError,
};
pub use models::consignment::{AddressFormat, Consignment, DeliveryType};
pub use models::countries::{is_eu_country, EU_COUNTRIES};
