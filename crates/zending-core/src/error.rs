//! Error types for the zending-core library.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the zending library.
#[derive(Error, Debug)]
pub enum ZendingError {
    /// Street-line parsing error.
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    /// Payload encoding error.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Payload decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Checkout-session mapping error.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Errors related to street-line handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The country must be known before a full street can be assigned,
    /// because it decides whether the line is split.
    #[error("set the country before assigning a full street")]
    MissingCountry,

    /// The street line could not be split into street name, house number
    /// and suffix without dropping characters.
    #[error("cannot split street line: {input}")]
    InvalidAddress { input: String },
}

/// Errors related to encoding a consignment for the carrier API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The insured value does not fit the wire's whole-cent amount.
    #[error("insured value cannot be expressed in whole cents: {value}")]
    InsuranceOutOfRange { value: Decimal },
}

/// Errors related to decoding a carrier API response.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A required top-level group is absent from the payload.
    #[error("payload is missing required group: {missing}")]
    MalformedPayload { missing: &'static str },

    /// The response body is not a valid payload document.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to mapping checkout-session data onto a consignment.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// The checkout blob is not valid JSON.
    #[error("checkout data is not valid JSON: {0}")]
    InvalidCheckout(#[from] serde_json::Error),

    /// The checkout date is in a format the carrier does not accept.
    #[error("unrecognized checkout date: {value}")]
    InvalidDeliveryDate { value: String },

    /// A pickup location was selected but the price comment names neither
    /// retail variant.
    #[error("no retail pickup location found in checkout data")]
    MissingPickupLocation,
}

/// Result type for the zending library.
pub type Result<T> = std::result::Result<T, ZendingError>;
