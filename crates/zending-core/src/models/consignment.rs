//! The consignment record and its derived address views.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::address;
use crate::error::AddressError;

/// Country code of domestic consignments, the only ones whose street line
/// is split into separate fields.
pub const DOMESTIC_COUNTRY: &str = "NL";

/// Delivery option for a consignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    /// Morning delivery window.
    Morning,
    /// Regular daytime delivery.
    #[default]
    Standard,
    /// Evening delivery window.
    Night,
    /// Pickup at a retail location.
    Retail,
    /// Early pickup at a retail location.
    RetailExpress,
}

impl DeliveryType {
    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            DeliveryType::Morning => 1,
            DeliveryType::Standard => 2,
            DeliveryType::Night => 3,
            DeliveryType::Retail => 4,
            DeliveryType::RetailExpress => 5,
        }
    }

    /// Parse a wire code back into a delivery type.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(DeliveryType::Morning),
            2 => Some(DeliveryType::Standard),
            3 => Some(DeliveryType::Night),
            4 => Some(DeliveryType::Retail),
            5 => Some(DeliveryType::RetailExpress),
            _ => None,
        }
    }
}

/// How the street line is laid out on the wire, derived once from the
/// country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressFormat {
    /// Domestic consignments carry street name, house number and suffix as
    /// separate fields.
    Structured {
        street: String,
        number: String,
        suffix: String,
    },
    /// Foreign consignments carry a single free-form street line.
    Unstructured(String),
}

/// A parcel consignment.
///
/// Plain data; the codec and checkout modules read and rebuild it, transport
/// and persistence belong to the caller. Operations that derive fields
/// consume the value and return the updated one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Consignment {
    /// Identifier assigned by the carrier, present after booking.
    pub consignment_id: Option<i64>,
    /// Caller's own reference, echoed back by the carrier.
    pub reference_id: Option<String>,
    /// Track & trace barcode, present after booking.
    pub barcode: Option<String>,
    /// Carrier-side status code.
    pub status: Option<i64>,

    /// ISO-3166 alpha-2 destination country.
    pub country: Option<String>,
    pub company: Option<String>,
    pub person: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,

    /// Street name; for domestic consignments the house number lives in
    /// [`Consignment::number`] instead.
    pub street: Option<String>,
    /// House number, digits only.
    pub number: Option<String>,
    /// House number suffix ("a", "2", "bis", ...).
    pub number_suffix: Option<String>,

    /// Carrier package type code; encoded as `2` when unset or zero.
    pub package_type: Option<u32>,
    /// Free text printed on the shipping label.
    pub label_description: Option<String>,
    pub delivery_type: DeliveryType,
    pub delivery_date: Option<NaiveDateTime>,

    pub large_format: bool,
    pub only_recipient: bool,
    pub signature: bool,
    pub return_shipment: bool,

    /// Insured value in euros. Values of one euro or less mean no insurance.
    pub insurance: Option<Decimal>,

    pub pickup_postal_code: Option<String>,
    pub pickup_street: Option<String>,
    pub pickup_city: Option<String>,
    pub pickup_number: Option<String>,
    pub pickup_location_name: Option<String>,
}

impl Consignment {
    /// Create a blank consignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this consignment stays in the carrier's home country.
    pub fn is_domestic(&self) -> bool {
        self.country.as_deref() == Some(DOMESTIC_COUNTRY)
    }

    /// The full street line, recomposed from its parts.
    ///
    /// For consignments that were never split this is simply the stored
    /// street.
    pub fn full_street(&self) -> String {
        address::compose(
            self.street.as_deref().unwrap_or(""),
            self.number.as_deref().unwrap_or(""),
            self.number_suffix.as_deref().unwrap_or(""),
        )
    }

    /// The wire layout of the street line, derived from the country.
    pub fn address_format(&self) -> AddressFormat {
        if self.is_domestic() {
            AddressFormat::Structured {
                street: self.street.clone().unwrap_or_default(),
                number: self.number.clone().unwrap_or_default(),
                suffix: self.number_suffix.clone().unwrap_or_default(),
            }
        } else {
            AddressFormat::Unstructured(self.full_street())
        }
    }

    /// Assign a free-form street line.
    ///
    /// Domestic street lines are split into street, number and suffix;
    /// any other country stores the line verbatim as the street. The
    /// country must be set first, since it decides the layout.
    pub fn with_full_street(mut self, full_street: &str) -> Result<Self, AddressError> {
        if self.country.is_none() {
            return Err(AddressError::MissingCountry);
        }

        if self.is_domestic() {
            let parts = address::split(full_street)?;
            self.street = Some(parts.street);
            self.number = Some(parts.number);
            self.number_suffix = Some(parts.suffix);
        } else {
            self.street = Some(full_street.to_string());
        }
        Ok(self)
    }

    /// Total weight of the consignment in whole grams.
    pub fn total_weight(&self) -> u32 {
        // TODO: sum per-item weights once consignments carry their items
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domestic() -> Consignment {
        Consignment {
            country: Some("NL".to_string()),
            ..Consignment::default()
        }
    }

    #[test]
    fn test_delivery_type_codes() {
        assert_eq!(DeliveryType::Morning.code(), 1);
        assert_eq!(DeliveryType::RetailExpress.code(), 5);
        assert_eq!(DeliveryType::from_code(3), Some(DeliveryType::Night));
        assert_eq!(DeliveryType::from_code(9), None);
        assert_eq!(DeliveryType::default(), DeliveryType::Standard);
    }

    #[test]
    fn test_full_street_requires_country() {
        let err = Consignment::new().with_full_street("Hoofdstraat 12a");
        assert_eq!(err.unwrap_err(), AddressError::MissingCountry);
    }

    #[test]
    fn test_full_street_splits_domestic() {
        let consignment = domestic().with_full_street("Hoofdstraat 12a").unwrap();
        assert_eq!(consignment.street.as_deref(), Some("Hoofdstraat"));
        assert_eq!(consignment.number.as_deref(), Some("12"));
        assert_eq!(consignment.number_suffix.as_deref(), Some("a"));
        assert_eq!(consignment.full_street(), "Hoofdstraat 12a");
    }

    #[test]
    fn test_full_street_kept_verbatim_abroad() {
        let consignment = Consignment {
            country: Some("DE".to_string()),
            ..Consignment::default()
        }
        .with_full_street("Musterstra\u{df}e 12 b")
        .unwrap();
        assert_eq!(consignment.street.as_deref(), Some("Musterstra\u{df}e 12 b"));
        assert_eq!(consignment.number, None);
        assert_eq!(consignment.full_street(), "Musterstra\u{df}e 12 b");
    }

    #[test]
    fn test_address_format_follows_country() {
        let consignment = domestic().with_full_street("Dam 5").unwrap();
        assert_eq!(
            consignment.address_format(),
            AddressFormat::Structured {
                street: "Dam".to_string(),
                number: "5".to_string(),
                suffix: String::new(),
            }
        );

        let consignment = Consignment {
            country: Some("BE".to_string()),
            street: Some("Grote Markt".to_string()),
            number: Some("7".to_string()),
            ..Consignment::default()
        };
        assert_eq!(
            consignment.address_format(),
            AddressFormat::Unstructured("Grote Markt 7".to_string())
        );
    }
}
