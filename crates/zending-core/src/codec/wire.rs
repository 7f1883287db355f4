//! Typed wire shapes for the carrier API.
//!
//! Field names match the API's snake_case keys exactly; optional fields are
//! left off the wire entirely rather than sent as `null`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// A consignment as it travels to and from the carrier API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentPayload {
    /// Consignment id, assigned by the carrier in responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ShipmentOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<WirePickup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_declaration: Option<CustomsDeclaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_properties: Option<PhysicalProperties>,
}

impl ShipmentPayload {
    /// Serialize to the JSON document the API expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse an API response body.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The `recipient` group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_suffix: Option<String>,

    // Responses report the delivery flags under the recipient group, even
    // though requests send them under options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_recipient: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<u8>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_shipment: Option<u8>,
}

/// The `options` group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_format: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_recipient: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<u8>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_shipment: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<u8>,
    #[serde(default, with = "wire_date", skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Price>,
}

/// An amount in minor units with its currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: i64,
    pub currency: String,
}

impl Price {
    /// A euro price from an amount in cents.
    pub fn eur(amount: i64) -> Self {
        Self {
            amount,
            currency: "EUR".to_string(),
        }
    }
}

/// The `pickup` group.
///
/// Requests carry the bare keys; responses repeat the fields under
/// `pickup_`-prefixed keys. Both families are modeled so neither direction
/// loses data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WirePickup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location_name: Option<String>,
}

/// The `customs_declaration` group, required outside the EU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomsDeclaration {
    /// Contents category code; `1` is merchandise.
    pub contents: u8,
    /// Declared weight in whole grams.
    pub weight: u32,
    pub items: Vec<CustomsItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,
}

/// A single line on the customs declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomsItem {
    pub description: String,
    pub amount: u32,
    /// Item weight in whole grams.
    pub weight: u32,
    /// Harmonized-system classification code.
    pub classification: String,
    /// Country of origin.
    pub country: String,
    pub item_value: Price,
}

/// The `physical_properties` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalProperties {
    /// Weight in whole grams.
    pub weight: u32,
}

/// Serde helpers for the carrier's `"YYYY-MM-DD HH:MM:SS"` timestamps.
mod wire_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => NaiveDateTime::parse_from_str(&value, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_optional_keys_stay_off_the_wire() {
        let payload = ShipmentPayload {
            recipient: Some(Recipient::default()),
            options: Some(ShipmentOptions::default()),
            carrier: Some(1),
            ..ShipmentPayload::default()
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "recipient": {"city": "", "email": "", "phone": ""},
                "options": {},
                "carrier": 1,
            })
        );
    }

    #[test]
    fn test_return_key_is_renamed() {
        let options = ShipmentOptions {
            return_shipment: Some(1),
            ..ShipmentOptions::default()
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({"return": 1}));
    }

    #[test]
    fn test_delivery_date_wire_format() {
        let options = ShipmentOptions {
            delivery_date: Some(
                NaiveDate::from_ymd_opt(2026, 8, 5)
                    .unwrap()
                    .and_hms_opt(16, 30, 0)
                    .unwrap(),
            ),
            ..ShipmentOptions::default()
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({"delivery_date": "2026-08-05 16:30:00"}));

        let parsed: ShipmentOptions = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.delivery_date, options.delivery_date);
    }

    #[test]
    fn test_response_json_round_trip() {
        let body = json!({
            "id": 131072,
            "barcode": "3SABCD0123456789",
            "status": 2,
            "recipient": {
                "cc": "NL",
                "person": "J. Jansen",
                "postal_code": "2132WT",
                "street": "Hoofdstraat",
                "number": "12",
                "number_suffix": "a",
                "city": "Hoofddorp",
                "email": "j.jansen@example.org",
                "phone": "0612345678",
            },
            "options": {"package_type": 1, "label_description": "Order 1203"},
            "pickup": null,
        })
        .to_string();

        let payload = ShipmentPayload::from_json(&body).unwrap();
        assert_eq!(payload.id, Some(131072));
        assert_eq!(payload.pickup, None);
        assert_eq!(
            payload.recipient.as_ref().unwrap().number.as_deref(),
            Some("12")
        );

        let reparsed = ShipmentPayload::from_json(&payload.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, payload);
    }
}
