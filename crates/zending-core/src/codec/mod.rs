//! Bidirectional mapping between consignment records and the carrier's
//! nested wire payload.

mod decode;
mod encode;
pub mod wire;

pub use decode::decode;
pub use encode::encode;

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use crate::models::consignment::{Consignment, DeliveryType};

    use super::*;

    #[test]
    fn test_domestic_round_trip() {
        let original = Consignment {
            reference_id: Some("order-1203".to_string()),
            country: Some("NL".to_string()),
            company: Some("Bloemen BV".to_string()),
            person: Some("J. Jansen".to_string()),
            postal_code: Some("2132WT".to_string()),
            city: Some("Hoofddorp".to_string()),
            email: Some("j.jansen@example.org".to_string()),
            phone: Some("0612345678".to_string()),
            street: Some("Hoofdstraat".to_string()),
            number: Some("12".to_string()),
            number_suffix: Some("a".to_string()),
            package_type: Some(1),
            label_description: Some("Order 1203".to_string()),
            delivery_type: DeliveryType::Morning,
            delivery_date: Some(
                NaiveDate::from_ymd_opt(2026, 8, 10)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            ),
            insurance: Some(Decimal::new(25, 1)),
            ..Consignment::default()
        };

        let payload = encode(&original).unwrap();
        let decoded = decode(Consignment::new(), &payload).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_round_trip_survives_the_json_wire() {
        let original = Consignment {
            country: Some("NL".to_string()),
            person: Some("J. Jansen".to_string()),
            postal_code: Some("2132WT".to_string()),
            city: Some("Hoofddorp".to_string()),
            email: Some("j.jansen@example.org".to_string()),
            phone: Some("0612345678".to_string()),
            street: Some("Dam".to_string()),
            number: Some("5".to_string()),
            number_suffix: Some(String::new()),
            package_type: Some(2),
            insurance: Some(Decimal::new(50, 0)),
            ..Consignment::default()
        };

        let json = encode(&original).unwrap().to_json().unwrap();
        let payload = wire::ShipmentPayload::from_json(&json).unwrap();
        let decoded = decode(Consignment::new(), &payload).unwrap();

        assert_eq!(decoded, original);
    }
}
