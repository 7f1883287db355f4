//! Encoding a consignment into the carrier's request payload.
//!
//! The payload is built up in four stages, each augmenting the groups the
//! previous stages created without overwriting their keys: base options,
//! street, extra options (with pickup and insurance sub-stages on domestic
//! consignments) and the customs declaration.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EncodeError;
use crate::models::consignment::{AddressFormat, Consignment};
use crate::models::countries::is_eu_country;

use super::wire::{
    CustomsDeclaration, CustomsItem, PhysicalProperties, Price, Recipient, ShipmentOptions,
    ShipmentPayload, WirePickup,
};

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Carrier id for PostNL, the only carrier this crate books with.
const CARRIER_POSTNL: u8 = 1;

/// Package type sent when the record does not specify one.
const DEFAULT_PACKAGE_TYPE: u32 = 2;

/// Encode a consignment into the payload the carrier API expects.
///
/// Reads the record only; the caller keeps ownership and can encode the
/// same value repeatedly.
pub fn encode(consignment: &Consignment) -> Result<ShipmentPayload> {
    let mut payload = ShipmentPayload::default();

    encode_base_options(consignment, &mut payload);
    encode_street(consignment, &mut payload);
    encode_extra_options(consignment, &mut payload)?;
    encode_customs_declaration(consignment, &mut payload);

    debug!(
        country = consignment.country.as_deref().unwrap_or(""),
        customs = payload.customs_declaration.is_some(),
        pickup = payload.pickup.is_some(),
        "encoded consignment"
    );
    Ok(payload)
}

fn encode_base_options(consignment: &Consignment, payload: &mut ShipmentPayload) {
    payload.recipient = Some(Recipient {
        cc: consignment.country.clone(),
        person: consignment.person.clone(),
        company: consignment.company.clone().filter(|c| !c.is_empty()),
        postal_code: consignment.postal_code.clone(),
        city: consignment.city.clone().unwrap_or_default(),
        email: consignment.email.clone().unwrap_or_default(),
        phone: consignment.phone.clone().unwrap_or_default(),
        ..Recipient::default()
    });
    payload.options = Some(ShipmentOptions {
        package_type: Some(
            consignment
                .package_type
                .filter(|&t| t != 0)
                .unwrap_or(DEFAULT_PACKAGE_TYPE),
        ),
        label_description: consignment.label_description.clone(),
        ..ShipmentOptions::default()
    });
    payload.carrier = Some(CARRIER_POSTNL);
    payload.reference_identifier = consignment.reference_id.clone().filter(|r| !r.is_empty());
}

fn encode_street(consignment: &Consignment, payload: &mut ShipmentPayload) {
    let recipient = payload.recipient.get_or_insert_with(Recipient::default);
    match consignment.address_format() {
        AddressFormat::Structured {
            street,
            number,
            suffix,
        } => {
            recipient.street = Some(street);
            recipient.number = Some(number);
            recipient.number_suffix = Some(suffix);
        }
        AddressFormat::Unstructured(full_street) => {
            recipient.street = Some(full_street);
        }
    }
}

fn encode_extra_options(consignment: &Consignment, payload: &mut ShipmentPayload) -> Result<()> {
    if consignment.is_domestic() {
        let options = payload.options.get_or_insert_with(ShipmentOptions::default);
        options.large_format = Some(u8::from(consignment.large_format));
        options.only_recipient = Some(u8::from(consignment.only_recipient));
        options.signature = Some(u8::from(consignment.signature));
        options.return_shipment = Some(u8::from(consignment.return_shipment));
        options.delivery_type = Some(consignment.delivery_type.code());

        encode_pickup(consignment, payload);
        encode_insurance(consignment, payload)?;
    }

    if consignment.delivery_date.is_some() {
        let options = payload.options.get_or_insert_with(ShipmentOptions::default);
        options.delivery_date = consignment.delivery_date;
    }
    Ok(())
}

/// The pickup block is all-or-nothing: it only goes on the wire when every
/// pickup field is present on the record.
fn encode_pickup(consignment: &Consignment, payload: &mut ShipmentPayload) {
    let (Some(postal_code), Some(street), Some(city), Some(number), Some(location_name)) = (
        consignment.pickup_postal_code.as_ref(),
        consignment.pickup_street.as_ref(),
        consignment.pickup_city.as_ref(),
        consignment.pickup_number.as_ref(),
        consignment.pickup_location_name.as_ref(),
    ) else {
        return;
    };

    payload.pickup = Some(WirePickup {
        postal_code: Some(postal_code.clone()),
        street: Some(street.clone()),
        city: Some(city.clone()),
        number: Some(number.clone()),
        location_name: Some(location_name.clone()),
        ..WirePickup::default()
    });
}

/// Insured values of one euro or less mean "no insurance" and stay off the
/// wire; anything above goes out in whole cents.
fn encode_insurance(consignment: &Consignment, payload: &mut ShipmentPayload) -> Result<()> {
    let Some(value) = consignment.insurance else {
        return Ok(());
    };
    if value <= Decimal::ONE {
        return Ok(());
    }

    let cents = value
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| cents.trunc())
        .and_then(|cents| cents.to_i64())
        .ok_or(EncodeError::InsuranceOutOfRange { value })?;

    let options = payload.options.get_or_insert_with(ShipmentOptions::default);
    options.insurance = Some(Price::eur(cents));
    Ok(())
}

/// Shipments leaving the EU get a customs declaration and the physical
/// properties that go with it.
fn encode_customs_declaration(consignment: &Consignment, payload: &mut ShipmentPayload) {
    if consignment.country.as_deref().is_some_and(is_eu_country) {
        return;
    }

    let weight = consignment.total_weight();
    payload.customs_declaration = Some(CustomsDeclaration {
        contents: 1,
        weight,
        items: vec![CustomsItem {
            description: "Product".to_string(),
            amount: 1,
            weight: 0,
            classification: "0000".to_string(),
            country: "NL".to_string(),
            item_value: Price::eur(100),
        }],
        invoice: consignment.label_description.clone(),
    });
    payload.physical_properties = Some(PhysicalProperties { weight });
}
