//! Decoding a carrier API response back onto a consignment.
//!
//! Three stages: base options (required groups, copied unconditionally),
//! extra options (applied only for keys the response carries) and pickup
//! (per-field reads, but cleared wholesale when the block is absent).

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::DecodeError;
use crate::models::consignment::{Consignment, DeliveryType};

use super::wire::ShipmentPayload;

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Apply an API response to a consignment, returning the updated record.
///
/// Values are trusted and copied as-is; the only validation is that the
/// required `recipient` and `options` groups are present. On error the
/// consumed record is dropped, so callers wanting to keep their original
/// should decode into a clone.
pub fn decode(consignment: Consignment, payload: &ShipmentPayload) -> Result<Consignment> {
    let consignment = decode_base_options(consignment, payload)?;
    let consignment = decode_extra_options(consignment, payload);
    let consignment = decode_pickup(consignment, payload);

    debug!(
        id = consignment.consignment_id,
        barcode = consignment.barcode.as_deref().unwrap_or(""),
        "decoded consignment"
    );
    Ok(consignment)
}

fn decode_base_options(
    mut consignment: Consignment,
    payload: &ShipmentPayload,
) -> Result<Consignment> {
    let recipient = payload
        .recipient
        .as_ref()
        .ok_or(DecodeError::MalformedPayload {
            missing: "recipient",
        })?;
    let options = payload
        .options
        .as_ref()
        .ok_or(DecodeError::MalformedPayload { missing: "options" })?;

    consignment.consignment_id = payload.id;
    consignment.reference_id = payload.reference_identifier.clone();
    consignment.barcode = payload.barcode.clone();
    consignment.status = payload.status;

    consignment.country = recipient.cc.clone();
    consignment.person = recipient.person.clone();
    consignment.postal_code = recipient.postal_code.clone();
    consignment.street = recipient.street.clone();
    consignment.city = Some(recipient.city.clone());
    consignment.email = Some(recipient.email.clone());
    consignment.phone = Some(recipient.phone.clone());

    consignment.package_type = options.package_type;
    consignment.label_description = options.label_description.clone();
    Ok(consignment)
}

/// Keys absent from the response leave the record untouched.
fn decode_extra_options(mut consignment: Consignment, payload: &ShipmentPayload) -> Consignment {
    let (Some(recipient), Some(options)) = (payload.recipient.as_ref(), payload.options.as_ref())
    else {
        return consignment;
    };

    if let Some(company) = &recipient.company {
        consignment.company = Some(company.clone());
    }
    if let Some(flag) = recipient.only_recipient {
        consignment.only_recipient = flag != 0;
    }
    if let Some(flag) = recipient.signature {
        consignment.signature = flag != 0;
    }
    if let Some(flag) = recipient.return_shipment {
        consignment.return_shipment = flag != 0;
    }
    if let Some(number) = &recipient.number {
        consignment.number = Some(number.clone());
    }
    if let Some(suffix) = &recipient.number_suffix {
        consignment.number_suffix = Some(suffix.clone());
    }

    if let Some(insurance) = &options.insurance {
        consignment.insurance = Some(Decimal::from(insurance.amount) / Decimal::ONE_HUNDRED);
    }
    if let Some(date) = options.delivery_date {
        consignment.delivery_date = Some(date);
    }
    if let Some(code) = options.delivery_type {
        consignment.delivery_type = DeliveryType::from_code(code).unwrap_or_default();
    }
    consignment
}

/// Pickup fields are applied one by one when the response carries a pickup
/// block, and cleared wholesale when it does not.
fn decode_pickup(mut consignment: Consignment, payload: &ShipmentPayload) -> Consignment {
    match payload.pickup.as_ref() {
        Some(pickup) => {
            if let Some(postal_code) = &pickup.pickup_postal_code {
                consignment.pickup_postal_code = Some(postal_code.clone());
            }
            if let Some(street) = &pickup.pickup_street {
                consignment.pickup_street = Some(street.clone());
            }
            if let Some(city) = &pickup.pickup_city {
                consignment.pickup_city = Some(city.clone());
            }
            if let Some(number) = &pickup.pickup_number {
                consignment.pickup_number = Some(number.clone());
            }
            if let Some(location_name) = &pickup.pickup_location_name {
                consignment.pickup_location_name = Some(location_name.clone());
            }
        }
        None => {
            consignment.pickup_postal_code = None;
            consignment.pickup_street = None;
            consignment.pickup_city = None;
            consignment.pickup_number = None;
            consignment.pickup_location_name = None;
        }
    }
    consignment
}
