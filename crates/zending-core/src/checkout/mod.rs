//! Mappings from webshop checkout-session data onto a consignment.
//!
//! The storefront checkout posts a loosely-typed JSON blob describing the
//! delivery selection a customer made: a time slot, a date and possibly a
//! retail pickup location. These helpers translate that blob into record
//! fields; every key may be missing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::error::CheckoutError;
use crate::models::consignment::{Consignment, DeliveryType};

/// Result type for checkout mappings.
pub type Result<T> = std::result::Result<T, CheckoutError>;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The delivery selection a customer made in the checkout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutSelection {
    /// Selected home-delivery time slots, first one wins.
    #[serde(default)]
    pub time: Vec<TimeSlot>,
    /// Price comment of a retail selection.
    pub price_comment: Option<String>,
    pub date: Option<String>,
    /// Name of the selected pickup location.
    pub location: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub number: Option<String>,
}

/// A home-delivery time slot in the checkout selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeSlot {
    pub price_comment: Option<String>,
}

impl CheckoutSelection {
    /// Parse the blob the storefront posted.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The delivery type implied by a checkout selection.
///
/// Home-delivery slots name their window in `time[0].price_comment`
/// (morning, standard, night); retail selections put `retail` or
/// `retailexpress` at the top level. Anything absent or unrecognized is a
/// standard delivery.
pub fn delivery_type_from_checkout(selection: Option<&CheckoutSelection>) -> DeliveryType {
    let Some(selection) = selection else {
        return DeliveryType::Standard;
    };

    if let Some(comment) = selection
        .time
        .first()
        .and_then(|slot| slot.price_comment.as_deref())
    {
        return match comment {
            "morning" => DeliveryType::Morning,
            "night" => DeliveryType::Night,
            _ => DeliveryType::Standard,
        };
    }

    match selection.price_comment.as_deref() {
        Some("retail") => DeliveryType::Retail,
        Some("retailexpress") => DeliveryType::RetailExpress,
        _ => DeliveryType::Standard,
    }
}

fn parse_checkout_date(value: &str) -> Result<NaiveDateTime> {
    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT) {
        return Ok(date_time);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| CheckoutError::InvalidDeliveryDate {
            value: value.to_string(),
        })
}

impl Consignment {
    /// Copy the checkout delivery date onto the record, unless one is
    /// already set.
    pub fn with_delivery_date_from_checkout(
        mut self,
        selection: &CheckoutSelection,
    ) -> Result<Self> {
        let Some(date) = selection.date.as_deref() else {
            return Ok(self);
        };
        if self.delivery_date.is_none() {
            self.delivery_date = Some(parse_checkout_date(date)?);
        }
        Ok(self)
    }

    /// Adopt the retail pickup location a customer selected in the
    /// checkout.
    ///
    /// Applies only to domestic consignments whose selection names a
    /// location; the price comment decides between retail and retail
    /// express delivery, and anything else means the selection does not
    /// actually describe a pickup point.
    pub fn with_pickup_from_checkout(mut self, selection: &CheckoutSelection) -> Result<Self> {
        if !self.is_domestic() {
            return Ok(self);
        }
        let Some(location) = selection.location.clone() else {
            return Ok(self);
        };

        if self.delivery_date.is_none() {
            if let Some(date) = selection.date.as_deref() {
                self.delivery_date = Some(parse_checkout_date(date)?);
            }
        }

        self.delivery_type = match selection.price_comment.as_deref() {
            Some("retail") => DeliveryType::Retail,
            Some("retailexpress") => DeliveryType::RetailExpress,
            _ => return Err(CheckoutError::MissingPickupLocation),
        };

        self.pickup_postal_code = selection.postal_code.clone();
        self.pickup_street = selection.street.clone();
        self.pickup_city = selection.city.clone();
        self.pickup_number = selection.number.clone();
        self.pickup_location_name = Some(location);
        Ok(self)
    }
}
