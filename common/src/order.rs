use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::provider::ProviderId;

/// Server-assigned ride booking identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ride booking as returned by `GET ride-booking/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideOrder {
    pub id: OrderId,
    pub provider_id: ProviderId,
    pub pickup_location: String,
    pub drop_off_location: String,
    pub ride_date: NaiveDate,
    #[serde(deserialize_with = "de_pickup_time")]
    pub pickup_time: NaiveTime,
    #[serde(deserialize_with = "de_fare")]
    pub estimated_fare: f64,
    /// `true` while the booking is confirmed, `false` once cancelled.
    pub booking_status: bool,
}

impl RideOrder {
    pub fn is_confirmed(&self) -> bool {
        self.booking_status
    }

    /// "pickup → drop-off" label shown under the provider name.
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.pickup_location, self.drop_off_location)
    }

    /// Date and pickup time, minutes precision.
    pub fn schedule_label(&self) -> String {
        format!(
            "{} {}",
            self.ride_date.format("%Y-%m-%d"),
            self.pickup_time.format("%H:%M")
        )
    }
}

/// Format a fare for display, always with two decimals.
pub fn format_fare(fare: f64) -> String {
    format!("{fare:.2}")
}

/// Body of the cancel request: `{"booking_status": false}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingStatusPatch {
    pub booking_status: bool,
}

impl BookingStatusPatch {
    pub fn cancel() -> Self {
        Self {
            booking_status: false,
        }
    }
}

// Decimal fields come over the wire either as numbers or as strings like "25.50".
fn de_fare<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Fare {
        Number(f64),
        Text(String),
    }

    match Fare::deserialize(deserializer)? {
        Fare::Number(n) => Ok(n),
        Fare::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid fare {s:?}: {e}"))),
    }
}

fn de_pickup_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
        .map_err(|e| serde::de::Error::custom(format!("invalid pickup_time {raw:?}: {e}")))
}
