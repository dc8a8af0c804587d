use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightType {
    Domestic,
    International,
}

impl FlightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "DOMESTIC",
            Self::International => "INTERNATIONAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FareClass {
    Economy,
    Business,
    FirstClass,
}

impl FareClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "ECONOMY",
            Self::Business => "BUSINESS",
            Self::FirstClass => "FIRSTCLASS",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flight {
    pub id: i64,
    pub airplane_id: i64,
    pub from_id: i64,
    pub to_id: i64,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub flight_type: String,
    pub class: String,
    pub ticket_price: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFlight {
    pub airplane_id: i64,
    pub from_id: i64,
    pub to_id: i64,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub flight_type: FlightType,
    pub class: FareClass,
    pub ticket_price: i64,
}

/// One entry of a flight's seat map, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_number: String,
    pub is_booked: bool,
    pub passenger_id: Option<i64>,
}
