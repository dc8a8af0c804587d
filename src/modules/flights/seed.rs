use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::model::{FareClass, FlightType, NewFlight, Seat};

pub const FLIGHTS_PER_RUN: usize = 100;

pub const SEAT_ROWS: u32 = 12;
pub const SEAT_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub const AIRPORT_RATINGS: [f64; 6] = [4.5, 4.6, 4.7, 4.8, 4.9, 5.0];

/// City name to the airport ids that serve it.
pub const AIRPORT_CATALOG: &[(&str, &[i64])] = &[
    ("Tokyo", &[3658, 3659, 8058, 8059]),
    ("Singapore", &[3232, 7632]),
    ("Sydney", &[3424, 3425, 3426, 7824, 7825, 7826]),
    ("PhnomPenh", &[2822, 7222]),
    ("Manila", &[2288, 6688]),
    ("KualaLumpur", &[1843, 1844, 6243, 6244]),
    ("Bandung", &[276, 4676]),
    ("Hanoi", &[1332, 5732]),
    ("BandarSeriBegawan", &[512, 4912]),
    ("Beijing", &[361, 362, 4761, 4762]),
    ("Bangkok", &[368, 369, 4768, 4769]),
    ("London", &[2006]),
    ("Jakarta", &[1658, 1659]),
];

const MAX_DEPARTURE_OFFSET_MS: i64 = 365 * 24 * 60 * 60 * 1000;
const MAX_AIRPLANE_ID: i64 = 120;

pub fn airport_ids() -> Vec<i64> {
    AIRPORT_CATALOG
        .iter()
        .flat_map(|(_, ids)| ids.iter().copied())
        .collect()
}

/// Draws one synthetic flight between two different airports of `airports`.
/// `airports` must hold at least two distinct ids.
pub fn random_flight<R: Rng>(rng: &mut R, airports: &[i64], now: DateTime<Utc>) -> NewFlight {
    let from_id = airports[rng.random_range(0..airports.len())];
    let mut to_id = airports[rng.random_range(0..airports.len())];
    while to_id == from_id {
        to_id = airports[rng.random_range(0..airports.len())];
    }

    let departure_time = now + Duration::milliseconds(rng.random_range(0..MAX_DEPARTURE_OFFSET_MS));
    let arrival_time = departure_time + Duration::hours(rng.random_range(1..=10));

    let flight_type = if rng.random::<f64>() > 0.5 {
        FlightType::Domestic
    } else {
        FlightType::International
    };

    let class = match rng.random::<f64>() {
        r if r < 1.0 / 3.0 => FareClass::Economy,
        r if r < 2.0 / 3.0 => FareClass::Business,
        _ => FareClass::FirstClass,
    };

    NewFlight {
        airplane_id: rng.random_range(1..=MAX_AIRPLANE_ID),
        from_id,
        to_id,
        departure_time,
        arrival_time,
        flight_type,
        class,
        ticket_price: rng.random_range(1000..=24000) * 1000,
    }
}

pub fn random_flights<R: Rng>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<NewFlight> {
    let airports = airport_ids();
    (0..count).map(|_| random_flight(rng, &airports, now)).collect()
}

/// 72 empty seats ordered 1A..1F, 2A..2F, .., 12F.
pub fn empty_seat_map() -> Vec<Seat> {
    (1..=SEAT_ROWS)
        .flat_map(|row| {
            SEAT_LETTERS.iter().map(move |letter| Seat {
                seat_number: format!("{}{}", row, letter),
                is_booked: false,
                passenger_id: None,
            })
        })
        .collect()
}

pub fn random_rating<R: Rng>(rng: &mut R) -> f64 {
    AIRPORT_RATINGS[rng.random_range(0..AIRPORT_RATINGS.len())]
}
