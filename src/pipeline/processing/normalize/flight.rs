//! Flight specific completion: airport codes, coordinates, timezones and
//! terminals.

use itinerary_core::{Airline, DateTimeValue, Flight, Place};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{departure_day_from_time, localize, process_place, with_departure_day};
use crate::common::strings::{simplify_field, trim_field};
use crate::knowledgedb::{
    coordinate_for_airport, country_for_airport, distance, iata_codes_from_name,
    is_plausible_distance_for_duration, timezone_for_airport, IataCode,
};
use crate::observability::metrics;

/// Coordinates further than this from the airport's known position are replaced.
const MAX_AIRPORT_COORDINATE_DEVIATION_M: i32 = 5000;

static TERMINAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^(.*) \((?:terminal|aerogare) (.*)\)$",
        r"(?i)^(.*) \((.*) (?:terminal|aerogare)\)$",
        r"(?i)^(.*)[ -](?:terminal|aerogare) (.*)$",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Completes a single flight.
///
/// Airport candidates are collected from IATA codes or, failing that, from
/// the airport names. Ambiguous name matches on one end are narrowed down
/// with the flight duration and the candidates on the other end.
#[derive(Debug, Default)]
pub struct FlightPostProcessor {
    departure_codes: Vec<IataCode>,
    arrival_codes: Vec<IataCode>,
}

impl FlightPostProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_flight(mut self, mut flight: Flight) -> Flight {
        self.departure_codes = lookup_airport_codes(&flight.departure_airport);
        self.arrival_codes = lookup_airport_codes(&flight.arrival_airport);

        let duration = match (flight.departure_time, flight.arrival_time) {
            (Some(departure), Some(arrival)) => departure.seconds_to(&arrival),
            _ => 0,
        };
        pick_airport_by_distance(duration, &self.departure_codes, &mut self.arrival_codes);
        pick_airport_by_distance(duration, &self.arrival_codes, &mut self.departure_codes);

        flight.departure_airport = process_airport(flight.departure_airport, &self.departure_codes);
        flight.arrival_airport = process_airport(flight.arrival_airport, &self.arrival_codes);
        flight.airline = process_airline(flight.airline);

        let day = flight.departure_day;
        flight.boarding_time = flight
            .boarding_time
            .map(|dt| process_flight_time(dt, day, &self.departure_codes));
        flight.departure_time = flight
            .departure_time
            .map(|dt| process_flight_time(dt, day, &self.departure_codes));
        flight.arrival_time = flight
            .arrival_time
            .map(|dt| process_flight_time(dt, day, &self.arrival_codes));

        flight.departure_day = departure_day_from_time(flight.departure_day, flight.departure_time);

        extract_terminals(&mut flight);
        simplify_field(&mut flight.departure_terminal);
        simplify_field(&mut flight.arrival_terminal);
        simplify_field(&mut flight.flight_number);

        // arrival less than a day before departure: the extractor missed a day rollover
        if duration < 0 && duration > -86_400 {
            flight.arrival_time = flight.arrival_time.map(|dt| dt.add_days(1));
        }

        flight
    }
}

fn lookup_airport_codes(airport: &Place) -> Vec<IataCode> {
    let code = IataCode::parse(airport.iata_code());
    if code.is_valid() {
        return vec![code];
    }
    iata_codes_from_name(airport.name())
}

/// Drops candidates in `codes` that cannot be reached from any of
/// `start_codes` within `duration` seconds.
fn pick_airport_by_distance(duration: i64, start_codes: &[IataCode], codes: &mut Vec<IataCode>) {
    if duration <= 0 || start_codes.is_empty() || codes.len() <= 1 {
        return;
    }

    let starts: Vec<_> = start_codes.iter().map(|code| coordinate_for_airport(*code)).collect();
    if !starts.iter().all(|coord| coord.is_valid()) {
        return;
    }

    let before = codes.len();
    codes.retain(|code| {
        let dest = coordinate_for_airport(*code);
        if !dest.is_valid() {
            return true;
        }
        starts.iter().any(|start| {
            let dist = distance(start.latitude, start.longitude, dest.latitude, dest.longitude);
            is_plausible_distance_for_duration(dist, duration)
        })
    });

    let discarded = before - codes.len();
    if discarded > 0 {
        debug!(discarded, remaining = codes.len(), "discarded implausible airport candidates");
        metrics::normalize::airport_candidate_discarded(discarded);
    }
}

fn process_airport(mut airport: Place, codes: &[IataCode]) -> Place {
    if let [code] = codes {
        if airport.iata_code().is_empty() {
            airport.iata_code = Some(code.to_string());
        }

        // take whatever coordinates we have, but not when they are clearly off
        let coord = coordinate_for_airport(*code);
        let geo = airport.geo;
        if coord.is_valid()
            && (!geo.is_valid()
                || distance(geo.latitude, geo.longitude, coord.latitude, coord.longitude)
                    > MAX_AIRPORT_COORDINATE_DEVIATION_M)
        {
            airport.geo = coord;
        }
    }

    if airport.country().is_empty() {
        if let Some(first) = codes.first() {
            let country = country_for_airport(*first);
            if country.is_valid() && codes.iter().all(|code| country_for_airport(*code) == country) {
                airport.address.address_country = Some(country.to_string());
            }
        }
    }

    process_place(airport)
}

fn process_airline(mut airline: Airline) -> Airline {
    trim_field(&mut airline.name);
    airline
}

fn process_flight_time(dt: DateTimeValue, departure_day: Option<chrono::NaiveDate>, codes: &[IataCode]) -> DateTimeValue {
    let dt = with_departure_day(dt, departure_day);

    if (dt.has_timezone() && !dt.is_utc()) || codes.is_empty() {
        return dt;
    }

    let Some(tz) = timezone_for_airport(codes[0]) else {
        return dt;
    };
    if !codes.iter().all(|code| timezone_for_airport(*code) == Some(tz)) {
        return dt;
    }
    localize(dt, tz)
}

fn trim_airport_name(name: &str) -> String {
    name.trim_end_matches(|c: char| c.is_whitespace() || c == '-' || c == ',')
        .to_string()
}

/// Splits `"Name (Terminal X)"` and similar spellings into name and terminal.
fn split_airport_name(name: &str) -> (String, String) {
    for pattern in TERMINAL_PATTERNS.iter() {
        let Some(captures) = pattern.captures(name) else {
            continue;
        };
        let base = trim_airport_name(captures.get(1).map_or("", |m| m.as_str()));
        let terminal = captures.get(2).map_or("", |m| m.as_str()).to_string();

        // the terminal is sometimes repeated
        let (inner_name, inner_terminal) = split_airport_name(&base);
        if inner_name == base || inner_terminal.is_empty() {
            return (base, terminal);
        }
        return (inner_name, inner_terminal);
    }
    (name.to_string(), String::new())
}

fn extract_terminals(flight: &mut Flight) {
    if flight.departure_terminal.as_deref().map_or(true, str::is_empty) {
        let (name, terminal) = split_airport_name(flight.departure_airport.name());
        if !terminal.is_empty() {
            flight.departure_airport.name = Some(name);
            flight.departure_terminal = Some(terminal);
        }
    }
    if flight.arrival_terminal.as_deref().map_or(true, str::is_empty) {
        let (name, terminal) = split_airport_name(flight.arrival_airport.name());
        if !terminal.is_empty() {
            flight.arrival_airport.name = Some(name);
            flight.arrival_terminal = Some(terminal);
        }
    }
}
