//! IATA bar-coded boarding pass (Resolution 792) decoding.
//!
//! Only the mandatory sections are read. The conditional sections are
//! skipped, apart from the boarding pass issue date which helps placing
//! the day-of-year departure date in the right year.

use chrono::{Datelike, Duration, NaiveDate};
use itinerary_core::{Airline, Flight, Person, Place, Reservation, Ticket};

use crate::error::{ReconcilerError, Result};

const UNIQUE_MANDATORY_SIZE: usize = 23;
const REPEATED_MANDATORY_SIZE: usize = 37;
const FORMAT_CODE: u8 = b'M';
const BEGIN_OF_VERSION_NUMBER: u8 = b'>';
const MAX_LEGS: usize = 4;

/// Cheap format check before attempting a full parse.
pub fn maybe_iata_bcbp(message: &str) -> bool {
    let bytes = message.as_bytes();
    bytes.len() >= UNIQUE_MANDATORY_SIZE + REPEATED_MANDATORY_SIZE
        && bytes[0] == FORMAT_CODE
        && bytes[1].is_ascii_digit()
}

/// Turns a scanned boarding pass token into one reservation per leg.
pub trait BoardingPassParser: Send + Sync {
    /// `context_date` is a date close to the issuing of the pass, used to
    /// pick the year of the departure dates.
    fn parse(&self, message: &str, context_date: NaiveDate) -> Result<Vec<Reservation<Flight>>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IataBcbpParser;

fn invalid(reason: impl Into<String>) -> ReconcilerError {
    ReconcilerError::InvalidBoardingPass(reason.into())
}

fn strip_leading_zeros(s: &str) -> &str {
    s.trim_start_matches('0')
}

fn read_hex(s: &str) -> Result<usize> {
    usize::from_str_radix(s, 16).map_err(|_| invalid(format!("invalid field size {s:?}")))
}

fn parse_passenger(full_name: &str) -> Person {
    let full_name = full_name.trim();
    match full_name.split_once('/') {
        Some((family, given)) => {
            let family = family.trim();
            let given = given.trim();
            Person {
                name: Some(format!("{given} {family}").trim().to_string()),
                given_name: (!given.is_empty()).then(|| given.to_string()),
                family_name: (!family.is_empty()).then(|| family.to_string()),
                email: None,
            }
        }
        None => Person::named(full_name),
    }
}

/// One leg, plus the departure day of year and the size of the
/// conditional section that follows it.
struct Leg {
    reservation: Reservation<Flight>,
    day_of_year: u32,
    conditional_size: usize,
}

fn parse_repeated_mandatory_section(section: &str, under_name: &Person) -> Result<Leg> {
    let field = |start: usize, len: usize| section.get(start..start + len).unwrap_or("");
    let day_of_year: u32 = field(21, 3)
        .trim()
        .parse()
        .map_err(|_| invalid(format!("invalid departure date {:?}", field(21, 3))))?;
    if !(1..=366).contains(&day_of_year) {
        return Err(invalid(format!("departure day {day_of_year} out of range")));
    }

    let flight = Flight {
        flight_number: Some(strip_leading_zeros(field(16, 5).trim()).to_string()),
        airline: Airline {
            iata_code: Some(field(13, 3).trim().to_string()),
            ..Airline::default()
        },
        departure_airport: Place {
            iata_code: Some(field(7, 3).to_string()),
            ..Place::default()
        },
        arrival_airport: Place {
            iata_code: Some(field(10, 3).to_string()),
            ..Place::default()
        },
        ..Flight::default()
    };

    let mut reservation = Reservation::new(flight);
    reservation.details.reservation_number = Some(field(0, 7).trim().to_string());
    reservation.details.under_name = Some(under_name.clone());

    let seat = strip_leading_zeros(field(25, 4).trim());
    if !seat.is_empty() {
        let mut ticket = Ticket::default();
        ticket.ticketed_seat.seat_number = Some(seat.to_string());
        reservation.details.reserved_ticket = Some(ticket);
    }

    let sequence = strip_leading_zeros(field(29, 5).trim());
    if !sequence.is_empty() {
        reservation.details.passenger_sequence_number = Some(sequence.to_string());
    }

    Ok(Leg {
        reservation,
        day_of_year,
        conditional_size: read_hex(field(35, 2))?,
    })
}

/// Issue date from the unique conditional section. Only the last digit of
/// the year is encoded, it is assumed to lie in the ten years before
/// `context_date`.
fn parse_issue_date(conditional: &str, context_date: NaiveDate) -> Result<Option<NaiveDate>> {
    let bytes = conditional.as_bytes();
    if bytes.first() != Some(&BEGIN_OF_VERSION_NUMBER) {
        return Err(invalid("unique conditional section has invalid format"));
    }
    let unique_size = read_hex(conditional.get(2..4).unwrap_or(""))?;
    if unique_size + 4 > conditional.len() {
        return Err(invalid(format!("unique conditional section has invalid size {unique_size}")));
    }
    if unique_size < 11 {
        return Ok(None);
    }

    let year_digit = bytes[7].wrapping_sub(b'0') as i32;
    let days: i64 = conditional
        .get(8..11)
        .and_then(|d| d.trim().parse::<i64>().ok())
        .map_or(-1, |d| d - 1);
    if !(0..=9).contains(&year_digit) || !(0..=365).contains(&days) {
        return Err(invalid("invalid boarding pass issue date"));
    }

    let context_year = context_date.year();
    let mut year = context_year - context_year % 10 + year_digit;
    if year > context_year {
        year -= 10;
    }
    Ok(NaiveDate::from_ymd_opt(year, 1, 1).map(|jan1| jan1 + Duration::days(days)))
}

/// The first date on or after `issue_date` that is the given day of year.
fn resolve_departure_day(day_of_year: u32, issue_date: NaiveDate) -> Option<NaiveDate> {
    let offset = Duration::days(i64::from(day_of_year) - 1);
    let this_year = NaiveDate::from_ymd_opt(issue_date.year(), 1, 1)? + offset;
    if this_year >= issue_date {
        return Some(this_year);
    }
    NaiveDate::from_ymd_opt(issue_date.year() + 1, 1, 1).map(|jan1| jan1 + offset)
}

impl BoardingPassParser for IataBcbpParser {
    fn parse(&self, message: &str, context_date: NaiveDate) -> Result<Vec<Reservation<Flight>>> {
        if !message.is_ascii() {
            return Err(invalid("non-ASCII content"));
        }
        if message.len() < UNIQUE_MANDATORY_SIZE + REPEATED_MANDATORY_SIZE {
            return Err(invalid("code too short"));
        }
        let bytes = message.as_bytes();
        if bytes[0] != FORMAT_CODE || !bytes[1].is_ascii_digit() {
            return Err(invalid("invalid unique mandatory section format"));
        }
        let leg_count = usize::from(bytes[1] - b'0');
        if !(1..=MAX_LEGS).contains(&leg_count) {
            return Err(invalid(format!("invalid leg count {leg_count}")));
        }

        let under_name = parse_passenger(&message[2..22]);
        let first = parse_repeated_mandatory_section(&message[UNIQUE_MANDATORY_SIZE..], &under_name)?;
        let mut index = UNIQUE_MANDATORY_SIZE + REPEATED_MANDATORY_SIZE;
        if message.len() < index + first.conditional_size {
            return Err(invalid("code too short for conditional section in first leg"));
        }

        let mut issue_date = context_date;
        if first.conditional_size > 0 {
            let conditional = &message[index..index + first.conditional_size];
            if let Some(date) = parse_issue_date(conditional, context_date)? {
                issue_date = date;
            }
            index += first.conditional_size;
        }

        let mut legs = vec![first];
        for leg in 1..leg_count {
            if message.len() < index + REPEATED_MANDATORY_SIZE {
                return Err(invalid(format!("repeated mandatory section too short in leg {leg}")));
            }
            let parsed = parse_repeated_mandatory_section(&message[index..], &under_name)?;
            index += REPEATED_MANDATORY_SIZE;
            if message.len() < index + parsed.conditional_size {
                return Err(invalid(format!("repeated conditional section too short in leg {leg}")));
            }
            index += parsed.conditional_size;
            legs.push(parsed);
        }

        Ok(legs
            .into_iter()
            .map(|leg| {
                let mut reservation = leg.reservation;
                if let Some(flight) = reservation.reservation_for.as_mut() {
                    flight.departure_day = resolve_departure_day(leg.day_of_year, issue_date);
                }
                reservation
            })
            .collect())
    }
}
