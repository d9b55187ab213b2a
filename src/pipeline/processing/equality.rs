//! Decides whether two independently extracted fragments describe the same
//! real-world booking, leg or venue.
//!
//! Absence on one side never causes a mismatch, only values present on both
//! sides that disagree do.

use itinerary_core::{
    BoatTrip, BusTrip, DateTimeValue, Event, Flight, Fragment, Person, Place, ProgramMembership,
    ReservationDetails, Ticket, TouristAttractionVisit, TrainTrip,
};
use tracing::debug;

use crate::common::strings::{normalize, starts_with_ignore_case, transliterate};
use crate::pipeline::processing::location::{arrival_location, departure_location, is_same_location, Accuracy, Location};
use crate::pipeline::processing::sort::{end_time, start_time};

/// Both non-empty and equal.
fn equal_and_present(lhs: &str, rhs: &str) -> bool {
    !lhs.is_empty() && lhs == rhs
}

/// Both non-empty and different.
fn conflict_if_present(lhs: &str, rhs: &str) -> bool {
    !lhs.is_empty() && !rhs.is_empty() && lhs != rhs
}

fn conflict_if_present_ignore_case(lhs: &str, rhs: &str) -> bool {
    !lhs.is_empty() && !rhs.is_empty() && lhs.to_lowercase() != rhs.to_lowercase()
}

/// Neither is a prefix of the other, ignoring case.
fn prefix_conflict_if_present(lhs: &str, rhs: &str) -> bool {
    !lhs.is_empty()
        && !rhs.is_empty()
        && !starts_with_ignore_case(lhs, rhs)
        && !starts_with_ignore_case(rhs, lhs)
}

/// Equality of two optional points in time by instant; two missing values are equal.
pub(crate) fn same_time(lhs: &Option<DateTimeValue>, rhs: &Option<DateTimeValue>) -> bool {
    match (lhs, rhs) {
        (Some(l), Some(r)) => l.same_instant(r),
        (None, None) => true,
        _ => false,
    }
}

fn time_conflict(lhs: &Option<DateTimeValue>, rhs: &Option<DateTimeValue>) -> bool {
    matches!((lhs, rhs), (Some(l), Some(r)) if !l.same_instant(r))
}

fn person_conflict(lhs: Option<&Person>, rhs: Option<&Person>) -> bool {
    match (lhs, rhs) {
        (Some(l), Some(r)) => !l.name().is_empty() && !r.name().is_empty() && !is_same_person(l, r),
        _ => false,
    }
}

fn str_of(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Missing tokens never conflict; present ones may differ in length, as
/// long and short encodings of the same token exist.
fn is_same_ticket_token(lhs: Option<&str>, rhs: Option<&str>) -> bool {
    match (lhs, rhs) {
        (Some(l), Some(r)) => !prefix_conflict_if_present(l, r),
        _ => true,
    }
}

fn ticket_token(details: &ReservationDetails) -> Option<&str> {
    details.reserved_ticket.as_ref().and_then(Ticket::ticket_token_data)
}

fn seat_number(details: &ReservationDetails) -> &str {
    details.reserved_ticket.as_ref().map_or("", Ticket::seat_number)
}

/// Reservation-level non-conflict: traveller, booking reference and seat.
fn is_same_reservation(lhs: &ReservationDetails, rhs: &ReservationDetails) -> bool {
    !person_conflict(lhs.under_name.as_ref(), rhs.under_name.as_ref())
        && !conflict_if_present(lhs.reservation_number(), rhs.reservation_number())
        && !conflict_if_present_ignore_case(seat_number(lhs), seat_number(rhs))
}

/// `cancel` is a bare cancellation of `reservation` issued before it starts.
pub fn is_minimal_cancellation_for(reservation: &Fragment, cancel: &Fragment) -> bool {
    let (Some(res), Some(cancel_details)) = (reservation.reservation_details(), cancel.reservation_details()) else {
        return false;
    };
    if res.is_cancelled() || !cancel_details.is_cancelled() {
        return false;
    }
    if !equal_and_present(res.reservation_number(), cancel_details.reservation_number()) {
        return false;
    }
    let Some(modified) = cancel_details.modified_time else {
        return false;
    };
    if cancel.has_reservation_for() {
        return false;
    }
    start_time(reservation).is_some_and(|start| start.to_utc_instant() > modified.to_utc_instant())
}

fn both<T>(lhs: &Option<T>, rhs: &Option<T>, same: impl Fn(&T, &T) -> bool) -> bool {
    match (lhs, rhs) {
        (Some(l), Some(r)) => same(l, r),
        _ => false,
    }
}

fn date_of(value: &Option<DateTimeValue>) -> Option<chrono::NaiveDate> {
    value.map(|v| v.date())
}

/// Whether two fragments refer to the same real-world entity.
///
/// Fragments of different kinds are never the same.
pub fn is_same(lhs: &Fragment, rhs: &Fragment) -> bool {
    if lhs.kind() != rhs.kind() {
        return false;
    }

    if let (Some(lhs_res), Some(rhs_res)) = (lhs.reservation_details(), rhs.reservation_details()) {
        if !is_same_reservation(lhs_res, rhs_res) {
            return false;
        }
        // boarding pass tokens are unpacked into other fields, so flights skip this
        if !matches!(lhs, Fragment::FlightReservation(_))
            && !is_same_ticket_token(ticket_token(lhs_res), ticket_token(rhs_res))
        {
            return false;
        }
        if is_minimal_cancellation_for(lhs, rhs) || is_minimal_cancellation_for(rhs, lhs) {
            return true;
        }
    }

    match (lhs, rhs) {
        (Fragment::FlightReservation(l), Fragment::FlightReservation(r)) => {
            !conflict_if_present(l.details.reservation_number(), r.details.reservation_number())
                && !conflict_if_present(
                    str_of(&l.details.passenger_sequence_number),
                    str_of(&r.details.passenger_sequence_number),
                )
                && both(&l.reservation_for, &r.reservation_for, is_same_flight)
        }
        (Fragment::TrainReservation(l), Fragment::TrainReservation(r)) => {
            !conflict_if_present(l.details.reservation_number(), r.details.reservation_number())
                && both(&l.reservation_for, &r.reservation_for, is_same_train_trip)
        }
        (Fragment::BusReservation(l), Fragment::BusReservation(r)) => {
            l.details.reservation_number() == r.details.reservation_number()
                && both(&l.reservation_for, &r.reservation_for, is_same_bus_trip)
        }
        (Fragment::BoatReservation(l), Fragment::BoatReservation(r)) => {
            l.details.reservation_number() == r.details.reservation_number()
                && both(&l.reservation_for, &r.reservation_for, is_same_boat_trip)
        }
        (Fragment::LodgingReservation(l), Fragment::LodgingReservation(r)) => {
            both(&l.reservation_for, &r.reservation_for, is_same_named_venue)
                && date_of(&l.details.checkin_time) == date_of(&r.details.checkin_time)
        }
        (Fragment::RentalCarReservation(l), Fragment::RentalCarReservation(r)) => {
            l.details.reservation_number() == r.details.reservation_number()
                && both(&l.reservation_for, &r.reservation_for, |a, b| same_name(&a.name, &b.name))
                && date_of(&l.details.pickup_time) == date_of(&r.details.pickup_time)
        }
        (Fragment::TaxiReservation(l), Fragment::TaxiReservation(r)) => {
            l.details.reservation_number() == r.details.reservation_number()
                && both(&l.reservation_for, &r.reservation_for, |a, b| same_name(&a.name, &b.name))
                && date_of(&l.details.pickup_time) == date_of(&r.details.pickup_time)
        }
        (Fragment::FoodEstablishmentReservation(l), Fragment::FoodEstablishmentReservation(r)) => {
            let same_day = |a: &ReservationDetails, b: &ReservationDetails| {
                let b_end = b.end_time.or(b.start_time);
                date_of(&a.start_time) == date_of(&b_end)
            };
            l.details.reservation_number() == r.details.reservation_number()
                && both(&l.reservation_for, &r.reservation_for, is_same_named_venue)
                && (same_day(&l.details, &r.details) || same_day(&r.details, &l.details))
        }
        (Fragment::EventReservation(l), Fragment::EventReservation(r)) => {
            if l.details.reservation_number() != r.details.reservation_number() {
                return false;
            }
            // an update may carry only the booking reference
            both(&l.reservation_for, &r.reservation_for, is_same_event)
                || (l.reservation_for.is_some() != r.reservation_for.is_some()
                    && equal_and_present(l.details.reservation_number(), r.details.reservation_number()))
        }

        (Fragment::Flight(l), Fragment::Flight(r)) => is_same_flight(l, r),
        (Fragment::TrainTrip(l), Fragment::TrainTrip(r)) => is_same_train_trip(l, r),
        (Fragment::BusTrip(l), Fragment::BusTrip(r)) => is_same_bus_trip(l, r),
        (Fragment::BoatTrip(l), Fragment::BoatTrip(r)) => is_same_boat_trip(l, r),
        (Fragment::LodgingBusiness(l), Fragment::LodgingBusiness(r))
        | (Fragment::FoodEstablishment(l), Fragment::FoodEstablishment(r))
        | (Fragment::LocalBusiness(l), Fragment::LocalBusiness(r))
        | (Fragment::TouristAttraction(l), Fragment::TouristAttraction(r)) => is_same_named_venue(l, r),
        (Fragment::RentalCar(l), Fragment::RentalCar(r)) => same_name(&l.name, &r.name),
        (Fragment::Taxi(l), Fragment::Taxi(r)) => same_name(&l.name, &r.name),
        (Fragment::Event(l), Fragment::Event(r)) => is_same_event(l, r),
        (Fragment::TouristAttractionVisit(l), Fragment::TouristAttractionVisit(r)) => is_same_visit(l, r),
        (Fragment::Ticket(l), Fragment::Ticket(r)) => is_same_ticket(l, r),
        (Fragment::ProgramMembership(l), Fragment::ProgramMembership(r)) => is_same_membership(l, r),
        (Fragment::Airport(l), Fragment::Airport(r)) => {
            l == r || is_same_location(Location::airport(l), Location::airport(r), Accuracy::Exact)
        }
        (Fragment::TrainStation(l), Fragment::TrainStation(r))
        | (Fragment::BusStation(l), Fragment::BusStation(r))
        | (Fragment::BoatTerminal(l), Fragment::BoatTerminal(r)) => {
            l == r || is_same_location(Location::place(l), Location::place(r), Accuracy::Exact)
        }
        _ => false,
    }
}

/// Compares the `reservation_for` objects of two reservations; missing ones never match.
pub(crate) fn is_same_reservation_for(lhs: &Fragment, rhs: &Fragment) -> bool {
    match (lhs.reservation_for_fragment(), rhs.reservation_for_fragment()) {
        (Some(l), Some(r)) => is_same(&l, &r),
        _ => false,
    }
}

fn is_same_flight(lhs: &Flight, rhs: &Flight) -> bool {
    if conflict_if_present(lhs.departure_airport.iata_code(), rhs.departure_airport.iata_code())
        || conflict_if_present(lhs.arrival_airport.iata_code(), rhs.arrival_airport.iata_code())
    {
        return false;
    }
    match (lhs.departure_day, rhs.departure_day) {
        (Some(l), Some(r)) if l == r => {}
        _ => return false,
    }

    if equal_and_present(str_of(&lhs.flight_number), str_of(&rhs.flight_number))
        && equal_and_present(lhs.airline.iata_code(), rhs.airline.iata_code())
    {
        return true;
    }

    // matching route and day with different numbers, possibly a codeshare
    !time_conflict(&lhs.departure_time, &rhs.departure_time)
}

fn is_line_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn is_same_line_name_directed(lhs: &[char], rhs: &[char]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        if !is_line_char(lhs[i]) {
            i += 1;
            continue;
        }
        if !is_line_char(rhs[j]) {
            j += 1;
            continue;
        }
        if !lhs[i].to_lowercase().eq(rhs[j].to_lowercase()) {
            return false;
        }
        i += 1;
        j += 1;
    }

    if i == lhs.len() && j == rhs.len() {
        return true;
    }
    // one is a prefix of the other, fine when followed by a separator
    (i < lhs.len() && lhs[i].is_whitespace()) || (j < rhs.len() && rhs[j].is_whitespace())
}

/// Compares line names ignoring punctuation and case, accepting a prefix
/// match at a word boundary from either end.
pub fn is_same_line_name(lhs: &str, rhs: &str) -> bool {
    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();
    if is_same_line_name_directed(&lhs, &rhs) {
        return true;
    }
    let lhs_rev: Vec<char> = lhs.iter().rev().copied().collect();
    let rhs_rev: Vec<char> = rhs.iter().rev().copied().collect();
    is_same_line_name_directed(&lhs_rev, &rhs_rev)
}

fn same_stations(lhs: &TrainTrip, rhs: &TrainTrip, accuracy: Accuracy) -> bool {
    is_same_location(
        Location::place(&lhs.departure_station),
        Location::place(&rhs.departure_station),
        accuracy,
    ) && is_same_location(
        Location::place(&lhs.arrival_station),
        Location::place(&rhs.arrival_station),
        accuracy,
    )
}

fn is_same_train_trip(lhs: &TrainTrip, rhs: &TrainTrip) -> bool {
    if lhs.departure_day != rhs.departure_day {
        return false;
    }

    match (&lhs.departure_time, &rhs.departure_time) {
        (None, None) => {
            // unbound tickets, no train to compare
            debug!(
                lhs = lhs.departure_station.name(),
                rhs = rhs.departure_station.name(),
                "comparing unbound train trips by station"
            );
            return same_stations(lhs, rhs, Accuracy::Exact);
        }
        (Some(l), Some(r)) => {
            if !l.same_instant(r) {
                return false;
            }
        }
        _ => {
            if !same_stations(lhs, rhs, Accuracy::CityLevel) {
                return false;
            }
        }
    }

    // arrival times of the same connection can deviate slightly between tickets
    if let (Some(l), Some(r)) = (&lhs.arrival_time, &rhs.arrival_time) {
        if !l.same_instant(r) {
            if l.seconds_to(r).abs() > 180 {
                return false;
            }
            if !is_same_location(
                Location::place(&lhs.arrival_station),
                Location::place(&rhs.arrival_station),
                Accuracy::Exact,
            ) {
                return false;
            }
        }
    }

    let (lhs_number, rhs_number) = (str_of(&lhs.train_number), str_of(&rhs.train_number));
    if lhs_number.is_empty() || rhs_number.is_empty() {
        debug!(lhs = lhs_number, rhs = rhs_number, "missing train number");
        return same_stations(lhs, rhs, Accuracy::Exact);
    }

    let same_line = is_same_line_name(lhs_number, rhs_number);
    debug!(lhs = lhs_number, rhs = rhs_number, same_line, "comparing train numbers");
    !conflict_if_present(str_of(&lhs.train_name), str_of(&rhs.train_name)) && same_line
}

fn is_same_bus_trip(lhs: &BusTrip, rhs: &BusTrip) -> bool {
    let (lhs_number, rhs_number) = (str_of(&lhs.bus_number), str_of(&rhs.bus_number));
    if lhs_number.is_empty() || rhs_number.is_empty() {
        return false;
    }
    str_of(&lhs.bus_name) == str_of(&rhs.bus_name)
        && lhs_number == rhs_number
        && same_time(&lhs.departure_time, &rhs.departure_time)
}

fn is_same_boat_trip(lhs: &BoatTrip, rhs: &BoatTrip) -> bool {
    same_time(&lhs.departure_time, &rhs.departure_time)
        && is_same_location(
            Location::place(&lhs.departure_boat_terminal),
            Location::place(&rhs.departure_boat_terminal),
            Accuracy::Exact,
        )
        && is_same_location(
            Location::place(&lhs.arrival_boat_terminal),
            Location::place(&rhs.arrival_boat_terminal),
            Accuracy::Exact,
        )
}

fn same_name(lhs: &Option<String>, rhs: &Option<String>) -> bool {
    equal_and_present(str_of(lhs), str_of(rhs))
}

fn is_same_named_venue(lhs: &Place, rhs: &Place) -> bool {
    same_name(&lhs.name, &rhs.name)
}

fn is_same_visit(lhs: &TouristAttractionVisit, rhs: &TouristAttractionVisit) -> bool {
    same_time(&lhs.arrival_time, &rhs.arrival_time)
        && is_same_named_venue(&lhs.tourist_attraction, &rhs.tourist_attraction)
}

fn is_same_event(lhs: &Event, rhs: &Event) -> bool {
    same_name(&lhs.name, &rhs.name)
        && matches!((&lhs.start_date, &rhs.start_date), (Some(l), Some(r)) if l.same_instant(r))
}

fn is_same_ticket(lhs: &Ticket, rhs: &Ticket) -> bool {
    !person_conflict(lhs.under_name.as_ref(), rhs.under_name.as_ref())
        && !conflict_if_present(str_of(&lhs.ticket_number), str_of(&rhs.ticket_number))
        && !conflict_if_present(str_of(&lhs.name), str_of(&rhs.name))
        && !time_conflict(&lhs.valid_from, &rhs.valid_from)
        && is_same_ticket_token(lhs.ticket_token_data(), rhs.ticket_token_data())
}

fn is_same_membership(lhs: &ProgramMembership, rhs: &ProgramMembership) -> bool {
    fn token(pm: &ProgramMembership) -> Option<&str> {
        pm.token.as_deref().filter(|t| !t.is_empty())
    }
    !person_conflict(lhs.member.as_ref(), rhs.member.as_ref())
        && !conflict_if_present(str_of(&lhs.program_name), str_of(&rhs.program_name))
        && !conflict_if_present(str_of(&lhs.membership_number), str_of(&rhs.membership_number))
        && !time_conflict(&lhs.valid_from, &rhs.valid_from)
        && !time_conflict(&lhs.valid_until, &rhs.valid_until)
        && is_same_ticket_token(token(lhs), token(rhs))
}

/// Single-pass greedy alignment of the normalized strings, returning what
/// did not line up.
fn diff_string(raw_lhs: &str, raw_rhs: &str) -> String {
    let lhs: Vec<char> = normalize(raw_lhs).chars().collect();
    let rhs: Vec<char> = normalize(raw_rhs).chars().collect();

    let mut diff = String::new();
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() || j < rhs.len() {
        if i < lhs.len() && j < rhs.len() && lhs[i] == rhs[j] {
            i += 1;
            j += 1;
            continue;
        }
        let take_rhs = (j < rhs.len() && (lhs.len() < rhs.len() || (lhs.len() == rhs.len() && j < i)))
            || i == lhs.len();
        if take_rhs {
            diff.push(rhs[j]);
            j += 1;
        } else {
            diff.push(lhs[i]);
            i += 1;
        }
    }
    diff.trim().to_string()
}

fn is_name_equalish(lhs: &str, rhs: &str) -> bool {
    if lhs.is_empty() || rhs.is_empty() {
        return false;
    }
    let diff = diff_string(lhs, rhs)
        .to_uppercase()
        .replace("MRS", "")
        .replace("MR", "")
        .replace("MS", "");
    !diff.chars().any(char::is_alphabetic)
}

fn is_partial_name(full: &Person, partial: &Person) -> bool {
    if full.family_name().is_empty() || full.given_name().is_empty() || !partial.given_name().is_empty() {
        return false;
    }
    is_name_equalish(full.family_name(), partial.name())
}

/// Tolerant traveller name comparison, robust against honorifics, case,
/// diacritics and transliteration.
pub fn is_same_person(lhs: &Person, rhs: &Person) -> bool {
    if is_name_equalish(lhs.name(), rhs.name())
        || (is_name_equalish(lhs.given_name(), rhs.given_name())
            && is_name_equalish(lhs.family_name(), rhs.family_name()))
    {
        return true;
    }
    if is_partial_name(lhs, rhs) || is_partial_name(rhs, lhs) {
        return true;
    }

    is_name_equalish(&transliterate(lhs.name()), &transliterate(rhs.name()))
        || (is_name_equalish(&transliterate(lhs.given_name()), &transliterate(rhs.given_name()))
            && is_name_equalish(&transliterate(lhs.family_name()), &transliterate(rhs.family_name())))
}

/// Same kind of reservation for the same thing at the same time, even if
/// the booking details differ (e.g. two travellers on one trip).
pub fn is_same_incidence(lhs: &Fragment, rhs: &Fragment) -> bool {
    if lhs.kind() != rhs.kind() || !lhs.is_reservation() {
        return false;
    }

    if let (Fragment::LodgingReservation(l), Fragment::LodgingReservation(r)) = (lhs, rhs) {
        // incremental updates can have deviating times
        if is_same(lhs, rhs) {
            return true;
        }
        if date_of(&l.details.checkin_time) != date_of(&r.details.checkin_time)
            || date_of(&l.details.checkout_time) != date_of(&r.details.checkout_time)
        {
            return false;
        }
    }

    is_same_reservation_for(lhs, rhs)
}

/// Train and bus legs can connect to each other, flights only to flights.
fn is_compatible_location_change(lhs: &Fragment, rhs: &Fragment) -> bool {
    let train_or_bus = |f: &Fragment| matches!(f, Fragment::TrainReservation(_) | Fragment::BusReservation(_));
    (train_or_bus(lhs) && train_or_bus(rhs))
        || (matches!(lhs, Fragment::FlightReservation(_)) && matches!(rhs, Fragment::FlightReservation(_)))
}

fn same_endpoint<'a>(
    lhs: &'a Fragment,
    rhs: &'a Fragment,
    time_of: fn(&Fragment) -> Option<DateTimeValue>,
    location_of: fn(&'a Fragment) -> Option<Location<'a>>,
) -> bool {
    if !is_compatible_location_change(lhs, rhs) {
        return false;
    }
    let (Some(lhs_res), Some(rhs_res)) = (lhs.reservation_details(), rhs.reservation_details()) else {
        return false;
    };
    if !is_same_reservation(lhs_res, rhs_res) || !same_time(&time_of(lhs), &time_of(rhs)) {
        return false;
    }
    match (location_of(lhs), location_of(rhs)) {
        (Some(l), Some(r)) => is_same_location(l, r, Accuracy::Exact),
        _ => false,
    }
}

/// Both legs leave from the same place at the same time.
pub fn has_same_departure(lhs: &Fragment, rhs: &Fragment) -> bool {
    same_endpoint(lhs, rhs, start_time, departure_location)
}

/// Both legs arrive at the same place at the same time.
pub fn has_same_arrival(lhs: &Fragment, rhs: &Fragment) -> bool {
    same_endpoint(lhs, rhs, end_time, arrival_location)
}
