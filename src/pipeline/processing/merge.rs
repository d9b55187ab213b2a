//! Combining two fragments that describe the same entity.
//!
//! [`apply`] is a plain overlay: every value present on the right replaces
//! the one on the left, nested objects are combined recursively. [`merge`]
//! is used once two fragments are known to be the same and keeps the more
//! plausible value of each field instead.

use chrono::NaiveDate;
use itinerary_core::{
    Action, BoatTrip, BusTrip, DateTimeValue, Event, Flight, Fragment, GeoCoordinates,
    Organization, Person, Place, PostalAddress, ProgramMembership, RentalCar, Reservation,
    ReservationDetails, ReservationStatus, Seat, Taxi, Ticket, TokenType, TouristAttractionVisit,
    TrainTrip,
};
use tracing::warn;

use crate::common::strings::better_string;
use crate::error::{ReconcilerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Overlay,
    Better,
}

/// Field-wise combination of two values of the same type.
trait Combine: Sized {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self;
}

/// Combination of every field in turn, without any per-type adjustment.
trait CombineFields: Sized {
    fn combine_fields(lhs: Self, rhs: Self, mode: Mode) -> Self;
}

macro_rules! combine_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl CombineFields for $ty {
            fn combine_fields(lhs: Self, rhs: Self, mode: Mode) -> Self {
                Self {
                    $($field: Combine::combine(lhs.$field, rhs.$field, mode),)*
                }
            }
        }
    };
}

macro_rules! combine_by_fields {
    ($($ty:ty),* $(,)?) => {
        $(impl Combine for $ty {
            fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
                CombineFields::combine_fields(lhs, rhs, mode)
            }
        })*
    };
}

/// Scalars where the right side simply wins.
macro_rules! combine_by_overwrite {
    ($($ty:ty),* $(,)?) => {
        $(impl Combine for $ty {
            fn combine(_lhs: Self, rhs: Self, _mode: Mode) -> Self {
                rhs
            }
        })*
    };
}

combine_by_overwrite!(NaiveDate, ReservationStatus);

impl Combine for String {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
        match mode {
            Mode::Overlay if rhs.is_empty() => lhs,
            Mode::Overlay => rhs,
            Mode::Better => better_string(&lhs, &rhs).to_string(),
        }
    }
}

impl<T: Combine> Combine for Option<T> {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
        match (lhs, rhs) {
            (Some(l), Some(r)) => Some(T::combine(l, r, mode)),
            (l, r) => r.or(l),
        }
    }
}

impl Combine for GeoCoordinates {
    fn combine(lhs: Self, rhs: Self, _mode: Mode) -> Self {
        if rhs.is_valid() {
            rhs
        } else {
            lhs
        }
    }
}

impl Combine for DateTimeValue {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
        if mode == Mode::Overlay {
            return rhs;
        }
        // prefer a real timezone, and among those anything but UTC
        match (lhs.has_timezone(), rhs.has_timezone()) {
            (true, true) if rhs.is_utc() => lhs,
            (true, false) => lhs,
            _ => rhs,
        }
    }
}

impl Combine for Vec<Action> {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
        match mode {
            Mode::Overlay if rhs.is_empty() => lhs,
            Mode::Overlay => rhs,
            Mode::Better => {
                let mut merged = lhs;
                for action in rhs {
                    if !merged.contains(&action) {
                        merged.push(action);
                    }
                }
                merged
            }
        }
    }
}

combine_fields!(PostalAddress { street_address, address_locality, address_region, postal_code, address_country });
combine_fields!(Place { name, address, geo, telephone, identifier, iata_code });
combine_fields!(Person { name, given_name, family_name, email });
combine_fields!(Organization { name, iata_code, email, telephone, url });
combine_fields!(Seat { seat_number, seat_row, seat_section, seating_type });
combine_fields!(Ticket { name, ticket_number, ticketed_seat, ticket_token, under_name, valid_from, valid_until });
combine_fields!(ProgramMembership { program_name, membership_number, token, member, valid_from, valid_until });
combine_fields!(Flight {
    flight_number,
    airline,
    departure_airport,
    arrival_airport,
    departure_time,
    arrival_time,
    boarding_time,
    departure_day,
    departure_gate,
    departure_terminal,
    arrival_terminal,
});
combine_fields!(TrainTrip {
    train_name,
    train_number,
    provider,
    departure_station,
    arrival_station,
    departure_time,
    arrival_time,
    departure_platform,
    arrival_platform,
    departure_day,
});
combine_fields!(BusTrip {
    bus_name,
    bus_number,
    bus_company,
    departure_bus_stop,
    arrival_bus_stop,
    departure_time,
    arrival_time,
    departure_platform,
    arrival_platform,
});
combine_fields!(BoatTrip { name, departure_boat_terminal, arrival_boat_terminal, departure_time, arrival_time });
combine_fields!(Event { name, url, location, start_date, end_date, door_time });
combine_fields!(RentalCar { name, model, rental_company });
combine_fields!(Taxi { name });
combine_fields!(TouristAttractionVisit { tourist_attraction, arrival_time, departure_time });
combine_fields!(ReservationDetails {
    reservation_number,
    reservation_status,
    under_name,
    reserved_ticket,
    provider,
    modified_time,
    program_membership_used,
    potential_action,
    url,
    passenger_sequence_number,
    checkin_time,
    checkout_time,
    start_time,
    end_time,
    pickup_time,
    pickup_location,
    dropoff_time,
    dropoff_location,
});

combine_by_fields!(
    PostalAddress,
    Place,
    Seat,
    ProgramMembership,
    Flight,
    TrainTrip,
    BusTrip,
    BoatTrip,
    Event,
    RentalCar,
    Taxi,
    TouristAttractionVisit,
    ReservationDetails,
);

impl<T: Combine> Combine for Reservation<T> {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
        Self {
            reservation_for: Combine::combine(lhs.reservation_for, rhs.reservation_for, mode),
            details: Combine::combine(lhs.details, rhs.details, mode),
        }
    }
}

impl Combine for Person {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
        let names = (lhs.name.clone(), lhs.given_name.clone(), lhs.family_name.clone());
        let mut person = CombineFields::combine_fields(lhs, rhs.clone(), Mode::Overlay);
        if mode == Mode::Better {
            person.name = Combine::combine(names.0, rhs.name, mode);
            person.given_name = Combine::combine(names.1, rhs.given_name, mode);
            person.family_name = Combine::combine(names.2, rhs.family_name, mode);
        }
        person
    }
}

impl Combine for Organization {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
        let name = lhs.name.clone();
        let mut organization = CombineFields::combine_fields(lhs, rhs.clone(), Mode::Overlay);
        if mode == Mode::Better {
            organization.name = Combine::combine(name, rhs.name, mode);
        }
        organization
    }
}

fn token_size(ticket: &Ticket) -> usize {
    ticket.ticket_token_data().map_or(0, str::len)
}

impl Combine for Ticket {
    fn combine(lhs: Self, rhs: Self, mode: Mode) -> Self {
        let lhs_type = lhs.token_type();
        let rhs_type = rhs.token_type();
        let lhs_token = lhs.ticket_token.clone();
        let rhs_token = rhs.ticket_token.clone();
        let lhs_size = token_size(&lhs);
        let rhs_size = token_size(&rhs);

        let mut ticket = CombineFields::combine_fields(lhs, rhs, Mode::Overlay);
        if mode == Mode::Better {
            // barcodes beat links, and longer barcodes beat shorter ones
            if ticket.token_type() == TokenType::Url && lhs_type.is_barcode() {
                ticket.ticket_token = lhs_token;
            } else if lhs_type.is_barcode() && rhs_type.is_barcode() {
                ticket.ticket_token = if lhs_size > rhs_size { lhs_token } else { rhs_token };
            }
        }
        ticket
    }
}

macro_rules! combine_variants {
    ($lhs:expr, $rhs:expr, $mode:expr, [$($variant:ident),* $(,)?]) => {
        match ($lhs, $rhs) {
            $((Fragment::$variant(l), Fragment::$variant(r)) => Ok(Fragment::$variant(Combine::combine(l, r, $mode))),)*
            (l, r) => Err(ReconcilerError::TypeMismatch {
                lhs: l.kind().name(),
                rhs: r.kind().name(),
            }),
        }
    };
}

fn combine_fragments(lhs: Fragment, rhs: Fragment, mode: Mode) -> Result<Fragment> {
    combine_variants!(lhs, rhs, mode, [
        FlightReservation,
        TrainReservation,
        BusReservation,
        BoatReservation,
        LodgingReservation,
        FoodEstablishmentReservation,
        EventReservation,
        RentalCarReservation,
        TaxiReservation,
        Flight,
        TrainTrip,
        BusTrip,
        BoatTrip,
        LodgingBusiness,
        FoodEstablishment,
        LocalBusiness,
        Event,
        RentalCar,
        Taxi,
        TouristAttractionVisit,
        TouristAttraction,
        Airport,
        TrainStation,
        BusStation,
        BoatTerminal,
        Ticket,
        ProgramMembership,
    ])
}

/// Overlays `rhs` onto `lhs`. Fails when the two are of different kinds.
pub fn try_apply(lhs: Fragment, rhs: Fragment) -> Result<Fragment> {
    combine_fragments(lhs, rhs, Mode::Overlay)
}

/// Combines two fragments known to describe the same entity.
///
/// The older side (by modification time) forms the base, the newer one is
/// merged on top. Fails when the two are of different kinds.
pub fn try_merge(lhs: Fragment, rhs: Fragment) -> Result<Fragment> {
    let modified = |f: &Fragment| f.reservation_details().and_then(|d| d.modified_time);
    if let (Some(lhs_modified), Some(rhs_modified)) = (modified(&lhs), modified(&rhs)) {
        if rhs_modified.to_utc_instant() < lhs_modified.to_utc_instant() {
            return combine_fragments(rhs, lhs, Mode::Better);
        }
    }
    combine_fragments(lhs, rhs, Mode::Better)
}

/// [`try_apply`] for optional inputs; a missing side yields the other one,
/// a kind mismatch is logged and yields `None`.
pub fn apply(lhs: Option<Fragment>, rhs: Option<Fragment>) -> Option<Fragment> {
    match (lhs, rhs) {
        (Some(l), Some(r)) => try_apply(l, r)
            .map_err(|e| warn!(error = %e, "apply failed"))
            .ok(),
        (l, r) => r.or(l),
    }
}

/// [`try_merge`] for optional inputs; a missing side yields the other one,
/// a kind mismatch is logged and yields `None`.
pub fn merge(lhs: Option<Fragment>, rhs: Option<Fragment>) -> Option<Fragment> {
    match (lhs, rhs) {
        (Some(l), Some(r)) => try_merge(l, r)
            .map_err(|e| warn!(error = %e, "type mismatch during merging"))
            .ok(),
        (l, r) => r.or(l),
    }
}

/// Merges two tickets with the same value preferences as [`merge`].
pub fn merge_tickets(lhs: Option<Ticket>, rhs: Option<Ticket>) -> Option<Ticket> {
    Combine::combine(lhs, rhs, Mode::Better)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinerary_core::{ActionKind, Airline};

    fn dt(s: &str) -> DateTimeValue {
        s.parse().unwrap()
    }

    fn create_test_reservation(number: &str, modified: Option<&str>) -> Reservation<Flight> {
        let mut res = Reservation::new(Flight {
            flight_number: Some("117".to_string()),
            ..Flight::default()
        });
        res.details.reservation_number = Some(number.to_string());
        res.details.modified_time = modified.map(dt);
        res
    }

    fn ticket(token: &str) -> Ticket {
        Ticket {
            ticket_token: Some(token.to_string()),
            ..Ticket::default()
        }
    }

    #[test]
    fn test_apply_overlays_present_values() {
        let mut lhs = create_test_reservation("ABC", None);
        lhs.details.url = Some("https://a.example".to_string());
        let mut rhs = Reservation::<Flight>::default();
        rhs.details.reservation_number = Some("XYZ".to_string());
        rhs.reservation_for = Some(Flight {
            departure_gate: Some("B12".to_string()),
            ..Flight::default()
        });

        let applied = try_apply(Fragment::FlightReservation(lhs), Fragment::FlightReservation(rhs)).unwrap();
        let Fragment::FlightReservation(res) = applied else {
            panic!("unexpected kind");
        };
        assert_eq!(res.details.reservation_number.as_deref(), Some("XYZ"));
        assert_eq!(res.details.url.as_deref(), Some("https://a.example"));
        let flight = res.reservation_for.unwrap();
        assert_eq!(flight.flight_number.as_deref(), Some("117"));
        assert_eq!(flight.departure_gate.as_deref(), Some("B12"));
    }

    #[test]
    fn test_type_mismatch() {
        let flight = Fragment::Flight(Flight::default());
        let taxi = Fragment::Taxi(Taxi::default());
        assert!(matches!(
            try_merge(flight.clone(), taxi.clone()),
            Err(ReconcilerError::TypeMismatch { lhs: "Flight", rhs: "Taxi" })
        ));
        assert_eq!(merge(Some(flight.clone()), Some(taxi)), None);
        assert_eq!(merge(Some(flight.clone()), None), Some(flight.clone()));
        assert_eq!(merge(None, Some(flight.clone())), Some(flight));
    }

    #[test]
    fn test_merge_prefers_better_strings() {
        let mut lhs = create_test_reservation("ABC", None);
        lhs.details.under_name = Some(Person::named("JOHN SMITH"));
        if let Some(flight) = lhs.reservation_for.as_mut() {
            flight.airline = Airline {
                name: Some("LUFTHANSA".to_string()),
                ..Airline::default()
            };
        }
        let mut rhs = create_test_reservation("ABC", None);
        rhs.details.under_name = Some(Person::named("John Smith"));
        if let Some(flight) = rhs.reservation_for.as_mut() {
            flight.airline = Airline {
                name: Some("Lufthansa".to_string()),
                iata_code: Some("LH".to_string()),
                ..Airline::default()
            };
        }

        let merged = merge(
            Some(Fragment::FlightReservation(rhs)),
            Some(Fragment::FlightReservation(lhs)),
        );
        let Some(Fragment::FlightReservation(res)) = merged else {
            panic!("unexpected merge result");
        };
        assert_eq!(res.details.under_name.unwrap().name(), "John Smith");
        let airline = res.reservation_for.unwrap().airline;
        assert_eq!(airline.name(), "Lufthansa");
        assert_eq!(airline.iata_code(), "LH");
    }

    #[test]
    fn test_merge_prefers_newer_modification() {
        let mut old = create_test_reservation("ABC", Some("2024-04-01T10:00:00Z"));
        old.details.reservation_status = Some(ReservationStatus::Confirmed);
        let mut new = create_test_reservation("ABC", Some("2024-04-02T10:00:00Z"));
        new.details.reservation_status = Some(ReservationStatus::Cancelled);

        for (a, b) in [(old.clone(), new.clone()), (new, old)] {
            let merged = try_merge(Fragment::FlightReservation(a), Fragment::FlightReservation(b)).unwrap();
            let details = merged.reservation_details().unwrap();
            assert_eq!(details.reservation_status, Some(ReservationStatus::Cancelled));
            assert_eq!(details.modified_time, Some(dt("2024-04-02T10:00:00Z")));
        }
    }

    #[test]
    fn test_merge_prefers_zoned_times() {
        let naive = dt("2024-05-01T09:00:00");
        let zoned = naive.assume_timezone(chrono_tz::Europe::Berlin).unwrap();
        let utc = dt("2024-05-01T07:00:00Z").in_timezone(chrono_tz::UTC);

        assert_eq!(DateTimeValue::combine(zoned, naive, Mode::Better), zoned);
        assert_eq!(DateTimeValue::combine(naive, zoned, Mode::Better), zoned);
        assert_eq!(DateTimeValue::combine(zoned, utc, Mode::Better), zoned);
        assert_eq!(DateTimeValue::combine(utc, zoned, Mode::Better), zoned);
        assert_eq!(DateTimeValue::combine(zoned, naive, Mode::Overlay), naive);
    }

    #[test]
    fn test_merge_ticket_tokens() {
        let merged = merge_tickets(Some(ticket("qrcode:ABCDEF")), Some(ticket("https://example.com/t")));
        assert_eq!(merged.unwrap().ticket_token.as_deref(), Some("qrcode:ABCDEF"));

        let merged = merge_tickets(Some(ticket("qrcode:ABCDEF")), Some(ticket("qrcode:ABC")));
        assert_eq!(merged.unwrap().ticket_token.as_deref(), Some("qrcode:ABCDEF"));

        let merged = merge_tickets(Some(ticket("qrcode:ABC")), Some(ticket("aztecbin:XYZ")));
        assert_eq!(merged.unwrap().ticket_token.as_deref(), Some("aztecbin:XYZ"));

        let merged = merge_tickets(Some(ticket("https://example.com/t")), Some(ticket("qrcode:ABC")));
        assert_eq!(merged.unwrap().ticket_token.as_deref(), Some("qrcode:ABC"));
    }

    #[test]
    fn test_merge_unions_actions() {
        let mut lhs = create_test_reservation("ABC", None);
        lhs.details.potential_action = vec![Action::new(ActionKind::ViewAction, "https://a.example")];
        let mut rhs = lhs.clone();
        rhs.details.potential_action.push(Action::new(ActionKind::CancelAction, "https://a.example/cancel"));

        let merged = try_merge(Fragment::FlightReservation(lhs), Fragment::FlightReservation(rhs)).unwrap();
        assert_eq!(merged.reservation_details().unwrap().potential_action.len(), 2);
    }

    #[test]
    fn test_merge_is_idempotent_and_monotone() {
        let mut full = create_test_reservation("ABC", Some("2024-04-01T10:00:00Z"));
        full.details.under_name = Some(Person::named("Jane Doe"));
        if let Some(flight) = full.reservation_for.as_mut() {
            flight.departure_airport.geo = GeoCoordinates::new(51.47, -0.45);
            flight.departure_time = Some(dt("2024-05-01T09:00:00Z"));
        }
        let full = Fragment::FlightReservation(full);
        assert_eq!(try_merge(full.clone(), full.clone()).unwrap(), full);

        let sparse = Fragment::FlightReservation(create_test_reservation("ABC", None));
        assert_eq!(try_merge(full.clone(), sparse.clone()).unwrap(), full);
        assert_eq!(try_merge(sparse, full.clone()).unwrap(), full);
    }
}
