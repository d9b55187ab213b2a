//! Final plausibility check on reconciled fragments.
//!
//! The validator is a pure predicate. It first checks the fragment against
//! the configured list of accepted top-level types, then walks the type
//! hierarchy from the most-derived kind upwards and applies every filter
//! registered for one of those kinds. The first failing filter rejects the
//! element.

use itinerary_core::{Fragment, FragmentKind, Place};
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::observability::metrics;

/// Structural filter applied to a fragment whose hierarchy contains `kind`.
type Filter = fn(&ExtractorValidator, &Fragment) -> bool;

const FILTERS: [(FragmentKind, Filter); 11] = [
    (FragmentKind::Flight, ExtractorValidator::filter_flight),
    (FragmentKind::TrainTrip, ExtractorValidator::filter_train_trip),
    (FragmentKind::BusTrip, ExtractorValidator::filter_bus_trip),
    (FragmentKind::BoatTrip, ExtractorValidator::filter_boat_trip),
    (FragmentKind::Event, ExtractorValidator::filter_event),
    (FragmentKind::LocalBusiness, ExtractorValidator::filter_local_business),
    (FragmentKind::FoodEstablishmentReservation, ExtractorValidator::filter_food_reservation),
    (FragmentKind::LodgingReservation, ExtractorValidator::filter_lodging_reservation),
    (FragmentKind::Reservation, ExtractorValidator::filter_reservation),
    (FragmentKind::ProgramMembership, ExtractorValidator::filter_program_membership),
    (FragmentKind::Ticket, ExtractorValidator::filter_ticket),
];

/// Decides whether a fragment is complete enough to be shown to a user.
#[derive(Debug, Clone)]
pub struct ExtractorValidator {
    /// Accepted top-level kinds, empty accepts everything
    accepted_types: Vec<FragmentKind>,
    /// Reject minimal cancellation stubs
    only_complete: bool,
}

impl Default for ExtractorValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&ValidatorConfig> for ExtractorValidator {
    fn from(config: &ValidatorConfig) -> Self {
        Self {
            accepted_types: config.accepted_kinds(),
            only_complete: config.accept_only_complete,
        }
    }
}

impl ExtractorValidator {
    /// A validator that accepts every type and only complete elements.
    pub fn new() -> Self {
        Self {
            accepted_types: Vec::new(),
            only_complete: true,
        }
    }

    pub fn set_accepted_types(&mut self, types: Vec<FragmentKind>) {
        self.accepted_types = types;
    }

    pub fn set_accept_only_complete(&mut self, only_complete: bool) {
        self.only_complete = only_complete;
    }

    pub fn is_valid_element(&self, fragment: &Fragment) -> bool {
        if !self.is_supported_top_level_type(fragment) {
            debug!(kind = fragment.kind().name(), "element discarded due to unsupported top-level type");
            metrics::validator::rejected();
            return false;
        }

        let valid = self.filter_element(fragment);
        if valid {
            metrics::validator::accepted();
        } else {
            metrics::validator::rejected();
        }
        valid
    }

    fn is_supported_top_level_type(&self, fragment: &Fragment) -> bool {
        if self.accepted_types.is_empty() {
            return true;
        }
        fragment
            .kind()
            .ancestors()
            .iter()
            .any(|kind| self.accepted_types.contains(kind))
    }

    fn filter_element(&self, fragment: &Fragment) -> bool {
        fragment.kind().ancestors().into_iter().all(|kind| {
            FILTERS
                .iter()
                .filter(|(filter_kind, _)| *filter_kind == kind)
                .all(|(_, filter)| filter(self, fragment))
        })
    }

    fn filter_flight(&self, fragment: &Fragment) -> bool {
        let Fragment::Flight(flight) = fragment else {
            return false;
        };
        has_name_or_code(&flight.departure_airport)
            && has_name_or_code(&flight.arrival_airport)
            && flight.departure_day.is_some()
    }

    fn filter_train_trip(&self, fragment: &Fragment) -> bool {
        let Fragment::TrainTrip(trip) = fragment else {
            return false;
        };
        trip.departure_station.has_name() && trip.arrival_station.has_name() && trip.departure_day.is_some()
    }

    fn filter_bus_trip(&self, fragment: &Fragment) -> bool {
        let Fragment::BusTrip(trip) = fragment else {
            return false;
        };
        trip.departure_bus_stop.has_name() && trip.arrival_bus_stop.has_name() && trip.departure_time.is_some()
    }

    fn filter_boat_trip(&self, fragment: &Fragment) -> bool {
        let Fragment::BoatTrip(trip) = fragment else {
            return false;
        };
        trip.departure_boat_terminal.has_name()
            && trip.arrival_boat_terminal.has_name()
            && trip.departure_time.is_some()
            && trip.arrival_time.is_some()
    }

    fn filter_event(&self, fragment: &Fragment) -> bool {
        let Fragment::Event(event) = fragment else {
            return false;
        };
        event.name.as_deref().is_some_and(|name| !name.is_empty()) && event.start_date.is_some()
    }

    fn filter_local_business(&self, fragment: &Fragment) -> bool {
        match fragment {
            Fragment::LocalBusiness(place) | Fragment::LodgingBusiness(place) | Fragment::FoodEstablishment(place) => {
                place.has_name()
            }
            _ => false,
        }
    }

    fn filter_food_reservation(&self, fragment: &Fragment) -> bool {
        fragment
            .reservation_details()
            .is_some_and(|details| details.start_time.is_some())
    }

    fn filter_lodging_reservation(&self, fragment: &Fragment) -> bool {
        let Some(details) = fragment.reservation_details() else {
            return false;
        };
        match (details.checkin_time, details.checkout_time) {
            (Some(checkin), Some(checkout)) => checkin.to_utc_instant() <= checkout.to_utc_instant(),
            _ => false,
        }
    }

    fn filter_reservation(&self, fragment: &Fragment) -> bool {
        let Some(details) = fragment.reservation_details() else {
            return false;
        };
        if !self.only_complete
            && !fragment.has_reservation_for()
            && details.modified_time.is_some()
            && !details.reservation_number().is_empty()
            && details.is_cancelled()
        {
            return true;
        }

        match fragment.reservation_for_fragment() {
            Some(reservation_for) if self.filter_element(&reservation_for) => true,
            Some(reservation_for) => {
                debug!(
                    kind = reservation_for.kind().name(),
                    "reservation discarded due to rejected reservationFor property"
                );
                false
            }
            None => {
                debug!(kind = fragment.kind().name(), "reservation discarded due to missing reservationFor property");
                false
            }
        }
    }

    fn filter_program_membership(&self, fragment: &Fragment) -> bool {
        let Fragment::ProgramMembership(program) = fragment else {
            return false;
        };
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        (present(&program.membership_number) || present(&program.token)) && present(&program.program_name)
    }

    fn filter_ticket(&self, fragment: &Fragment) -> bool {
        let Fragment::Ticket(ticket) = fragment else {
            return false;
        };
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        present(&ticket.ticket_token) && present(&ticket.name)
    }
}

fn has_name_or_code(airport: &Place) -> bool {
    airport.has_name() || !airport.iata_code().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use itinerary_core::{
        DateTimeValue, Event, Flight, ProgramMembership, Reservation, ReservationStatus, Ticket, TrainTrip,
    };

    fn dt(s: &str) -> DateTimeValue {
        s.parse().unwrap()
    }

    fn create_test_flight() -> Flight {
        Flight {
            departure_airport: Place {
                iata_code: Some("TXL".to_string()),
                ..Place::default()
            },
            arrival_airport: Place::named("Charles de Gaulle"),
            departure_day: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..Flight::default()
        }
    }

    fn create_test_cancellation() -> Fragment {
        let mut res = Reservation::<Flight>::default();
        res.details.reservation_number = Some("XYZ123".to_string());
        res.details.reservation_status = Some(ReservationStatus::Cancelled);
        res.details.modified_time = Some(dt("2024-04-30T10:00:00Z"));
        Fragment::FlightReservation(res)
    }

    #[test]
    fn test_flight_filters() {
        let validator = ExtractorValidator::new();
        assert!(validator.is_valid_element(&Fragment::Flight(create_test_flight())));
        assert!(validator.is_valid_element(&Fragment::FlightReservation(Reservation::new(create_test_flight()))));

        let mut flight = create_test_flight();
        flight.departure_day = None;
        assert!(!validator.is_valid_element(&Fragment::Flight(flight.clone())));
        assert!(!validator.is_valid_element(&Fragment::FlightReservation(Reservation::new(flight))));

        let mut flight = create_test_flight();
        flight.arrival_airport = Place::default();
        assert!(!validator.is_valid_element(&Fragment::Flight(flight)));
    }

    #[test]
    fn test_reservation_requires_reservation_for() {
        let validator = ExtractorValidator::new();
        assert!(!validator.is_valid_element(&Fragment::TrainReservation(Reservation::default())));

        let trip = TrainTrip {
            departure_station: Place::named("Berlin Hbf"),
            arrival_station: Place::named("Hamburg Hbf"),
            departure_day: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..TrainTrip::default()
        };
        assert!(validator.is_valid_element(&Fragment::TrainReservation(Reservation::new(trip))));
    }

    #[test]
    fn test_minimal_cancellation() {
        let mut validator = ExtractorValidator::new();
        assert!(!validator.is_valid_element(&create_test_cancellation()));
        validator.set_accept_only_complete(false);
        assert!(validator.is_valid_element(&create_test_cancellation()));

        let mut not_cancelled = create_test_cancellation();
        if let Some(details) = not_cancelled.reservation_details_mut() {
            details.reservation_status = Some(ReservationStatus::Confirmed);
        }
        assert!(!validator.is_valid_element(&not_cancelled));
    }

    #[test]
    fn test_lodging_reservation() {
        let validator = ExtractorValidator::new();
        let mut res = Reservation::new(Place::named("Hotel Adlon"));
        res.details.checkin_time = Some(dt("2024-05-01T15:00:00"));
        assert!(!validator.is_valid_element(&Fragment::LodgingReservation(res.clone())));

        res.details.checkout_time = Some(dt("2024-05-03T11:00:00"));
        assert!(validator.is_valid_element(&Fragment::LodgingReservation(res.clone())));

        res.details.checkout_time = Some(dt("2024-04-30T11:00:00"));
        assert!(!validator.is_valid_element(&Fragment::LodgingReservation(res.clone())));

        res.details.checkout_time = Some(dt("2024-05-03T11:00:00"));
        res.reservation_for = Some(Place::default());
        assert!(!validator.is_valid_element(&Fragment::LodgingReservation(res)));
    }

    #[test]
    fn test_accepted_types_walk_the_hierarchy() {
        let mut validator = ExtractorValidator::new();
        validator.set_accepted_types(vec![FragmentKind::LocalBusiness]);
        assert!(validator.is_valid_element(&Fragment::LodgingBusiness(Place::named("Hotel"))));
        assert!(validator.is_valid_element(&Fragment::LocalBusiness(Place::named("Shop"))));
        assert!(!validator.is_valid_element(&Fragment::Flight(create_test_flight())));
        assert!(!validator.is_valid_element(&Fragment::LocalBusiness(Place::default())));

        let validator = ExtractorValidator::from(&ValidatorConfig::default());
        assert!(validator.is_valid_element(&Fragment::Flight(create_test_flight())));
        assert!(!validator.is_valid_element(&Fragment::Airport(Place::named("Tegel"))));
    }

    #[test]
    fn test_event_membership_and_ticket() {
        let validator = ExtractorValidator::new();
        let event = Event {
            name: Some("Concert".to_string()),
            start_date: Some(dt("2024-05-01T20:00:00")),
            ..Event::default()
        };
        assert!(validator.is_valid_element(&Fragment::Event(event.clone())));
        assert!(!validator.is_valid_element(&Fragment::Event(Event {
            start_date: None,
            ..event
        })));

        let program = ProgramMembership {
            program_name: Some("BahnCard 25".to_string()),
            membership_number: Some("7081411234567890".to_string()),
            ..ProgramMembership::default()
        };
        assert!(validator.is_valid_element(&Fragment::ProgramMembership(program.clone())));
        assert!(!validator.is_valid_element(&Fragment::ProgramMembership(ProgramMembership {
            program_name: None,
            ..program
        })));

        let ticket = Ticket {
            name: Some("Day pass".to_string()),
            ticket_token: Some("qrcode:12345".to_string()),
            ..Ticket::default()
        };
        assert!(validator.is_valid_element(&Fragment::Ticket(ticket.clone())));
        assert!(!validator.is_valid_element(&Fragment::Ticket(Ticket {
            ticket_token: None,
            ..ticket
        })));
    }
}
