//! Chronological ordering of itinerary fragments.

use chrono::NaiveDate;
use itinerary_core::{DateTimeValue, Flight, Fragment, TrainTrip};

use crate::knowledgedb::{timezone_for_airport, IataCode};
use crate::pipeline::processing::equality::{is_same_reservation_for, same_time};

/// `date` at the given wall-clock time, in the zone of `like` when it has one.
fn at_time_of_day(date: NaiveDate, like: &DateTimeValue, hour: u32, min: u32, sec: u32) -> Option<DateTimeValue> {
    let naive = DateTimeValue::naive(date, hour, min, sec)?;
    match like.timezone() {
        Some(tz) => naive.assume_timezone(tz),
        None => Some(naive),
    }
}

fn end_of_day(date: NaiveDate, airport_iata: &str) -> Option<DateTimeValue> {
    let naive = DateTimeValue::naive(date, 23, 59, 59)?;
    match timezone_for_airport(IataCode::parse(airport_iata)) {
        Some(tz) => naive.assume_timezone(tz),
        None => Some(naive),
    }
}

fn flight_start(flight: &Flight) -> Option<DateTimeValue> {
    flight
        .departure_time
        .or(flight.boarding_time)
        .or_else(|| end_of_day(flight.departure_day?, flight.departure_airport.iata_code()))
}

fn flight_end(flight: &Flight) -> Option<DateTimeValue> {
    flight
        .arrival_time
        .or_else(|| end_of_day(flight.departure_day?, flight.arrival_airport.iata_code()))
}

fn train_start(trip: &TrainTrip) -> Option<DateTimeValue> {
    trip.departure_time
        .or_else(|| DateTimeValue::naive(trip.departure_day?, 23, 59, 59))
}

fn train_end(trip: &TrainTrip) -> Option<DateTimeValue> {
    trip.arrival_time
        .or_else(|| DateTimeValue::naive(trip.departure_day?, 23, 59, 59))
}

/// The point in time a fragment starts at, used as its sort key.
pub fn start_time(fragment: &Fragment) -> Option<DateTimeValue> {
    match fragment {
        Fragment::FoodEstablishmentReservation(res) => res.details.start_time,
        Fragment::LodgingReservation(res) => {
            // hotels sort after everything else arriving on the same day
            let checkin = res.details.checkin_time?;
            at_time_of_day(checkin.date(), &checkin, 23, 59, 59)
        }
        Fragment::RentalCarReservation(res) => res.details.pickup_time,
        Fragment::TaxiReservation(res) => res.details.pickup_time,
        _ if fragment.is_reservation() => start_time(&fragment.reservation_for_fragment()?),

        Fragment::TouristAttractionVisit(visit) => visit.arrival_time,
        Fragment::Flight(flight) => flight_start(flight),
        Fragment::TrainTrip(trip) => train_start(trip),
        Fragment::BusTrip(trip) => trip.departure_time,
        Fragment::BoatTrip(trip) => trip.departure_time,
        Fragment::Event(event) => event.start_date,
        Fragment::Ticket(ticket) => ticket.valid_from,
        Fragment::ProgramMembership(membership) => membership.valid_from,
        _ => None,
    }
}

pub fn end_time(fragment: &Fragment) -> Option<DateTimeValue> {
    match fragment {
        Fragment::FoodEstablishmentReservation(res) => res.details.end_time.or_else(|| {
            let start = res.details.start_time?;
            DateTimeValue::naive(start.date(), 23, 59, 59)
        }),
        Fragment::RentalCarReservation(res) => res.details.dropoff_time,
        Fragment::LodgingReservation(res) => {
            let checkout = res.details.checkout_time?;
            at_time_of_day(checkout.date(), &checkout, 0, 0, 0)
        }
        _ if fragment.is_reservation() => end_time(&fragment.reservation_for_fragment()?),

        Fragment::TouristAttractionVisit(visit) => visit.departure_time,
        Fragment::Event(event) => event.end_date,
        Fragment::Flight(flight) => flight_end(flight),
        Fragment::TrainTrip(trip) => train_end(trip),
        Fragment::BusTrip(trip) => trip.arrival_time,
        Fragment::BoatTrip(trip) => trip.arrival_time,
        Fragment::Ticket(ticket) => ticket.valid_until,
        Fragment::ProgramMembership(membership) => membership.valid_until,
        _ => None,
    }
}

/// Whether an actual start time is known, as opposed to one derived from a day.
pub fn has_start_time(fragment: &Fragment) -> bool {
    match fragment {
        Fragment::FoodEstablishmentReservation(res) => res.details.start_time.is_some(),
        _ if fragment.is_reservation() => fragment
            .reservation_for_fragment()
            .is_some_and(|target| has_start_time(&target)),
        Fragment::TrainTrip(trip) => trip.departure_time.is_some(),
        Fragment::Flight(flight) => flight.departure_time.is_some(),
        _ => start_time(fragment).is_some(),
    }
}

pub fn has_end_time(fragment: &Fragment) -> bool {
    match fragment {
        Fragment::FoodEstablishmentReservation(res) => res.details.end_time.is_some(),
        _ if fragment.is_reservation() => fragment
            .reservation_for_fragment()
            .is_some_and(|target| has_end_time(&target)),
        Fragment::TrainTrip(trip) => trip.arrival_time.is_some(),
        Fragment::Flight(flight) => flight.arrival_time.is_some(),
        _ => end_time(fragment).is_some(),
    }
}

/// Missing times sort first.
fn time_less(lhs: &Option<DateTimeValue>, rhs: &Option<DateTimeValue>) -> bool {
    match (lhs, rhs) {
        (Some(l), Some(r)) => l.to_utc_instant() < r.to_utc_instant(),
        (None, Some(_)) => true,
        _ => false,
    }
}

/// Strict "sorts before" relation between two fragments.
///
/// Reservations of the same kind starting at the same time are ordered by
/// end time (hotels), then by traveller name and ticket name so that
/// multi-traveller bookings come out in a stable order.
pub fn is_before(lhs: &Fragment, rhs: &Fragment) -> bool {
    let lhs_start = start_time(lhs);
    let rhs_start = start_time(rhs);

    if same_time(&lhs_start, &rhs_start) && lhs.kind() == rhs.kind() {
        if let (Some(lhs_res), Some(rhs_res)) = (lhs.reservation_details(), rhs.reservation_details()) {
            if matches!(lhs, Fragment::LodgingReservation(_)) {
                let (lhs_end, rhs_end) = (end_time(lhs), end_time(rhs));
                if lhs_end.is_some() && rhs_end.is_some() && !same_time(&lhs_end, &rhs_end) {
                    return time_less(&lhs_end, &rhs_end);
                }
            }

            if let (Some(lhs_name), Some(rhs_name)) = (&lhs_res.under_name, &rhs_res.under_name) {
                if is_same_reservation_for(lhs, rhs) {
                    if lhs_name.name() == rhs_name.name() {
                        let lhs_ticket = lhs_res.reserved_ticket.as_ref().and_then(|t| t.name.as_deref());
                        let rhs_ticket = rhs_res.reserved_ticket.as_ref().and_then(|t| t.name.as_deref());
                        return lhs_ticket.unwrap_or("") < rhs_ticket.unwrap_or("");
                    }
                    return lhs_name.name() < rhs_name.name();
                }
            }
        }
    }

    time_less(&lhs_start, &rhs_start)
}

/// Stable insertion sort over [`is_before`], which is not guaranteed to be a
/// total order.
pub fn sort(fragments: &mut [Fragment]) {
    for i in 1..fragments.len() {
        let mut j = i;
        while j > 0 && is_before(&fragments[j], &fragments[j - 1]) {
            fragments.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinerary_core::{Person, Place, Reservation, Ticket};

    fn dt(s: &str) -> DateTimeValue {
        s.parse().unwrap()
    }

    fn create_test_train(departure: &str, number: &str) -> Reservation<TrainTrip> {
        Reservation::new(TrainTrip {
            train_number: Some(number.to_string()),
            departure_station: Place::named("Hamburg Hbf"),
            arrival_station: Place::named("Berlin Hbf"),
            departure_time: Some(dt(departure)),
            ..TrainTrip::default()
        })
    }

    fn create_test_hotel(checkin: &str, checkout: &str) -> Fragment {
        let mut res = Reservation::new(Place::named("Hotel Adlon"));
        res.details.checkin_time = Some(dt(checkin));
        res.details.checkout_time = Some(dt(checkout));
        Fragment::LodgingReservation(res)
    }

    #[test]
    fn test_lodging_start_is_end_of_checkin_day() {
        let hotel = create_test_hotel("2024-05-01T15:00:00", "2024-05-03T11:00:00");
        assert_eq!(start_time(&hotel), Some(dt("2024-05-01T23:59:59")));
        assert_eq!(end_time(&hotel), Some(dt("2024-05-03T00:00:00")));
        assert!(!has_start_time(&hotel));
    }

    #[test]
    fn test_flight_without_times_uses_departure_day_in_airport_zone() {
        let flight = Flight {
            departure_airport: Place {
                iata_code: Some("FRA".to_string()),
                ..Place::default()
            },
            departure_day: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..Flight::default()
        };
        let start = start_time(&Fragment::Flight(flight.clone())).unwrap();
        assert_eq!(start.timezone(), Some(chrono_tz::Europe::Berlin));
        assert_eq!(start.naive_local().to_string(), "2024-05-01 23:59:59");
        assert!(!has_start_time(&Fragment::Flight(flight)));
    }

    #[test]
    fn test_food_end_defaults_to_end_of_start_day() {
        let mut res = Reservation::new(Place::named("Trattoria"));
        res.details.start_time = Some(dt("2024-05-01T19:30:00"));
        let food = Fragment::FoodEstablishmentReservation(res);
        assert_eq!(end_time(&food), Some(dt("2024-05-01T23:59:59")));
        assert!(has_start_time(&food));
        assert!(!has_end_time(&food));
    }

    #[test]
    fn test_sort_by_start_time_and_missing_first() {
        let early = Fragment::TrainReservation(create_test_train("2024-05-01T08:00:00Z", "ICE 1"));
        let late = Fragment::TrainReservation(create_test_train("2024-05-01T12:00:00Z", "ICE 2"));
        let timeless = Fragment::Taxi(itinerary_core::Taxi::default());

        let mut fragments = vec![late.clone(), early.clone(), timeless.clone()];
        sort(&mut fragments);
        assert_eq!(fragments, vec![timeless, early, late]);
    }

    #[test]
    fn test_same_train_sorted_by_traveller_then_ticket() {
        let mut alice = create_test_train("2024-05-01T08:00:00Z", "ICE 1");
        alice.details.under_name = Some(Person::named("Alice"));
        let mut bob = alice.clone();
        bob.details.under_name = Some(Person::named("Bob"));
        let mut alice_return = alice.clone();
        alice.details.reserved_ticket = Some(Ticket {
            name: Some("B".to_string()),
            ..Ticket::default()
        });
        alice_return.details.reserved_ticket = Some(Ticket {
            name: Some("A".to_string()),
            ..Ticket::default()
        });

        let alice = Fragment::TrainReservation(alice);
        let bob = Fragment::TrainReservation(bob);
        let alice_return = Fragment::TrainReservation(alice_return);
        assert!(is_before(&alice, &bob));
        assert!(!is_before(&bob, &alice));
        assert!(is_before(&alice_return, &alice));

        let mut fragments = vec![bob.clone(), alice.clone(), alice_return.clone()];
        sort(&mut fragments);
        assert_eq!(fragments, vec![alice_return, alice, bob]);
    }

    #[test]
    fn test_overlapping_hotels_sorted_by_checkout() {
        let long_stay = create_test_hotel("2024-05-01T15:00:00", "2024-05-05T11:00:00");
        let short_stay = create_test_hotel("2024-05-01T15:00:00", "2024-05-02T11:00:00");
        assert!(is_before(&short_stay, &long_stay));
        assert!(!is_before(&long_stay, &short_stay));
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let first = Fragment::TrainReservation(create_test_train("2024-05-01T08:00:00Z", "ICE 1"));
        let second = Fragment::TrainReservation(create_test_train("2024-05-01T08:00:00Z", "ICE 2"));
        let mut fragments = vec![first.clone(), second.clone()];
        sort(&mut fragments);
        assert_eq!(fragments, vec![first, second]);
    }
}
