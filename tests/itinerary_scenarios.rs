use anyhow::Result;
use chrono::NaiveDate;
use itinerary_core::{
    Airline, DateTimeValue, Flight, Fragment, Person, Place, Reservation, ReservationStatus, Ticket, TrainTrip,
};
use itinerary_reconciler::knowledgedb::{iata_code_from_name, is_plausible_distance_for_duration, IataCode};
use itinerary_reconciler::{is_same, is_same_person, merge, ExtractorPostprocessor, ExtractorValidator};
use proptest::prelude::*;

fn dt(s: &str) -> DateTimeValue {
    s.parse().expect("valid test timestamp")
}

fn airport(code: &str) -> Place {
    Place {
        iata_code: Some(code.to_string()),
        ..Place::default()
    }
}

fn create_test_flight(airline: &str, number: &str, departure_time: Option<&str>) -> Fragment {
    Fragment::FlightReservation(Reservation::new(Flight {
        flight_number: Some(number.to_string()),
        airline: Airline {
            iata_code: Some(airline.to_string()),
            ..Airline::default()
        },
        departure_airport: airport("LHR"),
        arrival_airport: airport("JFK"),
        departure_day: NaiveDate::from_ymd_opt(2024, 5, 1),
        departure_time: departure_time.map(dt),
        ..Flight::default()
    }))
}

fn create_test_train_leg(from: &str, to: &str, departure: &str, arrival: &str, token: Option<&str>) -> Fragment {
    let mut res = Reservation::new(TrainTrip {
        train_number: Some(format!("RE {}", &departure[11..13])),
        departure_station: Place::named(from),
        arrival_station: Place::named(to),
        departure_time: Some(dt(departure)),
        arrival_time: Some(dt(arrival)),
        ..TrainTrip::default()
    });
    res.details.reservation_number = Some("Q7RT2K".to_string());
    res.details.under_name = Some(Person::named("Erika Mustermann"));
    res.details.reserved_ticket = token.map(|t| Ticket {
        ticket_token: Some(t.to_string()),
        ..Ticket::default()
    });
    Fragment::TrainReservation(res)
}

#[test]
fn test_codeshare_flights_are_the_same() {
    let operating = create_test_flight("BA", "117", None);
    let marketing = create_test_flight("AA", "6113", None);
    assert!(is_same(&operating, &marketing));
    assert!(is_same(&marketing, &operating));
}

#[test]
fn test_conflicting_departure_time_blocks_merge() {
    let morning = create_test_flight("BA", "117", Some("2024-05-01T09:00:00Z"));
    let afternoon = create_test_flight("AA", "6113", Some("2024-05-01T14:00:00Z"));
    assert!(!is_same(&morning, &afternoon));

    let mut pp = ExtractorPostprocessor::new();
    pp.process([morning, afternoon]);
    assert_eq!(pp.result().len(), 2);
}

#[test]
fn test_person_tolerant_match() {
    assert!(is_same_person(&Person::named("JOHN SMITH"), &Person::named("John Smith")));
    assert!(!is_same_person(&Person::named("JOHN SMITH"), &Person::named("JANE SMITH")));
}

#[test]
fn test_minimal_cancellation_matches_booking() {
    let mut booking = Reservation::new(Flight {
        flight_number: Some("117".to_string()),
        departure_airport: airport("LHR"),
        arrival_airport: airport("JFK"),
        departure_day: NaiveDate::from_ymd_opt(2024, 5, 2),
        departure_time: Some(dt("2024-05-02T09:00:00Z")),
        ..Flight::default()
    });
    booking.details.reservation_number = Some("XYZ123".to_string());
    booking.details.reservation_status = Some(ReservationStatus::Confirmed);
    booking.details.url = Some("https://example.com/booking".to_string());

    let mut cancel: Reservation<Flight> = Reservation::default();
    cancel.details.reservation_number = Some("XYZ123".to_string());
    cancel.details.reservation_status = Some(ReservationStatus::Cancelled);
    cancel.details.modified_time = Some(dt("2024-05-01T09:00:00Z"));

    let booking = Fragment::FlightReservation(booking);
    let cancel = Fragment::FlightReservation(cancel);
    assert!(is_same(&booking, &cancel));
    assert!(is_same(&cancel, &booking));

    let mut validator = ExtractorValidator::new();
    assert!(!validator.is_valid_element(&cancel));
    validator.set_accept_only_complete(false);
    assert!(validator.is_valid_element(&cancel));
}

#[test]
fn test_cancellation_updates_status_through_pipeline() -> Result<()> {
    let mut booking = Reservation::new(Flight {
        flight_number: Some("117".to_string()),
        departure_airport: airport("LHR"),
        arrival_airport: airport("JFK"),
        departure_day: NaiveDate::from_ymd_opt(2024, 5, 2),
        departure_time: Some(dt("2024-05-02T09:00:00Z")),
        ..Flight::default()
    });
    booking.details.reservation_number = Some("XYZ123".to_string());
    booking.details.reservation_status = Some(ReservationStatus::Confirmed);
    booking.details.modified_time = Some(dt("2024-04-01T09:00:00Z"));

    let mut cancel: Reservation<Flight> = Reservation::default();
    cancel.details.reservation_number = Some("XYZ123".to_string());
    cancel.details.reservation_status = Some(ReservationStatus::Cancelled);
    cancel.details.modified_time = Some(dt("2024-05-01T09:00:00Z"));

    let mut pp = ExtractorPostprocessor::new();
    pp.process([Fragment::FlightReservation(booking), Fragment::FlightReservation(cancel)]);
    let result = pp.result();
    assert_eq!(result.len(), 1);

    let details = result[0].reservation_details().ok_or_else(|| anyhow::anyhow!("not a reservation"))?;
    assert_eq!(details.reservation_status, Some(ReservationStatus::Cancelled));
    assert!(result[0].has_reservation_for());
    Ok(())
}

#[test]
fn test_triangular_dedup() {
    let mut pp = ExtractorPostprocessor::new();
    pp.process([
        create_test_train_leg("Koeln Hbf", "Bonn Hbf", "2024-07-10T07:05:00Z", "2024-07-10T07:30:00Z", None),
        create_test_train_leg("Bonn Hbf", "Koblenz Hbf", "2024-07-10T07:40:00Z", "2024-07-10T08:25:00Z", None),
        create_test_train_leg(
            "Koeln Hbf",
            "Koblenz Hbf",
            "2024-07-10T07:05:00Z",
            "2024-07-10T08:25:00Z",
            Some("qrcode:0815"),
        ),
    ]);

    let result = pp.result();
    assert_eq!(result.len(), 2);
    let stations: Vec<&str> = result
        .iter()
        .filter_map(|f| match f {
            Fragment::TrainReservation(res) => res.reservation_for.as_ref().map(|t| t.departure_station.name()),
            _ => None,
        })
        .collect();
    assert_eq!(stations, vec!["Koeln Hbf", "Bonn Hbf"]);
    for leg in &result {
        let ticket = leg.reservation_details().and_then(|d| d.reserved_ticket.as_ref());
        assert_eq!(ticket.and_then(|t| t.ticket_token.as_deref()), Some("qrcode:0815"));
    }
}

#[test]
fn test_airport_name_disambiguation() {
    assert_eq!(iata_code_from_name("San Francisco International Airport"), IataCode::parse("SFO"));
    assert!(!iata_code_from_name("Nowhere Field").is_valid());
}

#[test]
fn test_flight_plausibility_filter() {
    // 50 km/h over two hours
    assert!(!is_plausible_distance_for_duration(100_000, 2 * 3600));
}

fn arb_flight_reservation() -> impl Strategy<Value = Fragment> {
    (
        prop::sample::select(vec!["LHR", "FRA", "CDG"]),
        prop::sample::select(vec!["JFK", "SFO"]),
        prop::option::of(prop::sample::select(vec!["117", "6113", "400"])),
        prop::sample::select(vec!["BA", "AA", "LH"]),
        1u32..=3,
        prop::option::of(prop::sample::select(vec![9u32, 14])),
        prop::option::of(prop::sample::select(vec!["XYZ123", "ABC987"])),
        prop::option::of(prop::sample::select(vec!["John Smith", "JOHN SMITH", "Jane Doe"])),
        prop::option::of(prop::sample::select(vec!["B20", "A1"])),
    )
        .prop_map(|(from, to, number, airline, day, hour, pnr, name, gate)| {
            let mut res = Reservation::new(Flight {
                flight_number: number.map(str::to_string),
                airline: Airline {
                    iata_code: Some(airline.to_string()),
                    ..Airline::default()
                },
                departure_airport: airport(from),
                arrival_airport: airport(to),
                departure_day: NaiveDate::from_ymd_opt(2024, 5, day),
                departure_time: hour.map(|h| dt(&format!("2024-05-0{day}T{h:02}:00:00Z"))),
                departure_gate: gate.map(str::to_string),
                ..Flight::default()
            });
            res.details.reservation_number = pnr.map(str::to_string);
            res.details.under_name = name.map(Person::named);
            Fragment::FlightReservation(res)
        })
}

fn flight_of(fragment: &Fragment) -> &Flight {
    match fragment {
        Fragment::FlightReservation(res) => res.reservation_for.as_ref().expect("flight"),
        other => panic!("unexpected {:?}", other.kind()),
    }
}

proptest! {
    #[test]
    fn prop_is_same_is_reflexive(a in arb_flight_reservation()) {
        prop_assert!(is_same(&a, &a));
    }

    #[test]
    fn prop_is_same_is_symmetric(a in arb_flight_reservation(), b in arb_flight_reservation()) {
        prop_assert_eq!(is_same(&a, &b), is_same(&b, &a));
    }

    #[test]
    fn prop_merge_is_idempotent(a in arb_flight_reservation()) {
        prop_assert_eq!(merge(Some(a.clone()), Some(a.clone())), Some(a));
    }

    #[test]
    fn prop_merge_never_drops_values(a in arb_flight_reservation(), b in arb_flight_reservation()) {
        let merged = merge(Some(a.clone()), Some(b.clone())).expect("same type");
        let (a_details, b_details) = (a.reservation_details().unwrap(), b.reservation_details().unwrap());
        let merged_details = merged.reservation_details().unwrap();

        if a_details.reservation_number.is_some() && b_details.reservation_number.is_none() {
            prop_assert_eq!(&merged_details.reservation_number, &a_details.reservation_number);
        }
        if a_details.under_name.is_some() && b_details.under_name.is_none() {
            prop_assert_eq!(&merged_details.under_name, &a_details.under_name);
        }

        let (a_flight, b_flight, merged_flight) = (flight_of(&a), flight_of(&b), flight_of(&merged));
        if a_flight.departure_gate.is_some() && b_flight.departure_gate.is_none() {
            prop_assert_eq!(&merged_flight.departure_gate, &a_flight.departure_gate);
        }
        if a_flight.departure_time.is_some() && b_flight.departure_time.is_none() {
            prop_assert_eq!(merged_flight.departure_time, a_flight.departure_time);
        }
        if a_flight.flight_number.is_some() && b_flight.flight_number.is_none() {
            prop_assert_eq!(&merged_flight.flight_number, &a_flight.flight_number);
        }
    }
}
