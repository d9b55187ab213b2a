//! Per-type augmentation of incoming fragments.
//!
//! Places get country and coordinates from their identifiers, strings are
//! cleaned up and wall-clock times are resolved into the timezone of the
//! location they refer to. Nothing in here fails: data that cannot be
//! completed is left as it was.

pub mod bcbp;
pub mod flight;

use chrono::NaiveDate;
use chrono_tz::Tz;
use itinerary_core::{
    Action, ActionKind, BoatTrip, BusTrip, DateTimeValue, Event, Flight, Fragment, GeoCoordinates, Person, Place,
    PostalAddress, ProgramMembership, RentalCar, Reservation, ReservationDetails, TouristAttractionVisit, TrainTrip,
};
use tracing::debug;

use crate::common::strings::{simplify_field, trim_field};
use crate::knowledgedb::{
    country_for_coordinate, country_for_phone_number, country_id_for_uic_code, country_id_from_iso3166_1_alpha3,
    is_plausible_timezone, stations, timezone_for_location, AmtrakStationCode, BenerailStationId, CountryId,
    CountryId3, Ibnr, IataCode, SncfStationId, TrainStation, UicStationId, UkRailwayStationCode,
    ViaRailStationCode, VrStationCode,
};
use crate::observability::metrics;

pub use flight::FlightPostProcessor;

/// Normalizes a single fragment according to its type.
///
/// Flight reservations only get their flight and reservation data processed
/// here; boarding pass expansion happens in the post-processor, which knows
/// the context date.
pub fn normalize(fragment: Fragment) -> Fragment {
    match fragment {
        Fragment::FlightReservation(res) => Fragment::FlightReservation(process_flight_reservation(res)),
        Fragment::TrainReservation(mut res) => {
            res.reservation_for = res.reservation_for.map(process_train_trip);
            Fragment::TrainReservation(process_reservation(res))
        }
        Fragment::BusReservation(mut res) => {
            res.reservation_for = res.reservation_for.map(process_bus_trip);
            Fragment::BusReservation(process_reservation(res))
        }
        Fragment::BoatReservation(mut res) => {
            res.reservation_for = res.reservation_for.map(process_boat_trip);
            Fragment::BoatReservation(process_reservation(res))
        }
        Fragment::LodgingReservation(res) => Fragment::LodgingReservation(process_lodging_reservation(res)),
        Fragment::FoodEstablishmentReservation(res) => {
            Fragment::FoodEstablishmentReservation(process_food_reservation(res))
        }
        Fragment::EventReservation(mut res) => {
            res.reservation_for = res.reservation_for.map(process_event);
            Fragment::EventReservation(process_reservation(res))
        }
        Fragment::RentalCarReservation(res) => Fragment::RentalCarReservation(process_rental_car_reservation(res)),
        Fragment::TaxiReservation(mut res) => {
            process_pickup(&mut res.details);
            Fragment::TaxiReservation(process_reservation(res))
        }
        Fragment::Flight(flight) => Fragment::Flight(FlightPostProcessor::new().process_flight(flight)),
        Fragment::TrainTrip(trip) => Fragment::TrainTrip(process_train_trip(trip)),
        Fragment::BusTrip(trip) => Fragment::BusTrip(process_bus_trip(trip)),
        Fragment::BoatTrip(trip) => Fragment::BoatTrip(process_boat_trip(trip)),
        Fragment::LodgingBusiness(place) => Fragment::LodgingBusiness(process_place(place)),
        Fragment::FoodEstablishment(place) => Fragment::FoodEstablishment(process_place(place)),
        Fragment::Event(event) => Fragment::Event(process_event(event)),
        Fragment::TouristAttractionVisit(visit) => Fragment::TouristAttractionVisit(process_tourist_attraction_visit(visit)),
        Fragment::ProgramMembership(program) => Fragment::ProgramMembership(process_program_membership(program)),
        other => other,
    }
}

pub fn process_flight_reservation(mut res: Reservation<Flight>) -> Reservation<Flight> {
    res.reservation_for = res
        .reservation_for
        .map(|flight| FlightPostProcessor::new().process_flight(flight));
    process_reservation(res)
}

fn process_lodging_reservation(mut res: Reservation<Place>) -> Reservation<Place> {
    if let Some(place) = res.reservation_for.take() {
        let place = process_place(place);
        res.details.checkin_time = process_time_for_location(res.details.checkin_time, &place);
        res.details.checkout_time = process_time_for_location(res.details.checkout_time, &place);
        res.reservation_for = Some(place);
    }
    process_reservation(res)
}

fn process_food_reservation(mut res: Reservation<Place>) -> Reservation<Place> {
    if let Some(place) = res.reservation_for.take() {
        let place = process_place(place);
        res.details.start_time = process_time_for_location(res.details.start_time, &place);
        res.details.end_time = process_time_for_location(res.details.end_time, &place);
        res.reservation_for = Some(place);
    }
    process_reservation(res)
}

fn process_rental_car_reservation(mut res: Reservation<RentalCar>) -> Reservation<RentalCar> {
    res.reservation_for = res.reservation_for.map(|mut car| {
        trim_field(&mut car.name);
        car
    });
    process_pickup(&mut res.details);
    if let Some(dropoff) = res.details.dropoff_location.take() {
        let dropoff = process_place(dropoff);
        res.details.dropoff_time = process_time_for_location(res.details.dropoff_time, &dropoff);
        res.details.dropoff_location = Some(dropoff);
    }
    process_reservation(res)
}

fn process_pickup(details: &mut ReservationDetails) {
    if let Some(pickup) = details.pickup_location.take() {
        let pickup = process_place(pickup);
        details.pickup_time = process_time_for_location(details.pickup_time, &pickup);
        details.pickup_location = Some(pickup);
    }
}

fn process_tourist_attraction_visit(mut visit: TouristAttractionVisit) -> TouristAttractionVisit {
    visit.tourist_attraction = process_place(visit.tourist_attraction);
    visit.arrival_time = process_time_for_location(visit.arrival_time, &visit.tourist_attraction);
    visit.departure_time = process_time_for_location(visit.departure_time, &visit.tourist_attraction);
    visit
}

pub fn process_train_trip(mut trip: TrainTrip) -> TrainTrip {
    trim_field(&mut trip.arrival_platform);
    trim_field(&mut trip.departure_platform);
    trip.departure_station = process_train_station(trip.departure_station);
    trip.arrival_station = process_train_station(trip.arrival_station);
    trip.departure_time = process_trip_time(trip.departure_time, trip.departure_day, &trip.departure_station);
    trip.arrival_time = process_trip_time(trip.arrival_time, trip.departure_day, &trip.arrival_station);
    trip.departure_day = departure_day_from_time(trip.departure_day, trip.departure_time);
    simplify_field(&mut trip.train_number);
    simplify_field(&mut trip.train_name);
    trip
}

fn process_trip_time(dt: Option<DateTimeValue>, departure_day: Option<NaiveDate>, place: &Place) -> Option<DateTimeValue> {
    let dt = with_departure_day(dt?, departure_day);
    process_time_for_location(Some(dt), place)
}

/// Times below the 1970 sentinel only carry a time of day; the date comes
/// from the separately known departure day.
pub(crate) fn with_departure_day(dt: DateTimeValue, departure_day: Option<NaiveDate>) -> DateTimeValue {
    match departure_day {
        Some(day) if dt.year() <= 1970 => dt.with_date(day).unwrap_or(dt),
        _ => dt,
    }
}

/// Local date of the departure when no departure day was given.
pub(crate) fn departure_day_from_time(day: Option<NaiveDate>, departure_time: Option<DateTimeValue>) -> Option<NaiveDate> {
    day.or_else(|| departure_time.filter(|dt| dt.year() > 1970).map(|dt| dt.date()))
}

pub fn process_bus_trip(mut trip: BusTrip) -> BusTrip {
    trip.departure_bus_stop = process_place(trip.departure_bus_stop);
    trip.arrival_bus_stop = process_place(trip.arrival_bus_stop);
    trip.departure_time = process_time_for_location(trip.departure_time, &trip.departure_bus_stop);
    trip.arrival_time = process_time_for_location(trip.arrival_time, &trip.arrival_bus_stop);
    simplify_field(&mut trip.bus_number);
    simplify_field(&mut trip.bus_name);
    trip
}

fn process_boat_trip(mut trip: BoatTrip) -> BoatTrip {
    trip.departure_boat_terminal = process_place(trip.departure_boat_terminal);
    trip.arrival_boat_terminal = process_place(trip.arrival_boat_terminal);
    trip.departure_time = process_time_for_location(trip.departure_time, &trip.departure_boat_terminal);
    trip.arrival_time = process_time_for_location(trip.arrival_time, &trip.arrival_boat_terminal);
    trip
}

pub fn process_event(mut event: Event) -> Event {
    trim_field(&mut event.name);
    event.location = process_place(event.location);
    event.start_date = process_time_for_location(event.start_date, &event.location);
    event.end_date = process_time_for_location(event.end_date, &event.location);
    event.door_time = process_time_for_location(event.door_time, &event.location);
    event
}

fn process_reservation<T>(mut res: Reservation<T>) -> Reservation<T> {
    let details = &mut res.details;
    details.under_name = details.under_name.take().map(process_person);
    details.potential_action = process_actions(std::mem::take(&mut details.potential_action));
    trim_field(&mut details.reservation_number);
    details.program_membership_used = details.program_membership_used.take().map(process_program_membership);
    res
}

fn process_program_membership(mut program: ProgramMembership) -> ProgramMembership {
    simplify_field(&mut program.program_name);
    program.member = program.member.map(process_person);
    program
}

const HONORIFIC_PREFIXES: [&str; 3] = ["MR ", "MS ", "MRS "];

pub fn process_person(mut person: Person) -> Person {
    simplify_field(&mut person.name);
    simplify_field(&mut person.family_name);
    simplify_field(&mut person.given_name);

    if !person.family_name().is_empty()
        && !person.given_name().is_empty()
        && (person.name().is_empty() || person.name == person.family_name || person.name == person.given_name)
    {
        person.name = Some(format!("{} {}", person.given_name(), person.family_name()));
    }

    // honorifics break name comparison
    if let Some(name) = person.name.as_deref() {
        let stripped = HONORIFIC_PREFIXES.iter().find_map(|prefix| {
            name.get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| name[prefix.len()..].to_string())
        });
        if stripped.is_some() {
            person.name = stripped;
        }
    }
    person
}

/// Drops actions without a target, orders them by kind and removes
/// duplicates as well as actions that merely repeat the view URL.
pub fn process_actions(actions: Vec<Action>) -> Vec<Action> {
    let mut actions: Vec<Action> = actions
        .into_iter()
        .filter(|action| action.target.as_deref().is_some_and(|t| !t.trim().is_empty()))
        .collect();
    let view_url = actions
        .iter()
        .rev()
        .find(|action| action.kind == ActionKind::ViewAction)
        .and_then(|action| action.target.clone());

    actions.sort_by_key(|action| action.kind);

    let mut result: Vec<Action> = Vec::with_capacity(actions.len());
    for action in actions {
        let duplicate = result
            .last()
            .is_some_and(|prev| prev.kind == action.kind && prev.target == action.target);
        let own_target = action.kind == ActionKind::ViewAction || action.target != view_url;
        if own_target && !duplicate {
            result.push(action);
        }
    }
    result
}

pub fn process_place(mut place: Place) -> Place {
    simplify_field(&mut place.name);
    let phone = place.telephone.clone().unwrap_or_default();
    place.address = process_address(place.address, &phone, place.geo);
    place
}

pub fn process_address(mut addr: PostalAddress, phone_number: &str, geo: GeoCoordinates) -> PostalAddress {
    simplify_field(&mut addr.address_country);
    if let Some(country) = addr.address_country.as_deref() {
        if country.chars().count() == 3 {
            let alpha2 = country_id_from_iso3166_1_alpha3(CountryId3::parse(&country.to_ascii_uppercase()));
            if alpha2.is_valid() {
                addr.address_country = Some(alpha2.to_string());
            }
        } else if country.chars().count() == 2 {
            addr.address_country = Some(country.to_uppercase());
        }
    }

    simplify_field(&mut addr.street_address);
    simplify_field(&mut addr.postal_code);
    simplify_field(&mut addr.address_locality);
    simplify_field(&mut addr.address_region);

    let has_country_code = addr.address_country.as_deref().is_some_and(|c| c.chars().count() == 2);
    if !has_country_code && !phone_number.is_empty() {
        let country = country_for_phone_number(phone_number);
        if country.is_valid() {
            addr.address_country = Some(country.to_string());
        }
    }

    if geo.is_valid() && addr.address_country.is_none() {
        let country = country_for_coordinate(geo.latitude, geo.longitude);
        if country.is_valid() {
            addr.address_country = Some(country.to_string());
        }
    }
    addr
}

fn apply_station_data(record: TrainStation, station: &mut Place) {
    if !station.geo.is_valid() && record.coordinate.is_valid() {
        station.geo = record.coordinate;
    }
    if station.country().is_empty() && record.country.is_valid() {
        station.address.address_country = Some(record.country.to_string());
    }
}

fn apply_station_country(country: CountryId, station: &mut Place) {
    if station.country().is_empty() && country.is_valid() {
        station.address.address_country = Some(country.to_string());
    }
}

fn payload_country(code: &str) -> CountryId {
    code.get(..2)
        .map_or(CountryId::INVALID, |prefix| CountryId::parse(&prefix.to_uppercase()))
}

fn uic_country(digits: &str) -> CountryId {
    digits
        .get(..2)
        .and_then(|code| code.parse::<u16>().ok())
        .map_or(CountryId::INVALID, country_id_for_uic_code)
}

/// Completes a station from its scheme-prefixed identifier.
pub fn process_train_station(mut station: Place) -> Place {
    let id = station.identifier.take().unwrap_or_default();
    let len = id.chars().count();

    if let Some(code) = id.strip_prefix("sncf:").filter(|_| len == 10) {
        apply_station_data(stations::station_for_sncf_station_id(SncfStationId::parse(code)), &mut station);
        apply_station_country(payload_country(code), &mut station);
    } else if let Some(code) = id.strip_prefix("benerail:").filter(|_| len == 14) {
        apply_station_data(stations::station_for_benerail_id(BenerailStationId::parse(code)), &mut station);
        apply_station_country(payload_country(code), &mut station);
    } else if let Some(code) = id.strip_prefix("ibnr:").filter(|_| len == 12) {
        apply_station_data(stations::station_for_ibnr(Ibnr::parse(code)), &mut station);
        apply_station_country(uic_country(code), &mut station);
    } else if let Some(code) = id.strip_prefix("uic:").filter(|_| len == 11) {
        apply_station_data(stations::station_for_uic(UicStationId::parse(code)), &mut station);
        apply_station_country(uic_country(code), &mut station);
    } else if let Some(code) = id.strip_prefix("vrfi:").filter(|_| (7..=9).contains(&len)) {
        apply_station_data(stations::station_for_vr_station_code(VrStationCode::new(code)), &mut station);
    } else if let Some(code) = id.strip_prefix("amtrak:").filter(|_| len == 10) {
        apply_station_data(
            stations::station_for_amtrak_station_code(AmtrakStationCode::parse(code)),
            &mut station,
        );
    } else if let Some(code) = id.strip_prefix("via:").filter(|_| len == 8) {
        apply_station_data(
            stations::station_for_via_rail_station_code(ViaRailStationCode::parse(code)),
            &mut station,
        );
    } else if let Some(code) = id.strip_prefix("uk:").filter(|_| len == 6) {
        apply_station_data(
            stations::station_for_uk_railway_station_code(UkRailwayStationCode::parse(code)),
            &mut station,
        );
    } else if let Some(code) = id.strip_prefix("iata:").filter(|_| len == 8) {
        apply_station_data(stations::station_for_iata_code(IataCode::parse(code)), &mut station);
    } else if !id.is_empty() {
        debug!(identifier = %id, "unknown or malformed station identifier");
    }

    if !id.is_empty() {
        station.identifier = Some(id);
    }
    process_place(station)
}

/// Resolves a wall-clock time against the timezone of `place`.
///
/// A zone that is plausible for the place is kept. Without a resolvable
/// zone, or when an explicit UTC offset disagrees with it, the value is
/// returned unchanged.
pub fn process_time_for_location(dt: Option<DateTimeValue>, place: &Place) -> Option<DateTimeValue> {
    let dt = dt?;
    let (lat, lon) = if place.geo.is_valid() {
        (place.geo.latitude, place.geo.longitude)
    } else {
        (f64::NAN, f64::NAN)
    };
    let country = CountryId::parse(place.country());

    if let Some(tz) = dt.timezone() {
        if !dt.is_utc() && is_plausible_timezone(tz, lat, lon, country) {
            return Some(dt);
        }
    }

    match timezone_for_location(lat, lon, country) {
        Some(tz) => Some(localize(dt, tz)),
        None => Some(dt),
    }
}

/// Moves `dt` into `tz`: UTC values are converted, anything else is read
/// as wall-clock time in `tz`. A conflicting explicit UTC offset wins.
pub(crate) fn localize(dt: DateTimeValue, tz: Tz) -> DateTimeValue {
    if let DateTimeValue::Offset(_) = dt {
        let expected = dt.in_timezone(tz).offset_seconds();
        if expected != dt.offset_seconds() {
            debug!(%dt, timezone = tz.name(), "UTC offset clashes with expected timezone");
            metrics::normalize::timezone_conflict();
            return dt;
        }
    }

    let resolved = if dt.is_utc() {
        Some(dt.in_timezone(tz))
    } else {
        dt.assume_timezone(tz)
    };
    match resolved {
        Some(value) => {
            metrics::normalize::timezone_resolved();
            value
        }
        None => dt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> DateTimeValue {
        s.parse().unwrap()
    }

    fn create_test_place(name: &str, lat: f64, lon: f64, country: Option<&str>) -> Place {
        let mut place = Place::named(name);
        place.geo = GeoCoordinates::new(lat, lon);
        place.address.address_country = country.map(str::to_string);
        place
    }

    #[test]
    fn test_process_person() {
        let person = process_person(Person {
            name: Some("  MR   JOHN  SMITH ".to_string()),
            ..Person::default()
        });
        assert_eq!(person.name(), "JOHN SMITH");

        let person = process_person(Person {
            name: Some("Smith".to_string()),
            given_name: Some("John".to_string()),
            family_name: Some("Smith".to_string()),
            ..Person::default()
        });
        assert_eq!(person.name(), "John Smith");

        let person = process_person(Person::named("Mrs Jane Doe"));
        assert_eq!(person.name(), "Jane Doe");

        let person = process_person(Person::named("Mr"));
        assert_eq!(person.name(), "Mr");
    }

    #[test]
    fn test_process_address() {
        let addr = PostalAddress {
            street_address: Some(" Unter den   Linden 77 ".to_string()),
            address_country: Some("deu".to_string()),
            ..PostalAddress::default()
        };
        let addr = process_address(addr, "", GeoCoordinates::default());
        assert_eq!(addr.address_country.as_deref(), Some("DE"));
        assert_eq!(addr.street_address.as_deref(), Some("Unter den Linden 77"));

        let addr = process_address(
            PostalAddress {
                address_country: Some("fr".to_string()),
                ..PostalAddress::default()
            },
            "",
            GeoCoordinates::default(),
        );
        assert_eq!(addr.address_country.as_deref(), Some("FR"));

        let addr = process_address(PostalAddress::default(), "+33 1 23 45 67 89", GeoCoordinates::default());
        assert_eq!(addr.address_country.as_deref(), Some("FR"));

        let addr = process_address(PostalAddress::default(), "", GeoCoordinates::new(52.52, 13.40));
        assert_eq!(addr.address_country.as_deref(), Some("DE"));
    }

    #[test]
    fn test_process_actions() {
        let actions = vec![
            Action::new(ActionKind::CancelAction, "https://example.com/view"),
            Action::new(ActionKind::ViewAction, "https://example.com/view"),
            Action::new(ActionKind::CheckInAction, "https://example.com/checkin"),
            Action::new(ActionKind::CheckInAction, "https://example.com/checkin"),
            Action {
                kind: ActionKind::DownloadAction,
                target: None,
            },
        ];
        let actions = process_actions(actions);
        assert_eq!(
            actions,
            vec![
                Action::new(ActionKind::ViewAction, "https://example.com/view"),
                Action::new(ActionKind::CheckInAction, "https://example.com/checkin"),
            ]
        );
    }

    #[test]
    fn test_time_for_location() {
        let berlin = create_test_place("Berlin Hbf", 52.5250, 13.3694, Some("DE"));

        let resolved = process_time_for_location(Some(dt("2024-05-01T09:00:00")), &berlin).unwrap();
        assert_eq!(resolved.timezone(), Some(chrono_tz::Europe::Berlin));
        assert_eq!(resolved.naive_local(), dt("2024-05-01T09:00:00").naive_local());

        let resolved = process_time_for_location(Some(dt("2024-05-01T07:00:00Z")), &berlin).unwrap();
        assert_eq!(resolved.timezone(), Some(chrono_tz::Europe::Berlin));
        assert_eq!(resolved.naive_local(), dt("2024-05-01T09:00:00").naive_local());

        let matching = process_time_for_location(Some(dt("2024-05-01T09:00:00+02:00")), &berlin).unwrap();
        assert_eq!(matching.timezone(), Some(chrono_tz::Europe::Berlin));

        let conflicting = dt("2024-05-01T09:00:00+05:00");
        assert_eq!(process_time_for_location(Some(conflicting), &berlin), Some(conflicting));

        let nowhere = Place::named("Somewhere");
        let naive = dt("2024-05-01T09:00:00");
        assert_eq!(process_time_for_location(Some(naive), &nowhere), Some(naive));
        assert_eq!(process_time_for_location(None, &berlin), None);
    }

    #[test]
    fn test_plausible_zone_is_kept() {
        let berlin = create_test_place("Berlin Hbf", 52.5250, 13.3694, Some("DE"));
        let zoned = dt("2024-05-01T09:00:00").assume_timezone(chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(process_time_for_location(Some(zoned), &berlin), Some(zoned));

        let wrong = dt("2024-05-01T09:00:00").assume_timezone(chrono_tz::America::New_York).unwrap();
        let fixed = process_time_for_location(Some(wrong), &berlin).unwrap();
        assert_eq!(fixed.timezone(), Some(chrono_tz::Europe::Berlin));
        assert_eq!(fixed.naive_local(), wrong.naive_local());
    }

    #[test]
    fn test_train_station_identifiers() {
        let mut station = Place::named("Berlin  Hbf");
        station.identifier = Some("ibnr:8011160".to_string());
        let station = process_train_station(station);
        assert_eq!(station.name(), "Berlin Hbf");
        assert_eq!(station.country(), "DE");
        assert!(station.geo.is_valid());

        let mut station = Place::named("Paris Gare de Lyon");
        station.identifier = Some("sncf:FRPLY".to_string());
        let station = process_train_station(station);
        assert_eq!(station.country(), "FR");

        let mut malformed = Place::named("Nowhere");
        malformed.identifier = Some("uic:123".to_string());
        let malformed = process_train_station(malformed);
        assert!(!malformed.geo.is_valid());
        assert_eq!(malformed.identifier.as_deref(), Some("uic:123"));

        let mut empty = Place::named("Nowhere");
        empty.identifier = Some(String::new());
        assert_eq!(process_train_station(empty).identifier, None);
    }

    #[test]
    fn test_train_trip_departure_day() {
        let trip = TrainTrip {
            departure_station: create_test_place("Berlin Hbf", 52.5250, 13.3694, Some("DE")),
            arrival_station: create_test_place("Hamburg Hbf", 53.5530, 10.0069, Some("DE")),
            departure_time: Some(dt("1970-01-01T09:00:00")),
            arrival_time: Some(dt("1970-01-01T11:00:00")),
            departure_day: NaiveDate::from_ymd_opt(2024, 5, 1),
            departure_platform: Some(" 7 ".to_string()),
            ..TrainTrip::default()
        };
        let trip = process_train_trip(trip);
        let departure = trip.departure_time.unwrap();
        assert_eq!(departure.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(departure.timezone(), Some(chrono_tz::Europe::Berlin));
        assert_eq!(trip.departure_platform.as_deref(), Some("7"));

        let dayless = process_train_trip(TrainTrip {
            departure_time: Some(dt("2024-05-02T23:30:00+02:00")),
            ..TrainTrip::default()
        });
        assert_eq!(dayless.departure_day, NaiveDate::from_ymd_opt(2024, 5, 2));
        let time_only = process_train_trip(TrainTrip {
            departure_time: Some(dt("1970-01-01T09:00:00")),
            ..TrainTrip::default()
        });
        assert_eq!(time_only.departure_day, None);
    }

    #[test]
    fn test_normalize_dispatch() {
        let mut res = Reservation::new(create_test_place(" Hotel   Adlon ", 52.5163, 13.3806, None));
        res.details.checkin_time = Some(dt("2024-05-01T15:00:00"));
        res.details.reservation_number = Some(" ABC123 ".to_string());

        let Fragment::LodgingReservation(res) = normalize(Fragment::LodgingReservation(res)) else {
            panic!("kind changed");
        };
        assert_eq!(res.details.reservation_number.as_deref(), Some("ABC123"));
        let hotel = res.reservation_for.unwrap();
        assert_eq!(hotel.name(), "Hotel Adlon");
        assert_eq!(hotel.country(), "DE");
        assert_eq!(res.details.checkin_time.unwrap().timezone(), Some(chrono_tz::Europe::Berlin));
    }
}
