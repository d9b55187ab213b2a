//! Where a fragment starts, where it ends, and whether two places are the same.

use itinerary_core::{Fragment, Place};
use tracing::debug;

use crate::common::strings::{eq_ignore_case, strip_diacritics, transliterate};
pub use crate::knowledgedb::distance;

/// How close two places have to be to count as the same location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// Same building or station.
    Exact,
    /// Close enough to walk, a bit more generous for airports.
    WalkingDistance,
    /// Same city.
    CityLevel,
}

impl Accuracy {
    fn max_distance_m(self, airport: bool) -> i32 {
        match self {
            Accuracy::Exact => 100,
            Accuracy::WalkingDistance if airport => 2000,
            Accuracy::WalkingDistance => 1000,
            Accuracy::CityLevel => 50_000,
        }
    }
}

/// A place together with whether it is an airport, which changes both the
/// name used for comparison and the walking distance tolerance.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    pub place: &'a Place,
    pub is_airport: bool,
}

impl<'a> Location<'a> {
    pub fn place(place: &'a Place) -> Self {
        Self { place, is_airport: false }
    }

    pub fn airport(place: &'a Place) -> Self {
        Self { place, is_airport: true }
    }

    /// Airports without a name are known by their IATA code.
    pub fn name(&self) -> &'a str {
        if self.is_airport && !self.place.has_name() {
            return self.place.iata_code();
        }
        self.place.name()
    }
}

/// Whether the fragment moves its traveller from one place to another.
pub fn is_location_change(fragment: &Fragment) -> bool {
    match fragment {
        Fragment::RentalCarReservation(res) => match (&res.details.pickup_location, &res.details.dropoff_location) {
            (_, None) => false,
            (_, Some(dropoff)) if !dropoff.has_name() => false,
            (Some(pickup), Some(dropoff)) => {
                !is_same_location(Location::place(pickup), Location::place(dropoff), Accuracy::Exact)
            }
            (None, Some(_)) => true,
        },
        Fragment::FlightReservation(_)
        | Fragment::TrainReservation(_)
        | Fragment::BusReservation(_)
        | Fragment::TaxiReservation(_) => true,
        _ => false,
    }
}

pub fn departure_location(fragment: &Fragment) -> Option<Location<'_>> {
    match fragment {
        Fragment::FlightReservation(res) => res.reservation_for.as_ref().map(|f| Location::airport(&f.departure_airport)),
        Fragment::TrainReservation(res) => res.reservation_for.as_ref().map(|t| Location::place(&t.departure_station)),
        Fragment::BusReservation(res) => res.reservation_for.as_ref().map(|b| Location::place(&b.departure_bus_stop)),
        Fragment::BoatReservation(res) => res
            .reservation_for
            .as_ref()
            .map(|b| Location::place(&b.departure_boat_terminal)),
        Fragment::RentalCarReservation(res) => res.details.pickup_location.as_ref().map(Location::place),
        Fragment::TaxiReservation(res) => res.details.pickup_location.as_ref().map(Location::place),
        Fragment::Flight(flight) => Some(Location::airport(&flight.departure_airport)),
        Fragment::TrainTrip(trip) => Some(Location::place(&trip.departure_station)),
        Fragment::BusTrip(trip) => Some(Location::place(&trip.departure_bus_stop)),
        Fragment::BoatTrip(trip) => Some(Location::place(&trip.departure_boat_terminal)),
        _ => None,
    }
}

pub fn arrival_location(fragment: &Fragment) -> Option<Location<'_>> {
    match fragment {
        Fragment::FlightReservation(res) => res.reservation_for.as_ref().map(|f| Location::airport(&f.arrival_airport)),
        Fragment::TrainReservation(res) => res.reservation_for.as_ref().map(|t| Location::place(&t.arrival_station)),
        Fragment::BusReservation(res) => res.reservation_for.as_ref().map(|b| Location::place(&b.arrival_bus_stop)),
        Fragment::BoatReservation(res) => res
            .reservation_for
            .as_ref()
            .map(|b| Location::place(&b.arrival_boat_terminal)),
        Fragment::RentalCarReservation(res) => res.details.dropoff_location.as_ref().map(Location::place),
        Fragment::Flight(flight) => Some(Location::airport(&flight.arrival_airport)),
        Fragment::TrainTrip(trip) => Some(Location::place(&trip.arrival_station)),
        Fragment::BusTrip(trip) => Some(Location::place(&trip.arrival_bus_stop)),
        Fragment::BoatTrip(trip) => Some(Location::place(&trip.arrival_boat_terminal)),
        _ => None,
    }
}

/// The place of a fragment that does not move, like a hotel or an event.
pub fn location(fragment: &Fragment) -> Option<&Place> {
    match fragment {
        Fragment::LodgingReservation(res) | Fragment::FoodEstablishmentReservation(res) => res.reservation_for.as_ref(),
        Fragment::EventReservation(res) => res.reservation_for.as_ref().map(|event| &event.location),
        Fragment::RentalCarReservation(res) => res.details.pickup_location.as_ref(),
        Fragment::TouristAttractionVisit(visit) => Some(&visit.tourist_attraction),
        Fragment::Event(event) => Some(&event.location),
        Fragment::LodgingBusiness(place)
        | Fragment::FoodEstablishment(place)
        | Fragment::LocalBusiness(place)
        | Fragment::TouristAttraction(place) => Some(place),
        _ => None,
    }
}

/// Compares two places by distance when both have coordinates, then by
/// address, and finally by name.
pub fn is_same_location(lhs: Location<'_>, rhs: Location<'_>, accuracy: Accuracy) -> bool {
    let (lhs_geo, rhs_geo) = (lhs.place.geo, rhs.place.geo);
    if lhs_geo.is_valid() && rhs_geo.is_valid() {
        let d = distance(lhs_geo.latitude, lhs_geo.longitude, rhs_geo.latitude, rhs_geo.longitude);
        let airport = lhs.is_airport || rhs.is_airport;
        return d < accuracy.max_distance_m(airport);
    }

    let (lhs_addr, rhs_addr) = (&lhs.place.address, &rhs.place.address);
    let lhs_street = lhs_addr.street_address.as_deref().unwrap_or("");
    let lhs_locality = lhs_addr.address_locality.as_deref().unwrap_or("");
    let rhs_street = rhs_addr.street_address.as_deref().unwrap_or("");
    let rhs_locality = rhs_addr.address_locality.as_deref().unwrap_or("");
    match accuracy {
        Accuracy::Exact | Accuracy::WalkingDistance => {
            if !lhs_street.is_empty() && !lhs_locality.is_empty() {
                return lhs_street == rhs_street && lhs_locality == rhs_locality;
            }
        }
        Accuracy::CityLevel => {
            if !lhs_locality.is_empty() {
                return lhs_locality == rhs_locality;
            }
        }
    }

    let (lhs_name, rhs_name) = (lhs.name(), rhs.name());
    if lhs_name.is_empty() || rhs_name.is_empty() {
        return false;
    }
    if eq_ignore_case(lhs_name, rhs_name) {
        return true;
    }

    let lhs_forms = [strip_diacritics(lhs_name), transliterate(lhs_name)];
    let rhs_forms = [strip_diacritics(rhs_name), transliterate(rhs_name)];
    let same = lhs_forms
        .iter()
        .any(|l| rhs_forms.iter().any(|r| eq_ignore_case(l, r)));
    if !same {
        debug!(lhs = lhs_name, rhs = rhs_name, "location names differ");
    }
    same
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinerary_core::{Flight, GeoCoordinates, Reservation};

    fn create_test_place(name: &str, lat: f64, lon: f64) -> Place {
        Place {
            geo: GeoCoordinates::new(lat, lon),
            ..Place::named(name)
        }
    }

    #[test]
    fn test_same_location_by_distance() {
        let hbf = create_test_place("Berlin Hbf", 52.5250, 13.3694);
        let hbf_tief = create_test_place("Berlin Hbf (tief)", 52.5253, 13.3692);
        let zoo = create_test_place("Berlin Zoologischer Garten", 52.5068, 13.3323);

        assert!(is_same_location(Location::place(&hbf), Location::place(&hbf_tief), Accuracy::Exact));
        assert!(!is_same_location(Location::place(&hbf), Location::place(&zoo), Accuracy::Exact));
        assert!(!is_same_location(Location::place(&hbf), Location::place(&zoo), Accuracy::WalkingDistance));
        assert!(is_same_location(Location::place(&hbf), Location::place(&zoo), Accuracy::CityLevel));
    }

    #[test]
    fn test_airports_get_a_wider_walking_distance() {
        let terminal_1 = create_test_place("Terminal 1", 50.0510, 8.5700);
        let terminal_2 = create_test_place("Terminal 2", 50.0510, 8.5900);
        assert!(!is_same_location(
            Location::place(&terminal_1),
            Location::place(&terminal_2),
            Accuracy::WalkingDistance
        ));
        assert!(is_same_location(
            Location::airport(&terminal_1),
            Location::airport(&terminal_2),
            Accuracy::WalkingDistance
        ));
    }

    #[test]
    fn test_same_location_by_address() {
        let mut lhs = Place::named("Hotel A");
        lhs.address.street_address = Some("Main Street 1".to_string());
        lhs.address.address_locality = Some("Springfield".to_string());
        let mut rhs = Place::named("Hotel B");
        rhs.address.street_address = Some("Main Street 1".to_string());
        rhs.address.address_locality = Some("Springfield".to_string());
        assert!(is_same_location(Location::place(&lhs), Location::place(&rhs), Accuracy::Exact));

        rhs.address.street_address = Some("Main Street 2".to_string());
        assert!(!is_same_location(Location::place(&lhs), Location::place(&rhs), Accuracy::Exact));
        assert!(is_same_location(Location::place(&lhs), Location::place(&rhs), Accuracy::CityLevel));
    }

    #[test]
    fn test_same_location_by_name() {
        let lhs = Place::named("Zürich HB");
        let rhs = Place::named("ZURICH HB");
        let translit = Place::named("Zuerich HB");
        assert!(is_same_location(Location::place(&lhs), Location::place(&rhs), Accuracy::Exact));
        assert!(is_same_location(Location::place(&lhs), Location::place(&translit), Accuracy::Exact));
        assert!(!is_same_location(Location::place(&lhs), Location::place(&Place::default()), Accuracy::Exact));
    }

    #[test]
    fn test_airport_name_falls_back_to_iata_code() {
        let lhs = Place {
            iata_code: Some("LHR".to_string()),
            ..Place::default()
        };
        let rhs = lhs.clone();
        assert!(is_same_location(Location::airport(&lhs), Location::airport(&rhs), Accuracy::Exact));
        assert!(!is_same_location(Location::place(&lhs), Location::place(&rhs), Accuracy::Exact));
    }

    #[test]
    fn test_location_change() {
        let flight = Fragment::FlightReservation(Reservation::new(Flight::default()));
        assert!(is_location_change(&flight));
        assert!(departure_location(&flight).is_some_and(|l| l.is_airport));

        let mut car = Reservation::new(itinerary_core::RentalCar::default());
        car.details.pickup_location = Some(create_test_place("Airport", 52.36, 13.50));
        assert!(!is_location_change(&Fragment::RentalCarReservation(car.clone())));

        car.details.dropoff_location = Some(create_test_place("Airport", 52.3601, 13.5001));
        assert!(!is_location_change(&Fragment::RentalCarReservation(car.clone())));

        car.details.dropoff_location = Some(create_test_place("City", 52.52, 13.40));
        let car = Fragment::RentalCarReservation(car);
        assert!(is_location_change(&car));
        assert_eq!(arrival_location(&car).map(|l| l.name()), Some("City"));

        let hotel = Fragment::LodgingReservation(Reservation::new(Place::named("Hotel")));
        assert!(!is_location_change(&hotel));
        assert_eq!(location(&hotel).map(Place::name), Some("Hotel"));
    }
}
