use serde::{Deserialize, Serialize};

use super::place::Place;
use super::reservation::{Reservation, ReservationDetails};
use super::ticket::{ProgramMembership, Ticket};
use super::trip::{BoatTrip, BusTrip, Event, Flight, RentalCar, TouristAttractionVisit, Taxi, TrainTrip};

/// One extracted unit of itinerary data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum Fragment {
    FlightReservation(Reservation<Flight>),
    TrainReservation(Reservation<TrainTrip>),
    BusReservation(Reservation<BusTrip>),
    BoatReservation(Reservation<BoatTrip>),
    LodgingReservation(Reservation<Place>),
    FoodEstablishmentReservation(Reservation<Place>),
    EventReservation(Reservation<Event>),
    RentalCarReservation(Reservation<RentalCar>),
    TaxiReservation(Reservation<Taxi>),

    Flight(Flight),
    TrainTrip(TrainTrip),
    BusTrip(BusTrip),
    BoatTrip(BoatTrip),
    LodgingBusiness(Place),
    FoodEstablishment(Place),
    LocalBusiness(Place),
    Event(Event),
    RentalCar(RentalCar),
    Taxi(Taxi),
    TouristAttractionVisit(TouristAttractionVisit),
    TouristAttraction(Place),

    Airport(Place),
    TrainStation(Place),
    BusStation(Place),
    BoatTerminal(Place),

    Ticket(Ticket),
    ProgramMembership(ProgramMembership),
}

macro_rules! each_reservation {
    ($value:expr, $res:ident => $body:expr, _ => $fallback:expr) => {
        match $value {
            Fragment::FlightReservation($res) => $body,
            Fragment::TrainReservation($res) => $body,
            Fragment::BusReservation($res) => $body,
            Fragment::BoatReservation($res) => $body,
            Fragment::LodgingReservation($res) => $body,
            Fragment::FoodEstablishmentReservation($res) => $body,
            Fragment::EventReservation($res) => $body,
            Fragment::RentalCarReservation($res) => $body,
            Fragment::TaxiReservation($res) => $body,
            _ => $fallback,
        }
    };
}

impl Fragment {
    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::FlightReservation(_) => FragmentKind::FlightReservation,
            Fragment::TrainReservation(_) => FragmentKind::TrainReservation,
            Fragment::BusReservation(_) => FragmentKind::BusReservation,
            Fragment::BoatReservation(_) => FragmentKind::BoatReservation,
            Fragment::LodgingReservation(_) => FragmentKind::LodgingReservation,
            Fragment::FoodEstablishmentReservation(_) => FragmentKind::FoodEstablishmentReservation,
            Fragment::EventReservation(_) => FragmentKind::EventReservation,
            Fragment::RentalCarReservation(_) => FragmentKind::RentalCarReservation,
            Fragment::TaxiReservation(_) => FragmentKind::TaxiReservation,
            Fragment::Flight(_) => FragmentKind::Flight,
            Fragment::TrainTrip(_) => FragmentKind::TrainTrip,
            Fragment::BusTrip(_) => FragmentKind::BusTrip,
            Fragment::BoatTrip(_) => FragmentKind::BoatTrip,
            Fragment::LodgingBusiness(_) => FragmentKind::LodgingBusiness,
            Fragment::FoodEstablishment(_) => FragmentKind::FoodEstablishment,
            Fragment::LocalBusiness(_) => FragmentKind::LocalBusiness,
            Fragment::Event(_) => FragmentKind::Event,
            Fragment::RentalCar(_) => FragmentKind::RentalCar,
            Fragment::Taxi(_) => FragmentKind::Taxi,
            Fragment::TouristAttractionVisit(_) => FragmentKind::TouristAttractionVisit,
            Fragment::TouristAttraction(_) => FragmentKind::TouristAttraction,
            Fragment::Airport(_) => FragmentKind::Airport,
            Fragment::TrainStation(_) => FragmentKind::TrainStation,
            Fragment::BusStation(_) => FragmentKind::BusStation,
            Fragment::BoatTerminal(_) => FragmentKind::BoatTerminal,
            Fragment::Ticket(_) => FragmentKind::Ticket,
            Fragment::ProgramMembership(_) => FragmentKind::ProgramMembership,
        }
    }

    pub fn is_reservation(&self) -> bool {
        self.reservation_details().is_some()
    }

    pub fn reservation_details(&self) -> Option<&ReservationDetails> {
        each_reservation!(self, res => Some(&res.details), _ => None)
    }

    pub fn reservation_details_mut(&mut self) -> Option<&mut ReservationDetails> {
        each_reservation!(self, res => Some(&mut res.details), _ => None)
    }

    pub fn has_reservation_for(&self) -> bool {
        each_reservation!(self, res => res.reservation_for.is_some(), _ => false)
    }

    /// The `reservation_for` object as a standalone fragment.
    pub fn reservation_for_fragment(&self) -> Option<Fragment> {
        match self {
            Fragment::FlightReservation(r) => r.reservation_for.clone().map(Fragment::Flight),
            Fragment::TrainReservation(r) => r.reservation_for.clone().map(Fragment::TrainTrip),
            Fragment::BusReservation(r) => r.reservation_for.clone().map(Fragment::BusTrip),
            Fragment::BoatReservation(r) => r.reservation_for.clone().map(Fragment::BoatTrip),
            Fragment::LodgingReservation(r) => r.reservation_for.clone().map(Fragment::LodgingBusiness),
            Fragment::FoodEstablishmentReservation(r) => {
                r.reservation_for.clone().map(Fragment::FoodEstablishment)
            }
            Fragment::EventReservation(r) => r.reservation_for.clone().map(Fragment::Event),
            Fragment::RentalCarReservation(r) => r.reservation_for.clone().map(Fragment::RentalCar),
            Fragment::TaxiReservation(r) => r.reservation_for.clone().map(Fragment::Taxi),
            _ => None,
        }
    }

    /// Replaces the `reservation_for` object. Returns `false`, leaving
    /// `self` untouched, when `value` is not of the reserved kind.
    pub fn set_reservation_for(&mut self, value: Fragment) -> bool {
        match (self, value) {
            (Fragment::FlightReservation(r), Fragment::Flight(v)) => r.reservation_for = Some(v),
            (Fragment::TrainReservation(r), Fragment::TrainTrip(v)) => r.reservation_for = Some(v),
            (Fragment::BusReservation(r), Fragment::BusTrip(v)) => r.reservation_for = Some(v),
            (Fragment::BoatReservation(r), Fragment::BoatTrip(v)) => r.reservation_for = Some(v),
            (Fragment::LodgingReservation(r), Fragment::LodgingBusiness(v)) => r.reservation_for = Some(v),
            (Fragment::FoodEstablishmentReservation(r), Fragment::FoodEstablishment(v)) => {
                r.reservation_for = Some(v)
            }
            (Fragment::EventReservation(r), Fragment::Event(v)) => r.reservation_for = Some(v),
            (Fragment::RentalCarReservation(r), Fragment::RentalCar(v)) => r.reservation_for = Some(v),
            (Fragment::TaxiReservation(r), Fragment::Taxi(v)) => r.reservation_for = Some(v),
            _ => return false,
        }
        true
    }
}

/// Flat type tag of a fragment, including the abstract `Reservation`
/// and `Place` bases used when walking the type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Reservation,
    Place,

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
}

const KIND_NAMES: [(FragmentKind, &str); 29] = [
    (FragmentKind::Reservation, "Reservation"),
    (FragmentKind::Place, "Place"),
    (FragmentKind::FlightReservation, "FlightReservation"),
    (FragmentKind::TrainReservation, "TrainReservation"),
    (FragmentKind::BusReservation, "BusReservation"),
    (FragmentKind::BoatReservation, "BoatReservation"),
    (FragmentKind::LodgingReservation, "LodgingReservation"),
    (FragmentKind::FoodEstablishmentReservation, "FoodEstablishmentReservation"),
    (FragmentKind::EventReservation, "EventReservation"),
    (FragmentKind::RentalCarReservation, "RentalCarReservation"),
    (FragmentKind::TaxiReservation, "TaxiReservation"),
    (FragmentKind::Flight, "Flight"),
    (FragmentKind::TrainTrip, "TrainTrip"),
    (FragmentKind::BusTrip, "BusTrip"),
    (FragmentKind::BoatTrip, "BoatTrip"),
    (FragmentKind::LodgingBusiness, "LodgingBusiness"),
    (FragmentKind::FoodEstablishment, "FoodEstablishment"),
    (FragmentKind::LocalBusiness, "LocalBusiness"),
    (FragmentKind::Event, "Event"),
    (FragmentKind::RentalCar, "RentalCar"),
    (FragmentKind::Taxi, "Taxi"),
    (FragmentKind::TouristAttractionVisit, "TouristAttractionVisit"),
    (FragmentKind::TouristAttraction, "TouristAttraction"),
    (FragmentKind::Airport, "Airport"),
    (FragmentKind::TrainStation, "TrainStation"),
    (FragmentKind::BusStation, "BusStation"),
    (FragmentKind::BoatTerminal, "BoatTerminal"),
    (FragmentKind::Ticket, "Ticket"),
    (FragmentKind::ProgramMembership, "ProgramMembership"),
];

impl FragmentKind {
    pub fn name(self) -> &'static str {
        KIND_NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or("", |(_, name)| name)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        KIND_NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(kind, _)| *kind)
    }

    pub fn all() -> impl Iterator<Item = FragmentKind> {
        KIND_NAMES.iter().map(|(kind, _)| *kind)
    }

    fn parent(self) -> Option<Self> {
        use FragmentKind::*;
        match self {
            FlightReservation | TrainReservation | BusReservation | BoatReservation
            | LodgingReservation | FoodEstablishmentReservation | EventReservation
            | RentalCarReservation | TaxiReservation => Some(Reservation),
            LodgingBusiness | FoodEstablishment => Some(LocalBusiness),
            LocalBusiness | TouristAttraction | Airport | TrainStation | BusStation
            | BoatTerminal => Some(Place),
            _ => None,
        }
    }

    /// The type hierarchy, most-derived first, starting with `self`.
    pub fn ancestors(self) -> Vec<FragmentKind> {
        std::iter::successors(Some(self), |kind| kind.parent()).collect()
    }

    pub fn is_a(self, other: FragmentKind) -> bool {
        self.ancestors().contains(&other)
    }

    pub fn is_reservation(self) -> bool {
        self != FragmentKind::Reservation && self.is_a(FragmentKind::Reservation)
    }

    /// Kind of the `reservation_for` object of a reservation kind.
    pub fn reservation_for_kind(self) -> Option<FragmentKind> {
        use FragmentKind::*;
        match self {
            FlightReservation => Some(Flight),
            TrainReservation => Some(TrainTrip),
            BusReservation => Some(BusTrip),
            BoatReservation => Some(BoatTrip),
            LodgingReservation => Some(LodgingBusiness),
            FoodEstablishmentReservation => Some(FoodEstablishment),
            EventReservation => Some(Event),
            RentalCarReservation => Some(RentalCar),
            TaxiReservation => Some(Taxi),
            _ => None,
        }
    }
}
