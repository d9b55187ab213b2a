pub mod datetime;
pub mod fragment;
pub mod person;
pub mod place;
pub mod reservation;
pub mod ticket;
pub mod trip;

pub use datetime::DateTimeValue;
pub use fragment::{Fragment, FragmentKind};
pub use person::{Airline, Organization, Person};
pub use place::{is_blank, GeoCoordinates, Place, PostalAddress};
pub use reservation::{Action, ActionKind, Reservation, ReservationDetails, ReservationStatus};
pub use ticket::{ProgramMembership, Seat, Ticket, TokenType};
pub use trip::{BoatTrip, BusTrip, Event, Flight, RentalCar, Taxi, TouristAttractionVisit, TrainTrip};
