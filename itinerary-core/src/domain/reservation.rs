use serde::{Deserialize, Serialize};

use super::datetime::DateTimeValue;
use super::person::{Organization, Person};
use super::place::Place;
use super::ticket::{ProgramMembership, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "ReservationConfirmed", alias = "http://schema.org/ReservationConfirmed")]
    Confirmed,
    #[serde(rename = "ReservationCancelled", alias = "http://schema.org/ReservationCancelled")]
    Cancelled,
    #[serde(rename = "ReservationHold", alias = "http://schema.org/ReservationHold")]
    Hold,
    #[serde(rename = "ReservationPending", alias = "http://schema.org/ReservationPending")]
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    ViewAction,
    CancelAction,
    CheckInAction,
    DownloadAction,
    UpdateAction,
    ReserveAction,
    JoinAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "@type")]
    pub kind: ActionKind,
    pub target: Option<String>,
}

impl Action {
    pub fn new(kind: ActionKind, target: &str) -> Self {
        Self {
            kind,
            target: Some(target.to_string()),
        }
    }
}

/// Metadata every reservation kind carries, plus the kind-specific
/// optional fields (check-in for lodging, pickup for cars, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetails {
    pub reservation_number: Option<String>,
    pub reservation_status: Option<ReservationStatus>,
    pub under_name: Option<Person>,
    pub reserved_ticket: Option<Ticket>,
    pub provider: Option<Organization>,
    pub modified_time: Option<DateTimeValue>,
    pub program_membership_used: Option<ProgramMembership>,
    #[serde(default)]
    pub potential_action: Vec<Action>,
    pub url: Option<String>,
    pub passenger_sequence_number: Option<String>,
    pub checkin_time: Option<DateTimeValue>,
    pub checkout_time: Option<DateTimeValue>,
    pub start_time: Option<DateTimeValue>,
    pub end_time: Option<DateTimeValue>,
    pub pickup_time: Option<DateTimeValue>,
    pub pickup_location: Option<Place>,
    pub dropoff_time: Option<DateTimeValue>,
    pub dropoff_location: Option<Place>,
}

impl ReservationDetails {
    pub fn reservation_number(&self) -> &str {
        self.reservation_number.as_deref().unwrap_or("")
    }

    pub fn is_cancelled(&self) -> bool {
        self.reservation_status == Some(ReservationStatus::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation<T> {
    pub reservation_for: Option<T>,
    #[serde(flatten)]
    pub details: ReservationDetails,
}

impl<T> Default for Reservation<T> {
    fn default() -> Self {
        Self {
            reservation_for: None,
            details: ReservationDetails::default(),
        }
    }
}

impl<T> Reservation<T> {
    pub fn new(reservation_for: T) -> Self {
        Self {
            reservation_for: Some(reservation_for),
            details: ReservationDetails::default(),
        }
    }
}
