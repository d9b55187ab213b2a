use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::datetime::DateTimeValue;
use super::person::{Airline, Organization};
use super::place::Place;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_number: Option<String>,
    #[serde(default)]
    pub airline: Airline,
    #[serde(default)]
    pub departure_airport: Place,
    #[serde(default)]
    pub arrival_airport: Place,
    pub departure_time: Option<DateTimeValue>,
    pub arrival_time: Option<DateTimeValue>,
    pub boarding_time: Option<DateTimeValue>,
    pub departure_day: Option<NaiveDate>,
    pub departure_gate: Option<String>,
    pub departure_terminal: Option<String>,
    pub arrival_terminal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainTrip {
    pub train_name: Option<String>,
    pub train_number: Option<String>,
    #[serde(default)]
    pub provider: Organization,
    #[serde(default)]
    pub departure_station: Place,
    #[serde(default)]
    pub arrival_station: Place,
    pub departure_time: Option<DateTimeValue>,
    pub arrival_time: Option<DateTimeValue>,
    pub departure_platform: Option<String>,
    pub arrival_platform: Option<String>,
    pub departure_day: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusTrip {
    pub bus_name: Option<String>,
    pub bus_number: Option<String>,
    #[serde(default)]
    pub bus_company: Organization,
    #[serde(default)]
    pub departure_bus_stop: Place,
    #[serde(default)]
    pub arrival_bus_stop: Place,
    pub departure_time: Option<DateTimeValue>,
    pub arrival_time: Option<DateTimeValue>,
    pub departure_platform: Option<String>,
    pub arrival_platform: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatTrip {
    pub name: Option<String>,
    #[serde(default)]
    pub departure_boat_terminal: Place,
    #[serde(default)]
    pub arrival_boat_terminal: Place,
    pub departure_time: Option<DateTimeValue>,
    pub arrival_time: Option<DateTimeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub location: Place,
    pub start_date: Option<DateTimeValue>,
    pub end_date: Option<DateTimeValue>,
    pub door_time: Option<DateTimeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCar {
    pub name: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub rental_company: Organization,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxi {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristAttractionVisit {
    #[serde(default)]
    pub tourist_attraction: Place,
    pub arrival_time: Option<DateTimeValue>,
    pub departure_time: Option<DateTimeValue>,
}
