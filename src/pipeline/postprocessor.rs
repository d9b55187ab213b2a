//! Accumulates extracted fragments into a reconciled itinerary.
//!
//! Each incoming fragment is normalized and then either merged into an
//! existing entry describing the same thing, or appended. Finalization
//! folds standalone elements into their reservations, drops coarse trips
//! covered by finer-grained legs, optionally validates, and sorts.

use itinerary_core::{DateTimeValue, Flight, Fragment, Reservation, Ticket};
use tracing::{debug, info, warn};

use crate::config::{PostprocessorConfig, ValidatorConfig};
use crate::error::Result;
use crate::observability::metrics;
use crate::pipeline::processing::equality::{has_same_arrival, has_same_departure, is_same};
use crate::pipeline::processing::location::is_location_change;
use crate::pipeline::processing::merge::{apply, merge, merge_tickets};
use crate::pipeline::processing::normalize::bcbp::{maybe_iata_bcbp, BoardingPassParser, IataBcbpParser};
use crate::pipeline::processing::normalize::normalize;
use crate::pipeline::processing::quality_gate::ExtractorValidator;
use crate::pipeline::processing::sort;

/// Stateful itinerary builder. One instance per itinerary, not shared
/// between threads.
pub struct ExtractorPostprocessor {
    data: Vec<Fragment>,
    context_date: Option<DateTimeValue>,
    validation_enabled: bool,
    validator: ExtractorValidator,
    parser: Box<dyn BoardingPassParser>,
    finalized: bool,
}

impl Default for ExtractorPostprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorPostprocessor {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            context_date: None,
            validation_enabled: false,
            validator: ExtractorValidator::from(&ValidatorConfig::default()),
            parser: Box::new(IataBcbpParser),
            finalized: false,
        }
    }

    pub fn with_config(postprocessor: &PostprocessorConfig, validator: &ValidatorConfig) -> Result<Self> {
        Ok(Self {
            context_date: postprocessor.context_date()?,
            validation_enabled: postprocessor.validation_enabled,
            validator: ExtractorValidator::from(validator),
            ..Self::new()
        })
    }

    /// Reference date used to place boarding pass day-of-year dates in the
    /// right year. Without it boarding passes are not expanded.
    pub fn set_context_date(&mut self, date: DateTimeValue) {
        self.context_date = Some(date);
    }

    pub fn set_validation_enabled(&mut self, enabled: bool) {
        self.validation_enabled = enabled;
        self.finalized = false;
    }

    pub fn set_validator(&mut self, validator: ExtractorValidator) {
        self.validator = validator;
        self.finalized = false;
    }

    pub fn set_boarding_pass_parser(&mut self, parser: Box<dyn BoardingPassParser>) {
        self.parser = parser;
    }

    pub fn process(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        for fragment in fragments {
            metrics::pipeline::fragment_processed();
            let fragment = match fragment {
                Fragment::FlightReservation(res) => Fragment::FlightReservation(self.expand_boarding_pass(res)),
                other => other,
            };
            self.merge_or_append(normalize(fragment));
        }
        self.finalized = false;
    }

    /// The reconciled itinerary. Calling this repeatedly without new input
    /// returns the same list.
    pub fn result(&mut self) -> Vec<Fragment> {
        if !self.finalized {
            let before = self.data.len();
            let folded = fold_standalone_elements(&mut self.data);
            let triangles = fold_triangles(&mut self.data);
            if self.validation_enabled {
                let validator = &self.validator;
                self.data.retain(|fragment| validator.is_valid_element(fragment));
            }
            sort::sort(&mut self.data);
            self.finalized = true;
            info!(
                input = before,
                folded,
                triangles,
                output = self.data.len(),
                "Itinerary finalized"
            );
        }
        self.data.clone()
    }

    fn merge_or_append(&mut self, fragment: Fragment) {
        let Some(pos) = self.data.iter().position(|existing| is_same(existing, &fragment)) else {
            metrics::pipeline::fragment_appended();
            self.data.push(fragment);
            return;
        };
        if let Some(merged) = merge(Some(self.data[pos].clone()), Some(fragment)) {
            metrics::pipeline::fragment_merged();
            self.data[pos] = merged;
        }
    }

    fn expand_boarding_pass(&self, res: Reservation<Flight>) -> Reservation<Flight> {
        let Some(context) = self.context_date else {
            return res;
        };
        let Some(token) = res
            .details
            .reserved_ticket
            .as_ref()
            .and_then(|ticket| ticket.ticket_token_data())
            .filter(|data| maybe_iata_bcbp(data))
        else {
            return res;
        };

        let legs = match self.parser.parse(token, context.date()) {
            Ok(legs) => legs,
            Err(e) => {
                warn!(error = %e, "Skipping boarding pass expansion");
                metrics::boarding_pass::rejected();
                return res;
            }
        };

        let current = Fragment::FlightReservation(res.clone());
        let leg = if legs.len() == 1 {
            legs.into_iter().next()
        } else {
            legs.into_iter()
                .find(|leg| is_same(&Fragment::FlightReservation(leg.clone()), &current))
        };
        let Some(leg) = leg else {
            debug!("No boarding pass leg matches the reservation");
            return res;
        };

        let pnr = leg.details.reservation_number.clone();
        match apply(Some(Fragment::FlightReservation(leg)), Some(current)) {
            Some(Fragment::FlightReservation(mut expanded)) => {
                if pnr.as_deref().is_some_and(|n| !n.is_empty()) {
                    expanded.details.reservation_number = pnr;
                }
                metrics::boarding_pass::expanded();
                expanded
            }
            _ => res,
        }
    }
}

/// Merges standalone trips, venues and tickets into every reservation they
/// belong to. Absorbed elements are dropped, unmatched ones stay.
fn fold_standalone_elements(data: &mut Vec<Fragment>) -> usize {
    let mut folded = 0;
    let mut i = 0;
    while i < data.len() {
        if data[i].is_reservation() {
            i += 1;
            continue;
        }

        let standalone = data[i].clone();
        let mut absorbed = false;
        for target in data.iter_mut().filter(|f| f.is_reservation()) {
            absorbed |= match &standalone {
                Fragment::Ticket(ticket) => fold_ticket(target, ticket),
                _ => fold_reservation_for(target, &standalone),
            };
        }

        if absorbed {
            debug!(kind = standalone.kind().name(), "Folded standalone element into reservation");
            metrics::pipeline::standalone_folded();
            data.remove(i);
            folded += 1;
        } else {
            i += 1;
        }
    }
    folded
}

fn fold_reservation_for(target: &mut Fragment, standalone: &Fragment) -> bool {
    let Some(current) = target.reservation_for_fragment() else {
        return false;
    };
    if !is_same(&current, standalone) {
        return false;
    }
    merge(Some(current), Some(standalone.clone())).is_some_and(|merged| target.set_reservation_for(merged))
}

fn fold_ticket(target: &mut Fragment, ticket: &Ticket) -> bool {
    let Some(details) = target.reservation_details_mut() else {
        return false;
    };
    let Some(current) = details.reserved_ticket.take() else {
        return false;
    };
    let same = is_same(&Fragment::Ticket(current.clone()), &Fragment::Ticket(ticket.clone()));
    details.reserved_ticket = if same {
        merge_tickets(Some(current), Some(ticket.clone()))
    } else {
        Some(current)
    };
    same
}

/// Drops direct A→C trips when both an A→B and a B→C leg exist, moving the
/// direct trip's ticket onto the legs.
fn fold_triangles(data: &mut Vec<Fragment>) -> usize {
    let mut folds = 0;
    while let Some((direct, first, second)) = find_triangle(data) {
        let ticket = data[direct].reservation_details().and_then(|d| d.reserved_ticket.clone());
        for leg in [first, second] {
            if let Some(details) = data[leg].reservation_details_mut() {
                details.reserved_ticket = merge_tickets(details.reserved_ticket.take(), ticket.clone());
            }
        }
        debug!(kind = data[direct].kind().name(), "Dropping trip covered by two legs");
        metrics::pipeline::triangular_fold();
        data.remove(direct);
        folds += 1;
    }
    folds
}

fn find_triangle(data: &[Fragment]) -> Option<(usize, usize, usize)> {
    for (d, direct) in data.iter().enumerate() {
        if !is_location_change(direct) {
            continue;
        }
        let mut departure = None;
        let mut arrival = None;
        for (i, other) in data.iter().enumerate() {
            if i == d {
                continue;
            }
            if has_same_departure(direct, other) {
                departure = Some(i);
            }
            if has_same_arrival(direct, other) {
                arrival = Some(i);
            }
        }
        if let (Some(a), Some(c)) = (departure, arrival) {
            if a != c {
                return Some((d, a, c));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use itinerary_core::{Airline, Person, Place, TrainTrip};

    fn dt(s: &str) -> DateTimeValue {
        s.parse().unwrap()
    }

    fn airport(code: &str) -> Place {
        Place {
            iata_code: Some(code.to_string()),
            ..Place::default()
        }
    }

    fn create_test_flight(number: &str) -> Flight {
        Flight {
            flight_number: Some(number.to_string()),
            airline: Airline {
                iata_code: Some("LH".to_string()),
                ..Airline::default()
            },
            departure_airport: airport("FRA"),
            arrival_airport: airport("SFO"),
            departure_day: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..Flight::default()
        }
    }

    fn create_test_flight_reservation(number: &str) -> Fragment {
        let mut res = Reservation::new(create_test_flight(number));
        res.details.reservation_number = Some("XYZ123".to_string());
        res.details.under_name = Some(Person::named("John Smith"));
        Fragment::FlightReservation(res)
    }

    fn create_test_train(from: &str, to: &str, departure: &str, arrival: &str, token: Option<&str>) -> Fragment {
        let mut res = Reservation::new(TrainTrip {
            train_number: Some(format!("ICE {}", &departure[11..13])),
            departure_station: Place::named(from),
            arrival_station: Place::named(to),
            departure_time: Some(dt(departure)),
            arrival_time: Some(dt(arrival)),
            ..TrainTrip::default()
        });
        res.details.reservation_number = Some("ABC987".to_string());
        res.details.under_name = Some(Person::named("John Smith"));
        res.details.reserved_ticket = token.map(|t| Ticket {
            ticket_token: Some(t.to_string()),
            ..Ticket::default()
        });
        Fragment::TrainReservation(res)
    }

    fn create_test_boarding_pass(day: &str) -> String {
        let leg = format!("{:<7}YULFRAAC 0834 {day}Y001A0025 100", "ABC123");
        format!("M1{:<20}E{}", "DESMARAIS/LUC", leg)
    }

    fn flight_of(fragment: &Fragment) -> &Flight {
        match fragment {
            Fragment::FlightReservation(res) => res.reservation_for.as_ref().unwrap(),
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_same_reservations_are_merged() {
        let mut pp = ExtractorPostprocessor::new();
        let mut update = create_test_flight_reservation("123");
        if let Fragment::FlightReservation(res) = &mut update {
            res.reservation_for.as_mut().unwrap().departure_gate = Some("B20".to_string());
        }
        pp.process([create_test_flight_reservation("123"), update]);

        let result = pp.result();
        assert_eq!(result.len(), 1);
        assert_eq!(flight_of(&result[0]).departure_gate.as_deref(), Some("B20"));
    }

    #[test]
    fn test_different_reservations_are_appended() {
        let mut pp = ExtractorPostprocessor::new();
        let mut other_day = create_test_flight_reservation("123");
        if let Fragment::FlightReservation(res) = &mut other_day {
            res.reservation_for.as_mut().unwrap().departure_day = NaiveDate::from_ymd_opt(2024, 5, 8);
        }
        pp.process([other_day, create_test_flight_reservation("123")]);

        let result = pp.result();
        assert_eq!(result.len(), 2);
        // sorted by departure day
        assert_eq!(flight_of(&result[0]).departure_day, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_standalone_flight_folded_into_reservation() {
        let mut pp = ExtractorPostprocessor::new();
        let mut flight = create_test_flight("123");
        flight.departure_terminal = Some("1".to_string());
        pp.process([create_test_flight_reservation("123"), Fragment::Flight(flight)]);

        let result = pp.result();
        assert_eq!(result.len(), 1);
        assert_eq!(flight_of(&result[0]).departure_terminal.as_deref(), Some("1"));
    }

    #[test]
    fn test_unmatched_standalone_element_is_kept() {
        let mut pp = ExtractorPostprocessor::new();
        pp.process([
            create_test_flight_reservation("123"),
            Fragment::Flight(Flight {
                departure_day: NaiveDate::from_ymd_opt(2024, 6, 1),
                ..create_test_flight("999")
            }),
        ]);
        assert_eq!(pp.result().len(), 2);
    }

    #[test]
    fn test_standalone_ticket_folded_into_reserved_ticket() {
        let mut pp = ExtractorPostprocessor::new();
        let mut res = create_test_train("Hamburg Hbf", "Berlin Hbf", "2024-05-01T08:00:00Z", "2024-05-01T10:00:00Z", Some("qrcode:XYZ"));
        if let Fragment::TrainReservation(r) = &mut res {
            r.details.reserved_ticket.as_mut().unwrap().name = Some("Flexpreis".to_string());
        }
        let ticket = Ticket {
            name: Some("Flexpreis".to_string()),
            ticket_token: Some("qrcode:XYZ".to_string()),
            ticket_number: Some("T-1".to_string()),
            ..Ticket::default()
        };
        pp.process([res, Fragment::Ticket(ticket)]);

        let result = pp.result();
        assert_eq!(result.len(), 1);
        let details = result[0].reservation_details().unwrap();
        assert_eq!(details.reserved_ticket.as_ref().unwrap().ticket_number.as_deref(), Some("T-1"));
    }

    #[test]
    fn test_triangular_dedup() {
        let mut pp = ExtractorPostprocessor::new();
        pp.process([
            create_test_train("Hamburg Hbf", "Hannover Hbf", "2024-05-01T08:00:00Z", "2024-05-01T09:15:00Z", None),
            create_test_train("Hannover Hbf", "Frankfurt Hbf", "2024-05-01T09:30:00Z", "2024-05-01T11:30:00Z", None),
            create_test_train("Hamburg Hbf", "Frankfurt Hbf", "2024-05-01T08:00:00Z", "2024-05-01T11:30:00Z", Some("qrcode:DIRECT")),
        ]);

        let result = pp.result();
        assert_eq!(result.len(), 2);
        for leg in &result {
            let ticket = leg.reservation_details().unwrap().reserved_ticket.as_ref().unwrap();
            assert_eq!(ticket.ticket_token.as_deref(), Some("qrcode:DIRECT"));
        }
    }

    #[test]
    fn test_triangular_dedup_last_departure_match_wins() {
        let mut pp = ExtractorPostprocessor::new();
        pp.process([
            create_test_train("Hamburg Hbf", "Hannover Hbf", "2024-05-01T08:00:00Z", "2024-05-01T09:15:00Z", None),
            create_test_train("Hamburg Hbf", "Hannover Messe", "2024-05-01T08:00:00Z", "2024-05-01T09:40:00Z", None),
            create_test_train("Hannover Hbf", "Frankfurt Hbf", "2024-05-01T09:30:00Z", "2024-05-01T11:30:00Z", None),
            create_test_train("Hamburg Hbf", "Frankfurt Hbf", "2024-05-01T08:00:00Z", "2024-05-01T11:30:00Z", Some("qrcode:DIRECT")),
        ]);

        let result = pp.result();
        assert_eq!(result.len(), 3);
        let token_for = |arrival: &str| {
            result
                .iter()
                .find_map(|f| match f {
                    Fragment::TrainReservation(res)
                        if res.reservation_for.as_ref().map(|t| t.arrival_station.name()) == Some(arrival) =>
                    {
                        Some(res.details.reserved_ticket.as_ref().and_then(|t| t.ticket_token.clone()))
                    }
                    _ => None,
                })
                .flatten()
        };
        assert_eq!(token_for("Hannover Hbf"), None);
        assert_eq!(token_for("Hannover Messe").as_deref(), Some("qrcode:DIRECT"));
        assert_eq!(token_for("Frankfurt Hbf").as_deref(), Some("qrcode:DIRECT"));
    }

    #[test]
    fn test_result_is_idempotent() {
        let mut pp = ExtractorPostprocessor::new();
        pp.process([
            create_test_train("Hamburg Hbf", "Hannover Hbf", "2024-05-01T08:00:00Z", "2024-05-01T09:15:00Z", None),
            create_test_flight_reservation("123"),
            Fragment::Flight(create_test_flight("123")),
        ]);
        let first = pp.result();
        assert_eq!(pp.result(), first);
    }

    #[test]
    fn test_validation() {
        let mut pp = ExtractorPostprocessor::new();
        let mut incomplete = create_test_flight_reservation("456");
        if let Fragment::FlightReservation(res) = &mut incomplete {
            res.reservation_for.as_mut().unwrap().departure_day = None;
        }
        pp.process([create_test_flight_reservation("123"), incomplete]);
        assert_eq!(pp.result().len(), 2);

        pp.set_validation_enabled(true);
        let result = pp.result();
        assert_eq!(result.len(), 1);
        assert_eq!(flight_of(&result[0]).flight_number.as_deref(), Some("123"));
    }

    #[test]
    fn test_boarding_pass_expansion() {
        let mut res: Reservation<Flight> = Reservation::default();
        res.details.reserved_ticket = Some(Ticket {
            ticket_token: Some(format!("aztecCode:{}", create_test_boarding_pass("326"))),
            ..Ticket::default()
        });

        let mut without_context = ExtractorPostprocessor::new();
        without_context.process([Fragment::FlightReservation(res.clone())]);
        assert!(!without_context.result()[0].has_reservation_for());

        let mut pp = ExtractorPostprocessor::new();
        pp.set_context_date(dt("2024-06-01T12:00:00Z"));
        pp.process([Fragment::FlightReservation(res)]);
        let result = pp.result();
        assert_eq!(result.len(), 1);
        let flight = flight_of(&result[0]);
        assert_eq!(flight.flight_number.as_deref(), Some("834"));
        assert_eq!(flight.airline.iata_code(), "AC");
        assert_eq!(flight.departure_day, NaiveDate::from_ymd_opt(2024, 11, 21));

        let details = result[0].reservation_details().unwrap();
        assert_eq!(details.reservation_number.as_deref(), Some("ABC123"));
        let ticket = details.reserved_ticket.as_ref().unwrap();
        assert_eq!(ticket.seat_number(), "1A");
        assert!(ticket.ticket_token.as_deref().unwrap().starts_with("aztecCode:M1"));
    }

    #[test]
    fn test_malformed_boarding_pass_is_skipped() {
        let mut res: Reservation<Flight> = Reservation::default();
        res.details.reservation_number = Some("KEEP01".to_string());
        res.details.reserved_ticket = Some(Ticket {
            ticket_token: Some(format!("aztecCode:{}", create_test_boarding_pass("4X1"))),
            ..Ticket::default()
        });

        let mut pp = ExtractorPostprocessor::new();
        pp.set_context_date(dt("2024-06-01T12:00:00Z"));
        pp.process([Fragment::FlightReservation(res)]);
        let result = pp.result();
        assert_eq!(result.len(), 1);
        assert!(!result[0].has_reservation_for());
        assert_eq!(result[0].reservation_details().unwrap().reservation_number.as_deref(), Some("KEEP01"));
    }

    /// Hands out fixed legs, standing in for a scanner-specific decoder.
    struct FixedLegs(Vec<Reservation<Flight>>);

    impl BoardingPassParser for FixedLegs {
        fn parse(&self, _message: &str, _context_date: NaiveDate) -> Result<Vec<Reservation<Flight>>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_multi_leg_pass_applies_matching_leg() {
        let mut first = Reservation::new(Flight {
            departure_airport: airport("TXL"),
            arrival_airport: airport("FRA"),
            ..create_test_flight("100")
        });
        first.details.reservation_number = Some("LEG001".to_string());
        let mut second = Reservation::new(Flight {
            departure_gate: Some("Z50".to_string()),
            ..create_test_flight("123")
        });
        second.details.reservation_number = Some("LEG002".to_string());

        let mut res = Reservation::new(create_test_flight("123"));
        res.details.reserved_ticket = Some(Ticket {
            ticket_token: Some(format!("aztecCode:{}", create_test_boarding_pass("122"))),
            ..Ticket::default()
        });

        let mut pp = ExtractorPostprocessor::new();
        pp.set_context_date(dt("2024-04-01T00:00:00Z"));
        pp.set_boarding_pass_parser(Box::new(FixedLegs(vec![first, second])));
        pp.process([Fragment::FlightReservation(res)]);

        let result = pp.result();
        assert_eq!(flight_of(&result[0]).departure_gate.as_deref(), Some("Z50"));
        assert_eq!(result[0].reservation_details().unwrap().reservation_number.as_deref(), Some("LEG002"));
    }

    #[test]
    fn test_custom_validator() {
        let mut validator = ExtractorValidator::new();
        validator.set_accepted_types(vec![itinerary_core::FragmentKind::TrainReservation]);

        let mut pp = ExtractorPostprocessor::new();
        pp.set_validation_enabled(true);
        pp.set_validator(validator);
        pp.process([
            create_test_flight_reservation("123"),
            create_test_train("Hamburg Hbf", "Berlin Hbf", "2024-05-01T08:00:00Z", "2024-05-01T10:00:00Z", None),
        ]);

        let result = pp.result();
        assert_eq!(result.len(), 1);
        assert!(matches!(result[0], Fragment::TrainReservation(_)));
    }

    #[test]
    fn test_with_config() {
        let config = PostprocessorConfig {
            validation_enabled: true,
            context_date: Some("not a date".to_string()),
        };
        assert!(ExtractorPostprocessor::with_config(&config, &ValidatorConfig::default()).is_err());

        let config = PostprocessorConfig {
            validation_enabled: true,
            context_date: Some("2024-06-01T12:00:00Z".to_string()),
        };
        let pp = ExtractorPostprocessor::with_config(&config, &ValidatorConfig::default()).unwrap();
        assert!(pp.validation_enabled);
        assert_eq!(pp.context_date, Some(dt("2024-06-01T12:00:00Z")));
    }
}
