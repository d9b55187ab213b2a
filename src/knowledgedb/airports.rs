//! Airport table, name resolution and flight plausibility.

use std::collections::{BTreeSet, HashMap};

use chrono_tz::Tz;
use itinerary_core::GeoCoordinates;
use once_cell::sync::Lazy;
use tracing::debug;

use super::alphaid::{CountryId, IataCode};
use super::lookup_by;
use super::timezones::timezone_for_location;
use crate::common::strings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    pub iata_code: IataCode,
    pub coordinate: GeoCoordinates,
    pub country: CountryId,
    pub name: &'static str,
}

const fn airport(code: &[u8; 3], lat: f64, lon: f64, country: &[u8; 2], name: &'static str) -> Airport {
    Airport {
        iata_code: IataCode::new(code),
        coordinate: GeoCoordinates::new(lat, lon),
        country: CountryId::new(country),
        name,
    }
}

fn airport_for(code: IataCode) -> Option<&'static Airport> {
    lookup_by(AIRPORT_TABLE, code, |a| a.iata_code)
}

pub fn coordinate_for_airport(code: IataCode) -> GeoCoordinates {
    airport_for(code).map(|a| a.coordinate).unwrap_or_default()
}

pub fn country_for_airport(code: IataCode) -> CountryId {
    airport_for(code).map(|a| a.country).unwrap_or_default()
}

pub fn timezone_for_airport(code: IataCode) -> Option<Tz> {
    let airport = airport_for(code)?;
    timezone_for_location(
        airport.coordinate.latitude,
        airport.coordinate.longitude,
        airport.country,
    )
}

const MAX_SPEED_KMH: f64 = 2140.0;
const MIN_SPEED_KMH: f64 = 250.0;

/// Whether an aircraft can plausibly cover `distance_m` in `duration_s`.
///
/// Legs shorter than an hour are only bounded from above, taxiing and
/// holding dominate them.
pub fn is_plausible_distance_for_duration(distance_m: i32, duration_s: i64) -> bool {
    if duration_s <= 0 {
        return false;
    }
    let speed_kmh = (distance_m as f64 / 1000.0) / (duration_s as f64 / 3600.0);
    if speed_kmh > MAX_SPEED_KMH {
        return false;
    }
    duration_s < 3600 || speed_kmh >= MIN_SPEED_KMH
}

struct NameIndex {
    fragments: HashMap<String, BTreeSet<usize>>,
}

impl NameIndex {
    fn build() -> Self {
        let mut fragments: HashMap<String, BTreeSet<usize>> = HashMap::new();
        for (idx, airport) in AIRPORT_TABLE.iter().enumerate() {
            for fragment in split_fragments(airport.name) {
                fragments
                    .entry(normalize_fragment(fragment))
                    .or_default()
                    .insert(idx);
            }
        }
        Self { fragments }
    }

    fn unique(&self, fragment: &str) -> Option<IataCode> {
        match self.fragments.get(fragment) {
            Some(set) if set.len() == 1 => set.iter().next().map(|idx| AIRPORT_TABLE[*idx].iata_code),
            _ => None,
        }
    }

    fn codes_for_unique_fragments(&self, fragments: &[String]) -> BTreeSet<IataCode> {
        fragments.iter().filter_map(|f| self.unique(f)).collect()
    }

    fn codes_for_shared_fragments(&self, fragments: &[String]) -> BTreeSet<IataCode> {
        let mut matches: Option<BTreeSet<usize>> = None;
        for fragment in fragments {
            let Some(candidates) = self.fragments.get(fragment) else {
                continue;
            };
            let Some(current) = matches.as_ref() else {
                matches = Some(candidates.clone());
                continue;
            };
            // "international" is used too loosely to rule anything out
            if fragment == "international" && current.is_disjoint(candidates) {
                continue;
            }
            let narrowed: BTreeSet<usize> = current.intersection(candidates).copied().collect();
            let exhausted = narrowed.is_empty();
            matches = Some(narrowed);
            if exhausted {
                break;
            }
        }
        matches
            .unwrap_or_default()
            .into_iter()
            .map(|idx| AIRPORT_TABLE[idx].iata_code)
            .collect()
    }

    fn codes_for_fragments(&self, fragments: &[String]) -> BTreeSet<IataCode> {
        let codes = self.codes_for_unique_fragments(fragments);
        if !codes.is_empty() {
            return codes;
        }
        self.codes_for_shared_fragments(fragments)
    }
}

static NAME_INDEX: Lazy<NameIndex> = Lazy::new(NameIndex::build);

fn split_fragments(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| !c.is_alphanumeric()).filter(|s| !s.is_empty())
}

fn normalize_fragment(fragment: &str) -> String {
    let normalized = strings::normalize(fragment);
    if normalized == "intl" {
        return "international".to_string();
    }
    normalized
}

fn transliterated(fragment: &str) -> String {
    fragment.replace("ae", "a").replace("oe", "o").replace("ue", "u")
}

/// A raw fragment that is itself a known IATA code, provided it is
/// unambiguous within the name.
fn code_from_iata_fragment(raw: &[&str]) -> IataCode {
    let mut code = IataCode::INVALID;
    for fragment in raw {
        if fragment.len() != 3 || !fragment.bytes().all(|b| b.is_ascii_uppercase()) {
            continue;
        }
        let candidate = IataCode::parse(fragment);
        if code.is_valid() && candidate != code {
            return IataCode::INVALID;
        }
        if airport_for(candidate).is_some() {
            code = candidate;
        }
        let as_name = NAME_INDEX.unique(&normalize_fragment(fragment));
        if let Some(other) = as_name {
            if code.is_valid() && other != code {
                return IataCode::INVALID;
            }
        }
    }
    code
}

fn keep_smaller(codes: &mut BTreeSet<IataCode>, candidates: BTreeSet<IataCode>) {
    if !candidates.is_empty() && (codes.is_empty() || candidates.len() < codes.len()) {
        *codes = candidates;
    }
}

/// All airports whose name matches `name`, sorted by code.
pub fn iata_codes_from_name(name: &str) -> Vec<IataCode> {
    let raw: Vec<&str> = split_fragments(name).collect();
    let mut fragments: Vec<String> = raw.iter().map(|f| normalize_fragment(f)).collect();

    let mut codes = NAME_INDEX.codes_for_fragments(&fragments);

    for fragment in fragments.iter_mut() {
        *fragment = transliterated(fragment);
    }
    keep_smaller(&mut codes, NAME_INDEX.codes_for_fragments(&fragments));

    let code = code_from_iata_fragment(&raw);
    if code.is_valid() && codes.contains(&code) {
        return vec![code];
    }

    if let Some(pos) = fragments.iter().position(|f| f == "terminal") {
        fragments.truncate(pos);
        keep_smaller(&mut codes, NAME_INDEX.codes_for_fragments(&fragments));
    }

    debug!(name, candidates = codes.len(), "resolved airport name");
    codes.into_iter().collect()
}

/// The airport named `name`, or the invalid code when the name is unknown
/// or ambiguous.
pub fn iata_code_from_name(name: &str) -> IataCode {
    match iata_codes_from_name(name).as_slice() {
        [code] => *code,
        _ => IataCode::INVALID,
    }
}

static AIRPORT_TABLE: &[Airport] = &[
    airport(b"AMS", 52.3086, 4.7639, b"NL", "Amsterdam Airport Schiphol"),
    airport(b"ANC", 61.1743, -149.9962, b"US", "Ted Stevens Anchorage International Airport"),
    airport(b"ARN", 59.6519, 17.9186, b"SE", "Stockholm Arlanda Airport"),
    airport(b"ATL", 33.6367, -84.4281, b"US", "Hartsfield-Jackson Atlanta International Airport"),
    airport(b"BCN", 41.2971, 2.0785, b"ES", "Josep Tarradellas Barcelona-El Prat Airport"),
    airport(b"BER", 52.3667, 13.5033, b"DE", "Berlin Brandenburg Airport"),
    airport(b"BHX", 52.4539, -1.7480, b"GB", "Birmingham Airport"),
    airport(b"BOS", 42.3656, -71.0096, b"US", "Logan International Airport"),
    airport(b"BRU", 50.9014, 4.4844, b"BE", "Brussels Airport"),
    airport(b"CDG", 49.0097, 2.5479, b"FR", "Paris Charles de Gaulle Airport"),
    airport(b"CGN", 50.8659, 7.1427, b"DE", "Cologne Bonn Airport"),
    airport(b"CPH", 55.6181, 12.6561, b"DK", "Copenhagen Airport"),
    airport(b"DEN", 39.8561, -104.6737, b"US", "Denver International Airport"),
    airport(b"DFW", 32.8998, -97.0403, b"US", "Dallas/Fort Worth International Airport"),
    airport(b"DUB", 53.4213, -6.2701, b"IE", "Dublin Airport"),
    airport(b"DUS", 51.2895, 6.7668, b"DE", "Düsseldorf Airport"),
    airport(b"DXB", 25.2532, 55.3657, b"AE", "Dubai International Airport"),
    airport(b"EDI", 55.9500, -3.3725, b"GB", "Edinburgh Airport"),
    airport(b"EWR", 40.6925, -74.1687, b"US", "Newark Liberty International Airport"),
    airport(b"FCO", 41.8003, 12.2389, b"IT", "Leonardo da Vinci-Fiumicino Airport"),
    airport(b"FRA", 50.0333, 8.5706, b"DE", "Frankfurt Airport"),
    airport(b"GLA", 55.8719, -4.4331, b"GB", "Glasgow Airport"),
    airport(b"GRU", -23.4356, -46.4731, b"BR", "São Paulo/Guarulhos International Airport"),
    airport(b"GVA", 46.2381, 6.1089, b"CH", "Geneva Airport"),
    airport(b"HAM", 53.6304, 9.9882, b"DE", "Hamburg Airport"),
    airport(b"HEL", 60.3172, 24.9633, b"FI", "Helsinki Airport"),
    airport(b"HHN", 49.9487, 7.2639, b"DE", "Frankfurt-Hahn Airport"),
    airport(b"HKG", 22.3080, 113.9185, b"HK", "Hong Kong International Airport"),
    airport(b"HND", 35.5494, 139.7798, b"JP", "Haneda Airport"),
    airport(b"HNL", 21.3187, -157.9225, b"US", "Daniel K. Inouye International Airport"),
    airport(b"IAD", 38.9531, -77.4565, b"US", "Washington Dulles International Airport"),
    airport(b"ICN", 37.4602, 126.4407, b"KR", "Incheon International Airport"),
    airport(b"IST", 41.2753, 28.7519, b"TR", "Istanbul Airport"),
    airport(b"JFK", 40.6398, -73.7789, b"US", "John F. Kennedy International Airport"),
    airport(b"KEF", 63.9850, -22.6056, b"IS", "Keflavík International Airport"),
    airport(b"LAS", 36.0840, -115.1537, b"US", "Harry Reid International Airport"),
    airport(b"LAX", 33.9416, -118.4085, b"US", "Los Angeles International Airport"),
    airport(b"LCY", 51.5048, 0.0495, b"GB", "London City Airport"),
    airport(b"LGA", 40.7769, -73.8740, b"US", "LaGuardia Airport"),
    airport(b"LGW", 51.1537, -0.1821, b"GB", "London Gatwick Airport"),
    airport(b"LHR", 51.4700, -0.4543, b"GB", "London Heathrow Airport"),
    airport(b"LIS", 38.7742, -9.1342, b"PT", "Humberto Delgado Airport"),
    airport(b"LPL", 53.3336, -2.8497, b"GB", "Liverpool John Lennon Airport"),
    airport(b"LYS", 45.7256, 5.0811, b"FR", "Lyon-Saint-Exupéry Airport"),
    airport(b"MAD", 40.4719, -3.5626, b"ES", "Adolfo Suárez Madrid-Barajas Airport"),
    airport(b"MAN", 53.3537, -2.2750, b"GB", "Manchester Airport"),
    airport(b"MEX", 19.4361, -99.0719, b"MX", "Mexico City International Airport"),
    airport(b"MIA", 25.7959, -80.2870, b"US", "Miami International Airport"),
    airport(b"MUC", 48.3538, 11.7861, b"DE", "Munich Airport"),
    airport(b"MXP", 45.6306, 8.7281, b"IT", "Milan Malpensa Airport"),
    airport(b"NCE", 43.6584, 7.2159, b"FR", "Nice Côte d'Azur Airport"),
    airport(b"NRT", 35.7720, 140.3929, b"JP", "Narita International Airport"),
    airport(b"ORD", 41.9742, -87.9073, b"US", "O'Hare International Airport"),
    airport(b"ORY", 48.7262, 2.3652, b"FR", "Paris Orly Airport"),
    airport(b"OSL", 60.1976, 11.1004, b"NO", "Oslo Airport, Gardermoen"),
    airport(b"PDX", 45.5887, -122.5975, b"US", "Portland International Airport"),
    airport(b"PEK", 40.0799, 116.6031, b"CN", "Beijing Capital International Airport"),
    airport(b"PHX", 33.4352, -112.0101, b"US", "Phoenix Sky Harbor International Airport"),
    airport(b"PRG", 50.1008, 14.2600, b"CZ", "Václav Havel Airport Prague"),
    airport(b"PWM", 43.6462, -70.3093, b"US", "Portland International Jetport"),
    airport(b"SAN", 32.7338, -117.1933, b"US", "San Diego International Airport"),
    airport(b"SAT", 29.5337, -98.4698, b"US", "San Antonio International Airport"),
    airport(b"SEA", 47.4502, -122.3088, b"US", "Seattle-Tacoma International Airport"),
    airport(b"SFO", 37.6213, -122.3790, b"US", "San Francisco International Airport"),
    airport(b"SIN", 1.3644, 103.9915, b"SG", "Singapore Changi Airport"),
    airport(b"SJC", 37.3639, -121.9289, b"US", "Norman Y. Mineta San José International Airport"),
    airport(b"STR", 48.6899, 9.2220, b"DE", "Stuttgart Airport"),
    airport(b"SVO", 55.9726, 37.4146, b"RU", "Sheremetyevo International Airport"),
    airport(b"SYD", -33.9399, 151.1753, b"AU", "Sydney Kingsford Smith Airport"),
    airport(b"TIJ", 32.5411, -116.9700, b"MX", "Tijuana International Airport"),
    airport(b"TLV", 32.0055, 34.8854, b"IL", "Ben Gurion Airport"),
    airport(b"VIE", 48.1103, 16.5697, b"AT", "Vienna International Airport"),
    airport(b"WAW", 52.1657, 20.9671, b"PL", "Warsaw Chopin Airport"),
    airport(b"YUL", 45.4706, -73.7408, b"CA", "Montréal-Trudeau International Airport"),
    airport(b"YVR", 49.1967, -123.1815, b"CA", "Vancouver International Airport"),
    airport(b"YYZ", 43.6777, -79.6248, b"CA", "Toronto Pearson International Airport"),
    airport(b"ZRH", 47.4582, 8.5555, b"CH", "Zurich Airport"),
];
