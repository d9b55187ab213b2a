//! Timezone lookups by coordinate and country.
//!
//! The coordinate-derived zone is the zone of the nearest anchor point
//! within [`MAX_ANCHOR_DISTANCE_M`]. It is refined with the zones known to
//! exist in the requested country, which settles border regions where the
//! nearest anchor lies across the border.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};
use once_cell::sync::Lazy;
use tracing::debug;

use super::alphaid::CountryId;
use super::{distance, lookup_by};

pub const MAX_ANCHOR_DISTANCE_M: i32 = 1_500_000;

/// The country a timezone belongs to, invalid for unknown or shared zones.
pub fn country_for_timezone(tz: Tz) -> CountryId {
    lookup_by(TIMEZONE_COUNTRY_TABLE, tz.name(), |(name, _)| *name)
        .map(|(_, country)| *country)
        .unwrap_or_default()
}

/// Zones in use in `country`, with overseas territories filtered out.
pub fn timezones_for_country(country: CountryId) -> Vec<Tz> {
    if let Some((_, name)) = lookup_by(COUNTRY_TIMEZONE_TABLE, country, |(id, _)| *id) {
        return name.parse().map(|tz| vec![tz]).unwrap_or_default();
    }
    COUNTRY_ZONES.get(&country).cloned().unwrap_or_default()
}

/// The zone of a country that uses exactly one.
pub fn timezone_for_country(country: CountryId) -> Option<Tz> {
    match timezones_for_country(country).as_slice() {
        [tz] => Some(*tz),
        _ => None,
    }
}

fn timezone_for_coordinate(lat: f64, lon: f64) -> Option<Tz> {
    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    ANCHORS
        .iter()
        .map(|(tz, a_lat, a_lon)| (distance(lat, lon, *a_lat, *a_lon), *tz))
        .filter(|(d, _)| *d <= MAX_ANCHOR_DISTANCE_M)
        .min_by_key(|(d, _)| *d)
        .map(|(_, tz)| tz)
}

pub fn country_for_coordinate(lat: f64, lon: f64) -> CountryId {
    timezone_for_coordinate(lat, lon)
        .map(country_for_timezone)
        .unwrap_or_default()
}

/// How far ahead [`next_transition`] looks for an offset change.
const TRANSITION_HORIZON_DAYS: i64 = 3 * 366;

/// Offset state of a zone at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OffsetData {
    utc_offset: i32,
    standard_offset: i64,
    dst_offset: i64,
    abbreviation: String,
}

impl OffsetData {
    fn of(tz: Tz, at: DateTime<Utc>) -> Self {
        let offset = tz.offset_from_utc_datetime(&at.naive_utc());
        Self {
            utc_offset: offset.fix().local_minus_utc(),
            standard_offset: offset.base_utc_offset().num_seconds(),
            dst_offset: offset.dst_offset().num_seconds(),
            abbreviation: offset.to_string(),
        }
    }
}

/// The first offset change strictly after `after`, with the offset state
/// that takes effect at that instant.
fn next_transition(tz: Tz, after: DateTime<Utc>) -> Option<(DateTime<Utc>, OffsetData)> {
    let current = OffsetData::of(tz, after);
    let mut lower = after;
    let upper = (1..=TRANSITION_HORIZON_DAYS)
        .map(|day| after + Duration::days(day))
        .find(|at| {
            let changed = OffsetData::of(tz, *at) != current;
            if !changed {
                lower = *at;
            }
            changed
        })?;

    // offset at `lower` equals `current`, at `upper` it does not
    let (mut lo, mut hi) = (0, (upper - lower).num_seconds());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if OffsetData::of(tz, lower + Duration::seconds(mid)) == current {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let at = lower + Duration::seconds(hi);
    Some((at, OffsetData::of(tz, at)))
}

/// Two zones are equivalent when they agree on the offset now and on the
/// next two transitions.
pub fn is_equivalent_timezone(lhs: Tz, rhs: Tz) -> bool {
    is_equivalent_timezone_at(lhs, rhs, Utc::now())
}

/// [`is_equivalent_timezone`] evaluated from a given instant.
///
/// Transitions must match in instant, standard and daylight offset and
/// abbreviation. A zone without transitions is only equivalent to another
/// zone without transitions.
pub fn is_equivalent_timezone_at(lhs: Tz, rhs: Tz, at: DateTime<Utc>) -> bool {
    if lhs == rhs {
        return true;
    }
    if OffsetData::of(lhs, at).utc_offset != OffsetData::of(rhs, at).utc_offset {
        return false;
    }

    let mut at = at;
    for _ in 0..2 {
        let next = next_transition(lhs, at);
        if next != next_transition(rhs, at) {
            return false;
        }
        match next {
            Some((transition, _)) => at = transition,
            None => break,
        }
    }
    true
}

/// Best timezone for a location given its coordinate and/or country.
///
/// Either input may be missing (NaN coordinates, invalid country).
/// Returns `None` when the inputs do not settle on a zone.
pub fn timezone_for_location(lat: f64, lon: f64, country: CountryId) -> Option<Tz> {
    let coord_tz = timezone_for_coordinate(lat, lon);
    let country_tzs = if country.is_valid() {
        timezones_for_country(country)
    } else {
        Vec::new()
    };
    let coord_country = coord_tz.map(country_for_timezone).unwrap_or_default();

    // nearest anchor across the border: look for its twin in the requested country
    if let Some(coord_tz) = coord_tz {
        if coord_country.is_valid() && country.is_valid() && coord_country != country {
            let mut equivalent = country_tzs
                .iter()
                .filter(|tz| is_equivalent_timezone(**tz, coord_tz));
            if let (Some(tz), None) = (equivalent.next(), equivalent.next()) {
                return Some(*tz);
            }
        }
    }

    match coord_tz {
        Some(tz) if country_tzs.contains(&tz) || country_tzs.is_empty() => Some(tz),
        None if country_tzs.len() == 1 => Some(country_tzs[0]),
        None => {
            debug!(%country, "no timezone for location");
            None
        }
        Some(tz) if country == coord_country => Some(tz),
        Some(tz) => match country_tzs.as_slice() {
            [country_tz] if is_equivalent_timezone(tz, *country_tz) => Some(*country_tz),
            _ => Some(tz),
        },
    }
}

/// Whether `tz` is consistent with what is known about a location.
///
/// Without any coordinate or country signal every zone is plausible.
pub fn is_plausible_timezone(tz: Tz, lat: f64, lon: f64, country: CountryId) -> bool {
    let mut candidates = if country.is_valid() {
        timezones_for_country(country)
    } else {
        Vec::new()
    };
    candidates.extend(timezone_for_coordinate(lat, lon));
    candidates.is_empty() || candidates.contains(&tz)
}

static ANCHORS: Lazy<Vec<(Tz, f64, f64)>> = Lazy::new(|| {
    ANCHOR_TABLE
        .iter()
        .filter_map(|(name, lat, lon)| name.parse::<Tz>().ok().map(|tz| (tz, *lat, *lon)))
        .collect()
});

static COUNTRY_ZONES: Lazy<HashMap<CountryId, Vec<Tz>>> = Lazy::new(|| {
    let mut zones: HashMap<CountryId, Vec<Tz>> = HashMap::new();
    for (name, country) in TIMEZONE_COUNTRY_TABLE {
        if let Ok(tz) = name.parse::<Tz>() {
            zones.entry(*country).or_default().push(tz);
        }
    }
    zones
});

/// Representative points of each zone, several for large zones.
static ANCHOR_TABLE: &[(&str, f64, f64)] = &[
    ("Africa/Abidjan", 5.3600, -4.0083),
    ("Africa/Accra", 5.6037, -0.1870),
    ("Africa/Addis_Ababa", 9.0300, 38.7400),
    ("Africa/Algiers", 36.7538, 3.0588),
    ("Africa/Cairo", 30.0444, 31.2357),
    ("Africa/Casablanca", 33.5731, -7.5898),
    ("Africa/Dakar", 14.7167, -17.4677),
    ("Africa/Dar_es_Salaam", -6.7924, 39.2083),
    ("Africa/Johannesburg", -26.2041, 28.0473),
    ("Africa/Johannesburg", -33.9249, 18.4241),
    ("Africa/Khartoum", 15.5007, 32.5599),
    ("Africa/Kinshasa", -4.4419, 15.2663),
    ("Africa/Lagos", 6.5244, 3.3792),
    ("Africa/Luanda", -8.8390, 13.2894),
    ("Africa/Maputo", -25.9692, 32.5732),
    ("Africa/Nairobi", -1.2921, 36.8219),
    ("Africa/Tripoli", 32.8872, 13.1913),
    ("Africa/Tunis", 36.8065, 10.1815),
    ("America/Anchorage", 61.2181, -149.9003),
    ("America/Anchorage", 64.8378, -147.7164),
    ("America/Argentina/Buenos_Aires", -34.6037, -58.3816),
    ("America/Bogota", 4.7110, -74.0721),
    ("America/Boise", 43.6150, -116.2023),
    ("America/Cancun", 21.1619, -86.8515),
    ("America/Caracas", 10.4806, -66.9036),
    ("America/Chicago", 41.8781, -87.6298),
    ("America/Chicago", 32.7767, -96.7970),
    ("America/Chicago", 29.7604, -95.3698),
    ("America/Chicago", 29.4241, -98.4936),
    ("America/Chicago", 44.9778, -93.2650),
    ("America/Chicago", 39.0997, -94.5786),
    ("America/Chicago", 29.9511, -90.0715),
    ("America/Chicago", 36.1627, -86.7816),
    ("America/Denver", 39.7392, -104.9903),
    ("America/Denver", 40.7608, -111.8910),
    ("America/Denver", 35.0844, -106.6504),
    ("America/Detroit", 42.3314, -83.0458),
    ("America/Edmonton", 53.5461, -113.4938),
    ("America/Edmonton", 51.0447, -114.0719),
    ("America/Guatemala", 14.6349, -90.5069),
    ("America/Halifax", 44.6488, -63.5752),
    ("America/Havana", 23.1136, -82.3666),
    ("America/Indiana/Indianapolis", 39.7684, -86.1581),
    ("America/Lima", -12.0464, -77.0428),
    ("America/Los_Angeles", 34.0522, -118.2437),
    ("America/Los_Angeles", 37.7749, -122.4194),
    ("America/Los_Angeles", 47.6062, -122.3321),
    ("America/Los_Angeles", 45.5152, -122.6784),
    ("America/Los_Angeles", 36.1699, -115.1398),
    ("America/Los_Angeles", 32.7157, -117.1611),
    ("America/Los_Angeles", 38.5816, -121.4944),
    ("America/Manaus", -3.1190, -60.0217),
    ("America/Mexico_City", 19.4326, -99.1332),
    ("America/Mexico_City", 20.6597, -103.3496),
    ("America/Monterrey", 25.6866, -100.3161),
    ("America/Montevideo", -34.9011, -56.1645),
    ("America/New_York", 40.7128, -74.0060),
    ("America/New_York", 42.3601, -71.0589),
    ("America/New_York", 38.9072, -77.0369),
    ("America/New_York", 39.9526, -75.1652),
    ("America/New_York", 33.7490, -84.3880),
    ("America/New_York", 25.7617, -80.1918),
    ("America/New_York", 28.5383, -81.3792),
    ("America/New_York", 35.2271, -80.8431),
    ("America/New_York", 43.6591, -70.2568),
    ("America/New_York", 40.4406, -79.9959),
    ("America/Panama", 8.9824, -79.5199),
    ("America/Phoenix", 33.4484, -112.0740),
    ("America/Phoenix", 32.2226, -110.9747),
    ("America/Puerto_Rico", 18.4655, -66.1057),
    ("America/Regina", 50.4452, -104.6189),
    ("America/Santiago", -33.4489, -70.6693),
    ("America/Sao_Paulo", -23.5505, -46.6333),
    ("America/Sao_Paulo", -22.9068, -43.1729),
    ("America/Sao_Paulo", -15.7975, -47.8919),
    ("America/St_Johns", 47.5615, -52.7126),
    ("America/Tijuana", 32.5149, -117.0382),
    ("America/Toronto", 43.6532, -79.3832),
    ("America/Toronto", 45.5017, -73.5673),
    ("America/Toronto", 45.4215, -75.6972),
    ("America/Toronto", 46.8139, -71.2080),
    ("America/Vancouver", 49.2827, -123.1207),
    ("America/Winnipeg", 49.8951, -97.1384),
    ("Asia/Almaty", 43.2220, 76.8512),
    ("Asia/Baghdad", 33.3152, 44.3661),
    ("Asia/Bangkok", 13.7563, 100.5018),
    ("Asia/Dhaka", 23.8103, 90.4125),
    ("Asia/Dubai", 25.2048, 55.2708),
    ("Asia/Ho_Chi_Minh", 10.8231, 106.6297),
    ("Asia/Hong_Kong", 22.3193, 114.1694),
    ("Asia/Irkutsk", 52.2870, 104.3050),
    ("Asia/Jakarta", -6.2088, 106.8456),
    ("Asia/Jerusalem", 31.7683, 35.2137),
    ("Asia/Jerusalem", 32.0853, 34.7818),
    ("Asia/Karachi", 24.8607, 67.0011),
    ("Asia/Kathmandu", 27.7172, 85.3240),
    ("Asia/Kolkata", 28.6139, 77.2090),
    ("Asia/Kolkata", 19.0760, 72.8777),
    ("Asia/Kolkata", 12.9716, 77.5946),
    ("Asia/Krasnoyarsk", 56.0153, 92.8932),
    ("Asia/Kuala_Lumpur", 3.1390, 101.6869),
    ("Asia/Manila", 14.5995, 120.9842),
    ("Asia/Novosibirsk", 55.0084, 82.9357),
    ("Asia/Riyadh", 24.7136, 46.6753),
    ("Asia/Seoul", 37.5665, 126.9780),
    ("Asia/Shanghai", 31.2304, 121.4737),
    ("Asia/Shanghai", 39.9042, 116.4074),
    ("Asia/Shanghai", 23.1291, 113.2644),
    ("Asia/Singapore", 1.3521, 103.8198),
    ("Asia/Taipei", 25.0330, 121.5654),
    ("Asia/Tashkent", 41.2995, 69.2401),
    ("Asia/Tehran", 35.6892, 51.3890),
    ("Asia/Tokyo", 35.6762, 139.6503),
    ("Asia/Tokyo", 34.6937, 135.5023),
    ("Asia/Vladivostok", 43.1198, 131.8869),
    ("Asia/Yakutsk", 62.0355, 129.6755),
    ("Asia/Yekaterinburg", 56.8389, 60.6057),
    ("Atlantic/Azores", 37.7412, -25.6756),
    ("Atlantic/Canary", 28.1235, -15.4363),
    ("Atlantic/Madeira", 32.6669, -16.9241),
    ("Atlantic/Reykjavik", 64.1466, -21.9426),
    ("Australia/Adelaide", -34.9285, 138.6007),
    ("Australia/Brisbane", -27.4698, 153.0251),
    ("Australia/Darwin", -12.4634, 130.8456),
    ("Australia/Hobart", -42.8821, 147.3272),
    ("Australia/Melbourne", -37.8136, 144.9631),
    ("Australia/Perth", -31.9505, 115.8605),
    ("Australia/Sydney", -33.8688, 151.2093),
    ("Europe/Amsterdam", 52.3676, 4.9041),
    ("Europe/Amsterdam", 51.9244, 4.4777),
    ("Europe/Athens", 37.9838, 23.7275),
    ("Europe/Belgrade", 44.7866, 20.4489),
    ("Europe/Berlin", 52.5200, 13.4050),
    ("Europe/Berlin", 53.5511, 9.9937),
    ("Europe/Berlin", 48.1351, 11.5820),
    ("Europe/Berlin", 50.9375, 6.9603),
    ("Europe/Berlin", 50.1109, 8.6821),
    ("Europe/Berlin", 48.7758, 9.1829),
    ("Europe/Berlin", 51.3397, 12.3731),
    ("Europe/Berlin", 51.0504, 13.7373),
    ("Europe/Berlin", 52.3759, 9.7320),
    ("Europe/Bratislava", 48.1486, 17.1077),
    ("Europe/Brussels", 50.8503, 4.3517),
    ("Europe/Bucharest", 44.4268, 26.1025),
    ("Europe/Budapest", 47.4979, 19.0402),
    ("Europe/Chisinau", 47.0105, 28.8638),
    ("Europe/Copenhagen", 55.6761, 12.5683),
    ("Europe/Dublin", 53.3498, -6.2603),
    ("Europe/Helsinki", 60.1699, 24.9384),
    ("Europe/Helsinki", 61.4978, 23.7610),
    ("Europe/Helsinki", 65.0121, 25.4651),
    ("Europe/Istanbul", 41.0082, 28.9784),
    ("Europe/Istanbul", 39.9334, 32.8597),
    ("Europe/Kaliningrad", 54.7104, 20.4522),
    ("Europe/Kiev", 50.4501, 30.5234),
    ("Europe/Lisbon", 38.7223, -9.1393),
    ("Europe/Lisbon", 41.1579, -8.6291),
    ("Europe/Ljubljana", 46.0569, 14.5058),
    ("Europe/London", 51.5074, -0.1278),
    ("Europe/London", 53.4808, -2.2426),
    ("Europe/London", 55.9533, -3.1883),
    ("Europe/London", 55.8642, -4.2518),
    ("Europe/London", 52.4862, -1.8904),
    ("Europe/London", 51.4816, -3.1791),
    ("Europe/London", 54.5973, -5.9301),
    ("Europe/Luxembourg", 49.6116, 6.1319),
    ("Europe/Madrid", 40.4168, -3.7038),
    ("Europe/Madrid", 41.3874, 2.1686),
    ("Europe/Madrid", 37.3891, -5.9845),
    ("Europe/Madrid", 43.2630, -2.9350),
    ("Europe/Minsk", 53.9006, 27.5590),
    ("Europe/Moscow", 55.7558, 37.6173),
    ("Europe/Moscow", 59.9311, 30.3609),
    ("Europe/Oslo", 59.9139, 10.7522),
    ("Europe/Oslo", 60.3913, 5.3221),
    ("Europe/Paris", 48.8566, 2.3522),
    ("Europe/Paris", 45.7640, 4.8357),
    ("Europe/Paris", 43.2965, 5.3698),
    ("Europe/Paris", 44.8378, -0.5792),
    ("Europe/Paris", 48.5734, 7.7521),
    ("Europe/Paris", 50.6292, 3.0573),
    ("Europe/Paris", 47.2184, -1.5536),
    ("Europe/Paris", 43.7102, 7.2620),
    ("Europe/Prague", 50.0755, 14.4378),
    ("Europe/Riga", 56.9496, 24.1052),
    ("Europe/Rome", 41.9028, 12.4964),
    ("Europe/Rome", 45.4642, 9.1900),
    ("Europe/Rome", 40.8518, 14.2681),
    ("Europe/Samara", 53.1959, 50.1002),
    ("Europe/Sofia", 42.6977, 23.3219),
    ("Europe/Stockholm", 59.3293, 18.0686),
    ("Europe/Stockholm", 57.7089, 11.9746),
    ("Europe/Tallinn", 59.4370, 24.7536),
    ("Europe/Vienna", 48.2082, 16.3738),
    ("Europe/Vienna", 47.0707, 15.4395),
    ("Europe/Vilnius", 54.6872, 25.2797),
    ("Europe/Warsaw", 52.2297, 21.0122),
    ("Europe/Warsaw", 50.0647, 19.9450),
    ("Europe/Zagreb", 45.8150, 15.9819),
    ("Europe/Zurich", 47.3769, 8.5417),
    ("Europe/Zurich", 46.2044, 6.1432),
    ("Europe/Zurich", 46.9480, 7.4474),
    ("Europe/Zurich", 47.5596, 7.5886),
    ("Pacific/Auckland", -36.8485, 174.7633),
    ("Pacific/Honolulu", 21.3069, -157.8583),
];

/// Zone to country, sorted by zone name. Zones spanning several countries
/// are absent.
static TIMEZONE_COUNTRY_TABLE: &[(&str, CountryId)] = &[
    ("Africa/Abidjan", CountryId::new(b"CI")),
    ("Africa/Accra", CountryId::new(b"GH")),
    ("Africa/Addis_Ababa", CountryId::new(b"ET")),
    ("Africa/Algiers", CountryId::new(b"DZ")),
    ("Africa/Asmara", CountryId::new(b"ER")),
    ("Africa/Bamako", CountryId::new(b"ML")),
    ("Africa/Bangui", CountryId::new(b"CF")),
    ("Africa/Banjul", CountryId::new(b"GM")),
    ("Africa/Bissau", CountryId::new(b"GW")),
    ("Africa/Blantyre", CountryId::new(b"MW")),
    ("Africa/Brazzaville", CountryId::new(b"CG")),
    ("Africa/Bujumbura", CountryId::new(b"BI")),
    ("Africa/Cairo", CountryId::new(b"EG")),
    ("Africa/Casablanca", CountryId::new(b"MA")),
    ("Africa/Ceuta", CountryId::new(b"ES")),
    ("Africa/Conakry", CountryId::new(b"GN")),
    ("Africa/Dakar", CountryId::new(b"SN")),
    ("Africa/Dar_es_Salaam", CountryId::new(b"TZ")),
    ("Africa/Djibouti", CountryId::new(b"DJ")),
    ("Africa/Douala", CountryId::new(b"CM")),
    ("Africa/El_Aaiun", CountryId::new(b"EH")),
    ("Africa/Freetown", CountryId::new(b"SL")),
    ("Africa/Gaborone", CountryId::new(b"BW")),
    ("Africa/Harare", CountryId::new(b"ZW")),
    ("Africa/Johannesburg", CountryId::new(b"ZA")),
    ("Africa/Juba", CountryId::new(b"SS")),
    ("Africa/Kampala", CountryId::new(b"UG")),
    ("Africa/Khartoum", CountryId::new(b"SD")),
    ("Africa/Kigali", CountryId::new(b"RW")),
    ("Africa/Kinshasa", CountryId::new(b"CD")),
    ("Africa/Lagos", CountryId::new(b"NG")),
    ("Africa/Libreville", CountryId::new(b"GA")),
    ("Africa/Lome", CountryId::new(b"TG")),
    ("Africa/Luanda", CountryId::new(b"AO")),
    ("Africa/Lubumbashi", CountryId::new(b"CD")),
    ("Africa/Lusaka", CountryId::new(b"ZM")),
    ("Africa/Malabo", CountryId::new(b"GQ")),
    ("Africa/Maputo", CountryId::new(b"MZ")),
    ("Africa/Maseru", CountryId::new(b"LS")),
    ("Africa/Mbabane", CountryId::new(b"SZ")),
    ("Africa/Mogadishu", CountryId::new(b"SO")),
    ("Africa/Monrovia", CountryId::new(b"LR")),
    ("Africa/Nairobi", CountryId::new(b"KE")),
    ("Africa/Ndjamena", CountryId::new(b"TD")),
    ("Africa/Niamey", CountryId::new(b"NE")),
    ("Africa/Nouakchott", CountryId::new(b"MR")),
    ("Africa/Ouagadougou", CountryId::new(b"BF")),
    ("Africa/Porto-Novo", CountryId::new(b"BJ")),
    ("Africa/Sao_Tome", CountryId::new(b"ST")),
    ("Africa/Tripoli", CountryId::new(b"LY")),
    ("Africa/Tunis", CountryId::new(b"TN")),
    ("Africa/Windhoek", CountryId::new(b"NA")),
    ("America/Adak", CountryId::new(b"US")),
    ("America/Anchorage", CountryId::new(b"US")),
    ("America/Anguilla", CountryId::new(b"AI")),
    ("America/Antigua", CountryId::new(b"AG")),
    ("America/Araguaina", CountryId::new(b"BR")),
    ("America/Argentina/Buenos_Aires", CountryId::new(b"AR")),
    ("America/Argentina/Catamarca", CountryId::new(b"AR")),
    ("America/Argentina/Cordoba", CountryId::new(b"AR")),
    ("America/Argentina/Jujuy", CountryId::new(b"AR")),
    ("America/Argentina/La_Rioja", CountryId::new(b"AR")),
    ("America/Argentina/Mendoza", CountryId::new(b"AR")),
    ("America/Argentina/Rio_Gallegos", CountryId::new(b"AR")),
    ("America/Argentina/Salta", CountryId::new(b"AR")),
    ("America/Argentina/San_Juan", CountryId::new(b"AR")),
    ("America/Argentina/San_Luis", CountryId::new(b"AR")),
    ("America/Argentina/Tucuman", CountryId::new(b"AR")),
    ("America/Argentina/Ushuaia", CountryId::new(b"AR")),
    ("America/Aruba", CountryId::new(b"AW")),
    ("America/Asuncion", CountryId::new(b"PY")),
    ("America/Atikokan", CountryId::new(b"CA")),
    ("America/Bahia", CountryId::new(b"BR")),
    ("America/Bahia_Banderas", CountryId::new(b"MX")),
    ("America/Barbados", CountryId::new(b"BB")),
    ("America/Belem", CountryId::new(b"BR")),
    ("America/Belize", CountryId::new(b"BZ")),
    ("America/Blanc-Sablon", CountryId::new(b"CA")),
    ("America/Boa_Vista", CountryId::new(b"BR")),
    ("America/Bogota", CountryId::new(b"CO")),
    ("America/Boise", CountryId::new(b"US")),
    ("America/Cambridge_Bay", CountryId::new(b"CA")),
    ("America/Campo_Grande", CountryId::new(b"BR")),
    ("America/Cancun", CountryId::new(b"MX")),
    ("America/Caracas", CountryId::new(b"VE")),
    ("America/Cayenne", CountryId::new(b"GF")),
    ("America/Cayman", CountryId::new(b"KY")),
    ("America/Chicago", CountryId::new(b"US")),
    ("America/Chihuahua", CountryId::new(b"MX")),
    ("America/Costa_Rica", CountryId::new(b"CR")),
    ("America/Creston", CountryId::new(b"CA")),
    ("America/Cuiaba", CountryId::new(b"BR")),
    ("America/Curacao", CountryId::new(b"CW")),
    ("America/Danmarkshavn", CountryId::new(b"GL")),
    ("America/Dawson", CountryId::new(b"CA")),
    ("America/Dawson_Creek", CountryId::new(b"CA")),
    ("America/Denver", CountryId::new(b"US")),
    ("America/Detroit", CountryId::new(b"US")),
    ("America/Dominica", CountryId::new(b"DM")),
    ("America/Edmonton", CountryId::new(b"CA")),
    ("America/Eirunepe", CountryId::new(b"BR")),
    ("America/El_Salvador", CountryId::new(b"SV")),
    ("America/Fort_Nelson", CountryId::new(b"CA")),
    ("America/Fortaleza", CountryId::new(b"BR")),
    ("America/Glace_Bay", CountryId::new(b"CA")),
    ("America/Goose_Bay", CountryId::new(b"CA")),
    ("America/Grand_Turk", CountryId::new(b"TC")),
    ("America/Grenada", CountryId::new(b"GD")),
    ("America/Guadeloupe", CountryId::new(b"GP")),
    ("America/Guatemala", CountryId::new(b"GT")),
    ("America/Guayaquil", CountryId::new(b"EC")),
    ("America/Guyana", CountryId::new(b"GY")),
    ("America/Halifax", CountryId::new(b"CA")),
    ("America/Havana", CountryId::new(b"CU")),
    ("America/Hermosillo", CountryId::new(b"MX")),
    ("America/Indiana/Indianapolis", CountryId::new(b"US")),
    ("America/Indiana/Knox", CountryId::new(b"US")),
    ("America/Indiana/Marengo", CountryId::new(b"US")),
    ("America/Indiana/Petersburg", CountryId::new(b"US")),
    ("America/Indiana/Tell_City", CountryId::new(b"US")),
    ("America/Indiana/Vevay", CountryId::new(b"US")),
    ("America/Indiana/Vincennes", CountryId::new(b"US")),
    ("America/Indiana/Winamac", CountryId::new(b"US")),
    ("America/Inuvik", CountryId::new(b"CA")),
    ("America/Iqaluit", CountryId::new(b"CA")),
    ("America/Jamaica", CountryId::new(b"JM")),
    ("America/Juneau", CountryId::new(b"US")),
    ("America/Kentucky/Louisville", CountryId::new(b"US")),
    ("America/Kentucky/Monticello", CountryId::new(b"US")),
    ("America/Kralendijk", CountryId::new(b"BQ")),
    ("America/La_Paz", CountryId::new(b"BO")),
    ("America/Lima", CountryId::new(b"PE")),
    ("America/Los_Angeles", CountryId::new(b"US")),
    ("America/Lower_Princes", CountryId::new(b"SX")),
    ("America/Maceio", CountryId::new(b"BR")),
    ("America/Managua", CountryId::new(b"NI")),
    ("America/Manaus", CountryId::new(b"BR")),
    ("America/Marigot", CountryId::new(b"MF")),
    ("America/Martinique", CountryId::new(b"MQ")),
    ("America/Matamoros", CountryId::new(b"MX")),
    ("America/Mazatlan", CountryId::new(b"MX")),
    ("America/Menominee", CountryId::new(b"US")),
    ("America/Merida", CountryId::new(b"MX")),
    ("America/Metlakatla", CountryId::new(b"US")),
    ("America/Mexico_City", CountryId::new(b"MX")),
    ("America/Miquelon", CountryId::new(b"PM")),
    ("America/Moncton", CountryId::new(b"CA")),
    ("America/Monterrey", CountryId::new(b"MX")),
    ("America/Montevideo", CountryId::new(b"UY")),
    ("America/Montserrat", CountryId::new(b"MS")),
    ("America/Nassau", CountryId::new(b"BS")),
    ("America/New_York", CountryId::new(b"US")),
    ("America/Nipigon", CountryId::new(b"CA")),
    ("America/Nome", CountryId::new(b"US")),
    ("America/Noronha", CountryId::new(b"BR")),
    ("America/North_Dakota/Beulah", CountryId::new(b"US")),
    ("America/North_Dakota/Center", CountryId::new(b"US")),
    ("America/North_Dakota/New_Salem", CountryId::new(b"US")),
    ("America/Nuuk", CountryId::new(b"GL")),
    ("America/Ojinaga", CountryId::new(b"MX")),
    ("America/Panama", CountryId::new(b"PA")),
    ("America/Pangnirtung", CountryId::new(b"CA")),
    ("America/Paramaribo", CountryId::new(b"SR")),
    ("America/Phoenix", CountryId::new(b"US")),
    ("America/Port-au-Prince", CountryId::new(b"HT")),
    ("America/Port_of_Spain", CountryId::new(b"TT")),
    ("America/Porto_Velho", CountryId::new(b"BR")),
    ("America/Puerto_Rico", CountryId::new(b"PR")),
    ("America/Punta_Arenas", CountryId::new(b"CL")),
    ("America/Rainy_River", CountryId::new(b"CA")),
    ("America/Rankin_Inlet", CountryId::new(b"CA")),
    ("America/Recife", CountryId::new(b"BR")),
    ("America/Regina", CountryId::new(b"CA")),
    ("America/Resolute", CountryId::new(b"CA")),
    ("America/Rio_Branco", CountryId::new(b"BR")),
    ("America/Santarem", CountryId::new(b"BR")),
    ("America/Santiago", CountryId::new(b"CL")),
    ("America/Santo_Domingo", CountryId::new(b"DO")),
    ("America/Sao_Paulo", CountryId::new(b"BR")),
    ("America/Scoresbysund", CountryId::new(b"GL")),
    ("America/Sitka", CountryId::new(b"US")),
    ("America/St_Barthelemy", CountryId::new(b"BL")),
    ("America/St_Johns", CountryId::new(b"CA")),
    ("America/St_Kitts", CountryId::new(b"KN")),
    ("America/St_Lucia", CountryId::new(b"LC")),
    ("America/St_Thomas", CountryId::new(b"VI")),
    ("America/St_Vincent", CountryId::new(b"VC")),
    ("America/Swift_Current", CountryId::new(b"CA")),
    ("America/Tegucigalpa", CountryId::new(b"HN")),
    ("America/Thule", CountryId::new(b"GL")),
    ("America/Thunder_Bay", CountryId::new(b"CA")),
    ("America/Tijuana", CountryId::new(b"MX")),
    ("America/Toronto", CountryId::new(b"CA")),
    ("America/Tortola", CountryId::new(b"VG")),
    ("America/Vancouver", CountryId::new(b"CA")),
    ("America/Whitehorse", CountryId::new(b"CA")),
    ("America/Winnipeg", CountryId::new(b"CA")),
    ("America/Yakutat", CountryId::new(b"US")),
    ("America/Yellowknife", CountryId::new(b"CA")),
    ("Antarctica/Casey", CountryId::new(b"AQ")),
    ("Antarctica/Davis", CountryId::new(b"AQ")),
    ("Antarctica/DumontDUrville", CountryId::new(b"AQ")),
    ("Antarctica/Macquarie", CountryId::new(b"AU")),
    ("Antarctica/Mawson", CountryId::new(b"AQ")),
    ("Antarctica/McMurdo", CountryId::new(b"AQ")),
    ("Antarctica/Palmer", CountryId::new(b"AQ")),
    ("Antarctica/Rothera", CountryId::new(b"AQ")),
    ("Antarctica/Syowa", CountryId::new(b"AQ")),
    ("Antarctica/Troll", CountryId::new(b"AQ")),
    ("Antarctica/Vostok", CountryId::new(b"AQ")),
    ("Arctic/Longyearbyen", CountryId::new(b"SJ")),
    ("Asia/Aden", CountryId::new(b"YE")),
    ("Asia/Almaty", CountryId::new(b"KZ")),
    ("Asia/Amman", CountryId::new(b"JO")),
    ("Asia/Anadyr", CountryId::new(b"RU")),
    ("Asia/Aqtau", CountryId::new(b"KZ")),
    ("Asia/Aqtobe", CountryId::new(b"KZ")),
    ("Asia/Ashgabat", CountryId::new(b"TM")),
    ("Asia/Atyrau", CountryId::new(b"KZ")),
    ("Asia/Baghdad", CountryId::new(b"IQ")),
    ("Asia/Bahrain", CountryId::new(b"BH")),
    ("Asia/Baku", CountryId::new(b"AZ")),
    ("Asia/Barnaul", CountryId::new(b"RU")),
    ("Asia/Beirut", CountryId::new(b"LB")),
    ("Asia/Bishkek", CountryId::new(b"KG")),
    ("Asia/Brunei", CountryId::new(b"BN")),
    ("Asia/Chita", CountryId::new(b"RU")),
    ("Asia/Choibalsan", CountryId::new(b"MN")),
    ("Asia/Colombo", CountryId::new(b"LK")),
    ("Asia/Damascus", CountryId::new(b"SY")),
    ("Asia/Dhaka", CountryId::new(b"BD")),
    ("Asia/Dili", CountryId::new(b"TL")),
    ("Asia/Dubai", CountryId::new(b"AE")),
    ("Asia/Dushanbe", CountryId::new(b"TJ")),
    ("Asia/Famagusta", CountryId::new(b"CY")),
    ("Asia/Gaza", CountryId::new(b"PS")),
    ("Asia/Hebron", CountryId::new(b"PS")),
    ("Asia/Ho_Chi_Minh", CountryId::new(b"VN")),
    ("Asia/Hong_Kong", CountryId::new(b"HK")),
    ("Asia/Hovd", CountryId::new(b"MN")),
    ("Asia/Irkutsk", CountryId::new(b"RU")),
    ("Asia/Jakarta", CountryId::new(b"ID")),
    ("Asia/Jayapura", CountryId::new(b"ID")),
    ("Asia/Jerusalem", CountryId::new(b"IL")),
    ("Asia/Kabul", CountryId::new(b"AF")),
    ("Asia/Kamchatka", CountryId::new(b"RU")),
    ("Asia/Karachi", CountryId::new(b"PK")),
    ("Asia/Kathmandu", CountryId::new(b"NP")),
    ("Asia/Khandyga", CountryId::new(b"RU")),
    ("Asia/Kolkata", CountryId::new(b"IN")),
    ("Asia/Krasnoyarsk", CountryId::new(b"RU")),
    ("Asia/Kuala_Lumpur", CountryId::new(b"MY")),
    ("Asia/Kuching", CountryId::new(b"MY")),
    ("Asia/Kuwait", CountryId::new(b"KW")),
    ("Asia/Macau", CountryId::new(b"MO")),
    ("Asia/Magadan", CountryId::new(b"RU")),
    ("Asia/Makassar", CountryId::new(b"ID")),
    ("Asia/Manila", CountryId::new(b"PH")),
    ("Asia/Muscat", CountryId::new(b"OM")),
    ("Asia/Nicosia", CountryId::new(b"CY")),
    ("Asia/Novokuznetsk", CountryId::new(b"RU")),
    ("Asia/Novosibirsk", CountryId::new(b"RU")),
    ("Asia/Omsk", CountryId::new(b"RU")),
    ("Asia/Oral", CountryId::new(b"KZ")),
    ("Asia/Phnom_Penh", CountryId::new(b"KH")),
    ("Asia/Pontianak", CountryId::new(b"ID")),
    ("Asia/Pyongyang", CountryId::new(b"KP")),
    ("Asia/Qatar", CountryId::new(b"QA")),
    ("Asia/Qostanay", CountryId::new(b"KZ")),
    ("Asia/Qyzylorda", CountryId::new(b"KZ")),
    ("Asia/Riyadh", CountryId::new(b"SA")),
    ("Asia/Sakhalin", CountryId::new(b"RU")),
    ("Asia/Samarkand", CountryId::new(b"UZ")),
    ("Asia/Seoul", CountryId::new(b"KR")),
    ("Asia/Shanghai", CountryId::new(b"CN")),
    ("Asia/Singapore", CountryId::new(b"SG")),
    ("Asia/Srednekolymsk", CountryId::new(b"RU")),
    ("Asia/Taipei", CountryId::new(b"TW")),
    ("Asia/Tashkent", CountryId::new(b"UZ")),
    ("Asia/Tbilisi", CountryId::new(b"GE")),
    ("Asia/Tehran", CountryId::new(b"IR")),
    ("Asia/Thimphu", CountryId::new(b"BT")),
    ("Asia/Tokyo", CountryId::new(b"JP")),
    ("Asia/Tomsk", CountryId::new(b"RU")),
    ("Asia/Ulaanbaatar", CountryId::new(b"MN")),
    ("Asia/Urumqi", CountryId::new(b"CN")),
    ("Asia/Ust-Nera", CountryId::new(b"RU")),
    ("Asia/Vientiane", CountryId::new(b"LA")),
    ("Asia/Vladivostok", CountryId::new(b"RU")),
    ("Asia/Yakutsk", CountryId::new(b"RU")),
    ("Asia/Yangon", CountryId::new(b"MM")),
    ("Asia/Yekaterinburg", CountryId::new(b"RU")),
    ("Asia/Yerevan", CountryId::new(b"AM")),
    ("Atlantic/Azores", CountryId::new(b"PT")),
    ("Atlantic/Bermuda", CountryId::new(b"BM")),
    ("Atlantic/Canary", CountryId::new(b"ES")),
    ("Atlantic/Cape_Verde", CountryId::new(b"CV")),
    ("Atlantic/Faroe", CountryId::new(b"FO")),
    ("Atlantic/Madeira", CountryId::new(b"PT")),
    ("Atlantic/Reykjavik", CountryId::new(b"IS")),
    ("Atlantic/South_Georgia", CountryId::new(b"GS")),
    ("Atlantic/St_Helena", CountryId::new(b"SH")),
    ("Atlantic/Stanley", CountryId::new(b"FK")),
    ("Australia/Adelaide", CountryId::new(b"AU")),
    ("Australia/Brisbane", CountryId::new(b"AU")),
    ("Australia/Broken_Hill", CountryId::new(b"AU")),
    ("Australia/Currie", CountryId::new(b"AU")),
    ("Australia/Darwin", CountryId::new(b"AU")),
    ("Australia/Eucla", CountryId::new(b"AU")),
    ("Australia/Hobart", CountryId::new(b"AU")),
    ("Australia/Lindeman", CountryId::new(b"AU")),
    ("Australia/Lord_Howe", CountryId::new(b"AU")),
    ("Australia/Melbourne", CountryId::new(b"AU")),
    ("Australia/Perth", CountryId::new(b"AU")),
    ("Australia/Sydney", CountryId::new(b"AU")),
    ("Europe/Amsterdam", CountryId::new(b"NL")),
    ("Europe/Andorra", CountryId::new(b"AD")),
    ("Europe/Astrakhan", CountryId::new(b"RU")),
    ("Europe/Athens", CountryId::new(b"GR")),
    ("Europe/Belgrade", CountryId::new(b"RS")),
    ("Europe/Berlin", CountryId::new(b"DE")),
    ("Europe/Bratislava", CountryId::new(b"SK")),
    ("Europe/Brussels", CountryId::new(b"BE")),
    ("Europe/Bucharest", CountryId::new(b"RO")),
    ("Europe/Budapest", CountryId::new(b"HU")),
    ("Europe/Busingen", CountryId::new(b"DE")),
    ("Europe/Chisinau", CountryId::new(b"MD")),
    ("Europe/Copenhagen", CountryId::new(b"DK")),
    ("Europe/Dublin", CountryId::new(b"IE")),
    ("Europe/Gibraltar", CountryId::new(b"GI")),
    ("Europe/Guernsey", CountryId::new(b"GG")),
    ("Europe/Helsinki", CountryId::new(b"FI")),
    ("Europe/Isle_of_Man", CountryId::new(b"IM")),
    ("Europe/Istanbul", CountryId::new(b"TR")),
    ("Europe/Jersey", CountryId::new(b"JE")),
    ("Europe/Kaliningrad", CountryId::new(b"RU")),
    ("Europe/Kiev", CountryId::new(b"UA")),
    ("Europe/Kirov", CountryId::new(b"RU")),
    ("Europe/Lisbon", CountryId::new(b"PT")),
    ("Europe/Ljubljana", CountryId::new(b"SI")),
    ("Europe/London", CountryId::new(b"GB")),
    ("Europe/Luxembourg", CountryId::new(b"LU")),
    ("Europe/Madrid", CountryId::new(b"ES")),
    ("Europe/Malta", CountryId::new(b"MT")),
    ("Europe/Mariehamn", CountryId::new(b"AX")),
    ("Europe/Minsk", CountryId::new(b"BY")),
    ("Europe/Monaco", CountryId::new(b"MC")),
    ("Europe/Moscow", CountryId::new(b"RU")),
    ("Europe/Oslo", CountryId::new(b"NO")),
    ("Europe/Paris", CountryId::new(b"FR")),
    ("Europe/Podgorica", CountryId::new(b"ME")),
    ("Europe/Prague", CountryId::new(b"CZ")),
    ("Europe/Riga", CountryId::new(b"LV")),
    ("Europe/Rome", CountryId::new(b"IT")),
    ("Europe/Samara", CountryId::new(b"RU")),
    ("Europe/San_Marino", CountryId::new(b"SM")),
    ("Europe/Sarajevo", CountryId::new(b"BA")),
    ("Europe/Saratov", CountryId::new(b"RU")),
    ("Europe/Skopje", CountryId::new(b"MK")),
    ("Europe/Sofia", CountryId::new(b"BG")),
    ("Europe/Stockholm", CountryId::new(b"SE")),
    ("Europe/Tallinn", CountryId::new(b"EE")),
    ("Europe/Tirane", CountryId::new(b"AL")),
    ("Europe/Ulyanovsk", CountryId::new(b"RU")),
    ("Europe/Uzhgorod", CountryId::new(b"UA")),
    ("Europe/Vaduz", CountryId::new(b"LI")),
    ("Europe/Vatican", CountryId::new(b"VA")),
    ("Europe/Vienna", CountryId::new(b"AT")),
    ("Europe/Vilnius", CountryId::new(b"LT")),
    ("Europe/Volgograd", CountryId::new(b"RU")),
    ("Europe/Warsaw", CountryId::new(b"PL")),
    ("Europe/Zagreb", CountryId::new(b"HR")),
    ("Europe/Zaporozhye", CountryId::new(b"UA")),
    ("Europe/Zurich", CountryId::new(b"CH")),
    ("Indian/Antananarivo", CountryId::new(b"MG")),
    ("Indian/Chagos", CountryId::new(b"IO")),
    ("Indian/Christmas", CountryId::new(b"CX")),
    ("Indian/Cocos", CountryId::new(b"CC")),
    ("Indian/Comoro", CountryId::new(b"KM")),
    ("Indian/Kerguelen", CountryId::new(b"TF")),
    ("Indian/Mahe", CountryId::new(b"SC")),
    ("Indian/Maldives", CountryId::new(b"MV")),
    ("Indian/Mauritius", CountryId::new(b"MU")),
    ("Indian/Mayotte", CountryId::new(b"YT")),
    ("Indian/Reunion", CountryId::new(b"RE")),
    ("Pacific/Apia", CountryId::new(b"WS")),
    ("Pacific/Auckland", CountryId::new(b"NZ")),
    ("Pacific/Bougainville", CountryId::new(b"PG")),
    ("Pacific/Chatham", CountryId::new(b"NZ")),
    ("Pacific/Chuuk", CountryId::new(b"FM")),
    ("Pacific/Easter", CountryId::new(b"CL")),
    ("Pacific/Efate", CountryId::new(b"VU")),
    ("Pacific/Enderbury", CountryId::new(b"KI")),
    ("Pacific/Fakaofo", CountryId::new(b"TK")),
    ("Pacific/Fiji", CountryId::new(b"FJ")),
    ("Pacific/Funafuti", CountryId::new(b"TV")),
    ("Pacific/Galapagos", CountryId::new(b"EC")),
    ("Pacific/Gambier", CountryId::new(b"PF")),
    ("Pacific/Guadalcanal", CountryId::new(b"SB")),
    ("Pacific/Guam", CountryId::new(b"GU")),
    ("Pacific/Honolulu", CountryId::new(b"US")),
    ("Pacific/Kiritimati", CountryId::new(b"KI")),
    ("Pacific/Kosrae", CountryId::new(b"FM")),
    ("Pacific/Kwajalein", CountryId::new(b"MH")),
    ("Pacific/Majuro", CountryId::new(b"MH")),
    ("Pacific/Marquesas", CountryId::new(b"PF")),
    ("Pacific/Midway", CountryId::new(b"UM")),
    ("Pacific/Nauru", CountryId::new(b"NR")),
    ("Pacific/Niue", CountryId::new(b"NU")),
    ("Pacific/Norfolk", CountryId::new(b"NF")),
    ("Pacific/Noumea", CountryId::new(b"NC")),
    ("Pacific/Pago_Pago", CountryId::new(b"AS")),
    ("Pacific/Palau", CountryId::new(b"PW")),
    ("Pacific/Pitcairn", CountryId::new(b"PN")),
    ("Pacific/Pohnpei", CountryId::new(b"FM")),
    ("Pacific/Port_Moresby", CountryId::new(b"PG")),
    ("Pacific/Rarotonga", CountryId::new(b"CK")),
    ("Pacific/Saipan", CountryId::new(b"MP")),
    ("Pacific/Tahiti", CountryId::new(b"PF")),
    ("Pacific/Tarawa", CountryId::new(b"KI")),
    ("Pacific/Tongatapu", CountryId::new(b"TO")),
    ("Pacific/Wake", CountryId::new(b"UM")),
    ("Pacific/Wallis", CountryId::new(b"WF")),
];

/// Countries that effectively use a single zone, sorted by country.
static COUNTRY_TIMEZONE_TABLE: &[(CountryId, &str)] = &[
    (CountryId::new(b"AD"), "Europe/Andorra"),
    (CountryId::new(b"AE"), "Asia/Dubai"),
    (CountryId::new(b"AF"), "Asia/Kabul"),
    (CountryId::new(b"AG"), "America/Antigua"),
    (CountryId::new(b"AI"), "America/Anguilla"),
    (CountryId::new(b"AL"), "Europe/Tirane"),
    (CountryId::new(b"AM"), "Asia/Yerevan"),
    (CountryId::new(b"AO"), "Africa/Luanda"),
    (CountryId::new(b"AR"), "America/Argentina/Buenos_Aires"),
    (CountryId::new(b"AS"), "Pacific/Pago_Pago"),
    (CountryId::new(b"AT"), "Europe/Vienna"),
    (CountryId::new(b"AW"), "America/Aruba"),
    (CountryId::new(b"AX"), "Europe/Mariehamn"),
    (CountryId::new(b"AZ"), "Asia/Baku"),
    (CountryId::new(b"BA"), "Europe/Sarajevo"),
    (CountryId::new(b"BB"), "America/Barbados"),
    (CountryId::new(b"BD"), "Asia/Dhaka"),
    (CountryId::new(b"BE"), "Europe/Brussels"),
    (CountryId::new(b"BF"), "Africa/Ouagadougou"),
    (CountryId::new(b"BG"), "Europe/Sofia"),
    (CountryId::new(b"BH"), "Asia/Bahrain"),
    (CountryId::new(b"BI"), "Africa/Bujumbura"),
    (CountryId::new(b"BJ"), "Africa/Porto-Novo"),
    (CountryId::new(b"BL"), "America/St_Barthelemy"),
    (CountryId::new(b"BM"), "Atlantic/Bermuda"),
    (CountryId::new(b"BN"), "Asia/Brunei"),
    (CountryId::new(b"BO"), "America/La_Paz"),
    (CountryId::new(b"BQ"), "America/Kralendijk"),
    (CountryId::new(b"BS"), "America/Nassau"),
    (CountryId::new(b"BT"), "Asia/Thimphu"),
    (CountryId::new(b"BW"), "Africa/Gaborone"),
    (CountryId::new(b"BY"), "Europe/Minsk"),
    (CountryId::new(b"BZ"), "America/Belize"),
    (CountryId::new(b"CC"), "Indian/Cocos"),
    (CountryId::new(b"CF"), "Africa/Bangui"),
    (CountryId::new(b"CG"), "Africa/Brazzaville"),
    (CountryId::new(b"CH"), "Europe/Zurich"),
    (CountryId::new(b"CI"), "Africa/Abidjan"),
    (CountryId::new(b"CK"), "Pacific/Rarotonga"),
    (CountryId::new(b"CM"), "Africa/Douala"),
    (CountryId::new(b"CN"), "Asia/Shanghai"),
    (CountryId::new(b"CO"), "America/Bogota"),
    (CountryId::new(b"CR"), "America/Costa_Rica"),
    (CountryId::new(b"CU"), "America/Havana"),
    (CountryId::new(b"CV"), "Atlantic/Cape_Verde"),
    (CountryId::new(b"CW"), "America/Curacao"),
    (CountryId::new(b"CX"), "Indian/Christmas"),
    (CountryId::new(b"CY"), "Asia/Nicosia"),
    (CountryId::new(b"CZ"), "Europe/Prague"),
    (CountryId::new(b"DE"), "Europe/Berlin"),
    (CountryId::new(b"DJ"), "Africa/Djibouti"),
    (CountryId::new(b"DK"), "Europe/Copenhagen"),
    (CountryId::new(b"DM"), "America/Dominica"),
    (CountryId::new(b"DO"), "America/Santo_Domingo"),
    (CountryId::new(b"DZ"), "Africa/Algiers"),
    (CountryId::new(b"EE"), "Europe/Tallinn"),
    (CountryId::new(b"EG"), "Africa/Cairo"),
    (CountryId::new(b"EH"), "Africa/El_Aaiun"),
    (CountryId::new(b"ER"), "Africa/Asmara"),
    (CountryId::new(b"ET"), "Africa/Addis_Ababa"),
    (CountryId::new(b"FI"), "Europe/Helsinki"),
    (CountryId::new(b"FJ"), "Pacific/Fiji"),
    (CountryId::new(b"FK"), "Atlantic/Stanley"),
    (CountryId::new(b"FO"), "Atlantic/Faroe"),
    (CountryId::new(b"FR"), "Europe/Paris"),
    (CountryId::new(b"GA"), "Africa/Libreville"),
    (CountryId::new(b"GB"), "Europe/London"),
    (CountryId::new(b"GD"), "America/Grenada"),
    (CountryId::new(b"GE"), "Asia/Tbilisi"),
    (CountryId::new(b"GF"), "America/Cayenne"),
    (CountryId::new(b"GG"), "Europe/Guernsey"),
    (CountryId::new(b"GH"), "Africa/Accra"),
    (CountryId::new(b"GI"), "Europe/Gibraltar"),
    (CountryId::new(b"GM"), "Africa/Banjul"),
    (CountryId::new(b"GN"), "Africa/Conakry"),
    (CountryId::new(b"GP"), "America/Guadeloupe"),
    (CountryId::new(b"GQ"), "Africa/Malabo"),
    (CountryId::new(b"GR"), "Europe/Athens"),
    (CountryId::new(b"GS"), "Atlantic/South_Georgia"),
    (CountryId::new(b"GT"), "America/Guatemala"),
    (CountryId::new(b"GU"), "Pacific/Guam"),
    (CountryId::new(b"GW"), "Africa/Bissau"),
    (CountryId::new(b"GY"), "America/Guyana"),
    (CountryId::new(b"HK"), "Asia/Hong_Kong"),
    (CountryId::new(b"HN"), "America/Tegucigalpa"),
    (CountryId::new(b"HR"), "Europe/Zagreb"),
    (CountryId::new(b"HT"), "America/Port-au-Prince"),
    (CountryId::new(b"HU"), "Europe/Budapest"),
    (CountryId::new(b"IE"), "Europe/Dublin"),
    (CountryId::new(b"IL"), "Asia/Jerusalem"),
    (CountryId::new(b"IM"), "Europe/Isle_of_Man"),
    (CountryId::new(b"IN"), "Asia/Kolkata"),
    (CountryId::new(b"IO"), "Indian/Chagos"),
    (CountryId::new(b"IQ"), "Asia/Baghdad"),
    (CountryId::new(b"IR"), "Asia/Tehran"),
    (CountryId::new(b"IS"), "Atlantic/Reykjavik"),
    (CountryId::new(b"IT"), "Europe/Rome"),
    (CountryId::new(b"JE"), "Europe/Jersey"),
    (CountryId::new(b"JM"), "America/Jamaica"),
    (CountryId::new(b"JO"), "Asia/Amman"),
    (CountryId::new(b"JP"), "Asia/Tokyo"),
    (CountryId::new(b"KE"), "Africa/Nairobi"),
    (CountryId::new(b"KG"), "Asia/Bishkek"),
    (CountryId::new(b"KH"), "Asia/Phnom_Penh"),
    (CountryId::new(b"KM"), "Indian/Comoro"),
    (CountryId::new(b"KN"), "America/St_Kitts"),
    (CountryId::new(b"KP"), "Asia/Pyongyang"),
    (CountryId::new(b"KR"), "Asia/Seoul"),
    (CountryId::new(b"KW"), "Asia/Kuwait"),
    (CountryId::new(b"KY"), "America/Cayman"),
    (CountryId::new(b"LA"), "Asia/Vientiane"),
    (CountryId::new(b"LB"), "Asia/Beirut"),
    (CountryId::new(b"LC"), "America/St_Lucia"),
    (CountryId::new(b"LI"), "Europe/Vaduz"),
    (CountryId::new(b"LK"), "Asia/Colombo"),
    (CountryId::new(b"LR"), "Africa/Monrovia"),
    (CountryId::new(b"LS"), "Africa/Maseru"),
    (CountryId::new(b"LT"), "Europe/Vilnius"),
    (CountryId::new(b"LU"), "Europe/Luxembourg"),
    (CountryId::new(b"LV"), "Europe/Riga"),
    (CountryId::new(b"LY"), "Africa/Tripoli"),
    (CountryId::new(b"MA"), "Africa/Casablanca"),
    (CountryId::new(b"MC"), "Europe/Monaco"),
    (CountryId::new(b"MD"), "Europe/Chisinau"),
    (CountryId::new(b"ME"), "Europe/Podgorica"),
    (CountryId::new(b"MF"), "America/Marigot"),
    (CountryId::new(b"MG"), "Indian/Antananarivo"),
    (CountryId::new(b"MK"), "Europe/Skopje"),
    (CountryId::new(b"ML"), "Africa/Bamako"),
    (CountryId::new(b"MM"), "Asia/Yangon"),
    (CountryId::new(b"MO"), "Asia/Macau"),
    (CountryId::new(b"MP"), "Pacific/Saipan"),
    (CountryId::new(b"MQ"), "America/Martinique"),
    (CountryId::new(b"MR"), "Africa/Nouakchott"),
    (CountryId::new(b"MS"), "America/Montserrat"),
    (CountryId::new(b"MT"), "Europe/Malta"),
    (CountryId::new(b"MU"), "Indian/Mauritius"),
    (CountryId::new(b"MV"), "Indian/Maldives"),
    (CountryId::new(b"MW"), "Africa/Blantyre"),
    (CountryId::new(b"MY"), "Asia/Kuala_Lumpur"),
    (CountryId::new(b"MZ"), "Africa/Maputo"),
    (CountryId::new(b"NA"), "Africa/Windhoek"),
    (CountryId::new(b"NC"), "Pacific/Noumea"),
    (CountryId::new(b"NE"), "Africa/Niamey"),
    (CountryId::new(b"NF"), "Pacific/Norfolk"),
    (CountryId::new(b"NG"), "Africa/Lagos"),
    (CountryId::new(b"NI"), "America/Managua"),
    (CountryId::new(b"NL"), "Europe/Amsterdam"),
    (CountryId::new(b"NO"), "Europe/Oslo"),
    (CountryId::new(b"NP"), "Asia/Kathmandu"),
    (CountryId::new(b"NR"), "Pacific/Nauru"),
    (CountryId::new(b"NU"), "Pacific/Niue"),
    (CountryId::new(b"OM"), "Asia/Muscat"),
    (CountryId::new(b"PA"), "America/Panama"),
    (CountryId::new(b"PE"), "America/Lima"),
    (CountryId::new(b"PH"), "Asia/Manila"),
    (CountryId::new(b"PK"), "Asia/Karachi"),
    (CountryId::new(b"PL"), "Europe/Warsaw"),
    (CountryId::new(b"PM"), "America/Miquelon"),
    (CountryId::new(b"PN"), "Pacific/Pitcairn"),
    (CountryId::new(b"PR"), "America/Puerto_Rico"),
    (CountryId::new(b"PW"), "Pacific/Palau"),
    (CountryId::new(b"PY"), "America/Asuncion"),
    (CountryId::new(b"QA"), "Asia/Qatar"),
    (CountryId::new(b"RE"), "Indian/Reunion"),
    (CountryId::new(b"RO"), "Europe/Bucharest"),
    (CountryId::new(b"RS"), "Europe/Belgrade"),
    (CountryId::new(b"RW"), "Africa/Kigali"),
    (CountryId::new(b"SA"), "Asia/Riyadh"),
    (CountryId::new(b"SB"), "Pacific/Guadalcanal"),
    (CountryId::new(b"SC"), "Indian/Mahe"),
    (CountryId::new(b"SD"), "Africa/Khartoum"),
    (CountryId::new(b"SE"), "Europe/Stockholm"),
    (CountryId::new(b"SG"), "Asia/Singapore"),
    (CountryId::new(b"SH"), "Atlantic/St_Helena"),
    (CountryId::new(b"SI"), "Europe/Ljubljana"),
    (CountryId::new(b"SJ"), "Arctic/Longyearbyen"),
    (CountryId::new(b"SK"), "Europe/Bratislava"),
    (CountryId::new(b"SL"), "Africa/Freetown"),
    (CountryId::new(b"SM"), "Europe/San_Marino"),
    (CountryId::new(b"SN"), "Africa/Dakar"),
    (CountryId::new(b"SO"), "Africa/Mogadishu"),
    (CountryId::new(b"SR"), "America/Paramaribo"),
    (CountryId::new(b"SS"), "Africa/Juba"),
    (CountryId::new(b"ST"), "Africa/Sao_Tome"),
    (CountryId::new(b"SV"), "America/El_Salvador"),
    (CountryId::new(b"SX"), "America/Lower_Princes"),
    (CountryId::new(b"SY"), "Asia/Damascus"),
    (CountryId::new(b"SZ"), "Africa/Mbabane"),
    (CountryId::new(b"TC"), "America/Grand_Turk"),
    (CountryId::new(b"TD"), "Africa/Ndjamena"),
    (CountryId::new(b"TF"), "Indian/Kerguelen"),
    (CountryId::new(b"TG"), "Africa/Lome"),
    (CountryId::new(b"TH"), "Asia/Bangkok"),
    (CountryId::new(b"TJ"), "Asia/Dushanbe"),
    (CountryId::new(b"TK"), "Pacific/Fakaofo"),
    (CountryId::new(b"TL"), "Asia/Dili"),
    (CountryId::new(b"TM"), "Asia/Ashgabat"),
    (CountryId::new(b"TN"), "Africa/Tunis"),
    (CountryId::new(b"TO"), "Pacific/Tongatapu"),
    (CountryId::new(b"TR"), "Europe/Istanbul"),
    (CountryId::new(b"TT"), "America/Port_of_Spain"),
    (CountryId::new(b"TV"), "Pacific/Funafuti"),
    (CountryId::new(b"TW"), "Asia/Taipei"),
    (CountryId::new(b"TZ"), "Africa/Dar_es_Salaam"),
    (CountryId::new(b"UG"), "Africa/Kampala"),
    (CountryId::new(b"UY"), "America/Montevideo"),
    (CountryId::new(b"VA"), "Europe/Vatican"),
    (CountryId::new(b"VC"), "America/St_Vincent"),
    (CountryId::new(b"VE"), "America/Caracas"),
    (CountryId::new(b"VG"), "America/Tortola"),
    (CountryId::new(b"VI"), "America/St_Thomas"),
    (CountryId::new(b"VN"), "Asia/Ho_Chi_Minh"),
    (CountryId::new(b"VU"), "Pacific/Efate"),
    (CountryId::new(b"WF"), "Pacific/Wallis"),
    (CountryId::new(b"WS"), "Pacific/Apia"),
    (CountryId::new(b"YE"), "Asia/Aden"),
    (CountryId::new(b"YT"), "Indian/Mayotte"),
    (CountryId::new(b"ZA"), "Africa/Johannesburg"),
    (CountryId::new(b"ZM"), "Africa/Lusaka"),
    (CountryId::new(b"ZW"), "Africa/Harare"),
];
