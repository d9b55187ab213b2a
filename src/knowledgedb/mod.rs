//! Static, binary-searchable knowledge tables.
//!
//! Every table is a slice sorted ascending by a compact key. Lookups use a
//! lower bound search followed by an exact key check, so a miss never
//! yields a neighbouring record.

pub mod airports;
pub mod alphaid;
pub mod countries;
pub mod stationid;
pub mod stations;
pub mod timezones;

pub use airports::{
    coordinate_for_airport, country_for_airport, iata_code_from_name, iata_codes_from_name,
    is_plausible_distance_for_duration, timezone_for_airport,
};
pub use alphaid::{
    AlphaId, AmtrakStationCode, CountryId, CountryId3, IataCode, UkRailwayStationCode,
    ViaRailStationCode,
};
pub use countries::{
    country_for_id, country_for_phone_number, country_id_for_uic_code,
    country_id_from_iso3166_1_alpha3, incompatible_power_plugs, incompatible_power_sockets,
    Country, DrivingSide, PowerPlugTypes,
};
pub use stationid::{BenerailStationId, FiveAlphaId, Ibnr, SncfStationId, UicStationId, VrStationCode};
pub use stations::TrainStation;
pub use timezones::{
    country_for_coordinate, country_for_timezone, is_plausible_timezone, timezone_for_country,
    timezone_for_location,
};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in metres.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> i32 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    (EARTH_RADIUS_M * c) as i32
}

pub(crate) fn lookup_by<T, K: Ord>(table: &[T], key: K, key_of: impl Fn(&T) -> K) -> Option<&T> {
    debug_assert!(is_strictly_sorted_by(table, &key_of), "knowledge table out of order");
    let idx = table.partition_point(|entry| key_of(entry) < key);
    table.get(idx).filter(|entry| key_of(entry) == key)
}

pub(crate) fn is_strictly_sorted_by<T, K: Ord>(table: &[T], key_of: impl Fn(&T) -> K) -> bool {
    table.windows(2).all(|pair| key_of(&pair[0]) < key_of(&pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        // Berlin Hbf to Hamburg Hbf, roughly 255 km
        let d = distance(52.5251, 13.3694, 53.5530, 10.0067);
        assert!((250_000..260_000).contains(&d), "{d}");
        assert_eq!(distance(48.0, 11.0, 48.0, 11.0), 0);
    }

    #[test]
    fn test_lookup_exact_match_only() {
        let table = [(1, 'a'), (3, 'b'), (5, 'c')];
        assert_eq!(lookup_by(&table, 3, |(k, _)| *k), Some(&(3, 'b')));
        assert_eq!(lookup_by(&table, 4, |(k, _)| *k), None);
        assert_eq!(lookup_by(&table, 6, |(k, _)| *k), None);
        assert_eq!(lookup_by(&table, 0, |(k, _)| *k), None);
        assert!(is_strictly_sorted_by(&table, |(k, _)| *k));
        assert!(!is_strictly_sorted_by(&[(1, 'a'), (1, 'b')], |(k, _)| *k));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "knowledge table out of order")]
    fn test_lookup_rejects_unsorted_table() {
        let _ = lookup_by(&[(3, 'a'), (1, 'b')], 1, |(k, _)| *k);
    }
}
