//! Train station lookups by national identifier scheme.

use itinerary_core::GeoCoordinates;

use super::alphaid::{AmtrakStationCode, CountryId, IataCode, UkRailwayStationCode, ViaRailStationCode};
use super::lookup_by;
use super::stationid::{BenerailStationId, Ibnr, SncfStationId, UicStationId, VrStationCode};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrainStation {
    pub coordinate: GeoCoordinates,
    pub country: CountryId,
}

impl TrainStation {
    const fn new(latitude: f64, longitude: f64, country: &[u8; 2]) -> Self {
        Self {
            coordinate: GeoCoordinates::new(latitude, longitude),
            country: CountryId::new(country),
        }
    }
}

fn station_in<K: Ord + Copy>(table: &[(K, TrainStation)], key: K) -> TrainStation {
    lookup_by(table, key, |(k, _)| *k).map_or_else(TrainStation::default, |(_, station)| *station)
}

pub fn station_for_ibnr(ibnr: Ibnr) -> TrainStation {
    station_in(IBNR_TABLE, ibnr)
}

pub fn station_for_uic(uic: UicStationId) -> TrainStation {
    station_in(UIC_TABLE, uic)
}

pub fn station_for_sncf_station_id(id: SncfStationId) -> TrainStation {
    station_in(SNCF_TABLE, id)
}

pub fn station_for_benerail_id(id: BenerailStationId) -> TrainStation {
    station_in(BENERAIL_TABLE, id)
}

pub fn station_for_vr_station_code(code: VrStationCode) -> TrainStation {
    station_in(VR_TABLE, code)
}

pub fn station_for_iata_code(code: IataCode) -> TrainStation {
    station_in(IATA_STATION_TABLE, code)
}

pub fn station_for_amtrak_station_code(code: AmtrakStationCode) -> TrainStation {
    station_in(AMTRAK_TABLE, code)
}

pub fn station_for_via_rail_station_code(code: ViaRailStationCode) -> TrainStation {
    station_in(VIA_RAIL_TABLE, code)
}

pub fn station_for_uk_railway_station_code(code: UkRailwayStationCode) -> TrainStation {
    station_in(UK_RAILWAY_TABLE, code)
}

const fn ibnr(id: u32, lat: f64, lon: f64, country: &[u8; 2]) -> (UicStationId, TrainStation) {
    (UicStationId::new(id), TrainStation::new(lat, lon, country))
}

const fn five(id: &[u8; 5], lat: f64, lon: f64, country: &[u8; 2]) -> (SncfStationId, TrainStation) {
    (SncfStationId::new(id), TrainStation::new(lat, lon, country))
}

const fn three(id: &[u8; 3], lat: f64, lon: f64, country: &[u8; 2]) -> (IataCode, TrainStation) {
    (IataCode::new(id), TrainStation::new(lat, lon, country))
}

static IBNR_TABLE: &[(Ibnr, TrainStation)] = &[
    ibnr(5100065, 52.2288, 21.0032, b"PL"), // Warszawa Centralna
    ibnr(5400014, 50.0831, 14.4353, b"CZ"), // Praha hl.n.
    ibnr(7400002, 59.3303, 18.0583, b"SE"), // Stockholm Central
    ibnr(8000085, 51.2198, 6.7943, b"DE"),  // Düsseldorf Hbf
    ibnr(8000096, 48.7840, 9.1829, b"DE"),  // Stuttgart Hbf
    ibnr(8000105, 50.1071, 8.6636, b"DE"),  // Frankfurt (Main) Hbf
    ibnr(8000152, 52.3767, 9.7410, b"DE"),  // Hannover Hbf
    ibnr(8000207, 50.9430, 6.9589, b"DE"),  // Köln Hbf
    ibnr(8000261, 48.1402, 11.5600, b"DE"), // München Hbf
    ibnr(8000284, 49.4456, 11.0825, b"DE"), // Nürnberg Hbf
    ibnr(8002549, 53.5530, 10.0067, b"DE"), // Hamburg Hbf
    ibnr(8010205, 51.3455, 12.3821, b"DE"), // Leipzig Hbf
    ibnr(8011102, 52.5486, 13.3885, b"DE"), // Berlin Gesundbrunnen
    ibnr(8011160, 52.5251, 13.3694, b"DE"), // Berlin Hbf
    ibnr(8103000, 48.1852, 16.3760, b"AT"), // Wien Hbf
    ibnr(8400058, 52.3789, 4.9003, b"NL"),  // Amsterdam Centraal
    ibnr(8400530, 51.9249, 4.4690, b"NL"),  // Rotterdam Centraal
    ibnr(8500010, 47.5474, 7.5896, b"CH"),  // Basel SBB
    ibnr(8503000, 47.3782, 8.5402, b"CH"),  // Zürich HB
    ibnr(8600626, 55.6726, 12.5648, b"DK"), // København H
];

static UIC_TABLE: &[(UicStationId, TrainStation)] = &[
    ibnr(1000001, 60.1718, 24.9414, b"FI"), // Helsinki
    ibnr(7015400, 51.5317, -0.1263, b"GB"), // London St Pancras International
    ibnr(7160000, 40.4066, -3.6892, b"ES"), // Madrid Puerta de Atocha
    ibnr(8301700, 45.4864, 9.2048, b"IT"),  // Milano Centrale
    ibnr(8308409, 41.9010, 12.5016, b"IT"), // Roma Termini
    ibnr(8503000, 47.3782, 8.5402, b"CH"),  // Zürich HB
    ibnr(8507000, 46.9490, 7.4391, b"CH"),  // Bern
    ibnr(8711300, 48.8768, 2.3590, b"FR"),  // Paris Est
    ibnr(8727100, 48.8809, 2.3553, b"FR"),  // Paris Nord
    ibnr(8768600, 48.8443, 2.3743, b"FR"),  // Paris Gare de Lyon
    ibnr(8775100, 43.3027, 5.3806, b"FR"),  // Marseille Saint-Charles
    ibnr(8814001, 50.8357, 4.3365, b"BE"),  // Bruxelles-Midi
    ibnr(8821006, 51.2172, 4.4211, b"BE"),  // Antwerpen-Centraal
];

static SNCF_TABLE: &[(SncfStationId, TrainStation)] = &[
    five(b"BEBMI", 50.8357, 4.3365, b"BE"),  // Bruxelles-Midi
    five(b"CHGVA", 46.2102, 6.1424, b"CH"),  // Genève
    five(b"FRBOJ", 44.8258, -0.5564, b"FR"), // Bordeaux Saint-Jean
    five(b"FRLLE", 50.6392, 3.0756, b"FR"),  // Lille Europe
    five(b"FRLPD", 45.7606, 4.8594, b"FR"),  // Lyon Part-Dieu
    five(b"FRMSC", 43.3027, 5.3806, b"FR"),  // Marseille Saint-Charles
    five(b"FRNTE", 47.2173, -1.5422, b"FR"), // Nantes
    five(b"FRPLY", 48.8443, 2.3743, b"FR"),  // Paris Gare de Lyon
    five(b"FRPMO", 48.8412, 2.3206, b"FR"),  // Paris Montparnasse
    five(b"FRPNO", 48.8809, 2.3553, b"FR"),  // Paris Nord
    five(b"FRPST", 48.8768, 2.3590, b"FR"),  // Paris Est
    five(b"FRSXB", 48.5850, 7.7346, b"FR"),  // Strasbourg
];

static BENERAIL_TABLE: &[(BenerailStationId, TrainStation)] = &[
    five(b"BEABC", 51.2172, 4.4211, b"BE"),  // Antwerpen-Centraal
    five(b"BEBMI", 50.8357, 4.3365, b"BE"),  // Bruxelles-Midi
    five(b"BELGG", 50.6245, 5.5667, b"BE"),  // Liège-Guillemins
    five(b"DEKOH", 50.9430, 6.9589, b"DE"),  // Köln Hbf
    five(b"FRPNO", 48.8809, 2.3553, b"FR"),  // Paris Nord
    five(b"GBSPX", 51.5317, -0.1263, b"GB"), // London St Pancras International
    five(b"NLASC", 52.3789, 4.9003, b"NL"),  // Amsterdam Centraal
    five(b"NLRTD", 51.9249, 4.4690, b"NL"),  // Rotterdam Centraal
];

static VR_TABLE: &[(VrStationCode, TrainStation)] = &[
    (VrStationCode::new("HKI"), TrainStation::new(60.1718, 24.9414, b"FI")), // Helsinki
    (VrStationCode::new("JY"), TrainStation::new(62.2417, 25.7536, b"FI")),  // Jyväskylä
    (VrStationCode::new("KV"), TrainStation::new(60.8669, 26.7049, b"FI")),  // Kouvola
    (VrStationCode::new("LH"), TrainStation::new(60.9770, 25.6575, b"FI")),  // Lahti
    (VrStationCode::new("OL"), TrainStation::new(65.0111, 25.4838, b"FI")),  // Oulu
    (VrStationCode::new("PSL"), TrainStation::new(60.1988, 24.9335, b"FI")), // Pasila
    (VrStationCode::new("RI"), TrainStation::new(60.7371, 24.7728, b"FI")),  // Riihimäki
    (VrStationCode::new("TKU"), TrainStation::new(60.4537, 22.2530, b"FI")), // Turku
    (VrStationCode::new("TPE"), TrainStation::new(61.4985, 23.7731, b"FI")), // Tampere
    (VrStationCode::new("ÄHT"), TrainStation::new(62.5543, 24.0649, b"FI")), // Ähtäri
];

static IATA_STATION_TABLE: &[(IataCode, TrainStation)] = &[
    three(b"QKL", 50.9430, 6.9589, b"DE"),  // Köln Hbf
    three(b"QPP", 52.5251, 13.3694, b"DE"), // Berlin Hbf
    three(b"XHJ", 50.7678, 6.0915, b"DE"),  // Aachen Hbf
    three(b"XPG", 48.8809, 2.3553, b"FR"),  // Paris Nord
    three(b"ZLP", 47.3782, 8.5402, b"CH"),  // Zürich HB
    three(b"ZMB", 53.5530, 10.0067, b"DE"), // Hamburg Hbf
    three(b"ZWS", 48.7840, 9.1829, b"DE"),  // Stuttgart Hbf
    three(b"ZYA", 52.3789, 4.9003, b"NL"),  // Amsterdam Centraal
    three(b"ZYR", 50.8357, 4.3365, b"BE"),  // Bruxelles-Midi
];

static AMTRAK_TABLE: &[(AmtrakStationCode, TrainStation)] = &[
    three(b"BOS", 42.3522, -71.0552, b"US"),  // Boston South Station
    three(b"CHI", 41.8789, -87.6403, b"US"),  // Chicago Union Station
    three(b"EMY", 37.8406, -122.2918, b"US"), // Emeryville
    three(b"LAX", 34.0559, -118.2366, b"US"), // Los Angeles Union Station
    three(b"NYP", 40.7506, -73.9935, b"US"),  // New York Penn Station
    three(b"PDX", 45.5289, -122.6768, b"US"), // Portland Union Station
    three(b"PHL", 39.9556, -75.1820, b"US"),  // Philadelphia 30th Street
    three(b"SAC", 38.5840, -121.5007, b"US"), // Sacramento Valley
    three(b"SEA", 47.5984, -122.3301, b"US"), // Seattle King Street
    three(b"WAS", 38.8973, -77.0063, b"US"),  // Washington Union Station
];

static VIA_RAIL_TABLE: &[(ViaRailStationCode, TrainStation)] = &[
    (ViaRailStationCode::new(b"MTRL"), TrainStation::new(45.4999, -73.5663, b"CA")), // Montréal
    (ViaRailStationCode::new(b"OTTW"), TrainStation::new(45.4166, -75.6516, b"CA")), // Ottawa
    (ViaRailStationCode::new(b"QBEC"), TrainStation::new(46.8170, -71.2136, b"CA")), // Québec
    (ViaRailStationCode::new(b"TRTO"), TrainStation::new(43.6453, -79.3806, b"CA")), // Toronto Union
    (ViaRailStationCode::new(b"VCVR"), TrainStation::new(49.2733, -123.0979, b"CA")), // Vancouver Pacific Central
    (ViaRailStationCode::new(b"WINP"), TrainStation::new(49.8888, -97.1349, b"CA")), // Winnipeg Union
];

static UK_RAILWAY_TABLE: &[(UkRailwayStationCode, TrainStation)] = &[
    three(b"BHM", 52.4778, -1.8990, b"GB"), // Birmingham New Street
    three(b"CDF", 51.4761, -3.1792, b"GB"), // Cardiff Central
    three(b"EDB", 55.9521, -3.1896, b"GB"), // Edinburgh Waverley
    three(b"EUS", 51.5282, -0.1337, b"GB"), // London Euston
    three(b"GLC", 55.8590, -4.2581, b"GB"), // Glasgow Central
    three(b"KGX", 51.5320, -0.1233, b"GB"), // London King's Cross
    three(b"LIV", 53.4075, -2.9778, b"GB"), // Liverpool Lime Street
    three(b"MAN", 53.4774, -2.2309, b"GB"), // Manchester Piccadilly
    three(b"PAD", 51.5154, -0.1755, b"GB"), // London Paddington
    three(b"STP", 51.5317, -0.1263, b"GB"), // London St Pancras International
    three(b"YRK", 53.9583, -1.0931, b"GB"), // York
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledgedb::is_strictly_sorted_by;

    #[test]
    fn test_tables_are_sorted() {
        assert!(is_strictly_sorted_by(IBNR_TABLE, |(k, _)| *k));
        assert!(is_strictly_sorted_by(UIC_TABLE, |(k, _)| *k));
        assert!(is_strictly_sorted_by(SNCF_TABLE, |(k, _)| *k));
        assert!(is_strictly_sorted_by(BENERAIL_TABLE, |(k, _)| *k));
        assert!(is_strictly_sorted_by(VR_TABLE, |(k, _)| *k));
        assert!(is_strictly_sorted_by(IATA_STATION_TABLE, |(k, _)| *k));
        assert!(is_strictly_sorted_by(AMTRAK_TABLE, |(k, _)| *k));
        assert!(is_strictly_sorted_by(VIA_RAIL_TABLE, |(k, _)| *k));
        assert!(is_strictly_sorted_by(UK_RAILWAY_TABLE, |(k, _)| *k));
    }

    #[test]
    fn test_every_key_resolves_to_its_own_record() {
        for (key, station) in IBNR_TABLE {
            assert_eq!(station_for_ibnr(*key), *station);
        }
        for (key, station) in VR_TABLE {
            assert!(key.is_valid());
            assert_eq!(station_for_vr_station_code(*key), *station);
        }
        for (key, station) in VIA_RAIL_TABLE {
            assert_eq!(station_for_via_rail_station_code(*key), *station);
        }
    }

    #[test]
    fn test_lookup_miss_is_invalid_not_neighbour() {
        // between Köln Hbf and München Hbf
        let miss = station_for_ibnr(Ibnr::new(8000208));
        assert!(!miss.coordinate.is_valid());
        assert!(!miss.country.is_valid());

        let past_end = station_for_uk_railway_station_code(UkRailwayStationCode::new(b"ZZZ"));
        assert!(!past_end.country.is_valid());

        let berlin = station_for_ibnr(Ibnr::new(80111601));
        assert_eq!(berlin.country, CountryId::new(b"DE"));
    }
}
