//! Country facts: driving side, power plugs, UIC and ISO code mappings.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use super::alphaid::{CountryId, CountryId3};
use super::lookup_by;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrivingSide {
    #[default]
    Unknown,
    Left,
    Right,
}

/// Set of IEC power plug/socket types A to N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PowerPlugTypes(u16);

pub const NO_PLUGS: u16 = 0;
pub const TYPE_A: u16 = 1 << 0;
pub const TYPE_B: u16 = 1 << 1;
pub const TYPE_C: u16 = 1 << 2;
pub const TYPE_D: u16 = 1 << 3;
pub const TYPE_E: u16 = 1 << 4;
pub const TYPE_F: u16 = 1 << 5;
pub const TYPE_G: u16 = 1 << 6;
pub const TYPE_H: u16 = 1 << 7;
pub const TYPE_I: u16 = 1 << 8;
pub const TYPE_J: u16 = 1 << 9;
pub const TYPE_K: u16 = 1 << 10;
pub const TYPE_L: u16 = 1 << 11;
pub const TYPE_M: u16 = 1 << 12;
pub const TYPE_N: u16 = 1 << 13;

impl PowerPlugTypes {
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: PowerPlugTypes) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PowerPlugTypes {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PowerPlugTypes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PowerPlugTypes {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for PowerPlugTypes {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0 & 0x3FFF)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Country {
    pub id: CountryId,
    pub driving_side: DrivingSide,
    pub power_plugs: PowerPlugTypes,
}

impl Country {
    const fn new(id: &[u8; 2], driving_side: DrivingSide, plugs: u16) -> Self {
        Self {
            id: CountryId::new(id),
            driving_side,
            power_plugs: PowerPlugTypes::from_bits(plugs),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
    }
}

/// Looks up a country, returning an invalid record for unknown ids.
pub fn country_for_id(id: CountryId) -> Country {
    lookup_by(COUNTRY_TABLE, id, |c| c.id)
        .copied()
        .unwrap_or_default()
}

pub fn countries() -> &'static [Country] {
    COUNTRY_TABLE
}

/// Maps a two-digit UIC country code to its ISO 3166-1 alpha-2 id.
pub fn country_id_for_uic_code(uic_country_code: u16) -> CountryId {
    lookup_by(UIC_COUNTRY_CODE_TABLE, uic_country_code, |(code, _)| *code)
        .map_or(CountryId::INVALID, |(_, id)| *id)
}

pub fn country_id_from_iso3166_1_alpha3(iso3: CountryId3) -> CountryId {
    lookup_by(ISO_COUNTRY_CODE_TABLE, iso3, |(code, _)| *code)
        .map_or(CountryId::INVALID, |(_, id)| *id)
}

/// Country of an international phone number (`+49 ...`, `0049 ...`).
///
/// Calling codes shared by several countries (+1, +7) are not resolved.
pub fn country_for_phone_number(phone: &str) -> CountryId {
    let trimmed = phone.trim_start();
    let rest = match trimmed.strip_prefix('+').or_else(|| trimmed.strip_prefix("00")) {
        Some(rest) => rest,
        None => return CountryId::INVALID,
    };
    let digits: String = rest
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .take_while(|c| c.is_ascii_digit())
        .take(3)
        .collect();
    (1..=digits.len())
        .rev()
        .filter_map(|len| digits[..len].parse::<u16>().ok())
        .find_map(|code| lookup_by(CALLING_CODE_TABLE, code, |(c, _)| *c).map(|(_, id)| *id))
        .unwrap_or(CountryId::INVALID)
}

const POWER_PLUG_COMPAT_MAP: [(u16, u16); 14] = [
    (TYPE_A, TYPE_A | TYPE_B),
    (TYPE_B, TYPE_B),
    (TYPE_C, TYPE_C | TYPE_E | TYPE_F | TYPE_H | TYPE_J | TYPE_K | TYPE_L | TYPE_N),
    (TYPE_D, TYPE_D),
    // E and F are not strictly compatible, but are in practice
    (TYPE_E, TYPE_E | TYPE_F | TYPE_K),
    (TYPE_F, TYPE_E | TYPE_F | TYPE_K),
    (TYPE_G, TYPE_G),
    (TYPE_H, TYPE_H),
    (TYPE_I, TYPE_I),
    (TYPE_J, TYPE_J),
    (TYPE_K, TYPE_K),
    (TYPE_L, TYPE_L),
    (TYPE_M, TYPE_M),
    (TYPE_N, TYPE_N),
];

/// Plugs from `plugs` that fit none of `sockets`.
pub fn incompatible_power_plugs(plugs: PowerPlugTypes, sockets: PowerPlugTypes) -> PowerPlugTypes {
    let mut fail = PowerPlugTypes::default();
    for (plug, compatible) in POWER_PLUG_COMPAT_MAP {
        if plugs.0 & plug == 0 {
            continue;
        }
        if compatible & sockets.0 == 0 {
            fail.0 |= plug;
        }
    }
    fail
}

/// Sockets from `sockets` that not every one of `plugs` can use.
pub fn incompatible_power_sockets(plugs: PowerPlugTypes, sockets: PowerPlugTypes) -> PowerPlugTypes {
    let mut fail = 0u16;
    for (plug, compatible) in POWER_PLUG_COMPAT_MAP {
        if plugs.0 & plug == 0 {
            continue;
        }
        if compatible & !sockets.0 != 0 {
            fail |= (compatible ^ sockets.0) & sockets.0;
        }
    }
    PowerPlugTypes(fail & !plugs.0)
}

static COUNTRY_TABLE: &[Country] = &[
    Country::new(b"AD", DrivingSide::Right, TYPE_C | TYPE_F), // Andorra
    Country::new(b"AE", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_G), // United Arab Emirates
    Country::new(b"AF", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_F), // Afghanistan
    Country::new(b"AG", DrivingSide::Left, TYPE_A | TYPE_B), // Antigua and Barbuda
    Country::new(b"AL", DrivingSide::Right, TYPE_C | TYPE_F), // Albania
    Country::new(b"AM", DrivingSide::Right, TYPE_C | TYPE_F), // Armenia
    Country::new(b"AO", DrivingSide::Right, TYPE_C), // Angola
    Country::new(b"AR", DrivingSide::Right, TYPE_C | TYPE_I), // Argentina
    Country::new(b"AT", DrivingSide::Right, TYPE_C | TYPE_F), // Austria
    Country::new(b"AU", DrivingSide::Left, TYPE_I), // Australia
    Country::new(b"AW", DrivingSide::Right, TYPE_A | TYPE_B | TYPE_F), // Aruba
    Country::new(b"AZ", DrivingSide::Right, TYPE_C | TYPE_F), // Azerbaijan
    Country::new(b"BA", DrivingSide::Right, TYPE_C | TYPE_F), // Bosnia and Herzegovina
    Country::new(b"BB", DrivingSide::Left, TYPE_A | TYPE_B), // Barbados
    Country::new(b"BD", DrivingSide::Left, TYPE_A | TYPE_C | TYPE_D | TYPE_G | TYPE_K), // Bangladesh
    Country::new(b"BE", DrivingSide::Right, TYPE_C | TYPE_E), // Belgium
    Country::new(b"BF", DrivingSide::Right, TYPE_C | TYPE_E), // Burkina Faso
    Country::new(b"BG", DrivingSide::Right, TYPE_C | TYPE_F), // Bulgaria
    Country::new(b"BH", DrivingSide::Right, TYPE_G), // Bahrain
    Country::new(b"BI", DrivingSide::Right, TYPE_C | TYPE_E), // Burundi
    Country::new(b"BJ", DrivingSide::Right, TYPE_C | TYPE_E), // Benin
    Country::new(b"BN", DrivingSide::Left, TYPE_G), // Brunei
    Country::new(b"BO", DrivingSide::Right, TYPE_A | TYPE_C), // Bolivia
    Country::new(b"BR", DrivingSide::Right, TYPE_C | TYPE_N), // Brazil
    Country::new(b"BS", DrivingSide::Left, TYPE_A | TYPE_B), // The Bahamas
    Country::new(b"BT", DrivingSide::Left, TYPE_C | TYPE_D | TYPE_F | TYPE_G | TYPE_M), // Bhutan
    Country::new(b"BU", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_F | TYPE_G), // Myanmar
    Country::new(b"BW", DrivingSide::Left, TYPE_D | TYPE_G | TYPE_M), // Botswana
    Country::new(b"BY", DrivingSide::Right, TYPE_C | TYPE_F), // Belarus
    Country::new(b"BZ", DrivingSide::Right, TYPE_A | TYPE_B | TYPE_G), // Belize
    Country::new(b"CA", DrivingSide::Right, TYPE_A | TYPE_B), // Canada
    Country::new(b"CD", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_E), // Democratic Republic of the Congo
    Country::new(b"CF", DrivingSide::Right, TYPE_C | TYPE_E), // Central African Republic
    Country::new(b"CG", DrivingSide::Right, TYPE_C | TYPE_E), // Republic of the Congo
    Country::new(b"CH", DrivingSide::Right, TYPE_C | TYPE_J), // Switzerland
    Country::new(b"CI", DrivingSide::Right, TYPE_C | TYPE_E), // Ivory Coast
    Country::new(b"CK", DrivingSide::Left, TYPE_I), // Cook Islands
    Country::new(b"CL", DrivingSide::Right, TYPE_C | TYPE_L), // Chile
    Country::new(b"CM", DrivingSide::Right, TYPE_C | TYPE_E), // Cameroon
    Country::new(b"CN", DrivingSide::Right, TYPE_A | TYPE_C | TYPE_I), // People's Republic of China
    Country::new(b"CO", DrivingSide::Right, TYPE_A | TYPE_B), // Colombia
    Country::new(b"CR", DrivingSide::Right, TYPE_A | TYPE_B), // Costa Rica
    Country::new(b"CU", DrivingSide::Right, TYPE_A | TYPE_B), // Cuba
    Country::new(b"CV", DrivingSide::Right, TYPE_C | TYPE_F), // Cape Verde
    Country::new(b"CW", DrivingSide::Right, TYPE_A | TYPE_B), // Curaçao
    Country::new(b"CY", DrivingSide::Left, TYPE_G), // Cyprus
    Country::new(b"CZ", DrivingSide::Right, TYPE_C | TYPE_E), // Czech Republic
    Country::new(b"DE", DrivingSide::Right, TYPE_C | TYPE_F), // Germany
    Country::new(b"DJ", DrivingSide::Right, TYPE_C | TYPE_E), // Djibouti
    Country::new(b"DK", DrivingSide::Right, TYPE_C | TYPE_E | TYPE_F | TYPE_K), // Denmark
    Country::new(b"DM", DrivingSide::Left, TYPE_D | TYPE_G), // Dominica
    Country::new(b"DO", DrivingSide::Right, TYPE_A | TYPE_B), // Dominican Republic
    Country::new(b"DZ", DrivingSide::Right, TYPE_C | TYPE_E | TYPE_F), // Algeria
    Country::new(b"EC", DrivingSide::Right, TYPE_A | TYPE_B), // Ecuador
    Country::new(b"EE", DrivingSide::Right, TYPE_C | TYPE_F), // Estonia
    Country::new(b"EG", DrivingSide::Right, TYPE_C | TYPE_F), // Egypt
    Country::new(b"EH", DrivingSide::Unknown, NO_PLUGS), // Sahrawi Arab Democratic Republic
    Country::new(b"ER", DrivingSide::Right, TYPE_C | TYPE_L), // Eritrea
    Country::new(b"ES", DrivingSide::Right, TYPE_C | TYPE_F), // Spain
    Country::new(b"ET", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_E | TYPE_F | TYPE_J | TYPE_L), // Ethiopia
    Country::new(b"FI", DrivingSide::Right, TYPE_C | TYPE_F), // Finland
    Country::new(b"FJ", DrivingSide::Left, TYPE_I), // Fiji
    Country::new(b"FM", DrivingSide::Right, TYPE_A | TYPE_B), // Federated States of Micronesia
    Country::new(b"FO", DrivingSide::Right, TYPE_C | TYPE_E | TYPE_F | TYPE_K), // Faroe Islands
    Country::new(b"FR", DrivingSide::Right, TYPE_C | TYPE_E), // France
    Country::new(b"GA", DrivingSide::Right, TYPE_C), // Gabon
    Country::new(b"GB", DrivingSide::Left, TYPE_G), // United Kingdom
    Country::new(b"GD", DrivingSide::Left, TYPE_G), // Grenada
    Country::new(b"GE", DrivingSide::Right, TYPE_C | TYPE_F), // Georgia
    Country::new(b"GH", DrivingSide::Right, TYPE_D | TYPE_G), // Ghana
    Country::new(b"GI", DrivingSide::Right, TYPE_C | TYPE_G), // Gibraltar
    Country::new(b"GL", DrivingSide::Right, TYPE_C | TYPE_E | TYPE_F | TYPE_K), // Greenland
    Country::new(b"GM", DrivingSide::Right, TYPE_G), // The Gambia
    Country::new(b"GN", DrivingSide::Right, TYPE_C | TYPE_F | TYPE_K), // Guinea
    Country::new(b"GQ", DrivingSide::Right, TYPE_C | TYPE_E), // Equatorial Guinea
    Country::new(b"GR", DrivingSide::Right, TYPE_C | TYPE_F), // Greece
    Country::new(b"GT", DrivingSide::Right, TYPE_A | TYPE_B), // Guatemala
    Country::new(b"GW", DrivingSide::Right, TYPE_C), // Guinea-Bissau
    Country::new(b"GY", DrivingSide::Left, TYPE_A | TYPE_B | TYPE_D | TYPE_G), // Guyana
    Country::new(b"HN", DrivingSide::Right, TYPE_A | TYPE_B), // Honduras
    Country::new(b"HR", DrivingSide::Right, TYPE_C | TYPE_F), // Croatia
    Country::new(b"HT", DrivingSide::Right, TYPE_A | TYPE_B), // Haiti
    Country::new(b"HU", DrivingSide::Right, TYPE_C | TYPE_F), // Hungary
    Country::new(b"ID", DrivingSide::Left, TYPE_C | TYPE_F), // Indonesia
    Country::new(b"IE", DrivingSide::Left, TYPE_G), // Republic of Ireland
    Country::new(b"IL", DrivingSide::Right, TYPE_C | TYPE_H | TYPE_M), // Israel
    Country::new(b"IN", DrivingSide::Left, TYPE_C | TYPE_D | TYPE_M), // India
    Country::new(b"IQ", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_G), // Iraq
    Country::new(b"IR", DrivingSide::Right, TYPE_C | TYPE_F), // Iran
    Country::new(b"IS", DrivingSide::Right, TYPE_C | TYPE_F), // Iceland
    Country::new(b"IT", DrivingSide::Right, TYPE_C | TYPE_F | TYPE_L), // Italy
    Country::new(b"JM", DrivingSide::Left, TYPE_A | TYPE_B), // Jamaica
    Country::new(b"JO", DrivingSide::Right, TYPE_B | TYPE_C | TYPE_D | TYPE_F | TYPE_G | TYPE_J), // Jordan
    Country::new(b"JP", DrivingSide::Left, TYPE_A | TYPE_B), // Japan
    Country::new(b"KE", DrivingSide::Left, TYPE_G), // Kenya
    Country::new(b"KG", DrivingSide::Right, TYPE_C | TYPE_F), // Kyrgyzstan
    Country::new(b"KH", DrivingSide::Right, TYPE_A | TYPE_C | TYPE_G), // Cambodia
    Country::new(b"KI", DrivingSide::Left, TYPE_I), // Kiribati
    Country::new(b"KM", DrivingSide::Right, TYPE_C | TYPE_E), // Comoros
    Country::new(b"KN", DrivingSide::Left, TYPE_A | TYPE_B | TYPE_D | TYPE_G), // Saint Kitts and Nevis
    Country::new(b"KP", DrivingSide::Right, TYPE_A | TYPE_C | TYPE_F), // North Korea
    Country::new(b"KR", DrivingSide::Right, TYPE_C | TYPE_F), // South Korea
    Country::new(b"KW", DrivingSide::Right, TYPE_C | TYPE_G), // Kuwait
    Country::new(b"KZ", DrivingSide::Right, TYPE_C | TYPE_F), // Kazakhstan
    Country::new(b"LA", DrivingSide::Right, TYPE_A | TYPE_B | TYPE_C | TYPE_E | TYPE_F), // Laos
    Country::new(b"LB", DrivingSide::Right, TYPE_A | TYPE_B | TYPE_C | TYPE_D | TYPE_G), // Lebanon
    Country::new(b"LC", DrivingSide::Left, TYPE_G), // Saint Lucia
    Country::new(b"LI", DrivingSide::Right, TYPE_C | TYPE_J), // Liechtenstein
    Country::new(b"LK", DrivingSide::Left, TYPE_D | TYPE_G | TYPE_M), // Sri Lanka
    Country::new(b"LR", DrivingSide::Right, TYPE_A | TYPE_B | TYPE_C | TYPE_E | TYPE_F), // Liberia
    Country::new(b"LS", DrivingSide::Left, TYPE_M), // Lesotho
    Country::new(b"LT", DrivingSide::Right, TYPE_C | TYPE_F), // Lithuania
    Country::new(b"LU", DrivingSide::Right, TYPE_C | TYPE_F), // Luxembourg
    Country::new(b"LV", DrivingSide::Right, TYPE_C | TYPE_F), // Latvia
    Country::new(b"LY", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_F | TYPE_L), // Libya
    Country::new(b"MA", DrivingSide::Right, TYPE_C | TYPE_E), // Morocco
    Country::new(b"MC", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_E | TYPE_F), // Monaco
    Country::new(b"MD", DrivingSide::Right, TYPE_C | TYPE_F), // Moldova
    Country::new(b"ME", DrivingSide::Right, TYPE_C | TYPE_F), // Montenegro
    Country::new(b"MG", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_E | TYPE_J | TYPE_K), // Madagascar
    Country::new(b"MH", DrivingSide::Right, NO_PLUGS), // Marshall Islands
    Country::new(b"MK", DrivingSide::Right, TYPE_C | TYPE_F), // North Macedonia
    Country::new(b"ML", DrivingSide::Right, TYPE_C | TYPE_E), // Mali
    Country::new(b"MM", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_F | TYPE_G), // Myanmar
    Country::new(b"MN", DrivingSide::Right, TYPE_C | TYPE_E), // Mongolia
    Country::new(b"MP", DrivingSide::Unknown, NO_PLUGS), // Northern Mariana Islands
    Country::new(b"MR", DrivingSide::Right, TYPE_C), // Mauritania
    Country::new(b"MT", DrivingSide::Left, TYPE_G), // Malta
    Country::new(b"MU", DrivingSide::Left, TYPE_C | TYPE_G), // Mauritius
    Country::new(b"MV", DrivingSide::Left, TYPE_A | TYPE_C | TYPE_D | TYPE_G | TYPE_J | TYPE_K | TYPE_L), // Maldives
    Country::new(b"MW", DrivingSide::Left, TYPE_G), // Malawi
    Country::new(b"MX", DrivingSide::Right, TYPE_A | TYPE_B), // Mexico
    Country::new(b"MY", DrivingSide::Left, TYPE_G), // Malaysia
    Country::new(b"MZ", DrivingSide::Left, TYPE_C | TYPE_F | TYPE_M), // Mozambique
    Country::new(b"NA", DrivingSide::Left, TYPE_D | TYPE_M), // Namibia
    Country::new(b"NE", DrivingSide::Right, TYPE_A | TYPE_B | TYPE_C | TYPE_D | TYPE_E | TYPE_F), // Niger
    Country::new(b"NG", DrivingSide::Right, TYPE_G | TYPE_M), // Nigeria
    Country::new(b"NI", DrivingSide::Right, TYPE_A | TYPE_B), // Nicaragua
    Country::new(b"NL", DrivingSide::Right, TYPE_C | TYPE_F), // Netherlands
    Country::new(b"NO", DrivingSide::Right, TYPE_C | TYPE_F), // Norway
    Country::new(b"NP", DrivingSide::Left, TYPE_C | TYPE_D | TYPE_M), // Nepal
    Country::new(b"NR", DrivingSide::Left, TYPE_I), // Nauru
    Country::new(b"NU", DrivingSide::Left, TYPE_I), // Niue
    Country::new(b"NZ", DrivingSide::Left, TYPE_I), // New Zealand
    Country::new(b"OM", DrivingSide::Right, TYPE_C | TYPE_G), // Oman
    Country::new(b"PA", DrivingSide::Right, TYPE_A | TYPE_B), // Panama
    Country::new(b"PE", DrivingSide::Right, TYPE_A | TYPE_B | TYPE_C), // Peru
    Country::new(b"PG", DrivingSide::Left, TYPE_I), // Papua New Guinea
    Country::new(b"PH", DrivingSide::Right, TYPE_A | TYPE_B | TYPE_C), // Philippines
    Country::new(b"PK", DrivingSide::Left, TYPE_C | TYPE_D | TYPE_G | TYPE_M), // Pakistan
    Country::new(b"PL", DrivingSide::Right, TYPE_C | TYPE_E), // Poland
    Country::new(b"PS", DrivingSide::Unknown, NO_PLUGS), // State of Palestine
    Country::new(b"PT", DrivingSide::Right, TYPE_C | TYPE_F), // Portugal
    Country::new(b"PW", DrivingSide::Right, TYPE_A | TYPE_B), // Palau
    Country::new(b"PY", DrivingSide::Right, TYPE_C), // Paraguay
    Country::new(b"QA", DrivingSide::Right, TYPE_D | TYPE_G), // Qatar
    Country::new(b"RO", DrivingSide::Right, TYPE_C | TYPE_F), // Romania
    Country::new(b"RS", DrivingSide::Right, TYPE_C | TYPE_F), // Serbia
    Country::new(b"RU", DrivingSide::Right, TYPE_C | TYPE_F), // Russia
    Country::new(b"RW", DrivingSide::Right, TYPE_C | TYPE_J), // Rwanda
    Country::new(b"SA", DrivingSide::Right, TYPE_G), // Saudi Arabia
    Country::new(b"SB", DrivingSide::Left, TYPE_G | TYPE_I), // Solomon Islands
    Country::new(b"SC", DrivingSide::Left, TYPE_G), // Seychelles
    Country::new(b"SD", DrivingSide::Right, TYPE_C | TYPE_D), // Sudan
    Country::new(b"SE", DrivingSide::Right, TYPE_C | TYPE_F), // Sweden
    Country::new(b"SG", DrivingSide::Left, TYPE_G), // Singapore
    Country::new(b"SI", DrivingSide::Right, TYPE_C | TYPE_F), // Slovenia
    Country::new(b"SK", DrivingSide::Right, TYPE_C | TYPE_E), // Slovakia
    Country::new(b"SL", DrivingSide::Right, TYPE_D | TYPE_G), // Sierra Leone
    Country::new(b"SM", DrivingSide::Right, TYPE_C | TYPE_F | TYPE_L), // San Marino
    Country::new(b"SN", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_E | TYPE_K), // Senegal
    Country::new(b"SO", DrivingSide::Right, TYPE_C), // Somalia
    Country::new(b"SR", DrivingSide::Left, TYPE_C | TYPE_F), // Suriname
    Country::new(b"SS", DrivingSide::Right, NO_PLUGS), // South Sudan
    Country::new(b"ST", DrivingSide::Right, TYPE_C | TYPE_F), // São Tomé and Príncipe
    Country::new(b"SV", DrivingSide::Right, TYPE_A | TYPE_B), // El Salvador
    Country::new(b"SX", DrivingSide::Right, NO_PLUGS), // Sint Maarten
    Country::new(b"SY", DrivingSide::Right, TYPE_C | TYPE_E | TYPE_L), // Syria
    Country::new(b"SZ", DrivingSide::Left, TYPE_M), // Eswatini
    Country::new(b"TD", DrivingSide::Right, TYPE_C | TYPE_D | TYPE_E | TYPE_F), // Chad
    Country::new(b"TG", DrivingSide::Right, TYPE_C), // Togo
    Country::new(b"TH", DrivingSide::Left, TYPE_A | TYPE_B | TYPE_C | TYPE_F), // Thailand
    Country::new(b"TJ", DrivingSide::Right, TYPE_C | TYPE_F | TYPE_I), // Tajikistan
    Country::new(b"TL", DrivingSide::Left, TYPE_C | TYPE_E | TYPE_F | TYPE_I), // East Timor
    Country::new(b"TM", DrivingSide::Right, TYPE_B | TYPE_C | TYPE_F), // Turkmenistan
    Country::new(b"TN", DrivingSide::Right, TYPE_C | TYPE_E), // Tunisia
    Country::new(b"TO", DrivingSide::Left, TYPE_I), // Tonga
    Country::new(b"TP", DrivingSide::Left, TYPE_C | TYPE_E | TYPE_F | TYPE_I), // East Timor
    Country::new(b"TR", DrivingSide::Right, TYPE_C | TYPE_F), // Turkey
    Country::new(b"TT", DrivingSide::Left, TYPE_A | TYPE_B), // Trinidad and Tobago
    Country::new(b"TV", DrivingSide::Left, TYPE_I), // Tuvalu
    Country::new(b"TW", DrivingSide::Right, TYPE_A | TYPE_B), // Taiwan
    Country::new(b"TZ", DrivingSide::Left, TYPE_D | TYPE_G), // Tanzania
    Country::new(b"UA", DrivingSide::Right, TYPE_C | TYPE_F), // Ukraine
    Country::new(b"UG", DrivingSide::Left, TYPE_G), // Uganda
    Country::new(b"US", DrivingSide::Right, TYPE_A | TYPE_B), // United States of America
    Country::new(b"UY", DrivingSide::Right, TYPE_C | TYPE_F | TYPE_I | TYPE_L), // Uruguay
    Country::new(b"UZ", DrivingSide::Right, TYPE_C | TYPE_F | TYPE_I), // Uzbekistan
    Country::new(b"VA", DrivingSide::Right, NO_PLUGS), // Vatican City
    Country::new(b"VC", DrivingSide::Left, TYPE_A | TYPE_C | TYPE_E | TYPE_G | TYPE_I | TYPE_K), // Saint Vincent and the Grenadines
    Country::new(b"VE", DrivingSide::Right, TYPE_A | TYPE_B), // Venezuela
    Country::new(b"VN", DrivingSide::Right, TYPE_A | TYPE_C | TYPE_F | TYPE_G), // Vietnam
    Country::new(b"VU", DrivingSide::Right, TYPE_C | TYPE_G | TYPE_I), // Vanuatu
    Country::new(b"WS", DrivingSide::Left, TYPE_I), // Samoa
    Country::new(b"XK", DrivingSide::Right, TYPE_F), // Kosovo
    Country::new(b"YE", DrivingSide::Right, TYPE_A | TYPE_D | TYPE_G), // Yemen
    Country::new(b"ZA", DrivingSide::Left, TYPE_C | TYPE_D | TYPE_M | TYPE_N), // South Africa
    Country::new(b"ZM", DrivingSide::Left, TYPE_C | TYPE_D | TYPE_G), // Zambia
    Country::new(b"ZW", DrivingSide::Left, TYPE_D | TYPE_G), // Zimbabwe
];

static UIC_COUNTRY_CODE_TABLE: &[(u16, CountryId)] = &[
    (10, CountryId::new(b"FI")),
    (20, CountryId::new(b"RU")),
    (21, CountryId::new(b"BY")),
    (22, CountryId::new(b"UA")),
    (23, CountryId::new(b"MD")),
    (24, CountryId::new(b"LT")),
    (25, CountryId::new(b"LV")),
    (26, CountryId::new(b"EE")),
    (27, CountryId::new(b"KZ")),
    (28, CountryId::new(b"GE")),
    (29, CountryId::new(b"UZ")),
    (30, CountryId::new(b"KP")),
    (31, CountryId::new(b"MN")),
    (32, CountryId::new(b"VN")),
    (33, CountryId::new(b"CN")),
    (40, CountryId::new(b"CU")),
    (41, CountryId::new(b"AL")),
    (42, CountryId::new(b"JP")),
    (44, CountryId::new(b"BA")),
    (49, CountryId::new(b"BA")),
    (50, CountryId::new(b"BA")),
    (51, CountryId::new(b"PL")),
    (52, CountryId::new(b"BG")),
    (53, CountryId::new(b"RO")),
    (54, CountryId::new(b"CZ")),
    (55, CountryId::new(b"HU")),
    (56, CountryId::new(b"SK")),
    (57, CountryId::new(b"AZ")),
    (58, CountryId::new(b"AM")),
    (59, CountryId::new(b"KG")),
    (60, CountryId::new(b"IE")),
    (61, CountryId::new(b"KR")),
    (62, CountryId::new(b"ME")),
    (64, CountryId::new(b"NZ")),
    (65, CountryId::new(b"MK")),
    (66, CountryId::new(b"TJ")),
    (67, CountryId::new(b"TM")),
    (68, CountryId::new(b"AF")),
    (70, CountryId::new(b"GB")),
    (71, CountryId::new(b"ES")),
    (72, CountryId::new(b"RS")),
    (73, CountryId::new(b"GR")),
    (74, CountryId::new(b"SE")),
    (75, CountryId::new(b"TR")),
    (76, CountryId::new(b"NO")),
    (78, CountryId::new(b"HR")),
    (79, CountryId::new(b"SI")),
    (80, CountryId::new(b"DE")),
    (81, CountryId::new(b"AT")),
    (82, CountryId::new(b"LU")),
    (83, CountryId::new(b"IT")),
    (84, CountryId::new(b"NL")),
    (85, CountryId::new(b"CH")),
    (86, CountryId::new(b"DK")),
    (87, CountryId::new(b"FR")),
    (88, CountryId::new(b"BE")),
    (90, CountryId::new(b"EG")),
    (91, CountryId::new(b"TN")),
    (92, CountryId::new(b"DZ")),
    (93, CountryId::new(b"MA")),
    (94, CountryId::new(b"PT")),
    (95, CountryId::new(b"IL")),
    (96, CountryId::new(b"IR")),
    (97, CountryId::new(b"SY")),
    (98, CountryId::new(b"LB")),
    (99, CountryId::new(b"IQ")),
];

static ISO_COUNTRY_CODE_TABLE: &[(CountryId3, CountryId)] = &[
    (CountryId3::new(b"AUS"), CountryId::new(b"AU")),
    (CountryId3::new(b"AUT"), CountryId::new(b"AT")),
    (CountryId3::new(b"BEL"), CountryId::new(b"BE")),
    (CountryId3::new(b"BGR"), CountryId::new(b"BG")),
    (CountryId3::new(b"BRA"), CountryId::new(b"BR")),
    (CountryId3::new(b"CAN"), CountryId::new(b"CA")),
    (CountryId3::new(b"CHE"), CountryId::new(b"CH")),
    (CountryId3::new(b"CHN"), CountryId::new(b"CN")),
    (CountryId3::new(b"CZE"), CountryId::new(b"CZ")),
    (CountryId3::new(b"DEU"), CountryId::new(b"DE")),
    (CountryId3::new(b"DNK"), CountryId::new(b"DK")),
    (CountryId3::new(b"ESP"), CountryId::new(b"ES")),
    (CountryId3::new(b"EST"), CountryId::new(b"EE")),
    (CountryId3::new(b"FIN"), CountryId::new(b"FI")),
    (CountryId3::new(b"FRA"), CountryId::new(b"FR")),
    (CountryId3::new(b"GBR"), CountryId::new(b"GB")),
    (CountryId3::new(b"GRC"), CountryId::new(b"GR")),
    (CountryId3::new(b"HRV"), CountryId::new(b"HR")),
    (CountryId3::new(b"HUN"), CountryId::new(b"HU")),
    (CountryId3::new(b"IND"), CountryId::new(b"IN")),
    (CountryId3::new(b"IRL"), CountryId::new(b"IE")),
    (CountryId3::new(b"ISL"), CountryId::new(b"IS")),
    (CountryId3::new(b"ISR"), CountryId::new(b"IL")),
    (CountryId3::new(b"ITA"), CountryId::new(b"IT")),
    (CountryId3::new(b"JPN"), CountryId::new(b"JP")),
    (CountryId3::new(b"KOR"), CountryId::new(b"KR")),
    (CountryId3::new(b"LIE"), CountryId::new(b"LI")),
    (CountryId3::new(b"LTU"), CountryId::new(b"LT")),
    (CountryId3::new(b"LUX"), CountryId::new(b"LU")),
    (CountryId3::new(b"LVA"), CountryId::new(b"LV")),
    (CountryId3::new(b"MEX"), CountryId::new(b"MX")),
    (CountryId3::new(b"NLD"), CountryId::new(b"NL")),
    (CountryId3::new(b"NOR"), CountryId::new(b"NO")),
    (CountryId3::new(b"NZL"), CountryId::new(b"NZ")),
    (CountryId3::new(b"POL"), CountryId::new(b"PL")),
    (CountryId3::new(b"PRT"), CountryId::new(b"PT")),
    (CountryId3::new(b"ROU"), CountryId::new(b"RO")),
    (CountryId3::new(b"RUS"), CountryId::new(b"RU")),
    (CountryId3::new(b"SGP"), CountryId::new(b"SG")),
    (CountryId3::new(b"SRB"), CountryId::new(b"RS")),
    (CountryId3::new(b"SVK"), CountryId::new(b"SK")),
    (CountryId3::new(b"SVN"), CountryId::new(b"SI")),
    (CountryId3::new(b"SWE"), CountryId::new(b"SE")),
    (CountryId3::new(b"TUR"), CountryId::new(b"TR")),
    (CountryId3::new(b"UKR"), CountryId::new(b"UA")),
    (CountryId3::new(b"USA"), CountryId::new(b"US")),
    (CountryId3::new(b"ZAF"), CountryId::new(b"ZA")),
];

static CALLING_CODE_TABLE: &[(u16, CountryId)] = &[
    (30, CountryId::new(b"GR")),
    (31, CountryId::new(b"NL")),
    (32, CountryId::new(b"BE")),
    (33, CountryId::new(b"FR")),
    (34, CountryId::new(b"ES")),
    (36, CountryId::new(b"HU")),
    (39, CountryId::new(b"IT")),
    (40, CountryId::new(b"RO")),
    (41, CountryId::new(b"CH")),
    (43, CountryId::new(b"AT")),
    (44, CountryId::new(b"GB")),
    (45, CountryId::new(b"DK")),
    (46, CountryId::new(b"SE")),
    (47, CountryId::new(b"NO")),
    (48, CountryId::new(b"PL")),
    (49, CountryId::new(b"DE")),
    (61, CountryId::new(b"AU")),
    (64, CountryId::new(b"NZ")),
    (65, CountryId::new(b"SG")),
    (81, CountryId::new(b"JP")),
    (82, CountryId::new(b"KR")),
    (86, CountryId::new(b"CN")),
    (90, CountryId::new(b"TR")),
    (351, CountryId::new(b"PT")),
    (352, CountryId::new(b"LU")),
    (353, CountryId::new(b"IE")),
    (354, CountryId::new(b"IS")),
    (358, CountryId::new(b"FI")),
    (359, CountryId::new(b"BG")),
    (370, CountryId::new(b"LT")),
    (371, CountryId::new(b"LV")),
    (372, CountryId::new(b"EE")),
    (385, CountryId::new(b"HR")),
    (386, CountryId::new(b"SI")),
    (420, CountryId::new(b"CZ")),
    (421, CountryId::new(b"SK")),
    (972, CountryId::new(b"IL")),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledgedb::is_strictly_sorted_by;

    fn plugs(bits: u16) -> PowerPlugTypes {
        PowerPlugTypes::from_bits(bits)
    }

    #[test]
    fn test_tables_are_sorted() {
        assert!(is_strictly_sorted_by(COUNTRY_TABLE, |c| c.id));
        assert!(is_strictly_sorted_by(UIC_COUNTRY_CODE_TABLE, |(code, _)| *code));
        assert!(is_strictly_sorted_by(ISO_COUNTRY_CODE_TABLE, |(code, _)| *code));
        assert!(is_strictly_sorted_by(CALLING_CODE_TABLE, |(code, _)| *code));
    }

    #[test]
    fn test_country_lookup() {
        let de = country_for_id(CountryId::new(b"DE"));
        assert!(de.is_valid());
        assert_eq!(de.driving_side, DrivingSide::Right);
        assert_eq!(de.power_plugs, plugs(TYPE_C | TYPE_F));

        let gb = country_for_id(CountryId::new(b"GB"));
        assert_eq!(gb.driving_side, DrivingSide::Left);
        assert_eq!(gb.power_plugs, plugs(TYPE_G));

        assert!(!country_for_id(CountryId::new(b"XX")).is_valid());
        assert!(!country_for_id(CountryId::INVALID).is_valid());
    }

    #[test]
    fn test_uic_and_iso3_mapping() {
        assert_eq!(country_id_for_uic_code(80), CountryId::new(b"DE"));
        assert_eq!(country_id_for_uic_code(87), CountryId::new(b"FR"));
        assert_eq!(country_id_for_uic_code(49), CountryId::new(b"BA"));
        assert!(!country_id_for_uic_code(11).is_valid());
        assert_eq!(country_id_from_iso3166_1_alpha3(CountryId3::new(b"DEU")), CountryId::new(b"DE"));
        assert!(!country_id_from_iso3166_1_alpha3(CountryId3::new(b"XYZ")).is_valid());
    }

    #[test]
    fn test_phone_numbers() {
        assert_eq!(country_for_phone_number("+49 30 1234567"), CountryId::new(b"DE"));
        assert_eq!(country_for_phone_number("+358 9 123"), CountryId::new(b"FI"));
        assert_eq!(country_for_phone_number("0044 20 7946 0000"), CountryId::new(b"GB"));
        assert!(!country_for_phone_number("+1 415 555 0100").is_valid());
        assert!(!country_for_phone_number("030 1234567").is_valid());
    }

    #[test]
    fn test_power_plug_compatibility() {
        // Schuko travellers in the UK need an adapter
        assert_eq!(incompatible_power_plugs(plugs(TYPE_F), plugs(TYPE_G)), plugs(TYPE_F));
        assert_eq!(incompatible_power_sockets(plugs(TYPE_F), plugs(TYPE_G)), plugs(TYPE_G));

        // Europlug fits the German sockets
        assert!(incompatible_power_plugs(plugs(TYPE_C), plugs(TYPE_C | TYPE_F)).is_empty());
        assert!(incompatible_power_sockets(plugs(TYPE_C), plugs(TYPE_C | TYPE_F)).is_empty());

        // Schuko in Switzerland: plug fails, the J socket is flagged
        assert_eq!(incompatible_power_plugs(plugs(TYPE_F), plugs(TYPE_C | TYPE_J)), plugs(TYPE_F));
        assert_eq!(
            incompatible_power_sockets(plugs(TYPE_F), plugs(TYPE_C | TYPE_J)),
            plugs(TYPE_C | TYPE_J)
        );
    }
}
