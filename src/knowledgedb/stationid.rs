//! Numeric and packed identifiers of the national station code schemes.

/// UIC station number, also used for IBNR. A trailing check digit is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UicStationId(u32);

pub type Ibnr = UicStationId;

impl UicStationId {
    pub const fn new(id: u32) -> Self {
        Self(if id > 9_999_999 { id / 10 } else { id })
    }

    pub fn parse(s: &str) -> Self {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Self::default();
        }
        s.parse().map(Self::new).unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        (1_000_000..=9_999_999).contains(&self.0)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Two-digit UIC country code prefix.
    pub fn uic_country_code(&self) -> u16 {
        (self.0 / 100_000) as u16
    }
}

/// Five uppercase letters packed in base 27, as used by SNCF and Benerail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FiveAlphaId(u32);

pub type SncfStationId = FiveAlphaId;
pub type BenerailStationId = FiveAlphaId;

impl FiveAlphaId {
    pub const fn new(s: &[u8; 5]) -> Self {
        let mut id = 0u32;
        let mut i = 0;
        while i < 5 {
            if s[i] < b'A' || s[i] > b'Z' {
                return Self(0);
            }
            id = id * 27 + (s[i] - b'@') as u32;
            i += 1;
        }
        Self(id)
    }

    pub fn parse(s: &str) -> Self {
        match <&[u8; 5]>::try_from(s.as_bytes()) {
            Ok(bytes) => Self::new(bytes),
            Err(_) => Self::default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// VR (Finland) station code: two to four letters, including Ä and Ö, at 6 bits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VrStationCode(u32);

impl VrStationCode {
    const fn char_value(c: char) -> Option<u32> {
        match c {
            'Ä' => Some(27),
            'Ö' => Some(28),
            'A'..='Z' => Some(c as u32 - '@' as u32),
            _ => None,
        }
    }

    pub const fn new(s: &str) -> Self {
        // const-friendly walk over at most four chars
        let bytes = s.as_bytes();
        let mut values = [0u32; 4];
        let mut count = 0;
        let mut i = 0;
        while i < bytes.len() {
            if count == 4 {
                return Self(0);
            }
            let (c, width) = match bytes[i] {
                0xC3 if i + 1 < bytes.len() && bytes[i + 1] == 0x84 => ('Ä', 2),
                0xC3 if i + 1 < bytes.len() && bytes[i + 1] == 0x96 => ('Ö', 2),
                b => (b as char, 1),
            };
            match Self::char_value(c) {
                Some(v) => values[count] = v,
                None => return Self(0),
            }
            count += 1;
            i += width;
        }
        if count < 2 {
            return Self(0);
        }
        Self((values[0] << 18) + (values[1] << 12) + (values[2] << 6) + values[3])
    }

    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}
