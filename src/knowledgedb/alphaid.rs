use std::fmt;

/// Up to six uppercase ASCII letters packed at 5 bits each.
///
/// Ordering of the packed value matches lexicographic ordering of the
/// letters, so tables sorted by code string are sorted by id too.
/// The all-zero id is the invalid sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlphaId<const N: usize>(u32);

impl<const N: usize> AlphaId<N> {
    pub const INVALID: Self = Self(0);

    pub const fn new(s: &[u8; N]) -> Self {
        let mut id = 0u32;
        let mut i = 0;
        while i < N {
            if s[i] < b'A' || s[i] > b'Z' {
                return Self::INVALID;
            }
            id |= ((s[i] - b'@') as u32) << (5 * (N - i - 1)) as u32;
            i += 1;
        }
        Self(id)
    }

    /// Parses exactly `N` uppercase letters, anything else yields the invalid id.
    pub fn parse(s: &str) -> Self {
        match <&[u8; N]>::try_from(s.as_bytes()) {
            Ok(bytes) => Self::new(bytes),
            Err(_) => Self::INVALID,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl<const N: usize> fmt::Display for AlphaId<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return Ok(());
        }
        for i in 0..N {
            let c = ((self.0 >> (5 * (N - i - 1))) & 0x1F) as u8 + b'@';
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}

pub type IataCode = AlphaId<3>;
pub type CountryId = AlphaId<2>;
pub type CountryId3 = AlphaId<3>;
pub type AmtrakStationCode = AlphaId<3>;
pub type UkRailwayStationCode = AlphaId<3>;
pub type ViaRailStationCode = AlphaId<4>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() {
        assert_eq!(IataCode::new(b"AAA").value(), (1 << 10) | (1 << 5) | 1);
        assert_eq!(CountryId::new(b"DE").to_string(), "DE");
        assert_eq!(ViaRailStationCode::parse("TRTO").to_string(), "TRTO");
        assert!(IataCode::parse("SFO") < IataCode::parse("SFP"));
        assert!(IataCode::parse("AZZ") < IataCode::parse("BAA"));
    }

    #[test]
    fn test_invalid_input() {
        assert!(!IataCode::parse("sfo").is_valid());
        assert!(!IataCode::parse("SF").is_valid());
        assert!(!IataCode::parse("SFOO").is_valid());
        assert!(!IataCode::parse("S1O").is_valid());
        assert_eq!(IataCode::INVALID.to_string(), "");
    }
}
