use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoCoordinates {
    #[serde(with = "nan_as_null")]
    pub latitude: f64,
    #[serde(with = "nan_as_null")]
    pub longitude: f64,
}

impl GeoCoordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for GeoCoordinates {
    fn default() -> Self {
        Self {
            latitude: f64::NAN,
            longitude: f64::NAN,
        }
    }
}

// Two invalid coordinates compare equal regardless of their payload.
impl PartialEq for GeoCoordinates {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (false, false) => true,
            (true, true) => self.latitude == other.latitude && self.longitude == other.longitude,
            _ => false,
        }
    }
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 once normalized.
    pub address_country: Option<String>,
}

impl PostalAddress {
    pub fn is_empty(&self) -> bool {
        [
            &self.street_address,
            &self.address_locality,
            &self.address_region,
            &self.postal_code,
            &self.address_country,
        ]
        .iter()
        .all(|field| is_blank(field))
    }
}

/// Shared shape of airports, stations, terminals, hotels, restaurants and
/// other venues.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: Option<String>,
    #[serde(default)]
    pub address: PostalAddress,
    #[serde(default)]
    pub geo: GeoCoordinates,
    pub telephone: Option<String>,
    /// Scheme-prefixed station identifier such as `uic:8011160`.
    pub identifier: Option<String>,
    pub iata_code: Option<String>,
}

impl Place {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn iata_code(&self) -> &str {
        self.iata_code.as_deref().unwrap_or("")
    }

    pub fn country(&self) -> &str {
        self.address.address_country.as_deref().unwrap_or("")
    }

    pub fn has_name(&self) -> bool {
        !is_blank(&self.name)
    }
}

/// Empty strings count as absent throughout the model.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geo_serializes_as_null() {
        let place = Place::named("Berlin Hbf");
        let json = serde_json::to_value(&place).unwrap();
        assert!(json["geo"]["latitude"].is_null());

        let back: Place = serde_json::from_value(json).unwrap();
        assert_eq!(back, place);
        assert!(!back.geo.is_valid());
    }

    #[test]
    fn test_geo_validity() {
        assert!(GeoCoordinates::new(52.5, 13.4).is_valid());
        assert!(!GeoCoordinates::new(95.0, 13.4).is_valid());
        assert!(!GeoCoordinates::new(52.5, f64::NAN).is_valid());
    }
}
