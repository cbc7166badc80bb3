/// Latitude bounds in degrees.
pub const LAT_MIN_DEG: f64 = -90.0;
pub const LAT_MAX_DEG: f64 = 90.0;
/// Longitude bounds in degrees.
pub const LON_MIN_DEG: f64 = -180.0;
pub const LON_MAX_DEG: f64 = 180.0;

/// WGS84 position in degrees, as consumed by web map widgets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Builds a position, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || !(LAT_MIN_DEG..=LAT_MAX_DEG).contains(&lat) {
            return Err(CoordError::LatitudeOutOfRange(lat));
        }
        if !lng.is_finite() || !(LON_MIN_DEG..=LON_MAX_DEG).contains(&lng) {
            return Err(CoordError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Parses a position from decimal degree strings such as `"49.1"` and `"-123.0"`.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a plain decimal
    /// number is rejected instead of degrading into `NaN`.
    pub fn parse(lat: &str, lng: &str) -> Result<Self, CoordError> {
        let lat = parse_degrees(lat)?;
        let lng = parse_degrees(lng)?;
        Self::new(lat, lng)
    }
}

fn parse_degrees(raw: &str) -> Result<f64, CoordError> {
    let trimmed = raw.trim();
    // `f64::from_str` accepts "inf" and "NaN"; neither is a coordinate.
    let looks_numeric = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !looks_numeric {
        return Err(CoordError::NotANumber(raw.to_string()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CoordError::NotANumber(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    NotANumber(String),
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl std::fmt::Display for CoordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordError::NotANumber(raw) => write!(f, "not a decimal coordinate: {raw:?}"),
            CoordError::LatitudeOutOfRange(v) => write!(f, "latitude {v} outside [-90, 90]"),
            CoordError::LongitudeOutOfRange(v) => write!(f, "longitude {v} outside [-180, 180]"),
        }
    }
}

impl std::error::Error for CoordError {}

#[cfg(test)]
mod tests {
    use super::{CoordError, LatLng};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn parses_decimal_strings() {
        let p = LatLng::parse("49.1", "-123.0").unwrap();
        assert_close(p.lat, 49.1, 1e-12);
        assert_close(p.lng, -123.0, 1e-12);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let p = LatLng::parse(" 49.256439 ", "-123.104004\n").unwrap();
        assert_close(p.lat, 49.256439, 1e-12);
        assert_close(p.lng, -123.104004, 1e-12);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(
            LatLng::parse("", "-123.0"),
            Err(CoordError::NotANumber(String::new()))
        );
        assert!(matches!(
            LatLng::parse("49.1", "abc"),
            Err(CoordError::NotANumber(_))
        ));
        assert!(matches!(
            LatLng::parse("NaN", "0"),
            Err(CoordError::NotANumber(_))
        ));
        assert!(matches!(
            LatLng::parse("inf", "0"),
            Err(CoordError::NotANumber(_))
        ));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            LatLng::parse("91", "0"),
            Err(CoordError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            LatLng::parse("0", "-180.5"),
            Err(CoordError::LongitudeOutOfRange(-180.5))
        );
        assert!(LatLng::new(-90.0, 180.0).is_ok());
    }
}
