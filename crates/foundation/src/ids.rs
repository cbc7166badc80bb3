/// Opaque park identifier.
///
/// The remote API is loose about id types (numbers in some payloads, strings in
/// others), so ids are normalised to their decimal/text form. `ParkId::from(1)`
/// and `ParkId::from("1")` compare equal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParkId(String);

impl ParkId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParkId {
    fn from(raw: &str) -> Self {
        ParkId(raw.to_string())
    }
}

impl From<String> for ParkId {
    fn from(raw: String) -> Self {
        ParkId(raw)
    }
}

impl From<i64> for ParkId {
    fn from(n: i64) -> Self {
        ParkId(n.to_string())
    }
}

impl From<u64> for ParkId {
    fn from(n: u64) -> Self {
        ParkId(n.to_string())
    }
}

impl std::fmt::Display for ParkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ParkId;

    #[test]
    fn numeric_and_text_ids_coincide() {
        assert_eq!(ParkId::from(1i64), ParkId::from("1"));
        assert_eq!(ParkId::from(42u64).as_str(), "42");
        assert_ne!(ParkId::from("01"), ParkId::from(1i64));
    }
}
