use foundation::ParkId;

/// Park ids currently passing the active filter, as reported by the server.
///
/// Ordering contract:
/// - Iteration yields ids in the order they were last `replace`d with.
/// - Contents are never filtered client-side; `replace` stores exactly what it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    ids: Vec<ParkId>,
}

impl VisibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a new id list wholesale.
    pub fn replace(&mut self, ids: Vec<ParkId>) {
        self.ids = ids;
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &ParkId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ParkId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParkId> + '_ {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::VisibleSet;
    use foundation::ParkId;

    fn ids(raw: &[&str]) -> Vec<ParkId> {
        raw.iter().map(|s| ParkId::from(*s)).collect()
    }

    #[test]
    fn replace_is_wholesale() {
        let mut v = VisibleSet::new();
        v.replace(ids(&["1", "2", "3"]));
        v.replace(ids(&["3", "7"]));
        assert_eq!(v.ids(), ids(&["3", "7"]).as_slice());
        assert!(!v.contains(&ParkId::from("1")));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn keeps_server_order() {
        let mut v = VisibleSet::new();
        v.replace(ids(&["9", "1", "5"]));
        let got: Vec<&str> = v.iter().map(ParkId::as_str).collect();
        assert_eq!(got, vec!["9", "1", "5"]);
        // An empty filter response hides everything.
        v.replace(Vec::new());
        assert!(v.is_empty());
    }
}
