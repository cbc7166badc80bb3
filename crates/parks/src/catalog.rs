use std::collections::BTreeMap;

use foundation::ParkId;

use crate::error::ParkListError;
use crate::model::Park;
use crate::wire::ParkRecord;

/// Every park known to the session, keyed by id.
///
/// Ordering contract:
/// - `ids()` and `iter()` yield parks in the order the API listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParkCatalog {
    order: Vec<ParkId>,
    by_id: BTreeMap<ParkId, Park>,
}

impl ParkCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a full `GET parks` payload.
    ///
    /// The list is accepted or rejected as a whole; a single malformed record
    /// rejects the payload.
    pub fn from_records(records: Vec<ParkRecord>) -> Result<Self, ParkListError> {
        let mut catalog = Self::new();
        for (index, record) in records.into_iter().enumerate() {
            let park =
                Park::try_from(record).map_err(|error| ParkListError::Record { index, error })?;
            catalog.insert(park)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, park: Park) -> Result<(), ParkListError> {
        if self.by_id.contains_key(&park.id) {
            return Err(ParkListError::DuplicateId(park.id));
        }
        self.order.push(park.id.clone());
        self.by_id.insert(park.id.clone(), park);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: &ParkId) -> Option<&Park> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &ParkId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn ids(&self) -> &[ParkId] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &Park> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }
}
