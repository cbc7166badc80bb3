use foundation::ParkId;
use parks::{FilterRequest, ParkCatalog, ParkRecord};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::filters::{CheckboxItem, FilterState};
use crate::present::{self, Marker, PopupContent};
use crate::selection::Selection;
use crate::visible::VisibleSet;

/// A filtered-ids request ready to be sent.
///
/// `seq` is monotonically increasing per view; only the response to the most
/// recently issued query is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub seq: u64,
    pub request: FilterRequest,
}

/// All mutable state of the park map.
///
/// Every mutation goes through `&mut self`; network results are fed back in
/// through the `apply_*` methods. Failed results are logged and leave the
/// state untouched.
#[derive(Debug, Default)]
pub struct ParkMapView {
    filters: FilterState,
    catalog: ParkCatalog,
    visible: VisibleSet,
    selection: Selection,
    issued_seq: u64,
    filter_applied: bool,
}

impl ParkMapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn catalog(&self) -> &ParkCatalog {
        &self.catalog
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Sequence number of the latest issued filter query (0 before any).
    pub fn latest_seq(&self) -> u64 {
        self.issued_seq
    }

    /// Seeds the filter bar from a facility list response.
    ///
    /// Returns `true` if the result was applied.
    pub fn apply_facility_types(&mut self, result: Result<Vec<String>, ApiError>) -> bool {
        match result {
            Ok(names) => {
                self.filters.seed(names);
                info!(count = self.filters.len(), "loaded facility types");
                true
            }
            Err(err) => {
                warn!("failed to load facility types: {err}");
                false
            }
        }
    }

    /// Stores the park list and, unless a filter response already landed,
    /// shows every park.
    pub fn apply_parks(&mut self, result: Result<Vec<ParkRecord>, ApiError>) -> bool {
        let records = match result {
            Ok(records) => records,
            Err(err) => {
                warn!("failed to load parks: {err}");
                return false;
            }
        };
        let catalog = match ParkCatalog::from_records(records) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!("rejected park list: {err}");
                return false;
            }
        };
        info!(count = catalog.len(), "loaded parks");
        if self.filter_applied {
            debug!("keeping filtered visible set over the full park list");
        } else {
            self.visible.replace(catalog.ids().to_vec());
        }
        self.catalog = catalog;
        self.reconcile_selection();
        true
    }

    /// Flips a facility checkbox and returns the query to send.
    ///
    /// Unknown facility names are ignored and produce no query.
    pub fn toggle(&mut self, facility: &str) -> Option<FilterQuery> {
        if self.filters.toggle(facility).is_none() {
            warn!(facility, "toggle for unknown facility ignored");
            return None;
        }
        Some(self.issue_query())
    }

    /// Sets a facility checkbox to an explicit value and returns the query to send.
    pub fn set_checked(&mut self, facility: &str, checked: bool) -> Option<FilterQuery> {
        if !self.filters.set(facility, checked) {
            warn!(facility, "checkbox change for unknown facility ignored");
            return None;
        }
        Some(self.issue_query())
    }

    fn issue_query(&mut self) -> FilterQuery {
        self.issued_seq += 1;
        FilterQuery {
            seq: self.issued_seq,
            request: FilterRequest::new(self.filters.active()),
        }
    }

    /// Applies a filtered-ids response.
    ///
    /// Responses to superseded queries are dropped. On success the visible set
    /// becomes exactly `ids`, and a selection that is no longer visible is closed.
    pub fn apply_filtered_ids(&mut self, seq: u64, result: Result<Vec<ParkId>, ApiError>) -> bool {
        if seq != self.issued_seq {
            debug!(seq, latest = self.issued_seq, "dropping superseded filter response");
            return false;
        }
        match result {
            Ok(ids) => {
                debug!(seq, count = ids.len(), "applying filter response");
                self.visible.replace(ids);
                self.filter_applied = true;
                self.reconcile_selection();
                true
            }
            Err(err) => {
                warn!("failed to load filtered parks: {err}");
                false
            }
        }
    }

    /// Marker click. Clicks on parks that are not rendered are ignored.
    pub fn select(&mut self, id: ParkId) -> bool {
        if !self.visible.contains(&id) || !self.catalog.contains(&id) {
            debug!(park = %id, "ignoring click on a park that is not rendered");
            return false;
        }
        self.selection.select(id);
        true
    }

    /// Popup close button.
    pub fn close_popup(&mut self) -> bool {
        self.selection.close()
    }

    fn reconcile_selection(&mut self) {
        let Some(id) = self.selection.id() else {
            return;
        };
        if !self.visible.contains(id) {
            debug!(park = %id, "selected park filtered out; closing popup");
            self.selection.close();
        }
    }

    pub fn checkboxes(&self) -> Vec<CheckboxItem> {
        self.filters.checkboxes()
    }

    pub fn markers(&self) -> Vec<Marker> {
        present::markers(&self.catalog, &self.visible, &self.selection)
    }

    pub fn popup(&self) -> Option<PopupContent> {
        present::popup(&self.catalog, &self.visible, &self.selection)
    }
}
