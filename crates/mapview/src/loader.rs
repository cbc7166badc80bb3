//! Async data loading against the parks API.
//!
//! The controller owns the view behind `Rc<RefCell<_>>` so it can be cloned
//! into spawned futures on a single-threaded executor. Borrows never span an
//! `.await`: state is updated synchronously, then the request is awaited, then
//! the result is applied in a fresh borrow.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use foundation::ParkId;
use futures_util::future::join;
use parks::{FilterRequest, ParkRecord};

use crate::error::ApiError;
use crate::view::{FilterQuery, ParkMapView};

/// Transport for the three parks endpoints.
///
/// Implementations are single-threaded (browser futures are `!Send`).
#[allow(async_fn_in_trait)]
pub trait ParkApi {
    /// `GET` facility type names.
    async fn facility_types(&self) -> Result<Vec<String>, ApiError>;
    /// `GET` the full park list.
    async fn parks(&self) -> Result<Vec<ParkRecord>, ApiError>;
    /// `POST { filters }` and return the matching park ids.
    async fn filtered_ids(&self, request: &FilterRequest) -> Result<Vec<ParkId>, ApiError>;
}

/// Called after every change to the view, with no borrow held.
type Listener<A> = Rc<dyn Fn(&ParkMapController<A>)>;

pub struct ParkMapController<A> {
    api: Rc<A>,
    view: Rc<RefCell<ParkMapView>>,
    listener: Option<Listener<A>>,
}

impl<A> Clone for ParkMapController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            view: Rc::clone(&self.view),
            listener: self.listener.clone(),
        }
    }
}

impl<A: ParkApi> ParkMapController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            view: Rc::new(RefCell::new(ParkMapView::new())),
            listener: None,
        }
    }

    /// Installs the change listener (the renderer, in the browser).
    pub fn with_listener(mut self, listener: impl Fn(&Self) + 'static) -> Self {
        self.listener = Some(Rc::new(listener));
        self
    }

    pub fn view(&self) -> Ref<'_, ParkMapView> {
        self.view.borrow()
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener(self);
        }
    }

    /// Startup loads. Both requests are in flight together; neither waits
    /// for, or depends on the outcome of, the other.
    pub async fn mount(&self) {
        join(self.load_facility_types(), self.load_parks()).await;
    }

    pub async fn load_facility_types(&self) -> bool {
        let result = self.api.facility_types().await;
        let applied = self.view.borrow_mut().apply_facility_types(result);
        if applied {
            self.notify();
        }
        applied
    }

    pub async fn load_parks(&self) -> bool {
        let result = self.api.parks().await;
        let applied = self.view.borrow_mut().apply_parks(result);
        if applied {
            self.notify();
        }
        applied
    }

    pub async fn load_filtered_ids(&self, query: FilterQuery) -> bool {
        let result = self.api.filtered_ids(&query.request).await;
        let applied = self.view.borrow_mut().apply_filtered_ids(query.seq, result);
        if applied {
            self.notify();
        }
        applied
    }

    fn update<R>(&self, f: impl FnOnce(&mut ParkMapView) -> R) -> R {
        f(&mut *self.view.borrow_mut())
    }

    /// Flips a checkbox and refreshes the visible set.
    ///
    /// The checkbox changes (and the listener runs) before this returns; the
    /// returned future owns its own handle and only covers the filter
    /// request, so it can be spawned. It resolves to `true` if the response
    /// was applied.
    pub fn toggle(&self, facility: &str) -> impl Future<Output = bool> + use<A> {
        let query = self.update(|view| view.toggle(facility));
        self.send_query(query)
    }

    /// Like [`toggle`](Self::toggle), with the checkbox's new value.
    pub fn set_checked(
        &self,
        facility: &str,
        checked: bool,
    ) -> impl Future<Output = bool> + use<A> {
        let query = self.update(|view| view.set_checked(facility, checked));
        self.send_query(query)
    }

    fn send_query(&self, query: Option<FilterQuery>) -> impl Future<Output = bool> + use<A> {
        if query.is_some() {
            self.notify();
        }
        let ctl = self.clone();
        async move {
            match query {
                Some(query) => ctl.load_filtered_ids(query).await,
                None => false,
            }
        }
    }

    pub fn select(&self, id: ParkId) -> bool {
        let changed = self.update(|view| view.select(id));
        if changed {
            self.notify();
        }
        changed
    }

    pub fn close_popup(&self) -> bool {
        let changed = self.update(ParkMapView::close_popup);
        if changed {
            self.notify();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::future::pending;
    use std::pin::pin;
    use std::rc::Rc;
    use std::task::Context;

    use super::{ParkApi, ParkMapController};
    use crate::error::ApiError;
    use crate::selection::Selection;
    use foundation::{LatLng, ParkId};
    use futures_util::task::noop_waker;
    use parks::{FilterRequest, ParkRecord, RawCoord, RawParkId};
    use pollster::block_on;
    use pretty_assertions::assert_eq;

    /// Scripted responses per endpoint; records every filter request body.
    #[derive(Default)]
    struct ScriptedApi {
        facilities: RefCell<VecDeque<Result<Vec<String>, ApiError>>>,
        parks: RefCell<VecDeque<Result<Vec<ParkRecord>, ApiError>>>,
        filtered: RefCell<VecDeque<Result<Vec<ParkId>, ApiError>>>,
        requests: RefCell<Vec<FilterRequest>>,
        parks_calls: Cell<usize>,
        stall_facilities: bool,
    }

    impl ScriptedApi {
        fn with_facilities(self, r: Result<Vec<String>, ApiError>) -> Self {
            self.facilities.borrow_mut().push_back(r);
            self
        }

        fn with_parks(self, r: Result<Vec<ParkRecord>, ApiError>) -> Self {
            self.parks.borrow_mut().push_back(r);
            self
        }

        fn with_filtered(self, r: Result<Vec<ParkId>, ApiError>) -> Self {
            self.filtered.borrow_mut().push_back(r);
            self
        }

        /// The facility request never completes.
        fn with_stalled_facilities(mut self) -> Self {
            self.stall_facilities = true;
            self
        }
    }

    fn exhausted() -> ApiError {
        ApiError::Network("no scripted response".to_string())
    }

    impl ParkApi for ScriptedApi {
        async fn facility_types(&self) -> Result<Vec<String>, ApiError> {
            if self.stall_facilities {
                return pending().await;
            }
            self.facilities
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }

        async fn parks(&self) -> Result<Vec<ParkRecord>, ApiError> {
            self.parks_calls.set(self.parks_calls.get() + 1);
            self.parks
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }

        async fn filtered_ids(&self, request: &FilterRequest) -> Result<Vec<ParkId>, ApiError> {
            self.requests.borrow_mut().push(request.clone());
            self.filtered
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }
    }

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn playground_park() -> ParkRecord {
        ParkRecord {
            id: RawParkId::Int(1),
            name: "Grandview Park".to_string(),
            address: "1200 Commercial Dr".to_string(),
            washrooms: Some("N".to_string()),
            lat: RawCoord::Text("49.1".to_string()),
            lng: RawCoord::Text("-123.0".to_string()),
            facilities: names(&["Playground"]),
        }
    }

    #[test]
    fn toggle_playground_scenario() {
        let api = ScriptedApi::default()
            .with_facilities(Ok(names(&["Playground", "Washrooms"])))
            .with_parks(Ok(vec![playground_park()]))
            .with_filtered(Ok(vec![ParkId::from(1i64)]));
        let ctl = ParkMapController::new(api);
        block_on(ctl.mount());
        assert_eq!(ctl.view().visible().ids(), &[ParkId::from("1")]);

        assert!(block_on(ctl.toggle("Playground")));
        assert_eq!(
            ctl.api.requests.borrow().as_slice(),
            &[FilterRequest::new(names(&["Playground"]))]
        );
        assert_eq!(ctl.view().visible().ids(), &[ParkId::from("1")]);
        let park = ctl.view().catalog().get(&ParkId::from("1")).cloned().unwrap();
        assert_eq!(
            park.position,
            LatLng {
                lat: 49.1,
                lng: -123.0,
            }
        );
    }

    #[test]
    fn check_then_uncheck_sends_both_filter_sets() {
        let api = ScriptedApi::default()
            .with_facilities(Ok(names(&["Playground", "Washrooms"])))
            .with_parks(Ok(vec![playground_park()]))
            .with_filtered(Ok(vec![ParkId::from(1i64)]))
            .with_filtered(Ok(vec![ParkId::from(1i64)]));
        let ctl = ParkMapController::new(api);
        block_on(ctl.mount());
        let before = ctl.view().filters().clone();

        block_on(ctl.set_checked("Washrooms", true));
        block_on(ctl.set_checked("Washrooms", false));

        assert_eq!(
            ctl.api.requests.borrow().as_slice(),
            &[
                FilterRequest::new(names(&["Washrooms"])),
                FilterRequest::new(Vec::new()),
            ]
        );
        assert_eq!(ctl.view().filters(), &before);
    }

    #[test]
    fn facility_failure_is_swallowed() {
        let api = ScriptedApi::default()
            .with_facilities(Err(ApiError::Network("connection refused".to_string())))
            .with_parks(Ok(vec![playground_park()]));
        let ctl = ParkMapController::new(api);
        block_on(ctl.mount());
        assert!(ctl.view().filters().is_empty());
        assert!(ctl.view().checkboxes().is_empty());
        // Parks still load after the facility request failed.
        assert_eq!(ctl.view().catalog().len(), 1);
    }

    #[test]
    fn filter_failure_keeps_visible_set() {
        let api = ScriptedApi::default()
            .with_facilities(Ok(names(&["Playground"])))
            .with_parks(Ok(vec![playground_park()]))
            .with_filtered(Err(ApiError::Decode("expected array".to_string())));
        let ctl = ParkMapController::new(api);
        block_on(ctl.mount());
        assert!(!block_on(ctl.toggle("Playground")));
        assert_eq!(ctl.view().visible().ids(), &[ParkId::from("1")]);
        assert_eq!(ctl.view().filters().active(), names(&["Playground"]));
    }

    #[test]
    fn unknown_facility_sends_nothing() {
        let api = ScriptedApi::default()
            .with_facilities(Ok(names(&["Playground"])))
            .with_parks(Ok(Vec::new()));
        let ctl = ParkMapController::new(api);
        block_on(ctl.mount());
        assert!(!block_on(ctl.toggle("Dog Off-Leash Area")));
        assert!(ctl.api.requests.borrow().is_empty());
    }

    #[test]
    fn marker_click_and_close() {
        let api = ScriptedApi::default()
            .with_facilities(Ok(Vec::new()))
            .with_parks(Ok(vec![playground_park()]));
        let ctl = ParkMapController::new(api);
        block_on(ctl.mount());
        assert!(ctl.select(ParkId::from("1")));
        assert_eq!(ctl.view().selection(), &Selection::Selected(ParkId::from("1")));
        let popup = ctl.view().popup().unwrap();
        assert_eq!(
            popup.to_html(),
            "<b>Grandview Park</b><br/>1200 Commercial Dr<br/><br/>Playground<br/>"
        );
        assert!(ctl.close_popup());
        assert_eq!(ctl.view().selection(), &Selection::None);
    }

    #[test]
    fn parks_load_while_facilities_stall() {
        let api = ScriptedApi::default()
            .with_stalled_facilities()
            .with_parks(Ok(vec![playground_park()]));
        let ctl = ParkMapController::new(api);
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut mount = pin!(ctl.mount());
        for _ in 0..5 {
            assert!(mount.as_mut().poll(&mut cx).is_pending());
        }
        assert_eq!(ctl.api.parks_calls.get(), 1);
        assert_eq!(ctl.view().catalog().len(), 1);
        assert_eq!(ctl.view().visible().ids(), &[ParkId::from("1")]);
        assert!(ctl.view().checkboxes().is_empty());
    }

    #[test]
    fn listener_sees_checkbox_before_filter_response() {
        let api = ScriptedApi::default()
            .with_facilities(Ok(names(&["Playground"])))
            .with_parks(Ok(vec![playground_park()]))
            .with_filtered(Ok(vec![ParkId::from(1i64)]));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let ctl = ParkMapController::new(api).with_listener(move |ctl| {
            log.borrow_mut().push(ctl.view().filters().active());
        });
        block_on(ctl.mount());
        assert_eq!(seen.borrow().len(), 2);
        seen.borrow_mut().clear();

        let request = ctl.toggle("Playground");
        assert_eq!(*seen.borrow(), vec![names(&["Playground"])]);
        assert!(ctl.api.requests.borrow().is_empty());

        assert!(block_on(request));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(ctl.api.requests.borrow().len(), 1);
    }

    #[test]
    fn unchanged_selection_is_not_reported() {
        let api = ScriptedApi::default()
            .with_facilities(Ok(Vec::new()))
            .with_parks(Ok(vec![playground_park()]));
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let ctl = ParkMapController::new(api).with_listener(move |_| {
            counter.set(counter.get() + 1);
        });
        block_on(ctl.mount());
        let after_mount = calls.get();

        assert!(ctl.select(ParkId::from("1")));
        assert!(!ctl.select(ParkId::from("1")));
        assert!(!ctl.select(ParkId::from("99")));
        assert_eq!(calls.get(), after_mount + 1);
        assert!(ctl.close_popup());
        assert!(!ctl.close_popup());
        assert_eq!(calls.get(), after_mount + 2);
    }
}
