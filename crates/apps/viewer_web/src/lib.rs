use console_error_panic_hook::set_once;
use std::cell::RefCell;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use foundation::ParkId;
use mapview::ParkMapController;

pub mod config;
pub mod http;
mod logging;
pub mod map_ffi;

use config::ViewerConfig;
use http::GlooParkApi;

type Controller = ParkMapController<GlooParkApi>;

thread_local! {
    static VIEWER: RefCell<Option<Controller>> = const { RefCell::new(None) };
}

fn controller() -> Option<Controller> {
    VIEWER.with(|viewer| viewer.borrow().clone())
}

fn render(ctl: &Controller) {
    let snapshot = map_ffi::snapshot(&ctl.view());
    if let Err(err) = map_ffi::push(&snapshot) {
        warn!("failed to push view to the map: {err}");
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Boots the viewer: configures logging and the map, then issues the two
/// startup loads (facility types and parks) together. Every applied change
/// re-renders through the controller's listener.
#[wasm_bindgen]
pub fn start_viewer(config_json: &str) -> Result<(), JsValue> {
    let config = ViewerConfig::from_json(config_json).map_err(to_js)?;
    logging::init(&config.log_level);
    map_ffi::init_map(&config).map_err(to_js)?;

    let ctl = Controller::new(GlooParkApi::new(config.endpoints())).with_listener(render);
    VIEWER.with(|viewer| {
        *viewer.borrow_mut() = Some(ctl.clone());
    });
    info!(parks_url = %config.parks_url, "park map viewer started");

    spawn_local(async move { ctl.mount().await });
    Ok(())
}

/// Checkbox flip from the filter bar.
#[wasm_bindgen]
pub fn toggle_facility(name: &str) {
    let Some(ctl) = controller() else {
        warn!("toggle_facility called before start_viewer");
        return;
    };
    let request = ctl.toggle(name);
    spawn_local(async move {
        request.await;
    });
}

/// Checkbox change event carrying the new value.
#[wasm_bindgen]
pub fn facility_checked(name: &str, checked: bool) {
    let Some(ctl) = controller() else {
        warn!("facility_checked called before start_viewer");
        return;
    };
    let request = ctl.set_checked(name, checked);
    spawn_local(async move {
        request.await;
    });
}

#[wasm_bindgen]
pub fn marker_clicked(id: &str) {
    let Some(ctl) = controller() else {
        return;
    };
    ctl.select(ParkId::from(id));
}

#[wasm_bindgen]
pub fn popup_closed() {
    let Some(ctl) = controller() else {
        return;
    };
    ctl.close_popup();
}

#[wasm_bindgen]
pub fn checkboxes_json() -> Result<String, JsValue> {
    let Some(ctl) = controller() else {
        return Ok("[]".to_string());
    };
    let items = map_ffi::checkboxes(&ctl.view());
    serde_json::to_string(&items).map_err(to_js)
}

#[wasm_bindgen]
pub fn markers_json() -> Result<String, JsValue> {
    let Some(ctl) = controller() else {
        return Ok("[]".to_string());
    };
    let markers = map_ffi::markers(&ctl.view());
    serde_json::to_string(&markers).map_err(to_js)
}

/// HTML of the open popup, if any.
#[wasm_bindgen]
pub fn popup_html() -> Option<String> {
    let ctl = controller()?;
    let popup = map_ffi::popup(&ctl.view());
    popup.map(|p| p.html)
}
