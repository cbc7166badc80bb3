//! Boundary to the host page's map widget and filter bar.
//!
//! Rust never touches the map SDK directly. The host installs a
//! `window.parkMap` object with the hooks below; missing hooks are no-ops so
//! the viewer keeps working (headless) while the page is still loading.

use mapview::ParkMapView;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::{MapCenter, ViewerConfig};

#[wasm_bindgen(inline_js = "
function __park_map_hook(name) {
    const host = (typeof window !== 'undefined') ? window.parkMap : undefined;
    if (!host || typeof host[name] !== 'function') return null;
    return host[name].bind(host);
}

export function park_map_init(init_json) {
    const hook = __park_map_hook('init');
    if (hook) hook(JSON.parse(init_json));
}

export function park_map_set_markers(markers_json) {
    const hook = __park_map_hook('setMarkers');
    if (hook) hook(JSON.parse(markers_json));
}

export function park_map_show_popup(id, html) {
    const hook = __park_map_hook('showPopup');
    if (hook) hook(id, html);
}

export function park_map_close_popup() {
    const hook = __park_map_hook('closePopup');
    if (hook) hook();
}

export function park_map_set_filters(filters_json) {
    const hook = __park_map_hook('setFilters');
    if (hook) hook(JSON.parse(filters_json));
}
")]
extern "C" {
    fn park_map_init(init_json: &str);
    fn park_map_set_markers(markers_json: &str);
    fn park_map_show_popup(id: &str, html: &str);
    fn park_map_close_popup();
    fn park_map_set_filters(filters_json: &str);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapInit {
    pub title: String,
    pub center: MapCenter,
    pub zoom: u8,
    pub height_px: u32,
    pub script_url: String,
}

impl MapInit {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            title: config.title.clone(),
            center: config.center,
            zoom: config.zoom,
            height_px: config.map_height_px,
            script_url: config.maps_script_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDto {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxDto {
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupDto {
    pub id: String,
    pub html: String,
}

pub fn markers(view: &ParkMapView) -> Vec<MarkerDto> {
    view.markers()
        .into_iter()
        .map(|m| MarkerDto {
            id: m.id.to_string(),
            lat: m.position.lat,
            lng: m.position.lng,
            title: m.title,
            selected: m.selected,
        })
        .collect()
}

pub fn checkboxes(view: &ParkMapView) -> Vec<CheckboxDto> {
    view.checkboxes()
        .into_iter()
        .map(|c| CheckboxDto {
            name: c.name,
            checked: c.checked,
        })
        .collect()
}

pub fn popup(view: &ParkMapView) -> Option<PopupDto> {
    view.popup().map(|p| PopupDto {
        id: p.id.to_string(),
        html: p.to_html(),
    })
}

pub fn init_map(config: &ViewerConfig) -> Result<(), serde_json::Error> {
    let init = serde_json::to_string(&MapInit::from_config(config))?;
    park_map_init(&init);
    Ok(())
}

/// Everything the host renders, detached from the view borrow so host hooks
/// may call back into the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub filters: Vec<CheckboxDto>,
    pub markers: Vec<MarkerDto>,
    pub popup: Option<PopupDto>,
}

pub fn snapshot(view: &ParkMapView) -> ViewSnapshot {
    ViewSnapshot {
        filters: checkboxes(view),
        markers: markers(view),
        popup: popup(view),
    }
}

/// Pushes the filter bar, markers and popup to the host.
pub fn push(snapshot: &ViewSnapshot) -> Result<(), serde_json::Error> {
    let filters = serde_json::to_string(&snapshot.filters)?;
    let markers = serde_json::to_string(&snapshot.markers)?;
    park_map_set_filters(&filters);
    park_map_set_markers(&markers);
    match &snapshot.popup {
        Some(p) => park_map_show_popup(&p.id, &p.html),
        None => park_map_close_popup(),
    }
    Ok(())
}
