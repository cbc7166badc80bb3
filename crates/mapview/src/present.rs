//! Pure presentation over view state: map markers and the info popup.

use foundation::{LatLng, ParkId};
use parks::{Park, ParkCatalog};
use tracing::debug;

use crate::selection::Selection;
use crate::visible::VisibleSet;

/// Label used for the washroom line in the popup.
pub const WASHROOMS_LABEL: &str = "Washrooms";

/// One map marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: ParkId,
    pub position: LatLng,
    pub title: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupLine {
    /// Separator between the address and the amenity list.
    Blank,
    Text(String),
}

/// Info popup contents for one park.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    pub id: ParkId,
    /// Rendered bold.
    pub name: String,
    pub address: String,
    pub body: Vec<PopupLine>,
}

impl PopupContent {
    pub fn for_park(park: &Park) -> Self {
        let mut body = Vec::new();
        if park.has_amenities() {
            body.push(PopupLine::Blank);
        }
        body.extend(park.facilities.iter().cloned().map(PopupLine::Text));
        if park.washrooms {
            body.push(PopupLine::Text(WASHROOMS_LABEL.to_string()));
        }
        Self {
            id: park.id.clone(),
            name: park.name.clone(),
            address: park.address.clone(),
            body,
        }
    }

    /// HTML fragment for the map widget's info window.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<b>{}</b><br/>{}",
            escape_html(&self.name),
            escape_html(&self.address)
        );
        for line in &self.body {
            match line {
                PopupLine::Blank => html.push_str("<br/><br/>"),
                PopupLine::Text(text) => {
                    html.push_str(&escape_html(text));
                    html.push_str("<br/>");
                }
            }
        }
        html
    }
}

/// One marker per visible id that resolves to a known park, in visible-set order.
pub fn markers(catalog: &ParkCatalog, visible: &VisibleSet, selection: &Selection) -> Vec<Marker> {
    visible
        .iter()
        .filter_map(|id| {
            let Some(park) = catalog.get(id) else {
                debug!(park = %id, "visible id has no park record; skipping marker");
                return None;
            };
            Some(Marker {
                id: park.id.clone(),
                position: park.position,
                title: park.name.clone(),
                selected: selection.is_selected(&park.id),
            })
        })
        .collect()
}

/// The popup for the selected park, if its marker is rendered.
pub fn popup(
    catalog: &ParkCatalog,
    visible: &VisibleSet,
    selection: &Selection,
) -> Option<PopupContent> {
    let id = selection.id()?;
    if !visible.contains(id) {
        return None;
    }
    catalog.get(id).map(PopupContent::for_park)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
