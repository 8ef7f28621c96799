//! Browser behaviour for the server-rendered fitfoodfeed pages.
//!
//! One wasm module serves every page. On load it reads the page's region
//! registry, restores the stored display mode and wires whichever of the
//! style toggle, collapsible panels, delete buttons and like forms the
//! markup contains.

use gloo_console::error;
use std::rc::Rc;
use web_sys::Document;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod comments;
pub mod dark_mode;
pub mod dom;
pub mod error;
pub mod in_flight;
pub mod likes;
pub mod panel;
pub mod preferences;
pub mod regions;
pub mod types;

use crate::{
    dark_mode::StyleModeController,
    panel::CollapsiblePanel,
    preferences::{LocalStorage, PreferenceStore},
    regions::PageRegistry,
};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    let document = gloo_utils::document();

    if !dom::is_loading(&document) {
        install(&document);
        return;
    }

    let ready = document.clone();
    if let Err(e) = dom::listen(&document, "DOMContentLoaded", move |_| install(&ready)) {
        error!("could not wait for DOMContentLoaded:", e.to_string());
    }
}

/// Wire every behaviour present in `document`.
///
/// A behaviour that fails to install is logged and the others still run.
pub fn install(document: &Document) {
    let controller = Rc::new(StyleModeController::new(
        document.clone(),
        PageRegistry::for_page(document),
        PreferenceStore::new(LocalStorage::new()),
    ));

    let mut results = vec![dark_mode::install(controller)];
    results.extend(CollapsiblePanel::builtin().map(|p| p.install(document)));
    results.push(comments::install(document));
    results.push(likes::install(document));

    for e in results.into_iter().filter_map(Result::err) {
        error!("page setup:", e.to_string());
    }
}
