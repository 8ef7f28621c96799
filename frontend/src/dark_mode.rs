//! Dark/light display mode across the themed regions of a page.
//!
//! `apply_mode` is absolute: it puts every region into the state for the
//! given mode and can be called any number of times. Flipping only happens
//! in `toggle_mode`, which reads the current mode once from the body marker.

use std::rc::Rc;
use web_sys::{Document, HtmlElement};

use crate::{
    dom,
    error::Result,
    preferences::{PreferenceBackend, PreferenceStore},
    regions::{IconPair, PageRegistry},
    types::DisplayMode,
};

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const TOGGLE_ID: &str = "style-mode-toggle";

pub struct StyleModeController<B> {
    document: Document,
    registry: PageRegistry,
    store: PreferenceStore<B>,
}

impl<B: PreferenceBackend> StyleModeController<B> {
    pub fn new(document: Document, registry: PageRegistry, store: PreferenceStore<B>) -> Self {
        Self {
            document,
            registry,
            store,
        }
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    pub fn current_mode(&self) -> DisplayMode {
        match self.body() {
            Some(body) if body.class_list().contains(DARK_MODE_CLASS) => DisplayMode::Dark,
            _ => DisplayMode::Light,
        }
    }

    /// Put the page into `mode` without touching the stored preference.
    pub fn apply_mode(&self, mode: DisplayMode) {
        let dark = mode.is_dark();

        for region in &self.registry.regions {
            let Some(element) = dom::by_id(&self.document, &region.id) else {
                continue;
            };

            let (add, remove) = region.class_changes(dark);
            for class in remove {
                dom::set_class(&element, class, false);
            }
            for class in add {
                dom::set_class(&element, class, true);
            }
        }

        let (moon_display, sun_display) = IconPair::displays(dark);
        for icons in &self.registry.icons {
            // a lone icon would leave the pair half-switched
            if let (Some(moon), Some(sun)) = (
                dom::by_id(&self.document, &icons.moon),
                dom::by_id(&self.document, &icons.sun),
            ) {
                dom::set_display(&moon, moon_display);
                dom::set_display(&sun, sun_display);
            }
        }

        if let Some(body) = self.body() {
            dom::set_class(&body, DARK_MODE_CLASS, dark);
        }
    }

    /// Apply `mode` and remember it.
    pub fn set_mode(&self, mode: DisplayMode) {
        self.apply_mode(mode);
        self.store.set(mode);
    }

    /// Switch to the opposite of the current mode, returning the new one.
    pub fn toggle_mode(&self) -> DisplayMode {
        let target = self.current_mode().flipped();
        self.set_mode(target);
        target
    }

    /// Page load: enter dark mode when it was stored, without writing back.
    pub fn apply_stored_mode(&self) {
        if self.store.get() == Some(DisplayMode::Dark) {
            self.apply_mode(DisplayMode::Dark);
        }
    }

    pub fn store(&self) -> &PreferenceStore<B> {
        &self.store
    }
}

/// Apply the stored mode and wire `#style-mode-toggle`, when the page has one.
pub fn install<B: PreferenceBackend + 'static>(
    controller: Rc<StyleModeController<B>>,
) -> Result<()> {
    controller.apply_stored_mode();

    let Some(toggle) = dom::by_id(&controller.document, TOGGLE_ID) else {
        return Ok(());
    };

    dom::listen(&toggle, "click", move |_| {
        controller.toggle_mode();
    })
}
