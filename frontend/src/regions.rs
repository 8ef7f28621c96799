//! Page region registry: which themed elements exist on the current page.
//!
//! A page either embeds its own registry as JSON in
//! `<script type="application/json" id="themed-regions">`, or names one of
//! the built-in presets with `<body data-page="...">`.

use gloo_console::error;
use serde::Deserialize;
use web_sys::Document;

use crate::error::{Error, Result};

pub const REGISTRY_SCRIPT_ID: &str = "themed-regions";
pub const PAGE_ATTRIBUTE: &str = "data-page";

const NAVBAR_DARK: &[&str] = &["navbar-dark", "bg-dark"];
const NAVBAR_LIGHT: &[&str] = &["navbar-light", "bg-light"];
const OUTLINE_DARK: &[&str] = &["btn-outline-light"];
const OUTLINE_LIGHT: &[&str] = &["btn-outline-dark"];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ThemedRegion {
    pub id: String,
    #[serde(default)]
    pub dark_classes: Vec<String>,
    #[serde(default)]
    pub light_classes: Vec<String>,
}

impl ThemedRegion {
    fn new(id: &str, dark: &[&str], light: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            dark_classes: dark.iter().map(|c| c.to_string()).collect(),
            light_classes: light.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn navbar(id: &str) -> Self {
        Self::new(id, NAVBAR_DARK, NAVBAR_LIGHT)
    }

    fn outline_button(id: &str) -> Self {
        Self::new(id, OUTLINE_DARK, OUTLINE_LIGHT)
    }

    /// Classes to add and to remove when entering `dark` (or light).
    pub fn class_changes(&self, dark: bool) -> (&[String], &[String]) {
        if dark {
            (self.dark_classes.as_slice(), self.light_classes.as_slice())
        } else {
            (self.light_classes.as_slice(), self.dark_classes.as_slice())
        }
    }
}

/// Moon and sun icons, exactly one visible at a time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IconPair {
    pub moon: String,
    pub sun: String,
}

impl IconPair {
    fn new(moon: &str, sun: &str) -> Self {
        Self {
            moon: moon.to_string(),
            sun: sun.to_string(),
        }
    }

    /// `(moon, sun)` display values for a mode.
    pub fn displays(dark: bool) -> (&'static str, &'static str) {
        if dark {
            ("none", "block")
        } else {
            ("block", "none")
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Accounts,
    Blog,
    Reviews,
    Shop,
    Generic,
}

impl PageKind {
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("accounts") => PageKind::Accounts,
            Some("blog") => PageKind::Blog,
            Some("reviews") => PageKind::Reviews,
            Some("shop") => PageKind::Shop,
            _ => PageKind::Generic,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageRegistry {
    #[serde(default)]
    pub regions: Vec<ThemedRegion>,
    #[serde(default)]
    pub icons: Vec<IconPair>,
}

impl PageRegistry {
    pub fn preset(kind: PageKind) -> Self {
        let (regions, icons) = match kind {
            PageKind::Accounts => (
                vec![ThemedRegion::new("navbar-accounts", NAVBAR_DARK, &[])],
                vec![IconPair::new("moon-button-accounts", "sun-button-accounts")],
            ),
            PageKind::Blog => (
                vec![
                    ThemedRegion::navbar("upper-navbar"),
                    ThemedRegion::navbar("lower-navbar"),
                ],
                vec![IconPair::new("moon-button-blog", "sun-button-blog")],
            ),
            PageKind::Reviews => (
                vec![
                    ThemedRegion::navbar("upper-navbar"),
                    ThemedRegion::navbar("lower-navbar"),
                    ThemedRegion::outline_button("btn-navbar-signup"),
                    ThemedRegion::outline_button("btn-navbar-logout"),
                ],
                vec![IconPair::new("moon-button", "sun-button")],
            ),
            PageKind::Shop => (
                vec![
                    ThemedRegion::navbar("upper-navbar-shop"),
                    ThemedRegion::navbar("lower-navbar-shop"),
                    ThemedRegion::new("related-products-section", &["bg-dark"], &["bg-light"]),
                    ThemedRegion::outline_button("btn-cart"),
                    ThemedRegion::outline_button("readMoreBtn"),
                ],
                vec![IconPair::new("moon-button", "sun-button")],
            ),
            PageKind::Generic => (
                vec![
                    ThemedRegion::navbar("upper-navbar"),
                    ThemedRegion::navbar("lower-navbar"),
                ],
                vec![IconPair::new("moon-button", "sun-button")],
            ),
        };

        Self { regions, icons }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json_wasm::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Registry for the current page, embedded JSON first, then the preset.
    pub fn for_page(document: &Document) -> Self {
        if let Some(script) = document.get_element_by_id(REGISTRY_SCRIPT_ID) {
            let json = script.text_content().unwrap_or_default();
            match Self::from_json(&json) {
                Ok(registry) => return registry,
                Err(e) => error!("ignoring embedded themed regions:", e.to_string()),
            }
        }

        let page = document
            .body()
            .and_then(|b| b.get_attribute(PAGE_ATTRIBUTE));

        Self::preset(PageKind::from_attribute(page.as_deref()))
    }
}
