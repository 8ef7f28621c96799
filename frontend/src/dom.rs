//! Thin helpers over `web_sys` for the lookups every page behaviour needs.
//!
//! Every lookup returns `Option` so a page that lacks an element simply
//! skips the work tied to it.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement};

use crate::error::{Error, Result};

const CSRF_SELECTOR: &str = "input[name=\"csrfmiddlewaretoken\"]";

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// Read the CSRF token the server renders into every form page.
pub fn csrf_token(document: &Document) -> Result<String> {
    query(document, CSRF_SELECTOR)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or(Error::MissingCsrfToken)
}

pub fn set_display(element: &HtmlElement, value: &str) {
    // the style declaration of a connected element never rejects `display`
    let _ = element.style().set_property("display", value);
}

pub fn inline_display(element: &HtmlElement) -> String {
    element
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    let list = element.class_list();
    let _ = if present {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

pub fn toggle_class(element: &Element, class: &str) {
    let _ = element.class_list().toggle(class);
}

/// `true` while the parser is still building the document.
pub fn is_loading(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .map_or(false, |state| state == "loading")
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}
