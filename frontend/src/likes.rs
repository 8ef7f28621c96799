//! Review like/unlike.
//!
//! Count text and liked flag come from the server response only; the page
//! never computes them.

use gloo_console::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement};

use crate::{
    api, dom,
    error::{Error, Result},
    in_flight::InFlight,
    types::LikeResponse,
};

pub const LIKE_FORM_SELECTOR: &str = ".like-form";
pub const LIKE_BUTTON_SELECTOR: &str = "button[name=\"like-btn\"]";
pub const STATS_SELECTOR: &str = ".likes-button h5";
const STATS_CONTAINER_SELECTOR: &str = ".likes-button";
const STATS_HEADING_SELECTOR: &str = "h5";
pub const LIKED_CLASS: &str = "unlike";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeRequest {
    pub url: String,
    pub review_id: String,
    pub csrf_token: String,
}

/// Whether the page has a single like form, the only case where the
/// document-wide like markup unambiguously belongs to it.
fn single_form(document: &Document) -> bool {
    dom::query_all(document, LIKE_FORM_SELECTOR).len() == 1
}

fn within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn like_button(document: &Document, form: &Element) -> Option<Element> {
    within(form, LIKE_BUTTON_SELECTOR).or_else(|| {
        single_form(document)
            .then(|| dom::query(document, LIKE_BUTTON_SELECTOR))
            .flatten()
    })
}

fn likes_stats(document: &Document, form: &Element) -> Option<Element> {
    form.closest(STATS_CONTAINER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|container| within(&container, STATS_HEADING_SELECTOR))
        .or_else(|| within(form, STATS_SELECTOR))
        .or_else(|| {
            single_form(document)
                .then(|| dom::query(document, STATS_SELECTOR))
                .flatten()
        })
}

impl LikeRequest {
    pub fn from_form(document: &Document, form: &Element) -> Result<Self> {
        let url = form.get_attribute("action").ok_or(Error::MissingAttribute {
            element: LIKE_FORM_SELECTOR,
            attribute: "action",
        })?;
        let review_id = like_button(document, form)
            .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
            .map(|b| b.value())
            .ok_or_else(|| Error::MissingElement(LIKE_BUTTON_SELECTOR.to_string()))?;

        Ok(Self {
            url,
            review_id,
            csrf_token: dom::csrf_token(document)?,
        })
    }
}

/// Mirror the server's like state onto the markup of `form`'s review.
/// Returns whether the page changed.
pub fn reconcile_like(
    document: &Document,
    form: &Element,
    outcome: &Result<LikeResponse>,
) -> bool {
    let state = match outcome {
        Ok(state) => state,
        Err(e) => {
            error!("could not update like:", e.to_string());
            return false;
        }
    };

    if let Some(stats) = likes_stats(document, form) {
        stats.set_text_content(Some(&state.likes_stats_display));
    }

    if let Some(button) = like_button(document, form) {
        dom::set_class(&button, LIKED_CLASS, state.liked);
    }

    true
}

pub fn install(document: &Document) -> Result<()> {
    for form in dom::query_all(document, LIKE_FORM_SELECTOR) {
        let in_flight = InFlight::default();
        let document = document.clone();
        let target = form.clone();

        dom::listen(&form, "submit", move |e| {
            e.prevent_default();

            let Some(guard) = in_flight.try_begin() else {
                debug!("like already pending, ignoring submit");
                return;
            };

            let request = match LikeRequest::from_form(&document, &target) {
                Ok(request) => request,
                Err(e) => {
                    error!("cannot like review:", e.to_string());
                    return;
                }
            };
            let document = document.clone();
            let form = target.clone();

            spawn_local(async move {
                let outcome =
                    api::like_review(&request.url, &request.csrf_token, &request.review_id).await;
                reconcile_like(&document, &form, &outcome);
                drop(guard);
            });
        })?;
    }

    Ok(())
}
