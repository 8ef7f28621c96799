//! Comment deletion.
//!
//! The click is split into plan (read the button, ask the user), request
//! and reconcile, so the DOM is only patched once the server confirmed.

use gloo_console::{debug, error};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::{
    api, dom,
    error::{Error, Result},
    in_flight::InFlight,
};

pub const DELETE_BUTTON_SELECTOR: &str = ".delete-comment-button";
pub const COUNTER_SELECTOR: &str = ".comment-counter";
pub const CONFIRM_MESSAGE: &str = "Are you sure you want to delete this comment?";

/// Counter value after one deletion, never below zero.
///
/// Like the markup's own integer parsing, only the leading digits count;
/// text without any reads as zero.
pub fn decrement_counter(text: &str) -> u32 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse::<u32>().map_or(0, |n| n.saturating_sub(1))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    pub url: String,
    pub comment_id: String,
    pub csrf_token: String,
}

impl DeleteRequest {
    pub fn from_button(document: &Document, button: &Element) -> Result<Self> {
        let url = button
            .get_attribute("data-href")
            .ok_or(Error::MissingAttribute {
                element: DELETE_BUTTON_SELECTOR,
                attribute: "data-href",
            })?;
        let comment_id = button
            .get_attribute("data-comment-id")
            .ok_or(Error::MissingAttribute {
                element: DELETE_BUTTON_SELECTOR,
                attribute: "data-comment-id",
            })?;

        Ok(Self {
            url,
            comment_id,
            csrf_token: dom::csrf_token(document)?,
        })
    }

    pub fn element_id(&self) -> String {
        format!("comment-{}", self.comment_id)
    }
}

/// Build the request for `button` if the user confirms, `None` if declined.
pub fn plan_delete<F>(
    document: &Document,
    button: &Element,
    confirm: F,
) -> Result<Option<DeleteRequest>>
where
    F: FnOnce(&str) -> bool,
{
    let request = DeleteRequest::from_button(document, button)?;

    if !confirm(CONFIRM_MESSAGE) {
        return Ok(None);
    }

    Ok(Some(request))
}

/// Patch the page after the server answered. Returns whether it changed.
pub fn reconcile_delete(
    document: &Document,
    request: &DeleteRequest,
    outcome: &Result<()>,
) -> bool {
    if let Err(e) = outcome {
        error!("could not delete comment", request.comment_id.as_str(), e.to_string());
        return false;
    }

    if let Some(comment) = document.get_element_by_id(&request.element_id()) {
        comment.remove();
    }

    if let Some(counter) = dom::query(document, COUNTER_SELECTOR) {
        let current = counter.text_content().unwrap_or_default();
        counter.set_text_content(Some(&decrement_counter(&current).to_string()));
    }

    true
}

fn browser_confirm(message: &str) -> bool {
    gloo_utils::window()
        .confirm_with_message(message)
        .unwrap_or(false)
}

pub fn install(document: &Document) -> Result<()> {
    for button in dom::query_all(document, DELETE_BUTTON_SELECTOR) {
        let in_flight = InFlight::default();
        let document = document.clone();
        let target = button.clone();

        dom::listen(&button, "click", move |e| {
            e.prevent_default();

            if in_flight.is_pending() {
                debug!("delete already pending, ignoring click");
                return;
            }

            let request = match plan_delete(&document, &target, browser_confirm) {
                Ok(Some(request)) => request,
                Ok(None) => return,
                Err(e) => {
                    error!("cannot delete comment:", e.to_string());
                    return;
                }
            };

            let Some(guard) = in_flight.try_begin() else {
                return;
            };
            let document = document.clone();

            spawn_local(async move {
                let outcome = api::delete_comment(&request.url, &request.csrf_token).await;
                reconcile_delete(&document, &request, &outcome);
                drop(guard);
            });
        })?;
    }

    Ok(())
}
