//! Show/hide toggles for comment edit and reply forms and the shop's
//! "read more" description.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::{dom, error::Result};

const HIDDEN: &str = "none";
const SHOWN: &str = "block";

/// Display value a panel switches to from `current`.
pub fn next_display(current: &str) -> &'static str {
    match current {
        "" | HIDDEN => SHOWN,
        _ => HIDDEN,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelLocator {
    /// The element right after the trigger.
    NextSibling,
    /// `prefix` followed by the trigger's `attr` value, e.g. `commentFormEdit12`.
    DataId {
        attr: &'static str,
        prefix: &'static str,
    },
    /// `DataId` when the trigger carries `attr`, the next sibling otherwise.
    DataIdOrSibling {
        attr: &'static str,
        prefix: &'static str,
    },
    Id(&'static str),
}

impl PanelLocator {
    pub fn locate(&self, document: &Document, trigger: &Element) -> Option<HtmlElement> {
        match self {
            PanelLocator::NextSibling => trigger
                .next_element_sibling()
                .and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            PanelLocator::DataId { attr, prefix } => {
                let id = trigger.get_attribute(attr)?;
                dom::by_id(document, &format!("{prefix}{id}"))
            }
            PanelLocator::DataIdOrSibling { attr, prefix } => {
                if trigger.has_attribute(attr) {
                    let by_id = PanelLocator::DataId {
                        attr: *attr,
                        prefix: *prefix,
                    };
                    by_id.locate(document, trigger)
                } else {
                    PanelLocator::NextSibling.locate(document, trigger)
                }
            }
            PanelLocator::Id(id) => dom::by_id(document, id),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CollapsiblePanel {
    pub trigger_selector: &'static str,
    pub locator: PanelLocator,
    pub active_class: Option<&'static str>,
    /// Trigger text while expanded and while collapsed.
    pub labels: Option<(&'static str, &'static str)>,
}

impl CollapsiblePanel {
    /// Blog markup names the form after the comment, reviews markup puts it
    /// right after the button.
    pub fn edit_form() -> Self {
        Self {
            trigger_selector: ".edit-comment-button",
            locator: PanelLocator::DataIdOrSibling {
                attr: "data-comment-id",
                prefix: "commentFormEdit",
            },
            active_class: Some("active"),
            labels: None,
        }
    }

    pub fn reply_form() -> Self {
        Self {
            trigger_selector: ".comment-reply-button",
            locator: PanelLocator::NextSibling,
            active_class: Some("comment-reply-button-blue"),
            labels: None,
        }
    }

    pub fn read_more() -> Self {
        Self {
            trigger_selector: "#readMoreBtn",
            locator: PanelLocator::Id("fullDescription"),
            active_class: None,
            labels: Some(("Read less", "Read more")),
        }
    }

    pub fn builtin() -> [Self; 3] {
        [
            Self::edit_form(),
            Self::reply_form(),
            Self::read_more(),
        ]
    }

    /// Flip the panel tied to `trigger` and the trigger's active class.
    ///
    /// The two flips are independent: a trigger without a panel still
    /// changes its own styling.
    pub fn toggle(&self, document: &Document, trigger: &Element) {
        if let Some(panel) = self.locator.locate(document, trigger) {
            let display = next_display(&dom::inline_display(&panel));
            dom::set_display(&panel, display);

            if let Some((expanded, collapsed)) = self.labels {
                let label = if display == SHOWN { expanded } else { collapsed };
                trigger.set_text_content(Some(label));
            }
        }

        if let Some(class) = self.active_class {
            dom::toggle_class(trigger, class);
        }
    }

    pub fn install(self, document: &Document) -> Result<()> {
        for trigger in dom::query_all(document, self.trigger_selector) {
            let panel = self.clone();
            let document = document.clone();
            let target = trigger.clone();
            dom::listen(&trigger, "click", move |_| {
                panel.toggle(&document, &target);
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_hidden_becomes_block() {
        assert_eq!(next_display(""), "block");
        assert_eq!(next_display("none"), "block");
    }

    #[test]
    fn anything_visible_becomes_hidden() {
        assert_eq!(next_display("block"), "none");
        assert_eq!(next_display("flex"), "none");
    }

    #[test]
    fn two_steps_return_to_a_hidden_state() {
        assert_eq!(next_display(next_display("none")), "none");
        assert_eq!(next_display(next_display("block")), "block");
    }

    #[test]
    fn edit_form_covers_both_markups() {
        let edit = CollapsiblePanel::edit_form();
        assert_eq!(edit.trigger_selector, ".edit-comment-button");
        assert!(matches!(
            edit.locator,
            PanelLocator::DataIdOrSibling {
                attr: "data-comment-id",
                prefix: "commentFormEdit"
            }
        ));
    }
}
