use wasm_bindgen::{JsCast, JsValue};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("javascript error {0}")]
    Js(String),
    #[error("request failed {0}")]
    Http(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("element {0} not found")]
    MissingElement(String),
    #[error("element {element} has no {attribute} attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("no csrfmiddlewaretoken field on this page")]
    MissingCsrfToken,
    #[error("invalid page configuration {0}")]
    Config(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));

        Error::Js(message)
    }
}
