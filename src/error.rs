use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid field config: {0}")]
    InvalidConfig(String),

    #[error("no global `window` exists")]
    NoWindow,

    #[error("canvas element `{0}` not found")]
    CanvasNotFound(String),

    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    #[error("draw call failed: {0}")]
    Draw(String),

    #[error("frame scheduling failed: {0}")]
    Scheduler(String),
}

impl Error {
    pub(crate) fn draw(value: JsValue) -> Self {
        Error::Draw(format!("{:?}", value))
    }

    pub(crate) fn scheduler(value: JsValue) -> Self {
        Error::Scheduler(format!("{:?}", value))
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
