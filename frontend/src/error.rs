use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why an answer was not accepted. The `Display` text is what gets shown
/// under the field, so every variant renders as a retry prompt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Missing(&'static str),

    #[error("{0}")]
    Incorrect(&'static str),

    #[error("Координаты не считались 😅")]
    MalformedCoordinate,

    #[error("Почти! Попробуй чуть ближе 💋")]
    OutsideRadius { distance_km: f64, radius_km: f64 },
}

/// Failures talking to the browser. None of these are fatal for the page.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("document does not expose a cookie jar")]
    NoCookieJar,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_radius_renders_retry_prompt() {
        let error = ValidationError::OutsideRadius {
            distance_km: 412.0,
            radius_km: 300.0,
        };
        assert_eq!(error.to_string(), "Почти! Попробуй чуть ближе 💋");
    }

    #[test]
    fn test_missing_renders_its_message() {
        let error = ValidationError::Missing("Выбери песню 🙂");
        assert_eq!(format!("{}", error), "Выбери песню 🙂");
    }

    #[test]
    fn test_browser_error_display() {
        assert_eq!(
            BrowserError::NoCookieJar.to_string(),
            "document does not expose a cookie jar"
        );
        assert!(BrowserError::Js("NotAllowedError".into())
            .to_string()
            .contains("NotAllowedError"));
    }
}
