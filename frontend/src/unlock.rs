//! The "gift unlocked" marker is a plain cookie. Its presence is all that
//! matters; the value is never inspected.

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config;
use crate::error::BrowserError;

pub fn unlock_cookie() -> String {
    format!(
        "{}=1; Path=/; Max-Age={}; SameSite=Lax",
        config::UNLOCK_COOKIE,
        config::UNLOCK_MAX_AGE_SECS
    )
}

/// Looks for the marker in a `document.cookie` style string.
pub fn has_unlock_marker(cookies: &str) -> bool {
    cookies
        .split(';')
        .map(str::trim)
        .map(|pair| pair.split_once('=').map_or(pair, |(name, _)| name))
        .any(|name| name == config::UNLOCK_COOKIE)
}

fn html_document() -> Result<HtmlDocument, BrowserError> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    let document = window.document().ok_or(BrowserError::NoDocument)?;
    document
        .dyn_into::<HtmlDocument>()
        .map_err(|_| BrowserError::NoCookieJar)
}

pub fn mark_unlocked() -> Result<(), BrowserError> {
    html_document()?.set_cookie(&unlock_cookie())?;
    info!("Gift unlocked for {} seconds", config::UNLOCK_MAX_AGE_SECS);
    Ok(())
}

pub fn is_unlocked() -> bool {
    match html_document().and_then(|doc| doc.cookie().map_err(BrowserError::from)) {
        Ok(cookies) => has_unlock_marker(&cookies),
        Err(e) => {
            warn!("Could not read unlock marker: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_cookie_attributes() {
        assert_eq!(
            unlock_cookie(),
            "gift_unlocked=1; Path=/; Max-Age=2592000; SameSite=Lax"
        );
    }

    #[test]
    fn test_marker_detection() {
        assert!(has_unlock_marker("gift_unlocked=1"));
        assert!(has_unlock_marker("theme=dark; gift_unlocked=1; lang=ru"));
        assert!(has_unlock_marker("gift_unlocked"));
        assert!(!has_unlock_marker(""));
        assert!(!has_unlock_marker("gift_unlocked_old=1; x=gift_unlocked"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn marker_survives_a_round_trip_through_document_cookie() {
        mark_unlocked().unwrap();
        assert!(is_unlocked());
    }
}
