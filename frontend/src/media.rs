use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use crate::error::BrowserError;

/// Starts playback and waits for the browser to accept it. Autoplay policy
/// rejections come back as `BrowserError::Js`.
pub async fn play(media: &HtmlMediaElement) -> Result<(), BrowserError> {
    let promise = media.play()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Switches to `src` if needed and plays from the start.
pub async fn play_from_start(media: &HtmlMediaElement, src: &str) -> Result<(), BrowserError> {
    if !media.src().ends_with(src) {
        media.set_src(src);
    }
    media.set_current_time(0.0);
    play(media).await
}
