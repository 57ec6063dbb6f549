//! Load-once external script management.
//!
//! ERROR HANDLING
//! ==============
//! A script URL either reaches its load event or fails its error event; a
//! failure is terminal for that call and surfaces as [`LoadError`].
//! Requests for a URL already present in the document resolve immediately
//! without appending a second element. No retries and no timeout: callers
//! degrade on the first failure, and a stalled fetch stalls its caller
//! (accepted, the browser's own network timeouts bound it).

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Terminal failure from a script load attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The browser reported a network or parse failure for the script.
    #[error("script failed to load: {url}")]
    Script { url: String },
    /// No usable document to mount the script into.
    #[error("no document available")]
    NoDocument,
    /// The element could not be created or attached.
    #[error("could not mount script element")]
    Mount,
}

/// Ensure `url` is loaded and evaluated at most once per page view.
///
/// Resolves immediately when a matching `<script>` element already exists,
/// whatever inserted it.
///
/// # Errors
///
/// Returns [`LoadError`] when the document is unavailable, the element
/// cannot be mounted, or the script fails to load.
pub async fn load_script_once(url: &str) -> Result<(), LoadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(LoadError::NoDocument)?;

    let selector = format!("script[src='{url}']");
    if let Ok(Some(_)) = document.query_selector(&selector) {
        return Ok(());
    }

    let script = document
        .create_element("script")
        .map_err(|_| LoadError::Mount)?;
    script
        .set_attribute("src", url)
        .map_err(|_| LoadError::Mount)?;

    // One sender, first event wins; load and error cannot both claim it.
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_load = Rc::clone(&tx);
    let on_load = Closure::wrap(Box::new(move || {
        if let Some(tx) = tx_load.borrow_mut().take() {
            let _ = tx.send(true);
        }
    }) as Box<dyn FnMut()>);
    let tx_error = Rc::clone(&tx);
    let on_error = Closure::wrap(Box::new(move || {
        if let Some(tx) = tx_error.borrow_mut().take() {
            let _ = tx.send(false);
        }
    }) as Box<dyn FnMut()>);

    script
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .map_err(|_| LoadError::Mount)?;
    script
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .map_err(|_| LoadError::Mount)?;
    on_load.forget();
    on_error.forget();

    if let Some(head) = document.head() {
        head.append_child(&script).map_err(|_| LoadError::Mount)?;
    } else if let Some(body) = document.body() {
        body.append_child(&script).map_err(|_| LoadError::Mount)?;
    } else {
        return Err(LoadError::Mount);
    }

    match rx.await {
        Ok(true) => Ok(()),
        _ => Err(LoadError::Script {
            url: url.to_owned(),
        }),
    }
}
