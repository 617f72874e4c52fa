//! Browser / webview glue.
//!
//! WASM builds reach the DOM through `web-sys`. Native builds render inside the
//! desktop webview, so DOM effects go through `document::eval` and the
//! session-scoped store is an in-process map that lives as long as the window.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use serde::Deserialize;

static LISTENER_SEQ: AtomicU64 = AtomicU64::new(0);

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

/// Window metrics the sections care about.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        // Desktop-first until the first measurement arrives.
        Self {
            width: 1280.0,
            scroll_y: 0.0,
        }
    }
}

const VIEWPORT_JS: &str = r#"
const key = await dioxus.recv();
const send = () => dioxus.send({ width: window.innerWidth, scroll_y: window.scrollY });
window[key] = send;
window.addEventListener("resize", send);
window.addEventListener("scroll", send, { passive: true });
send();
"#;

/// Installs one resize/scroll listener for the whole page and shares the
/// resulting signal with every section below.
pub fn provide_viewport() -> Signal<Viewport> {
    let viewport = use_signal(Viewport::default);
    let key = use_hook(|| {
        format!(
            "__dentalsiteViewport{}",
            LISTENER_SEQ.fetch_add(1, Ordering::Relaxed)
        )
    });

    let listen_key = key.clone();
    use_future(move || {
        let key = listen_key.clone();
        let mut viewport = viewport;
        async move {
            let mut channel = document::eval(VIEWPORT_JS);
            if channel.send(key).is_err() {
                return;
            }
            while let Ok(next) = channel.recv::<Viewport>().await {
                if *viewport.peek() != next {
                    viewport.set(next);
                }
            }
        }
    });

    use_drop(move || {
        let key = serde_json::to_string(&key).unwrap_or_default();
        document::eval(&format!(
            "const f = window[{key}]; if (f) {{ window.removeEventListener('resize', f); \
             window.removeEventListener('scroll', f); delete window[{key}]; }}"
        ));
    });

    use_context_provider(|| viewport)
}

/// The shared viewport signal; a static default outside a providing shell.
pub fn use_viewport() -> Signal<Viewport> {
    use_hook(|| {
        try_consume_context::<Signal<Viewport>>()
            .unwrap_or_else(|| Signal::new(Viewport::default()))
    })
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    fn session_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }

    pub fn session_get(key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok().flatten()
    }

    pub fn session_set(key: &str, value: &str) {
        if let Some(storage) = session_storage() {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!(?err, key, "session storage write failed");
            }
        }
    }

    pub fn session_remove(key: &str) {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }

    /// Smooth-scrolls so the element's top lands `offset_px` below the viewport top.
    pub fn scroll_to_element(id: &str, offset_px: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
            - offset_px;
        smooth_scroll(&window, top.max(0.0));
    }

    pub fn scroll_to_top() {
        if let Some(window) = web_sys::window() {
            smooth_scroll(&window, 0.0);
        }
    }

    fn smooth_scroll(window: &web_sys::Window, top: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    pub fn post_to_iframe(frame_id: &str, message: &str) {
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(frame_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlIFrameElement>().ok())
            .and_then(|frame| frame.content_window());
        if let Some(target) = target {
            let _ = target.post_message(&JsValue::from_str(message), "*");
        }
    }

    /// Leaves the site for an absolute link.
    pub fn open_external(url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                tracing::warn!(?err, url, "could not follow external link");
            }
        }
    }

    pub fn current_hash() -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let trimmed = hash.trim_start_matches('#').trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    type HistoryCallback = Rc<RefCell<Box<dyn FnMut(Option<String>)>>>;

    /// Keeps `popstate`/`hashchange` listeners attached until dropped.
    pub struct HistoryListener {
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    const HISTORY_EVENTS: [&str; 2] = ["popstate", "hashchange"];

    pub fn listen_history(callback: impl FnMut(Option<String>) + 'static) -> HistoryListener {
        let callback: HistoryCallback = Rc::new(RefCell::new(Box::new(callback)));
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            (callback.borrow_mut())(current_hash());
        });
        if let Some(window) = web_sys::window() {
            for event in HISTORY_EVENTS {
                let _ = window
                    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }
        HistoryListener { closure }
    }

    impl Drop for HistoryListener {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                for event in HISTORY_EVENTS {
                    let _ = window.remove_event_listener_with_callback(
                        event,
                        self.closure.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use dioxus::prelude::document;
    use once_cell::sync::Lazy;

    static SESSION: Lazy<Mutex<HashMap<String, String>>> = Lazy::new(Default::default);

    fn with_session<R>(f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut guard = SESSION.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    pub fn session_get(key: &str) -> Option<String> {
        with_session(|map| map.get(key).cloned())
    }

    pub fn session_set(key: &str, value: &str) {
        with_session(|map| map.insert(key.to_string(), value.to_string()));
    }

    pub fn session_remove(key: &str) {
        with_session(|map| map.remove(key));
    }

    fn js_string(value: &str) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
    }

    pub fn scroll_to_element(id: &str, offset_px: f64) {
        document::eval(&format!(
            "const el = document.getElementById({id}); if (el) {{ \
             const top = el.getBoundingClientRect().top + window.scrollY - {offset_px}; \
             window.scrollTo({{ top: Math.max(top, 0), behavior: 'smooth' }}); }}",
            id = js_string(id)
        ));
    }

    pub fn scroll_to_top() {
        document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
    }

    pub fn post_to_iframe(frame_id: &str, message: &str) {
        document::eval(&format!(
            "const f = document.getElementById({id}); \
             if (f && f.contentWindow) {{ f.contentWindow.postMessage({msg}, '*'); }}",
            id = js_string(frame_id),
            msg = js_string(message)
        ));
    }

    /// The webview hands new-window requests to the system browser.
    pub fn open_external(url: &str) {
        document::eval(&format!(
            "window.open({url}, '_blank', 'noopener');",
            url = js_string(url)
        ));
    }

    /// The desktop webview has no address bar, so there is never a fragment.
    pub fn current_hash() -> Option<String> {
        None
    }

    pub struct HistoryListener;

    pub fn listen_history(_callback: impl FnMut(Option<String>) + 'static) -> HistoryListener {
        HistoryListener
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn session_map_round_trip() {
            session_set("platform-test", "services");
            assert_eq!(session_get("platform-test").as_deref(), Some("services"));
            session_remove("platform-test");
            assert_eq!(session_get("platform-test"), None);
        }
    }
}
