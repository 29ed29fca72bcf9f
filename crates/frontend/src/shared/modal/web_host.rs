//! [`DialogHost`] backed by the browser document.

use super::host::{DialogHost, KeyHandler, KeyOutcome, KeyPress};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

/// Stateless handle; every call goes to the live `window.document`.
#[derive(Clone, Copy, Default)]
pub struct WebHost;

impl WebHost {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn body() -> Option<HtmlElement> {
        Self::document().and_then(|d| d.body())
    }
}

/// A `keydown` listener installed on `window`.
pub struct WebKeyListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl DialogHost for WebHost {
    type Node = Element;
    type KeyListener = WebKeyListener;

    fn active_element(&self) -> Option<Element> {
        Self::document().and_then(|d| d.active_element())
    }

    fn focus(&self, node: &Element) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            let _ = element.focus();
        }
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn contains(&self, container: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        container.contains(Some(node))
    }

    fn descendants(&self, container: &Element) -> Vec<Element> {
        let Ok(list) = container.query_selector_all("*") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn tab_index(&self, node: &Element) -> i32 {
        node.dyn_ref::<HtmlElement>()
            .map(|element| element.tab_index())
            .unwrap_or(-1)
    }

    fn is_hidden(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlElement>()
            .map(|element| element.hidden())
            .unwrap_or(false)
    }

    fn scroll_style(&self) -> Option<String> {
        Self::body().and_then(|body| body.style().get_property_value("overflow").ok())
    }

    fn set_scroll_style(&self, value: &str) {
        if let Some(body) = Self::body() {
            let _ = body.style().set_property("overflow", value);
        }
    }

    fn add_key_listener(&self, handler: KeyHandler) -> Option<WebKeyListener> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                let press = KeyPress {
                    key: keyboard_event.key(),
                    shift: keyboard_event.shift_key(),
                    repeat: keyboard_event.repeat(),
                };
                if handler(&press) == KeyOutcome::Handled {
                    event.prevent_default();
                }
            }
        }) as Box<dyn FnMut(_)>);

        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .ok()?;
        log::debug!("dialog keydown listener installed");
        Some(WebKeyListener { closure })
    }

    fn remove_key_listener(&self, listener: WebKeyListener) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "keydown",
                listener.closure.as_ref().unchecked_ref(),
            );
        }
        log::debug!("dialog keydown listener removed");
        // The listener may be removed from inside its own dispatch; drop the
        // closure on the next tick so it is never freed while running.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            drop(listener);
        });
    }
}
