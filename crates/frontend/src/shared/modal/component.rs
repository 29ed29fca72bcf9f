use super::controller::DialogController;
use super::web_host::WebHost;
use crate::shared::config::use_ui_config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::portal::Portal;
use leptos::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

static NEXT_TITLE_ID: AtomicUsize = AtomicUsize::new(1);

fn next_title_id() -> String {
    format!("modal-title-{}", NEXT_TITLE_ID.fetch_add(1, Ordering::Relaxed))
}

/// `false` until the first client-side effect has run.
///
/// Effects never run before the component is live in a browser document, so
/// anything gated on this signal is never rendered where no portal target
/// exists yet.
pub fn use_is_client() -> ReadSignal<bool> {
    let (is_client, set_is_client) = signal(false);
    Effect::new(move |_| set_is_client.set(true));
    is_client
}

/// Modal dialog rendered into `<body>`.
///
/// The caller owns `is_open`. Close button, backdrop click and Escape only
/// call `on_close`; the dialog disappears once the caller flips `is_open`.
/// While open, focus is trapped inside the dialog and body scrolling is
/// suppressed; both are undone on close and on unmount.
#[component]
pub fn Modal(
    /// Whether the dialog is shown
    #[prop(into)]
    is_open: Signal<bool>,
    /// Called on every dismissal gesture
    on_close: Callback<()>,
    /// Dialog title, also its accessible name
    #[prop(into)]
    title: String,
    /// Dialog content
    children: ChildrenFn,
) -> impl IntoView {
    let config = use_ui_config().modal;
    let is_client = use_is_client();
    let backdrop_ref = NodeRef::<html::Div>::new();

    let title = StoredValue::new(title);
    let title_id = StoredValue::new(next_title_id());
    let close_label = StoredValue::new(config.close_label.clone());
    let children = StoredValue::new(children);

    // Defer to the next tick: the caller typically removes the dialog in
    // response, and the element dispatching the gesture must outlive it.
    let request_close = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };
    let controller = StoredValue::new_local(DialogController::new(
        WebHost::new(),
        &config.locked_overflow,
        request_close,
    ));

    Effect::new(move |_| {
        let open = is_client.get() && is_open.get();
        let container = backdrop_ref.get().map(Element::from);
        controller.with_value(|c| c.sync(open, container));
    });

    on_cleanup(move || {
        controller.try_with_value(|c| c.teardown());
    });

    let handle_backdrop_click = move |ev: ev::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
        let current = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok());
        controller.with_value(|c| {
            c.backdrop_pointer(target.as_ref(), current.as_ref());
        });
    };

    let handle_close = move |_: ev::MouseEvent| {
        controller.with_value(|c| c.request_close());
    };

    let dialog = move || {
        view! {
            <div node_ref=backdrop_ref class="modal-overlay" on:click=handle_backdrop_click>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.get_value()
                >
                    <div class="modal-header">
                        <h2 id=title_id.get_value() class="modal-title">
                            {title.get_value()}
                        </h2>
                        <button
                            type="button"
                            class="button button--icon modal__close"
                            aria-label=close_label.get_value()
                            on:click=handle_close
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">{children.with_value(|children| children())}</div>
                </div>
            </div>
        }
    };

    view! {
        <Show when=move || is_client.get() && is_open.get()>
            <Portal>{dialog()}</Portal>
        </Show>
    }
}
