use leptos::ev;
use leptos::prelude::*;

/// Space and Enter flip the switch; auto-repeat of a held key does not.
pub fn toggle_key_activates(key: &str, repeat: bool) -> bool {
    !repeat && (key == " " || key == "Enter")
}

/// On/off switch (`role="switch"`).
#[component]
pub fn Toggle(
    #[prop(optional, into)]
    label: Option<String>,
    /// Initial state (default: off)
    #[prop(optional)]
    default_checked: bool,
    /// Called with the new state after every flip
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let (checked, set_checked) = signal(default_checked);

    let flip = move || {
        let next = !checked.get_untracked();
        set_checked.set(next);
        if let Some(handler) = on_change {
            handler.run(next);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if toggle_key_activates(&ev.key(), ev.repeat()) {
            ev.prevent_default();
            flip();
        }
    };

    view! {
        <label class="toggle">
            {label}
            <button
                type="button"
                role="switch"
                aria-checked=move || checked.get().to_string()
                on:click=move |_| flip()
                on:keydown=handle_keydown
            >
                {move || if checked.get() { "On" } else { "Off" }}
            </button>
        </label>
    }
}
