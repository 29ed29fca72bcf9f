use leptos::prelude::*;

/// Generic list: `render_item` renders each entry, `key_fn` gives its stable
/// key (exposed as `data-key`). Shows `empty_message` instead of the list when
/// there are no items.
#[component]
pub fn DataList<T, R, V, K>(
    #[prop(into)]
    items: Signal<Vec<T>>,
    render_item: R,
    key_fn: K,
    #[prop(optional, into)]
    empty_message: Option<String>,
    #[prop(optional)]
    header: Option<Children>,
    #[prop(optional)]
    footer: Option<Children>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    R: Fn(T, usize) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
    K: Fn(&T) -> String + Send + Sync + 'static,
{
    let body = move || {
        let items = items.get();
        if items.is_empty() {
            return empty_message.clone().unwrap_or_default().into_any();
        }
        view! {
            <ul>
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let key = key_fn(&item);
                        view! { <li data-key=key>{render_item(item, index)}</li> }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="data-list">
            {header.map(|header| header())}
            {body}
            {footer.map(|footer| footer())}
        </div>
    }
}
