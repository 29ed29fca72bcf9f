use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertVariant {
    Info,
    Warning,
    Success,
    Error,
}

impl AlertVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertVariant::Info => "info",
            AlertVariant::Warning => "warning",
            AlertVariant::Success => "success",
            AlertVariant::Error => "error",
        }
    }
}

/// `"{extra} alert-{variant}"` without stray whitespace.
pub fn alert_class(extra: Option<&str>, variant: AlertVariant) -> String {
    format!("{} alert-{}", extra.unwrap_or_default(), variant.as_str())
        .trim()
        .to_string()
}

/// Status message with `role="alert"`.
///
/// `on_retry` renders a Retry button, but only for `AlertVariant::Error`.
#[component]
pub fn Alert(
    variant: AlertVariant,
    /// Optional heading
    #[prop(optional, into)]
    title: Option<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: Option<String>,
    /// Retry handler (error alerts only)
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let on_retry = on_retry.filter(|_| variant == AlertVariant::Error);

    view! {
        <div role="alert" class=alert_class(class.as_deref(), variant)>
            {title.map(|title| view! { <header class="alert-header">{title}</header> })}
            {children.map(|children| {
                view! {
                    <div data-testid="alert-content" class="alert-content">
                        {children()}
                    </div>
                }
            })}
            {on_retry.map(|retry| {
                view! {
                    <button type="button" class="button button--secondary" on:click=move |_| retry.run(())>
                        {icon("refresh")}
                        "Retry"
                    </button>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_class() {
        assert_eq!(alert_class(None, AlertVariant::Info), "alert-info");
        assert_eq!(alert_class(Some(""), AlertVariant::Warning), "alert-warning");
        assert_eq!(
            alert_class(Some("mb-4 wide"), AlertVariant::Error),
            "mb-4 wide alert-error"
        );
    }
}
