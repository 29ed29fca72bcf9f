use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::Outlined => "outlined",
            CardVariant::Elevated => "elevated",
        }
    }
}

#[component]
pub fn Card(
    /// Visual variant (default: `CardVariant::Default`)
    #[prop(optional)]
    variant: CardVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <article class=format!("card card-{}", variant.as_str())>
            {children()}
        </article>
    }
}

#[component]
pub fn CardHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <h2>{title}</h2>
            {subtitle.map(|subtitle| {
                view! { <h3 data-testid="card-header-subtitle">{subtitle}</h3> }
            })}
        </div>
    }
}

#[component]
pub fn CardBody(children: Children) -> impl IntoView {
    view! { <div class="card-body">{children()}</div> }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <div class="card-footer">{children()}</div> }
}
