use crate::shared::icons::icon;
use leptos::prelude::*;

/// Roles with duplicates removed, first occurrence wins.
pub fn unique_roles(roles: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(roles.len());
    for role in roles {
        if !unique.contains(role) {
            unique.push(role.clone());
        }
    }
    unique
}

#[component]
pub fn UserCard(
    #[prop(into)]
    first_name: String,
    #[prop(into)]
    last_name: String,
    #[prop(optional)]
    is_premium: bool,
    #[prop(optional)]
    roles: Vec<String>,
) -> impl IntoView {
    let user_name = format!("{} {}", first_name, last_name);

    view! {
        <div class="user-card">
            {is_premium.then(|| {
                view! { <span class="user-card-badge">{icon("star")} "Premium"</span> }
            })}
            <div class="user-card-name">{user_name}</div>
            <ul class="user-card-roles">
                {unique_roles(&roles)
                    .into_iter()
                    .map(|role| view! { <li>{role}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
