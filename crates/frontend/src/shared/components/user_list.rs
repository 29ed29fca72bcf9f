use contracts::components::user::User;
use leptos::prelude::*;

pub const EMPTY_USERS_MESSAGE: &str = "No users available";

#[component]
pub fn UserRow(user: User) -> impl IntoView {
    view! {
        <tr class=user.row_class()>
            <td>{user.name.clone()}</td>
            <td>{user.email.clone()}</td>
            <td>{user.role.as_str()}</td>
            <td>{user.status_label()}</td>
        </tr>
    }
}

#[component]
pub fn UserList(
    #[prop(into)]
    users: Signal<Vec<User>>,
) -> impl IntoView {
    view! {
        <table class="user-list">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || users.with(|users| !users.is_empty())
                    fallback=|| view! {
                        <tr>
                            <td colspan="4">{EMPTY_USERS_MESSAGE}</td>
                        </tr>
                    }
                >
                    <For
                        each=move || users.get()
                        key=|user| user.id.clone()
                        children=|user| view! { <UserRow user=user /> }
                    />
                </Show>
            </tbody>
        </table>
    }
}
