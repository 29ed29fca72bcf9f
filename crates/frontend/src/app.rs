use crate::shared::components::{
    Alert, AlertVariant, Card, CardBody, CardFooter, CardHeader, CardVariant, ContactForm,
    Counter, DataList, TodoList, Toggle, UserCard, UserList,
};
use crate::shared::config::{use_ui_config, UiConfig};
use crate::shared::hooks::{use_fetch, use_local_storage, UseFetch};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::components::contact_form::ContactFormData;
use contracts::components::user::User;
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

const DEMO_PARAGRAPHS: usize = 12;

/// Fields of the form shown inside the demo dialog.
const MODAL_FORM_FIELDS: [(&str, &str, &str); 5] = [
    ("first_name", "First name", "text"),
    ("last_name", "Last name", "text"),
    ("company", "Company", "text"),
    ("phone", "Phone", "tel"),
    ("website", "Website", "url"),
];

#[component]
pub fn App() -> impl IntoView {
    provide_context(UiConfig::from_location());

    view! {
        <main class="demo">
            <ModalDemo />
            <WidgetGallery />
        </main>
    }
}

#[component]
fn ModalDemo() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    let close = Callback::new(move |_| {
        log::info!("Modal closed");
        set_is_open.set(false);
    });

    view! {
        <section class="demo-section">
            <h1>"Modal"</h1>
            <input type="text" class="form__input" placeholder="Focus starts here" autofocus=true />
            <Button
                appearance=ButtonAppearance::Primary
                attr:aria-label="Open contact modal"
                on_click=move |_| set_is_open.set(true)
            >
                "Contact Modal"
            </Button>

            <Modal is_open=is_open on_close=close title="Contact Modal">
                <form class="modal-form" on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
                    {MODAL_FORM_FIELDS
                        .into_iter()
                        .map(|(name, label, kind)| {
                            view! {
                                <label class="form__label" for=name>{label}</label>
                                <input id=name name=name type=kind class="form__input" />
                            }
                        })
                        .collect_view()}
                </form>
            </Modal>

            {(1..=DEMO_PARAGRAPHS)
                .map(|n| {
                    view! {
                        <p>
                            {format!(
                                "Paragraph {}. The page is long enough to scroll; while the dialog is open the page behind it stays put.",
                                n,
                            )}
                        </p>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn sample_users() -> Vec<User> {
    use contracts::components::user::UserRole;
    vec![
        User {
            id: "1".into(),
            name: "Ann Lee".into(),
            email: "ann@example.com".into(),
            role: UserRole::Admin,
            is_active: true,
        },
        User {
            id: "2".into(),
            name: "Bob Stone".into(),
            email: "bob@example.com".into(),
            role: UserRole::Editor,
            is_active: false,
        },
        User {
            id: "3".into(),
            name: "Cleo Park".into(),
            email: "cleo@example.com".into(),
            role: UserRole::Viewer,
            is_active: true,
        },
    ]
}

#[component]
fn RemoteUsers() -> impl IntoView {
    let config = use_ui_config();
    let url = Signal::derive(move || config.api_url("/api/users"));
    let UseFetch {
        data,
        error,
        loading,
        refetch,
    } = use_fetch::<Vec<User>>(url);

    view! {
        <Show when=move || loading.get()>
            <Alert variant=AlertVariant::Info>"Loading users..."</Alert>
        </Show>
        {move || {
            error.get().map(|error| {
                view! {
                    <Alert variant=AlertVariant::Error title="Could not load users" on_retry=refetch>
                        {error.to_string()}
                    </Alert>
                }
            })
        }}
        <UserList users=Signal::derive(move || data.get().unwrap_or_default()) />
    }
}

#[component]
fn WidgetGallery() -> impl IntoView {
    let (notifications, set_notifications) = use_local_storage("demo-notifications", false);
    let (last_message, set_last_message) = signal(None::<String>);
    let users = Signal::derive(sample_users);

    let on_contact = Callback::new(move |data: ContactFormData| {
        log::info!("contact form submitted by {}", data.name);
        set_last_message.set(Some(format!("Thanks, {}!", data.name)));
    });

    view! {
        <section class="demo-section">
            <h1>"Widgets"</h1>

            <Alert variant=AlertVariant::Success title="Saved">"Your changes were saved."</Alert>
            <Alert variant=AlertVariant::Warning>"Disk space is running low."</Alert>

            <Card variant=CardVariant::Elevated>
                <CardHeader title="Counter" subtitle="Increment, decrement, reset, double" />
                <CardBody>
                    <Counter />
                </CardBody>
            </Card>

            <Card>
                <CardHeader title="Settings" />
                <CardBody>
                    <Toggle
                        label="Email notifications"
                        default_checked=notifications.get_untracked()
                        on_change=Callback::new(move |checked| set_notifications.set(checked))
                    />
                </CardBody>
            </Card>

            <UserCard
                first_name="Ann"
                last_name="Lee"
                is_premium=true
                roles=vec!["admin".to_string(), "editor".to_string(), "admin".to_string()]
            />

            <Card>
                <CardHeader title="Team" />
                <span class="card-icon">{icon("users")}</span>
                <CardBody>
                    <UserList users=users />
                </CardBody>
                <CardFooter>
                    <DataList
                        items=users
                        render_item=|user: User, index| format!("{}. {}", index + 1, user.name)
                        key_fn=|user: &User| user.id.clone()
                        empty_message="Nobody here"
                    />
                </CardFooter>
            </Card>

            <Card>
                <CardHeader title="Users from the API" />
                <CardBody>
                    <RemoteUsers />
                </CardBody>
            </Card>

            <Card>
                <CardHeader title="Todos" />
                <CardBody>
                    <TodoList />
                </CardBody>
            </Card>

            <Card>
                <CardHeader title="Contact" />
                <CardBody>
                    <ContactForm on_submit=on_contact />
                    {move || last_message.get().map(|message| {
                        view! { <Alert variant=AlertVariant::Success>{message}</Alert> }
                    })}
                </CardBody>
            </Card>
        </section>
    }
}
