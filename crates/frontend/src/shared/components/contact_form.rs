use contracts::components::contact_form::{validate_field, validate_form, ContactField, ContactFormData};
use contracts::shared::validators::{has_errors, FormErrors};
use leptos::ev;
use leptos::prelude::*;

/// Blur-time validation: records the field's error or clears a stale one.
pub fn apply_field_validation(errors: &mut FormErrors, field: ContactField, value: &str) {
    match validate_field(field, value) {
        Some(error) => {
            errors.insert(field.as_str().to_string(), error);
        }
        None => {
            errors.remove(field.as_str());
        }
    }
}

fn error_id(field: ContactField) -> String {
    format!("{}-error", field.as_str())
}

#[component]
fn ContactFormField(
    field: ContactField,
    form: RwSignal<ContactFormData>,
    errors: RwSignal<FormErrors>,
) -> impl IntoView {
    let name = field.as_str();
    let has_error = move || errors.with(|e| e.contains_key(name));
    let error_text = move || errors.with(|e| e.get(name).cloned());

    let handle_blur = move |_: ev::FocusEvent| {
        let value = form.with_untracked(|form| form.get(field).to_string());
        errors.update(|errors| apply_field_validation(errors, field, &value));
    };

    let control = if field == ContactField::Message {
        view! {
            <textarea
                id=name
                name=name
                class="form__textarea"
                prop:value=move || form.with(|f| f.message.clone())
                on:blur=handle_blur
                aria-invalid=move || has_error().to_string()
                aria-describedby=move || has_error().then(|| error_id(field))
            ></textarea>
        }
        .into_any()
    } else {
        let input_type = if field == ContactField::Email { "email" } else { "text" };
        view! {
            <input
                id=name
                name=name
                type=input_type
                class="form__input"
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:blur=handle_blur
                aria-invalid=move || has_error().to_string()
                aria-describedby=move || has_error().then(|| error_id(field))
            />
        }
        .into_any()
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=name>{field.label()}</label>
            {control}
            {move || {
                error_text()
                    .map(|text| view! { <span id=error_id(field) class="form__error">{text}</span> })
            }}
        </div>
    }
}

/// Name / email / message form. Fields are validated on blur; submit
/// validates everything and only calls `on_submit` for a valid form.
#[component]
pub fn ContactForm(on_submit: Callback<ContactFormData>) -> impl IntoView {
    let form = RwSignal::new(ContactFormData::default());
    let errors = RwSignal::new(FormErrors::new());
    let submit_disabled = Memo::new(move |_| form.with(|form| has_errors(&validate_form(form))));

    // `input` bubbles, so one handler on the form serves every field.
    let handle_input = move |ev: ev::Event| {
        let Some(name) = event_target::<web_sys::Element>(&ev).get_attribute("name") else {
            return;
        };
        let value = event_target_value(&ev);
        form.update(|form| {
            if form.set_named(&name, value).is_none() {
                log::warn!("input from unknown contact field '{}'", name);
            }
        });
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let data = form.get_untracked();
        let found = validate_form(&data);
        if has_errors(&found) {
            errors.set(found);
            return;
        }
        on_submit.run(data);
    };

    view! {
        <form class="contact-form" on:input=handle_input on:submit=handle_submit>
            {ContactField::all()
                .into_iter()
                .map(|field| view! { <ContactFormField field=field form=form errors=errors /> })
                .collect_view()}
            <button type="submit" class="button button--primary" disabled=move || submit_disabled.get()>
                "Submit"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_validation_sets_and_clears_errors() {
        let mut errors = FormErrors::new();
        apply_field_validation(&mut errors, ContactField::Name, "");
        assert_eq!(errors["name"], "Name is required");

        apply_field_validation(&mut errors, ContactField::Email, "nope");
        assert_eq!(errors["email"], "Please enter a valid email");

        apply_field_validation(&mut errors, ContactField::Name, "Jo");
        assert!(!errors.contains_key("name"));
        assert!(errors.contains_key("email"));
    }

    #[test]
    fn test_error_id() {
        assert_eq!(error_id(ContactField::Message), "message-error");
    }
}
