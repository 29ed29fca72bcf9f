pub mod contact_form;
pub mod todo;
pub mod user;
