pub mod fetch_state;
pub mod validators;
