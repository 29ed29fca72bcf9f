pub mod alert;
pub mod card;
pub mod contact_form;
pub mod counter;
pub mod data_list;
pub mod todo_list;
pub mod toggle;
pub mod user_card;
pub mod user_list;

pub use alert::{Alert, AlertVariant};
pub use card::{Card, CardBody, CardFooter, CardHeader, CardVariant};
pub use contact_form::ContactForm;
pub use counter::Counter;
pub use data_list::DataList;
pub use todo_list::{TodoFilters, TodoItem, TodoList};
pub use toggle::Toggle;
pub use user_card::UserCard;
pub use user_list::{UserList, UserRow};
