pub mod use_fetch;
pub mod use_local_storage;

pub use use_fetch::{use_fetch, UseFetch};
pub use use_local_storage::use_local_storage;
