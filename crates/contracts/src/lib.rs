pub mod components;
pub mod shared;
