pub mod components;
pub mod config;
pub mod hooks;
pub mod icons;
pub mod modal;
