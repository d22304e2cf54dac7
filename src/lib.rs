pub mod converter;
pub mod core;
pub mod locale;
