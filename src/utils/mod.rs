pub mod date_format;
pub mod panic_hook;
pub mod validators;
