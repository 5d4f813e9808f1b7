//! Form widgets

mod redactor;

pub use redactor::RedactorWidget;
