// Output module - Report formatting (terminal, JSON)

pub mod json;
pub mod terminal;

pub use terminal::{DateDisplay, RenderOptions, ReportRenderer};
