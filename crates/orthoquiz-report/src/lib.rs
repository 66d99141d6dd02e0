//! orthoquiz-report: results page generation.

pub mod html;

pub use html::{generate_html, write_html_report};
