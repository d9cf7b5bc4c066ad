//! Server-rendered HTML.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. The
//! stylesheet and the slideshow script are embedded at compile time.

pub mod dashboard;
pub mod detail;
pub mod gallery;
pub mod layout;

pub const STYLE_CSS: &str = include_str!("../../static/style.css");
pub const SLIDESHOW_JS: &str = include_str!("../../static/slideshow.js");
