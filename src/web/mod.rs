//! HTML rendering of the assembled page.

pub mod handlers;
