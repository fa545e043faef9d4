pub mod pages;

pub use pages::{render_home, HomeTemplate};
