//! HTTP request handlers.

pub mod redirect;
pub mod shorten;

pub use redirect::{fallback_handler, redirect_handler};
pub use shorten::shorten_handler;
