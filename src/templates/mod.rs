// src/templates/mod.rs
pub mod login;
pub mod theme;

mod layout;

pub use layout::{render_page, render_page_styled};

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
