//! Contact form: field state and its submit lifecycle, the Basin client,
//! and the section that renders it.

pub mod client;
pub mod country;
pub mod error;
pub mod form;
pub mod picker;
pub mod view;

pub use view::ContactSection;
