//! Application-shell components for Folio.

mod contact_form;
mod footer;
mod mobile_menu;
mod nav_header;
mod scroll_top;

pub use contact_form::ContactForm;
pub use footer::Footer;
pub use mobile_menu::MobileMenu;
pub use nav_header::{NavHeader, SECTIONS};
pub use scroll_top::ScrollTopButton;
