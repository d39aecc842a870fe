//! Footer Component

use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            p {
                "\u{00a9} "
                span { id: "year", "{year}" }
                " Folio. All rights reserved."
            }
        }
    }
}
