use dioxus::prelude::*;

use ui::views::ProfilePage;

#[component]
pub fn Profile() -> Element {
    rsx! {
        ProfilePage {}
    }
}
