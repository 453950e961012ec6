//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod avatar;
pub use avatar::Avatar;

mod toast;
pub use toast::{Toast, ToastKind};

mod profile;
pub use profile::{use_profile, ProfileProvider, ProfileStore};

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/ui.css");
