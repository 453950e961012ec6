//! # API crate — REST client and profile state for Orgbook
//!
//! This crate holds everything the Orgbook frontends need to talk to the
//! profile endpoints of the backend and to track the lifecycle of those
//! calls. It contains no UI: the `ui` crate wires these types into Dioxus
//! signals.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL configuration with an environment override on native builds |
//! | [`session`] | Process-wide bearer token store, populated by the login flow |
//! | [`error`] | [`ApiError`] taxonomy and HTTP status classification |
//! | [`models`] | Wire types: [`UserProfile`], [`ProfileUpdate`], [`ImageFile`], [`ApiMessage`] |
//! | [`client`] | [`ProfileClient`] — the five profile REST calls over reqwest |
//! | [`state`] | [`ProfileState`] — pending/fulfilled/rejected bookkeeping per operation group |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod state;

pub use client::ProfileClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{ApiMessage, ImageFile, ProfileUpdate, UserProfile};
pub use session::SessionStore;
pub use state::{messages, OpGroup, OpStatus, ProfileState};
