//! Profile store: the shared [`ProfileState`] signal plus the dispatch
//! glue that drives it through the client.
//!
//! Wrap the app in [`ProfileProvider`]; components read and dispatch via
//! [`use_profile`]. Each operation applies the pending transition, awaits
//! the client, then reduces the fulfilled or rejected transition into the
//! signal. Operations are fire-and-dispatch: the store never queues or
//! cancels, and views disable controls while a group is busy.

use api::{
    messages, ApiConfig, ImageFile, OpGroup, ProfileClient, ProfileState, ProfileUpdate,
    SessionStore,
};
use dioxus::prelude::*;

/// Copyable handle over the profile state and client.
#[derive(Clone, Copy)]
pub struct ProfileStore {
    pub state: Signal<ProfileState>,
    client: Signal<ProfileClient>,
}

/// Get the profile store provided by [`ProfileProvider`].
pub fn use_profile() -> ProfileStore {
    use_context::<ProfileStore>()
}

/// Provider component that owns the session's profile state.
#[component]
pub fn ProfileProvider(children: Element) -> Element {
    let state = use_signal(ProfileState::default);
    let client =
        use_signal(|| ProfileClient::new(ApiConfig::from_env(), SessionStore::global()));

    use_context_provider(|| ProfileStore { state, client });

    rsx! {
        {children}
    }
}

impl ProfileStore {
    fn client(&self) -> ProfileClient {
        self.client.peek().clone()
    }

    /// Load the profile from the backend, replacing the cached copy.
    pub async fn fetch(mut self) {
        self.state.write().start(OpGroup::Profile);
        match self.client().fetch_profile().await {
            Ok(user) => self.state.write().fetch_succeeded(user),
            Err(err) => {
                tracing::error!("failed to load profile: {err}");
                self.state.write().fail(OpGroup::Profile, &err);
            }
        }
    }

    /// Save name changes. The server returns the updated record.
    pub async fn update(mut self, update: ProfileUpdate) {
        self.state.write().start(OpGroup::Profile);
        match self.client().update_profile(&update).await {
            Ok(user) => {
                self.state
                    .write()
                    .succeed(OpGroup::Profile, Some(user), messages::PROFILE_UPDATED)
            }
            Err(err) => {
                tracing::error!("failed to update profile: {err}");
                self.state.write().fail(OpGroup::Profile, &err);
            }
        }
    }

    /// Upload a new profile picture. The file must already have passed
    /// [`ImageFile::validate`]; the client re-checks before sending.
    pub async fn upload_image(mut self, file: ImageFile) {
        self.state.write().start(OpGroup::Image);
        match self.client().upload_image(file).await {
            Ok(user) => {
                self.state
                    .write()
                    .succeed(OpGroup::Image, Some(user), messages::IMAGE_UPLOADED)
            }
            Err(err) => {
                tracing::error!("failed to upload profile picture: {err}");
                self.state.write().fail(OpGroup::Image, &err);
            }
        }
    }

    /// Remove the current profile picture.
    pub async fn delete_image(mut self) {
        self.state.write().start(OpGroup::Image);
        match self.client().delete_image().await {
            Ok(user) => {
                self.state
                    .write()
                    .succeed(OpGroup::Image, Some(user), messages::IMAGE_REMOVED)
            }
            Err(err) => {
                tracing::error!("failed to remove profile picture: {err}");
                self.state.write().fail(OpGroup::Image, &err);
            }
        }
    }

    pub async fn change_password(mut self, current: String, new: String) {
        self.state.write().start(OpGroup::Password);
        match self.client().change_password(&current, &new).await {
            Ok(_) => {
                self.state
                    .write()
                    .succeed(OpGroup::Password, None, messages::PASSWORD_CHANGED)
            }
            Err(err) => {
                tracing::error!("failed to change password: {err}");
                self.state.write().fail(OpGroup::Password, &err);
            }
        }
    }

    /// Clear every operation outcome. Leaves the cached profile intact.
    pub fn reset_status(mut self) {
        self.state.write().reset_status();
    }

    /// Clear error fields only.
    pub fn clear_errors(mut self) {
        self.state.write().clear_errors();
    }

    /// Forget everything, including the authentication flag. For logout.
    pub fn clear(mut self) {
        self.state.write().clear_all();
    }
}
