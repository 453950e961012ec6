//! Profile state: the single source of truth for the cached profile and
//! the status of in-flight operations.
//!
//! Every operation follows the same three-phase contract: `start` flags
//! its group busy and clears that group's previous outcome, then exactly
//! one of `succeed`/`fail` lands. Each busy-flag group owns its own
//! [`OpStatus`] slot, so a profile save and an image upload in flight at
//! the same time cannot overwrite each other's outcome. Within one group
//! there is still no mutual exclusion: overlapping calls are
//! last-writer-wins, and callers are expected not to double-submit (the
//! UI disables controls while a group is busy).

use crate::error::ApiError;
use crate::models::UserProfile;

/// Fixed user-facing success messages, one per operation.
pub mod messages {
    pub const PROFILE_LOADED: &str = "Profile loaded";
    pub const PROFILE_UPDATED: &str = "Profile updated successfully";
    pub const IMAGE_UPLOADED: &str = "Profile picture updated";
    pub const IMAGE_REMOVED: &str = "Profile picture removed";
    pub const PASSWORD_CHANGED: &str = "Password changed successfully";
}

/// Which busy flag an operation drives.
///
/// Fetch and update share `Profile`; upload and removal share `Image`;
/// the password change stands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpGroup {
    Profile,
    Image,
    Password,
}

/// Outcome slot for one operation group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpStatus {
    pub busy: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl OpStatus {
    fn start(&mut self) {
        self.busy = true;
        self.error = None;
        self.success = None;
    }

    fn succeed(&mut self, message: &str) {
        self.busy = false;
        self.success = Some(message.to_string());
    }

    fn fail(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One instance per client session, owned by the UI layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    /// Cached copy of server truth; replaced wholesale on every
    /// successful response that carries a profile.
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub profile_op: OpStatus,
    pub image_op: OpStatus,
    pub password_op: OpStatus,
}

impl ProfileState {
    pub fn status(&self, group: OpGroup) -> &OpStatus {
        match group {
            OpGroup::Profile => &self.profile_op,
            OpGroup::Image => &self.image_op,
            OpGroup::Password => &self.password_op,
        }
    }

    fn status_mut(&mut self, group: OpGroup) -> &mut OpStatus {
        match group {
            OpGroup::Profile => &mut self.profile_op,
            OpGroup::Image => &mut self.image_op,
            OpGroup::Password => &mut self.password_op,
        }
    }

    /// Pending phase: mark the group busy and clear its previous outcome.
    pub fn start(&mut self, group: OpGroup) {
        self.status_mut(group).start();
    }

    /// Fulfilled phase. Responses that carry a profile replace the cached
    /// copy wholesale; the password change carries none.
    pub fn succeed(&mut self, group: OpGroup, user: Option<UserProfile>, message: &str) {
        if let Some(user) = user {
            self.user = Some(user);
        }
        self.status_mut(group).succeed(message);
    }

    /// Fulfilled fetch additionally proves the session is live.
    pub fn fetch_succeeded(&mut self, user: UserProfile) {
        self.succeed(OpGroup::Profile, Some(user), messages::PROFILE_LOADED);
        self.is_authenticated = true;
    }

    /// Rejected phase. An expired session flips the authentication flag
    /// no matter which operation detected it.
    pub fn fail(&mut self, group: OpGroup, err: &ApiError) {
        if err.is_session_expired() {
            self.is_authenticated = false;
        }
        self.status_mut(group).fail(err.to_string());
    }

    /// Clear every outcome slot. Never touches the cached profile or the
    /// authentication flag.
    pub fn reset_status(&mut self) {
        self.profile_op.reset();
        self.image_op.reset();
        self.password_op.reset();
    }

    /// Clear only the error fields, leaving successes and busy flags.
    pub fn clear_errors(&mut self) {
        self.profile_op.error = None;
        self.image_op.error = None;
        self.password_op.error = None;
    }

    /// Back to a blank slate, including the authentication flag. Used on
    /// logout.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// True while any group has a request in flight. Views use this to
    /// keep the top-level actions inert during a submit.
    pub fn any_busy(&self) -> bool {
        self.profile_op.busy || self.image_op.busy || self.password_op.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn profile(name: &str) -> UserProfile {
        serde_json::from_str(&format!(
            r#"{{"id":"u-1","fullName":"{name}","email":"u@example.com","role":"employee"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn fetch_lifecycle_pending_fulfilled_reset() {
        let mut state = ProfileState::default();

        state.start(OpGroup::Profile);
        assert!(state.profile_op.busy);
        assert!(state.profile_op.error.is_none());
        assert!(state.profile_op.success.is_none());

        state.fetch_succeeded(profile("Jane Doe"));
        assert!(!state.profile_op.busy);
        assert_eq!(
            state.profile_op.success.as_deref(),
            Some(messages::PROFILE_LOADED)
        );
        assert!(state.is_authenticated);
        assert_eq!(state.user.as_ref().unwrap().full_name, "Jane Doe");

        state.reset_status();
        assert!(!state.profile_op.busy);
        assert!(state.profile_op.success.is_none());
        // reset never drops the cached profile or the auth flag
        assert!(state.user.is_some());
        assert!(state.is_authenticated);
    }

    #[test]
    fn expired_session_flips_authentication() {
        let mut state = ProfileState::default();
        state.fetch_succeeded(profile("Jane"));

        state.start(OpGroup::Profile);
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, None, "Failed to load profile", false);
        state.fail(OpGroup::Profile, &err);

        assert!(!state.is_authenticated);
        assert_eq!(
            state.profile_op.error.as_deref(),
            Some(crate::error::SESSION_EXPIRED)
        );
    }

    #[test]
    fn wrong_current_password_is_normalized() {
        let mut state = ProfileState::default();
        state.start(OpGroup::Password);
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            Some("server babble".into()),
            "Failed to change password",
            true,
        );
        state.fail(OpGroup::Password, &err);
        assert_eq!(
            state.password_op.error.as_deref(),
            Some(crate::error::CURRENT_PASSWORD_INCORRECT)
        );
        // a bad password does not end the session
        assert!(state.password_op.success.is_none());
    }

    #[test]
    fn password_change_leaves_profile_untouched() {
        let mut state = ProfileState::default();
        state.fetch_succeeded(profile("Jane"));
        let before = state.user.clone();

        state.start(OpGroup::Password);
        state.succeed(OpGroup::Password, None, messages::PASSWORD_CHANGED);

        assert_eq!(state.user, before);
        assert_eq!(
            state.password_op.success.as_deref(),
            Some(messages::PASSWORD_CHANGED)
        );
    }

    #[test]
    fn groups_do_not_clobber_each_other() {
        let mut state = ProfileState::default();
        state.start(OpGroup::Profile);
        state.start(OpGroup::Image);

        state.succeed(OpGroup::Image, Some(profile("Jane")), messages::IMAGE_UPLOADED);
        // the in-flight profile fetch is unaffected by the image outcome
        assert!(state.profile_op.busy);
        assert!(state.profile_op.success.is_none());
        assert_eq!(
            state.image_op.success.as_deref(),
            Some(messages::IMAGE_UPLOADED)
        );
    }

    #[test]
    fn clear_all_drops_everything() {
        let mut state = ProfileState::default();
        state.fetch_succeeded(profile("Jane"));
        state.clear_all();
        assert_eq!(state, ProfileState::default());
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn any_busy_tracks_every_group() {
        let mut state = ProfileState::default();
        assert!(!state.any_busy());

        state.start(OpGroup::Image);
        assert!(state.any_busy());
        state.succeed(OpGroup::Image, None, messages::IMAGE_REMOVED);
        assert!(!state.any_busy());

        state.start(OpGroup::Password);
        assert!(state.any_busy());
        state.fail(OpGroup::Password, &ApiError::Server("boom".into()));
        assert!(!state.any_busy());
    }

    #[test]
    fn clear_errors_keeps_success_and_busy() {
        let mut state = ProfileState::default();
        state.start(OpGroup::Image);
        state.fail(OpGroup::Image, &ApiError::Server("boom".into()));
        state.start(OpGroup::Password);
        state.succeed(OpGroup::Profile, None, messages::PROFILE_UPDATED);

        state.clear_errors();
        assert!(state.image_op.error.is_none());
        assert!(state.password_op.busy);
        assert_eq!(
            state.profile_op.success.as_deref(),
            Some(messages::PROFILE_UPDATED)
        );
    }
}
