use api::{error::SESSION_EXPIRED, ImageFile, ProfileUpdate};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::{FaCamera, FaKey, FaTrash};
use crate::views::PasswordModal;
use crate::{use_profile, Avatar, Icon, Toast, ToastKind};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Derive a MIME type from the picked file's extension; the browser file
/// engine hands us names and bytes only.
pub(crate) fn mime_from_name(name: &str) -> String {
    let ext = name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// The profile page: avatar with upload/remove controls, editable name,
/// read-only directory fields, and the password modal.
#[component]
pub fn ProfilePage() -> Element {
    let profile = use_profile();

    // Local view state, independent of the shared slice.
    let mut editing = use_signal(|| false);
    let mut name_draft = use_signal(String::new);
    let mut name_error = use_signal(|| Option::<String>::None);
    let mut file_error = use_signal(|| Option::<String>::None);
    let mut show_password_modal = use_signal(|| false);
    // Gates toasts to actions this mount actually triggered, so stale
    // outcomes from a previous mount never re-fire a notification.
    let mut action_attempted = use_signal(|| false);

    // Load the profile on mount.
    let _loader = use_resource(move || async move { profile.fetch().await });

    let state = (profile.state)();

    let handle_save = move |_: MouseEvent| {
        let name = name_draft().trim().to_string();
        if name.is_empty() {
            name_error.set(Some("Full name is required".to_string()));
            return;
        }
        name_error.set(None);
        let Some(email) = profile.state.peek().user.as_ref().map(|u| u.email.clone()) else {
            return;
        };
        profile.reset_status();
        action_attempted.set(true);
        spawn(async move {
            profile
                .update(ProfileUpdate {
                    full_name: name,
                    email,
                })
                .await;
            if profile.state.peek().profile_op.error.is_none() {
                editing.set(false);
            }
        });
    };

    let handle_remove = move |_: MouseEvent| {
        file_error.set(None);
        profile.reset_status();
        action_attempted.set(true);
        spawn(async move {
            profile.delete_image().await;
        });
    };

    let handle_file_pick = move |evt: FormEvent| async move {
        let Some(file_engine) = evt.files() else {
            return;
        };
        let Some(name) = file_engine.files().first().cloned() else {
            return;
        };
        let Some(bytes) = file_engine.read_file(&name).await else {
            file_error.set(Some("Could not read the selected file".to_string()));
            return;
        };
        let file = ImageFile {
            mime: mime_from_name(&name),
            name,
            bytes,
        };
        // Reject bad files locally; no request goes out.
        if let Err(err) = file.validate() {
            file_error.set(Some(err.to_string()));
            return;
        }
        file_error.set(None);
        profile.reset_status();
        action_attempted.set(true);
        profile.upload_image(file).await;
    };

    // One toast per user-initiated action, success or error, covering the
    // profile and image groups. The password modal owns its own cycle.
    let toast = if action_attempted() {
        if let Some(msg) = state
            .profile_op
            .success
            .clone()
            .or_else(|| state.image_op.success.clone())
        {
            Some((ToastKind::Success, msg))
        } else {
            state
                .profile_op
                .error
                .clone()
                .or_else(|| state.image_op.error.clone())
                .map(|msg| (ToastKind::Error, msg))
        }
    } else {
        None
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "My Profile" }

            if let Some((kind, message)) = toast {
                Toast {
                    kind,
                    message,
                    on_dismiss: move |_| {
                        profile.reset_status();
                        action_attempted.set(false);
                    },
                }
            }

            if let Some(user) = state.user.clone() {
                div {
                    class: "profile-card",

                    div {
                        class: "profile-avatar-col",
                        Avatar {
                            name: user.full_name.clone(),
                            image_url: user.profile_pic_url.clone(),
                            size: 112,
                        }
                        div {
                            class: "profile-avatar-actions",
                            label {
                                class: "btn btn-outline profile-upload-label",
                                r#for: "avatar-file",
                                Icon { icon: FaCamera, width: 14, height: 14 }
                                if state.image_op.busy { " Working..." } else { " Change photo" }
                            }
                            input {
                                id: "avatar-file",
                                class: "profile-file-input",
                                r#type: "file",
                                accept: "image/*",
                                disabled: state.image_op.busy,
                                onchange: handle_file_pick,
                            }
                            if user.profile_pic_url.is_some() {
                                Button {
                                    variant: ButtonVariant::Danger,
                                    disabled: state.image_op.busy,
                                    onclick: handle_remove,
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                    " Remove"
                                }
                            }
                        }
                        if let Some(err) = file_error() {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div {
                        class: "profile-details",

                        div {
                            class: "profile-field",
                            Label { html_for: "full-name", "Full name" }
                            if editing() {
                                Input {
                                    id: "full-name",
                                    value: name_draft(),
                                    oninput: move |evt: FormEvent| {
                                        name_draft.set(evt.value());
                                        name_error.set(None);
                                    },
                                }
                                if let Some(err) = name_error() {
                                    p { class: "field-error", "{err}" }
                                }
                            } else {
                                p { class: "profile-value", "{user.full_name}" }
                            }
                        }

                        div {
                            class: "profile-field",
                            Label { html_for: "email", "Email" }
                            // Managed by the directory; always read-only here.
                            Input {
                                id: "email",
                                value: user.email.clone(),
                                disabled: true,
                                oninput: move |_| {},
                            }
                        }

                        if let Some(department) = user.department_name.clone() {
                            div {
                                class: "profile-field",
                                span { class: "label", "Department" }
                                p { class: "profile-value", "{department}" }
                            }
                        }

                        if let Some(manager) = user.manager.clone() {
                            div {
                                class: "profile-field",
                                span { class: "label", "Manager" }
                                p { class: "profile-value", "{manager}" }
                            }
                        }

                        div {
                            class: "profile-field",
                            span { class: "label", "Role" }
                            p { class: "profile-value", "{user.role}" }
                        }

                        div {
                            class: "profile-actions",
                            if editing() {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: state.profile_op.busy,
                                    onclick: handle_save,
                                    if state.profile_op.busy { "Saving..." } else { "Save" }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        editing.set(false);
                                        name_error.set(None);
                                    },
                                    "Cancel"
                                }
                            } else {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: state.any_busy(),
                                    onclick: move |_| {
                                        name_draft.set(
                                            profile
                                                .state
                                                .peek()
                                                .user
                                                .as_ref()
                                                .map(|u| u.full_name.clone())
                                                .unwrap_or_default(),
                                        );
                                        editing.set(true);
                                    },
                                    "Edit profile"
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    disabled: state.any_busy(),
                                    onclick: move |_| show_password_modal.set(true),
                                    Icon { icon: FaKey, width: 14, height: 14 }
                                    " Change password"
                                }
                            }
                        }
                    }
                }
            } else if state.profile_op.error.as_deref() == Some(SESSION_EXPIRED) {
                div {
                    class: "view-notice view-notice--error",
                    "{SESSION_EXPIRED}"
                }
            } else if let Some(err) = state.profile_op.error.clone() {
                div {
                    class: "view-notice view-notice--error",
                    "{err}"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        spawn(async move {
                            profile.fetch().await;
                        });
                    },
                    "Retry"
                }
            } else {
                div { class: "view-loading", "Loading profile..." }
            }

            if show_password_modal() {
                PasswordModal {
                    on_close: move |_| show_password_modal.set(false),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_comes_from_the_extension() {
        assert_eq!(mime_from_name("me.PNG"), "image/png");
        assert_eq!(mime_from_name("holiday.jpeg"), "image/jpeg");
        assert_eq!(mime_from_name("pic.webp"), "image/webp");
    }

    #[test]
    fn unknown_extensions_are_not_images() {
        assert_eq!(mime_from_name("report.pdf"), "application/octet-stream");
        assert_eq!(mime_from_name("noextension"), "application/octet-stream");
    }
}
