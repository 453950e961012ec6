use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::views::ModalOverlay;
use crate::{use_profile, Toast, ToastKind};

/// Score 0-5 from five independent checks. Submission is blocked below 3.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.len() > 5 {
        score += 1;
    }
    if password.len() > 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        score += 1;
    }
    score
}

/// Mismatch message for a non-empty confirmation field.
pub(crate) fn confirm_mismatch(new_password: &str, confirm: &str) -> Option<&'static str> {
    if !confirm.is_empty() && confirm != new_password {
        Some("Passwords do not match")
    } else {
        None
    }
}

fn strength_label(score: u8) -> &'static str {
    match score {
        0 | 1 => "Very weak",
        2 => "Weak",
        3 => "Fair",
        4 => "Strong",
        _ => "Very strong",
    }
}

/// Self-contained password change form over the shared profile state.
#[component]
pub fn PasswordModal(on_close: EventHandler<()>) -> Element {
    let profile = use_profile();

    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut current_error = use_signal(|| Option::<String>::None);
    let mut new_error = use_signal(|| Option::<String>::None);
    let mut confirm_error = use_signal(|| Option::<String>::None);
    // Only react to outcomes this modal triggered.
    let mut attempted = use_signal(|| false);

    let state = (profile.state)();
    let busy = state.password_op.busy;
    let score = password_strength(&new_password());
    let bar_width = u32::from(score) * 20;

    let success_msg = if attempted() {
        state.password_op.success.clone()
    } else {
        None
    };
    let server_error = if attempted() {
        state.password_op.error.clone()
    } else {
        None
    };

    let handle_submit = move |_: MouseEvent| {
        let mut ok = true;

        if current().is_empty() {
            current_error.set(Some("Current password is required".to_string()));
            ok = false;
        } else {
            current_error.set(None);
        }

        let pw = new_password();
        if pw.len() < 8 {
            new_error.set(Some("Password must be at least 8 characters".to_string()));
            ok = false;
        } else if password_strength(&pw) < 3 {
            new_error.set(Some(
                "Password is too weak. Add uppercase letters, digits or symbols".to_string(),
            ));
            ok = false;
        } else {
            new_error.set(None);
        }

        if confirm() != pw {
            confirm_error.set(Some("Passwords do not match".to_string()));
            ok = false;
        } else {
            confirm_error.set(None);
        }

        if !ok {
            return;
        }

        attempted.set(true);
        let cur = current();
        spawn(async move {
            profile.change_password(cur, pw).await;
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !busy {
                    on_close.call(());
                }
            },
            div {
                class: "modal-body",

                h2 { class: "modal-title", "Change password" }

                if let Some(msg) = success_msg {
                    Toast {
                        kind: ToastKind::Success,
                        message: msg,
                        on_dismiss: move |_| {
                            profile.reset_status();
                            on_close.call(());
                        },
                    }
                }

                if let Some(err) = server_error {
                    div { class: "view-notice view-notice--error", "{err}" }
                }

                div {
                    class: "modal-field",
                    Label { html_for: "current-password", "Current password" }
                    Input {
                        id: "current-password",
                        input_type: "password",
                        value: current(),
                        oninput: move |evt: FormEvent| {
                            current.set(evt.value());
                            current_error.set(None);
                            profile.clear_errors();
                        },
                    }
                    if let Some(err) = current_error() {
                        p { class: "field-error", "{err}" }
                    }
                }

                div {
                    class: "modal-field",
                    Label { html_for: "new-password", "New password" }
                    Input {
                        id: "new-password",
                        input_type: "password",
                        value: new_password(),
                        oninput: move |evt: FormEvent| {
                            new_password.set(evt.value());
                            new_error.set(None);
                            // The confirmation is re-checked right away, so a
                            // stale match surfaces without re-editing it.
                            confirm_error.set(
                                confirm_mismatch(&new_password(), &confirm())
                                    .map(str::to_string),
                            );
                        },
                    }
                    if !new_password().is_empty() {
                        div {
                            class: "strength-meter",
                            div {
                                class: "strength-bar strength-{score}",
                                style: "width: {bar_width}%",
                            }
                        }
                        p { class: "strength-label", "{strength_label(score)}" }
                    }
                    if let Some(err) = new_error() {
                        p { class: "field-error", "{err}" }
                    }
                }

                div {
                    class: "modal-field",
                    Label { html_for: "confirm-password", "Confirm new password" }
                    Input {
                        id: "confirm-password",
                        input_type: "password",
                        value: confirm(),
                        oninput: move |evt: FormEvent| {
                            confirm.set(evt.value());
                            confirm_error.set(
                                confirm_mismatch(&new_password(), &confirm())
                                    .map(str::to_string),
                            );
                        },
                    }
                    if let Some(err) = confirm_error() {
                        p { class: "field-error", "{err}" }
                    }
                }

                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: busy,
                        onclick: handle_submit,
                        if busy { "Changing..." } else { "Change password" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_is_monotonic_as_criteria_accumulate() {
        // Each step satisfies everything the previous one did, plus one more.
        let steps = ["", "abcdef", "abcdefghi", "Abcdefghi", "Abcdefgh1", "Abcdefg1!"];
        let mut previous = 0;
        for password in steps {
            let score = password_strength(password);
            assert!(
                score >= previous,
                "score dropped at {password:?}: {score} < {previous}"
            );
            previous = score;
        }
        assert_eq!(password_strength("Abcdefg1!"), 5);
    }

    #[test]
    fn password1_scores_three_and_passes() {
        assert_eq!(password_strength("password1"), 3);
        assert!(password_strength("password1") >= 3);
    }

    #[test]
    fn weak_passwords_score_below_three() {
        assert!(password_strength("pass") < 3);
        assert!(password_strength("password") < 3);
    }

    #[test]
    fn confirmation_recheck_flags_a_stale_match() {
        // Confirm was typed first and matched; the new password then changed.
        assert_eq!(confirm_mismatch("abc12345", "abc12345"), None);
        assert_eq!(
            confirm_mismatch("abd12345", "abc12345"),
            Some("Passwords do not match")
        );
        // An untouched confirmation field is not an error yet.
        assert_eq!(confirm_mismatch("abc12345", ""), None);
    }
}
