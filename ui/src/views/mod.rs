mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod profile;
pub use profile::ProfilePage;

mod password_modal;
pub use password_modal::{password_strength, PasswordModal};
