//! Modal dialogs for the Warbler client.

mod composer;
mod login;
mod status_toasts;

pub use composer::ComposerDialog;
pub use login::LoginDialog;
pub use status_toasts::render_status_toasts;

/// Actions produced by dialogs, handled by the application shell.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    /// Submit the composer form
    SubmitWarble {
        text: String,
        location: String,
        csrf_token: String,
    },
    /// Log in against a server
    Connect {
        server_url: String,
        username: String,
        password: String,
        remember_password: bool,
    },
}
