//! User-facing notification capability.

/// Presents one blocking user-facing message.
///
/// Stands in for a blocking alert dialog: the submitter decides which
/// message, the implementation decides how it is shown.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Writes the message to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
