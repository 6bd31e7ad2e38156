//! Client-side login submission flow.
//!
//! One operation: read credential fields from a form source, POST them
//! URL-encoded to `/login`, then either navigate to the protected page
//! (exact 200) or surface a blocking user-facing message. Browser
//! ambience (document, alert, location) is injected through the
//! [`FormSource`], [`Notifier`], and [`Navigator`] capabilities so the
//! operation runs and tests without a UI tree.

pub mod client;
pub mod config;
pub mod form;
pub mod nav;
pub mod notify;
pub mod submit;

pub use client::{HttpLoginClient, LoginError, LoginResponse, LoginTransport};
pub use config::AppConfig;
pub use form::{FormSource, LoginForm, PromptFormSource, StaticFormSource};
pub use nav::{BrowserNavigator, Navigator};
pub use notify::{ConsoleNotifier, Notifier};
pub use submit::{LoginSubmitter, SubmitOutcome};
