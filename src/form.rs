//! Login form snapshot and the form-data source capability.

use std::io::{BufRead, Write};

/// Error returned by [`FormSource::read_form`].
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The underlying input could not be read (e.g. stdin closed).
    #[error("failed to read form input: {0}")]
    Read(String),
}

/// One submission attempt's field values, in form order.
///
/// Built fresh on every attempt, owned by the submit call stack, and
/// dropped once the request completes. Values are sent exactly as read;
/// no client-side validation.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(transparent)]
pub struct LoginForm {
    fields: Vec<(String, String)>,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a named field, preserving insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Value of the first field with the given name, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Capability that yields the current form field values at call time.
///
/// Stands in for the ambient document a browser would provide, so the
/// submit operation can run against a terminal, a fixture, or a real UI.
pub trait FormSource: Send + Sync {
    /// Snapshot the current field values.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the underlying input cannot be read.
    fn read_form(&self) -> Result<LoginForm, FormError>;
}

/// Fixed in-memory form, for programmatic use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticFormSource {
    form: LoginForm,
}

impl StaticFormSource {
    #[must_use]
    pub fn new(form: LoginForm) -> Self {
        Self { form }
    }
}

impl FormSource for StaticFormSource {
    fn read_form(&self) -> Result<LoginForm, FormError> {
        Ok(self.form.clone())
    }
}

/// Prompts for username and password on the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptFormSource;

impl PromptFormSource {
    fn prompt(label: &str) -> Result<String, FormError> {
        eprint!("{label}: ");
        std::io::stderr()
            .flush()
            .map_err(|e| FormError::Read(e.to_string()))?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| FormError::Read(e.to_string()))?;
        if read == 0 {
            return Err(FormError::Read("stdin closed".into()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

impl FormSource for PromptFormSource {
    fn read_form(&self) -> Result<LoginForm, FormError> {
        let username = Self::prompt("Username")?;
        let password = Self::prompt("Password")?;
        Ok(LoginForm::new()
            .with_field("username", username)
            .with_field("password", password))
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
