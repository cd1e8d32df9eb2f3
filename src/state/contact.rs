#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

/// The three contact form fields. Absence is the empty string, never a
/// missing field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Names one field of [`ContactFormState`] for targeted updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Raised by [`ContactFormState::submit`] when a required field is empty.
/// Recovered in place: the user is notified and the form stays editable
/// with prior input intact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError;

impl ValidationError {
    /// User-facing notice text.
    pub fn notice(&self) -> &'static str {
        "Please fill in all fields!"
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notice())
    }
}

impl std::error::Error for ValidationError {}

/// Confirmation emitted after a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    /// The name exactly as submitted.
    pub name: String,
}

impl Acknowledgement {
    /// User-facing confirmation text interpolating the submitted name.
    pub fn notice(&self) -> String {
        format!("Thank you, {}! Your message has been received.", self.name)
    }
}

impl ContactFormState {
    /// Overwrite exactly one field. No validation happens here; any string,
    /// including the empty string, is accepted.
    pub fn update_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Attempt a submission.
    ///
    /// Fails with [`ValidationError`] if any field is empty, leaving the
    /// state untouched. A non-empty value always passes; the email field is
    /// intentionally not format-checked. On success the form resets to all
    /// empty fields and the returned acknowledgement carries the submitted
    /// name.
    pub fn submit(&mut self) -> Result<Acknowledgement, ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError);
        }

        let ack = Acknowledgement {
            name: std::mem::take(&mut self.name),
        };
        self.email.clear();
        self.message.clear();
        Ok(ack)
    }
}
