//! Contact form state.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use super::toast::ToastKind;

pub const SEND_SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const SEND_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// The three fields the form submits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Form inputs, by element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }

    #[must_use]
    pub fn value(self, form: &ContactForm) -> &str {
        match self {
            Self::Name => &form.name,
            Self::Email => &form.email,
            Self::Message => &form.message,
        }
    }

    pub fn set(self, form: &mut ContactForm, value: String) {
        match self {
            Self::Name => form.name = value,
            Self::Email => form.email = value,
            Self::Message => form.message = value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    /// A send is in flight; the submit button shows `loading`.
    pub sending: bool,
}

impl ContactState {
    /// Mark a send as started and return the values to submit, taken
    /// literally. Returns `None` while a previous send is in flight.
    pub fn begin_send(&mut self) -> Option<ContactForm> {
        if self.sending {
            return None;
        }
        self.sending = true;
        Some(self.form.clone())
    }

    /// Clear the loading state; reset the fields after a successful send.
    pub fn finish_send(&mut self, succeeded: bool) {
        self.sending = false;
        if succeeded {
            self.form = ContactForm::default();
        }
    }

    #[must_use]
    pub fn submit_class(&self) -> &'static str {
        if self.sending { "btn loading" } else { "btn" }
    }
}

/// Toast to show for a send outcome.
#[must_use]
pub fn outcome_toast<E>(result: &Result<(), E>) -> (ToastKind, &'static str) {
    match result {
        Ok(()) => (ToastKind::Success, SEND_SUCCESS_MESSAGE),
        Err(_) => (ToastKind::Error, SEND_FAILURE_MESSAGE),
    }
}

/// A field group keeps `focused` after blur only while it holds text.
#[must_use]
pub fn focused_after_blur(value: &str) -> bool {
    !value.is_empty()
}

#[must_use]
pub fn field_group_class(focused: bool) -> &'static str {
    if focused { "form-group focused" } else { "form-group" }
}
