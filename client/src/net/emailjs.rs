//! EmailJS REST bridge for the contact form.
//!
//! Client-side (hydrate): a single `POST` via `gloo-net`, no timeout and no
//! retry. Server-side (SSR): a stub returning an error, since submitting
//! only happens in the browser.
//!
//! The identifiers are public client-side values. Each can be overridden at
//! compile time through the matching environment variable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use serde::Serialize;

use crate::state::contact::ContactForm;

pub const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Service account and template the contact form is delivered through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub public_key: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    /// Name the message is addressed to.
    pub to_name: &'static str,
}

impl EmailConfig {
    #[must_use]
    pub const fn from_build_env() -> Self {
        Self {
            public_key: match option_env!("EMAILJS_PUBLIC_KEY") {
                Some(v) => v,
                None => "ktWkzd0cydmrFuE4r",
            },
            service_id: match option_env!("EMAILJS_SERVICE_ID") {
                Some(v) => v,
                None => "service_c9z2t0u",
            },
            template_id: match option_env!("EMAILJS_TEMPLATE_ID") {
                Some(v) => v,
                None => "template_5ga0b1i",
            },
            to_name: match option_env!("CONTACT_RECIPIENT") {
                Some(v) => v,
                None => "Sreenivas",
            },
        }
    }
}

/// Template variables the EmailJS template interpolates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS calls the public key `user_id`.
    pub user_id: String,
    pub template_params: TemplateParams,
}

#[must_use]
pub fn build_send_request(config: &EmailConfig, form: &ContactForm) -> SendRequest {
    SendRequest {
        service_id: config.service_id.to_owned(),
        template_id: config.template_id.to_owned(),
        user_id: config.public_key.to_owned(),
        template_params: TemplateParams {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            message: form.message.clone(),
            to_name: config.to_name.to_owned(),
        },
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn send_failed_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() { format!("email send failed: {status}") } else { format!("email send failed: {status} {body}") }
}

/// Deliver the contact form through EmailJS.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or EmailJS answers
/// with a non-OK status.
pub async fn send_contact(config: &EmailConfig, form: &ContactForm) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let request = build_send_request(config, form);
        let resp = gloo_net::http::Request::post(SEND_ENDPOINT)
            .json(&request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(send_failed_message(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, form);
        Err("not available on server".to_owned())
    }
}
