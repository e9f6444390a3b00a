//! Alert notification channels
//!
//! Provides the SMTP email channel and a dry-run channel that prints the
//! composed message instead of sending it.

use super::message::AlertMessage;
use crate::config::{SmtpConfig, SmtpSecurity};
use crate::error::NotificationError;

use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::io::{self, Write};

/// Notification channel trait
pub trait Notifier {
    /// Deliver one alert message; a single attempt, never retried
    fn notify(&self, message: &AlertMessage) -> Result<(), NotificationError>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Sends alerts through an SMTP relay
pub struct SmtpNotifier {
    config: SmtpConfig,
}

impl SmtpNotifier {
    /// Create a new SMTP notifier
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the RFC 5322 message, addressed to every recipient at once
    pub fn build_email(message: &AlertMessage) -> Result<Message, NotificationError> {
        let mut builder = Message::builder().from(parse_mailbox(&message.from)?);
        for recipient in &message.to {
            builder = builder.to(parse_mailbox(recipient)?);
        }

        Ok(builder
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())?)
    }

    /// Build the transport for the configured security mode
    fn transport(&self) -> Result<SmtpTransport, NotificationError> {
        let server = self.config.server.as_str();
        let builder = match self.config.security {
            SmtpSecurity::Starttls => SmtpTransport::starttls_relay(server)?,
            SmtpSecurity::Tls => SmtpTransport::relay(server)?,
            SmtpSecurity::None => SmtpTransport::builder_dangerous(server),
        };

        let mut builder = builder
            .port(self.config.port)
            .timeout(Some(self.config.timeout));

        if let Some(password) = &self.config.password {
            builder = builder.credentials(Credentials::new(
                self.config.username.clone(),
                password.expose().to_string(),
            ));
        }

        Ok(builder.build())
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, message: &AlertMessage) -> Result<(), NotificationError> {
        let email = Self::build_email(message)?;
        let transport = self.transport()?;

        log::debug!(
            "Sending alert via {}:{} ({}) to {} recipient(s)",
            self.config.server,
            self.config.port,
            self.config.security,
            message.to.len()
        );

        let response = transport.send(&email)?;
        log::info!("SMTP server accepted alert: {:?}", response.code());
        Ok(())
    }

    fn name(&self) -> &str {
        "smtp"
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| NotificationError::InvalidAddress {
            address: address.to_string(),
            message: e.to_string(),
        })
}

/// Prints the alert instead of sending it
pub struct DryRunNotifier {
    /// Use stderr instead of stdout
    use_stderr: bool,
}

impl DryRunNotifier {
    /// Create a notifier that prints to stdout
    pub fn new() -> Self {
        Self { use_stderr: false }
    }

    /// Create a notifier that prints to stderr
    pub fn stderr() -> Self {
        Self { use_stderr: true }
    }

    fn render(message: &AlertMessage) -> String {
        format!(
            "=== DRY RUN: alert not sent ===\nFrom: {}\nTo: {}\nSubject: {}\n\n{}",
            message.from,
            message.to.join(", "),
            message.subject,
            message.body
        )
    }
}

impl Default for DryRunNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DryRunNotifier {
    fn notify(&self, message: &AlertMessage) -> Result<(), NotificationError> {
        let rendered = Self::render(message);

        if self.use_stderr {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "{}", rendered)?;
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", rendered)?;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::sample_config;
    use std::time::Duration;

    fn message() -> AlertMessage {
        AlertMessage {
            from: "monitor@example.com".to_string(),
            to: vec![
                "admin@example.com".to_string(),
                "ops@example.com".to_string(),
            ],
            subject: "[DISK ALERT] web-01 - 1 path(s) above 80%".to_string(),
            body: "Path: /\nUsage: 91.0%\n".to_string(),
        }
    }

    #[test]
    fn test_build_email_addresses_all_recipients() {
        let email = SmtpNotifier::build_email(&message()).unwrap();
        assert_eq!(email.envelope().to().len(), 2);

        let formatted = String::from_utf8(email.formatted()).unwrap();
        assert!(formatted.contains("admin@example.com"));
        assert!(formatted.contains("ops@example.com"));
        assert!(formatted.contains("Subject: [DISK ALERT] web-01"));
    }

    #[test]
    fn test_build_email_invalid_sender() {
        let mut msg = message();
        msg.from = "not an address".to_string();
        let result = SmtpNotifier::build_email(&msg);
        assert!(
            matches!(result, Err(NotificationError::InvalidAddress { ref address, .. }) if address == "not an address")
        );
    }

    #[test]
    fn test_build_email_invalid_recipient() {
        let mut msg = message();
        msg.to.push("broken@".to_string());
        assert!(matches!(
            SmtpNotifier::build_email(&msg),
            Err(NotificationError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        let mut smtp = sample_config().smtp;
        smtp.server = "127.0.0.1".to_string();
        smtp.port = 1;
        smtp.security = SmtpSecurity::None;
        smtp.timeout = Duration::from_secs(2);

        let result = SmtpNotifier::new(smtp).notify(&message());
        assert!(matches!(result, Err(NotificationError::Transport(_))));
    }

    #[test]
    fn test_dry_run_render() {
        let rendered = DryRunNotifier::render(&message());
        assert!(rendered.starts_with("=== DRY RUN"));
        assert!(rendered.contains("To: admin@example.com, ops@example.com"));
        assert!(rendered.contains("Usage: 91.0%"));
    }

    #[test]
    fn test_notifier_names() {
        assert_eq!(DryRunNotifier::new().name(), "dry-run");
        assert_eq!(SmtpNotifier::new(sample_config().smtp).name(), "smtp");
    }

    #[test]
    fn test_dry_run_notify() {
        let notifier = DryRunNotifier::new();
        assert!(notifier.notify(&message()).is_ok());
    }
}
