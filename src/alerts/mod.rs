//! Alert and notification system
//!
//! Threshold evaluation, alert composition, and delivery channels.

mod evaluator;
mod message;
mod notifier;
mod types;

pub use evaluator::exceeding;
pub use message::AlertMessage;
pub use notifier::{DryRunNotifier, Notifier, SmtpNotifier};
pub use types::AlertEvent;
