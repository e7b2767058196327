//! # storefront-notify
//!
//! The Notification Gateway: order and pickup confirmations mailed to the
//! customer and a fixed operator address. Sends are dispatched as detached
//! tasks; a transport failure is logged and never propagates into the
//! mutation that triggered the mail.

pub mod gateway;
pub mod mailer;

pub use gateway::NotificationGateway;
pub use mailer::{LogMailer, Mailer, SmtpMailer};
