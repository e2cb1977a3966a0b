//! Buttondown adapter - newsletter delivery.

mod buttondown_sender;

pub use buttondown_sender::ButtondownEmailSender;
