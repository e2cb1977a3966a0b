//! Newsletter notification handler.

mod notify_subscribers;

pub use notify_subscribers::{
    NotifyError, NotifySubscribersCommand, NotifySubscribersHandler, NotifySubscribersResult,
};
