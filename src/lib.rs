//! LinHeMa de Blog - backend services
//!
//! Serves GitHub issues as blog posts, stores moderated reader comments,
//! proxies the CWA weather forecast, publishes an RSS feed and announces
//! new posts through Buttondown.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;

#[cfg(test)]
pub(crate) mod testing;
