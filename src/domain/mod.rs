//! Domain layer - blog vocabulary and pure logic.
//!
//! Nothing in here performs I/O; adapters feed it data through the ports.

pub mod comment;
pub mod feed;
pub mod foundation;
pub mod newsletter;
pub mod post;
pub mod theme;
