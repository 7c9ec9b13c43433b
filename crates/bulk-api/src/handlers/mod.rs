//! Route handlers
//!
//! All HTTP request handlers organized by use case.

pub mod analytics;
pub mod callbacks;
pub mod campaigns;
pub mod health;
pub mod replies;
pub mod root;
