//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and orchestrates the
//! repositories and the messaging gateway for one use case.

pub mod analytics;
pub mod callback;
pub mod campaign;
pub mod context;
pub mod error;
pub mod reply;

#[cfg(test)]
pub(crate) mod testing;

pub use analytics::AnalyticsService;
pub use callback::{CallbackService, StatusOutcome};
pub use campaign::CampaignService;
pub use context::{CampaignSettings, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reply::ReplyService;
