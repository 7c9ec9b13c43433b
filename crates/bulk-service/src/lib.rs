//! # bulk-service
//!
//! Application layer: campaign dispatch, provider callback ingestion,
//! reply listing and per-campaign analytics, plus the request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AnalyticsService, CallbackService, CampaignService, CampaignSettings, ReplyService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, StatusOutcome,
};

pub use dto::{
    CampaignCreatedResponse, CampaignStatsResponse, CreateCampaignRequest, HealthResponse,
    ReadinessResponse, ReplyCallback, ReplyResponse, StatusCallback,
};
