//! In-memory repositories and a scripted messaging gateway
//!
//! Stand-ins for PostgreSQL and the provider so the HTTP surface can be
//! exercised without external services.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use bulk_core::entities::{
    Campaign, CampaignStats, MessageLog, NewCampaign, NewMessageLog, NewReply, Reply,
};
use bulk_core::traits::{
    CampaignRepository, HealthCheck, MessageLogRepository, MessagingGateway, OutboundMessage,
    RepoResult, ReplyRepository, SendReceipt,
};
use bulk_core::{CampaignId, DeliveryStatus, DomainError, MessageLogId, ReplyId};
use bulk_service::{CampaignSettings, ServiceContext};
use chrono::{Duration, Utc};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn unavailable() -> DomainError {
    DomainError::DatabaseError {
        message: "connection refused".to_string(),
        code: Some("08006".to_string()),
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Shared switch that makes every storage call fail
#[derive(Debug, Default)]
pub struct Outage(AtomicBool);

impl Outage {
    pub fn set(&self, down: bool) {
        self.0.store(down, Ordering::SeqCst);
    }

    fn check(&self) -> RepoResult<()> {
        if self.0.load(Ordering::SeqCst) {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub outage: Outage,
    next_campaign_id: AtomicI64,
    campaigns: Mutex<Vec<Campaign>>,
    replies: Mutex<Vec<Reply>>,
    logs: Mutex<Vec<MessageLog>>,
}

impl MemoryStore {
    /// The next campaign gets this id
    pub fn set_next_campaign_id(&self, id: i64) {
        self.next_campaign_id.store(id - 1, Ordering::SeqCst);
    }

    pub fn campaigns(&self) -> Vec<Campaign> {
        lock(&self.campaigns).clone()
    }

    pub fn replies(&self) -> Vec<Reply> {
        lock(&self.replies).clone()
    }

    pub fn logs(&self) -> Vec<MessageLog> {
        lock(&self.logs).clone()
    }

    /// Seed a delivery record directly
    pub fn push_log(&self, campaign_id: i64, provider_message_id: &str, status: DeliveryStatus) {
        let mut logs = lock(&self.logs);
        let now = Utc::now();
        let id = MessageLogId::new(logs.len() as i64 + 1);
        logs.push(MessageLog {
            id,
            campaign_id: Some(CampaignId::new(campaign_id)),
            provider_message_id: Some(provider_message_id.to_string()),
            recipient: "whatsapp:+15550001111".to_string(),
            status,
            error_code: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        });
    }
}

#[async_trait]
impl CampaignRepository for MemoryStore {
    async fn create(&self, campaign: &NewCampaign) -> RepoResult<Campaign> {
        self.outage.check()?;
        let id = self.next_campaign_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = campaign.clone().into_campaign(CampaignId::new(id), Utc::now());
        lock(&self.campaigns).push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CampaignId) -> RepoResult<Option<Campaign>> {
        self.outage.check()?;
        Ok(lock(&self.campaigns).iter().find(|c| c.id == id).cloned())
    }

    async fn count(&self) -> RepoResult<i64> {
        self.outage.check()?;
        Ok(lock(&self.campaigns).len() as i64)
    }
}

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn create(&self, reply: &NewReply) -> RepoResult<Reply> {
        self.outage.check()?;
        let mut replies = lock(&self.replies);
        let seq = replies.len() as i64;
        let stored = Reply {
            id: ReplyId::new(seq + 1),
            phone: reply.phone.clone(),
            message: reply.message.clone(),
            received_at: Utc::now() + Duration::milliseconds(seq),
        };
        replies.push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self) -> RepoResult<Vec<Reply>> {
        self.outage.check()?;
        let mut replies = lock(&self.replies).clone();
        replies.sort_by(|a, b| (b.received_at, b.id).cmp(&(a.received_at, a.id)));
        Ok(replies)
    }
}

#[async_trait]
impl MessageLogRepository for MemoryStore {
    async fn create(&self, log: &NewMessageLog) -> RepoResult<MessageLog> {
        self.outage.check()?;
        let mut logs = lock(&self.logs);
        let now = Utc::now();
        let stored = MessageLog {
            id: MessageLogId::new(logs.len() as i64 + 1),
            campaign_id: log.campaign_id,
            provider_message_id: log.provider_message_id.clone(),
            recipient: log.recipient.clone(),
            status: log.status.clone(),
            error_code: log.error_code.clone(),
            error_message: log.error_message.clone(),
            created_at: now,
            updated_at: now,
        };
        logs.push(stored.clone());
        Ok(stored)
    }

    async fn update_status_by_provider_id(
        &self,
        provider_message_id: &str,
        status: &DeliveryStatus,
        error_code: Option<&str>,
    ) -> RepoResult<bool> {
        self.outage.check()?;
        let mut updated = false;
        for log in lock(&self.logs)
            .iter_mut()
            .filter(|l| l.provider_message_id.as_deref() == Some(provider_message_id))
            .filter(|l| status.may_replace(&l.status))
        {
            log.status = status.clone();
            if let Some(code) = error_code {
                log.error_code = Some(code.to_string());
            }
            log.updated_at = Utc::now();
            updated = true;
        }
        Ok(updated)
    }

    async fn stats_for_campaign(&self, campaign_id: CampaignId) -> RepoResult<CampaignStats> {
        self.outage.check()?;
        let logs = lock(&self.logs);
        Ok(CampaignStats::from_statuses(
            logs.iter()
                .filter(|l| l.campaign_id == Some(campaign_id))
                .map(|l| &l.status),
        ))
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        self.outage.check()
    }
}

// ============================================================================
// Messaging
// ============================================================================

/// What the scripted gateway answers
#[derive(Debug, Clone)]
pub enum GatewayReply {
    Accept { sid: String },
    Reject { message: String, code: i64 },
}

#[derive(Debug)]
pub struct ScriptedGateway {
    reply: Mutex<GatewayReply>,
    sent: Mutex<Vec<OutboundMessage>>,
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self {
            reply: Mutex::new(GatewayReply::Accept {
                sid: "SM123".to_string(),
            }),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedGateway {
    pub fn accept_with(&self, sid: &str) {
        *lock(&self.reply) = GatewayReply::Accept {
            sid: sid.to_string(),
        };
    }

    pub fn reject_with(&self, message: &str, code: i64) {
        *lock(&self.reply) = GatewayReply::Reject {
            message: message.to_string(),
            code,
        };
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl MessagingGateway for ScriptedGateway {
    async fn send(&self, message: &OutboundMessage) -> Result<SendReceipt, DomainError> {
        lock(&self.sent).push(message.clone());
        match lock(&self.reply).clone() {
            GatewayReply::Accept { sid } => Ok(SendReceipt {
                provider_message_id: sid,
                status: DeliveryStatus::Queued,
            }),
            GatewayReply::Reject { message, code } => Err(DomainError::MessagingError {
                message,
                code: Some(code),
                http_status: Some(400),
                more_info: None,
            }),
        }
    }
}

// ============================================================================
// Wiring
// ============================================================================

pub const TEST_FROM: &str = "whatsapp:+14155238886";
pub const TEST_TO: &str = "whatsapp:+15550001111";

/// In-memory backends behind one service context
#[derive(Debug, Clone, Default)]
pub struct InMemory {
    pub store: Arc<MemoryStore>,
    pub gateway: Arc<ScriptedGateway>,
}

impl InMemory {
    pub fn context(&self) -> ServiceContext {
        ServiceContext::new(
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.gateway.clone(),
            CampaignSettings::new(TEST_FROM, TEST_TO),
        )
    }
}
