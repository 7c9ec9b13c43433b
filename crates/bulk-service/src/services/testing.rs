//! In-memory fakes for service unit tests

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bulk_core::entities::{
    Campaign, CampaignStats, MessageLog, NewCampaign, NewMessageLog, NewReply, Reply,
};
use bulk_core::traits::{
    CampaignRepository, HealthCheck, MessageLogRepository, MessagingGateway, OutboundMessage,
    RepoResult, ReplyRepository, SendReceipt,
};
use bulk_core::{CampaignId, DeliveryStatus, DomainError, MessageLogId, ReplyId};
use chrono::{Duration, Utc};

use super::context::{CampaignSettings, ServiceContext};

pub(crate) const FROM: &str = "whatsapp:+14155238886";
pub(crate) const TO: &str = "whatsapp:+15550001111";

#[derive(Default)]
pub(crate) struct FakeCampaigns {
    pub rows: Mutex<Vec<Campaign>>,
    pub next_id: AtomicI64,
    pub fail: AtomicBool,
}

impl FakeCampaigns {
    pub fn starting_at(id: i64) -> Self {
        let fake = Self::default();
        fake.next_id.store(id - 1, Ordering::SeqCst);
        fake
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl CampaignRepository for FakeCampaigns {
    async fn create(&self, campaign: &NewCampaign) -> RepoResult<Campaign> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::database("connection refused"));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let campaign = campaign.clone().into_campaign(CampaignId::new(id), Utc::now());
        self.rows.lock().unwrap().push(campaign.clone());
        Ok(campaign)
    }

    async fn find_by_id(&self, id: CampaignId) -> RepoResult<Option<Campaign>> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.len() as i64)
    }
}

#[derive(Default)]
pub(crate) struct FakeReplies {
    pub rows: Mutex<Vec<Reply>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl ReplyRepository for FakeReplies {
    async fn create(&self, reply: &NewReply) -> RepoResult<Reply> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::database("connection refused"));
        }
        let mut rows = self.rows.lock().unwrap();
        // Monotonic timestamps keep ordering assertions stable
        let offset = rows.len() as i64;
        let stored = Reply {
            id: ReplyId::new(offset + 1),
            phone: reply.phone.clone(),
            message: reply.message.clone(),
            received_at: Utc::now() + Duration::milliseconds(offset),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self) -> RepoResult<Vec<Reply>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.received_at, b.id).cmp(&(a.received_at, a.id)));
        Ok(rows)
    }
}

#[derive(Default)]
pub(crate) struct FakeLogs {
    pub rows: Mutex<Vec<MessageLog>>,
    pub fail: AtomicBool,
    pub stats_calls: AtomicI64,
}

impl FakeLogs {
    pub fn snapshot(&self) -> Vec<MessageLog> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageLogRepository for FakeLogs {
    async fn create(&self, log: &NewMessageLog) -> RepoResult<MessageLog> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::database("connection refused"));
        }
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let stored = MessageLog {
            id: MessageLogId::new(rows.len() as i64 + 1),
            campaign_id: log.campaign_id,
            provider_message_id: log.provider_message_id.clone(),
            recipient: log.recipient.clone(),
            status: log.status.clone(),
            error_code: log.error_code.clone(),
            error_message: log.error_message.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update_status_by_provider_id(
        &self,
        provider_message_id: &str,
        status: &DeliveryStatus,
        error_code: Option<&str>,
    ) -> RepoResult<bool> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::database("connection refused"));
        }
        let mut rows = self.rows.lock().unwrap();
        let mut updated = false;
        for row in rows
            .iter_mut()
            .filter(|r| r.provider_message_id.as_deref() == Some(provider_message_id))
            .filter(|r| status.may_replace(&r.status))
        {
            row.status = status.clone();
            if let Some(code) = error_code {
                row.error_code = Some(code.to_string());
            }
            row.updated_at = Utc::now();
            updated = true;
        }
        Ok(updated)
    }

    async fn stats_for_campaign(&self, campaign_id: CampaignId) -> RepoResult<CampaignStats> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::database("connection refused"));
        }
        let rows = self.rows.lock().unwrap();
        Ok(CampaignStats::from_statuses(
            rows.iter()
                .filter(|r| r.campaign_id == Some(campaign_id))
                .map(|r| &r.status),
        ))
    }
}

#[derive(Default)]
pub(crate) struct FakeHealth {
    pub down: AtomicBool,
}

#[async_trait]
impl HealthCheck for FakeHealth {
    async fn ping(&self) -> RepoResult<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(DomainError::database("connection refused"))
        } else {
            Ok(())
        }
    }
}

/// Gateway that accepts with a fixed sid, or rejects with a provider error
pub(crate) struct FakeGateway {
    pub sent: Mutex<Vec<OutboundMessage>>,
    pub sid: String,
    pub reject: Option<(String, i64)>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self::accepting("SM123")
    }
}

impl FakeGateway {
    pub fn accepting(sid: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            sid: sid.to_string(),
            reject: None,
        }
    }

    pub fn rejecting(message: &str, code: i64) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            sid: String::new(),
            reject: Some((message.to_string(), code)),
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingGateway for FakeGateway {
    async fn send(&self, message: &OutboundMessage) -> Result<SendReceipt, DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        match &self.reject {
            Some((msg, code)) => Err(DomainError::MessagingError {
                message: msg.clone(),
                code: Some(*code),
                http_status: Some(400),
                more_info: None,
            }),
            None => Ok(SendReceipt {
                provider_message_id: self.sid.clone(),
                status: DeliveryStatus::Queued,
            }),
        }
    }
}

/// One set of fakes wired into a context
#[derive(Clone, Default)]
pub(crate) struct Fakes {
    pub campaigns: Arc<FakeCampaigns>,
    pub replies: Arc<FakeReplies>,
    pub logs: Arc<FakeLogs>,
    pub health: Arc<FakeHealth>,
    pub gateway: Arc<FakeGateway>,
}

impl Fakes {
    pub fn with_gateway(gateway: FakeGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
            ..Self::default()
        }
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContext::new(
            self.campaigns.clone(),
            self.replies.clone(),
            self.logs.clone(),
            self.health.clone(),
            self.gateway.clone(),
            CampaignSettings::new(FROM, TO),
        )
    }
}
