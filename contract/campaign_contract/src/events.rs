use soroban_sdk::{contracttype, Address, Symbol};
use studio_types::CampaignStatus;

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct DraftStartedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct DraftUpdatedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub auction_end_time: Option<u64>,
}

#[contracttype]
#[derive(Clone)]
pub struct DraftDiscardedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignSubmittedEvent {
    pub campaign_id: CampaignId,
    pub owner: Address,
    pub status: CampaignStatus,
    pub auction_end_time: Option<u64>,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignUpdatedEvent {
    pub campaign_id: CampaignId,
    pub status: CampaignStatus,
    pub auction_end_time: Option<u64>,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignsReplacedEvent {
    pub count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct CountdownStartedEvent {
    pub campaign_id: CampaignId,
    pub viewer: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CountdownStoppedEvent {
    pub campaign_id: CampaignId,
    pub viewer: Address,
}

pub fn emit_draft_started(env: &soroban_sdk::Env, event: DraftStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "draft_started"),), event);
}

pub fn emit_draft_updated(env: &soroban_sdk::Env, event: DraftUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "draft_updated"),), event);
}

pub fn emit_draft_discarded(env: &soroban_sdk::Env, event: DraftDiscardedEvent) {
    env.events()
        .publish((Symbol::new(env, "draft_discarded"),), event);
}

pub fn emit_campaign_submitted(env: &soroban_sdk::Env, event: CampaignSubmittedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_submitted"),), event);
}

pub fn emit_campaign_updated(env: &soroban_sdk::Env, event: CampaignUpdatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_updated"),), event);
}

pub fn emit_campaigns_replaced(env: &soroban_sdk::Env, event: CampaignsReplacedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaigns_replaced"),), event);
}

pub fn emit_countdown_started(env: &soroban_sdk::Env, event: CountdownStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "countdown_started"),), event);
}

pub fn emit_countdown_stopped(env: &soroban_sdk::Env, event: CountdownStoppedEvent) {
    env.events()
        .publish((Symbol::new(env, "countdown_stopped"),), event);
}
