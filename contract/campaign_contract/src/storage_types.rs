use soroban_sdk::{contracttype, Address, String, Vec};
use studio_types::{CampaignStatus, Nft};

pub type CampaignId = u64;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Config,
    NextCampaignId,
    Campaign(CampaignId),
    CampaignIndex,
    Draft(Address),
    CurrentCampaign(Address),
    Countdown(Address),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ResellType {
    Percentage,
    Fixed,
}

/// Resale type change carried by an edit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ResellTypeChange {
    Unchanged,
    Percentage,
    Fixed,
}

/// Auction length picked in the form. `Custom` means a custom length was
/// chosen but no day count has been entered yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AuctionDuration {
    Unchanged,
    Days(u32),
    Custom,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum EndTime {
    Unchanged,
    At(u64),
    Cleared,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignConfig {
    pub countdown_interval: u64, // seconds between countdown recomputes
    pub min_resell_percentage: u32,
    pub max_auction_days: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub owner: Address,
    pub category: String,
    pub description: String,
    pub token_name: String,
    pub token_symbol: String,
    pub total_tokens: i128,
    pub per_token_price: i128,
    pub fund_desired: i128,
    pub resell_type: ResellType,
    pub resell_value: i128,
    pub auction_duration: Option<u32>,
    pub auction_end_time: Option<u64>,
    pub status: CampaignStatus,
    pub nfts: Vec<Nft>,
    pub created_at: u64,
}

/// Partial edit of a campaign or draft. `None` and `Unchanged` leave the
/// field untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignFields {
    pub category: Option<String>,
    pub description: Option<String>,
    pub token_name: Option<String>,
    pub token_symbol: Option<String>,
    pub total_tokens: Option<i128>,
    pub per_token_price: Option<i128>,
    pub fund_desired: Option<i128>,
    pub resell_type: ResellTypeChange,
    pub resell_value: Option<i128>,
    pub auction_duration: AuctionDuration,
    pub auction_end_time: EndTime,
    pub nfts: Option<Vec<Nft>>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub has_ended: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CountdownWatch {
    pub campaign_id: CampaignId,
    pub started_at: u64,
    pub next_tick_at: u64,
    pub last: TimeRemaining,
}

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const DEFAULT_RESELL_PERCENTAGE: i128 = 10;
pub const DEFAULT_COUNTDOWN_INTERVAL: u64 = 1;
pub const DEFAULT_MAX_AUCTION_DAYS: u32 = 365 * 10;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const TTL_TEMPORARY: u32 = 17280; // 1 day

impl CampaignFields {
    /// An edit that changes nothing.
    pub fn none() -> Self {
        CampaignFields {
            category: None,
            description: None,
            token_name: None,
            token_symbol: None,
            total_tokens: None,
            per_token_price: None,
            fund_desired: None,
            resell_type: ResellTypeChange::Unchanged,
            resell_value: None,
            auction_duration: AuctionDuration::Unchanged,
            auction_end_time: EndTime::Unchanged,
            nfts: None,
        }
    }
}

impl ResellTypeChange {
    pub fn resolve(self, current: ResellType) -> ResellType {
        match self {
            ResellTypeChange::Unchanged => current,
            ResellTypeChange::Percentage => ResellType::Percentage,
            ResellTypeChange::Fixed => ResellType::Fixed,
        }
    }
}

impl CampaignConfig {
    pub fn default_config() -> Self {
        CampaignConfig {
            countdown_interval: DEFAULT_COUNTDOWN_INTERVAL,
            min_resell_percentage: DEFAULT_RESELL_PERCENTAGE as u32,
            max_auction_days: DEFAULT_MAX_AUCTION_DAYS,
        }
    }
}
