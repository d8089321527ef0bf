//! Records shared by the campaign and collection contracts.
#![no_std]

use soroban_sdk::{contracttype, Address, String, Vec};

/// Lifecycle of a campaign's auction. Always derived from the auction end
/// time and the ledger clock, never set directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Draft,
    Active,
    Ended,
}

/// Status an NFT mirrors from the campaign listing it. `Unlisted` when no
/// campaign has been attached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum NftStatus {
    Unlisted,
    Draft,
    Active,
    Ended,
}

impl From<CampaignStatus> for NftStatus {
    fn from(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Draft => NftStatus::Draft,
            CampaignStatus::Active => NftStatus::Active,
            CampaignStatus::Ended => NftStatus::Ended,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct NftAttribute {
    pub trait_type: String,
    pub value: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Nft {
    pub id: String,
    pub name: String,
    pub image: String, // URI
    pub description: Option<String>,
    pub token_id: u64,
    pub edition_number: u32,
    pub total_editions: u32,
    pub owner: Address,
    pub price: Option<i128>,
    pub attributes: Option<Vec<NftAttribute>>,
    pub status: NftStatus,
}
