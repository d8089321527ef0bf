use soroban_sdk::{Address, Env, String, Vec};
use studio_types::{CampaignStatus, NftStatus};

use crate::errors::Error;
use crate::storage_types::*;
use crate::utils::{
    auction_end_from, derive_status, validate_amount, validate_duration, validate_resell,
};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn load_config(env: &Env) -> Result<CampaignConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn load_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn validate_config(config: &CampaignConfig) -> Result<(), Error> {
    if config.countdown_interval == 0 || config.max_auction_days == 0 {
        return Err(Error::InvalidConfig);
    }
    if config.min_resell_percentage > 100 {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

pub fn next_campaign_id(env: &Env) -> CampaignId {
    let id: CampaignId = env
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(1);
    env.storage().instance().set(&DataKey::NextCampaignId, &(id + 1));
    id
}

/// Recompute the derived status against the ledger clock and mirror it
/// onto the campaign's NFTs.
pub fn refresh_status(campaign: &mut Campaign, now: u64) {
    campaign.status = derive_status(campaign.auction_end_time, now);

    let mirrored = NftStatus::from(campaign.status);
    for i in 0..campaign.nfts.len() {
        if let Some(mut nft) = campaign.nfts.get(i) {
            if nft.status != mirrored {
                nft.status = mirrored;
                campaign.nfts.set(i, nft);
            }
        }
    }
}

/// Load a submitted campaign with its status as of `now`.
pub fn read_campaign(env: &Env, id: CampaignId, now: u64) -> Result<Campaign, Error> {
    let mut campaign: Campaign = env
        .storage()
        .persistent()
        .get(&DataKey::Campaign(id))
        .ok_or(Error::CampaignNotFound)?;
    refresh_status(&mut campaign, now);
    Ok(campaign)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn campaign_index(env: &Env) -> Vec<CampaignId> {
    env.storage()
        .persistent()
        .get(&DataKey::CampaignIndex)
        .unwrap_or(Vec::new(env))
}

pub fn append_to_index(env: &Env, id: CampaignId) {
    let mut index = campaign_index(env);
    index.push_back(id);
    env.storage().persistent().set(&DataKey::CampaignIndex, &index);
    extend_persistent(env, &DataKey::CampaignIndex);
}

/// Amounts and resale terms of a whole record, as an edit would check them.
pub fn validate_record(campaign: &Campaign) -> Result<(), Error> {
    validate_amount(campaign.total_tokens)?;
    validate_amount(campaign.per_token_price)?;
    validate_amount(campaign.fund_desired)?;
    validate_resell(campaign.resell_type, campaign.resell_value)
}

/// Swap the listed campaigns for `campaigns`, dropping records that are no
/// longer indexed. The id counter moves past every id in use.
pub fn replace_all(env: &Env, index: &Vec<CampaignId>, campaigns: &Vec<Campaign>) {
    for old_id in campaign_index(env).iter() {
        if !index.contains(old_id) {
            env.storage().persistent().remove(&DataKey::Campaign(old_id));
        }
    }
    for campaign in campaigns.iter() {
        write_campaign(env, &campaign);
    }
    env.storage().persistent().set(&DataKey::CampaignIndex, index);
    extend_persistent(env, &DataKey::CampaignIndex);

    let next: CampaignId = env
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(1);
    let highest = index.iter().max().unwrap_or(0);
    if highest >= next {
        env.storage()
            .instance()
            .set(&DataKey::NextCampaignId, &(highest + 1));
    }
}

pub fn read_draft(env: &Env, owner: &Address) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Draft(owner.clone()))
        .ok_or(Error::NoDraft)
}

pub fn write_draft(env: &Env, draft: &Campaign) {
    let key = DataKey::Draft(draft.owner.clone());
    env.storage().persistent().set(&key, draft);
    extend_persistent(env, &key);
}

pub fn set_current(env: &Env, viewer: &Address, id: CampaignId) {
    let key = DataKey::CurrentCampaign(viewer.clone());
    env.storage().persistent().set(&key, &id);
    extend_persistent(env, &key);
}

/// An empty draft with the default resale terms.
pub fn new_draft(env: &Env, id: CampaignId, owner: Address, now: u64) -> Campaign {
    Campaign {
        id,
        owner,
        category: String::from_str(env, ""),
        description: String::from_str(env, ""),
        token_name: String::from_str(env, ""),
        token_symbol: String::from_str(env, ""),
        total_tokens: 0,
        per_token_price: 0,
        fund_desired: 0,
        resell_type: ResellType::Percentage,
        resell_value: DEFAULT_RESELL_PERCENTAGE,
        auction_duration: None,
        auction_end_time: None,
        status: CampaignStatus::Draft,
        nfts: Vec::new(env),
        created_at: now,
    }
}

/// Merge `fields` into `campaign`.
///
/// Duration and end time always move together: a day count derives the
/// end time from `now`, `Custom` clears both, and an explicit end time
/// drops the duration it no longer matches. Drafts only accept a duration.
pub fn apply_fields(
    campaign: &mut Campaign,
    fields: CampaignFields,
    now: u64,
    config: &CampaignConfig,
    is_draft: bool,
) -> Result<(), Error> {
    let duration_set = fields.auction_duration != AuctionDuration::Unchanged;
    let end_time_set = fields.auction_end_time != EndTime::Unchanged;
    if duration_set && end_time_set {
        return Err(Error::ConflictingAuctionFields);
    }
    if is_draft && end_time_set {
        return Err(Error::EndTimeIsDerived);
    }

    for amount in [fields.total_tokens, fields.per_token_price, fields.fund_desired]
        .into_iter()
        .flatten()
    {
        validate_amount(amount)?;
    }

    if fields.resell_type != ResellTypeChange::Unchanged || fields.resell_value.is_some() {
        let resell_type = fields.resell_type.resolve(campaign.resell_type);
        let resell_value = fields.resell_value.unwrap_or(campaign.resell_value);
        validate_resell(resell_type, resell_value)?;
        campaign.resell_type = resell_type;
        campaign.resell_value = resell_value;
    }

    match fields.auction_duration {
        AuctionDuration::Days(days) => {
            validate_duration(days, config.max_auction_days)?;
            campaign.auction_duration = Some(days);
            campaign.auction_end_time = Some(auction_end_from(now, days));
        }
        AuctionDuration::Custom => {
            campaign.auction_duration = None;
            campaign.auction_end_time = None;
        }
        AuctionDuration::Unchanged => {}
    }

    match fields.auction_end_time {
        EndTime::At(end) => {
            campaign.auction_duration = None;
            campaign.auction_end_time = Some(end);
        }
        EndTime::Cleared => {
            campaign.auction_duration = None;
            campaign.auction_end_time = None;
        }
        EndTime::Unchanged => {}
    }

    if let Some(category) = fields.category {
        campaign.category = category;
    }
    if let Some(description) = fields.description {
        campaign.description = description;
    }
    if let Some(token_name) = fields.token_name {
        campaign.token_name = token_name;
    }
    if let Some(token_symbol) = fields.token_symbol {
        campaign.token_symbol = token_symbol;
    }
    if let Some(total_tokens) = fields.total_tokens {
        campaign.total_tokens = total_tokens;
    }
    if let Some(per_token_price) = fields.per_token_price {
        campaign.per_token_price = per_token_price;
    }
    if let Some(fund_desired) = fields.fund_desired {
        campaign.fund_desired = fund_desired;
    }
    if let Some(nfts) = fields.nfts {
        campaign.nfts = nfts;
    }

    // a draft only receives its status on submission
    if !is_draft {
        refresh_status(campaign, now);
    }
    Ok(())
}

pub fn read_countdown(env: &Env, viewer: &Address) -> Option<CountdownWatch> {
    env.storage()
        .temporary()
        .get(&DataKey::Countdown(viewer.clone()))
}

pub fn write_countdown(env: &Env, viewer: &Address, watch: &CountdownWatch) {
    let key = DataKey::Countdown(viewer.clone());
    env.storage().temporary().set(&key, watch);
    env.storage()
        .temporary()
        .extend_ttl(&key, TTL_TEMPORARY, TTL_TEMPORARY);
}

pub fn clear_countdown(env: &Env, viewer: &Address) {
    env.storage()
        .temporary()
        .remove(&DataKey::Countdown(viewer.clone()));
}
