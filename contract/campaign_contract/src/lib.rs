#![no_std]

mod campaign;
mod errors;
mod events;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};
use studio_types::{CampaignStatus, Nft};

pub use errors::Error;
pub use storage_types::*;
pub use utils::*;

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Initialize the contract with an admin and its campaign settings
    pub fn initialize(env: Env, admin: Address, config: CampaignConfig) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        campaign::validate_config(&config)?;

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);
        campaign::extend_instance(&env);

        Ok(())
    }

    pub fn update_config(env: Env, config: CampaignConfig) -> Result<(), Error> {
        let admin = campaign::load_admin(&env)?;
        admin.require_auth();
        campaign::validate_config(&config)?;

        env.storage().instance().set(&DataKey::Config, &config);
        campaign::extend_instance(&env);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<CampaignConfig, Error> {
        campaign::load_config(&env)
    }

    /// Open a fresh draft for `owner`, replacing any draft in progress
    pub fn start_draft(env: Env, owner: Address) -> Result<Campaign, Error> {
        owner.require_auth();
        campaign::load_config(&env)?;

        let now = get_current_timestamp(&env);
        let campaign_id = campaign::next_campaign_id(&env);
        let draft = campaign::new_draft(&env, campaign_id, owner.clone(), now);

        campaign::write_draft(&env, &draft);
        campaign::extend_instance(&env);

        events::emit_draft_started(
            &env,
            events::DraftStartedEvent {
                campaign_id,
                owner,
            },
        );

        Ok(draft)
    }

    /// Merge form fields into the owner's draft
    pub fn update_draft(
        env: Env,
        owner: Address,
        fields: CampaignFields,
    ) -> Result<Campaign, Error> {
        owner.require_auth();
        let config = campaign::load_config(&env)?;

        let mut draft = campaign::read_draft(&env, &owner)?;
        let now = get_current_timestamp(&env);
        campaign::apply_fields(&mut draft, fields, now, &config, true)?;

        campaign::write_draft(&env, &draft);

        events::emit_draft_updated(
            &env,
            events::DraftUpdatedEvent {
                campaign_id: draft.id,
                owner,
                auction_end_time: draft.auction_end_time,
            },
        );
        Ok(draft)
    }

    /// Drop the owner's draft without submitting it
    pub fn discard_draft(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();

        let draft = campaign::read_draft(&env, &owner)?;
        env.storage()
            .persistent()
            .remove(&DataKey::Draft(owner.clone()));

        events::emit_draft_discarded(
            &env,
            events::DraftDiscardedEvent {
                campaign_id: draft.id,
                owner,
            },
        );
        Ok(())
    }

    pub fn get_draft(env: Env, owner: Address) -> Option<Campaign> {
        campaign::read_draft(&env, &owner).ok()
    }

    /// Turn the owner's draft into a listed campaign and make it current
    pub fn submit_draft(env: Env, owner: Address) -> Result<Campaign, Error> {
        owner.require_auth();
        let config = campaign::load_config(&env)?;

        let mut submitted = campaign::read_draft(&env, &owner)?;
        let now = get_current_timestamp(&env);
        campaign::refresh_status(&mut submitted, now);

        campaign::write_campaign(&env, &submitted);
        campaign::append_to_index(&env, submitted.id);
        campaign::set_current(&env, &owner, submitted.id);
        env.storage()
            .persistent()
            .remove(&DataKey::Draft(owner.clone()));

        if !meets_resell_minimum(
            submitted.resell_type,
            submitted.resell_value,
            config.min_resell_percentage,
        ) {
            log!(
                &env,
                "campaign {} resale deduction {} is below the advised {}%",
                submitted.id,
                submitted.resell_value,
                config.min_resell_percentage
            );
        }

        events::emit_campaign_submitted(
            &env,
            events::CampaignSubmittedEvent {
                campaign_id: submitted.id,
                owner,
                status: submitted.status,
                auction_end_time: submitted.auction_end_time,
            },
        );

        Ok(submitted)
    }

    /// Make a campaign the viewer's current one, with its status as of now
    pub fn select_campaign(
        env: Env,
        viewer: Address,
        campaign_id: CampaignId,
    ) -> Result<Campaign, Error> {
        viewer.require_auth();

        let now = get_current_timestamp(&env);
        let selected = campaign::read_campaign(&env, campaign_id, now)?;

        campaign::write_campaign(&env, &selected);
        campaign::set_current(&env, &viewer, campaign_id);
        Ok(selected)
    }

    pub fn current_campaign(env: Env, viewer: Address) -> Option<Campaign> {
        let campaign_id: CampaignId = env
            .storage()
            .persistent()
            .get(&DataKey::CurrentCampaign(viewer))?;
        let now = get_current_timestamp(&env);
        campaign::read_campaign(&env, campaign_id, now).ok()
    }

    /// Edit a submitted campaign. Only its owner may do so.
    pub fn update_campaign(
        env: Env,
        editor: Address,
        campaign_id: CampaignId,
        fields: CampaignFields,
    ) -> Result<Campaign, Error> {
        editor.require_auth();
        let config = campaign::load_config(&env)?;

        let now = get_current_timestamp(&env);
        let mut updated = campaign::read_campaign(&env, campaign_id, now)?;
        if updated.owner != editor {
            return Err(Error::NotCampaignOwner);
        }

        campaign::apply_fields(&mut updated, fields, now, &config, false)?;
        campaign::write_campaign(&env, &updated);

        events::emit_campaign_updated(
            &env,
            events::CampaignUpdatedEvent {
                campaign_id,
                status: updated.status,
                auction_end_time: updated.auction_end_time,
            },
        );

        Ok(updated)
    }

    /// Replace every listed campaign. Records missing from `campaigns` are
    /// dropped; statuses are recomputed against the ledger clock.
    pub fn set_campaigns(env: Env, campaigns: Vec<Campaign>) -> Result<Vec<Campaign>, Error> {
        let admin = campaign::load_admin(&env)?;
        admin.require_auth();

        let now = get_current_timestamp(&env);
        let mut index: Vec<CampaignId> = Vec::new(&env);
        let mut listed = Vec::new(&env);
        for mut record in campaigns.iter() {
            if index.contains(record.id) {
                return Err(Error::DuplicateCampaign);
            }
            campaign::validate_record(&record)?;
            campaign::refresh_status(&mut record, now);
            index.push_back(record.id);
            listed.push_back(record);
        }

        campaign::replace_all(&env, &index, &listed);
        campaign::extend_instance(&env);

        events::emit_campaigns_replaced(
            &env,
            events::CampaignsReplacedEvent {
                count: listed.len(),
            },
        );
        Ok(listed)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        campaign::read_campaign(&env, campaign_id, get_current_timestamp(&env))
    }

    /// All submitted campaigns in submission order
    pub fn list_campaigns(env: Env) -> Vec<Campaign> {
        let now = get_current_timestamp(&env);
        let mut campaigns = Vec::new(&env);
        for campaign_id in campaign::campaign_index(&env).iter() {
            if let Ok(listed) = campaign::read_campaign(&env, campaign_id, now) {
                campaigns.push_back(listed);
            }
        }
        campaigns
    }

    pub fn get_status(env: Env, campaign_id: CampaignId) -> Result<CampaignStatus, Error> {
        let now = get_current_timestamp(&env);
        Ok(campaign::read_campaign(&env, campaign_id, now)?.status)
    }

    pub fn time_remaining(env: Env, campaign_id: CampaignId) -> Result<TimeRemaining, Error> {
        let now = get_current_timestamp(&env);
        let listed = campaign::read_campaign(&env, campaign_id, now)?;
        let end = listed.auction_end_time.ok_or(Error::NoAuctionEndTime)?;
        Ok(derive_remaining(end, now))
    }

    /// NFTs of a campaign held by `owner`
    pub fn owned_nfts(
        env: Env,
        campaign_id: CampaignId,
        owner: Address,
    ) -> Result<Vec<Nft>, Error> {
        let now = get_current_timestamp(&env);
        let listed = campaign::read_campaign(&env, campaign_id, now)?;

        let mut owned = Vec::new(&env);
        for nft in listed.nfts.iter() {
            if nft.owner == owner {
                owned.push_back(nft);
            }
        }
        Ok(owned)
    }

    /// Whether the resale deduction honours the advised minimum. Advisory only.
    pub fn resell_meets_minimum(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        let config = campaign::load_config(&env)?;
        let now = get_current_timestamp(&env);
        let listed = campaign::read_campaign(&env, campaign_id, now)?;
        Ok(meets_resell_minimum(
            listed.resell_type,
            listed.resell_value,
            config.min_resell_percentage,
        ))
    }

    /// Start a live countdown for the viewer's detail view. A viewer has at
    /// most one countdown; starting another replaces it.
    pub fn start_countdown(
        env: Env,
        viewer: Address,
        campaign_id: CampaignId,
    ) -> Result<TimeRemaining, Error> {
        viewer.require_auth();
        let config = campaign::load_config(&env)?;

        let now = get_current_timestamp(&env);
        let watched = campaign::read_campaign(&env, campaign_id, now)?;
        let end = watched.auction_end_time.ok_or(Error::NoAuctionEndTime)?;

        let remaining = derive_remaining(end, now);
        let watch = CountdownWatch {
            campaign_id,
            started_at: now,
            next_tick_at: now.saturating_add(config.countdown_interval),
            last: remaining,
        };
        campaign::write_countdown(&env, &viewer, &watch);

        events::emit_countdown_started(
            &env,
            events::CountdownStartedEvent {
                campaign_id,
                viewer,
            },
        );

        Ok(remaining)
    }

    /// Advance the viewer's countdown. Recomputes once per configured
    /// interval and returns the last value in between. A watch whose
    /// campaign lost its end time is stopped and reports zero, ended.
    pub fn tick_countdown(env: Env, viewer: Address) -> Result<TimeRemaining, Error> {
        viewer.require_auth();
        let config = campaign::load_config(&env)?;

        let mut watch =
            campaign::read_countdown(&env, &viewer).ok_or(Error::CountdownNotRunning)?;
        let now = get_current_timestamp(&env);
        if now < watch.next_tick_at {
            return Ok(watch.last);
        }

        let watched = campaign::read_campaign(&env, watch.campaign_id, now)?;
        let Some(end) = watched.auction_end_time else {
            // end time cleared since the watch started; nothing left to count
            campaign::clear_countdown(&env, &viewer);
            events::emit_countdown_stopped(
                &env,
                events::CountdownStoppedEvent {
                    campaign_id: watch.campaign_id,
                    viewer,
                },
            );
            return Ok(derive_remaining(now, now));
        };

        watch.last = derive_remaining(end, now);
        watch.next_tick_at = now.saturating_add(config.countdown_interval);
        campaign::write_countdown(&env, &viewer, &watch);

        Ok(watch.last)
    }

    /// Stop the viewer's countdown once its view is gone
    pub fn stop_countdown(env: Env, viewer: Address) -> Result<(), Error> {
        viewer.require_auth();

        let watch = campaign::read_countdown(&env, &viewer).ok_or(Error::CountdownNotRunning)?;
        campaign::clear_countdown(&env, &viewer);

        events::emit_countdown_stopped(
            &env,
            events::CountdownStoppedEvent {
                campaign_id: watch.campaign_id,
                viewer,
            },
        );
        Ok(())
    }

    pub fn countdown_running(env: Env, viewer: Address) -> bool {
        campaign::read_countdown(&env, &viewer).is_some()
    }
}
