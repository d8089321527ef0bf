use soroban_sdk::Env;
use studio_types::CampaignStatus;

use crate::errors::Error;
use crate::storage_types::{ResellType, TimeRemaining, SECONDS_PER_DAY};

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * SECONDS_PER_DAY
}

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// End of an auction that starts now and lasts `days` whole days.
pub fn auction_end_from(now: u64, days: u32) -> u64 {
    now.saturating_add(days_to_seconds(days))
}

/// Status of an auction ending at `end_time`, observed at `now`.
///
/// No end time means the campaign is still a draft. An auction whose end
/// time equals `now` has ended.
pub fn derive_status(end_time: Option<u64>, now: u64) -> CampaignStatus {
    match end_time {
        None => CampaignStatus::Draft,
        Some(end) if end <= now => CampaignStatus::Ended,
        Some(_) => CampaignStatus::Active,
    }
}

/// Time left until `end_time`, split into days, hours, minutes and seconds
/// by floor division. Zero with `has_ended` set once `now` reaches the end.
pub fn derive_remaining(end_time: u64, now: u64) -> TimeRemaining {
    if end_time <= now {
        return TimeRemaining {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            has_ended: true,
        };
    }

    let left = end_time - now;
    TimeRemaining {
        days: left / SECONDS_PER_DAY,
        hours: (left % SECONDS_PER_DAY) / 3600,
        minutes: (left % 3600) / 60,
        seconds: left % 60,
        has_ended: false,
    }
}

/// Validate duration is reasonable
pub fn validate_duration(days: u32, max_days: u32) -> Result<(), Error> {
    if days == 0 || days > max_days {
        return Err(Error::InvalidDuration);
    }
    Ok(())
}

pub fn validate_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::NegativeAmount);
    }
    Ok(())
}

/// A percentage resale deduction is bounded by 100; a fixed one only by zero.
pub fn validate_resell(resell_type: ResellType, value: i128) -> Result<(), Error> {
    validate_amount(value)?;
    if resell_type == ResellType::Percentage && value > 100 {
        return Err(Error::InvalidResellValue);
    }
    Ok(())
}

/// Advisory resale rule. Fixed deductions are expressed in currency, so
/// only percentage deductions can be compared against the minimum.
pub fn meets_resell_minimum(resell_type: ResellType, value: i128, min_percentage: u32) -> bool {
    match resell_type {
        ResellType::Percentage => value >= min_percentage as i128,
        ResellType::Fixed => true,
    }
}
