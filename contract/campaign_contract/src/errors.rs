use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NoDraft = 3,
    CampaignNotFound = 4,
    NotCampaignOwner = 5,
    NegativeAmount = 6,
    InvalidResellValue = 7,      // percentage above 100
    InvalidDuration = 8,
    EndTimeIsDerived = 9,        // drafts only take a duration
    ConflictingAuctionFields = 10, // duration and end time in one edit
    NoAuctionEndTime = 11,
    CountdownNotRunning = 12,
    InvalidConfig = 13,
    DuplicateCampaign = 14,
}
