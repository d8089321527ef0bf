use soroban_sdk::{contracttype, Address, String, Vec};
use studio_types::Nft;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Collections,
    Nfts(String), // collection id -> NFTs listed under it
    SelectedCollection(Address),
    ActiveNft(Address),
    Pagination(Address, PageCursor),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftCollection {
    pub id: String,
    pub name: String,
    pub nfts: Vec<Nft>, // filled from DataKey::Nfts on read
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageCursor {
    Collections,
    Nfts,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageUpdate {
    pub current_page: Option<u32>,
    pub total_pages: Option<u32>,
}

pub const MAX_NAME_LEN: usize = 64;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

impl Pagination {
    pub fn first_page() -> Self {
        Pagination {
            current_page: 1,
            total_pages: 1,
        }
    }
}
