use soroban_sdk::{contracttype, Env, String, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CollectionsReplacedEvent {
    pub count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct CollectionAddedEvent {
    pub collection_id: String,
    pub name: String,
}

#[contracttype]
#[derive(Clone)]
pub struct NftsListedEvent {
    pub collection_id: String,
    pub count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct NftAddedEvent {
    pub collection_id: String,
    pub nft_id: String,
}

pub fn emit_collections_replaced(env: &Env, event: CollectionsReplacedEvent) {
    env.events()
        .publish((Symbol::new(env, "collections_replaced"),), event);
}

pub fn emit_collection_added(env: &Env, event: CollectionAddedEvent) {
    env.events()
        .publish((Symbol::new(env, "collection_added"),), event);
}

pub fn emit_nfts_listed(env: &Env, event: NftsListedEvent) {
    env.events().publish((Symbol::new(env, "nfts_listed"),), event);
}

pub fn emit_nft_added(env: &Env, event: NftAddedEvent) {
    env.events().publish((Symbol::new(env, "nft_added"),), event);
}
