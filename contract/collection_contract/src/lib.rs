#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use studio_types::Nft;

mod errors;
mod events;
mod search;
mod storage;


pub use crate::errors::Error;
pub use crate::storage::{NftCollection, PageCursor, PageUpdate, Pagination};
use crate::storage::{DataKey, MAX_NAME_LEN, TTL_INSTANCE, TTL_PERSISTENT};

#[contract]
pub struct CollectionContract;

#[contractimpl]
impl CollectionContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .persistent()
            .set(&DataKey::Collections, &Vec::<NftCollection>::new(&env));
        extend_instance(&env);
        Ok(())
    }

    /// Replace the whole collection list. A record carrying NFTs replaces the
    /// list stored under its id; a record without any keeps the stored one.
    pub fn set_collections(env: Env, collections: Vec<NftCollection>) -> Result<(), Error> {
        require_admin(&env)?;

        let mut seen: Vec<String> = Vec::new(&env);
        for collection in collections.iter() {
            check_name(&collection.name)?;
            if seen.contains(&collection.id) {
                return Err(Error::DuplicateCollection);
            }
            seen.push_back(collection.id);
        }

        for collection in collections.iter() {
            seed_nfts(&env, &collection);
        }
        write_collections(&env, &collections);
        events::emit_collections_replaced(
            &env,
            events::CollectionsReplacedEvent {
                count: collections.len(),
            },
        );
        Ok(())
    }

    pub fn add_collection(env: Env, collection: NftCollection) -> Result<(), Error> {
        require_admin(&env)?;
        check_name(&collection.name)?;

        let mut collections = read_collections(&env);
        if find_collection(&collections, &collection.id).is_some() {
            return Err(Error::CollectionExists);
        }
        seed_nfts(&env, &collection);
        collections.push_back(collection.clone());
        write_collections(&env, &collections);

        events::emit_collection_added(
            &env,
            events::CollectionAddedEvent {
                collection_id: collection.id,
                name: collection.name,
            },
        );
        Ok(())
    }

    /// Replace the NFTs listed under a registered collection
    pub fn set_nfts(env: Env, collection_id: String, nfts: Vec<Nft>) -> Result<(), Error> {
        require_admin(&env)?;
        require_collection(&env, &collection_id)?;

        write_nfts(&env, &collection_id, &nfts);
        events::emit_nfts_listed(
            &env,
            events::NftsListedEvent {
                collection_id,
                count: nfts.len(),
            },
        );
        Ok(())
    }

    /// Append an NFT to a registered collection, creating its list on first use
    pub fn add_nft(env: Env, collection_id: String, nft: Nft) -> Result<(), Error> {
        require_admin(&env)?;
        require_collection(&env, &collection_id)?;

        let mut nfts = read_nfts(&env, &collection_id);
        nfts.push_back(nft.clone());
        write_nfts(&env, &collection_id, &nfts);

        events::emit_nft_added(
            &env,
            events::NftAddedEvent {
                collection_id,
                nft_id: nft.id,
            },
        );
        Ok(())
    }

    pub fn collections(env: Env) -> Vec<NftCollection> {
        let mut listed = Vec::new(&env);
        for collection in read_collections(&env).iter() {
            listed.push_back(with_nfts(&env, collection));
        }
        listed
    }

    pub fn get_collection(env: Env, collection_id: String) -> Result<NftCollection, Error> {
        let collections = read_collections(&env);
        let collection =
            find_collection(&collections, &collection_id).ok_or(Error::CollectionNotFound)?;
        Ok(with_nfts(&env, collection))
    }

    pub fn nfts(env: Env, collection_id: String) -> Vec<Nft> {
        read_nfts(&env, &collection_id)
    }

    /// Collections whose name contains `query`, ignoring ASCII case
    pub fn search_collections(env: Env, query: String) -> Result<Vec<NftCollection>, Error> {
        check_name(&query)?;

        let mut found = Vec::new(&env);
        for collection in read_collections(&env).iter() {
            if search::name_matches(&collection.name, &query) {
                found.push_back(with_nfts(&env, collection));
            }
        }
        Ok(found)
    }

    pub fn select_collection(env: Env, viewer: Address, collection_id: String) -> Result<(), Error> {
        viewer.require_auth();
        require_collection(&env, &collection_id)?;

        let key = DataKey::SelectedCollection(viewer);
        env.storage().persistent().set(&key, &collection_id);
        extend_persistent(&env, &key);
        Ok(())
    }

    pub fn selected_collection(env: Env, viewer: Address) -> Option<String> {
        env.storage()
            .persistent()
            .get(&DataKey::SelectedCollection(viewer))
    }

    /// Set or clear the NFT the viewer is looking at
    pub fn set_active_nft(env: Env, viewer: Address, nft: Option<Nft>) {
        viewer.require_auth();

        let key = DataKey::ActiveNft(viewer);
        match nft {
            Some(nft) => {
                env.storage().persistent().set(&key, &nft);
                extend_persistent(&env, &key);
            }
            None => env.storage().persistent().remove(&key),
        }
    }

    pub fn active_nft(env: Env, viewer: Address) -> Option<Nft> {
        env.storage().persistent().get(&DataKey::ActiveNft(viewer))
    }

    /// Merge a page update into one of the viewer's cursors. Pages are
    /// not checked against the stored list lengths.
    pub fn set_pagination(
        env: Env,
        viewer: Address,
        cursor: PageCursor,
        update: PageUpdate,
    ) -> Result<Pagination, Error> {
        viewer.require_auth();
        if update.current_page == Some(0) || update.total_pages == Some(0) {
            return Err(Error::InvalidPage);
        }

        let mut page = read_pagination(&env, &viewer, cursor);
        if let Some(current_page) = update.current_page {
            page.current_page = current_page;
        }
        if let Some(total_pages) = update.total_pages {
            page.total_pages = total_pages;
        }

        let key = DataKey::Pagination(viewer, cursor);
        env.storage().persistent().set(&key, &page);
        extend_persistent(&env, &key);
        Ok(page)
    }

    pub fn pagination(env: Env, viewer: Address, cursor: PageCursor) -> Pagination {
        read_pagination(&env, &viewer, cursor)
    }
}

fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn require_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(())
}

fn check_name(name: &String) -> Result<(), Error> {
    if name.len() as usize > MAX_NAME_LEN {
        return Err(Error::NameTooLong);
    }
    Ok(())
}

fn read_collections(env: &Env) -> Vec<NftCollection> {
    env.storage()
        .persistent()
        .get(&DataKey::Collections)
        .unwrap_or(Vec::new(env))
}

/// Records are stored without their NFTs; `DataKey::Nfts` holds those.
fn write_collections(env: &Env, collections: &Vec<NftCollection>) {
    let mut stored = Vec::new(env);
    for mut collection in collections.iter() {
        collection.nfts = Vec::new(env);
        stored.push_back(collection);
    }
    env.storage()
        .persistent()
        .set(&DataKey::Collections, &stored);
    extend_persistent(env, &DataKey::Collections);
}

fn seed_nfts(env: &Env, collection: &NftCollection) {
    if !collection.nfts.is_empty() {
        write_nfts(env, &collection.id, &collection.nfts);
    }
}

fn with_nfts(env: &Env, mut collection: NftCollection) -> NftCollection {
    collection.nfts = read_nfts(env, &collection.id);
    collection
}

fn find_collection(collections: &Vec<NftCollection>, collection_id: &String) -> Option<NftCollection> {
    collections.iter().find(|c| c.id == *collection_id)
}

fn require_collection(env: &Env, collection_id: &String) -> Result<(), Error> {
    match find_collection(&read_collections(env), collection_id) {
        Some(_) => Ok(()),
        None => Err(Error::CollectionNotFound),
    }
}

fn read_nfts(env: &Env, collection_id: &String) -> Vec<Nft> {
    env.storage()
        .persistent()
        .get(&DataKey::Nfts(collection_id.clone()))
        .unwrap_or(Vec::new(env))
}

fn write_nfts(env: &Env, collection_id: &String, nfts: &Vec<Nft>) {
    let key = DataKey::Nfts(collection_id.clone());
    env.storage().persistent().set(&key, nfts);
    extend_persistent(env, &key);
}

fn read_pagination(env: &Env, viewer: &Address, cursor: PageCursor) -> Pagination {
    env.storage()
        .persistent()
        .get(&DataKey::Pagination(viewer.clone(), cursor))
        .unwrap_or(Pagination::first_page())
}
