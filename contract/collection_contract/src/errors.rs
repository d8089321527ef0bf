use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    CollectionNotFound = 3,
    CollectionExists = 4,
    DuplicateCollection = 5, // repeated id inside one replacement list
    NameTooLong = 6,
    InvalidPage = 7,
}
