use soroban_sdk::String;

use crate::storage::MAX_NAME_LEN;

fn copy_bytes<'a>(text: &String, buf: &'a mut [u8; MAX_NAME_LEN]) -> Option<&'a [u8]> {
    let len = text.len() as usize;
    if len > MAX_NAME_LEN {
        return None;
    }
    text.copy_into_slice(&mut buf[..len]);
    Some(&buf[..len])
}

/// Case-insensitive (ASCII) substring match of `query` in `name`.
/// An empty query matches every name.
pub fn name_matches(name: &String, query: &String) -> bool {
    let mut name_buf = [0u8; MAX_NAME_LEN];
    let mut query_buf = [0u8; MAX_NAME_LEN];

    let (Some(name), Some(query)) = (
        copy_bytes(name, &mut name_buf),
        copy_bytes(query, &mut query_buf),
    ) else {
        return false;
    };

    if query.is_empty() {
        return true;
    }
    if query.len() > name.len() {
        return false;
    }

    name.windows(query.len())
        .any(|window| window.eq_ignore_ascii_case(query))
}
