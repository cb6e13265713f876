//! Identifier Generator
//!
//! Short opaque ids for items created on this client. Collisions are
//! possible in principle and are not checked for.

use rand::Rng;

/// Length of every generated id
pub const ID_LEN: usize = 7;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh lowercase base-36 id of [`ID_LEN`] characters
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ids_do_not_repeat_for_a_pantry_sized_batch() {
        let ids: HashSet<String> = (0..500).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 500);
    }
}
