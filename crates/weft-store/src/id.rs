//! Opaque artifact identifiers.

use rand::Rng;

/// Characters used in artifact ids.
const ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated ids.
pub const ID_LEN: usize = 6;

/// A random uppercase-alphanumeric id like `"L2I5ZK"` for naming stored
/// artifacts.
///
/// Ids carry no meaning; collisions are possible and left to the caller
/// to handle (at 36^6 combinations they are rare in practice).
pub fn artifact_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_CHARS[rng.random_range(0..ID_CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn artifact_id_has_fixed_length_and_charset() {
        let id = artifact_id(&mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(id.len(), ID_LEN);
        assert!(id.bytes().all(|b| ID_CHARS.contains(&b)));
    }

    #[test]
    fn artifact_id_is_reproducible_from_seed() {
        let a = artifact_id(&mut ChaCha8Rng::seed_from_u64(2));
        let b = artifact_id(&mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a, b);
    }
}
