use rand::Rng;

/// Prefix of every generated identifier.
pub const ID_PREFIX: &str = "id_";
/// Number of random characters following [`ID_PREFIX`].
pub const ID_RANDOM_LEN: usize = 9;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random element id such as `id_k3x9q0a7z`.
///
/// Collisions are unlikely but not checked; do not use as a primary key.
pub fn generate_id() -> String {
    generate_id_with(&mut rand::thread_rng())
}

/// Same as [`generate_id`] with a caller-provided random source.
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(ID_PREFIX.len() + ID_RANDOM_LEN);
    id.push_str(ID_PREFIX);
    for _ in 0..ID_RANDOM_LEN {
        let idx = rng.gen_range(0..ALPHABET.len());
        id.push(ALPHABET[idx] as char);
    }
    id
}
