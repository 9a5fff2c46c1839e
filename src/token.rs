use rand::Rng as _;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of ticket, comment and log entry identifiers.
pub const ID_LEN: usize = 8;

/// Length of generated reporter passwords.
pub const SECRET_LEN: usize = 16;

/// Generates an opaque lowercase base-36 token.
///
/// Collision probability is negligible at the expected store sizes
/// (tens of thousands of records), and tokens are drawn from the thread
/// RNG, so a known token gives no purchase on guessing another one.
pub fn generate(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
