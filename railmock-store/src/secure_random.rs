use rand::{rngs::OsRng, RngCore};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or above it
/// are discarded so every symbol is equally likely.
const ACCEPT_BELOW: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Alphanumeric string drawn from the OS random source.
pub fn secure_random_str(len: usize) -> Result<String, rand::Error> {
    let mut out = String::with_capacity(len);
    let mut bytes = vec![0u8; len.max(1)];

    while out.len() < len {
        OsRng.try_fill_bytes(&mut bytes)?;
        for c in accepted_symbols(&bytes).take(len - out.len()) {
            out.push(c);
        }
    }

    Ok(out)
}

fn accepted_symbols(bytes: &[u8]) -> impl Iterator<Item = char> + '_ {
    bytes
        .iter()
        .filter(|b| **b < ACCEPT_BELOW)
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
}
