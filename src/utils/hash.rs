use sha2::{Digest, Sha256};

/// Length of the short fingerprint kept in the state file.
pub const FINGERPRINT_LEN: usize = 8;

/// SHA-256 over `parts` joined with newlines, as lowercase hex.
pub fn sha256_lines<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hasher = Sha256::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            hasher.update(b"\n");
        }
        hasher.update(part.as_ref().as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Short fingerprint: the first 8 hex chars of [`sha256_lines`].
pub fn fingerprint<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sha256_lines(parts)[..FINGERPRINT_LEN].to_string()
}
