use xxhash_rust::xxh64::xxh64;

use crate::types::TextRange;

const BASE62_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode a u64 value as a base62 string (11 chars, zero-padded).
fn base62_encode(mut value: u64) -> String {
    let mut result = Vec::with_capacity(11);
    while value > 0 {
        let idx = (value % 62) as usize;
        result.push(BASE62_CHARS[idx] as char);
        value /= 62;
    }
    while result.len() < 11 {
        result.push('0');
    }
    result.iter().rev().collect()
}

/// Compute the fingerprint of a reported violation.
///
/// fingerprint = base62(xxhash64(issue_id + file + callee + statement_range))
///
/// Stable across runs as long as the call stays at the same place, so tools
/// can track a violation between analyses.
pub fn compute_fingerprint(issue_id: &str, file: &str, callee: &str, range: TextRange) -> String {
    let span = range.to_string();
    let mut input =
        String::with_capacity(issue_id.len() + file.len() + callee.len() + span.len() + 3);
    input.push_str(issue_id);
    input.push('\0');
    input.push_str(file);
    input.push('\0');
    input.push_str(callee);
    input.push('\0');
    input.push_str(&span);

    base62_encode(xxh64(input.as_bytes(), 0))
}
