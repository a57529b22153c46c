//! Solution digests: canonical JSON bytes + domain-separated SHA-256.
//!
//! Digests make "same input, same answer" checkable across invocations and
//! across processes. Exactly one place produces canonical bytes
//! ([`canonical_json_bytes`]) and one place hashes them ([`canonical_hash`]).
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. No whitespace (compact form: `{"a":1,"b":2}`).
//! 3. Strings use `serde_json`'s RFC 8259 escaping.
//! 4. Numbers must be integers. Floats are rejected to keep platform
//!    formatting out of the digest; callers render real values as
//!    fixed-precision strings first.

use std::io::Write;

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Domain prefix for solution-path digests (river crossing, jugs).
pub const DOMAIN_SOLUTION_PATH: &[u8] = b"STATECRAFT::SOLUTION_PATH::V1\0";

/// Domain prefix for route-set digests (road map).
pub const DOMAIN_ROUTE_SET: &[u8] = b"STATECRAFT::ROUTE_SET::V1\0";

/// A solution digest, printed as `sha256:<hex>`.
///
/// Digests are produced by [`canonical_hash`]; [`ContentHash::parse`] reads
/// one back from fixture output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    text: String,
    split: usize,
}

impl ContentHash {
    /// Read a digest printed as `<algorithm>:<lowercase hex>`.
    ///
    /// `None` unless both halves are present and the digest half is
    /// lowercase hex.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let (algorithm, digest) = text.split_once(':')?;
        let hex_ok = !digest.is_empty()
            && digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        (!algorithm.is_empty() && hex_ok).then(|| Self {
            text: text.to_string(),
            split: algorithm.len(),
        })
    }

    /// Name of the hash function, e.g. `sha256`.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.text[..self.split]
    }

    /// Digest bytes as lowercase hex.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.text[self.split + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// SHA-256 over `domain || data`, as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        split: "sha256".len(),
        text: format!("sha256:{hex_digest}"),
    }
}

/// A JSON value could not be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] for any float value.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Null => buf.extend_from_slice(b"null"),
        Value::Bool(true) => buf.extend_from_slice(b"true"),
        Value::Bool(false) => buf.extend_from_slice(b"false"),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                let _ = write!(buf, "{i}");
            } else if let Some(u) = n.as_u64() {
                let _ = write!(buf, "{u}");
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::String(s) => write_string(buf, s),
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            buf.push(b'{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_string(buf, key);
                buf.push(b':');
                write_value(buf, &map[key.as_str()])?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    // Serializing a &str into a Vec cannot fail.
    let _ = serde_json::to_writer(&mut *buf, s);
}
