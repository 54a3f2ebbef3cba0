/// Request signing for the `X-App-Signature` header
///
/// Every outbound request carries `"{timestamp}.{digest}"` where `timestamp` is
/// milliseconds since the epoch and `digest` is the lowercase hex
/// HMAC-SHA256 of the timestamp's decimal string, keyed with the app secret.
/// The server checks the timestamp against a replay window, so a signature is
/// computed fresh for each request and never reused.
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

type HmacSha256 = Hmac<Sha256>;

/// A computed request signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub timestamp: u64,
    pub digest: String,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.timestamp, self.digest)
    }
}

/// Lowercase hex HMAC-SHA256 of `message` keyed with `secret`
pub fn hex_digest(secret: &[u8], message: &[u8]) -> String {
    // HMAC pads or hashes the key, so every key length is valid
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts keys of any length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Sign a timestamp with the given secret. Pure.
pub fn sign(secret: &[u8], timestamp_millis: u64) -> Signature {
    let message = timestamp_millis.to_string();
    Signature { timestamp: timestamp_millis, digest: hex_digest(secret, message.as_bytes()) }
}

/// Signature source owning the shared secret
///
/// Timestamps issued by one signer never go backwards, even if the wall clock does.
pub struct Signer {
    secret: Vec<u8>,
    last_issued: AtomicU64,
}

impl Signer {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self { secret: secret.into(), last_issued: AtomicU64::new(0) }
    }

    /// Sign using `now_millis` as the clock reading
    pub fn sign_at(&self, now_millis: u64) -> Signature {
        let previous = self.last_issued.fetch_max(now_millis, Ordering::SeqCst);
        sign(&self.secret, previous.max(now_millis))
    }

    /// Sign using the current wall clock
    pub fn sign_now(&self) -> Signature {
        self.sign_at(current_millis())
    }
}

fn current_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
