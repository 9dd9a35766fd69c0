//! HMAC request signing for the Comlink proxy.
//!
//! Comlink verifies signed requests by recomputing an HMAC-SHA256 digest over
//! the request time, the HTTP method, the endpoint path, and an MD5 digest of
//! the exact body bytes it received. The client therefore signs the very
//! buffer it is about to transmit; serializing twice would risk a byte-level
//! mismatch and a rejected request.
//!
//! Everything in this module is pure so signatures can be asserted in unit
//! tests without a network.

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha256;

use crate::config::ComlinkCredentials;

type HmacSha256 = Hmac<Sha256>;

/// Computes the `Authorization` header value for a signed Comlink request.
///
/// The digest covers, in order: the millisecond timestamp (also sent verbatim
/// as `X-Date`), the uppercase HTTP method, the endpoint path including its
/// leading slash and excluding any query string, and the lowercase hex MD5
/// digest of `body`, which must be the exact bytes that get transmitted.
///
/// # Arguments
/// - `credentials` - Complete HMAC key pair
/// - `timestamp_millis` - Request time in milliseconds since the Unix epoch
/// - `method` - Uppercase HTTP method, `"POST"` for every signed endpoint
/// - `path` - Endpoint path with leading slash, e.g. `"/player"`
/// - `body` - Serialized request body bytes
///
/// # Returns
/// - `HMAC-SHA256 Credential=<access key>,Signature=<hex digest>`
pub fn sign(
    credentials: &ComlinkCredentials,
    timestamp_millis: u64,
    method: &str,
    path: &str,
    body: &[u8],
) -> String {
    let request_time = timestamp_millis.to_string();
    let body_digest = hex::encode(Md5::digest(body));

    // HMAC accepts keys of any length, so this cannot fail.
    let mut mac = HmacSha256::new_from_slice(credentials.secret_key.as_bytes())
        .expect("HMAC key of any length is valid");
    mac.update(request_time.as_bytes());
    mac.update(method.as_bytes());
    mac.update(path.as_bytes());
    mac.update(body_digest.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    format!(
        "HMAC-SHA256 Credential={},Signature={}",
        credentials.access_key, signature
    )
}
