//! Aliyun RPC-style request signing (signature version 1.0).
//!
//! Every request carries a set of common parameters and a `Signature`
//! computed as Base64 HMAC-SHA1 over a canonicalized form of the full
//! parameter set, keyed with the access key secret plus a trailing `&`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;
use uuid::Uuid;

use crate::config::Credentials;

/// Characters left bare by the RPC encoding rules: RFC 3986 unreserved,
/// alphanumerics plus `-`, `_`, `.`, `~`.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

type HmacSha1 = Hmac<Sha1>;

/// Appends the common RPC parameters and the request signature.
///
/// `params` holds the action-specific parameters (`Action`, `Version`, and
/// the listing dimensions); the returned vector is the full signed
/// parameter set, ready to serialize as a query string.
pub(crate) fn sign_request(
    mut params: Vec<(String, String)>,
    credentials: &Credentials,
) -> Vec<(String, String)> {
    params.push(("Format".to_owned(), "JSON".to_owned()));
    params.push(("AccessKeyId".to_owned(), credentials.access_key_id.clone()));
    params.push(("SignatureMethod".to_owned(), "HMAC-SHA1".to_owned()));
    params.push(("SignatureVersion".to_owned(), "1.0".to_owned()));
    params.push(("SignatureNonce".to_owned(), Uuid::new_v4().to_string()));
    params.push((
        "Timestamp".to_owned(),
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    ));

    let to_sign = string_to_sign(&canonicalized_query(&params));
    let signed = signature(&to_sign, &credentials.access_key_secret);
    params.push(("Signature".to_owned(), signed));

    params
}

/// Percent-encodes one key or value for the canonicalized query string.
fn encode(component: &str) -> String {
    utf8_percent_encode(component, ENCODE_SET).to_string()
}

/// Builds the canonicalized query string: parameters sorted by key, keys
/// and values percent-encoded, pairs joined with `=` and `&`.
fn canonicalized_query(params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    sorted
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the string-to-sign for a GET request.
fn string_to_sign(canonicalized: &str) -> String {
    format!("GET&{}&{}", encode("/"), encode(canonicalized))
}

/// Computes the Base64 HMAC-SHA1 signature over the string-to-sign.
fn signature(to_sign: &str, access_key_secret: &str) -> String {
    let key = format!("{access_key_secret}&");
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(to_sign.as_bytes());

    STANDARD.encode(mac.finalize().into_bytes())
}
