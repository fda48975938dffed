//! RP ID validation
//!
//! An RP ID scopes a credential to a domain. It is only acceptable when it
//! is a registrable suffix of the caller origin's host: either the host
//! itself, or a parent domain that is not a public suffix (an RP ID of
//! "com" would scope a credential to every .com site).

use url::{Host, Url};

/// Whether `rp_id` is a registrable suffix of the host of `origin`
///
/// Comparison is case-insensitive. IP-literal origins never match, and
/// `origin` must parse as an HTTPS URL.
pub fn is_valid_rp_id(rp_id: &str, origin: &str) -> bool {
    let Ok(url) = Url::parse(origin) else {
        return false;
    };
    if url.scheme() != "https" {
        return false;
    }
    let Some(Host::Domain(domain)) = url.host() else {
        return false;
    };

    let host = domain.to_ascii_lowercase();
    let rp_id = rp_id.to_ascii_lowercase();

    if host == rp_id {
        return true;
    }
    host.ends_with(&format!(".{rp_id}")) && !is_public_suffix(&rp_id)
}

/// Whether `domain` is exactly a known public suffix (e.g. "com", "co.uk")
fn is_public_suffix(domain: &str) -> bool {
    psl::suffix(domain.as_bytes())
        .map(|suffix| suffix.is_known() && suffix.as_bytes() == domain.as_bytes())
        .unwrap_or(false)
}
