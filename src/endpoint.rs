use url::Url;

use crate::types::constants::{SCHEME_WS, SCHEME_WSS};
use crate::types::{Result, SocketError};

/// Derives the concrete wire address for a logical path from the
/// application origin.
///
/// The scheme is `wss` iff the origin itself is secure (`https` or
/// `wss`); the host, including any port, is taken from the origin's
/// authority. No explicit host/port override is supported.
pub fn resolve_wire_url(origin: &str, path: &str) -> Result<Url> {
    let origin = Url::parse(origin)?;

    let scheme = match origin.scheme() {
        "https" | "wss" => SCHEME_WSS,
        "http" | "ws" => SCHEME_WS,
        other => {
            return Err(SocketError::Endpoint(format!(
                "unsupported origin scheme: {other}"
            )));
        }
    };

    if origin.host_str().is_none() {
        return Err(SocketError::Endpoint(format!("origin has no host: {origin}")));
    }

    let mut url = origin;
    // http(s) and ws(s) are all "special" schemes, so this cannot fail
    url.set_scheme(scheme)
        .map_err(|_| SocketError::Endpoint(format!("cannot set scheme {scheme}")))?;

    let path = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };

    Ok(url.join(&path)?)
}
