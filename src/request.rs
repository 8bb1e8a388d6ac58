//! Request accessor and bearer credential extraction

use http::header::AUTHORIZATION;

/// Read access to named headers of an inbound request
///
/// The one seam between the verification core and whatever server
/// framework carries the request. Implementations exist for the `http`
/// crate's types; other frameworks implement it in a few lines.
pub trait BearerSource {
    /// Read a named header value, if present and representable as a string
    fn header(&self, name: &str) -> Option<&str>;
}

impl<T> BearerSource for http::Request<T> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers().get(name).and_then(|value| value.to_str().ok())
    }
}

impl BearerSource for http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Extract the bearer credential from a request's `Authorization` header
///
/// The prefix match is case-sensitive (`Bearer `, exactly); the remainder
/// is trimmed of surrounding whitespace. Absence or a wrong prefix yields
/// no credential, not an error.
pub fn extract_bearer<R: BearerSource + ?Sized>(request: &R) -> Option<&str> {
    let value = request.header(AUTHORIZATION.as_str())?;
    let credential = value.strip_prefix("Bearer ")?.trim();
    (!credential.is_empty()).then_some(credential)
}
