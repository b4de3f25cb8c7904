//! Session marker
//!
//! The only artifact of a "logged in" state: a cookie flag with a 24 hour
//! lifetime. It carries no identity and no signature, so holding it proves
//! that a login form was once submitted, nothing more.

use actix_web::cookie::time::{Duration, OffsetDateTime};
use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;

pub const COOKIE_NAME: &str = "auth";
pub const COOKIE_VALUE: &str = "authenticated";
pub const SESSION_TTL_HOURS: i64 = 24;

/// Proof that the request carried a well-formed session marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionMarker {
    _private: (),
}

impl SessionMarker {
    /// Read the marker from a request's cookies.
    pub fn from_request(req: &HttpRequest) -> Option<Self> {
        req.cookie(COOKIE_NAME)
            .and_then(|c| Self::from_cookie_value(c.value()))
    }

    /// A marker is present only when the value matches exactly.
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        (value == COOKIE_VALUE).then_some(Self { _private: () })
    }

    /// Cookie set on successful login.
    pub fn issue() -> Cookie<'static> {
        let ttl = Duration::hours(SESSION_TTL_HOURS);
        Cookie::build(COOKIE_NAME, COOKIE_VALUE)
            .path("/")
            .max_age(ttl)
            .expires(OffsetDateTime::now_utc() + ttl)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// Already-expired cookie that makes the browser drop the marker.
    pub fn revoke() -> Cookie<'static> {
        Cookie::build(COOKIE_NAME, "")
            .path("/")
            .expires(OffsetDateTime::UNIX_EPOCH)
            .finish()
    }

    /// `Cookie` request header value for forwarding the marker to another service.
    pub fn header_value(&self) -> String {
        format!("{COOKIE_NAME}={COOKIE_VALUE}")
    }
}
