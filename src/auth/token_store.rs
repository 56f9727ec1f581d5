//! Bearer token persistence in a browser cookie.
//!
//! The token lives in a single cookie slot with an absolute expiry one hour after
//! it was written. The cookie is not marked `HttpOnly` or `Secure` because the
//! dashboard reads it from script.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::{Duration, OffsetDateTime};

pub const TOKEN_TTL: Duration = Duration::hours(1);
pub const TOKEN_PATH: &str = "/";

#[derive(Clone, Debug)]
pub struct TokenStore {
    cookie_name: String,
}

impl TokenStore {
    #[must_use]
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self { cookie_name: cookie_name.into() }
    }

    /// Writes the token, replacing any previous one.
    #[must_use]
    pub fn set_token(&self, jar: CookieJar, token: impl Into<String>) -> CookieJar {
        self.set_token_at(jar, token, OffsetDateTime::now_utc())
    }

    fn set_token_at(&self, jar: CookieJar, token: impl Into<String>, now: OffsetDateTime) -> CookieJar {
        let cookie = Cookie::build((self.cookie_name.clone(), token.into())).path(TOKEN_PATH).expires(now + TOKEN_TTL);
        jar.add(cookie)
    }

    /// Reads the current token. Expired cookies are never sent by the browser, so
    /// no expiry check happens here.
    #[must_use]
    pub fn get_token(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.cookie_name).map(|cookie| cookie.value().to_string())
    }

    /// Removes the token. A cookie that arrived with the request is overwritten by an
    /// already-expired one.
    #[must_use]
    pub fn delete_token(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(self.cookie_name.clone()).path(TOKEN_PATH))
    }
}
