//! One-shot flash messages carried across a redirect in a signed cookie
//!
//! Only the failure kind identifier is stored; the message text is looked
//! up when rendering, so nothing user-supplied ends up in the cookie.

use crate::workflow::FailureKind;
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

/// Name of the flash cookie
pub const FLASH_COOKIE: &str = "newsbrief_flash";

/// Derives the cookie signing key from the configured secret
///
/// The secret may be any length; it is stretched to the 64 bytes the
/// signing key requires.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Stores a flash message for the next page view
pub fn set_flash(jar: SignedCookieJar, kind: FailureKind) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, kind.as_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    jar.add(cookie)
}

/// Takes the pending flash message, if any, and clears it
///
/// Cookies with a bad signature or an unknown identifier are dropped
/// without a message.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<&'static str>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let message = cookie
        .value()
        .parse::<FailureKind>()
        .ok()
        .map(|kind| kind.message());

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, message)
}
