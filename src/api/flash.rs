//! One-shot notices carried across a redirect in a cookie and cleared by the
//! next rendered page.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};
use tracing::debug;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

pub fn success(cookies: &Cookies, text: impl Into<String>) {
    push(cookies, FlashLevel::Success, text.into());
}

pub fn info(cookies: &Cookies, text: impl Into<String>) {
    push(cookies, FlashLevel::Info, text.into());
}

fn push(cookies: &Cookies, level: FlashLevel, text: String) {
    let mut messages = read(cookies);
    messages.push(FlashMessage { level, text });

    let Ok(json) = serde_json::to_vec(&messages) else {
        return;
    };

    let mut cookie = Cookie::new(FLASH_COOKIE, URL_SAFE_NO_PAD.encode(json));
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookies.add(cookie);
}

/// Returns pending messages and clears the cookie.
pub fn take(cookies: &Cookies) -> Vec<FlashMessage> {
    let messages = read(cookies);
    if cookies.get(FLASH_COOKIE).is_some() {
        cookies.remove(Cookie::build((FLASH_COOKIE, "")).path("/").into());
    }
    messages
}

fn read(cookies: &Cookies) -> Vec<FlashMessage> {
    let Some(cookie) = cookies.get(FLASH_COOKIE) else {
        return Vec::new();
    };

    URL_SAFE_NO_PAD
        .decode(cookie.value())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_else(|| {
            debug!("Discarding unreadable flash cookie");
            Vec::new()
        })
}
