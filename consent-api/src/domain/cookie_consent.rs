// src/domain/cookie_consent.rs

use serde::{Deserialize, Serialize};

/// Consent given to the four cookie categories.
///
/// `essential` cookies cannot be rejected: every constructor and every write
/// path forces it back to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConsent {
    pub essential: bool,
    pub settings: bool,
    pub usage: bool,
    pub campaigns: bool,
}

impl CookieConsent {
    pub const ACCEPT_ALL: CookieConsent = CookieConsent {
        essential: true,
        settings: true,
        usage: true,
        campaigns: true,
    };

    pub const REJECT_ALL: CookieConsent = CookieConsent {
        essential: true,
        settings: false,
        usage: false,
        campaigns: false,
    };

    pub fn new(settings: bool, usage: bool, campaigns: bool) -> Self {
        Self {
            essential: true,
            settings,
            usage,
            campaigns,
        }
    }

    /// 必須クッキーは拒否できない
    pub fn with_essential_enforced(self) -> Self {
        Self {
            essential: true,
            ..self
        }
    }
}

impl Default for CookieConsent {
    fn default() -> Self {
        Self::REJECT_ALL
    }
}
