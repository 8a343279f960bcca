use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{email::Email, password::PasswordDigest, phone::Phone};

/// Opaque merchant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MerchantId(Uuid);

impl MerchantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MerchantId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MerchantId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for MerchantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A merchant account as stored. Carries the password digest, so values of
/// this type stay below the use-case boundary; callers receive
/// [`SafeMerchant`].
#[derive(Debug, Clone)]
pub struct Merchant {
    pub id: MerchantId,
    pub email: Email,
    pub phone: Phone,
    pub business_name: String,
    pub password_digest: PasswordDigest,
    pub account_is_verified: bool,
    pub is_active: bool,
    pub base_currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a merchant. The password arrives already hashed;
/// plaintext never reaches a store.
#[derive(Debug, Clone)]
pub struct NewMerchant {
    pub email: Email,
    pub phone: Phone,
    pub business_name: String,
    pub password_digest: PasswordDigest,
    pub base_currency: String,
}

/// Outward-facing merchant projection. Has no password digest field at all.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SafeMerchant {
    pub id: MerchantId,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub account_is_verified: bool,
    pub is_active: bool,
    pub base_currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Merchant> for SafeMerchant {
    fn from(merchant: &Merchant) -> Self {
        Self {
            id: merchant.id,
            email: merchant.email.expose().to_owned(),
            phone: merchant.phone.as_str().to_owned(),
            business_name: merchant.business_name.clone(),
            account_is_verified: merchant.account_is_verified,
            is_active: merchant.is_active,
            base_currency: merchant.base_currency.clone(),
            created_at: merchant.created_at,
            updated_at: merchant.updated_at,
        }
    }
}
