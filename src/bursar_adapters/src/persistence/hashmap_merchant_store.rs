use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use bursar_core::{
    Email, Merchant, MerchantId, MerchantStore, MerchantStoreError, NewMerchant, PasswordDigest,
    Phone,
};

/// In-memory merchant store. Uniqueness of email and phone is checked under
/// the write lock, so concurrent registrations racing on the same values
/// resolve to one winner and one `MerchantAlreadyExists`.
#[derive(Default, Clone)]
pub struct HashMapMerchantStore {
    merchants: Arc<RwLock<HashMap<MerchantId, Merchant>>>,
}

impl HashMapMerchantStore {
    pub fn new() -> Self {
        Self {
            merchants: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Administrator-side toggle of `is_active`. Deliberately not part of
    /// the `MerchantStore` port; account-disabling sits outside the auth
    /// flows' own surface.
    pub async fn set_active(&self, id: MerchantId, active: bool) -> Result<(), MerchantStoreError> {
        let mut merchants = self.merchants.write().await;
        let merchant = merchants
            .get_mut(&id)
            .ok_or(MerchantStoreError::MerchantNotFound)?;
        merchant.is_active = active;
        merchant.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait::async_trait]
impl MerchantStore for HashMapMerchantStore {
    async fn find_by_email_or_phone(
        &self,
        email: &Email,
        phone: &Phone,
    ) -> Result<Option<Merchant>, MerchantStoreError> {
        let merchants = self.merchants.read().await;
        Ok(merchants
            .values()
            .find(|m| &m.email == email || &m.phone == phone)
            .cloned())
    }

    async fn create(&self, new_merchant: NewMerchant) -> Result<Merchant, MerchantStoreError> {
        let mut merchants = self.merchants.write().await;
        let taken = merchants
            .values()
            .any(|m| m.email == new_merchant.email || m.phone == new_merchant.phone);
        if taken {
            return Err(MerchantStoreError::MerchantAlreadyExists);
        }

        let now = Utc::now();
        let merchant = Merchant {
            id: MerchantId::new(),
            email: new_merchant.email,
            phone: new_merchant.phone,
            business_name: new_merchant.business_name,
            password_digest: new_merchant.password_digest,
            account_is_verified: false,
            is_active: true,
            base_currency: new_merchant.base_currency,
            created_at: now,
            updated_at: now,
        };
        merchants.insert(merchant.id, merchant.clone());
        Ok(merchant)
    }

    async fn mark_verified(&self, id: MerchantId) -> Result<Merchant, MerchantStoreError> {
        let mut merchants = self.merchants.write().await;
        let merchant = merchants
            .get_mut(&id)
            .ok_or(MerchantStoreError::MerchantNotFound)?;
        merchant.account_is_verified = true;
        merchant.updated_at = Utc::now();
        Ok(merchant.clone())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Merchant>, MerchantStoreError> {
        let merchants = self.merchants.read().await;
        Ok(merchants.values().find(|m| &m.email == email).cloned())
    }

    async fn update_password(
        &self,
        id: MerchantId,
        digest: PasswordDigest,
    ) -> Result<Merchant, MerchantStoreError> {
        let mut merchants = self.merchants.write().await;
        let merchant = merchants
            .get_mut(&id)
            .ok_or(MerchantStoreError::MerchantNotFound)?;
        merchant.password_digest = digest;
        merchant.updated_at = Utc::now();
        Ok(merchant.clone())
    }
}
