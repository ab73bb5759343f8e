use api_types::common::Deleted;
use api_types::payment_method::{
    PaymentMethod, PaymentMethodNew, PaymentMethodUpdate, SharedUserPatch,
};

use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::gateway::Client;
use crate::notify::Notifier;

pub struct PaymentMethods<'a, C, N> {
    client: &'a Client<C, N>,
}

impl<C, N> Client<C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub fn payment_methods(&self) -> PaymentMethods<'_, C, N> {
        PaymentMethods { client: self }
    }
}

impl<C, N> PaymentMethods<'_, C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub async fn all(&self) -> Result<Vec<PaymentMethod>> {
        self.client.get("/payment-methods").await
    }

    pub async fn by_id(&self, id: i64) -> Result<PaymentMethod> {
        self.client.get(&format!("/payment-methods/{id}")).await
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<PaymentMethod>> {
        self.client
            .get(&format!("/users/{user_id}/payment-methods"))
            .await
    }

    pub async fn shared_with(&self, user_id: i64) -> Result<Vec<PaymentMethod>> {
        self.client
            .get(&format!("/users/{user_id}/shared-payment-methods"))
            .await
    }

    pub async fn create(&self, method: &PaymentMethodNew) -> Result<PaymentMethod> {
        self.client.post("/payment-methods", method).await
    }

    pub async fn update(&self, id: i64, update: &PaymentMethodUpdate) -> Result<PaymentMethod> {
        self.client
            .patch(&format!("/payment-methods/{id}"), update)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Deleted> {
        self.client.delete(&format!("/payment-methods/{id}")).await
    }

    pub async fn share(&self, id: i64, user_id: i64) -> Result<PaymentMethod> {
        self.client
            .patch(
                &format!("/payment-methods/{id}"),
                &SharedUserPatch {
                    shared_user_id: Some(user_id),
                },
            )
            .await
    }

    /// Stops sharing. Sends an explicit `"shared_user_id": null`.
    pub async fn unshare(&self, id: i64) -> Result<PaymentMethod> {
        self.client
            .patch(
                &format!("/payment-methods/{id}"),
                &SharedUserPatch {
                    shared_user_id: None,
                },
            )
            .await
    }
}
