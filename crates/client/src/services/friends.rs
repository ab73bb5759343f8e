use api_types::common::Deleted;
use api_types::friend::{Friend, FriendNew};

use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::gateway::Client;
use crate::notify::Notifier;

pub struct Friends<'a, C, N> {
    client: &'a Client<C, N>,
}

impl<C, N> Client<C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub fn friends(&self) -> Friends<'_, C, N> {
        Friends { client: self }
    }
}

impl<C, N> Friends<'_, C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub async fn all(&self) -> Result<Vec<Friend>> {
        self.client.get("/friends").await
    }

    pub async fn by_id(&self, id: i64) -> Result<Friend> {
        self.client.get(&format!("/friends/{id}")).await
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Friend>> {
        self.client.get(&format!("/users/{user_id}/friends")).await
    }

    pub async fn create(&self, new: &FriendNew) -> Result<Friend> {
        self.client.post("/friends", new).await
    }

    pub async fn delete(&self, id: i64) -> Result<Deleted> {
        self.client.delete(&format!("/friends/{id}")).await
    }
}
