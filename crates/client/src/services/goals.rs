use api_types::common::{Amount, Deleted};
use api_types::goal::{Goal, GoalNew, GoalUpdate};

use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::gateway::Client;
use crate::notify::Notifier;

pub struct Goals<'a, C, N> {
    client: &'a Client<C, N>,
}

impl<C, N> Client<C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub fn goals(&self) -> Goals<'_, C, N> {
        Goals { client: self }
    }
}

impl<C, N> Goals<'_, C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub async fn all(&self) -> Result<Vec<Goal>> {
        self.client.get("/goals").await
    }

    pub async fn by_id(&self, id: i64) -> Result<Goal> {
        self.client.get(&format!("/goals/{id}")).await
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Goal>> {
        self.client.get(&format!("/users/{user_id}/goals")).await
    }

    pub async fn shared_with(&self, user_id: i64) -> Result<Vec<Goal>> {
        self.client
            .get(&format!("/users/{user_id}/shared-goals"))
            .await
    }

    pub async fn create(&self, goal: &GoalNew) -> Result<Goal> {
        self.client.post("/goals", goal).await
    }

    pub async fn update(&self, id: i64, update: &GoalUpdate) -> Result<Goal> {
        self.client.patch(&format!("/goals/{id}"), update).await
    }

    pub async fn delete(&self, id: i64) -> Result<Deleted> {
        self.client.delete(&format!("/goals/{id}")).await
    }

    pub async fn update_progress(&self, id: i64, user_id: i64, amount: f64) -> Result<Goal> {
        self.client
            .post(
                &format!("/goals/{id}/users/{user_id}/progress"),
                &Amount { amount },
            )
            .await
    }
}
