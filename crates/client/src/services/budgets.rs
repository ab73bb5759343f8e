use api_types::budget::{Budget, BudgetNew, BudgetUpdate};
use api_types::common::{Amount, Deleted};

use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::gateway::Client;
use crate::notify::Notifier;

pub struct Budgets<'a, C, N> {
    client: &'a Client<C, N>,
}

impl<C, N> Client<C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub fn budgets(&self) -> Budgets<'_, C, N> {
        Budgets { client: self }
    }
}

impl<C, N> Budgets<'_, C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub async fn all(&self) -> Result<Vec<Budget>> {
        self.client.get("/budgets").await
    }

    pub async fn by_id(&self, id: i64) -> Result<Budget> {
        self.client.get(&format!("/budgets/{id}")).await
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Budget>> {
        self.client.get(&format!("/users/{user_id}/budgets")).await
    }

    /// Budgets of one user for a month (`YYYY-MM`).
    pub async fn by_user_month(&self, user_id: i64, month: &str) -> Result<Vec<Budget>> {
        self.client
            .get(&format!("/users/{user_id}/budgets/month?month={month}"))
            .await
    }

    pub async fn shared_with(&self, user_id: i64) -> Result<Vec<Budget>> {
        self.client
            .get(&format!("/users/{user_id}/shared-budgets"))
            .await
    }

    pub async fn create(&self, budget: &BudgetNew) -> Result<Budget> {
        self.client.post("/budgets", budget).await
    }

    pub async fn update(&self, id: i64, update: &BudgetUpdate) -> Result<Budget> {
        self.client.patch(&format!("/budgets/{id}"), update).await
    }

    pub async fn delete(&self, id: i64) -> Result<Deleted> {
        self.client.delete(&format!("/budgets/{id}")).await
    }

    pub async fn update_amount(&self, id: i64, user_id: i64, amount: f64) -> Result<Budget> {
        self.client
            .post(
                &format!("/budgets/{id}/users/{user_id}/amount"),
                &Amount { amount },
            )
            .await
    }
}
