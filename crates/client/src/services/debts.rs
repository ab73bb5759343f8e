use api_types::common::{Amount, Deleted};
use api_types::debt::{Debt, DebtNew, DebtUpdate};

use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::gateway::Client;
use crate::notify::Notifier;

pub struct Debts<'a, C, N> {
    client: &'a Client<C, N>,
}

impl<C, N> Client<C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub fn debts(&self) -> Debts<'_, C, N> {
        Debts { client: self }
    }
}

impl<C, N> Debts<'_, C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub async fn all(&self) -> Result<Vec<Debt>> {
        self.client.get("/debts").await
    }

    pub async fn by_id(&self, id: i64) -> Result<Debt> {
        self.client.get(&format!("/debts/{id}")).await
    }

    /// Debts where the user is the debtor.
    pub async fn debts_of(&self, user_id: i64) -> Result<Vec<Debt>> {
        self.client.get(&format!("/users/{user_id}/debts")).await
    }

    /// Debts where the user is the creditor.
    pub async fn credits_of(&self, user_id: i64) -> Result<Vec<Debt>> {
        self.client.get(&format!("/users/{user_id}/credits")).await
    }

    pub async fn create(&self, mut debt: DebtNew) -> Result<Debt> {
        // A new debt starts fully unpaid, and creditor 0 is the form's
        // "no creditor selected" sentinel.
        debt.pending_amount = debt.original_amount;
        if debt.creditor_id == Some(0) {
            debt.creditor_id = None;
        }
        self.client.post("/debts", &debt).await
    }

    pub async fn update(&self, id: i64, update: &DebtUpdate) -> Result<Debt> {
        self.client.patch(&format!("/debts/{id}"), update).await
    }

    pub async fn delete(&self, id: i64) -> Result<Deleted> {
        self.client.delete(&format!("/debts/{id}")).await
    }

    pub async fn register_payment(&self, id: i64, user_id: i64, amount: f64) -> Result<Debt> {
        self.client
            .post(
                &format!("/debts/{id}/users/{user_id}/pay"),
                &Amount { amount },
            )
            .await
    }
}
