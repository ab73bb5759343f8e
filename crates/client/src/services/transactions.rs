use api_types::common::Deleted;
use api_types::transaction::{
    ExecutedCount, ScheduledTransaction, ScheduledTransactionNew, ScheduledTransactionUpdate,
    Transaction, TransactionFilters, TransactionNew, TransactionUpdate,
};

use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::gateway::Client;
use crate::notify::Notifier;

pub struct Transactions<'a, C, N> {
    client: &'a Client<C, N>,
}

impl<C, N> Client<C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub fn transactions(&self) -> Transactions<'_, C, N> {
        Transactions { client: self }
    }
}

impl<C, N> Transactions<'_, C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub async fn all(&self) -> Result<Vec<Transaction>> {
        self.client.get("/transactions").await
    }

    pub async fn by_id(&self, id: i64) -> Result<Transaction> {
        self.client.get(&format!("/transactions/{id}")).await
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        self.client
            .get(&format!("/users/{user_id}/transactions"))
            .await
    }

    pub async fn filter(
        &self,
        user_id: i64,
        filters: &TransactionFilters,
    ) -> Result<Vec<Transaction>> {
        let query = filters.to_query();
        self.client
            .get(&format!("/users/{user_id}/transactions/filter{query}"))
            .await
    }

    pub async fn create(&self, transaction: &TransactionNew) -> Result<Transaction> {
        self.client.post("/transactions", transaction).await
    }

    pub async fn update(&self, id: i64, update: &TransactionUpdate) -> Result<Transaction> {
        self.client
            .patch(&format!("/transactions/{id}"), update)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Deleted> {
        self.client.delete(&format!("/transactions/{id}")).await
    }

    pub async fn scheduled(&self) -> Result<Vec<ScheduledTransaction>> {
        self.client.get("/scheduled-transactions").await
    }

    pub async fn scheduled_by_id(&self, id: i64) -> Result<ScheduledTransaction> {
        self.client
            .get(&format!("/scheduled-transactions/{id}"))
            .await
    }

    pub async fn scheduled_by_user(&self, user_id: i64) -> Result<Vec<ScheduledTransaction>> {
        self.client
            .get(&format!("/users/{user_id}/scheduled-transactions"))
            .await
    }

    pub async fn create_scheduled(
        &self,
        scheduled: &ScheduledTransactionNew,
    ) -> Result<ScheduledTransaction> {
        self.client.post("/scheduled-transactions", scheduled).await
    }

    pub async fn update_scheduled(
        &self,
        id: i64,
        update: &ScheduledTransactionUpdate,
    ) -> Result<ScheduledTransaction> {
        self.client
            .patch(&format!("/scheduled-transactions/{id}"), update)
            .await
    }

    pub async fn delete_scheduled(&self, id: i64) -> Result<Deleted> {
        self.client
            .delete(&format!("/scheduled-transactions/{id}"))
            .await
    }

    /// Manually runs every scheduled transaction whose execution date has
    /// passed. Returns how many the server executed.
    pub async fn run_pending_scheduled(&self) -> Result<ExecutedCount> {
        self.client
            .post_empty("/scheduled-transactions/pending")
            .await
    }
}
