use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Uniform wrapper every endpoint response is expected to follow.
///
/// The body is parsed into this shape regardless of HTTP status: error
/// responses carry the same envelope with `success: false` and a
/// human-readable `message`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    /// Resource payload. Absent or `null` on pure-action endpoints.
    #[serde(default)]
    pub data: Option<T>,
    /// Status text for user-facing notifications. Empty means "say nothing".
    #[serde(default)]
    pub message: String,
}

pub mod common {
    use super::*;

    /// Uniform DELETE response.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Deleted {
        pub deleted: bool,
    }

    /// Body of the amount actions (budget amount, debt payment, goal
    /// progress).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Amount {
        pub amount: f64,
    }
}

pub mod auth {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Credentials {
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RegisterNew {
        pub email: String,
        pub password: String,
        pub name: String,
        pub username: String,
    }

    /// Login/register response: the user profile plus the bearer token the
    /// session store persists.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct AuthSession {
        pub id: i64,
        pub email: String,
        pub name: String,
        pub username: String,
        pub token: String,
    }

    /// The persisted user blob: [`AuthSession`] minus the token.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserProfile {
        pub id: i64,
        pub email: String,
        pub name: String,
        pub username: String,
    }

    impl AuthSession {
        pub fn profile(&self) -> UserProfile {
            UserProfile {
                id: self.id,
                email: self.email.clone(),
                name: self.name.clone(),
                username: self.username.clone(),
            }
        }
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    impl TransactionKind {
        /// Returns the canonical wire spelling.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Income => "INCOME",
                Self::Expense => "EXPENSE",
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Transaction {
        pub id: i64,
        pub user_id: i64,
        /// Decimal string as rendered by the server (e.g. `"120.50"`).
        pub amount: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub category: String,
        pub description: Option<String>,
        pub payment_method_id: Option<i64>,
        /// Server-assigned timestamp, kept opaque.
        pub date: String,
        pub shared_with_id: Option<i64>,
        pub scheduled_transaction_id: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub user_id: i64,
        pub amount: f64,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub category: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub payment_method_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shared_with_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub scheduled_transaction_id: Option<i64>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub amount: Option<f64>,
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        pub kind: Option<TransactionKind>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub payment_method_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shared_with_id: Option<i64>,
    }

    /// Filter set rendered into the query string of
    /// `/users/{id}/transactions/filter`. Unset fields are not rendered.
    #[derive(Debug, Default, Clone)]
    pub struct TransactionFilters {
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub kind: Option<TransactionKind>,
        pub category: Option<String>,
        pub payment_method_id: Option<i64>,
        pub min_amount: Option<f64>,
        pub max_amount: Option<f64>,
        pub shared_with_me: Option<bool>,
        pub scheduled_only: Option<bool>,
    }

    impl TransactionFilters {
        /// Renders `?key=value&...`, or an empty string when no filter is
        /// set. Values are dates, numbers and enum words; none needs
        /// percent-escaping.
        pub fn to_query(&self) -> String {
            let mut pairs: Vec<(&str, String)> = Vec::new();
            if let Some(date) = self.start_date {
                pairs.push(("startDate", date.to_string()));
            }
            if let Some(date) = self.end_date {
                pairs.push(("endDate", date.to_string()));
            }
            if let Some(kind) = self.kind {
                pairs.push(("type", kind.as_str().to_string()));
            }
            if let Some(category) = &self.category {
                pairs.push(("category", category.clone()));
            }
            if let Some(id) = self.payment_method_id {
                pairs.push(("payment_method_id", id.to_string()));
            }
            if let Some(amount) = self.min_amount {
                pairs.push(("min_amount", amount.to_string()));
            }
            if let Some(amount) = self.max_amount {
                pairs.push(("max_amount", amount.to_string()));
            }
            if let Some(flag) = self.shared_with_me {
                pairs.push(("shared_with_me", flag.to_string()));
            }
            if let Some(flag) = self.scheduled_only {
                pairs.push(("scheduled_only", flag.to_string()));
            }

            if pairs.is_empty() {
                return String::new();
            }
            let rendered: Vec<String> = pairs
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            format!("?{}", rendered.join("&"))
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum Frequency {
        Daily,
        Weekly,
        Monthly,
        Yearly,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ScheduledTransaction {
        pub id: i64,
        pub user_id: i64,
        pub name: String,
        /// Decimal string as rendered by the server.
        pub amount: String,
        pub category: String,
        pub description: Option<String>,
        pub payment_method_id: Option<i64>,
        pub frequency: Frequency,
        pub next_execution_date: NaiveDate,
        pub active: bool,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ScheduledTransactionNew {
        pub user_id: i64,
        pub name: String,
        pub amount: f64,
        pub category: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub payment_method_id: Option<i64>,
        pub frequency: Frequency,
        pub next_execution_date: NaiveDate,
        pub active: bool,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ScheduledTransactionUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub payment_method_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub frequency: Option<Frequency>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub next_execution_date: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub active: Option<bool>,
    }

    /// Response of the manual "run pending scheduled transactions" action.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExecutedCount {
        pub executed_count: u64,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Budget {
        pub id: i64,
        pub user_id: i64,
        pub shared_user_id: Option<i64>,
        pub category: String,
        /// Decimal string as rendered by the server.
        pub limit_amount: String,
        pub current_amount: String,
        /// `YYYY-MM`.
        pub month: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetNew {
        pub user_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shared_user_id: Option<i64>,
        pub category: String,
        pub limit_amount: f64,
        pub month: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct BudgetUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shared_user_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit_amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub current_amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub month: Option<String>,
    }
}

pub mod debt {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Debt {
        pub id: i64,
        pub user_id: i64,
        pub creditor_id: Option<i64>,
        pub description: String,
        /// Decimal string as rendered by the server.
        pub original_amount: String,
        pub pending_amount: String,
        pub due_date: NaiveDate,
        pub paid: bool,
    }

    /// Create payload. `pending_amount` is overwritten with
    /// `original_amount` by the debts service: new debts start fully unpaid.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DebtNew {
        pub user_id: i64,
        /// `Some(0)` is the form's "no creditor" sentinel; the service drops
        /// it before sending.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub creditor_id: Option<i64>,
        pub description: String,
        pub original_amount: f64,
        pub pending_amount: f64,
        pub due_date: NaiveDate,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct DebtUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub creditor_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub original_amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pending_amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub paid: Option<bool>,
    }
}

pub mod goal {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Goal {
        pub id: i64,
        pub user_id: i64,
        pub shared_user_id: Option<i64>,
        pub name: String,
        /// Decimal string as rendered by the server.
        pub target_amount: String,
        pub current_amount: String,
        pub end_date: NaiveDate,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GoalNew {
        pub user_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shared_user_id: Option<i64>,
        pub name: String,
        pub target_amount: f64,
        /// Starting progress; 0 for a fresh goal.
        pub current_amount: f64,
        pub end_date: NaiveDate,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct GoalUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shared_user_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub target_amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub current_amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_date: Option<NaiveDate>,
    }
}

pub mod friend {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct FriendProfile {
        pub id: i64,
        pub name: String,
        pub username: String,
        pub email: String,
    }

    /// A friendship edge: the connected user's profile plus the owning
    /// user's side of the link.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Friend {
        pub id: i64,
        pub friend: FriendProfile,
        pub user_id: i64,
        pub connection_date: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FriendNew {
        pub user_id: i64,
        pub friend_email: String,
    }
}

pub mod payment_method {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum PaymentMethodKind {
        Cash,
        Card,
        BankAccount,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct PaymentMethod {
        pub id: i64,
        pub user_id: i64,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: PaymentMethodKind,
        pub last_four_digits: Option<String>,
        pub shared_user_id: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PaymentMethodNew {
        pub user_id: i64,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: PaymentMethodKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_four_digits: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shared_user_id: Option<i64>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PaymentMethodUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        pub kind: Option<PaymentMethodKind>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_four_digits: Option<String>,
    }

    /// Share/unshare body. Unlike the update payloads this one always
    /// serializes the field: unsharing must send an explicit `null`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SharedUserPatch {
        pub shared_user_id: Option<i64>,
    }
}
