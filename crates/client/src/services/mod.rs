//! Thin per-resource wrappers over the gateway.
//!
//! Each handle borrows the [`Client`](crate::Client) and turns one resource's
//! operations into `perform` calls. Endpoint paths, query strings and the
//! amount coercions live here and nowhere else.

pub use auth::Auth;
pub use budgets::Budgets;
pub use debts::Debts;
pub use friends::Friends;
pub use goals::Goals;
pub use payment_methods::PaymentMethods;
pub use transactions::Transactions;

mod auth;
mod budgets;
mod debts;
mod friends;
mod goals;
mod payment_methods;
mod transactions;
