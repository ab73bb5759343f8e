use api_types::auth::{AuthSession, Credentials, RegisterNew};

use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::gateway::Client;
use crate::notify::Notifier;

/// Authentication endpoints. Both are anonymous: with no stored token the
/// gateway omits the `Authorization` header entirely.
pub struct Auth<'a, C, N> {
    client: &'a Client<C, N>,
}

impl<C, N> Client<C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub fn auth(&self) -> Auth<'_, C, N> {
        Auth { client: self }
    }
}

impl<C, N> Auth<'_, C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.client.post("/auth/login", credentials).await
    }

    pub async fn register(&self, new: &RegisterNew) -> Result<AuthSession> {
        self.client.post("/auth/register", new).await
    }
}
