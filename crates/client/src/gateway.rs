use api_types::Envelope;
use reqwest::{Method, Url, header};
use serde::{Serialize, de::DeserializeOwned};

use crate::credentials::CredentialProvider;
use crate::error::{ClientError, Result};
use crate::notify::{Notice, Notifier};

/// Typed request gateway.
///
/// Performs one logical remote operation per call: injects the stored bearer
/// token, issues the HTTP request, unwraps the response [`Envelope`], and
/// emits exactly one user-facing notification describing the outcome —
/// success only when the envelope carries a message, error always.
///
/// Calls are independent; the gateway holds no mutable state, so it can be
/// shared freely between concurrent callers.
pub struct Client<C, N> {
    base_url: Url,
    http: reqwest::Client,
    credentials: C,
    notifier: N,
}

impl<C, N> Client<C, N>
where
    C: CredentialProvider,
    N: Notifier,
{
    pub fn new(base_url: &str, credentials: C, notifier: N) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|err| ClientError::BaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
            credentials,
            notifier,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.perform(Method::GET, endpoint, None::<&()>).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.perform(Method::POST, endpoint, Some(body)).await
    }

    /// POST with no body, for pure-action endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.perform(Method::POST, endpoint, None::<&()>).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.perform(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.perform(Method::PATCH, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.perform(Method::DELETE, endpoint, None::<&()>).await
    }

    /// Performs one request/response cycle against `<base_url><endpoint>`.
    ///
    /// Emits exactly one notification per call: a success toast when the
    /// response envelope carries a non-empty message, an error toast on any
    /// failure (transport, body decode, non-2xx). The failure is then
    /// returned to the caller unchanged, so every error still travels the
    /// normal `Result` channel.
    pub async fn perform<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, endpoint, "api request");
        match self.execute(method, endpoint, body).await {
            Ok((data, message)) => {
                if !message.is_empty() {
                    self.notifier.notify(Notice::success(message));
                }
                Ok(data)
            }
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "api request failed");
                self.notifier.notify(Notice::error(err.user_message()));
                Err(err)
            }
        }
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<(T, String)>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;

        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.credentials.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();

        // The server returns the envelope shape even on error, so the body
        // is parsed before the status is inspected.
        let raw = response.text().await.map_err(ClientError::Transport)?;
        let envelope: Envelope<T> = serde_json::from_str(&raw)?;

        if !status.is_success() {
            let message = Some(envelope.message).filter(|message| !message.is_empty());
            return Err(ClientError::Api { status, message });
        }

        let data = match envelope.data {
            Some(data) => data,
            // Pure-action endpoints may omit `data`; callers expecting
            // nothing deserialize `()` from null.
            None => serde_json::from_value(serde_json::Value::Null)
                .map_err(|_| ClientError::MissingData)?,
        };
        Ok((data, envelope.message))
    }

    /// Appends `endpoint` to the configured base URL by concatenation, the
    /// way the server's routes are written (`/budgets/7`, `/auth/login`).
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let joined = format!(
            "{}{endpoint}",
            self.base_url.as_str().trim_end_matches('/')
        );
        Url::parse(&joined).map_err(|err| ClientError::BaseUrl(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentials;

    struct NullNotifier;

    impl Notifier for NullNotifier {
        fn notify(&self, _notice: Notice) {}
    }

    fn client(base_url: &str) -> Client<MemoryCredentials, NullNotifier> {
        Client::new(base_url, MemoryCredentials::new(), NullNotifier).unwrap()
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = Client::new("not a url", MemoryCredentials::new(), NullNotifier);
        assert!(matches!(result, Err(ClientError::BaseUrl(_))));
    }

    #[test]
    fn endpoint_is_appended_to_the_base_url() {
        let client = client("http://127.0.0.1:3000");
        let url = client.endpoint_url("/budgets/7").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/budgets/7");
    }

    #[test]
    fn trailing_slash_on_the_base_url_does_not_double() {
        let client = client("http://127.0.0.1:3000/api/");
        let url = client.endpoint_url("/goals").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/goals");
    }
}
