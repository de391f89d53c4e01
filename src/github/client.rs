use anyhow::Context as _;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use tracing as log;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Clone, Debug)]
pub struct GithubClient {
    token: SecretString,
    client: Client,
    pub(crate) api_url: String,
}

impl GithubClient {
    pub fn new(token: SecretString, api_url: String) -> Self {
        GithubClient {
            client: Client::new(),
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(crate) async fn send_req(&self, req: RequestBuilder) -> anyhow::Result<(Bytes, String)> {
        log::debug!("send_req with {:?}", req);
        let req_dbg = format!("{req:?}");
        let req = req
            .build()
            .with_context(|| format!("building reqwest {req_dbg}"))?;

        let resp = self.client.execute(req).await?;
        let maybe_err = resp.error_for_status_ref().err();
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("failed to read response body {req_dbg}"))?;
        if let Some(e) = maybe_err {
            return Err(anyhow::Error::new(e))
                .with_context(|| format!("response: {}", String::from_utf8_lossy(&body)));
        }

        Ok((body, req_dbg))
    }

    pub(crate) async fn json<T>(&self, req: RequestBuilder) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let (body, req_dbg) = self.send_req(req).await?;
        serde_json::from_slice(&body).with_context(|| format!("decoding response of {req_dbg}"))
    }

    pub(crate) fn delete(&self, url: &str) -> RequestBuilder {
        log::trace!("delete {:?}", url);
        self.client.delete(url).configure(self)
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        log::trace!("post {:?}", url);
        self.client.post(url).configure(self)
    }
}

trait RequestSend: Sized {
    fn configure(self, g: &GithubClient) -> Self;
}

impl RequestSend for RequestBuilder {
    fn configure(self, g: &GithubClient) -> RequestBuilder {
        let req = self.header(USER_AGENT, "issuebot");
        match reqwest::header::HeaderValue::from_maybe_shared(format!(
            "token {}",
            g.token.expose_secret()
        )) {
            Ok(mut auth) => {
                auth.set_sensitive(true);
                req.header(AUTHORIZATION, auth)
            }
            // A token with characters that cannot appear in a header is sent
            // without credentials and fails upstream with 401.
            Err(_) => req,
        }
    }
}
