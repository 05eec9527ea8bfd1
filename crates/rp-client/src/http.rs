//! Shared HTTP plumbing

use crate::error::{ClientError, ClientResult};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::multipart::Form;
use reqwest::Client;
use rp_core::config::Config;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Connection to the recipe site
///
/// Endpoint paths from the page are resolved against `base` the way a
/// browser resolves them against the page URL.
#[derive(Debug, Clone)]
pub struct HttpSite {
    client: Client,
    base: Url,
}

/// Status and body of a finished request
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text, possibly empty
    pub body: String,
}

impl RawResponse {
    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl HttpSite {
    /// Build a client from the `[site]` and `[http]` sections
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        let mut builder = Client::builder().user_agent(config.http.user_agent.clone());
        if let Some(secs) = config.http.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::with_client(builder.build()?, &config.site.base_url)
    }

    /// Use an existing client
    pub fn with_client(client: Client, base_url: &str) -> ClientResult<Self> {
        let base = Url::parse(base_url).map_err(|source| ClientError::Url {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self { client, base })
    }

    /// Base URL
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve an endpoint path or absolute URL
    pub fn resolve(&self, endpoint: &str) -> ClientResult<Url> {
        self.base.join(endpoint).map_err(|source| ClientError::Url {
            url: endpoint.to_string(),
            source,
        })
    }

    /// POST `fields` as multipart form data
    pub async fn post_form(
        &self,
        endpoint: &str,
        fields: &[(String, String)],
        requested_with: bool,
    ) -> ClientResult<RawResponse> {
        let url = self.resolve(endpoint)?;
        let form = fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let mut request = self
            .client
            .post(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .multipart(form);
        if requested_with {
            request = request.header("X-Requested-With", "XMLHttpRequest");
        }

        debug!("POST {} ({} fields)", url, fields.len());
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        trace!("POST {} -> {} ({} bytes)", url, status, body.len());

        Ok(RawResponse { status, body })
    }
}
