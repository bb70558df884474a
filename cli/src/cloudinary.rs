use std::collections::HashMap;

use anyhow::{anyhow, bail, Context, Result};
use cldctl_core::ResourceKind;
use percent_encoding::percent_decode_str;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use url::Url;

const API_BASE: &str = "https://api.cloudinary.com/v1_1/";
const PAGE_SIZE: &str = "500";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    pub public_id: String,
    #[serde(default)]
    pub format: Option<String>,
    pub version: u64,
    pub resource_type: String,
    pub bytes: u64,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub secure_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Derived {
    pub transformation: String,
    pub bytes: u64,
    #[serde(default)]
    pub secure_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceDetails {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(default)]
    pub derived: Vec<Derived>,
}

#[derive(Deserialize)]
struct ResourcePage {
    resources: Vec<Resource>,
    next_cursor: Option<String>,
}

#[derive(Deserialize)]
struct DeleteResponse {
    deleted: HashMap<String, String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorMessage,
}

#[derive(Deserialize)]
struct ApiErrorMessage {
    message: String,
}

/// Operations the commands need from the hosting service.
pub trait MediaService {
    async fn resources(&self, kind: ResourceKind) -> Result<Vec<Resource>>;

    /// `None` when no resource is addressed by `public_id`.
    async fn resource_details(
        &self,
        kind: ResourceKind,
        public_id: &str,
    ) -> Result<Option<ResourceDetails>>;

    async fn delete(&self, kind: ResourceKind, public_id: &str) -> Result<()>;
}

/// Admin API client.
pub struct CloudinaryClient {
    http: reqwest::Client,
    base: Url,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    /// Takes credentials from `cloudinary://<api_key>:<api_secret>@<cloud_name>`.
    pub fn from_uri(uri: &Url) -> Result<Self> {
        if uri.scheme() != "cloudinary" {
            bail!(
                "unsupported service URI scheme `{}`, expected `cloudinary`",
                uri.scheme()
            );
        }
        let cloud_name = uri
            .host_str()
            .filter(|host| !host.is_empty())
            .context("service URI has no cloud name")?;
        let api_key = decode_credential(uri.username())?;
        if api_key.is_empty() {
            bail!("service URI has no API key");
        }
        let api_secret = decode_credential(uri.password().context("service URI has no API secret")?)?;

        let base = Url::parse(API_BASE)?
            .join(&format!("{cloud_name}/"))
            .context("failed to build API base URL")?;
        let http = reqwest::Client::builder()
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base,
            api_key,
            api_secret,
        })
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
    }
}

impl MediaService for CloudinaryClient {
    async fn resources(&self, kind: ResourceKind) -> Result<Vec<Resource>> {
        let url = self.endpoint(["resources", kind.as_str()])?;
        let mut resources = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut req = self
                .request(reqwest::Method::GET, url.clone())
                .query(&[("max_results", PAGE_SIZE)]);
            if let Some(cursor) = &cursor {
                req = req.query(&[("next_cursor", cursor.as_str())]);
            }
            let page: ResourcePage = check(req.send().await?).await?.json().await?;
            tracing::debug!(%kind, count = page.resources.len(), "fetched resource page");
            resources.extend(page.resources);
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        Ok(resources)
    }

    async fn resource_details(
        &self,
        kind: ResourceKind,
        public_id: &str,
    ) -> Result<Option<ResourceDetails>> {
        let url = self.endpoint(
            ["resources", kind.as_str(), "upload"]
                .into_iter()
                .chain(public_id.split('/')),
        )?;
        let resp = self.request(reqwest::Method::GET, url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let details = check(resp).await?.json().await?;
        Ok(Some(details))
    }

    async fn delete(&self, kind: ResourceKind, public_id: &str) -> Result<()> {
        let url = self.endpoint(["resources", kind.as_str(), "upload"])?;
        let resp = self
            .request(reqwest::Method::DELETE, url)
            .query(&[("public_ids[]", public_id)])
            .send()
            .await?;
        let body: DeleteResponse = check(resp).await?.json().await?;
        match body.deleted.get(public_id).map(String::as_str) {
            Some("deleted") => Ok(()),
            Some(status) => bail!("{public_id}: {status}"),
            None => bail!("{public_id}: missing from delete response"),
        }
    }
}

async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    bail!("request failed with status {status}: {message}")
}

fn decode_credential(raw: &str) -> Result<String> {
    Ok(percent_decode_str(raw)
        .decode_utf8()
        .context("service URI credentials are not valid UTF-8")?
        .into_owned())
}
