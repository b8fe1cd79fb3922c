use crate::headers::{SetAuthorizationHeader, SetDefaultHeaders};
use crate::parameters::ClientParameters;
use crate::{Error, Result};
use serde_json::Value as Json;
use std::{fmt, str::FromStr};
use ureq::{Agent, AgentBuilder};

pub struct Client {
    inner: Agent,
    base_url: String,
    api_key: String,
}

impl Client {
    pub fn new(parameters: ClientParameters) -> Self {
        let ClientParameters {
            api_key,
            base_url_override,
        } = parameters;

        let inner = AgentBuilder::new().build();
        let base_url = base_url_override.unwrap_or_else(|| "https://api.notion.com/v1".to_string());

        Self {
            api_key,
            inner,
            base_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(Error::UnsupportedMethod(other.to_string())),
        }
    }
}

pub(crate) fn request(
    client: &Client,
    method: Method,
    endpoint: &str,
    body: Option<Json>,
) -> Result<Json> {
    let url = format!("{}/{}", &client.base_url, endpoint);

    tracing::debug!(message = "Notion API request", method = %method, endpoint = endpoint);

    let request = match method {
        Method::Get => client.inner.get(&url),
        Method::Post => client.inner.post(&url),
        Method::Patch => client.inner.patch(&url),
        Method::Delete => client.inner.delete(&url),
    }
    .set_default_headers()
    .set_authorization_header(&client.api_key);

    let response = match body {
        Some(body) => request.send_json(body),
        None => request.call(),
    }?;

    let body = response.into_json()?;

    Ok(body)
}
