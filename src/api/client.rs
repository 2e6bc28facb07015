//! Zabbix API client
//!
//! Minimal JSON-RPC 2.0 client for the operations the reporter needs.

use crate::Result;
use crate::api::HostRecord;
use core::sync::atomic::{AtomicU64, Ordering};
use ohno::{IntoAppError, app_err, bail};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

/// Well-known path of the Zabbix API endpoint.
const API_PATH: &str = "api_jsonrpc.php";

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    method: &'a str,
    params: P,
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth: Option<&'a str>,
}

/// JSON-RPC 2.0 response envelope; exactly one of `result` and `error` is
/// populated by a conforming server.
#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcFailure>,
}

/// The `error` member of a failed JSON-RPC response.
#[derive(Debug, Deserialize)]
struct RpcFailure {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<String>,
}

/// Zabbix API client
#[derive(Debug)]
pub struct Client {
    client: reqwest::Client,
    endpoint: Url,
    auth: Option<String>,
    next_id: AtomicU64,
}

impl Client {
    /// Create a client for the given server URL.
    ///
    /// The URL may name the server root or the full `api_jsonrpc.php`
    /// endpoint; the well-known path is appended when missing.
    pub fn new(server_url: &str) -> Result<Self> {
        let mut address = server_url.trim_end_matches('/').to_string();
        if !address.ends_with(API_PATH) {
            address.push('/');
            address.push_str(API_PATH);
        }

        let endpoint = Url::parse(&address).into_app_err_with(|| format!("parsing Zabbix API URL `{address}`"))?;

        Ok(Self {
            client: reqwest::Client::builder().user_agent("zbx-report").build()?,
            endpoint,
            auth: None,
            next_id: AtomicU64::new(1),
        })
    }

    /// Get the endpoint this client talks to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetch the API version reported by the server; works without authentication.
    pub async fn api_version(&self) -> Result<String> {
        self.call("apiinfo.version", json!([]), false).await
    }

    /// Authenticate and retain the session token for subsequent calls.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let token: String = self
            .call("user.login", json!({"user": username, "password": password}), false)
            .await?;

        self.auth = Some(token);
        Ok(())
    }

    /// Fetch the host inventory with interface and item sub-records, in
    /// server order.
    pub async fn get_hosts(&self) -> Result<Vec<HostRecord>> {
        if self.auth.is_none() {
            bail!("fetching the host inventory requires a logged-in session");
        }

        self.call(
            "host.get",
            json!({
                "output": ["hostid", "name", "status", "available"],
                "selectInterfaces": ["interfaceid", "ip", "type"],
                "selectItems": ["itemid", "key_", "lastvalue", "state", "status", "error"],
            }),
            true,
        )
        .await
    }

    async fn call<P: Serialize, T: DeserializeOwned>(&self, method: &str, params: P, with_auth: bool) -> Result<T> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            auth: if with_auth { self.auth.as_deref() } else { None },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .into_app_err_with(|| format!("calling `{method}` on {}", self.endpoint))?;

        let response = response
            .error_for_status()
            .into_app_err_with(|| format!("`{method}` rejected by {}", self.endpoint))?;

        let envelope: RpcResponse<T> = response.json().await.into_app_err_with(|| format!("decoding `{method}` response"))?;

        if let Some(failure) = envelope.error {
            bail!(
                "`{method}` failed with code {}: {} {}",
                failure.code,
                failure.message,
                failure.data.unwrap_or_default()
            );
        }

        envelope.result.ok_or_else(|| app_err!("`{method}` returned neither result nor error"))
    }
}
