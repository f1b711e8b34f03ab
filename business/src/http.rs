//! Send-safe HTTP GET client used by commands.
//!
//! Commands return `Pin<Box<dyn Future + Send>>`, but on WASM `reqwest::Response` holds JS
//! values and is not `Send`. So:
//! - On **native**: reqwest is awaited directly.
//! - On **WASM**: the request runs on the JS thread via `wasm_bindgen_futures::spawn_local`
//!   and the plain-data [`Response`] comes back through a `flume` channel.

use std::collections::HashMap;

/// A response reduced to Send-safe data: the status code and the raw body.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a request header. Setting the same name twice keeps the last value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.url, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
        let Self { url, headers } = self;

        // spawn_local does not require Send; only the channel crosses back.
        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(url, headers).await;
            if tx.send_async(result).await.is_err() {
                log::debug!("HTTP response dropped: receiver gone");
            }
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("Request cancelled"))?
    }
}

async fn execute(url: String, headers: HashMap<String, String>) -> HttpResult<Response> {
    let client = reqwest::Client::new();
    let mut request = client.get(&url);
    for (name, value) in &headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response {
        status,
        body,
    })
}

/// Entry point for building requests.
///
/// ```ignore
/// let response = Client::get(config.users_url(1)).send().await?;
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::get(url)
    }
}
