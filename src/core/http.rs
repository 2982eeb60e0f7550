//! Blocking HTTP access to the public address and lookup services.

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;

use crate::constants;
use crate::error::NetError;

/// A plain GET that returns the whole response body as text.
///
/// The status code is not inspected: both services answer errors with a body
/// the caller still wants to see or decode.
pub trait HttpGet {
    /// Fetches `url` and reads its body.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::Request`] on transport failure and
    /// [`NetError::Read`] if the body cannot be read.
    fn get_text(&self, url: &str) -> Result<String, NetError>;
}

/// `reqwest` blocking client with the ipinfo user agent.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Builds the client. `timeout` of `None` means requests never time out.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::ClientBuild`] if the TLS backend cannot be set up.
    pub fn new(timeout: Option<Duration>) -> Result<Self, NetError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
            .build()
            .map_err(|e| NetError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpGet for HttpClient {
    fn get_text(&self, url: &str) -> Result<String, NetError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| NetError::Request(e.to_string()))?;

        debug!("{url} answered {}", response.status());
        response.text().map_err(|e| NetError::Read(e.to_string()))
    }
}

/// Stand-in used when [`HttpClient::new`] failed: every request reports why.
///
/// Keeps the `address` command able to list interfaces without a client.
pub struct UnavailableClient {
    reason: String,
}

impl UnavailableClient {
    #[must_use]
    pub fn new(error: &NetError) -> Self {
        Self {
            reason: match error {
                NetError::ClientBuild(reason)
                | NetError::Request(reason)
                | NetError::Read(reason) => reason.clone(),
            },
        }
    }
}

impl HttpGet for UnavailableClient {
    fn get_text(&self, _url: &str) -> Result<String, NetError> {
        Err(NetError::ClientBuild(self.reason.clone()))
    }
}

/// Builds the real client, or an [`UnavailableClient`] carrying the failure.
#[must_use]
pub fn client_or_unavailable(timeout: Option<Duration>) -> Box<dyn HttpGet> {
    match HttpClient::new(timeout) {
        Ok(client) => Box::new(client),
        Err(e) => {
            warn!("{e}");
            Box::new(UnavailableClient::new(&e))
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::HttpGet;
    use crate::error::NetError;

    /// Replays canned responses and records every requested URL.
    #[derive(Default)]
    pub struct MockHttp {
        responses: RefCell<VecDeque<Result<String, NetError>>>,
        calls: RefCell<Vec<String>>,
    }

    impl MockHttp {
        pub fn with(responses: Vec<Result<String, NetError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::default(),
            }
        }

        pub fn ok(body: &str) -> Self {
            Self::with(vec![Ok(body.to_string())])
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl HttpGet for MockHttp {
        fn get_text(&self, url: &str) -> Result<String, NetError> {
            self.calls.borrow_mut().push(url.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(NetError::Request("no canned response".to_string())))
        }
    }
}
