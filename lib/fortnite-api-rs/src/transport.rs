use crate::Error;
use std::sync::Arc;

/// An outgoing GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The full request url
    pub url: String,

    /// The raw value for the `Authorization` header, if one should be sent
    pub authorization: Option<Arc<str>>,
}

/// A raw http response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The http status code
    pub status: u16,

    /// The response body
    pub body: String,
}

/// Something that can perform a GET request.
///
/// Non-success http statuses are not errors at this level,
/// as the api sends its error envelopes with 4xx statuses.
#[async_trait::async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Send a request and read the whole body.
    async fn get(&self, request: &Request) -> Result<Response, Error>;
}

#[async_trait::async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn get(&self, request: &Request) -> Result<Response, Error> {
        (**self).get(request).await
    }
}

/// A [`Transport`] backed by reqwest
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    /// The inner http client
    pub client: reqwest::Client,
}

impl ReqwestTransport {
    /// Make a new [`ReqwestTransport`].
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    /// Make a new [`ReqwestTransport`] from an existing reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: &Request) -> Result<Response, Error> {
        let mut builder = self.client.get(request.url.as_str());
        if let Some(authorization) = request.authorization.as_deref() {
            builder = builder.header(reqwest::header::AUTHORIZATION, authorization);
        }

        let res = builder.send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(Response { status, body })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// A transport that replays canned responses and records every request.
    #[derive(Debug, Default)]
    pub(crate) struct MockTransport {
        responses: Mutex<VecDeque<Response>>,
        requests: Mutex<Vec<Request>>,
    }

    impl MockTransport {
        pub(crate) fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Queue a response with the given http status and body.
        pub(crate) fn push(&self, status: u16, body: &str) {
            self.responses.lock().push_back(Response {
                status,
                body: body.into(),
            });
        }

        /// Get all requests sent so far.
        pub(crate) fn requests(&self) -> Vec<Request> {
            self.requests.lock().clone()
        }

        /// Get the url of the only request sent so far.
        pub(crate) fn only_url(&self) -> String {
            let requests = self.requests.lock();
            assert_eq!(requests.len(), 1, "expected exactly one request");
            requests[0].url.clone()
        }
    }

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn get(&self, request: &Request) -> Result<Response, Error> {
            self.requests.lock().push(request.clone());
            self.responses.lock().pop_front().ok_or_else(|| {
                Error::Transport(format!("no response queued for `{}`", request.url).into())
            })
        }
    }
}
