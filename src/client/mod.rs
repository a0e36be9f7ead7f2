//! Client layer: sends requests through an HTTP transport and maps responses
//! through envelope classification and decoding.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AccessId, AccessPassword, Acknowledgement, DeleteFax, FaxDetailsId, FaxStatus, ForwardFax,
    Inbox, InboxOptions, MultiFaxStatus, Outbox, OutboxOptions, QueueFax, QueuedFax, RetrieveFax,
    RetrievedFax, UpdateViewedStatus, UsageEntry, UsageOptions, ValidationError,
};
use crate::transport::{Body, DecodeError, Decoded, MalformedEnvelope, ResponseError, ResultError};

const DEFAULT_ENDPOINT: &str = "https://www.srfax.com/SRF_SecWebSvc.php";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).json(&body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials sent with every SRFax call (`access_id` + `access_pwd`).
pub struct Auth {
    access_id: AccessId,
    password: AccessPassword,
}

impl Auth {
    /// Validate the account number and password.
    pub fn new(access_id: u64, password: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            access_id: AccessId::new(access_id)?,
            password: AccessPassword::new(password)?,
        })
    }

    pub fn access_id(&self) -> AccessId {
        self.access_id
    }

    fn push_credentials(&self, body: &mut Body) {
        body.put(AccessId::FIELD, self.access_id.value());
        body.put(AccessPassword::FIELD, self.password.as_str());
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SrFaxClient`].
///
/// Remote failures ([`SrFaxError::Remote`]) are kept apart from protocol breaks
/// ([`SrFaxError::MalformedEnvelope`]) and schema drift ([`SrFaxError::Decode`]).
/// None of them is retried by the client.
pub enum SrFaxError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not a JSON object.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Response violates the `{Status, Result}` envelope contract.
    #[error(transparent)]
    MalformedEnvelope(MalformedEnvelope),

    /// SRFax reported the call as failed.
    #[error("SRFax error: {0}")]
    Remote(ResultError),

    /// A `Result` value could not be coerced into the expected field type.
    #[error(transparent)]
    Decode(DecodeError),

    /// Retrieved fax content is not valid base64.
    #[error("invalid fax content: {0}")]
    Content(#[source] base64::DecodeError),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<ResponseError> for SrFaxError {
    fn from(value: ResponseError) -> Self {
        match value {
            ResponseError::Json(err) => Self::Parse(err),
            ResponseError::Malformed(err) => Self::MalformedEnvelope(err),
            ResponseError::Failed(err) => Self::Remote(err),
            ResponseError::Decode(err) => Self::Decode(err),
            ResponseError::Content(err) => Self::Content(err),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SrFaxClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SrFaxClientBuilder {
    auth: Auth,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SrFaxClientBuilder {
    /// Create a builder with the default endpoint and a 30 second timeout.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: None,
        }
    }

    /// Override the SRFax endpoint URL, in case the service moves.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Remove the request timeout.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SrFaxClient`].
    pub fn build(self) -> Result<SrFaxClient, SrFaxError> {
        url::Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SrFaxError::Transport(Box::new(err)))?;

        Ok(SrFaxClient {
            auth: self.auth,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SRFax client.
///
/// Every operation is a JSON POST to a single endpoint
/// (`https://www.srfax.com/SRF_SecWebSvc.php` by default). Responses go through
/// envelope classification first; the typed result is decoded only when SRFax
/// reports success. The client is cheap to clone and safe to share across tasks.
pub struct SrFaxClient {
    auth: Auth,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl SrFaxClient {
    /// Create a client using the default endpoint and timeout.
    ///
    /// For more customization, use [`SrFaxClient::builder`].
    pub fn new(auth: Auth) -> Result<Self, SrFaxError> {
        SrFaxClientBuilder::new(auth).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> SrFaxClientBuilder {
        SrFaxClientBuilder::new(auth)
    }

    /// Queue one or more files (or a cover page alone) for sending.
    pub async fn queue_fax(&self, request: QueueFax) -> Result<QueuedFax, SrFaxError> {
        self.call(
            crate::transport::encode_queue_fax_body(&request),
            crate::transport::decode_queued_fax_response,
        )
        .await
    }

    /// Status of one sent fax. Works only with outbound faxes.
    pub async fn get_fax_status(&self, id: FaxDetailsId) -> Result<FaxStatus, SrFaxError> {
        self.call(
            crate::transport::encode_fax_status_body(id),
            crate::transport::decode_fax_status_response,
        )
        .await
    }

    /// Status of several sent faxes at once.
    pub async fn get_multi_fax_status(
        &self,
        request: MultiFaxStatus,
    ) -> Result<Vec<FaxStatus>, SrFaxError> {
        self.call(
            crate::transport::encode_multi_fax_status_body(&request),
            crate::transport::decode_multi_fax_status_response,
        )
        .await
    }

    /// Faxes received in the requested period.
    pub async fn get_fax_inbox(&self, options: InboxOptions) -> Result<Inbox, SrFaxError> {
        self.call(
            crate::transport::encode_inbox_body(&options),
            crate::transport::decode_inbox_response,
        )
        .await
    }

    /// Faxes sent in the requested period.
    pub async fn get_fax_outbox(&self, options: OutboxOptions) -> Result<Outbox, SrFaxError> {
        self.call(
            crate::transport::encode_outbox_body(&options),
            crate::transport::decode_outbox_response,
        )
        .await
    }

    /// Download a sent or received fax document (PDF or TIFF).
    pub async fn retrieve_fax(&self, request: RetrieveFax) -> Result<RetrievedFax, SrFaxError> {
        self.call(
            crate::transport::encode_retrieve_fax_body(&request),
            crate::transport::decode_retrieve_fax_response,
        )
        .await
    }

    /// Mark a fax as read or unread.
    pub async fn update_viewed_status(
        &self,
        request: UpdateViewedStatus,
    ) -> Result<Acknowledgement, SrFaxError> {
        self.call(
            crate::transport::encode_update_viewed_status_body(&request),
            crate::transport::decode_acknowledgement_response,
        )
        .await
    }

    /// Delete one or more faxes.
    ///
    /// SRFax reports success even for ids it does not know, so a successful
    /// response does not prove anything was removed.
    pub async fn delete_fax(&self, request: DeleteFax) -> Result<Acknowledgement, SrFaxError> {
        self.call(
            crate::transport::encode_delete_fax_body(&request),
            crate::transport::decode_acknowledgement_response,
        )
        .await
    }

    /// Remove a queued fax that has not been sent yet.
    pub async fn stop_fax(&self, id: FaxDetailsId) -> Result<Acknowledgement, SrFaxError> {
        self.call(
            crate::transport::encode_stop_fax_body(id),
            crate::transport::decode_acknowledgement_response,
        )
        .await
    }

    /// Forward an existing fax to other numbers.
    pub async fn forward_fax(&self, request: ForwardFax) -> Result<QueuedFax, SrFaxError> {
        self.call(
            crate::transport::encode_forward_fax_body(&request),
            crate::transport::decode_queued_fax_response,
        )
        .await
    }

    /// Usage report for the account (and optionally its sub users).
    pub async fn get_fax_usage(
        &self,
        options: UsageOptions,
    ) -> Result<Vec<UsageEntry>, SrFaxError> {
        self.call(
            crate::transport::encode_usage_body(&options),
            crate::transport::decode_usage_response,
        )
        .await
    }

    /// Check that the credentials are accepted, using the cheapest read call.
    pub async fn check_auth(&self) -> Result<(), SrFaxError> {
        self.get_fax_usage(UsageOptions::default()).await?;
        Ok(())
    }

    async fn call<T>(
        &self,
        mut body: Body,
        decode: fn(&str) -> Result<Decoded<T>, ResponseError>,
    ) -> Result<T, SrFaxError> {
        let action = body.action().to_owned();
        self.auth.push_credentials(&mut body);

        tracing::debug!(action = %action, endpoint = %self.endpoint, "sending SRFax request");
        let response = self
            .http
            .post_json(&self.endpoint, body.into_value())
            .await
            .map_err(SrFaxError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SrFaxError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let decoded = decode(&response.body)?;
        tracing::debug!(
            action = %action,
            unused_keys = decoded.unused_keys.len(),
            "SRFax request succeeded"
        );
        Ok(decoded.value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::{Value, json};

    use crate::domain::{
        CallerId, Direction, FaxFile, FaxIdentifier, FaxNumber, QueueFaxOptions, Recipients,
        RetrieveFaxOptions, SenderEmail,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<String>,
        last_body: Value,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_body: Value::Null,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Value) {
            let state = self.state.lock().unwrap();
            (state.last_url.clone(), state.last_body.clone())
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            body: Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_url = Some(url.to_owned());
                    state.last_body = body;
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn make_client(transport: FakeTransport) -> SrFaxClient {
        SrFaxClient {
            auth: Auth::new(925, "abc").unwrap(),
            endpoint: "https://example.invalid/SRF_SecWebSvc.php".to_owned(),
            http: Arc::new(transport),
        }
    }

    #[tokio::test]
    async fn inbox_request_carries_credentials_and_decodes_entries() {
        let json = r#"
        {
          "Status": "Success",
          "Result": [
            {"FileName": "20180101230101-8812-34_0|31524120", "Pages": "3", "EpochTime": 1514847661}
          ]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let inbox = client.get_fax_inbox(InboxOptions::default()).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox.entries[0].pages, 3);

        let (url, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/SRF_SecWebSvc.php")
        );
        assert_eq!(
            body,
            json!({"action": "Get_Fax_Inbox", "access_id": 925, "access_pwd": "abc"})
        );
    }

    #[tokio::test]
    async fn failed_status_maps_to_remote_error() {
        let json = r#"{"Status": "Failed", "Result": "Invalid Fax Type / "}"#;
        let client = make_client(FakeTransport::new(200, json));

        let request = QueueFax::new(
            Recipients::single(
                CallerId::new("4161112222").unwrap(),
                SenderEmail::new("email@example.com").unwrap(),
                FaxNumber::new("14161113333").unwrap(),
            ),
            vec![FaxFile::from_bytes("a.txt", b"hello").unwrap()],
            QueueFaxOptions::default(),
        )
        .unwrap();

        let err = client.queue_fax(request).await.unwrap_err();
        match err {
            SrFaxError::Remote(ResultError { status, raw }) => {
                assert_eq!(status, "Failed");
                assert_eq!(raw, "Invalid Fax Type / ");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_object_maps_to_malformed_envelope() {
        let client = make_client(FakeTransport::new(200, "{}"));
        let err = client.check_auth().await.unwrap_err();
        match err {
            SrFaxError::MalformedEnvelope(MalformedEnvelope(message)) => {
                assert_eq!(message, "missing Status key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn uncoercible_field_maps_to_decode_error() {
        let json = r#"{"Status": "Success", "Result": {"Pages": "three"}}"#;
        let client = make_client(FakeTransport::new(200, json));
        let err = client
            .get_fax_status(FaxDetailsId::new(1).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, SrFaxError::Decode(ref e) if e.field == "Result.Pages"));
    }

    #[tokio::test]
    async fn non_success_http_status_keeps_body() {
        let client = make_client(FakeTransport::new(500, "oops"));
        let err = client.check_auth().await.unwrap_err();
        assert!(matches!(
            err,
            SrFaxError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn empty_http_body_maps_to_none() {
        let client = make_client(FakeTransport::new(503, "   "));
        let err = client.check_auth().await.unwrap_err();
        assert!(matches!(
            err,
            SrFaxError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let client = make_client(FakeTransport::new(200, "{ not json }"));
        let err = client.check_auth().await.unwrap_err();
        assert!(matches!(err, SrFaxError::Parse(_)));
    }

    #[tokio::test]
    async fn check_auth_accepts_successful_usage_report() {
        let json = r#"{"Status": "Success", "Result": [{"UserID": 925, "NumberOfFaxes": 0}]}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());
        client.check_auth().await.unwrap();

        let (_, body) = transport.last_request();
        assert_eq!(body["action"], json!("Get_Fax_Usage"));
    }

    #[tokio::test]
    async fn retrieve_fax_returns_decoded_bytes() {
        let json = r#"{"Status": "Success", "Result": "aGVsbG8="}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let fax = client
            .retrieve_fax(RetrieveFax {
                fax: FaxIdentifier::parse("20180101230101-8812-34_0|31524120").unwrap(),
                direction: Direction::Inbound,
                options: RetrieveFaxOptions::default(),
            })
            .await
            .unwrap();
        assert_eq!(fax.content, b"hello");

        let (_, body) = transport.last_request();
        assert_eq!(body["sDirection"], json!("IN"));
        assert_eq!(
            body["sFaxFileName"],
            json!("20180101230101-8812-34_0|31524120")
        );
    }

    #[tokio::test]
    async fn stop_and_delete_return_acknowledgement() {
        let json = r#"{"Status": "Success", "Result": "Fax deleted"}"#;
        let client = make_client(FakeTransport::new(200, json));
        let id = FaxDetailsId::new(30294755).unwrap();

        let ack = client.stop_fax(id).await.unwrap();
        assert_eq!(ack.message, "Fax deleted");

        let ack = client
            .delete_fax(DeleteFax::one(id, Direction::Outbound))
            .await
            .unwrap();
        assert_eq!(ack.message, "Fax deleted");
    }

    #[test]
    fn auth_constructor_validates_inputs() {
        assert!(Auth::new(0, "pwd").is_err());
        assert!(Auth::new(925, "").is_err());
        assert_eq!(Auth::new(925, "pwd").unwrap().access_id().value(), 925);
    }

    #[test]
    fn builder_endpoint_override_is_applied_and_validated() {
        let client = SrFaxClient::builder(Auth::new(925, "abc").unwrap())
            .endpoint("https://example.invalid/srfax")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.endpoint, "https://example.invalid/srfax");

        let err = SrFaxClient::builder(Auth::new(925, "abc").unwrap())
            .endpoint("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SrFaxError::InvalidEndpoint(_)));
    }

    #[test]
    fn default_client_uses_srfax_endpoint() {
        let client = SrFaxClient::new(Auth::new(925, "abc").unwrap()).unwrap();
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
    }
}
