//! Typed Rust client for the SRFax fax-over-HTTP API.
//!
//! The crate is split into a domain layer of validated types, a transport layer
//! that owns the wire format, and a small client layer orchestrating requests.
//!
//! Every SRFax response is a JSON object `{"Status": ..., "Result": ...}`.
//! [`classify`] decides whether a call succeeded, and only then is `Result`
//! decoded into the typed record via [`decode_result`]. Both are usable on
//! their own, without the HTTP client.
//!
//! ```rust,no_run
//! use srfax::{Auth, InboxOptions, SrFaxClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), srfax::SrFaxError> {
//!     let client = SrFaxClient::new(Auth::new(12345, "secret")?)?;
//!     let inbox = client.get_fax_inbox(InboxOptions::default()).await?;
//!     for entry in &inbox.entries {
//!         println!("{} ({} pages)", entry.file_name, entry.pages);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Auth, SrFaxClient, SrFaxClientBuilder, SrFaxError};
pub use domain::{
    AccessId, AccessPassword, Acknowledgement, CallerId, CoverPage, CoverPageText, DeleteFax,
    Direction, FaxDetailsId, FaxFile, FaxFileName, FaxFormat, FaxIdentifier, FaxNumber, FaxStatus,
    FaxType, ForwardFax, ForwardFaxOptions, Inbox, InboxEntry, InboxOptions, MultiFaxStatus,
    NotifyUrl, Outbox, OutboxEntry, OutboxOptions, Period, QueueFax, QueueFaxOptions, QueuedFax,
    Recipients, ReportDate, Retries, RetrieveFax, RetrieveFaxOptions, RetrievedFax, ScheduleDate,
    ScheduleTime, SenderEmail, UpdateViewedStatus, UsageEntry, UsageOptions, ValidationError,
    ViewedFilter, ViewedMark,
};
pub use transport::{
    DecodeError, DecodeRecord, Decoded, DecodedRecord, EnvelopeError, FieldKind, FieldSpec,
    FieldValue, FromResult, MalformedEnvelope, RawEnvelope, ResponseError, ResultError, classify,
    decode_response, decode_result,
};
