use serde::Serialize;

use crate::domain::validation::ValidationError;
use crate::domain::value::{FaxDetailsId, details_id_from_name};

/// Status of one sent fax (`Get_FaxStatus`, `Get_MultiFaxStatus`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FaxStatus {
    pub file_name: String,
    pub sent_status: String,
    pub date_queued: String,
    pub date_sent: String,
    pub to_fax_number: String,
    /// Documented as an integer, sent as a string.
    pub remote_id: String,
    pub error_code: String,
    pub account_code: String,
    pub subject: String,
    pub pages: i64,
    pub epoch_time: i64,
    pub duration: i64,
    pub size: i64,
}

/// One received fax (`Get_Fax_Inbox`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InboxEntry {
    pub file_name: String,
    pub receive_status: String,
    pub date: String,
    pub caller_id: String,
    pub remote_id: String,
    pub viewed_status: String,
    /// Present only when sub users were included.
    pub user_id: Option<String>,
    /// Present only when sub users were included.
    pub user_fax_number: Option<String>,
    pub epoch_time: i64,
    pub pages: i64,
    pub size: i64,
}

/// One sent fax (`Get_Fax_Outbox`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutboxEntry {
    pub file_name: String,
    pub sent_status: String,
    pub date_queued: String,
    pub date_sent: String,
    pub epoch_time: i64,
    pub to_fax_number: String,
    pub remote_id: String,
    pub error_code: String,
    pub account_code: String,
    pub subject: String,
    pub user_id: Option<String>,
    pub user_fax_number: Option<String>,
    pub pages: i64,
    pub duration: i64,
    pub size: i64,
}

/// Usage for one account or sub account (`Get_Fax_Usage`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageEntry {
    pub period: String,
    pub client_name: String,
    pub billing_number: String,
    pub user_id: i64,
    pub sub_user_id: i64,
    pub number_of_faxes: i64,
    pub number_of_pages: i64,
}

/// Received faxes listed by `Get_Fax_Inbox`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inbox {
    pub entries: Vec<InboxEntry>,
}

impl Inbox {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fax ids parsed from every entry's file name.
    pub fn details_ids(&self) -> Result<Vec<FaxDetailsId>, ValidationError> {
        self.entries
            .iter()
            .map(|entry| details_id_from_name(&entry.file_name))
            .collect()
    }
}

/// Sent faxes listed by `Get_Fax_Outbox`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outbox {
    pub entries: Vec<OutboxEntry>,
}

impl Outbox {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fax ids parsed from every entry's file name.
    pub fn details_ids(&self) -> Result<Vec<FaxDetailsId>, ValidationError> {
        self.entries
            .iter()
            .map(|entry| details_id_from_name(&entry.file_name))
            .collect()
    }
}

/// Fax accepted into the send queue (`Queue_Fax`, `Forward_Fax`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedFax {
    pub details_id: FaxDetailsId,
}

/// Fax document returned by `Retrieve_Fax`, already base64-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedFax {
    pub content: Vec<u8>,
}

/// Free-form confirmation message (`Stop_Fax`, `Delete_Fax`, `Update_Viewed_Status`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: String,
}
