//! JSON request bodies. Optional arguments are pushed one key at a time and
//! skipped when unset, so the body only carries what the caller asked for.

use serde_json::{Map, Value};

use crate::domain::{
    CallerId, Direction, FaxDetailsId, FaxFileName, FaxIdentifier, FaxNumber, FaxType, NotifyUrl,
    Period, Recipients, Retries, ScheduleDate, ScheduleTime, SenderEmail,
};

pub(crate) const ACTION_KEY: &str = "action";

pub(crate) const QUEUE_FAX: &str = "Queue_Fax";
pub(crate) const GET_FAX_STATUS: &str = "Get_FaxStatus";
pub(crate) const GET_MULTI_FAX_STATUS: &str = "Get_MultiFaxStatus";
pub(crate) const GET_FAX_INBOX: &str = "Get_Fax_Inbox";
pub(crate) const GET_FAX_OUTBOX: &str = "Get_Fax_Outbox";
pub(crate) const FORWARD_FAX: &str = "Forward_Fax";
pub(crate) const RETRIEVE_FAX: &str = "Retrieve_Fax";
pub(crate) const UPDATE_VIEWED_STATUS: &str = "Update_Viewed_Status";
pub(crate) const DELETE_FAX: &str = "Delete_Fax";
pub(crate) const STOP_FAX: &str = "Stop_Fax";
pub(crate) const GET_FAX_USAGE: &str = "Get_Fax_Usage";

const START_DATE: &str = "sStartDate";
const END_DATE: &str = "sEndDate";
const INCLUDE_SUB_USERS: &str = "sIncludeSubUsers";

/// Request body under construction, always carrying `action`.
#[derive(Debug, Clone)]
pub struct Body(Map<String, Value>);

impl Body {
    pub fn new(action: &'static str) -> Self {
        let mut map = Map::new();
        map.insert(ACTION_KEY.to_owned(), Value::from(action));
        Self(map)
    }

    pub fn action(&self) -> &str {
        self.0
            .get(ACTION_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn put_opt<V: Into<Value>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.put(key, value);
        }
    }

    /// Non-empty text only; SRFax treats empty strings as invalid values.
    pub fn put_text(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            self.put(key, value);
        }
    }

    /// Yes/no flags are sent as `"Y"` and left out otherwise.
    pub fn put_flag(&mut self, key: &str, enabled: bool) {
        if enabled {
            self.put(key, "Y");
        }
    }

    pub fn put_identifier(&mut self, fax: &FaxIdentifier) {
        match fax {
            FaxIdentifier::DetailsId(id) => self.put(FaxDetailsId::FIELD, id.value()),
            FaxIdentifier::FileName(name) => self.put(FaxFileName::FIELD, name.as_str()),
        }
    }

    pub fn put_direction(&mut self, direction: Direction) {
        self.put(Direction::FIELD, direction.as_str());
    }

    pub fn put_period(&mut self, period: Option<&Period>) {
        let Some(period) = period else {
            return;
        };
        self.put(Period::FIELD, period.as_str());
        if let Period::Range { start, end } = period {
            self.put(START_DATE, start.as_str());
            self.put(END_DATE, end.as_str());
        }
    }

    pub fn put_include_sub_users(&mut self, enabled: bool) {
        self.put_flag(INCLUDE_SUB_USERS, enabled);
    }

    pub fn put_recipients(&mut self, recipients: &Recipients) {
        self.put(CallerId::FIELD, recipients.caller_id().value());
        self.put(SenderEmail::FIELD, recipients.sender_email().as_str());
        self.put(FaxType::FIELD, recipients.fax_type().as_str());
        let to = recipients
            .to()
            .iter()
            .map(FaxNumber::as_str)
            .collect::<Vec<_>>()
            .join("|");
        self.put(FaxNumber::FIELD, to);
    }

    /// Delivery options shared by queue and forward requests.
    pub fn put_delivery(
        &mut self,
        retries: Option<Retries>,
        account_code: Option<&str>,
        fax_from_header: Option<&str>,
        notify_url: Option<&NotifyUrl>,
        queue_date: Option<&ScheduleDate>,
        queue_time: Option<&ScheduleTime>,
    ) {
        self.put_opt(Retries::FIELD, retries.map(Retries::value));
        self.put_text("sAccountCode", account_code);
        self.put_text("sFaxFromHeader", fax_from_header);
        self.put_opt(NotifyUrl::FIELD, notify_url.map(NotifyUrl::as_str));
        self.put_opt(ScheduleDate::FIELD, queue_date.map(ScheduleDate::as_str));
        self.put_opt(ScheduleTime::FIELD, queue_time.map(ScheduleTime::as_str));
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.into_map())
    }
}
