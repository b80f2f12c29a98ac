use crate::model::{ActivityCatalog, ApiError};
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::Url;

/// Body of a successful signup or unregister call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

/// Body of a failed call. FastAPI-style servers put the reason in `detail`.
/// Only a string `detail` is readable; validation errors send a list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FailureBody {
    #[serde(default, deserialize_with = "string_detail")]
    pub detail: Option<String>,
}

impl FailureBody {
    /// Reads any JSON error body. Shapes without a string `detail` yield none.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn string_detail<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(detail) => Some(detail),
        _ => None,
    })
}

/// The remote roster service, as seen from the page.
#[async_trait(?Send)]
pub trait RosterApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError>;

    async fn sign_up(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError>;
}

pub const ACTIVITIES_PATH: &str = "/activities";

/// Path and query for `/activities/{name}/{action}?email={email}`, with the
/// name segment and the email value percent-encoded.
pub fn participant_path(activity: &str, action: &str, email: &str) -> Result<String, ApiError> {
    // Only used to drive the encoder; the host never leaves this function.
    let mut url = Url::parse("http://roster.invalid/")?;
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push("activities").push(activity).push(action);
    }
    url.query_pairs_mut().append_pair("email", email);

    Ok(match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    })
}
