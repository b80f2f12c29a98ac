use crate::model::{
    participant_path, ActivityCatalog, ApiError, Confirmation, FailureBody, RosterApi,
    ACTIVITIES_PATH,
};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Talks to the roster service over `fetch`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpRosterApi {
    base_url: String,
}

impl HttpRosterApi {
    /// `base_url` may be empty to address the page's own origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl RosterApi for HttpRosterApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = self.url(ACTIVITIES_PATH);
        log::debug!("GET {}", url);
        let response = Request::get(&url).send().await.map_err(transport)?;
        read_json(response).await
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        let url = self.url(&participant_path(activity, "signup", email)?);
        log::debug!("POST {}", url);
        let response = Request::post(&url).send().await.map_err(transport)?;
        read_json(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        let url = self.url(&participant_path(activity, "unregister", email)?);
        log::debug!("DELETE {}", url);
        let response = Request::delete(&url).send().await.map_err(transport)?;
        read_json(response).await
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.map_err(transport)?;
    decode_body(ok, status, &body)
}

/// Turns a finished response into the success payload or an `ApiError`.
/// Any JSON error body is a server-reported failure; error bodies that are
/// not JSON count as decode failures.
pub(crate) fn decode_body<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    body: &str,
) -> Result<T, ApiError> {
    if ok {
        return Ok(serde_json::from_str(body)?);
    }
    let failure = FailureBody::from_value(serde_json::from_str(body)?);
    Err(ApiError::Server {
        status,
        detail: failure.detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url() {
        let api = HttpRosterApi::new("https://school.example/");
        assert_eq!(api.url("/activities"), "https://school.example/activities");

        let same_origin = HttpRosterApi::new("");
        assert_eq!(same_origin.url("/activities"), "/activities");
    }

    #[test]
    fn decodes_confirmation() {
        let confirmation: Confirmation =
            decode_body(true, 200, r#"{"message":"Signed up"}"#).unwrap();
        assert_eq!(confirmation.message, "Signed up");
    }

    #[test]
    fn decodes_server_detail() {
        let result: Result<Confirmation, _> = decode_body(false, 404, r#"{"detail":"Not found"}"#);
        assert_eq!(result, Err(ApiError::not_found("Not found")));
    }

    #[test]
    fn error_without_detail() {
        let result: Result<Confirmation, _> = decode_body(false, 500, "{}");
        assert_eq!(
            result,
            Err(ApiError::Server {
                status: 500,
                detail: None
            })
        );
    }

    #[test]
    fn validation_error_is_server_reported() {
        let result: Result<Confirmation, _> = decode_body(
            false,
            422,
            r#"{"detail":[{"loc":["query","email"],"msg":"field required"}]}"#,
        );
        let err = result.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 422,
                detail: None
            }
        );
        assert!(err.is_server_reported());
        assert_eq!(err.user_text("An error occurred"), "An error occurred");
    }

    #[test]
    fn json_error_without_object_is_server_reported() {
        let result: Result<Confirmation, _> = decode_body(false, 503, r#""maintenance""#);
        assert_eq!(
            result,
            Err(ApiError::Server {
                status: 503,
                detail: None
            })
        );
    }

    #[test]
    fn non_json_is_decode_failure() {
        let result: Result<ActivityCatalog, _> = decode_body(true, 200, "<html>oops</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));

        let result: Result<Confirmation, _> = decode_body(false, 502, "Bad Gateway");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
