use activity_roster::model::{ActivityCatalog, ApiError, Confirmation, RosterApi};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch,
    SignUp { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// Answers each call with the next queued response and records the call.
/// An empty queue answers with a transport failure.
#[derive(Default)]
pub struct ScriptedApi {
    calls: RefCell<Vec<Call>>,
    catalogs: RefCell<VecDeque<Result<ActivityCatalog, ApiError>>>,
    confirmations: RefCell<VecDeque<Result<Confirmation, ApiError>>>,
}

impl ScriptedApi {
    pub fn push_catalog(&self, json: &str) {
        let catalog = serde_json::from_str(json).expect("fixture catalog is valid");
        self.catalogs.borrow_mut().push_back(Ok(catalog));
    }

    pub fn push_catalog_error(&self, err: ApiError) {
        self.catalogs.borrow_mut().push_back(Err(err));
    }

    pub fn push_confirmation(&self, message: &str) {
        self.confirmations.borrow_mut().push_back(Ok(Confirmation {
            message: message.to_string(),
        }));
    }

    pub fn push_failure(&self, err: ApiError) {
        self.confirmations.borrow_mut().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == Call::Fetch)
            .count()
    }

    fn next_confirmation(&self) -> Result<Confirmation, ApiError> {
        self.confirmations
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

#[async_trait(?Send)]
impl RosterApi for ScriptedApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        self.calls.borrow_mut().push(Call::Fetch);
        self.catalogs
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        self.calls.borrow_mut().push(Call::SignUp {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.next_confirmation()
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        self.calls.borrow_mut().push(Call::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        self.next_confirmation()
    }
}
