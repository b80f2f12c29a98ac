use crate::model::ActivityCatalog;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Values currently entered in the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.activity.is_empty()
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }

    /// Drops the selection when the activity is gone from a fresh catalog.
    pub fn select_options(&mut self, catalog: &ActivityCatalog) {
        if !self.activity.is_empty() && catalog.find(&self.activity).is_none() {
            self.activity.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_both_fields() {
        let mut form = SignupForm {
            email: "b@x.com".to_string(),
            activity: "Chess Club".to_string(),
        };
        assert!(form.is_complete());

        form.reset();
        assert_eq!(form, SignupForm::default());
        assert!(!form.is_complete());
    }

    #[test]
    fn selection_survives_reload_only_if_present() {
        let catalog: ActivityCatalog = serde_json::from_str(
            r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":2}}"#,
        )
        .unwrap();

        let mut form = SignupForm {
            email: String::new(),
            activity: "Chess Club".to_string(),
        };
        form.select_options(&catalog);
        assert_eq!(form.activity, "Chess Club");

        form.activity = "Gone Club".to_string();
        form.select_options(&catalog);
        assert!(form.activity.is_empty());
    }
}
