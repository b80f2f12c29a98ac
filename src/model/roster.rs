use crate::model::{
    ActivityCatalog, ApiError, Confirmation, Message, RosterApi, SIGNUP_MESSAGE_DELAY,
    UNREGISTER_MESSAGE_DELAY,
};
use instant::Duration;
use std::rc::Rc;

pub const SIGNUP_FALLBACK: &str = "An error occurred";
pub const SIGNUP_TRANSPORT_FAILURE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FALLBACK: &str = "Failed to unregister participant";
pub const UNREGISTER_TRANSPORT_FAILURE: &str = "Failed to unregister participant. Please try again.";

/// The page regions the renderer and the controller write to.
pub trait RosterView {
    /// Replaces the activity list and the select options in one go.
    fn replace_activities(&self, catalog: ActivityCatalog);

    fn show_load_failure(&self);

    fn show_message(&self, message: Message, hide_after: Duration);

    fn reset_form(&self);
}

/// Built once per page and handed to both the renderer and the controller.
pub struct RosterContext<A, V> {
    pub api: Rc<A>,
    pub view: V,
}

impl<A, V: Clone> Clone for RosterContext<A, V> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            view: self.view.clone(),
        }
    }
}

impl<A, V> RosterContext<A, V>
where
    A: RosterApi,
    V: RosterView,
{
    pub fn new(api: Rc<A>, view: V) -> Self {
        Self { api, view }
    }
}

pub struct ActivityRenderer<A, V> {
    context: RosterContext<A, V>,
}

impl<A, V: Clone> Clone for ActivityRenderer<A, V> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
        }
    }
}

impl<A, V> ActivityRenderer<A, V>
where
    A: RosterApi,
    V: RosterView + Clone,
{
    pub fn new(context: RosterContext<A, V>) -> Self {
        Self { context }
    }

    /// Fetches the whole collection and replaces what is on screen.
    /// On failure the list is swapped for the static notice.
    pub async fn load_and_render(&self) -> Result<usize, ApiError> {
        match self.context.api.fetch_activities().await {
            Ok(catalog) => {
                let count = catalog.len();
                log::debug!("Rendering {} activities", count);
                self.context.view.replace_activities(catalog);
                Ok(count)
            }
            Err(err) => {
                log::error!("Error fetching activities: {}", err);
                self.context.view.show_load_failure();
                Err(err)
            }
        }
    }
}

pub struct RegistrationController<A, V> {
    context: RosterContext<A, V>,
    renderer: ActivityRenderer<A, V>,
}

impl<A, V: Clone> Clone for RegistrationController<A, V> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<A, V> RegistrationController<A, V>
where
    A: RosterApi,
    V: RosterView + Clone,
{
    pub fn new(context: RosterContext<A, V>) -> Self {
        let renderer = ActivityRenderer::new(context.clone());
        Self { context, renderer }
    }

    pub fn renderer(&self) -> &ActivityRenderer<A, V> {
        &self.renderer
    }

    /// Registers `email` for `activity`. On success the form is cleared and
    /// the list reloaded; on failure the form keeps its values.
    pub async fn sign_up(&self, email: &str, activity: &str) -> Result<Confirmation, ApiError> {
        log::info!("Signing up {} for {}", email, activity);
        let view = &self.context.view;

        match self.context.api.sign_up(activity, email).await {
            Ok(confirmation) => {
                view.show_message(
                    Message::success(confirmation.message.clone()),
                    SIGNUP_MESSAGE_DELAY,
                );
                view.reset_form();
                let _ = self.renderer.load_and_render().await;
                Ok(confirmation)
            }
            Err(err) if err.is_server_reported() => {
                log::warn!("Signup rejected: {}", err);
                view.show_message(
                    Message::error(err.user_text(SIGNUP_FALLBACK)),
                    SIGNUP_MESSAGE_DELAY,
                );
                Err(err)
            }
            Err(err) => {
                log::error!("Error signing up: {}", err);
                view.show_message(Message::error(SIGNUP_TRANSPORT_FAILURE), SIGNUP_MESSAGE_DELAY);
                Err(err)
            }
        }
    }

    /// Removes `email` from `activity`. Addressed by the explicit pair, never
    /// by whichever card currently has focus.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, ApiError> {
        log::info!("Unregistering {} from {}", email, activity);
        let view = &self.context.view;

        match self.context.api.unregister(activity, email).await {
            Ok(confirmation) => {
                view.show_message(
                    Message::success(confirmation.message.clone()),
                    UNREGISTER_MESSAGE_DELAY,
                );
                let _ = self.renderer.load_and_render().await;
                Ok(confirmation)
            }
            Err(err) if err.is_server_reported() => {
                log::warn!("Unregister rejected: {}", err);
                view.show_message(
                    Message::error(err.user_text(UNREGISTER_FALLBACK)),
                    UNREGISTER_MESSAGE_DELAY,
                );
                Err(err)
            }
            Err(err) => {
                log::error!("Error unregistering participant: {}", err);
                view.show_message(
                    Message::error(UNREGISTER_TRANSPORT_FAILURE),
                    UNREGISTER_MESSAGE_DELAY,
                );
                Err(err)
            }
        }
    }
}
