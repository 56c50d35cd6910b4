use super::controller::{write_outcome_notification, EntityFormController, FormClock, FormError};
use super::schema::{FieldSpec, FormSchema};
use crate::shared::api_utils::post_entity;
use crate::shared::notification::Notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// ViewModel of an entry form
///
/// - Draft edits go through `set` (discriminator changes clear dependents)
/// - `submit` validates, posts to the schema's resource and publishes the
///   outcome through the notifier
#[derive(Clone, Copy)]
pub struct EntityFormViewModel {
    pub form: RwSignal<EntityFormController>,
    notifier: Notifier,
}

impl EntityFormViewModel {
    pub fn new(schema: &'static FormSchema, notifier: Notifier) -> Self {
        Self {
            form: RwSignal::new(EntityFormController::new(schema, FormClock::browser())),
            notifier,
        }
    }

    pub fn spec(&self, name: &str) -> Option<&'static FieldSpec> {
        self.form.with_untracked(|f| f.schema().field(name))
    }

    /// Current raw value (tracked)
    pub fn value(&self, name: &'static str) -> String {
        self.form.with(|f| f.value(name).to_string())
    }

    pub fn set(&self, name: &'static str, raw: String) {
        if let Some(Err(e)) = self.form.try_update(|f| f.set_field(name, raw)) {
            log::warn!("form edit ignored: {}", e);
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(EntityFormController::is_submitting)
    }

    /// Validate the draft as `T` and post it
    pub fn submit<T>(&self)
    where
        T: DeserializeOwned + Serialize + 'static,
    {
        let started = self.form.try_update(|f| f.begin_submit_as::<T>());
        let payload = match started {
            Some(Ok(payload)) => payload,
            Some(Err(FormError::AlreadySubmitting)) => {
                log::warn!("submit ignored: a submission is already in progress");
                return;
            }
            Some(Err(e)) => {
                self.notifier.error(format!("Error: {}", e));
                return;
            }
            None => return,
        };

        let form = self.form;
        let notifier = self.notifier;
        let resource = form.with_untracked(|f| f.schema().resource);
        spawn_local(async move {
            let outcome = post_entity(resource, &payload).await;
            match &outcome {
                Ok(ack) => log::info!("POST /{}: {}", resource, ack.message),
                Err(e) => log::error!("POST /{} failed: {}", resource, e),
            }

            // The form may have been unmounted while the write was in flight
            let notification = match form.try_update(|f| f.complete_submit(&outcome)) {
                Some(Ok(notification)) => notification,
                Some(Err(e)) => {
                    log::warn!("{}", e);
                    write_outcome_notification(&outcome)
                }
                None => write_outcome_notification(&outcome),
            };
            notifier.publish(notification);
        });
    }
}
