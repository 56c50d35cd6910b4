use super::schema::{FieldKind, FieldSpec, FormSchema, InitialValue, Presence};
use crate::shared::api_utils::ApiError;
use crate::shared::notification::Notification;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use contracts::shared::api_response::WriteAck;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Draft values keyed by wire name; `None` is an absent optional value
pub type FormDraft = BTreeMap<&'static str, Option<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// A write is in flight; the draft is frozen
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("{label} is required")]
    MissingRequired {
        field: &'static str,
        label: &'static str,
    },
    #[error("{label}: `{raw}` is not a valid number")]
    InvalidNumber {
        field: &'static str,
        label: &'static str,
        raw: String,
    },
    #[error("{label} must be at least {min}")]
    BelowMinimum {
        field: &'static str,
        label: &'static str,
        min: f64,
    },
    #[error("{label}: `{raw}` is not a valid date")]
    InvalidDate {
        field: &'static str,
        label: &'static str,
        raw: String,
    },
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("no submission in progress")]
    NotSubmitting,
    #[error("form does not match the /{resource} payload: {detail}")]
    Payload {
        resource: &'static str,
        detail: String,
    },
}

/// Time source of a form: current instant plus the local UTC offset at a
/// given local wall-clock time
#[derive(Debug, Clone, Copy)]
pub struct FormClock {
    pub now: fn() -> DateTime<Utc>,
    pub offset_at: fn(NaiveDateTime) -> FixedOffset,
}

impl FormClock {
    pub fn utc() -> Self {
        Self {
            now: Utc::now,
            offset_at: |_| Utc.fix(),
        }
    }

    /// Clock using the browser's time zone
    pub fn browser() -> Self {
        Self {
            now: Utc::now,
            offset_at: browser_offset_at,
        }
    }

    /// Current local time, truncated to minutes, as a datetime-local value
    pub fn local_now_input(&self) -> String {
        let now = (self.now)();
        let offset = (self.offset_at)(now.naive_utc());
        now.with_timezone(&offset)
            .naive_local()
            .format("%Y-%m-%dT%H:%M")
            .to_string()
    }

    /// Interpret a local wall-clock time and convert it to UTC
    pub fn to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        let offset = (self.offset_at)(local);
        offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

fn browser_offset_at(local: NaiveDateTime) -> FixedOffset {
    use chrono::{Datelike, Timelike};

    let date = js_sys::Date::new_with_year_month_day_hr_min_sec(
        local.year() as u32,
        local.month0() as i32,
        local.day() as i32,
        local.hour() as i32,
        local.minute() as i32,
        local.second() as i32,
    );
    // Minutes behind UTC, positive west of Greenwich
    let minutes_behind = date.get_timezone_offset();
    FixedOffset::west_opt((minutes_behind * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone)]
pub struct EntityFormController {
    schema: &'static FormSchema,
    clock: FormClock,
    draft: FormDraft,
    phase: FormPhase,
}

impl EntityFormController {
    pub fn new(schema: &'static FormSchema, clock: FormClock) -> Self {
        let draft = initial_draft(schema, &clock);
        Self {
            schema,
            clock,
            draft,
            phase: FormPhase::Editing,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Raw value for an input; absent values read as ""
    pub fn value(&self, name: &str) -> &str {
        self.draft
            .get(name)
            .and_then(|v| v.as_deref())
            .unwrap_or("")
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Update one draft value; changing a discriminator resets its dependents
    pub fn set_field(&mut self, name: &str, raw: impl Into<String>) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        let spec = self
            .schema
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;

        let raw = raw.into();
        let value = match spec.presence {
            Presence::Optional if raw.is_empty() => None,
            _ => Some(raw),
        };

        let changed = self.draft.get(spec.name) != Some(&value);
        self.draft.insert(spec.name, value);

        if changed {
            for dependent in self.schema.dependents_of(spec.name) {
                self.draft
                    .insert(dependent.name, initial_value(dependent, &self.clock));
            }
        }
        Ok(())
    }

    /// Validate and coerce the draft, then enter `Submitting`
    ///
    /// On error the phase and the draft are unchanged.
    pub fn begin_submit(&mut self) -> Result<Value, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        let payload = Value::Object(self.build_payload()?);
        self.phase = FormPhase::Submitting;
        Ok(payload)
    }

    /// [`begin_submit`](Self::begin_submit) decoded into the write DTO
    pub fn begin_submit_as<T: DeserializeOwned>(&mut self) -> Result<T, FormError> {
        let payload = self.begin_submit()?;
        serde_json::from_value(payload).map_err(|e| {
            self.phase = FormPhase::Editing;
            FormError::Payload {
                resource: self.schema.resource,
                detail: e.to_string(),
            }
        })
    }

    /// Leave `Submitting`; a successful write resets the draft
    pub fn complete_submit(
        &mut self,
        outcome: &Result<WriteAck, ApiError>,
    ) -> Result<Notification, FormError> {
        if !self.is_submitting() {
            return Err(FormError::NotSubmitting);
        }
        self.phase = FormPhase::Editing;
        if outcome.is_ok() {
            self.reset();
        }
        Ok(write_outcome_notification(outcome))
    }

    /// Restore every field to its initial value
    pub fn reset(&mut self) {
        self.draft = initial_draft(self.schema, &self.clock);
    }

    fn build_payload(&self) -> Result<Map<String, Value>, FormError> {
        let mut payload = Map::new();
        for spec in self.schema.fields {
            let raw = self.draft.get(spec.name).and_then(|v| v.as_deref());
            payload.insert(spec.name.to_string(), coerce(spec, raw, &self.clock)?);
        }
        Ok(payload)
    }
}

/// Notification for a finished write
pub fn write_outcome_notification(outcome: &Result<WriteAck, ApiError>) -> Notification {
    match outcome {
        Ok(ack) => Notification::success(ack.message.clone()),
        Err(e) => Notification::error(e.write_notification_text()),
    }
}

fn initial_draft(schema: &FormSchema, clock: &FormClock) -> FormDraft {
    schema
        .fields
        .iter()
        .map(|spec| (spec.name, initial_value(spec, clock)))
        .collect()
}

fn initial_value(spec: &FieldSpec, clock: &FormClock) -> Option<String> {
    match (spec.initial, spec.presence) {
        (InitialValue::Empty, Presence::Optional) => None,
        (InitialValue::Empty, _) => Some(String::new()),
        (InitialValue::Literal(value), _) => Some(value.to_string()),
        (InitialValue::Now, _) => Some(clock.local_now_input()),
    }
}

fn coerce(spec: &FieldSpec, raw: Option<&str>, clock: &FormClock) -> Result<Value, FormError> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return match (spec.presence, spec.kind) {
            (Presence::Optional, _) => Ok(Value::Null),
            (Presence::Free, FieldKind::Text) => Ok(Value::String(String::new())),
            (Presence::Free, _) => Err(FormError::InvalidNumber {
                field: spec.name,
                label: spec.label,
                raw: String::new(),
            }),
            (Presence::Required, _) => Err(FormError::MissingRequired {
                field: spec.name,
                label: spec.label,
            }),
        };
    };

    match spec.kind {
        FieldKind::Text => Ok(Value::String(raw.to_string())),
        FieldKind::Date => {
            let trimmed = raw.trim();
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(|_| Value::String(trimmed.to_string()))
                .map_err(|_| invalid_date(spec, raw))
        }
        FieldKind::DateTimeLocal => {
            let trimmed = raw.trim();
            let local = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
                .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
                .map_err(|_| invalid_date(spec, raw))?;
            let utc = clock.to_utc(local).ok_or_else(|| invalid_date(spec, raw))?;
            Ok(Value::String(
                utc.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            ))
        }
        FieldKind::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid_number(spec, raw)),
        FieldKind::Decimal => {
            let number = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| invalid_number(spec, raw))?;
            if let Some(min) = spec.min {
                if number < min {
                    return Err(FormError::BelowMinimum {
                        field: spec.name,
                        label: spec.label,
                        min,
                    });
                }
            }
            Number::from_f64(number)
                .map(Value::Number)
                .ok_or_else(|| invalid_number(spec, raw))
        }
    }
}

fn invalid_number(spec: &FieldSpec, raw: &str) -> FormError {
    FormError::InvalidNumber {
        field: spec.name,
        label: spec.label,
        raw: raw.to_string(),
    }
}

fn invalid_date(spec: &FieldSpec, raw: &str) -> FormError {
    FormError::InvalidDate {
        field: spec.name,
        label: spec.label,
        raw: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::NotificationKind;
    use serde_json::json;

    static SCHEMA: FormSchema = FormSchema {
        resource: "things",
        fields: &[
            FieldSpec::required("kind", "Kind", FieldKind::Text),
            FieldSpec::required("thingID", "Thing", FieldKind::Integer).depends_on("kind"),
            FieldSpec::required("amount", "Amount", FieldKind::Decimal).min(0.01),
            FieldSpec::required("when", "When", FieldKind::DateTimeLocal).initial(InitialValue::Now),
            FieldSpec::optional("ownerID", "Owner", FieldKind::Integer),
            FieldSpec::free("cost", "Cost", FieldKind::Decimal).initial(InitialValue::Literal("0")),
            FieldSpec::free("notes", "Notes", FieldKind::Text),
        ],
    };

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 2, 15, 30).unwrap()
    }

    fn yangon(_: NaiveDateTime) -> FixedOffset {
        FixedOffset::east_opt(6 * 3600 + 30 * 60).unwrap()
    }

    fn clock() -> FormClock {
        FormClock {
            now: fixed_now,
            offset_at: yangon,
        }
    }

    fn filled() -> EntityFormController {
        let mut form = EntityFormController::new(&SCHEMA, clock());
        form.set_field("kind", "Site").unwrap();
        form.set_field("thingID", "7").unwrap();
        form.set_field("amount", "12.5").unwrap();
        form
    }

    #[test]
    fn test_initial_draft() {
        let form = EntityFormController::new(&SCHEMA, clock());
        assert_eq!(form.value("kind"), "");
        assert_eq!(form.value("cost"), "0");
        assert_eq!(form.value("when"), "2024-05-01T08:45");
        assert_eq!(form.draft().get("ownerID"), Some(&None));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = EntityFormController::new(&SCHEMA, clock());
        assert_eq!(
            form.set_field("bogus", "1"),
            Err(FormError::UnknownField("bogus".to_string()))
        );
    }

    #[test]
    fn test_discriminator_change_clears_dependent() {
        let mut form = filled();
        form.set_field("kind", "Site").unwrap();
        assert_eq!(form.value("thingID"), "7");

        form.set_field("kind", "Warehouse").unwrap();
        assert_eq!(form.value("thingID"), "");
    }

    #[test]
    fn test_payload_coercion() {
        let mut form = filled();
        form.set_field("when", "2024-01-01T10:00").unwrap();
        form.set_field("ownerID", "").unwrap();

        let payload = form.begin_submit().unwrap();
        assert_eq!(
            payload,
            json!({
                "kind": "Site",
                "thingID": 7,
                "amount": 12.5,
                "when": "2024-01-01T03:30:00.000Z",
                "ownerID": null,
                "cost": 0.0,
                "notes": ""
            })
        );
        assert!(form.is_submitting());
    }

    #[test]
    fn test_missing_required_keeps_editing() {
        let mut form = filled();
        form.set_field("kind", "Warehouse").unwrap();
        assert_eq!(
            form.begin_submit(),
            Err(FormError::MissingRequired {
                field: "thingID",
                label: "Thing"
            })
        );
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_non_finite_and_garbage_numbers_rejected() {
        for raw in ["abc", "NaN", "inf"] {
            let mut form = filled();
            form.set_field("amount", raw).unwrap();
            assert!(matches!(
                form.begin_submit(),
                Err(FormError::InvalidNumber { field: "amount", .. })
            ));
        }

        let mut form = filled();
        form.set_field("amount", "0").unwrap();
        assert!(matches!(
            form.begin_submit(),
            Err(FormError::BelowMinimum { field: "amount", .. })
        ));
    }

    #[test]
    fn test_invalid_datetime_rejected() {
        let mut form = filled();
        form.set_field("when", "yesterday").unwrap();
        assert!(matches!(
            form.begin_submit(),
            Err(FormError::InvalidDate { field: "when", .. })
        ));
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
        assert_eq!(form.set_field("amount", "3"), Err(FormError::AlreadySubmitting));
    }

    #[test]
    fn test_success_resets_draft() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let ack = WriteAck {
            message: "Fuel price added successfully".to_string(),
            usage_transition_id: None,
        };
        let notification = form.complete_submit(&Ok(ack)).unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.text, "Fuel price added successfully");
        assert_eq!(form.value("kind"), "");
        assert_eq!(form.value("amount"), "");
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = filled();
        let before = form.draft().clone();
        form.begin_submit().unwrap();

        let err = ApiError::WriteRejected {
            resource: "things".to_string(),
            status: 400,
            message: "bad".to_string(),
        };
        let notification = form.complete_submit(&Err(err)).unwrap();
        assert_eq!(notification, Notification::error("Error: bad"));
        assert_eq!(form.draft(), &before);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_undecodable_payload_returns_to_editing() {
        let mut form = filled();
        let before = form.draft().clone();

        let result = form.begin_submit_as::<Vec<i64>>();
        assert!(matches!(result, Err(FormError::Payload { resource: "things", .. })));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft(), &before);
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_complete_without_submit() {
        let mut form = filled();
        let err = ApiError::Cancelled {
            resource: "things".to_string(),
        };
        assert_eq!(form.complete_submit(&Err(err)), Err(FormError::NotSubmitting));
    }
}
