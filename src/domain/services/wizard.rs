use crate::domain::models::availability::AvailabilitySnapshot;
use crate::domain::models::booking::{BookingRequest, WizardSelection};
use crate::domain::models::service::ServiceInfo;
use crate::domain::services::availability::{DateStatus, classify_date};
use crate::error::WizardError;
use crate::state::AppState;
use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CollectingDate,
    CollectingTime,
    ReviewAndSubmit,
    Submitted,
}

/// One booking attempt: date -> time -> review -> submitted.
///
/// The session owns every piece of per-wizard mutable state (selection,
/// snapshot, step, in-flight flag). Nothing here is shared across
/// concurrent bookings, so no locking is needed.
pub struct WizardSession {
    pub id: Uuid,
    church_id: String,
    service: ServiceInfo,
    snapshot: Option<AvailabilitySnapshot>,
    selection: WizardSelection,
    step: WizardStep,
    date_status: DateStatus,
    submitting: bool,
    booking_code: Option<String>,
    last_error: Option<String>,
}

impl WizardSession {
    pub fn new(church_id: impl Into<String>, service: ServiceInfo) -> Self {
        Self {
            id: Uuid::new_v4(),
            church_id: church_id.into(),
            service,
            snapshot: None,
            selection: WizardSelection::default(),
            step: WizardStep::CollectingDate,
            date_status: DateStatus::Normal,
            submitting: false,
            booking_code: None,
            last_error: None,
        }
    }

    pub fn church_id(&self) -> &str {
        &self.church_id
    }

    pub fn service(&self) -> &ServiceInfo {
        &self.service
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selection(&self) -> &WizardSelection {
        &self.selection
    }

    pub fn snapshot(&self) -> Option<&AvailabilitySnapshot> {
        self.snapshot.as_ref()
    }

    pub fn booking_code(&self) -> Option<&str> {
        self.booking_code.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Submit action should be rendered disabled while this is true.
    pub fn is_busy(&self) -> bool {
        self.submitting
    }

    /// Classification of the currently selected date, kept current across
    /// snapshot arrival.
    pub fn current_status(&self) -> &DateStatus {
        &self.date_status
    }

    /// Fetches the church calendar for this session. Failures (network,
    /// timeout, bad payload) are logged and leave the snapshot absent so
    /// every date classifies as allowed; the server re-validates at
    /// submission time.
    pub async fn load_availability(&mut self, state: &AppState) {
        let church_id = self.church_id.clone();
        match state.calendar.fetch_snapshot(&church_id).await {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(e) => {
                warn!(
                    church_id = %church_id,
                    "availability fetch failed, continuing without calendar data: {}", e
                );
            }
        }
    }

    /// Applies a fetched snapshot, discarding it if the session has since
    /// been reopened for a different church. An already-selected date is
    /// re-classified on arrival.
    pub fn apply_snapshot(&mut self, snapshot: AvailabilitySnapshot) {
        if snapshot.church_id != self.church_id {
            warn!(
                fetched = %snapshot.church_id,
                current = %self.church_id,
                "discarding stale availability snapshot"
            );
            return;
        }

        self.snapshot = Some(snapshot);
        if let Some(date) = self.selection.date {
            self.date_status = classify_date(date, self.snapshot.as_ref());
        }
    }

    /// Stores the chosen date and returns its classification. A `Blocked`
    /// result keeps the date in the selection so the hint can reference it,
    /// but `advance` will refuse to move on.
    pub fn select_date(&mut self, date: NaiveDate) -> DateStatus {
        self.selection.date = Some(date);
        self.date_status = classify_date(date, self.snapshot.as_ref());
        self.date_status.clone()
    }

    pub fn select_time(&mut self, time: NaiveTime) {
        self.selection.time = Some(time);
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.selection.notes = notes;
    }

    /// Forward transition, guarded: a date must be selected and not blocked
    /// before time collection, a time must be selected before review.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::CollectingDate => {
                let date = self
                    .selection
                    .date
                    .ok_or_else(|| WizardError::Step("Select a date first".to_string()))?;
                let status = classify_date(date, self.snapshot.as_ref());
                if let DateStatus::Blocked { .. } = status {
                    self.date_status = status.clone();
                    return Err(WizardError::Step(
                        status
                            .message()
                            .unwrap_or_else(|| "This date is not available for bookings.".to_string()),
                    ));
                }
                self.date_status = status;
                self.step = WizardStep::CollectingTime;
            }
            WizardStep::CollectingTime => {
                if self.selection.time.is_none() {
                    return Err(WizardError::Step("Select a time slot first".to_string()));
                }
                self.step = WizardStep::ReviewAndSubmit;
            }
            WizardStep::ReviewAndSubmit => {
                return Err(WizardError::Step(
                    "Use submit to complete the booking".to_string(),
                ));
            }
            WizardStep::Submitted => {
                return Err(WizardError::Step("Booking already submitted".to_string()));
            }
        }
        Ok(self.step)
    }

    /// Backward transition. Always permitted within the flow and never
    /// re-validates; `Submitted` is terminal.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::CollectingDate => WizardStep::CollectingDate,
            WizardStep::CollectingTime => WizardStep::CollectingDate,
            WizardStep::ReviewAndSubmit => WizardStep::CollectingTime,
            WizardStep::Submitted => {
                return Err(WizardError::Step("Booking already submitted".to_string()));
            }
        };
        Ok(self.step)
    }

    /// Submits the final selection. On rejection the session stays in
    /// `ReviewAndSubmit` with the selection intact and the server's message
    /// (verbatim where available) recorded for inline display.
    pub async fn submit(&mut self, state: &AppState) -> Result<String, WizardError> {
        match self.step {
            WizardStep::ReviewAndSubmit => {}
            WizardStep::Submitted => {
                return Err(WizardError::Step("Booking already submitted".to_string()));
            }
            _ => {
                return Err(WizardError::Step(
                    "Complete the wizard before submitting".to_string(),
                ));
            }
        }
        if self.submitting {
            return Err(WizardError::Step("Submission already in flight".to_string()));
        }

        let date = self
            .selection
            .date
            .ok_or_else(|| WizardError::Validation("No date selected".to_string()))?;
        let time = self
            .selection
            .time
            .ok_or_else(|| WizardError::Validation("No time selected".to_string()))?;

        let request = BookingRequest {
            service_id: self.service.id.clone(),
            date,
            time,
            notes: self.selection.notes.clone(),
        };

        self.submitting = true;
        let result = state.bookings.submit(&self.church_id, &request).await;
        self.submitting = false;

        match result {
            Ok(confirmation) => {
                info!(
                    session_id = %self.id,
                    booking_code = %confirmation.booking_code,
                    "booking confirmed"
                );
                self.step = WizardStep::Submitted;
                self.last_error = None;
                self.booking_code = Some(confirmation.booking_code.clone());
                Ok(confirmation.booking_code)
            }
            Err(e) => {
                warn!(session_id = %self.id, "booking submission failed: {}", e);
                self.last_error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Reopens the wizard for a (possibly different) church and service:
    /// selection, snapshot and any prior outcome are cleared.
    pub fn reset(&mut self, church_id: impl Into<String>, service: ServiceInfo) {
        self.church_id = church_id.into();
        self.service = service;
        self.snapshot = None;
        self.selection.clear();
        self.step = WizardStep::CollectingDate;
        self.date_status = DateStatus::Normal;
        self.submitting = false;
        self.booking_code = None;
        self.last_error = None;
    }
}
