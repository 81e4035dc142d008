use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use regex::Regex;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use doctor_cell::services::availability::{AvailabilitySource, SlotGenerator, ThreadRngSource};
use doctor_cell::services::directory::DoctorDirectory;
use shared_config::AppConfig;

use crate::error::BookingError;
use crate::models::{
    Booking, PatientField, PatientInfo, WorkflowEvent, WorkflowStage, WorkflowState,
};
use crate::services::ledger::BookingLedger;

/// Success notification text, fixed display locale.
pub const CONFIRMATION_TEXT: &str = "تم حجز الموعد بنجاح!";

/// Ledger display date format, fixed display locale.
const LEDGER_DATE_FORMAT: &str = "%d/%m/%Y";

/// What a booking is composed from: the selections as they stood when the
/// submission started, regardless of later form edits.
struct SubmissionSnapshot {
    ticket: Uuid,
    doctor: String,
    slot: String,
    patient: PatientInfo,
}

/// Owns the booking session: the workflow state machine, the ledger, and the
/// side effects the pure transitions cannot carry (directory lookups, slot
/// draws, the simulated submission delay).
///
/// All transitions are serialized through the state's write lock. At most one
/// submission is in flight at a time; its scheduled completion is a spawned
/// task that can be aborted until it fires.
pub struct BookingWorkflowService {
    directory: Arc<DoctorDirectory>,
    generator: SlotGenerator,
    source: Mutex<Box<dyn AvailabilitySource>>,
    state: Arc<RwLock<WorkflowState>>,
    ledger: Arc<RwLock<BookingLedger>>,
    in_flight_task: Mutex<Option<JoinHandle<()>>>,
    submission_delay: Duration,
    confirmation_ttl: Duration,
}

impl BookingWorkflowService {
    pub fn new(config: &AppConfig, directory: Arc<DoctorDirectory>) -> Self {
        Self::with_source(config, directory, Box::new(ThreadRngSource))
    }

    /// Construct with an explicit availability source so slot draws can be
    /// pinned deterministically.
    pub fn with_source(
        config: &AppConfig,
        directory: Arc<DoctorDirectory>,
        source: Box<dyn AvailabilitySource>,
    ) -> Self {
        Self {
            directory,
            generator: SlotGenerator::new(config.availability_threshold),
            source: Mutex::new(source),
            state: Arc::new(RwLock::new(WorkflowState::default())),
            ledger: Arc::new(RwLock::new(BookingLedger::new())),
            in_flight_task: Mutex::new(None),
            submission_delay: config.submission_delay,
            confirmation_ttl: config.confirmation_ttl,
        }
    }

    pub async fn snapshot(&self) -> WorkflowState {
        self.state.read().await.clone()
    }

    pub async fn bookings(&self) -> Vec<Booking> {
        self.ledger.read().await.list().to_vec()
    }

    /// Select a doctor and draw a fresh slot set for them.
    ///
    /// Legal from any stage; always clears the selected slot. The previous
    /// slot set is discarded entirely.
    pub async fn select_doctor(&self, doctor_id: &str) -> Result<WorkflowState, BookingError> {
        let doctor = self
            .directory
            .require(doctor_id)
            .map_err(|_| BookingError::UnknownDoctor(doctor_id.to_string()))?;

        let slots = {
            let mut source = self.source.lock().await;
            self.generator.generate(&doctor.id, source.as_mut())
        };

        let mut state = self.state.write().await;
        let current = std::mem::take(&mut *state);
        *state = current.apply(WorkflowEvent::DoctorSelected {
            doctor_id: doctor.id.clone(),
            slots,
        });
        debug!("Doctor {} selected, slot selection cleared", doctor.id);

        Ok(state.clone())
    }

    /// Select a slot from the current set.
    ///
    /// An unavailable slot is inert: the call succeeds and the selection is
    /// left untouched, mirroring a disabled control rather than an error.
    pub async fn select_slot(&self, slot_id: &str) -> Result<WorkflowState, BookingError> {
        let mut state = self.state.write().await;
        match state.stage() {
            WorkflowStage::Idle => return Err(BookingError::NoDoctorSelected),
            WorkflowStage::Submitting => return Err(BookingError::SubmissionInFlight),
            WorkflowStage::DoctorChosen | WorkflowStage::SlotChosen => {}
        }
        if !state.slots.iter().any(|s| s.id == slot_id) {
            return Err(BookingError::UnknownSlot(slot_id.to_string()));
        }

        let current = std::mem::take(&mut *state);
        *state = current.apply(WorkflowEvent::SlotSelected {
            slot_id: slot_id.to_string(),
        });

        Ok(state.clone())
    }

    /// Edit exactly one patient field, preserving the others.
    pub async fn update_patient_field(
        &self,
        field: PatientField,
        value: String,
    ) -> Result<WorkflowState, BookingError> {
        let mut state = self.state.write().await;
        match state.stage() {
            WorkflowStage::SlotChosen => {}
            WorkflowStage::Submitting => return Err(BookingError::SubmissionInFlight),
            WorkflowStage::Idle | WorkflowStage::DoctorChosen => {
                return Err(BookingError::NoSlotSelected)
            }
        }

        let current = std::mem::take(&mut *state);
        *state = current.apply(WorkflowEvent::PatientFieldEdited { field, value });

        Ok(state.clone())
    }

    /// Start the simulated submission.
    ///
    /// The doctor name, slot label, and patient details are snapshotted here;
    /// the booking composed at completion uses this snapshot even if the form
    /// is edited while the submission is in flight.
    pub async fn submit(&self) -> Result<WorkflowState, BookingError> {
        let snapshot = {
            let mut state = self.state.write().await;
            match state.stage() {
                WorkflowStage::SlotChosen => {}
                WorkflowStage::Submitting => return Err(BookingError::SubmissionInFlight),
                WorkflowStage::Idle => return Err(BookingError::NoDoctorSelected),
                WorkflowStage::DoctorChosen => return Err(BookingError::NoSlotSelected),
            }
            validate_patient(&state.patient)?;

            let doctor_id = state
                .selected_doctor
                .clone()
                .ok_or(BookingError::NoDoctorSelected)?;
            let doctor = self
                .directory
                .require(&doctor_id)
                .map_err(|_| BookingError::UnknownDoctor(doctor_id.clone()))?;
            let slot = state
                .selected_slot_details()
                .ok_or(BookingError::NoSlotSelected)?;

            let ticket = Uuid::new_v4();
            let snapshot = SubmissionSnapshot {
                ticket,
                doctor: doctor.name.clone(),
                slot: slot.time.clone(),
                patient: state.patient.clone(),
            };

            let current = std::mem::take(&mut *state);
            *state = current.apply(WorkflowEvent::SubmissionStarted { ticket });
            snapshot
        };

        info!(
            "Submission {} started for {} at {}",
            snapshot.ticket, snapshot.doctor, snapshot.slot
        );

        let handle = tokio::spawn(run_submission(
            Arc::clone(&self.state),
            Arc::clone(&self.ledger),
            self.submission_delay,
            self.confirmation_ttl,
            snapshot,
        ));
        *self.in_flight_task.lock().await = Some(handle);

        Ok(self.snapshot().await)
    }

    /// Abort an in-flight submission before its delay fires.
    ///
    /// The form returns to the slot-chosen stage with all selections intact;
    /// nothing reaches the ledger.
    pub async fn cancel_submission(&self) -> Result<WorkflowState, BookingError> {
        let mut state = self.state.write().await;
        let ticket = state.in_flight.ok_or(BookingError::NoSubmissionInFlight)?;

        if let Some(handle) = self.in_flight_task.lock().await.take() {
            handle.abort();
        }

        let current = std::mem::take(&mut *state);
        *state = current.apply(WorkflowEvent::SubmissionCancelled { ticket });
        info!("Submission {} cancelled", ticket);

        Ok(state.clone())
    }
}

/// The scheduled tail of a submission: wait out the simulated network delay,
/// record the booking, reset the form, then let the confirmation expire.
async fn run_submission(
    state: Arc<RwLock<WorkflowState>>,
    ledger: Arc<RwLock<BookingLedger>>,
    delay: Duration,
    confirmation_ttl: Duration,
    snapshot: SubmissionSnapshot,
) {
    tokio::time::sleep(delay).await;

    let ticket = snapshot.ticket;
    let completed_at = Utc::now();
    let booking = Booking {
        id: completed_at.timestamp_millis(),
        doctor: snapshot.doctor,
        slot: snapshot.slot,
        patient: snapshot.patient,
        date: completed_at.format(LEDGER_DATE_FORMAT).to_string(),
    };

    {
        let mut guard = state.write().await;
        if guard.in_flight != Some(ticket) {
            debug!("Submission {} no longer in flight, dropping", ticket);
            return;
        }
        let recorded = ledger.write().await.append(booking);
        let current = std::mem::take(&mut *guard);
        *guard = current.apply(WorkflowEvent::SubmissionCompleted {
            ticket,
            confirmation: CONFIRMATION_TEXT.to_string(),
        });
        info!("Submission {} confirmed as booking {}", ticket, recorded.id);
    }

    tokio::time::sleep(confirmation_ttl).await;

    let mut guard = state.write().await;
    let current = std::mem::take(&mut *guard);
    *guard = current.apply(WorkflowEvent::ConfirmationExpired { ticket });
}

fn validate_patient(patient: &PatientInfo) -> Result<(), BookingError> {
    if patient.name.trim().is_empty() {
        return Err(BookingError::ValidationError(
            "patient name is required".to_string(),
        ));
    }
    if patient.phone.trim().is_empty() {
        return Err(BookingError::ValidationError(
            "patient phone is required".to_string(),
        ));
    }

    let email = patient.email.trim();
    if !email.is_empty() && !looks_like_email(email) {
        return Err(BookingError::ValidationError(
            "patient email is malformed".to_string(),
        ));
    }

    Ok(())
}

// Deliberately loose: one @ between non-whitespace runs, nothing more.
fn looks_like_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();

    email_regex.is_match(email) && email.len() <= 254
}
