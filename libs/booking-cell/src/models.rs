use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use doctor_cell::models::Slot;

use crate::error::BookingError;

// ==============================================================================
// CORE BOOKING MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl PatientInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientField {
    Name,
    Phone,
    Email,
}

impl FromStr for PatientField {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(PatientField::Name),
            "phone" => Ok(PatientField::Phone),
            "email" => Ok(PatientField::Email),
            other => Err(BookingError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for PatientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientField::Name => write!(f, "name"),
            PatientField::Phone => write!(f, "phone"),
            PatientField::Email => write!(f, "email"),
        }
    }
}

/// A confirmed booking as recorded in the ledger. Immutable once appended.
///
/// `doctor` and `slot` are denormalized display strings captured when the
/// booking was submitted; `date` is the calendar date the booking was
/// recorded, in the fixed display locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub doctor: String,
    pub slot: String,
    pub patient: PatientInfo,
    pub date: String,
}

/// Transient success notification shown after a submission completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub ticket: Uuid,
    pub text: String,
}

// ==============================================================================
// WORKFLOW STATE MACHINE
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    Idle,
    DoctorChosen,
    SlotChosen,
    Submitting,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowStage::Idle => write!(f, "idle"),
            WorkflowStage::DoctorChosen => write!(f, "doctor_chosen"),
            WorkflowStage::SlotChosen => write!(f, "slot_chosen"),
            WorkflowStage::Submitting => write!(f, "submitting"),
        }
    }
}

/// The whole transient form state of one booking session.
///
/// The stage is derived from which fields are populated rather than stored,
/// so the state can never disagree with itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkflowState {
    pub selected_doctor: Option<String>,
    pub slots: Vec<Slot>,
    pub selected_slot: Option<String>,
    pub patient: PatientInfo,
    pub in_flight: Option<Uuid>,
    pub confirmation: Option<Confirmation>,
}

#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    DoctorSelected {
        doctor_id: String,
        slots: Vec<Slot>,
    },
    SlotSelected {
        slot_id: String,
    },
    PatientFieldEdited {
        field: PatientField,
        value: String,
    },
    SubmissionStarted {
        ticket: Uuid,
    },
    SubmissionCompleted {
        ticket: Uuid,
        confirmation: String,
    },
    SubmissionCancelled {
        ticket: Uuid,
    },
    ConfirmationExpired {
        ticket: Uuid,
    },
}

impl WorkflowState {
    pub fn stage(&self) -> WorkflowStage {
        if self.in_flight.is_some() {
            WorkflowStage::Submitting
        } else if self.selected_slot.is_some() {
            WorkflowStage::SlotChosen
        } else if self.selected_doctor.is_some() {
            WorkflowStage::DoctorChosen
        } else {
            WorkflowStage::Idle
        }
    }

    pub fn selected_slot_details(&self) -> Option<&Slot> {
        let selected = self.selected_slot.as_deref()?;
        self.slots.iter().find(|s| s.id == selected)
    }

    /// Pure transition function. Events that are not legal in the current
    /// stage, or that carry a stale ticket, return the state unchanged.
    #[must_use]
    pub fn apply(mut self, event: WorkflowEvent) -> WorkflowState {
        match event {
            WorkflowEvent::DoctorSelected { doctor_id, slots } => {
                // Re-selecting a doctor always discards the previous slot
                // set and any selected slot.
                self.selected_doctor = Some(doctor_id);
                self.slots = slots;
                self.selected_slot = None;
                self
            }
            WorkflowEvent::SlotSelected { slot_id } => {
                let selectable = matches!(
                    self.stage(),
                    WorkflowStage::DoctorChosen | WorkflowStage::SlotChosen
                ) && self
                    .slots
                    .iter()
                    .any(|s| s.id == slot_id && s.available);
                if selectable {
                    self.selected_slot = Some(slot_id);
                }
                self
            }
            WorkflowEvent::PatientFieldEdited { field, value } => {
                if self.stage() == WorkflowStage::SlotChosen {
                    match field {
                        PatientField::Name => self.patient.name = value,
                        PatientField::Phone => self.patient.phone = value,
                        PatientField::Email => self.patient.email = value,
                    }
                }
                self
            }
            WorkflowEvent::SubmissionStarted { ticket } => {
                if self.stage() == WorkflowStage::SlotChosen {
                    self.in_flight = Some(ticket);
                }
                self
            }
            WorkflowEvent::SubmissionCompleted {
                ticket,
                confirmation,
            } => {
                if self.in_flight == Some(ticket) {
                    // Completion clears the whole form and leaves only the
                    // transient confirmation behind.
                    WorkflowState {
                        confirmation: Some(Confirmation {
                            ticket,
                            text: confirmation,
                        }),
                        ..WorkflowState::default()
                    }
                } else {
                    self
                }
            }
            WorkflowEvent::SubmissionCancelled { ticket } => {
                if self.in_flight == Some(ticket) {
                    self.in_flight = None;
                }
                self
            }
            WorkflowEvent::ConfirmationExpired { ticket } => {
                if self
                    .confirmation
                    .as_ref()
                    .is_some_and(|c| c.ticket == ticket)
                {
                    self.confirmation = None;
                }
                self
            }
        }
    }
}
