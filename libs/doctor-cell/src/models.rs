use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    /// Label shown in the doctor picker, e.g. "د. سارة خالد - جلدية".
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.specialty)
    }
}

/// One candidate appointment window for the currently selected doctor.
///
/// Slots are ephemeral: the whole set is regenerated whenever the doctor
/// selection changes, and the previous set is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub time: String,
    pub available: bool,
}

#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(String),
}
