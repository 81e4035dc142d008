use tracing::debug;

use crate::models::{Doctor, DoctorError};

/// Read-only directory of the clinic's doctors.
///
/// The set is fixed at construction and never mutated; there is no external
/// data source behind it.
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// The clinic's staff roster.
    pub fn seeded() -> Self {
        let doctors = vec![
            Doctor {
                id: "1".to_string(),
                name: "د. أحمد محمد".to_string(),
                specialty: "أسنان".to_string(),
            },
            Doctor {
                id: "2".to_string(),
                name: "د. سارة خالد".to_string(),
                specialty: "جلدية".to_string(),
            },
            Doctor {
                id: "3".to_string(),
                name: "د. علي حسن".to_string(),
                specialty: "عظام".to_string(),
            },
            Doctor {
                id: "4".to_string(),
                name: "د. لمى عبدالله".to_string(),
                specialty: "أطفال".to_string(),
            },
        ];
        debug!("Seeded doctor directory with {} doctors", doctors.len());
        Self::new(doctors)
    }

    pub fn list(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn get(&self, doctor_id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == doctor_id)
    }

    pub fn require(&self, doctor_id: &str) -> Result<&Doctor, DoctorError> {
        self.get(doctor_id)
            .ok_or_else(|| DoctorError::NotFound(doctor_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}
