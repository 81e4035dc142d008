use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Doctor not found: {0}")]
    UnknownDoctor(String),

    #[error("Slot not found: {0}")]
    UnknownSlot(String),

    #[error("No doctor selected")]
    NoDoctorSelected,

    #[error("No slot selected")]
    NoSlotSelected,

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("No submission in progress")]
    NoSubmissionInFlight,

    #[error("Unknown patient field: {0}")]
    UnknownField(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
