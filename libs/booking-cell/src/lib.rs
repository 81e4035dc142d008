pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::BookingError;
pub use models::{
    Booking, Confirmation, PatientField, PatientInfo, WorkflowEvent, WorkflowStage, WorkflowState,
};
pub use router::booking_routes;
pub use services::ledger::BookingLedger;
pub use services::workflow::{BookingWorkflowService, CONFIRMATION_TEXT};
