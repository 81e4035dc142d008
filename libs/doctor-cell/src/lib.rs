pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{Doctor, DoctorError, Slot};
pub use services::availability::{AvailabilitySource, SlotGenerator, ThreadRngSource};
pub use services::directory::DoctorDirectory;
