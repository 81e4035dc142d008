use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers;
use crate::services::workflow::BookingWorkflowService;

pub fn booking_routes(service: Arc<BookingWorkflowService>) -> Router {
    Router::new()
        .route("/", get(handlers::get_workflow))
        .route("/doctor", post(handlers::select_doctor))
        .route("/slot", post(handlers::select_slot))
        .route("/patient", patch(handlers::update_patient))
        .route("/submit", post(handlers::submit_booking))
        .route("/submission", delete(handlers::cancel_submission))
        .route("/bookings", get(handlers::list_bookings))
        .with_state(service)
}
