use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use booking_cell::BookingWorkflowService;
use doctor_cell::router::doctor_routes;
use doctor_cell::DoctorDirectory;

pub fn create_router(
    directory: Arc<DoctorDirectory>,
    workflow: Arc<BookingWorkflowService>,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Hajz Clinic booking API is running!" }))
        .nest("/doctors", doctor_routes(directory))
        .nest("/booking", booking_routes(workflow))
}
