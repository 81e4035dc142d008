use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::error::BookingError;
use crate::models::{PatientField, WorkflowState};
use crate::services::workflow::BookingWorkflowService;

#[derive(Debug, Deserialize)]
pub struct SelectDoctorRequest {
    pub doctor_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectSlotRequest {
    pub slot_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PatientFieldRequest {
    pub field: String,
    pub value: String,
}

#[axum::debug_handler]
pub async fn get_workflow(
    State(service): State<Arc<BookingWorkflowService>>,
) -> Result<Json<Value>, AppError> {
    let state = service.snapshot().await;
    Ok(Json(workflow_body(&state)))
}

#[axum::debug_handler]
pub async fn select_doctor(
    State(service): State<Arc<BookingWorkflowService>>,
    Json(request): Json<SelectDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let state = service
        .select_doctor(&request.doctor_id)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(workflow_body(&state)))
}

#[axum::debug_handler]
pub async fn select_slot(
    State(service): State<Arc<BookingWorkflowService>>,
    Json(request): Json<SelectSlotRequest>,
) -> Result<Json<Value>, AppError> {
    let state = service
        .select_slot(&request.slot_id)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(workflow_body(&state)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(service): State<Arc<BookingWorkflowService>>,
    Json(request): Json<PatientFieldRequest>,
) -> Result<Json<Value>, AppError> {
    let field: PatientField = request.field.parse().map_err(map_booking_error)?;
    let state = service
        .update_patient_field(field, request.value)
        .await
        .map_err(map_booking_error)?;

    Ok(Json(workflow_body(&state)))
}

#[axum::debug_handler]
pub async fn submit_booking(
    State(service): State<Arc<BookingWorkflowService>>,
) -> Result<Json<Value>, AppError> {
    let state = service.submit().await.map_err(map_booking_error)?;

    Ok(Json(workflow_body(&state)))
}

#[axum::debug_handler]
pub async fn cancel_submission(
    State(service): State<Arc<BookingWorkflowService>>,
) -> Result<Json<Value>, AppError> {
    let state = service
        .cancel_submission()
        .await
        .map_err(map_booking_error)?;

    Ok(Json(workflow_body(&state)))
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(service): State<Arc<BookingWorkflowService>>,
) -> Result<Json<Value>, AppError> {
    let bookings = service.bookings().await;

    Ok(Json(json!({
        "bookings": bookings,
        "total": bookings.len()
    })))
}

fn workflow_body(state: &WorkflowState) -> Value {
    json!({
        "stage": state.stage(),
        "workflow": state
    })
}

fn map_booking_error(error: BookingError) -> AppError {
    match error {
        BookingError::UnknownDoctor(_) | BookingError::UnknownSlot(_) => {
            AppError::NotFound(error.to_string())
        }
        BookingError::SubmissionInFlight | BookingError::NoSubmissionInFlight => {
            AppError::Conflict(error.to_string())
        }
        BookingError::ValidationError(_) => AppError::ValidationError(error.to_string()),
        BookingError::NoDoctorSelected
        | BookingError::NoSlotSelected
        | BookingError::UnknownField(_) => AppError::BadRequest(error.to_string()),
    }
}
