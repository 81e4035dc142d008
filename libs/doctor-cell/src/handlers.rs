use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::services::directory::DoctorDirectory;

#[axum::debug_handler]
pub async fn list_doctors(
    State(directory): State<Arc<DoctorDirectory>>,
) -> Result<Json<Value>, AppError> {
    let doctors = directory.list();

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(directory): State<Arc<DoctorDirectory>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = directory
        .require(&doctor_id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(json!({
        "doctor": doctor,
        "label": doctor.display_label()
    })))
}
