use uuid::Uuid;

use booking_cell::{PatientField, WorkflowEvent, WorkflowStage, WorkflowState};
use doctor_cell::Slot;

fn slot(id: &str, time: &str, available: bool) -> Slot {
    Slot {
        id: id.to_string(),
        time: time.to_string(),
        available,
    }
}

fn doctor_chosen() -> WorkflowState {
    WorkflowState::default().apply(WorkflowEvent::DoctorSelected {
        doctor_id: "2".to_string(),
        slots: vec![
            slot("2-9", "9:00 - 10:00", true),
            slot("2-10", "10:00 - 11:00", false),
        ],
    })
}

fn slot_chosen() -> WorkflowState {
    doctor_chosen().apply(WorkflowEvent::SlotSelected {
        slot_id: "2-9".to_string(),
    })
}

#[test]
fn stage_is_derived_from_populated_fields() {
    let state = WorkflowState::default();
    assert_eq!(state.stage(), WorkflowStage::Idle);

    let state = doctor_chosen();
    assert_eq!(state.stage(), WorkflowStage::DoctorChosen);

    let state = slot_chosen();
    assert_eq!(state.stage(), WorkflowStage::SlotChosen);

    let state = state.apply(WorkflowEvent::SubmissionStarted {
        ticket: Uuid::new_v4(),
    });
    assert_eq!(state.stage(), WorkflowStage::Submitting);
}

#[test]
fn selecting_a_doctor_replaces_slots_and_clears_the_selection() {
    let state = slot_chosen().apply(WorkflowEvent::DoctorSelected {
        doctor_id: "1".to_string(),
        slots: vec![slot("1-9", "9:00 - 10:00", true)],
    });

    assert_eq!(state.selected_doctor.as_deref(), Some("1"));
    assert_eq!(state.selected_slot, None);
    assert_eq!(state.slots.len(), 1);
    assert_eq!(state.slots[0].id, "1-9");
}

#[test]
fn unavailable_slots_are_never_selected() {
    let state = doctor_chosen().apply(WorkflowEvent::SlotSelected {
        slot_id: "2-10".to_string(),
    });

    assert_eq!(state.selected_slot, None);
    assert_eq!(state.stage(), WorkflowStage::DoctorChosen);
}

#[test]
fn slot_selection_needs_a_doctor() {
    let state = WorkflowState::default().apply(WorkflowEvent::SlotSelected {
        slot_id: "2-9".to_string(),
    });

    assert_eq!(state.selected_slot, None);
}

#[test]
fn field_edits_touch_exactly_one_field() {
    let state = slot_chosen()
        .apply(WorkflowEvent::PatientFieldEdited {
            field: PatientField::Name,
            value: "X".to_string(),
        })
        .apply(WorkflowEvent::PatientFieldEdited {
            field: PatientField::Phone,
            value: "0500000000".to_string(),
        });

    assert_eq!(state.patient.name, "X");
    assert_eq!(state.patient.phone, "0500000000");
    assert_eq!(state.patient.email, "");
}

#[test]
fn field_edits_are_ignored_before_a_slot_is_chosen() {
    let state = doctor_chosen().apply(WorkflowEvent::PatientFieldEdited {
        field: PatientField::Name,
        value: "X".to_string(),
    });

    assert!(state.patient.is_empty());
}

#[test]
fn completion_resets_the_form_and_leaves_the_confirmation() {
    let ticket = Uuid::new_v4();
    let state = slot_chosen()
        .apply(WorkflowEvent::SubmissionStarted { ticket })
        .apply(WorkflowEvent::SubmissionCompleted {
            ticket,
            confirmation: "done".to_string(),
        });

    assert_eq!(state.stage(), WorkflowStage::Idle);
    assert_eq!(state.selected_doctor, None);
    assert_eq!(state.selected_slot, None);
    assert!(state.slots.is_empty());
    assert!(state.patient.is_empty());
    let confirmation = state.confirmation.expect("confirmation should be set");
    assert_eq!(confirmation.ticket, ticket);
    assert_eq!(confirmation.text, "done");
}

#[test]
fn completion_with_a_stale_ticket_is_ignored() {
    let ticket = Uuid::new_v4();
    let state = slot_chosen().apply(WorkflowEvent::SubmissionStarted { ticket });

    let state = state.apply(WorkflowEvent::SubmissionCompleted {
        ticket: Uuid::new_v4(),
        confirmation: "done".to_string(),
    });

    assert_eq!(state.stage(), WorkflowStage::Submitting);
    assert_eq!(state.confirmation, None);
}

#[test]
fn cancellation_unlocks_the_form_and_keeps_selections() {
    let ticket = Uuid::new_v4();
    let state = slot_chosen()
        .apply(WorkflowEvent::SubmissionStarted { ticket })
        .apply(WorkflowEvent::SubmissionCancelled { ticket });

    assert_eq!(state.stage(), WorkflowStage::SlotChosen);
    assert_eq!(state.selected_slot.as_deref(), Some("2-9"));
}

#[test]
fn confirmation_expiry_only_clears_its_own_ticket() {
    let ticket = Uuid::new_v4();
    let state = slot_chosen()
        .apply(WorkflowEvent::SubmissionStarted { ticket })
        .apply(WorkflowEvent::SubmissionCompleted {
            ticket,
            confirmation: "done".to_string(),
        });

    let unchanged = state.clone().apply(WorkflowEvent::ConfirmationExpired {
        ticket: Uuid::new_v4(),
    });
    assert!(unchanged.confirmation.is_some());

    let cleared = state.apply(WorkflowEvent::ConfirmationExpired { ticket });
    assert_eq!(cleared.confirmation, None);
}

#[test]
fn submission_cannot_start_without_a_slot() {
    let state = doctor_chosen().apply(WorkflowEvent::SubmissionStarted {
        ticket: Uuid::new_v4(),
    });

    assert_eq!(state.stage(), WorkflowStage::DoctorChosen);
    assert_eq!(state.in_flight, None);
}
