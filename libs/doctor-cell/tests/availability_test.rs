use doctor_cell::services::availability::{ScriptedSource, SlotGenerator, SLOTS_PER_DAY};

fn generate_with(draws: Vec<f64>) -> Vec<doctor_cell::Slot> {
    let generator = SlotGenerator::new(0.3);
    let mut source = ScriptedSource::new(draws);
    generator.generate("2", &mut source)
}

#[test]
fn a_day_has_eight_consecutive_one_hour_slots_from_nine() {
    let slots = generate_with(vec![0.9]);

    assert_eq!(slots.len(), SLOTS_PER_DAY as usize);

    let expected_labels: Vec<String> = (9..17).map(|h| format!("{}:00 - {}:00", h, h + 1)).collect();
    let labels: Vec<&str> = slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(labels, expected_labels);
    assert_eq!(labels[0], "9:00 - 10:00");
    assert_eq!(labels[7], "16:00 - 17:00");

    let ids: Vec<String> = (9..17).map(|h| format!("2-{}", h)).collect();
    let actual_ids: Vec<&str> = slots.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(actual_ids, ids);
}

#[test]
fn availability_follows_the_threshold_boundary() {
    // A draw equal to the threshold counts as available; just below does not.
    let slots = generate_with(vec![0.3, 0.299, 0.0, 0.999]);

    assert!(slots[0].available);
    assert!(!slots[1].available);
    assert!(!slots[2].available);
    assert!(slots[3].available);
}

#[test]
fn every_slot_draws_independently() {
    let slots = generate_with(vec![0.9, 0.0]);

    let availabilities: Vec<bool> = slots.iter().map(|s| s.available).collect();
    assert_eq!(
        availabilities,
        vec![true, false, true, false, true, false, true, false]
    );
}

#[test]
fn regeneration_discards_the_previous_draw_sequence() {
    let generator = SlotGenerator::new(0.3);
    let mut source = ScriptedSource::new(vec![0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.0]);

    let first = generator.generate("1", &mut source);
    let second = generator.generate("1", &mut source);

    assert!(first.iter().all(|s| s.available));
    // The second set continues the draw stream rather than replaying it.
    assert!(!second[0].available);
}

#[test]
fn threshold_zero_makes_every_slot_available() {
    let generator = SlotGenerator::new(0.0);
    let mut source = ScriptedSource::new(vec![0.0, 0.5]);

    let slots = generator.generate("3", &mut source);
    assert!(slots.iter().all(|s| s.available));
}
