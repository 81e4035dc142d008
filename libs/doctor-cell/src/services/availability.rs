use rand::Rng;
use tracing::debug;

use crate::models::Slot;

/// First bookable hour of the clinic day.
pub const OPENING_HOUR: u32 = 9;

/// Number of consecutive one-hour slots offered per doctor per day.
pub const SLOTS_PER_DAY: u32 = 8;

/// Source of uniform draws in [0, 1) deciding per-slot availability.
///
/// Production uses the thread RNG; tests script the sequence to pin
/// availability deterministically.
pub trait AvailabilitySource: Send {
    fn draw(&mut self) -> f64;
}

pub struct ThreadRngSource;

impl AvailabilitySource for ThreadRngSource {
    fn draw(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Scripted source replaying a fixed sequence of draws, cycling when
/// exhausted. Intended for tests.
pub struct ScriptedSource {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, next: 0 }
    }
}

impl AvailabilitySource for ScriptedSource {
    fn draw(&mut self) -> f64 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}

/// Generates the day's candidate slots for a doctor.
///
/// Each invocation produces a fresh, unrelated set: availability is drawn
/// anew and nothing is reconciled against earlier sets or past bookings.
pub struct SlotGenerator {
    availability_threshold: f64,
}

impl SlotGenerator {
    pub fn new(availability_threshold: f64) -> Self {
        Self {
            availability_threshold,
        }
    }

    /// Produce the 8 one-hour windows from 9:00, each independently marked
    /// available when the source's draw is at or above the threshold.
    pub fn generate(&self, doctor_id: &str, source: &mut dyn AvailabilitySource) -> Vec<Slot> {
        let slots: Vec<Slot> = (0..SLOTS_PER_DAY)
            .map(|offset| {
                let hour = OPENING_HOUR + offset;
                Slot {
                    id: format!("{}-{}", doctor_id, hour),
                    time: format!("{}:00 - {}:00", hour, hour + 1),
                    available: source.draw() >= self.availability_threshold,
                }
            })
            .collect();

        debug!(
            "Generated {} slots for doctor {} ({} available)",
            slots.len(),
            doctor_id,
            slots.iter().filter(|s| s.available).count()
        );

        slots
    }
}
