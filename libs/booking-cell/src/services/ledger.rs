use tracing::debug;

use crate::models::Booking;

/// Append-only record of confirmed bookings for the current session.
///
/// Insertion order is display order. Entries are never updated or removed;
/// everything is lost when the process exits.
#[derive(Debug, Default)]
pub struct BookingLedger {
    entries: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a booking and return it as recorded.
    ///
    /// Ids are timestamp-derived, so two completions inside the same
    /// millisecond would collide; a non-increasing id is bumped past the
    /// previous entry's to keep ids unique within the session.
    pub fn append(&mut self, mut booking: Booking) -> Booking {
        if let Some(last) = self.entries.last() {
            if booking.id <= last.id {
                booking.id = last.id + 1;
            }
        }
        self.entries.push(booking.clone());
        debug!(
            "Booking {} appended, ledger holds {}",
            booking.id,
            self.entries.len()
        );
        booking
    }

    /// Full ordered listing, most recent last.
    pub fn list(&self) -> &[Booking] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
