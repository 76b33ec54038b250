use crate::clock::triple::TimeTriple;

/// Largest hour value a duration add may produce.
pub const MAX_DURATION_HOURS: u64 = 99;

/// Add `minutes_to_add` to `start` as an elapsed-time clock.
///
/// The result never wraps at 24 hours. When the sum would need more than
/// 99 hours, `None` is returned and the caller keeps its previous end time.
pub fn add_duration(start: TimeTriple, minutes_to_add: u32) -> Option<TimeTriple> {
    let total = start.total_seconds() + u64::from(minutes_to_add) * 60;

    let hours = total / 3600;
    if hours > MAX_DURATION_HOURS {
        return None;
    }

    Some(TimeTriple::new(
        hours as u32,
        ((total % 3600) / 60) as u32,
        (total % 60) as u32,
    ))
}
