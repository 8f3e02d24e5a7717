//! Pure slot-list operations backing the availability and booking endpoints.
//!
//! Slots compare by exact instant at millisecond resolution, so every
//! timestamp is normalized with [`truncate_to_millis`] before it is compared
//! or stored.

use time::OffsetDateTime;

/// Drops sub-millisecond precision from a timestamp.
pub fn truncate_to_millis(t: OffsetDateTime) -> OffsetDateTime {
    let nanos = t.nanosecond();
    t.replace_nanosecond(nanos - nanos % 1_000_000).unwrap_or(t)
}

/// True if the list holds a slot equal to `t` at millisecond resolution.
pub fn contains_slot(slots: &[OffsetDateTime], t: OffsetDateTime) -> bool {
    let t = truncate_to_millis(t);
    slots.iter().any(|s| truncate_to_millis(*s) == t)
}

/// Adds a slot, idempotent by value: any existing entries equal to `t` are
/// filtered out first, then the slot is appended.
pub fn insert_slot(slots: &[OffsetDateTime], t: OffsetDateTime) -> Vec<OffsetDateTime> {
    let t = truncate_to_millis(t);
    let mut out = remove_slot(slots, t);
    out.push(t);
    out
}

/// Removes every entry equal to `t`, keeping the rest in order.
pub fn remove_slot(slots: &[OffsetDateTime], t: OffsetDateTime) -> Vec<OffsetDateTime> {
    let t = truncate_to_millis(t);
    slots
        .iter()
        .copied()
        .filter(|s| truncate_to_millis(*s) != t)
        .collect()
}

/// Appends a slot unconditionally. Used when a cancelled appointment returns
/// its date to the pool; a duplicate can appear if the same instant was
/// re-added independently in the meantime.
pub fn restore_slot(slots: &[OffsetDateTime], t: OffsetDateTime) -> Vec<OffsetDateTime> {
    let mut out = slots.to_vec();
    out.push(truncate_to_millis(t));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const T1: OffsetDateTime = datetime!(2025-01-01 10:00 UTC);
    const T2: OffsetDateTime = datetime!(2025-01-01 11:00 UTC);
    const T3: OffsetDateTime = datetime!(2025-01-02 10:00 UTC);

    #[test]
    fn truncation_keeps_millis_and_drops_the_rest() {
        let fine = T1.replace_nanosecond(123_456_789).unwrap();
        let coarse = T1.replace_nanosecond(123_000_000).unwrap();
        assert_eq!(truncate_to_millis(fine), coarse);
        assert_eq!(truncate_to_millis(coarse), coarse);
    }

    #[test]
    fn instants_differing_below_a_millisecond_compare_equal() {
        let stored = vec![T1.replace_nanosecond(5_000_123).unwrap()];
        let probe = T1.replace_nanosecond(5_999_999).unwrap();
        assert!(contains_slot(&stored, probe));
    }

    #[test]
    fn insert_then_remove_round_trips_to_absence() {
        let slots = insert_slot(&[], T1);
        assert!(contains_slot(&slots, T1));
        let slots = remove_slot(&slots, T1);
        assert!(!contains_slot(&slots, T1));
        assert!(slots.is_empty());
    }

    #[test]
    fn insert_is_idempotent_by_value() {
        let slots = insert_slot(&[], T1);
        let slots = insert_slot(&slots, T2);
        let slots = insert_slot(&slots, T1);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots, vec![T2, T1]);
    }

    #[test]
    fn remove_drops_all_matching_entries() {
        // Duplicates can exist after restore_slot; remove clears them all
        let slots = vec![T1, T2, T1];
        let slots = remove_slot(&slots, T1);
        assert_eq!(slots, vec![T2]);
    }

    #[test]
    fn remove_of_absent_slot_is_a_no_op() {
        let slots = vec![T1, T2];
        assert_eq!(remove_slot(&slots, T3), vec![T1, T2]);
    }

    #[test]
    fn restore_appends_even_when_already_present() {
        let slots = vec![T1];
        let slots = restore_slot(&slots, T1);
        assert_eq!(slots, vec![T1, T1]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let slots = insert_slot(&[], T3);
        let slots = insert_slot(&slots, T1);
        let slots = insert_slot(&slots, T2);
        assert_eq!(slots, vec![T3, T1, T2]);
    }
}
