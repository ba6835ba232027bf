//! Counter-backed identifier issuer.

use crate::ports::{EntityKind, IdIssuer};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Issues identifiers from one atomic counter per entity kind.
///
/// Counters start at zero and increment before formatting, so the first
/// customer is `BG-CUST-001`. Cloned issuers share the same counters.
#[derive(Debug, Clone, Default)]
pub struct CounterIdIssuer {
    counters: Arc<[AtomicU32; 5]>,
}

impl CounterIdIssuer {
    /// Creates an issuer with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the counter for a kind, e.g. when loading existing records.
    ///
    /// The next issued identifier for that kind uses `value + 1`.
    pub fn seed(&self, kind: EntityKind, value: u32) {
        self.counters[Self::slot(kind)].store(value, Ordering::SeqCst);
    }

    fn slot(kind: EntityKind) -> usize {
        match kind {
            EntityKind::Customer => 0,
            EntityKind::Booking => 1,
            EntityKind::Payment => 2,
            EntityKind::Complaint => 3,
            EntityKind::Employee => 4,
        }
    }
}

impl IdIssuer for CounterIdIssuer {
    fn next(&self, kind: EntityKind) -> String {
        let sequence = self.counters[Self::slot(kind)].fetch_add(1, Ordering::SeqCst) + 1;
        kind.format(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn first_customer_id_is_001() {
        let issuer = CounterIdIssuer::new();
        assert_eq!(issuer.next(EntityKind::Customer), "BG-CUST-001");
        assert_eq!(issuer.next(EntityKind::Customer), "BG-CUST-002");
    }

    #[test]
    fn kinds_count_independently() {
        let issuer = CounterIdIssuer::new();
        issuer.next(EntityKind::Customer);
        issuer.next(EntityKind::Customer);
        assert_eq!(issuer.next(EntityKind::Booking), "BG-BK-001");
        assert_eq!(issuer.next(EntityKind::Payment), "BG-PAY-001");
        assert_eq!(issuer.next(EntityKind::Complaint), "BG-CMP-001");
        assert_eq!(issuer.next(EntityKind::Employee), "BG-EMP-001");
    }

    #[test]
    fn seeded_counter_continues_from_seed() {
        let issuer = CounterIdIssuer::new();
        issuer.seed(EntityKind::Booking, 41);
        assert_eq!(issuer.next(EntityKind::Booking), "BG-BK-042");
    }

    #[test]
    fn sequences_widen_past_999() {
        let issuer = CounterIdIssuer::new();
        issuer.seed(EntityKind::Customer, 999);
        assert_eq!(issuer.next(EntityKind::Customer), "BG-CUST-1000");
    }

    #[test]
    fn clones_share_counters() {
        let issuer = CounterIdIssuer::new();
        let clone = issuer.clone();
        issuer.next(EntityKind::Customer);
        assert_eq!(clone.next(EntityKind::Customer), "BG-CUST-002");
    }

    proptest! {
        #[test]
        fn issued_ids_are_unique_and_well_formed(count in 1usize..1500) {
            let issuer = CounterIdIssuer::new();
            let mut seen = HashSet::new();
            for _ in 0..count {
                let id = issuer.next(EntityKind::Complaint);
                prop_assert!(id.starts_with("BG-CMP-"));
                let digits = &id["BG-CMP-".len()..];
                prop_assert!(digits.len() >= 3);
                prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
                prop_assert!(seen.insert(id));
            }
        }
    }
}
