// ── Severity triage ordering ──

use crate::model::AlertSeverity;

/// Stable-sort records into triage order: critical first, low last.
///
/// Records with equal severity keep their relative input order, so the
/// incident panel and alert list show ties in arrival order.
pub fn triage_sort<T, F>(items: &mut [T], severity_of: F)
where
    F: Fn(&T) -> AlertSeverity,
{
    items.sort_by_key(|item| severity_of(item).rank());
}

/// Convenience wrapper returning a sorted copy.
pub fn triage_order<T, F>(items: &[T], severity_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> AlertSeverity,
{
    let mut sorted = items.to_vec();
    triage_sort(&mut sorted, severity_of);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u32,
        severity: AlertSeverity,
    }

    fn record(id: u32, severity: AlertSeverity) -> Record {
        Record { id, severity }
    }

    #[test]
    fn critical_sorts_first() {
        let sorted = triage_order(
            &[
                record(1, AlertSeverity::Low),
                record(2, AlertSeverity::Critical),
                record(3, AlertSeverity::Low),
            ],
            |r| r.severity,
        );
        let ids: Vec<u32> = sorted.iter().map(|r| r.id).collect();
        // Critical first; the two low entries keep their relative order.
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn full_tier_ordering() {
        let sorted = triage_order(
            &[
                record(1, AlertSeverity::Medium),
                record(2, AlertSeverity::Low),
                record(3, AlertSeverity::High),
                record(4, AlertSeverity::Critical),
            ],
            |r| r.severity,
        );
        let tiers: Vec<AlertSeverity> = sorted.iter().map(|r| r.severity).collect();
        assert_eq!(
            tiers,
            vec![
                AlertSeverity::Critical,
                AlertSeverity::High,
                AlertSeverity::Medium,
                AlertSeverity::Low,
            ]
        );
    }

    #[test]
    fn stability_across_many_ties() {
        let input: Vec<Record> = (0..10).map(|id| record(id, AlertSeverity::Medium)).collect();
        let sorted = triage_order(&input, |r| r.severity);
        assert_eq!(sorted, input);
    }

    #[test]
    fn rank_ordinal_contract() {
        assert_eq!(AlertSeverity::Critical.rank(), 0);
        assert_eq!(AlertSeverity::High.rank(), 1);
        assert_eq!(AlertSeverity::Medium.rank(), 2);
        assert_eq!(AlertSeverity::Low.rank(), 3);
    }
}
