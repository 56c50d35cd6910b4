use super::MasterCollection;
use std::collections::BTreeSet;

/// Settlement tracking for one concurrent load of several collections
///
/// Each collection settles independently. Once the last one settles the
/// batch yields a single report, however many of them failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadBatch {
    pending: BTreeSet<MasterCollection>,
    failed: Vec<MasterCollection>,
    reported: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub failed: Vec<MasterCollection>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl LoadBatch {
    pub fn start(collections: &[MasterCollection]) -> Self {
        Self {
            pending: collections.iter().copied().collect(),
            failed: Vec::new(),
            reported: false,
        }
    }

    /// Record the outcome of one collection; returns the report when the
    /// batch completes. Repeated or unknown settlements are ignored.
    pub fn settle(&mut self, collection: MasterCollection, ok: bool) -> Option<BatchReport> {
        if !self.pending.remove(&collection) {
            return None;
        }
        if !ok {
            self.failed.push(collection);
        }
        if self.pending.is_empty() && !self.reported {
            self.reported = true;
            return Some(BatchReport {
                failed: self.failed.clone(),
            });
        }
        None
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MasterCollection::*;

    #[test]
    fn test_single_report_for_multiple_failures() {
        let mut batch = LoadBatch::start(&[FuelTypes, Suppliers, Townships, Sites]);
        assert!(batch.is_loading());

        assert_eq!(batch.settle(Suppliers, false), None);
        assert_eq!(batch.settle(FuelTypes, true), None);
        assert_eq!(batch.settle(Sites, false), None);

        let report = batch.settle(Townships, true).unwrap();
        assert_eq!(report.failed, vec![Suppliers, Sites]);
        assert!(report.has_failures());
        assert!(!batch.is_loading());
    }

    #[test]
    fn test_all_success_report_has_no_failures() {
        let mut batch = LoadBatch::start(&[FuelTypes]);
        let report = batch.settle(FuelTypes, true).unwrap();
        assert!(!report.has_failures());
    }

    #[test]
    fn test_repeated_settle_ignored() {
        let mut batch = LoadBatch::start(&[FuelTypes, Sites]);
        assert_eq!(batch.settle(FuelTypes, false), None);
        assert_eq!(batch.settle(FuelTypes, false), None);

        let report = batch.settle(Sites, true).unwrap();
        assert_eq!(report.failed, vec![FuelTypes]);
        assert_eq!(batch.settle(Sites, true), None);
    }
}
