//! Fixed option lists for the job create/edit forms.

use crate::domain::job::JobStatus;

/// Capabilities offered in the job form dropdown, in display order.
pub const CAPABILITIES: &[&str] = &[
    "Engineering",
    "Platforms",
    "Data",
    "Artificial Intelligence",
    "Cyber Security",
    "Workday",
    "Experience Design",
];

/// Bands offered in the job form dropdown, in display order.
pub const BANDS: &[&str] = &[
    "Trainee",
    "Associate",
    "Senior Associate",
    "Consultant",
    "Manager",
    "Principal",
    "Leadership Community",
];

/// Status choices offered in the job form dropdown.
pub const STATUSES: &[(JobStatus, &str)] = &[(JobStatus::Open, "Open"), (JobStatus::Closed, "Closed")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_lists_are_non_empty_and_distinct() {
        assert_eq!(CAPABILITIES.len(), 7);
        assert_eq!(BANDS.len(), 7);
        for list in [CAPABILITIES, BANDS] {
            let mut sorted: Vec<_> = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }

    #[test]
    fn statuses_cover_both_lifecycle_states() {
        let values: Vec<_> = STATUSES.iter().map(|(status, _)| *status).collect();
        assert_eq!(values, vec![JobStatus::Open, JobStatus::Closed]);
    }
}
