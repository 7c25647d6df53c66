//! Partner directory
//!
//! Holds the full partner list and derives the subset available on a given
//! weekday. Availability is a list of indices into the owned partner list,
//! so the filtered view is an order-preserving subsequence by construction.

use smallvec::SmallVec;
use thiserror::Error;

use crate::{catalog::Pharmacy, weekday::Day};

/// Errors related to partner selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// A selection index outside the current available-partner bounds.
    #[error("selection index {index} is out of range; {available} partners are available")]
    OutOfRange {
        /// The rejected index
        index: usize,

        /// Number of partners currently available
        available: usize,
    },
}

/// Partner directory
#[derive(Debug, Default)]
pub struct PartnerDirectory {
    partners: Vec<Pharmacy>,
    available: SmallVec<[usize; 8]>,
    active: Option<usize>,
}

impl PartnerDirectory {
    /// Create a directory over the given partner list.
    ///
    /// No partner is available until the first [`filter_by_day`] call.
    ///
    /// [`filter_by_day`]: PartnerDirectory::filter_by_day
    #[must_use]
    pub fn new(partners: Vec<Pharmacy>) -> Self {
        PartnerDirectory {
            partners,
            available: SmallVec::new(),
            active: None,
        }
    }

    /// The full partner list, in directory order.
    #[must_use]
    pub fn partners(&self) -> &[Pharmacy] {
        &self.partners
    }

    /// Recompute the available subset for the given day and return it.
    ///
    /// The result is exactly the partners whose open days contain `day`, in
    /// original directory order. Calling this twice with the same day yields
    /// the same subset.
    pub fn filter_by_day(&mut self, day: Day) -> Vec<&Pharmacy> {
        self.available = self
            .partners
            .iter()
            .enumerate()
            .filter(|(_, partner)| partner.is_open_on(day))
            .map(|(idx, _)| idx)
            .collect();

        self.available_partners().collect()
    }

    /// Iterate the partners available after the last filter, in order.
    pub fn available_partners(&self) -> impl Iterator<Item = &Pharmacy> {
        self.available
            .iter()
            .filter_map(|&idx| self.partners.get(idx))
    }

    /// Number of partners available after the last filter.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Select the active partner by its index in the available subset.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::OutOfRange`] if `index` is not within the
    /// current available subset; the previous selection is left untouched.
    pub fn select_active(&mut self, index: usize) -> Result<&Pharmacy, DirectoryError> {
        let available = self.available.len();

        let partner_idx = self
            .available
            .get(index)
            .copied()
            .ok_or(DirectoryError::OutOfRange { index, available })?;

        self.active = Some(partner_idx);

        self.partners
            .get(partner_idx)
            .ok_or(DirectoryError::OutOfRange { index, available })
    }

    /// The active partner, re-validated against current availability.
    ///
    /// A selection survives only while its partner is in the available
    /// subset: filtering to a day the partner is closed makes this `None`,
    /// and filtering back to a day it is open resolves it again.
    #[must_use]
    pub fn active_partner(&self) -> Option<&Pharmacy> {
        let partner_idx = self.active?;

        if self.available.contains(&partner_idx) {
            self.partners.get(partner_idx)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::weekday::DaySet;

    use super::*;

    fn pharmacy(name: &str, open_days: DaySet) -> Pharmacy {
        Pharmacy {
            name: name.to_string(),
            description: String::new(),
            open_days,
            catalog: smallvec![],
        }
    }

    fn names(directory: &PartnerDirectory) -> Vec<String> {
        directory
            .available_partners()
            .map(|partner| partner.name.clone())
            .collect()
    }

    fn test_directory() -> PartnerDirectory {
        PartnerDirectory::new(vec![
            pharmacy("Central", DaySet::WEEKDAYS),
            pharmacy("Weekend", DaySet::WEEKEND),
            pharmacy("Express", DaySet::FULL_WEEK),
        ])
    }

    #[test]
    fn filter_preserves_directory_order() {
        let mut directory = test_directory();

        directory.filter_by_day(Day::Monday);

        assert_eq!(names(&directory), vec!["Central", "Express"]);
    }

    #[test]
    fn filter_is_idempotent_for_the_same_day() {
        let mut directory = test_directory();

        directory.filter_by_day(Day::Saturday);
        let first = names(&directory);

        directory.filter_by_day(Day::Saturday);

        assert_eq!(names(&directory), first);
    }

    #[test]
    fn filter_excludes_weekend_only_partner_on_monday() {
        let mut directory = test_directory();

        directory.filter_by_day(Day::Monday);
        assert!(!names(&directory).contains(&"Weekend".to_string()));

        directory.filter_by_day(Day::Saturday);
        assert!(names(&directory).contains(&"Weekend".to_string()));
    }

    #[test]
    fn nothing_is_available_before_the_first_filter() {
        let directory = test_directory();

        assert_eq!(directory.available_count(), 0);
        assert!(directory.active_partner().is_none());
    }

    #[test]
    fn select_active_within_range_returns_the_partner() -> TestResult {
        let mut directory = test_directory();

        directory.filter_by_day(Day::Monday);

        let selected = directory.select_active(1)?;

        assert_eq!(selected.name, "Express");
        assert_eq!(
            directory.active_partner().map(|p| p.name.clone()),
            Some("Express".to_string())
        );

        Ok(())
    }

    #[test]
    fn select_active_out_of_range_errors_and_keeps_state() -> TestResult {
        let mut directory = test_directory();

        directory.filter_by_day(Day::Monday);
        directory.select_active(0)?;

        let result = directory.select_active(2);

        assert_eq!(
            result,
            Err(DirectoryError::OutOfRange {
                index: 2,
                available: 2,
            })
        );
        assert_eq!(
            directory.active_partner().map(|p| p.name.clone()),
            Some("Central".to_string())
        );

        Ok(())
    }

    #[test]
    fn select_active_on_empty_subset_errors() {
        let mut directory = test_directory();

        let result = directory.select_active(0);

        assert_eq!(
            result,
            Err(DirectoryError::OutOfRange {
                index: 0,
                available: 0,
            })
        );
    }

    #[test]
    fn active_partner_goes_stale_when_filtered_out() -> TestResult {
        let mut directory = test_directory();

        directory.filter_by_day(Day::Monday);
        directory.select_active(0)?;

        // Central is closed on Saturday, so the selection must not surface.
        directory.filter_by_day(Day::Saturday);
        assert!(directory.active_partner().is_none());

        // Filtering back to a day it is open resolves the selection again.
        directory.filter_by_day(Day::Monday);
        assert_eq!(
            directory.active_partner().map(|p| p.name.clone()),
            Some("Central".to_string())
        );

        Ok(())
    }
}
