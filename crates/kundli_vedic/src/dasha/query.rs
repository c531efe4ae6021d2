//! Active-period lookup over a contiguous, sorted period list.

use super::types::DashaPeriod;

/// Index of the period containing `jd` (`start <= jd < end`), by binary search.
///
/// `periods` must be sorted and contiguous, which every generator here guarantees.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    if !jd.is_finite() {
        return None;
    }
    let after = periods.partition_point(|p| p.start_jd <= jd);
    let idx = after.checked_sub(1)?;
    periods[idx].contains(jd).then_some(idx)
}
