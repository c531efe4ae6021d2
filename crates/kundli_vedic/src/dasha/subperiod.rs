//! Proportional sub-period generation.
//!
//! child duration = (child_full_years / 120) * parent_duration, accumulated
//! with a cursor so adjacent children share their boundary exactly.

use super::data::{TOTAL_YEARS, sequence_from};
use super::types::{BalanceSubdivision, DashaLevel, DashaPeriod};

/// Snap the last child's end_jd to parent's end_jd to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Nine proportional children laid over `[span_start_jd, parent.end_jd)`,
/// starting with the parent's own lord.
pub fn proportional_children(
    parent: &DashaPeriod,
    span_start_jd: f64,
    child_level: DashaLevel,
) -> Vec<DashaPeriod> {
    let parent_duration = parent.end_jd - span_start_jd;
    let sequence = sequence_from(parent.lord);
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = span_start_jd;

    for (order_0, &(lord, years)) in sequence.iter().enumerate() {
        let end = cursor + (years / TOTAL_YEARS) * parent_duration;
        children.push(DashaPeriod {
            lord,
            level: child_level,
            start_jd: cursor,
            end_jd: end,
            order: (order_0 as u16) + 1,
            nominal_start_jd: cursor,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// Drop children that ended at or before `from_jd` and clip the one running
/// across it. Clipped children keep their unclipped start as `nominal_start_jd`.
pub fn clip_children_before(children: Vec<DashaPeriod>, from_jd: f64) -> Vec<DashaPeriod> {
    children
        .into_iter()
        .filter(|c| c.end_jd > from_jd)
        .map(|mut c| {
            if c.start_jd < from_jd {
                c.start_jd = from_jd;
            }
            c
        })
        .collect()
}

/// Children of `parent` under the given subdivision rule.
pub fn subdivide(
    parent: &DashaPeriod,
    child_level: DashaLevel,
    subdivision: BalanceSubdivision,
) -> Vec<DashaPeriod> {
    match subdivision {
        BalanceSubdivision::Proportional => {
            proportional_children(parent, parent.start_jd, child_level)
        }
        BalanceSubdivision::ElapsedClipped if parent.is_partial() => {
            let full = proportional_children(parent, parent.nominal_start_jd, child_level);
            clip_children_before(full, parent.start_jd)
        }
        BalanceSubdivision::ElapsedClipped => {
            proportional_children(parent, parent.start_jd, child_level)
        }
    }
}
