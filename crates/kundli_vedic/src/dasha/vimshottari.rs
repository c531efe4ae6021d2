//! Vimshottari dasha engine.
//!
//! Computation tiers:
//! - Mahadasha sequence from birth inputs
//! - Children of one parent (generated on demand, never stored on the parent)
//! - Owned tree of a parent down to a depth
//! - Full hierarchy (levels 0..depth)
//! - Snapshot of the active chain at one moment

use log::debug;

use crate::error::VedicError;

use super::balance::nakshatra_birth_balance;
use super::data::{VIMSHOTTARI_SEQUENCE, sequence_position};
use super::query::find_active_period;
use super::subperiod::subdivide;
use super::types::{
    BalanceSubdivision, DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaNode, DashaOptions,
    DashaPeriod, DashaSnapshot, MAX_DASHA_DEPTH, MAX_MAHADASHAS,
};

/// Accumulated cursors within this many days of the horizon count as reaching it.
const HORIZON_EPS_DAYS: f64 = 1e-6;

fn validate_birth(birth_jd: f64, moon_lon: f64) -> Result<(), VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput("birth JD must be finite"));
    }
    if !moon_lon.is_finite() || !(0.0..360.0).contains(&moon_lon) {
        return Err(VedicError::InvalidLongitude(moon_lon));
    }
    Ok(())
}

// ── Mahadasha sequence ───────────────────────────────────────────────

/// Contiguous Mahadashas from birth until `span_years` elapsed years are covered.
///
/// The first period holds the birth balance; the last is kept at full length,
/// so the sequence may run past `birth + span`. Moon longitude must already be
/// in [0, 360).
pub fn vimshottari_mahadashas(
    birth_jd: f64,
    moon_lon: f64,
    span_years: f64,
) -> Result<Vec<DashaPeriod>, VedicError> {
    validate_birth(birth_jd, moon_lon)?;
    if !span_years.is_finite() || span_years <= 0.0 {
        return Err(VedicError::InvalidInput(
            "dasha span must be finite and positive",
        ));
    }

    let balance = nakshatra_birth_balance(moon_lon);
    debug!(
        "vimshottari: moon {moon_lon:.4} in nakshatra {}, {} balance {:.4} y",
        balance.nakshatra_index,
        balance.lord.name(),
        balance.balance_days / DAYS_PER_YEAR
    );

    let horizon = birth_jd + span_years * DAYS_PER_YEAR - HORIZON_EPS_DAYS;
    let start_pos = sequence_position(balance.lord);
    let mut periods = Vec::new();
    let mut cursor = birth_jd;

    loop {
        let i = periods.len();
        if i >= MAX_MAHADASHAS {
            return Err(VedicError::InvalidInput(
                "dasha span needs more periods than supported",
            ));
        }
        let (lord, years) = VIMSHOTTARI_SEQUENCE[(start_pos + i) % 9];
        let (duration, nominal_start) = if i == 0 {
            (balance.balance_days, birth_jd - balance.elapsed_days())
        } else {
            (years * DAYS_PER_YEAR, cursor)
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            start_jd: cursor,
            end_jd: end,
            order: (i as u16) + 1,
            nominal_start_jd: nominal_start,
        });
        cursor = end;
        if cursor >= horizon {
            break;
        }
    }

    Ok(periods)
}

// ── Children of one parent ───────────────────────────────────────────

/// Nine sub-periods of `parent` (fewer under `ElapsedClipped` for a partial
/// parent). A Pratyantar has no children.
pub fn vimshottari_children(
    parent: &DashaPeriod,
    subdivision: BalanceSubdivision,
) -> Vec<DashaPeriod> {
    match parent.level.child_level() {
        Some(child_level) => subdivide(parent, child_level, subdivision),
        None => Vec::new(),
    }
}

// ── Owned tree ───────────────────────────────────────────────────────

/// Recursively expand `parent` until `depth` levels (1..=3) are present.
pub fn dasha_tree(parent: &DashaPeriod, depth: u8, subdivision: BalanceSubdivision) -> DashaNode {
    let children = if parent.level.depth() < depth.min(MAX_DASHA_DEPTH) {
        vimshottari_children(parent, subdivision)
            .iter()
            .map(|child| dasha_tree(child, depth, subdivision))
            .collect()
    } else {
        Vec::new()
    };
    DashaNode {
        period: *parent,
        children,
    }
}

/// Mahadasha sequence expanded into trees per `options`.
pub fn vimshottari_forest(
    birth_jd: f64,
    moon_lon: f64,
    options: &DashaOptions,
) -> Result<Vec<DashaNode>, VedicError> {
    options.validate()?;
    let level0 = vimshottari_mahadashas(birth_jd, moon_lon, options.span_years)?;
    Ok(level0
        .iter()
        .map(|p| dasha_tree(p, options.depth, options.subdivision))
        .collect())
}

// ── Full hierarchy ───────────────────────────────────────────────────

/// All periods of every level from Mahadasha down to `options.depth`.
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_lon: f64,
    options: &DashaOptions,
) -> Result<DashaHierarchy, VedicError> {
    options.validate()?;
    let level0 = vimshottari_mahadashas(birth_jd, moon_lon, options.span_years)?;
    let mut levels: Vec<Vec<DashaPeriod>> = vec![level0];

    for _ in 1..options.depth {
        let Some(parents) = levels.last() else {
            break;
        };
        let next: Vec<DashaPeriod> = parents
            .iter()
            .flat_map(|p| vimshottari_children(p, options.subdivision))
            .collect();
        levels.push(next);
    }

    Ok(DashaHierarchy { birth_jd, levels })
}

// ── Snapshot ─────────────────────────────────────────────────────────

/// Active chain at `query_jd` without materializing the hierarchy.
///
/// Before birth or at/after the end of the last Mahadasha returns
/// [`VedicError::OutOfRange`].
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_lon: f64,
    query_jd: f64,
    options: &DashaOptions,
) -> Result<DashaSnapshot, VedicError> {
    options.validate()?;
    if !query_jd.is_finite() {
        return Err(VedicError::InvalidInput("query JD must be finite"));
    }
    let level0 = vimshottari_mahadashas(birth_jd, moon_lon, options.span_years)?;
    snapshot_in(&level0, query_jd, options)
}

/// Drill down from an already generated Mahadasha sequence.
pub fn snapshot_in(
    mahadashas: &[DashaPeriod],
    query_jd: f64,
    options: &DashaOptions,
) -> Result<DashaSnapshot, VedicError> {
    let out_of_range = || VedicError::OutOfRange {
        query_jd,
        start_jd: mahadashas.first().map_or(f64::NAN, |p| p.start_jd),
        end_jd: mahadashas.last().map_or(f64::NAN, |p| p.end_jd),
    };
    let idx = find_active_period(mahadashas, query_jd).ok_or_else(out_of_range)?;

    let mut periods = Vec::with_capacity(options.depth as usize);
    let mut current = mahadashas[idx];
    periods.push(current);

    while current.level.depth() < options.depth.min(MAX_DASHA_DEPTH) {
        let children = vimshottari_children(&current, options.subdivision);
        match find_active_period(&children, query_jd) {
            Some(i) => {
                current = children[i];
                periods.push(current);
            }
            None => break,
        }
    }

    Ok(DashaSnapshot { query_jd, periods })
}
