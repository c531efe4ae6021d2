//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle is entered at the lord of the Moon's
//! birth nakshatra, with the first Mahadasha shortened to the balance left
//! at birth. Three hierarchical levels are supported: Mahadasha, Bhukti and
//! Pratyantar. Sub-periods are generated on demand from their parent.

pub mod balance;
pub mod data;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use data::{TOTAL_YEARS, VIMSHOTTARI_SEQUENCE, vimshottari_lord, years_of};
pub use query::find_active_period;
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{
    BalanceSubdivision, DAYS_PER_YEAR, DEFAULT_SPAN_YEARS, DashaHierarchy, DashaLevel, DashaNode,
    DashaOptions, DashaPeriod, DashaSnapshot, MAX_DASHA_DEPTH,
};
pub use vimshottari::{
    dasha_tree, snapshot_in, vimshottari_children, vimshottari_forest, vimshottari_hierarchy,
    vimshottari_mahadashas, vimshottari_snapshot,
};
