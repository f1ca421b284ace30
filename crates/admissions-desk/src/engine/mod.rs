//! Entity filter and aggregation engine.
//!
//! Every list page narrows a collection with a free-text query plus dropdown
//! selections and shows summary metrics next to the result. The engine is
//! pure: it borrows the collection, never mutates it, and keeps no state
//! between calls, so the view layer can re-run it on every keystroke.

mod filter;
mod metrics;
mod record;

pub use filter::{filter, FieldFilter, FilterSpec, ALL};
pub use metrics::{
    aggregate, evaluate, percentage, record_rates, tally, FilteredView, MetricDef, MetricKind,
    MetricValue, Metrics, Precision, Predicate, Scope, Tally,
};
pub use record::{FieldValue, Record};
