use std::collections::BTreeMap;
use std::fmt;

use serde::ser::Serializer;
use serde::Serialize;

use super::filter::{filter, FilterSpec};
use super::record::Record;

/// Record-level condition used by count and percentage metrics.
///
/// A condition on a field the record does not carry never holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    All,
    Equals { field: String, value: String },
    OneOf { field: String, values: Vec<String> },
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn one_of<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::OneOf {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn negate(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    pub fn holds<R: Record>(&self, record: &R) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Equals { field, value } => record
                .field(field)
                .is_some_and(|actual| actual.matches(value)),
            Predicate::OneOf { field, values } => record
                .field(field)
                .is_some_and(|actual| values.iter().any(|value| actual.matches(value))),
            Predicate::Not(inner) => !inner.holds(record),
        }
    }
}

/// Rounding applied to a percentage metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    #[default]
    Whole,
    Tenths,
}

impl Precision {
    fn scale(self) -> i64 {
        match self {
            Precision::Whole => 1,
            Precision::Tenths => 10,
        }
    }

    /// Round half up at this precision. Prefer [`percentage`] for ratios of
    /// whole numbers, which rounds without going through a float product.
    pub fn round(self, value: f64) -> f64 {
        let scale = self.scale() as f64;
        (value * scale + 0.5).floor() / scale
    }
}

/// `numerator / denominator * 100` rounded half up; a zero denominator yields 0.
pub fn percentage(numerator: i64, denominator: i64, precision: Precision) -> f64 {
    if denominator <= 0 {
        return 0.0;
    }
    let scale = i128::from(precision.scale());
    let numerator = i128::from(numerator);
    let denominator = i128::from(denominator);
    let scaled = (2 * numerator * 100 * scale + denominator).div_euclid(2 * denominator);
    scaled as f64 / scale as f64
}

/// Which collection a metric reads when evaluated next to a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// The whole collection, for running totals.
    #[default]
    Full,
    /// Only the records matching the current filter.
    Filtered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricKind {
    Count(Predicate),
    Percentage {
        numerator: Predicate,
        denominator: Predicate,
        precision: Precision,
    },
    Sum {
        field: String,
    },
}

/// Named aggregate over a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDef {
    pub name: String,
    pub scope: Scope,
    pub kind: MetricKind,
}

impl MetricDef {
    pub fn count(name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            scope: Scope::Full,
            kind: MetricKind::Count(predicate),
        }
    }

    pub fn percentage(
        name: impl Into<String>,
        numerator: Predicate,
        denominator: Predicate,
        precision: Precision,
    ) -> Self {
        Self {
            name: name.into(),
            scope: Scope::Full,
            kind: MetricKind::Percentage {
                numerator,
                denominator,
                precision,
            },
        }
    }

    /// Total of a numeric field; non-numeric and missing values count as 0.
    pub fn sum(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: Scope::Full,
            kind: MetricKind::Sum {
                field: field.into(),
            },
        }
    }

    pub fn filtered(mut self) -> Self {
        self.scope = Scope::Filtered;
        self
    }

    pub fn compute<R: Record>(&self, collection: &[R]) -> MetricValue {
        match &self.kind {
            MetricKind::Count(predicate) => MetricValue::Count(count(collection, predicate)),
            MetricKind::Percentage {
                numerator,
                denominator,
                precision,
            } => {
                let numerator = count(collection, numerator) as i64;
                let denominator = count(collection, denominator) as i64;
                MetricValue::Percent {
                    value: percentage(numerator, denominator, *precision),
                    precision: *precision,
                }
            }
            MetricKind::Sum { field } => MetricValue::Total(
                collection
                    .iter()
                    .filter_map(|record| record.field(field).and_then(|value| value.as_number()))
                    .sum(),
            ),
        }
    }
}

fn count<R: Record>(collection: &[R], predicate: &Predicate) -> usize {
    collection
        .iter()
        .filter(|record| predicate.holds(*record))
        .count()
}

/// Computed value of a single metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Total(i64),
    Percent { value: f64, precision: Precision },
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Count(value) => *value as f64,
            MetricValue::Total(value) => *value as f64,
            MetricValue::Percent { value, .. } => *value,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(value) => write!(f, "{value}"),
            MetricValue::Total(value) => write!(f, "{value}"),
            MetricValue::Percent {
                value,
                precision: Precision::Whole,
            } => write!(f, "{value:.0}%"),
            MetricValue::Percent {
                value,
                precision: Precision::Tenths,
            } => write!(f, "{value:.1}%"),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Count(value) => serializer.serialize_u64(*value as u64),
            MetricValue::Total(value) => serializer.serialize_i64(*value),
            MetricValue::Percent { value, .. } => serializer.serialize_f64(*value),
        }
    }
}

/// Metric name to computed value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, MetricValue>);

impl Metrics {
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.0.get(name).copied()
    }

    /// Count metric by name, or 0 when absent or not a count.
    pub fn count(&self, name: &str) -> usize {
        match self.get(name) {
            Some(MetricValue::Count(value)) => value,
            _ => 0,
        }
    }

    /// Sum metric by name, or 0 when absent or not a sum.
    pub fn total(&self, name: &str) -> i64 {
        match self.get(name) {
            Some(MetricValue::Total(value)) => value,
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MetricValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    fn insert(&mut self, name: &str, value: MetricValue) {
        self.0.insert(name.to_string(), value);
    }
}

/// Computes every definition over `collection`, ignoring declared scopes.
pub fn aggregate<R: Record>(collection: &[R], definitions: &[MetricDef]) -> Metrics {
    let mut metrics = Metrics::default();
    for definition in definitions {
        metrics.insert(&definition.name, definition.compute(collection));
    }
    metrics
}

/// Filter result paired with metrics evaluated at their declared scope.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredView<'a, R> {
    pub matches: Vec<&'a R>,
    pub metrics: Metrics,
}

impl<R> FilteredView<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

pub fn evaluate<'a, R: Record>(
    collection: &'a [R],
    spec: &FilterSpec,
    definitions: &[MetricDef],
) -> FilteredView<'a, R> {
    let matches = filter(collection, spec);
    let mut metrics = Metrics::default();
    for definition in definitions {
        let value = match definition.scope {
            Scope::Full => definition.compute(collection),
            Scope::Filtered => definition.compute(&matches),
        };
        metrics.insert(&definition.name, value);
    }

    FilteredView { matches, metrics }
}

/// Per-record `numerator_field / denominator_field` percentage, in input order.
///
/// Records lacking either numeric field, or with a zero denominator, rate 0.
pub fn record_rates<R: Record>(
    collection: &[R],
    numerator_field: &str,
    denominator_field: &str,
    precision: Precision,
) -> Vec<f64> {
    collection
        .iter()
        .map(|record| {
            let numerator = record.field(numerator_field).and_then(|v| v.as_number());
            let denominator = record.field(denominator_field).and_then(|v| v.as_number());
            match (numerator, denominator) {
                (Some(numerator), Some(denominator)) => {
                    percentage(numerator, denominator, precision)
                }
                _ => 0.0,
            }
        })
        .collect()
}

/// Occurrences of one field's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub value: String,
    pub count: usize,
}

/// Counts per distinct value of `field`, in first-seen order.
pub fn tally<R: Record>(collection: &[R], field: &str) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = Vec::new();
    for record in collection {
        let Some(value) = record.field(field) else {
            continue;
        };
        let value = value.to_string();
        match tallies.iter_mut().find(|entry| entry.value == value) {
            Some(entry) => entry.count += 1,
            None => tallies.push(Tally { value, count: 1 }),
        }
    }
    tallies
}
