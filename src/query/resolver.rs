//! Search, filter, sort and paginate an in-memory record set.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::codec::{ListQuery, SortOrder};

/// A record field read through a resource's accessor table.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::text)
    }

    pub fn opt_timestamp(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Timestamp)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Text(_) => 1,
            FieldValue::Number(_) => 2,
            FieldValue::Timestamp(_) => 3,
        }
    }

    /// Ascending order between two non-null values. Text compares lower-cased.
    fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

/// Per-resource field mapping used by [`resolve`].
pub trait Listable: Clone {
    /// Values of the designated free-text search fields. `None` never matches.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Read a field by its wire name. `None` for names the resource does not have.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Evaluate one filter predicate. `None` when the key is not recognized
    /// or the value cannot be interpreted, in which case the filter is skipped.
    fn filter(&self, key: &str, value: &str) -> Option<bool>;
}

/// One page of results plus counts over the whole matching set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// 1-based index of the first row on this page, `0` when empty.
    pub fn showing_from(&self) -> u64 {
        if self.data.is_empty() {
            0
        } else {
            self.page.saturating_sub(1) * self.limit + 1
        }
    }

    /// 1-based index of the last row on this page, `0` when empty.
    pub fn showing_to(&self) -> u64 {
        if self.data.is_empty() {
            0
        } else {
            self.page.saturating_sub(1) * self.limit + self.data.len() as u64
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

/// `max(1, ceil(total / limit))`.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit.max(1)).max(1)
}

/// Run `query` against `records`, returning the requested page.
///
/// Steps run in a fixed order: search, filter, sort, paginate. The input is
/// never modified and no input makes this fail.
pub fn resolve<T: Listable>(records: &[T], query: &ListQuery) -> Page<T> {
    let page = query.page.max(1);
    let limit = query.limit.max(1);
    let needle = query.search.to_lowercase();

    let mut matched: Vec<&T> = records
        .iter()
        .filter(|record| needle.is_empty() || matches_search(*record, &needle))
        .filter(|record| matches_filters(*record, query))
        .collect();

    sort_records(&mut matched, &query.sort_by, query.sort_order);

    let total = matched.len() as u64;
    let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);

    let data = matched
        .into_iter()
        .skip(start)
        .take(take)
        .cloned()
        .collect();

    Page {
        data,
        total,
        page,
        limit,
        total_pages: total_pages(total, limit),
    }
}

fn matches_search<T: Listable>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(needle))
}

fn matches_filters<T: Listable>(record: &T, query: &ListQuery) -> bool {
    query
        .filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .all(|(key, value)| record.filter(key, value).unwrap_or(true))
}

fn sort_records<T: Listable>(records: &mut [&T], sort_by: &str, order: SortOrder) {
    let mut keyed: Vec<(FieldValue, &T)> = records
        .iter()
        .map(|record| (record.field(sort_by).unwrap_or(FieldValue::Null), *record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_for_sort(a, b, order));

    for (slot, (_, record)) in records.iter_mut().zip(keyed) {
        *slot = record;
    }
}

/// Nulls go last in both directions; only non-null comparisons are reversed.
fn compare_for_sort(a: &FieldValue, b: &FieldValue, order: SortOrder) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match order {
            SortOrder::Asc => a.compare(b),
            SortOrder::Desc => a.compare(b).reverse(),
        },
    }
}

/// Shared helper for `min*` / `max*` predicates. Unparseable bounds are skipped.
pub fn numeric_bound(actual: f64, raw: &str, at_least: bool) -> Option<bool> {
    let bound: f64 = raw.trim().parse().ok().filter(|n: &f64| n.is_finite())?;
    Some(if at_least { actual >= bound } else { actual <= bound })
}

/// Shared helper for boolean flags. Only `true` and `false` are recognized.
pub fn flag_equals(actual: bool, raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(actual),
        "false" => Some(!actual),
        _ => None,
    }
}
