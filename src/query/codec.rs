//! Query-string encoding and decoding for list requests.
//!
//! A [`ListQuery`] travels as flat `key=value` pairs:
//! `page`, `limit`, `search`, `sortBy`, `sortOrder` and one
//! `filters[<name>]` entry per filter. Decoding never fails; anything
//! missing or malformed falls back to its default.

use std::collections::BTreeMap;
use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const DEFAULT_SORT_BY: &str = "created_at";

const FILTER_PREFIX: &str = "filters[";
const FILTER_SUFFIX: &str = "]";

/// Sort direction for list results. Defaults to descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Anything other than exactly `asc` or `desc` yields the default.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            _ => SortOrder::default(),
        }
    }
}

/// Pagination, search, sort and filter parameters for one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-indexed page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
    /// Free-text search, matched case-insensitively.
    pub search: String,
    pub sort_by: String,
    pub sort_order: SortOrder,
    /// Resource-specific predicates, kept as raw strings.
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: SortOrder::default(),
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// An empty field name means the default sort field.
    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        let sort_by = sort_by.into();
        self.sort_by = if sort_by.is_empty() {
            DEFAULT_SORT_BY.to_string()
        } else {
            sort_by
        };
        self.sort_order = sort_order;
        self
    }

    /// Empty keys are ignored and an empty value clears the filter, the same
    /// way decoding treats them.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        if key.is_empty() {
            return self;
        }
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self
    }

    /// Flatten into key/value pairs, skipping defaults and empty values.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if self.page != DEFAULT_PAGE {
            pairs.push(("page".to_string(), self.page.to_string()));
        }
        if self.limit != DEFAULT_LIMIT {
            pairs.push(("limit".to_string(), self.limit.to_string()));
        }
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        if !self.sort_by.is_empty() && self.sort_by != DEFAULT_SORT_BY {
            pairs.push(("sortBy".to_string(), self.sort_by.clone()));
        }
        if self.sort_order != SortOrder::default() {
            pairs.push(("sortOrder".to_string(), self.sort_order.as_str().to_string()));
        }
        for (key, value) in &self.filters {
            if value.is_empty() {
                continue;
            }
            pairs.push((format!("{FILTER_PREFIX}{key}{FILTER_SUFFIX}"), value.clone()));
        }

        pairs
    }

    /// Encode as an `application/x-www-form-urlencoded` query string
    /// (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_pairs() {
            serializer.append_pair(&key, &value);
        }
        serializer.finish()
    }

    /// Rebuild a query from flat pairs. Unknown keys are ignored; later
    /// duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ListQuery::default();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "page" => query.page = parse_positive(value).unwrap_or(DEFAULT_PAGE),
                "limit" => query.limit = parse_positive(value).unwrap_or(DEFAULT_LIMIT),
                "search" => query.search = value.to_string(),
                "sortBy" => {
                    query.sort_by = if value.is_empty() {
                        DEFAULT_SORT_BY.to_string()
                    } else {
                        value.to_string()
                    }
                }
                "sortOrder" => query.sort_order = SortOrder::parse_or_default(value),
                _ => {
                    if let Some(name) = filter_name(key) {
                        if value.is_empty() {
                            query.filters.remove(name);
                        } else {
                            query.filters.insert(name.to_string(), value.to_string());
                        }
                    }
                }
            }
        }

        query
    }

    /// Decode a raw query string such as `page=2&filters%5Bstatus%5D=active`.
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self::from_pairs(form_urlencoded::parse(raw.as_bytes()))
    }
}

fn parse_positive(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|n| *n >= 1)
}

fn filter_name(key: &str) -> Option<&str> {
    key.strip_prefix(FILTER_PREFIX)?
        .strip_suffix(FILTER_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// Handlers take a `ListQuery` directly; extraction cannot fail.
impl FromRequest for ListQuery {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(ListQuery::from_query_string(req.query_string())))
    }
}
