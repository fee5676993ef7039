//! Ordering rules shared by folder and file listings.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::{File, Folder};

/// Field a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Created,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Created => "created",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Requested ordering for a listing. Defaults to name-ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOrder {
    pub key: SortKey,
    pub order: SortOrder,
}

impl ListOrder {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Parse loosely typed sort arguments.
    ///
    /// An unrecognized `sort_by` falls back to name-ascending regardless of `order`;
    /// an unrecognized `order` falls back to ascending.
    pub fn parse(sort_by: &str, order: &str) -> Self {
        let key = match sort_by {
            "name" => SortKey::Name,
            "created" => SortKey::Created,
            _ => return Self::default(),
        };
        let order = match order {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        };
        Self { key, order }
    }

    /// Total order over entries: created-time ties are broken by name.
    pub fn compare<T: Listable>(&self, a: &T, b: &T) -> Ordering {
        let by_name = a.name().cmp(b.name());
        let ordering = match self.key {
            SortKey::Name => by_name,
            SortKey::Created => a.created_at().cmp(&b.created_at()).then(by_name),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    pub fn sort<T: Listable>(&self, entries: &mut [T]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

/// Anything that can appear in a sorted listing.
pub trait Listable {
    fn name(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Listable for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Listable for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
