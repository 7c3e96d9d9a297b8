//! Filtering and type-narrowing of raw records.
//!
//! A record reaches a page only when every required field of its shape is
//! present. All other fields ride along untouched in `record.fields`.

use crate::record::Record;
use serde::Serialize;

/// Keeps the records that carry every field in `required`.
pub fn normalize(records: Vec<Record>, required: &[&str]) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| record.has_fields(required))
        .collect()
}

/// A typed projection of a record.
pub trait Shape: Sized {
    const REQUIRED: &'static [&'static str];

    /// Builds the shape from a record already known to satisfy `REQUIRED`.
    fn from_checked(record: Record) -> Self;

    fn from_record(record: Record) -> Option<Self> {
        if record.has_fields(Self::REQUIRED) {
            Some(Self::from_checked(record))
        } else {
            None
        }
    }
}

pub fn normalize_as<T: Shape>(records: Vec<Record>) -> Vec<T> {
    records.into_iter().filter_map(T::from_record).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub img_url: String,
    pub record: Record,
}

impl Product {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn name(&self) -> Option<String> {
        self.record.text("name")
    }

    pub fn product_name(&self) -> Option<String> {
        self.record.text("product_name")
    }

    pub fn description(&self) -> Option<String> {
        self.record.text("description")
    }

    pub fn price(&self) -> Option<String> {
        self.record.text("price")
    }

    /// Sort key: `name`, then `product_name`, then empty.
    pub fn display_name(&self) -> String {
        self.name().or_else(|| self.product_name()).unwrap_or_default()
    }

    /// Card label; falls back to the 1-based position in the listing.
    pub fn label(&self, index: usize) -> String {
        self.name()
            .or_else(|| self.product_name())
            .unwrap_or_else(|| format!("產品 {}", index + 1))
    }
}

impl Shape for Product {
    const REQUIRED: &'static [&'static str] = &["img_url"];

    fn from_checked(record: Record) -> Self {
        Self {
            img_url: record.text("img_url").unwrap_or_default(),
            record,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationEntry {
    pub title: String,
    pub path: String,
    pub record: Record,
}

impl Shape for NavigationEntry {
    const REQUIRED: &'static [&'static str] = &["title", "path"];

    fn from_checked(record: Record) -> Self {
        Self {
            title: record.text("title").unwrap_or_default(),
            path: record.text("path").unwrap_or_default(),
            record,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Logo {
    pub img: String,
    pub record: Record,
}

impl Shape for Logo {
    const REQUIRED: &'static [&'static str] = &["img"];

    fn from_checked(record: Record) -> Self {
        Self {
            img: record.text("img").unwrap_or_default(),
            record,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceItem {
    pub img_url: String,
    pub icon_name: String,
    pub record: Record,
}

impl Shape for ServiceItem {
    const REQUIRED: &'static [&'static str] = &["img_url", "icon_name"];

    fn from_checked(record: Record) -> Self {
        Self {
            img_url: record.text("img_url").unwrap_or_default(),
            icon_name: record.text("icon_name").unwrap_or_default(),
            record,
        }
    }
}
