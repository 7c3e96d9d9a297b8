//! KRD Core crate.
//!
//! Everything the catalog site knows about its data and its interactive
//! state, independent of how pages are rendered or served:
//!
//! - `record` + `source`: Airtable record shape and the [`RecordSource`]
//!   seam (live REST client, or static fixtures for tests and demos).
//! - `normalize`: drops records missing required fields and lifts the rest
//!   into typed shapes ([`Product`], [`NavigationEntry`], [`Logo`],
//!   [`ServiceItem`]).
//! - `carousel`, `catalog`, `modal`: the state machines behind the home
//!   page rotators, product listing toggles, and the image viewer.
//! - `scope`: mount-scoped result slots so late or superseded fetches never
//!   land in a page that has moved on.
//! - `routes`: the fixed route table and the Airtable tables each page reads.
//!
//! Fetch failures are absorbed at the source boundary: callers of
//! [`RecordSource::fetch`] always get a list, possibly empty, and the error
//! is logged.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod modal;
pub mod normalize;
pub mod record;
pub mod routes;
pub mod scope;
pub mod source;

pub use carousel::{Carousel, CarouselState, HOT_SERIES_INTERVAL, PREMIUM_SERIES_INTERVAL};
pub use catalog::{CatalogView, SortBy, ViewMode, locale_compare, sort_products};
pub use config::{AirtableConfig, DEFAULT_CONFIG_FILE, ServerConfig, SiteConfig};
pub use error::{ConfigError, FetchError};
pub use modal::{Dismissal, ImageModal, ModalTarget, ScrollLock, ScrollLockGuard};
pub use normalize::{
    Logo, NavigationEntry, Product, ServiceItem, Shape, normalize, normalize_as,
};
pub use record::Record;
pub use routes::{CATALOG_PAGES, CatalogPage, Icon, Page};
pub use scope::{Scope, Slot, Ticket};
pub use source::{AirtableClient, DEFAULT_VIEW, RecordSource, StaticSource};
