//! listgrid - in-memory list management engine
//!
//! Every tabular CRUD screen repeats the same lifecycle: load a collection,
//! filter it, sort it, slice out a page, and mutate it locally while keeping
//! the page index sane. This crate owns that lifecycle once, generically, so
//! screens only supply configuration (columns, filter slots, the unique
//! field) and presentation.
//!
//! # Examples
//!
//! Local-only CRUD with filtering and pagination:
//!
//! ```
//! use listgrid::{FilterValue, ListConfig, ListManager, Record, Value};
//!
//! let config = ListConfig::builder("roles")
//!     .unique_field("roleName")
//!     .text_filter("search", ["roleName"])
//!     .items_per_page(10)
//!     .build();
//! let mut manager = ListManager::new(config);
//!
//! for name in ["Admin", "Cashier", "Manager"] {
//!     let mut record = Record::new();
//!     record.set("roleName", name);
//!     manager.create(record).unwrap();
//! }
//!
//! manager.set_filter("search", FilterValue::Text("an".into()));
//! let slice = manager.page();
//! assert_eq!(slice.len(), 1);
//! assert_eq!(
//!     slice.records[0].get("roleName").and_then(Value::as_str),
//!     Some("Manager"),
//! );
//! ```
//!
//! Loading from a data source:
//!
//! ```
//! use listgrid::{ListConfig, ListManager, MemorySource, Record};
//!
//! tokio_test::block_on(async {
//!     let source = MemorySource::new();
//!     let mut record = Record::new();
//!     record.set("id", 1i64);
//!     record.set("roleName", "Admin");
//!     source.seed("roles", vec![record]).await;
//!
//!     let mut manager = ListManager::new(ListConfig::builder("roles").build());
//!     manager.load(&source).await;
//!
//!     assert_eq!(manager.records().len(), 1);
//!     assert!(manager.error().is_none());
//! });
//! ```

pub mod calc;
pub mod core;
pub mod filter;
pub mod format;
pub mod manager;
pub mod page;
pub mod sort;
pub mod source;

// Re-export main types for convenience
pub use crate::core::{ListError, Record, Result, Value};
pub use filter::{
    EvaluatorRegistry, FilterDef, FilterKind, FilterState, FilterValue, apply_filters,
};
pub use format::FormatSettings;
pub use manager::{CellFormat, ColumnSpec, ListConfig, ListManager};
pub use page::{PageSlice, PageState, paginate, total_pages};
pub use sort::{SortState, apply_sort};
pub use source::{
    DataSource, Envelope, FixtureSource, MemorySource, SourceError, SourceResult, Status,
    StatusCode,
};
