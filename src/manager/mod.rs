//! The list manager: full lifecycle of one entity's record collection.
//!
//! One [`ListManager`] instance per screen owns load, filter, sort,
//! paginate and mutate for its collection, keeping the page-index
//! invariant consistent across every operation. Presentation and form
//! editing stay outside; the manager only hands out [`PageSlice`]s and
//! accepts validated records back.

pub mod columns;

pub use columns::{CellFormat, ColumnSpec, RenderFn};

use crate::core::{ListError, Record, Result, Value};
use crate::filter::{EvaluatorRegistry, FilterDef, FilterState, FilterValue, apply_filters};
use crate::page::{PageSlice, PageState, paginate, total_pages};
use crate::sort::{SortState, apply_sort};
use crate::source::{DataSource, StatusCode};
use log::{debug, warn};

/// Entity-specific configuration for one [`ListManager`]: which field is
/// the id, which field must stay unique, the filter slots, the columns,
/// and the default page size. Built once per screen via
/// [`ListConfig::builder`] instead of copy-pasting per-page state logic.
#[derive(Debug)]
pub struct ListConfig {
    pub entity: String,
    pub id_field: String,
    pub unique_field: Option<String>,
    pub filters: Vec<FilterDef>,
    pub columns: Vec<ColumnSpec>,
    pub items_per_page: usize,
}

impl ListConfig {
    pub fn builder(entity: impl Into<String>) -> ListConfigBuilder {
        ListConfigBuilder {
            entity: entity.into(),
            id_field: "id".to_string(),
            unique_field: None,
            filters: Vec::new(),
            columns: Vec::new(),
            items_per_page: 10,
        }
    }
}

pub struct ListConfigBuilder {
    entity: String,
    id_field: String,
    unique_field: Option<String>,
    filters: Vec<FilterDef>,
    columns: Vec<ColumnSpec>,
    items_per_page: usize,
}

impl ListConfigBuilder {
    pub fn id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }

    /// Field whose value must be unique (case-insensitive) across the
    /// collection; create/update reject duplicates.
    pub fn unique_field(mut self, field: impl Into<String>) -> Self {
        self.unique_field = Some(field.into());
        self
    }

    pub fn text_filter<K, I, F>(mut self, key: K, fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.filters.push(FilterDef::text(key, fields));
        self
    }

    pub fn choice_filter(mut self, key: impl Into<String>, field: impl Into<String>) -> Self {
        self.filters.push(FilterDef::choice(key, field));
        self
    }

    pub fn range_filter(mut self, key: impl Into<String>, field: impl Into<String>) -> Self {
        self.filters.push(FilterDef::range(key, field));
        self
    }

    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    pub fn items_per_page(mut self, size: usize) -> Self {
        self.items_per_page = size.max(1);
        self
    }

    pub fn build(self) -> ListConfig {
        ListConfig {
            entity: self.entity,
            id_field: self.id_field,
            unique_field: self.unique_field,
            filters: self.filters,
            columns: self.columns,
            items_per_page: self.items_per_page,
        }
    }
}

/// Owns one record collection and all of its derived view state.
///
/// All mutations are synchronous and local; the only async operation is
/// [`load`](Self::load). Overlapping loads are not deduplicated: the last
/// response to resolve wins, as a plain whole-collection replacement.
pub struct ListManager {
    config: ListConfig,
    registry: EvaluatorRegistry,
    records: Vec<Record>,
    filters: FilterState,
    sort: Option<SortState>,
    page: PageState,
    loading: bool,
    error: Option<String>,
}

impl ListManager {
    pub fn new(config: ListConfig) -> Self {
        let page = PageState::new(1, config.items_per_page);
        Self {
            config,
            registry: EvaluatorRegistry::with_default_evaluators(),
            records: Vec::new(),
            filters: FilterState::new(),
            sort: None,
            page,
            loading: false,
            error: None,
        }
    }

    /// Swap in a custom evaluator registry (extra filter kinds).
    pub fn with_registry(mut self, registry: EvaluatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Fetch the collection from `source`, one attempt, no retry.
    ///
    /// `S` replaces the collection and clears the error; `N` empties it
    /// silently; `F` and transport errors empty it and record the
    /// description for display. Nothing is thrown past this boundary, and
    /// `loading` is reset on every path.
    pub async fn load(&mut self, source: &dyn DataSource) {
        self.loading = true;
        debug!("loading '{}'", self.config.entity);

        match source.get(&self.config.entity).await {
            Ok(envelope) => match envelope.status.code {
                StatusCode::Success => {
                    debug!(
                        "loaded {} record(s) for '{}'",
                        envelope.result.len(),
                        self.config.entity
                    );
                    self.records = envelope.result;
                    self.error = None;
                }
                StatusCode::Empty => {
                    self.records = Vec::new();
                    self.error = None;
                }
                StatusCode::Failure => {
                    warn!(
                        "load of '{}' failed: {}",
                        self.config.entity, envelope.status.description
                    );
                    self.records = Vec::new();
                    self.error = Some(envelope.status.description);
                }
            },
            Err(err) => {
                warn!("load of '{}' failed: {}", self.config.entity, err);
                self.records = Vec::new();
                self.error = Some(err.to_string());
            }
        }

        self.loading = false;
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// The exact window to render: filter → sort → paginate, clamping the
    /// page index against the filtered count on every call.
    pub fn page(&mut self) -> PageSlice {
        let filtered = self.filtered();
        let ordered = apply_sort(&filtered, self.sort.as_ref());
        paginate(&ordered, &mut self.page)
    }

    fn filtered(&self) -> Vec<Record> {
        apply_filters(
            &self.records,
            &self.config.filters,
            &self.filters,
            &self.registry,
        )
    }

    // ------------------------------------------------------------------
    // Filter / sort / page affordances (renderer callbacks)
    // ------------------------------------------------------------------

    pub fn set_filter(&mut self, key: impl Into<String>, value: FilterValue) {
        self.filters.set(key, value);
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.filters.clear(key);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
    }

    /// Header click: flip direction on the current field, ascending on a
    /// new one.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortState::toggle(self.sort.as_ref(), field));
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page.set_items_per_page(size);
    }

    // ------------------------------------------------------------------
    // Mutations (local-only; persisting is the caller's explicit call to
    // the source's write methods)
    // ------------------------------------------------------------------

    /// Append a record, assigning `max(id) + 1` (1 for an empty
    /// collection) when the id field is absent or null. Jumps to the last
    /// page so the new record is visible.
    pub fn create(&mut self, mut record: Record) -> Result<()> {
        self.check_unique(&record, None)?;

        let needs_id = record
            .get(&self.config.id_field)
            .map(Value::is_null)
            .unwrap_or(true);
        if needs_id {
            record.set(&self.config.id_field, Value::Integer(self.next_id()));
        }

        self.records.push(record);
        let pages = total_pages(self.filtered().len(), self.page.items_per_page());
        self.page.set_page(pages);
        Ok(())
    }

    /// Replace the fields of the record with `id` by `patch`; the id
    /// itself is immutable. An unknown id is a silent no-op.
    pub fn update(&mut self, id: &Value, patch: Record) -> Result<()> {
        let Some(index) = self.find_index(id) else {
            debug!("update of unknown id '{}' ignored", id);
            return Ok(());
        };

        self.check_unique(&patch, Some(id))?;

        let mut replacement = patch;
        replacement.set(&self.config.id_field, id.clone());
        self.records[index] = replacement;
        Ok(())
    }

    /// Remove the record with `id` (unknown id is a no-op) and clamp the
    /// current page against the shrunken filtered count.
    pub fn remove(&mut self, id: &Value) {
        let Some(index) = self.find_index(id) else {
            debug!("remove of unknown id '{}' ignored", id);
            return;
        };

        self.records.remove(index);
        self.page.clamp(self.filtered().len());
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// The full in-memory collection (source of truth after load).
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Displayable load error, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn find_index(&self, id: &Value) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.get(&self.config.id_field) == Some(id))
    }

    fn next_id(&self) -> i64 {
        self.records
            .iter()
            .filter_map(|r| r.get(&self.config.id_field))
            .filter_map(Value::as_i64)
            .max()
            .map(|max| max + 1)
            .unwrap_or(1)
    }

    /// Case-insensitive uniqueness check on the configured field,
    /// excluding the record with `exclude_id` (the one being edited).
    fn check_unique(&self, candidate: &Record, exclude_id: Option<&Value>) -> Result<()> {
        let Some(field) = &self.config.unique_field else {
            return Ok(());
        };
        let Some(value) = candidate.get(field).filter(|v| !v.is_null()) else {
            return Ok(());
        };

        let needle = value.to_string().to_lowercase();
        let clash = self.records.iter().any(|existing| {
            if let Some(exclude) = exclude_id
                && existing.get(&self.config.id_field) == Some(exclude)
            {
                return false;
            }
            existing
                .get(field)
                .is_some_and(|v| v.to_string().to_lowercase() == needle)
        });

        if clash {
            return Err(ListError::validation(
                field.clone(),
                format!("'{}' already exists", value),
            ));
        }
        Ok(())
    }
}
