use crate::core::{Record, Value};
use crate::format::{FormatSettings, format_date, format_money};

/// Caller-supplied cell renderer: `(value, row, row_index) → display text`.
pub type RenderFn = Box<dyn Fn(&Value, &Record, usize) -> String + Send + Sync>;

/// Built-in cell formats for columns without a custom renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    Money,
    Date,
}

/// Column descriptor for the renderer contract: the engine supplies data
/// and sort/page affordances, presentation stays with the caller.
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    format: CellFormat,
    render: Option<RenderFn>,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            format: CellFormat::Plain,
            render: None,
        }
    }

    pub fn money(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            format: CellFormat::Money,
            ..Self::new(key, label)
        }
    }

    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            format: CellFormat::Date,
            ..Self::new(key, label)
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Override rendering entirely (badges, composed cells).
    pub fn with_render(
        mut self,
        f: impl Fn(&Value, &Record, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Box::new(f));
        self
    }

    /// Produce the display text for this column in `record`.
    pub fn render_cell(&self, record: &Record, index: usize, settings: &FormatSettings) -> String {
        let value = record.get(&self.key).unwrap_or(&Value::Null);
        if let Some(render) = &self.render {
            return render(value, record, index);
        }
        match self.format {
            CellFormat::Plain => value.to_string(),
            CellFormat::Money => value
                .as_f64()
                .map(|amount| format_money(amount, settings))
                .unwrap_or_else(|| value.to_string()),
            CellFormat::Date => format_date(value, settings),
        }
    }
}

impl std::fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("format", &self.format)
            .field("render", &self.render.is_some())
            .finish()
    }
}
