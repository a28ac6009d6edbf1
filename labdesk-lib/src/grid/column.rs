//! Column definitions

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::model::Row;
use crate::model::Value;

/// Custom cell renderer.
pub type Renderer = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Custom row comparator for sorting.
pub type Comparator<R> = Arc<dyn Fn(&R, &R) -> Ordering + Send + Sync>;

/// Maps one row attribute to a table column.
///
/// Columns with a custom renderer or comparator do not hold a directly
/// comparable scalar and are therefore not offered for filtering.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("id", "ID"),
///     Column::new("difficulty", "Difficulty")
///         .compare_by(|a: &LabWork, b: &LabWork| a.difficulty.rank().cmp(&b.difficulty.rank())),
///     Column::new("creationDate", "Time").render(|v| format_date(&v.to_string())),
/// ];
/// ```
pub struct Column<R> {
    key: &'static str,
    header: String,
    renderer: Option<Renderer>,
    comparator: Option<Comparator<R>>,
}

impl<R: Row> Column<R> {
    /// Create a column showing `key` under `header`.
    pub fn new(key: &'static str, header: impl Into<String>) -> Self {
        Self {
            key,
            header: header.into(),
            renderer: None,
            comparator: None,
        }
    }

    /// Render cells with a custom function instead of the plain value.
    pub fn render(mut self, renderer: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Sort this column with a custom comparator instead of the value ordering.
    pub fn compare_by(
        mut self,
        comparator: impl Fn(&R, &R) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Attribute key shown by this column.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether the column can be used as a filter attribute.
    pub fn is_filterable(&self) -> bool {
        self.renderer.is_none() && self.comparator.is_none()
    }

    /// Text shown in this column's cell for `row`.
    pub fn cell(&self, row: &R) -> String {
        let value = row.value(self.key);
        match &self.renderer {
            Some(render) => render(&value),
            None => value.to_string(),
        }
    }

    /// Ascending comparison of two rows on this column.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        match &self.comparator {
            Some(compare) => compare(a, b),
            None => a.value(self.key).compare(&b.value(self.key)),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header.clone(),
            renderer: self.renderer.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("renderer", &self.renderer.is_some())
            .field("comparator", &self.comparator.is_some())
            .finish()
    }
}
