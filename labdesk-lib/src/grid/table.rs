//! Sortable, paginated data table

use super::Column;
use super::ContextMenu;
use super::ListenerRegistry;
use super::MenuAction;
use super::Pagination;
use super::Position;
use super::RowIntent;
use super::SortState;
use super::UiEvent;
use super::sorted_order;
use crate::model::Row;

/// Paginated, optionally sorted view over a set of rows.
///
/// The sorted order is derived state: it is recomputed only when the rows or
/// the sort state change. Replacing the rows with an equal set is a no-op.
///
/// A table built with [`DataTable::new`] is display-only. Call
/// [`DataTable::with_actions`] to offer the per-row context menu.
#[derive(Debug)]
pub struct DataTable<R: Row> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    order: Vec<usize>,
    sort: SortState,
    pagination: Pagination,
    registry: ListenerRegistry,
    menu: Option<ContextMenu<R>>,
    sort_passes: u64,
}

impl<R: Row> DataTable<R> {
    /// Creates an empty, display-only table.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            order: Vec::new(),
            sort: SortState::default(),
            pagination: Pagination::default(),
            registry: ListenerRegistry::new(),
            menu: None,
            sort_passes: 0,
        }
    }

    /// Enables the per-row context menu.
    pub fn with_actions(mut self) -> Self {
        self.menu = Some(ContextMenu::new(self.registry.clone()));
        self
    }

    // =========================================================================
    // Data
    // =========================================================================

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|column| column.key() == key)
    }

    /// Columns that can be used as filter attributes.
    pub fn filterable_columns(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter().filter(|column| column.is_filterable())
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the rows. Returns `false` if the new rows equal the current ones.
    ///
    /// The sort state survives and the current page is clamped to the new
    /// page count.
    pub fn set_rows(&mut self, rows: Vec<R>) -> bool {
        if rows == self.rows {
            return false;
        }
        self.rows = rows;
        self.resort();
        self.pagination.clamp(self.rows.len());
        true
    }

    /// Rows in display order across all pages.
    pub fn sorted_rows(&self) -> impl Iterator<Item = &R> {
        self.order.iter().map(|&index| &self.rows[index])
    }

    /// How many times the display order has been computed.
    pub fn sort_passes(&self) -> u64 {
        self.sort_passes
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Key of the active sort column.
    pub fn sort_key(&self) -> Option<&'static str> {
        self.sort
            .column()
            .and_then(|index| self.columns.get(index))
            .map(|column| column.key())
    }

    /// Sorts by `key`, flipping the direction if it is already active.
    ///
    /// Resets to page 1. Returns `false` for an unknown column.
    pub fn set_sort(&mut self, key: &str) -> bool {
        let Some(index) = self.columns.iter().position(|column| column.key() == key) else {
            log::debug!("Ignoring sort on unknown column {key}");
            return false;
        };
        self.sort.select(index);
        self.pagination.reset();
        self.resort();
        true
    }

    fn resort(&mut self) {
        self.order = match self.sort.column().and_then(|index| self.columns.get(index)) {
            Some(column) => sorted_order(&self.rows, column, self.sort.direction()),
            None => (0..self.rows.len()).collect(),
        };
        self.sort_passes += 1;
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.pagination.current()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.rows.len())
    }

    /// Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        self.pagination.next(self.rows.len())
    }

    /// Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev()
    }

    /// Rows on the current page in display order.
    pub fn page_rows(&self) -> Vec<&R> {
        self.order[self.pagination.range(self.rows.len())]
            .iter()
            .map(|&index| &self.rows[index])
            .collect()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Header labels, with a direction indicator on the active sort column.
    pub fn header(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                if self.sort.column() == Some(index) {
                    format!("{} {}", column.header(), self.sort.direction().indicator())
                } else {
                    column.header().to_string()
                }
            })
            .collect()
    }

    /// Cell text for every row on the current page.
    pub fn page_cells(&self) -> Vec<Vec<String>> {
        self.page_rows()
            .into_iter()
            .map(|row| self.columns.iter().map(|column| column.cell(row)).collect())
            .collect()
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page(), self.total_pages())
    }

    // =========================================================================
    // Context menu
    // =========================================================================

    /// Whether the table offers a context menu at all.
    pub fn has_actions(&self) -> bool {
        self.menu.is_some()
    }

    pub fn context_menu(&self) -> Option<&ContextMenu<R>> {
        self.menu.as_ref()
    }

    /// Registry the context menu attaches its dismissal listeners to.
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Opens the context menu on the `index`-th row of the current page.
    ///
    /// Returns `false` for a display-only table or an index past the page.
    pub fn open_context_menu(&mut self, index: usize, position: Position) -> bool {
        if self.menu.is_none() {
            return false;
        }
        let Some(row) = self.page_rows().get(index).map(|row| (*row).clone()) else {
            return false;
        };
        match self.menu.as_mut() {
            Some(menu) => {
                menu.open(position, row);
                true
            }
            None => false,
        }
    }

    /// Forwards a global event to the menu. Returns `true` if it dismissed it.
    pub fn handle_event(&mut self, event: &UiEvent) -> bool {
        self.menu
            .as_mut()
            .is_some_and(|menu| menu.handle_event(event))
    }

    /// Chooses a menu item, closing the menu.
    pub fn choose(&mut self, action: MenuAction) -> Option<RowIntent<R>> {
        self.menu.as_mut().and_then(|menu| menu.choose(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Key;
    use crate::grid::ListenerKind;
    use crate::grid::PAGE_SIZE;
    use crate::grid::PointerTarget;
    use crate::model::EntityId;
    use crate::model::Value;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: EntityId,
        name: String,
        score: Option<i64>,
    }

    impl Row for Item {
        fn id(&self) -> EntityId {
            self.id
        }

        fn value(&self, attribute: &str) -> Value {
            match attribute {
                "id" => self.id.into(),
                "name" => self.name.clone().into(),
                "score" => self.score.into(),
                _ => Value::Null,
            }
        }
    }

    fn item(id: EntityId, name: &str, score: Option<i64>) -> Item {
        Item {
            id,
            name: name.to_string(),
            score,
        }
    }

    fn items(count: i64) -> Vec<Item> {
        (1..=count)
            .map(|id| item(id, &format!("item {id:02}"), Some(id % 3)))
            .collect()
    }

    fn table() -> DataTable<Item> {
        DataTable::new(vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("score", "Score"),
        ])
        .with_actions()
    }

    fn sorted_ids(table: &DataTable<Item>) -> Vec<EntityId> {
        table.sorted_rows().map(|row| row.id).collect()
    }

    #[test]
    fn test_desc_is_reverse_of_asc_for_unique_keys() {
        let mut table = table();
        table.set_rows(vec![item(3, "c", None), item(1, "a", None), item(2, "b", None)]);

        table.set_sort("name");
        let asc = sorted_ids(&table);
        table.set_sort("name");
        let mut desc = sorted_ids(&table);
        desc.reverse();

        assert_eq!(asc, vec![1, 2, 3]);
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let mut table = table();
        table.set_rows(vec![
            item(1, "a", Some(1)),
            item(2, "b", Some(0)),
            item(3, "c", Some(1)),
            item(4, "d", Some(0)),
        ]);

        table.set_sort("score");
        assert_eq!(sorted_ids(&table), vec![2, 4, 1, 3]);

        table.set_sort("score");
        assert_eq!(sorted_ids(&table), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_nulls_sort_first_and_render_empty() {
        let mut table = table();
        table.set_rows(vec![item(1, "a", Some(5)), item(2, "b", None)]);
        table.set_sort("score");

        assert_eq!(sorted_ids(&table), vec![2, 1]);
        assert_eq!(table.page_cells()[0], vec!["2", "b", ""]);
    }

    #[test]
    fn test_custom_comparator_and_renderer() {
        let mut table = DataTable::new(vec![
            Column::new("name", "Name").compare_by(|a: &Item, b: &Item| b.name.cmp(&a.name)),
            Column::new("score", "Score").render(|value| format!("<{value}>")),
        ]);
        table.set_rows(vec![item(1, "a", Some(1)), item(2, "b", Some(2))]);
        table.set_sort("name");

        assert_eq!(sorted_ids(&table), vec![2, 1]);
        assert_eq!(table.page_cells()[0], vec!["b", "<2>"]);
        assert_eq!(table.filterable_columns().count(), 0);
    }

    #[test]
    fn test_header_indicator() {
        let mut table = table();
        assert_eq!(table.header(), vec!["ID", "Name", "Score"]);

        table.set_sort("id");
        assert_eq!(table.header()[0], "ID ▲");
        table.set_sort("id");
        assert_eq!(table.header()[0], "ID ▼");

        assert!(!table.set_sort("missing"));
        assert_eq!(table.sort_key(), Some("id"));
    }

    #[test]
    fn test_twenty_five_rows_paginate_into_three_pages() {
        let mut table = table();
        table.set_rows(items(25));

        assert_eq!(table.page_label(), "Page 1 of 3");
        assert_eq!(table.page_rows().len(), PAGE_SIZE);

        assert!(table.next_page());
        assert!(table.next_page());
        assert_eq!(table.page_label(), "Page 3 of 3");
        assert_eq!(table.page_rows().len(), 5);

        assert!(!table.next_page());
        assert_eq!(table.current_page(), 3);
    }

    #[test]
    fn test_empty_table_has_one_page() {
        let mut table = table();
        assert_eq!(table.page_label(), "Page 1 of 1");
        assert!(!table.prev_page());
        assert!(!table.next_page());
        assert!(table.page_cells().is_empty());
    }

    #[test]
    fn test_set_sort_resets_page() {
        let mut table = table();
        table.set_rows(items(25));
        table.next_page();
        table.set_sort("name");
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_equal_rows_do_not_resort() {
        let mut table = table();
        table.set_rows(items(12));
        let passes = table.sort_passes();

        assert!(!table.set_rows(items(12)));
        assert_eq!(table.sort_passes(), passes);

        assert!(table.set_rows(items(13)));
        assert_eq!(table.sort_passes(), passes + 1);
    }

    #[test]
    fn test_sort_survives_replacement_and_page_clamps() {
        let mut table = table();
        table.set_rows(items(25));
        table.set_sort("id");
        table.set_sort("id");
        table.next_page();
        table.next_page();

        table.set_rows(items(15));
        assert_eq!(table.sort_key(), Some("id"));
        assert_eq!(sorted_ids(&table)[0], 15);
        assert_eq!(table.current_page(), 2);
    }

    #[test]
    fn test_display_only_table_has_no_menu() {
        let mut table = DataTable::new(vec![Column::<Item>::new("id", "ID")]);
        table.set_rows(items(3));

        assert!(!table.has_actions());
        assert!(!table.open_context_menu(0, Position::default()));
        assert_eq!(table.choose(MenuAction::Read), None);
        assert_eq!(table.listeners().listener_count(), 0);
    }

    #[test]
    fn test_menu_index_past_page() {
        let mut table = table();
        table.set_rows(items(3));
        assert!(!table.open_context_menu(3, Position::default()));
    }

    #[test]
    fn test_captured_row_survives_refetch() {
        let mut table = table();
        table.set_rows(items(5));
        assert!(table.open_context_menu(1, Position::new(10, 2)));

        let mut renamed = items(5);
        renamed[1].name = "renamed".to_string();
        table.set_rows(renamed);

        let intent = table.choose(MenuAction::Delete);
        assert_eq!(
            intent,
            Some(RowIntent {
                action: MenuAction::Delete,
                row: item(2, "item 02", Some(2)),
            })
        );
    }

    #[test]
    fn test_no_listener_leaks() {
        let mut table = table();
        table.set_rows(items(5));
        let registry = table.listeners().clone();

        for index in 0..5 {
            table.open_context_menu(index, Position::default());
            assert_eq!(registry.listener_count(), ListenerKind::ALL.len());
            match index % 4 {
                0 => assert!(table.handle_event(&UiEvent::KeyDown(Key::Escape))),
                1 => assert!(table.handle_event(&UiEvent::PointerDown(PointerTarget::Outside))),
                2 => assert!(table.handle_event(&UiEvent::Resize)),
                _ => assert!(table.choose(MenuAction::Read).is_some()),
            }
            assert_eq!(registry.listener_count(), 0);
        }

        table.open_context_menu(0, Position::default());
        table.open_context_menu(1, Position::default());
        assert_eq!(registry.listener_count(), ListenerKind::ALL.len());

        drop(table);
        assert_eq!(registry.listener_count(), 0);
    }
}
