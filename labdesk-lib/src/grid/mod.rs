//! Generic data grid: sorting, pagination and a per-row context menu.
//!
//! The grid works on any [`Row`](crate::model::Row) type. Columns describe
//! which attribute they show and may carry a custom renderer or comparator.
//!
//! # Example
//!
//! ```ignore
//! use labdesk_lib::grid::{Column, DataTable, MenuAction, Position};
//!
//! let mut table = DataTable::new(vec![
//!     Column::new("id", "ID"),
//!     Column::new("name", "Name"),
//! ])
//! .with_actions();
//!
//! table.set_rows(disciplines);
//! table.set_sort("name");
//! table.next_page();
//!
//! table.open_context_menu(0, Position::new(40, 12));
//! let intent = table.choose(MenuAction::Delete);
//! ```

mod column;
mod context_menu;
mod events;
mod pagination;
mod sort;
mod table;

pub use column::*;
pub use context_menu::*;
pub use events::*;
pub use pagination::*;
pub use sort::*;
pub use table::*;
