//! CRUD page controllers.
//!
//! One [`EntityPage`] drives one entity kind: it owns the canonical dataset
//! fetched from the backend, derives the visible dataset through the active
//! filter, feeds it into a [`DataTable`](crate::grid::DataTable), and runs the
//! create, read, update, delete and by-id flows through a single
//! [`ModalMode`].

mod backend;
mod by_id;
mod controller;
mod entity;
mod filter;
mod mode;
mod notice;

pub use backend::*;
pub use by_id::*;
pub use controller::*;
pub use entity::*;
pub use filter::*;
pub use mode::*;
pub use notice::*;
