//! LabDesk client library.
//!
//! A REST client for the laboratory-work management backend, plus the
//! front-end state it drives: a generic sortable and paginated data grid, and
//! one CRUD page controller per entity kind.
//!
//! # Example
//!
//! ```ignore
//! use labdesk_lib::LabDeskClient;
//! use labdesk_lib::model::LabWork;
//! use labdesk_lib::page::EntityPage;
//!
//! let client = LabDeskClient::builder()
//!     .url("http://localhost:8080/api")
//!     .build()?;
//!
//! let mut page: EntityPage<LabWork, _> = EntityPage::new(client);
//! page.load().await;
//! println!("{}", page.table().page_label());
//! ```

pub mod api;
pub mod error;
pub mod grid;
pub mod model;
pub mod page;

mod client;

pub use client::*;
