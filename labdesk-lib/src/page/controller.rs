//! Generic CRUD page controller

use super::ByIdAction;
use super::Entity;
use super::EntityBackend;
use super::FilterDraft;
use super::FilterState;
use super::ModalMode;
use super::Notice;
use super::Resolution;
use super::resolve;
use crate::api::FormOptions;
use crate::error::Error;
use crate::grid::DataTable;
use crate::grid::MenuAction;
use crate::grid::RowIntent;
use crate::model::Row;

/// Lifecycle of the canonical dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored(String),
}

/// Identifies one issued collection fetch.
///
/// Only the most recently issued ticket may replace the canonical dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// CRUD page for one entity kind.
///
/// Holds the canonical dataset, derives the visible dataset from it through
/// the active filter, and runs every modal flow. Page operations never return
/// errors: each failure ends in a queued [`Notice`], an errored load state, or
/// a modal left open.
#[derive(Debug)]
pub struct EntityPage<E: Entity, B> {
    backend: B,
    load_state: LoadState,
    canonical: Vec<E>,
    filter: Option<FilterState>,
    table: DataTable<E>,
    mode: ModalMode,
    selected: Option<E>,
    detail: Option<E::Full>,
    form_options: FormOptions,
    filter_draft: Option<FilterDraft>,
    notices: Vec<Notice>,
    issued_loads: u64,
    mounted: bool,
}

impl<E: Entity, B: EntityBackend<E>> EntityPage<E, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            load_state: LoadState::Idle,
            canonical: Vec::new(),
            filter: None,
            table: DataTable::new(E::columns()).with_actions(),
            mode: ModalMode::Closed,
            selected: None,
            detail: None,
            form_options: FormOptions::default(),
            filter_draft: None,
            notices: Vec::new(),
            issued_loads: 0,
            mounted: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Dataset as last fetched from the backend.
    pub fn canonical(&self) -> &[E] {
        &self.canonical
    }

    /// Canonical dataset after the active filter, in canonical order.
    pub fn visible(&self) -> &[E] {
        self.table.rows()
    }

    pub fn table(&self) -> &DataTable<E> {
        &self.table
    }

    /// Table access for sorting, paging and the context menu.
    pub fn table_mut(&mut self) -> &mut DataTable<E> {
        &mut self.table
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    /// Row targeted by the open read, update or delete modal.
    pub fn selected(&self) -> Option<&E> {
        self.selected.as_ref()
    }

    /// Expanded representation loaded for the read modal.
    pub fn detail(&self) -> Option<&E::Full> {
        self.detail.as_ref()
    }

    pub fn form_options(&self) -> &FormOptions {
        &self.form_options
    }

    pub fn filter_draft(&self) -> Option<&FilterDraft> {
        self.filter_draft.as_ref()
    }

    pub fn active_filter(&self) -> Option<&FilterState> {
        self.filter.as_ref()
    }

    pub fn has_active_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Attribute keys the filter form offers.
    pub fn filterable_attributes(&self) -> Vec<&'static str> {
        self.table.filterable_columns().map(|column| column.key()).collect()
    }

    /// Drains queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        notice.log();
        self.notices.push(notice);
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Runs the initial load once per page instance.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.load().await;
    }

    /// Refetches the canonical dataset.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.backend.list().await;
        self.complete_load(ticket, result);
    }

    /// Marks a fetch as issued.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_loads += 1;
        self.load_state = LoadState::Loading;
        LoadTicket(self.issued_loads)
    }

    /// Applies the result of the fetch identified by `ticket`.
    ///
    /// Results of superseded tickets are dropped. Returns whether the result
    /// was applied.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Vec<E>, Error>) -> bool {
        if ticket.0 != self.issued_loads {
            log::debug!(
                "Dropping stale {} fetch {} (latest is {})",
                E::PLURAL,
                ticket.0,
                self.issued_loads
            );
            return false;
        }

        match result {
            Ok(rows) => {
                log::debug!("Fetched {} {}", rows.len(), E::PLURAL);
                self.canonical = rows;
                self.load_state = LoadState::Ready;
                self.refresh_visible();
            }
            Err(e) => {
                log::error!("Failed to fetch {}: {e}", E::PLURAL);
                self.load_state = LoadState::Errored(format!("Failed to fetch {}.", E::PLURAL));
            }
        }
        true
    }

    fn refresh_visible(&mut self) {
        let visible = match &self.filter {
            Some(filter) => filter.apply(&self.canonical),
            None => self.canonical.clone(),
        };
        self.table.set_rows(visible);
    }

    // =========================================================================
    // Modal transitions
    // =========================================================================

    /// Switches modal, discarding everything the previous one held.
    fn enter(&mut self, mode: ModalMode) {
        self.mode = mode;
        self.selected = None;
        self.detail = None;
        self.form_options = FormOptions::default();
        self.filter_draft = None;
    }

    /// Closes whatever modal is open.
    pub fn close_modal(&mut self) {
        self.enter(ModalMode::Closed);
    }

    /// Opens the filter form, prefilled with the active filter if any.
    pub fn open_filter(&mut self) {
        let draft = match &self.filter {
            Some(filter) => FilterDraft {
                attribute: filter.attribute().to_string(),
                value: filter.value().to_string(),
            },
            None => FilterDraft {
                attribute: self
                    .filterable_attributes()
                    .first()
                    .map(|key| key.to_string())
                    .unwrap_or_default(),
                value: String::new(),
            },
        };
        self.enter(ModalMode::Filter);
        self.filter_draft = Some(draft);
    }

    /// Opens the filter form prefilled from `row`.
    pub fn open_filter_for(&mut self, row: &E) {
        let draft = match self.filterable_attributes().first() {
            Some(key) => FilterDraft {
                attribute: key.to_string(),
                value: row.value(key).to_string(),
            },
            None => FilterDraft::default(),
        };
        self.enter(ModalMode::Filter);
        self.filter_draft = Some(draft);
    }

    pub async fn open_create(&mut self) -> bool {
        let Some(options) = self.load_form_options().await else {
            return false;
        };
        self.enter(ModalMode::Create);
        self.form_options = options;
        true
    }

    /// Opens the read modal on `row`, fetching the expanded representation
    /// for entities that have one.
    pub async fn open_read(&mut self, row: E) -> bool {
        let id = row.id();
        self.enter(ModalMode::Read);
        self.selected = Some(row);

        if !E::EXPANDED_READ {
            return true;
        }

        match self.backend.get_full(id).await {
            Ok(full) => {
                self.detail = Some(full);
                true
            }
            Err(e) => {
                log::error!("Failed to fetch full {} #{id}: {e}", E::NAME);
                self.close_modal();
                self.notify(Notice::error(format!(
                    "Failed to load details for {} #{id}.",
                    E::NAME
                )));
                false
            }
        }
    }

    pub async fn open_update(&mut self, row: E) -> bool {
        let Some(options) = self.load_form_options().await else {
            return false;
        };
        self.enter(ModalMode::Update);
        self.selected = Some(row);
        self.form_options = options;
        true
    }

    pub fn open_delete(&mut self, row: E) -> bool {
        self.enter(ModalMode::Delete);
        self.selected = Some(row);
        true
    }

    /// Routes an action chosen from the table's context menu.
    pub async fn handle_row_action(&mut self, intent: RowIntent<E>) -> bool {
        match intent.action {
            MenuAction::Filter => {
                self.open_filter_for(&intent.row);
                true
            }
            MenuAction::Read => self.open_read(intent.row).await,
            MenuAction::Update => self.open_update(intent.row).await,
            MenuAction::Delete => self.open_delete(intent.row),
        }
    }

    /// Loads dropdown options for the create/update form.
    ///
    /// Any failure queues a notice and returns `None`.
    async fn load_form_options(&mut self) -> Option<FormOptions> {
        if E::RELATIONS.is_empty() {
            return Some(FormOptions::default());
        }
        match self.backend.form_options(E::RELATIONS).await {
            Ok(options) => Some(options),
            Err(e) => {
                log::error!("Failed to load {} form options: {e}", E::NAME);
                self.notify(Notice::error("Failed to load related data."));
                None
            }
        }
    }

    // =========================================================================
    // By-id flow
    // =========================================================================

    /// Opens the id-entry form for `action`.
    pub fn open_by_id(&mut self, action: ByIdAction) {
        self.enter(action.entry_mode());
    }

    /// Submits the id-entry form.
    ///
    /// A resolved record opens exactly like the same action picked from the
    /// table. Otherwise a notice is queued and the id form stays open.
    pub async fn submit_id(&mut self, input: &str) -> bool {
        let Some(action) = self.mode.by_id_action() else {
            log::warn!("Ignoring id submission while {} is open", self.mode);
            return false;
        };

        let input = input.trim();
        if input.is_empty() {
            self.notify(Notice::warning("Please input an ID"));
            return false;
        }

        match resolve::<E, B>(&self.backend, input).await {
            Resolution::Found(row) => {
                let intent = RowIntent {
                    action: action.menu_action(),
                    row,
                };
                self.handle_row_action(intent).await
            }
            Resolution::NotFound => {
                self.notify(Notice::warning(format!(
                    "{} with ID {input} not found.",
                    E::NAME
                )));
                false
            }
            Resolution::Failed(e) => {
                self.notify(Notice::error(format!(
                    "Failed to look up {} {input}: {}",
                    E::NAME,
                    e.user_message()
                )));
                false
            }
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Replaces the active filter and closes the filter form.
    ///
    /// The filter is evaluated against the canonical dataset, never against
    /// the currently visible rows. A blank value or unknown attribute keeps the
    /// form open.
    pub fn submit_filter(&mut self, attribute: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.notify(Notice::warning("Please enter a value to filter by."));
            return false;
        }
        if !self.filterable_attributes().iter().any(|key| *key == attribute) {
            self.notify(Notice::error(format!("Cannot filter by {attribute}.")));
            return false;
        }

        let filter = FilterState::new(attribute, value);
        if !self.canonical.iter().any(|row| filter.matches(row)) {
            self.notify(Notice::info(format!(
                "No items found with {attribute} = \"{value}\""
            )));
        }

        self.filter = Some(filter);
        self.close_modal();
        self.refresh_visible();
        true
    }

    /// Clears the filter, showing the whole canonical dataset.
    pub fn reset_filter(&mut self) {
        self.filter = None;
        self.refresh_visible();
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Deletes the selected row.
    ///
    /// On success the modal closes and the dataset reloads. On failure the
    /// delete modal stays open with the row still selected.
    pub async fn confirm_delete(&mut self) -> bool {
        if self.mode != ModalMode::Delete {
            return false;
        }
        let Some(id) = self.selected.as_ref().map(|row| row.id()) else {
            log::warn!("Ignoring {} delete confirmation without a selected row", E::NAME);
            return false;
        };

        match self.backend.delete(id).await {
            Ok(()) => {
                self.close_modal();
                self.notify(Notice::success(format!("{} #{id} deleted.", E::NAME)));
                self.load().await;
                true
            }
            Err(e) => {
                log::error!("Failed to delete {} #{id}: {e}", E::NAME);
                self.notify(Notice::error(delete_failure_message(&e)));
                false
            }
        }
    }

    /// Submits the create or update form, depending on the open modal.
    ///
    /// On success the modal closes and the dataset reloads. On failure the
    /// form stays open and the server's messages are queued.
    pub async fn submit(&mut self, payload: E::Payload) -> bool {
        let result = match self.mode {
            ModalMode::Create => self.backend.create(&payload).await,
            ModalMode::Update => {
                let Some(id) = self.selected.as_ref().map(|row| row.id()) else {
                    log::warn!("Ignoring {} update without a selected row", E::NAME);
                    return false;
                };
                self.backend.update(id, &payload).await
            }
            other => {
                log::warn!("Ignoring {} form submission while {other} is open", E::NAME);
                return false;
            }
        };

        match result {
            Ok(saved) => {
                log::debug!("Saved {} #{}", E::NAME, saved.id());
                self.close_modal();
                self.notify(Notice::success(format!("{} saved.", E::NAME)));
                self.load().await;
                true
            }
            Err(e) => {
                log::error!("Failed to save {}: {e}", E::NAME);
                self.notify(Notice::error(save_failure_message(E::NAME, &e)));
                false
            }
        }
    }
}

fn delete_failure_message(error: &Error) -> &'static str {
    if error.is_conflict() {
        "Deletion failed: This item is referenced by other entities."
    } else if error.is_not_found() {
        "Deletion failed: Item not found."
    } else {
        "An error occurred during deletion."
    }
}

/// Failure text for a create or update, with field errors one per line.
fn save_failure_message(name: &str, error: &Error) -> String {
    let fields = error.field_errors();
    if fields.is_empty() {
        return format!("Failed to save {name}: {}", error.user_message());
    }
    let lines: Vec<String> = fields.iter().map(ToString::to_string).collect();
    format!("Failed to save {name}.\n{}", lines.join("\n"))
}
