//! Type-erased access to the entity pages.

use async_trait::async_trait;
use labdesk_lib::LabDeskClient;
use labdesk_lib::api::Resource;
use labdesk_lib::grid::MenuAction;
use labdesk_lib::grid::Position;
use labdesk_lib::grid::UiEvent;
use labdesk_lib::model::Coordinates;
use labdesk_lib::model::Discipline;
use labdesk_lib::model::LabWork;
use labdesk_lib::model::Location;
use labdesk_lib::model::Person;
use labdesk_lib::model::Row;
use labdesk_lib::page::ByIdAction;
use labdesk_lib::page::Entity;
use labdesk_lib::page::EntityPage;
use labdesk_lib::page::LoadState;
use labdesk_lib::page::ModalMode;
use labdesk_lib::page::Notice;

use crate::render;

/// Object-safe view of an [`EntityPage`] so the shell can hold pages of
/// different entity types side by side.
#[async_trait]
pub trait AnyPage: Send {
    fn resource(&self) -> Resource;

    /// Plural display name.
    fn title(&self) -> &'static str;

    fn mode(&self) -> ModalMode;

    /// Whether the page has started loading at least once.
    fn is_mounted(&self) -> bool;

    async fn mount(&mut self);

    async fn reload(&mut self);

    /// Table, paging and filter status.
    fn render(&self) -> String;

    /// Contents of the open modal, if any.
    fn render_modal(&self) -> Option<String>;

    fn take_notices(&mut self) -> Vec<Notice>;

    // -------------------------------------------------------------------------
    // Table
    // -------------------------------------------------------------------------

    fn sort(&mut self, column: &str) -> bool;

    fn next_page(&mut self) -> bool;

    fn prev_page(&mut self) -> bool;

    /// Opens the row menu on a 0-based row of the current page.
    fn open_menu(&mut self, index: usize) -> bool;

    fn dismiss_menu(&mut self, event: &UiEvent) -> bool;

    /// Chooses a menu item and routes it to the page.
    async fn pick(&mut self, action: MenuAction) -> bool;

    // -------------------------------------------------------------------------
    // Modals
    // -------------------------------------------------------------------------

    fn open_filter(&mut self);

    fn submit_filter(&mut self, attribute: &str, value: &str) -> bool;

    fn reset_filter(&mut self);

    async fn open_create(&mut self) -> bool;

    fn open_by_id(&mut self, action: ByIdAction);

    async fn submit_id(&mut self, input: &str) -> bool;

    /// Parses a JSON payload and submits the create/update form.
    async fn submit_json(&mut self, json: &str) -> Result<bool, serde_json::Error>;

    async fn confirm_delete(&mut self) -> bool;

    fn close_modal(&mut self);
}

#[async_trait]
impl<E: Entity> AnyPage for EntityPage<E, LabDeskClient> {
    fn resource(&self) -> Resource {
        E::RESOURCE
    }

    fn title(&self) -> &'static str {
        E::PLURAL
    }

    fn mode(&self) -> ModalMode {
        EntityPage::mode(self)
    }

    fn is_mounted(&self) -> bool {
        self.load_state() != &LoadState::Idle
    }

    async fn mount(&mut self) {
        EntityPage::mount(self).await
    }

    async fn reload(&mut self) {
        self.load().await
    }

    fn render(&self) -> String {
        let table = self.table();
        let mut out = format!("== {} ==\n", E::PLURAL);

        match self.load_state() {
            LoadState::Idle | LoadState::Loading => out.push_str("Loading...\n"),
            LoadState::Errored(message) => out.push_str(&format!("{message}\n")),
            LoadState::Ready => {
                out.push_str(&render::table(&table.header(), &table.page_cells()));
                out.push_str(&table.page_label());
                out.push('\n');
            }
        }

        if let Some(filter) = self.active_filter() {
            out.push_str(&format!(
                "Filtered by {} = \"{}\" ({} of {}), `reset` to clear\n",
                filter.attribute(),
                filter.value(),
                self.visible().len(),
                self.canonical().len()
            ));
        }
        if let Some(menu) = table.context_menu().filter(|menu| menu.is_open()) {
            let row = menu.row().map(Row::display_name).unwrap_or_default();
            let items: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
            out.push_str(&format!("Menu on {row}: {}\n", items.join(" | ")));
        }
        out
    }

    fn render_modal(&self) -> Option<String> {
        let text = match self.mode() {
            ModalMode::Closed => return None,
            ModalMode::Filter => {
                let draft = self.filter_draft().cloned().unwrap_or_default();
                format!(
                    "Filter {} by {} = \"{}\"\nAttributes: {}\nSubmit with `filter <attribute> <value>`",
                    E::PLURAL,
                    draft.attribute,
                    draft.value,
                    self.filterable_attributes().join(", ")
                )
            }
            ModalMode::Create => format!(
                "Create {}\n{}Submit with `submit <json>`",
                E::NAME,
                render::form_options(self.form_options())
            ),
            ModalMode::Read => {
                let body = match self.detail() {
                    Some(detail) => serde_json::to_string_pretty(detail),
                    None => serde_json::to_string_pretty(&self.selected()),
                };
                format!("{} details\n{}", E::NAME, body.unwrap_or_default())
            }
            ModalMode::Update => {
                let current = serde_json::to_string_pretty(&self.selected()).unwrap_or_default();
                format!(
                    "Update {}\n{current}\n{}Submit with `submit <json>`",
                    E::NAME,
                    render::form_options(self.form_options())
                )
            }
            ModalMode::Delete => {
                let target = self.selected().map(Row::display_name).unwrap_or_default();
                format!(
                    "Delete {} {target}? `confirm` or `cancel`",
                    E::NAME
                )
            }
            ModalMode::ReadById | ModalMode::UpdateById | ModalMode::DeleteById => {
                format!("Enter {} ID with `id <value>`", E::NAME)
            }
        };
        Some(text)
    }

    fn take_notices(&mut self) -> Vec<Notice> {
        EntityPage::take_notices(self)
    }

    fn sort(&mut self, column: &str) -> bool {
        self.table_mut().set_sort(column)
    }

    fn next_page(&mut self) -> bool {
        self.table_mut().next_page()
    }

    fn prev_page(&mut self) -> bool {
        self.table_mut().prev_page()
    }

    fn open_menu(&mut self, index: usize) -> bool {
        let position = Position::new(0, index as i32);
        self.table_mut().open_context_menu(index, position)
    }

    fn dismiss_menu(&mut self, event: &UiEvent) -> bool {
        self.table_mut().handle_event(event)
    }

    async fn pick(&mut self, action: MenuAction) -> bool {
        match self.table_mut().choose(action) {
            Some(intent) => self.handle_row_action(intent).await,
            None => false,
        }
    }

    fn open_filter(&mut self) {
        EntityPage::open_filter(self)
    }

    fn submit_filter(&mut self, attribute: &str, value: &str) -> bool {
        EntityPage::submit_filter(self, attribute, value)
    }

    fn reset_filter(&mut self) {
        EntityPage::reset_filter(self)
    }

    async fn open_create(&mut self) -> bool {
        EntityPage::open_create(self).await
    }

    fn open_by_id(&mut self, action: ByIdAction) {
        EntityPage::open_by_id(self, action)
    }

    async fn submit_id(&mut self, input: &str) -> bool {
        EntityPage::submit_id(self, input).await
    }

    async fn submit_json(&mut self, json: &str) -> Result<bool, serde_json::Error> {
        let payload: E::Payload = serde_json::from_str(json)?;
        Ok(self.submit(payload).await)
    }

    async fn confirm_delete(&mut self) -> bool {
        EntityPage::confirm_delete(self).await
    }

    fn close_modal(&mut self) {
        EntityPage::close_modal(self)
    }
}

/// One page per entity kind, in menu order.
pub fn all(client: &LabDeskClient) -> Vec<Box<dyn AnyPage>> {
    vec![
        Box::new(EntityPage::<LabWork, _>::new(client.clone())),
        Box::new(EntityPage::<Coordinates, _>::new(client.clone())),
        Box::new(EntityPage::<Discipline, _>::new(client.clone())),
        Box::new(EntityPage::<Person, _>::new(client.clone())),
        Box::new(EntityPage::<Location, _>::new(client.clone())),
    ]
}
