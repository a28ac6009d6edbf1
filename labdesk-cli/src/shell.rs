//! Interactive console shell

use std::io::Write;

use labdesk_lib::LabDeskClient;
use labdesk_lib::api::Resource;
use labdesk_lib::page::ModalMode;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;

use crate::command;
use crate::command::Command;
use crate::error::CliError;
use crate::functions;
use crate::pages;
use crate::pages::AnyPage;
use crate::render;

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    client: LabDeskClient,
    pages: Vec<Box<dyn AnyPage>>,
    active: usize,
}

impl Shell {
    pub fn new(client: LabDeskClient) -> Self {
        let pages = pages::all(&client);
        Self {
            client,
            pages,
            active: 0,
        }
    }

    /// Switches to the page for `name` (a resource segment such as `labworks`).
    pub async fn select(&mut self, name: &str) -> Result<(), CliError> {
        let index = Resource::from_segment(name)
            .and_then(|resource| self.pages.iter().position(|p| p.resource() == resource))
            .ok_or_else(|| CliError::UnknownPage(name.to_string()))?;
        self.active = index;
        log::info!("Switched to {}", self.pages[index].title());
        self.pages[index].mount().await;
        Ok(())
    }

    fn page(&mut self) -> &mut dyn AnyPage {
        self.pages[self.active].as_mut()
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run(&mut self) -> Result<(), CliError> {
        println!("LabDesk on {}. Type `help` for commands.", self.client.base_url());
        self.redraw();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{}> ", self.page().title().to_lowercase());
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    log::debug!("Command: {command:?}");
                    if self.execute(command).await == Flow::Quit {
                        break;
                    }
                }
                Err(e) => println!("{e}"),
            }
        }
        log::info!("Shell closed");
        Ok(())
    }

    /// Runs one command and prints the resulting state.
    pub async fn execute(&mut self, command: Command) -> Flow {
        let redraw = match command {
            Command::Help => {
                println!("{}", command::HELP);
                false
            }
            Command::Quit => return Flow::Quit,
            Command::Pages => {
                for (index, page) in self.pages.iter().enumerate() {
                    let marker = if index == self.active { "*" } else { " " };
                    println!("{marker} {:<12} {}", page.resource().segment(), page.title());
                }
                false
            }
            Command::Use(name) => match self.select(&name).await {
                Ok(()) => true,
                Err(e) => {
                    println!("{e}");
                    false
                }
            },
            Command::Reload => {
                self.page().reload().await;
                true
            }
            Command::Show => true,
            Command::Sort(column) => report(self.page().sort(&column), "No such column"),
            Command::Next => report(self.page().next_page(), "Already on the last page"),
            Command::Prev => report(self.page().prev_page(), "Already on the first page"),
            Command::Menu(row) => report(self.page().open_menu(row - 1), "No such row"),
            Command::Dismiss(event) => report(self.page().dismiss_menu(&event), "Nothing to dismiss"),
            Command::Pick(action) => {
                if !self.page().pick(action).await {
                    println!("No menu open, use `menu <row>` first");
                }
                true
            }
            Command::Filter(None) => {
                self.page().open_filter();
                true
            }
            Command::Filter(Some((attribute, value))) => {
                if self.page().mode() != ModalMode::Filter {
                    self.page().open_filter();
                }
                self.page().submit_filter(&attribute, &value);
                true
            }
            Command::Reset => {
                self.page().reset_filter();
                true
            }
            Command::Create => {
                self.page().open_create().await;
                true
            }
            Command::ById(action, id) => {
                self.page().open_by_id(action);
                if let Some(id) = id {
                    self.page().submit_id(&id).await;
                }
                true
            }
            Command::Id(input) => {
                self.page().submit_id(&input).await;
                true
            }
            Command::Submit(json) => {
                if let Err(e) = self.page().submit_json(&json).await {
                    println!("Invalid payload: {e}");
                }
                true
            }
            Command::Confirm => {
                self.page().confirm_delete().await;
                true
            }
            Command::Cancel => {
                self.page().close_modal();
                true
            }
            Command::Function(call) => {
                match functions::run(&self.client, call).await {
                    Ok(message) => println!("{message}"),
                    Err(e) => {
                        log::error!("{call:?} failed: {e}");
                        println!("Function failed: {}", e.user_message());
                    }
                }
                if call.is_mutation() {
                    self.reload_all().await;
                }
                call.is_mutation()
            }
        };

        self.flush_notices();
        if redraw {
            self.redraw();
        }
        Flow::Continue
    }

    /// Reloads every page that has been opened.
    async fn reload_all(&mut self) {
        for page in self.pages.iter_mut().filter(|page| page.is_mounted()) {
            page.reload().await;
        }
    }

    /// Prints pending notices of every page, labelling other pages' ones.
    fn flush_notices(&mut self) {
        for (index, page) in self.pages.iter_mut().enumerate() {
            let notices = page.take_notices();
            if notices.is_empty() {
                continue;
            }
            if index != self.active {
                println!("{}:", page.title());
            }
            print!("{}", render::notices(&notices));
        }
    }

    fn redraw(&mut self) {
        let page = self.page();
        print!("{}", page.render());
        if let Some(modal) = page.render_modal() {
            println!("--- {} ---\n{modal}", page.mode());
        }
    }
}

fn report(changed: bool, otherwise: &str) -> bool {
    if !changed {
        println!("{otherwise}");
    }
    changed
}
