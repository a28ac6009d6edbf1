//! Shell command parsing

use labdesk_lib::grid::Key;
use labdesk_lib::grid::MenuAction;
use labdesk_lib::grid::PointerTarget;
use labdesk_lib::grid::UiEvent;
use labdesk_lib::model::EntityId;
use labdesk_lib::page::ByIdAction;
use thiserror::Error;

/// One line of operator input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Pages,
    Use(String),
    Reload,
    Show,
    Sort(String),
    Next,
    Prev,
    /// Open the context menu on a 1-based row of the current page.
    Menu(usize),
    Pick(MenuAction),
    Dismiss(UiEvent),
    /// Open the filter form, or submit it directly.
    Filter(Option<(String, String)>),
    Reset,
    Create,
    /// Open an id form, submitting it right away when an id is given.
    ById(ByIdAction, Option<String>),
    Id(String),
    Submit(String),
    Confirm,
    Cancel,
    Function(FunctionCall),
    Help,
    Quit,
}

/// Call to one of the lab work functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionCall {
    Sum,
    Count { author_id: EntityId },
    Purge { minimal_point: i64 },
    Decrease { lab_work_id: EntityId, steps: u32 },
    Top10 { discipline_id: EntityId },
}

impl FunctionCall {
    /// Whether the call changes lab works.
    pub fn is_mutation(self) -> bool {
        !matches!(self, FunctionCall::Sum | FunctionCall::Count { .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command {0:?}, type `help` for a list")]
    Unknown(String),

    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("Invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

pub const HELP: &str = "\
pages                         list pages
use <page>                    switch page
reload                        refetch the current page
show                          redraw the current page
sort <column>                 sort, again to flip direction
next | prev                   change page
menu <row>                    open the row menu (row is 1-based)
pick <filter|read|update|delete>
dismiss [escape|scroll|resize|click]
filter [<attribute> <value>]  open or submit the filter
reset                         clear the filter
create                        open the create form
read | update | delete [<id>] act on a record by id
id <value>                    submit the id form
submit <json>                 submit the create/update form
confirm | cancel              confirm a deletion or close the modal
fn sum                        sum of minimal points
fn count <authorId>           lab works with author id greater than
fn purge <minimalPoint>       delete lab works with that minimal point
fn decrease <labWorkId> <steps>
fn top10 <disciplineId>       assign the ten hardest lab works
help | quit";

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        let Some((head, rest)) = split_word(line) else {
            return Ok(None);
        };

        let command = match head.to_lowercase().as_str() {
            "pages" => Command::Pages,
            "use" => Command::Use(required(rest, "page name")?.to_lowercase()),
            "reload" => Command::Reload,
            "show" | "ls" => Command::Show,
            "sort" => Command::Sort(required(rest, "column")?.to_string()),
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "menu" => Command::Menu(parse_row(required(rest, "row number")?)?),
            "pick" => {
                let raw = required(rest, "menu action")?;
                Command::Pick(MenuAction::parse(raw).ok_or_else(|| invalid("menu action", raw))?)
            }
            "dismiss" => Command::Dismiss(parse_dismissal(rest)?),
            "filter" => match split_word(rest) {
                None => Command::Filter(None),
                Some((attribute, value)) => {
                    let value = required(value, "filter value")?;
                    Command::Filter(Some((attribute.to_string(), value.to_string())))
                }
            },
            "reset" => Command::Reset,
            "create" => Command::Create,
            "read" => by_id(ByIdAction::Read, rest),
            "update" => by_id(ByIdAction::Update, rest),
            "delete" => by_id(ByIdAction::Delete, rest),
            "id" => Command::Id(required(rest, "id")?.to_string()),
            "submit" => Command::Submit(required(rest, "JSON payload")?.to_string()),
            "confirm" | "yes" => Command::Confirm,
            "cancel" | "close" => Command::Cancel,
            "fn" => Command::Function(parse_function(rest)?),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn split_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim())),
        None => Some((input, "")),
    }
}

fn required<'a>(rest: &'a str, name: &'static str) -> Result<&'a str, ParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(ParseError::Missing(name))
    } else {
        Ok(rest)
    }
}

fn invalid(name: &'static str, value: &str) -> ParseError {
    ParseError::Invalid {
        name,
        value: value.to_string(),
    }
}

fn number<T: std::str::FromStr>(raw: &str, name: &'static str) -> Result<T, ParseError> {
    raw.trim().parse().map_err(|_| invalid(name, raw))
}

fn parse_row(raw: &str) -> Result<usize, ParseError> {
    match number::<usize>(raw, "row number")? {
        0 => Err(invalid("row number", raw)),
        row => Ok(row),
    }
}

fn by_id(action: ByIdAction, rest: &str) -> Command {
    let id = Some(rest.trim()).filter(|id| !id.is_empty());
    Command::ById(action, id.map(str::to_string))
}

fn parse_dismissal(rest: &str) -> Result<UiEvent, ParseError> {
    match rest.trim().to_lowercase().as_str() {
        "" | "escape" | "esc" => Ok(UiEvent::KeyDown(Key::Escape)),
        "scroll" => Ok(UiEvent::Scroll),
        "resize" => Ok(UiEvent::Resize),
        "click" => Ok(UiEvent::PointerDown(PointerTarget::Outside)),
        _ => Err(invalid("dismissal", rest)),
    }
}

fn parse_function(rest: &str) -> Result<FunctionCall, ParseError> {
    let (name, args) = split_word(rest).ok_or(ParseError::Missing("function name"))?;
    let args: Vec<&str> = args.split_whitespace().collect();
    let arg = |index: usize, label: &'static str| args.get(index).copied().ok_or(ParseError::Missing(label));

    let call = match name.to_lowercase().as_str() {
        "sum" => FunctionCall::Sum,
        "count" => FunctionCall::Count {
            author_id: number(arg(0, "author id")?, "author id")?,
        },
        "purge" => FunctionCall::Purge {
            minimal_point: number(arg(0, "minimal point")?, "minimal point")?,
        },
        "decrease" => FunctionCall::Decrease {
            lab_work_id: number(arg(0, "lab work id")?, "lab work id")?,
            steps: number(arg(1, "steps")?, "steps")?,
        },
        "top10" => FunctionCall::Top10 {
            discipline_id: number(arg(0, "discipline id")?, "discipline id")?,
        },
        other => return Err(invalid("function", other)),
    };
    Ok(call)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn test_filter_keeps_spaces_in_value() {
        assert_eq!(
            parse("filter name Algebra II"),
            Command::Filter(Some(("name".to_string(), "Algebra II".to_string())))
        );
        assert_eq!(parse("filter"), Command::Filter(None));
        assert_eq!(
            Command::parse("filter name"),
            Err(ParseError::Missing("filter value"))
        );
    }

    #[test]
    fn test_by_id_commands() {
        assert_eq!(parse("read"), Command::ById(ByIdAction::Read, None));
        assert_eq!(
            parse("DELETE 12"),
            Command::ById(ByIdAction::Delete, Some("12".to_string()))
        );
        assert_eq!(parse("id abc"), Command::Id("abc".to_string()));
    }

    #[test]
    fn test_menu_rows_are_one_based() {
        assert_eq!(parse("menu 3"), Command::Menu(3));
        assert!(matches!(Command::parse("menu 0"), Err(ParseError::Invalid { .. })));
        assert_eq!(parse("pick update"), Command::Pick(MenuAction::Update));
    }

    #[test]
    fn test_dismiss_defaults_to_escape() {
        assert_eq!(parse("dismiss"), Command::Dismiss(UiEvent::KeyDown(Key::Escape)));
        assert_eq!(
            parse("dismiss click"),
            Command::Dismiss(UiEvent::PointerDown(PointerTarget::Outside))
        );
    }

    #[test]
    fn test_submit_keeps_raw_json() {
        assert_eq!(
            parse(r#"submit {"name": "Math", "practiceHours": 2}"#),
            Command::Submit(r#"{"name": "Math", "practiceHours": 2}"#.to_string())
        );
    }

    #[test]
    fn test_functions() {
        assert_eq!(parse("fn sum"), Command::Function(FunctionCall::Sum));
        assert_eq!(
            parse("fn decrease 4 2"),
            Command::Function(FunctionCall::Decrease {
                lab_work_id: 4,
                steps: 2
            })
        );
        assert_eq!(
            Command::parse("fn decrease 4"),
            Err(ParseError::Missing("steps"))
        );
        assert!(!FunctionCall::Count { author_id: 1 }.is_mutation());
        assert!(FunctionCall::Purge { minimal_point: 3 }.is_mutation());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("frobnicate"),
            Err(ParseError::Unknown("frobnicate".to_string()))
        );
    }
}
