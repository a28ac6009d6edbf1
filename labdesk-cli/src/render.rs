//! Plain-text rendering helpers

use labdesk_lib::api::FormOptions;
use labdesk_lib::page::Notice;

/// Lays out a table with a leading 1-based row number column.
pub fn table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(first_line(cell).chars().count());
        }
    }
    let number_width = rows.len().to_string().len().max(1);

    let mut out = String::new();
    out.push_str(&line(&" ".repeat(number_width), header.iter().map(String::as_str), &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(&"-".repeat(number_width), rule.iter().map(String::as_str), &widths));

    for (index, row) in rows.iter().enumerate() {
        let number = format!("{:>number_width$}", index + 1);
        out.push_str(&line(&number, row.iter().map(|cell| first_line(cell)), &widths));
    }
    if rows.is_empty() {
        out.push_str("(no rows)\n");
    }
    out
}

fn line<'a>(lead: &str, cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut out = String::from(lead);
    for (cell, width) in cells.zip(widths) {
        let pad = width.saturating_sub(cell.chars().count());
        out.push_str(" | ");
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

fn first_line(cell: &str) -> &str {
    cell.lines().next().unwrap_or_default()
}

/// Lists relation dropdown options of a form.
pub fn form_options(options: &FormOptions) -> String {
    let mut out = String::new();
    for (resource, choices) in options.iter() {
        out.push_str(&format!("{resource} options:\n"));
        if choices.is_empty() {
            out.push_str("  (none)\n");
        }
        for choice in choices {
            out.push_str(&format!("  {:>4}  {}\n", choice.value, choice.label));
        }
    }
    out
}

pub fn notices(notices: &[Notice]) -> String {
    notices.iter().map(|notice| format!("{notice}\n")).collect()
}

#[cfg(test)]
mod tests {
    use labdesk_lib::api::Resource;
    use labdesk_lib::model::SelectOption;

    use super::*;

    #[test]
    fn test_table_alignment() {
        let header = vec!["ID".to_string(), "Name".to_string()];
        let rows = vec![
            vec!["1".to_string(), "Math".to_string()],
            vec!["10".to_string(), "".to_string()],
        ];
        assert_eq!(
            table(&header, &rows),
            "  | ID | Name\n- | -- | ----\n1 | 1  | Math\n2 | 10 |\n"
        );
    }

    #[test]
    fn test_empty_table() {
        let out = table(&["ID".to_string()], &[]);
        assert!(out.ends_with("(no rows)\n"));
    }

    #[test]
    fn test_form_options() {
        let options = FormOptions::new(vec![(
            Resource::Locations,
            vec![SelectOption::new(3, "Lab hall")],
        )]);
        assert_eq!(form_options(&options), "locations options:\n     3  Lab hall\n");
    }
}
