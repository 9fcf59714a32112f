use colored::Colorize;
use rolodex::api::{CmdMessage, MessageLevel};
use rolodex::model::{Contact, ATTRIBUTES};
use unicode_width::UnicodeWidthStr;

pub(crate) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// All contact attributes, one row per contact, under the uppercased attribute labels.
pub(crate) fn render_contacts(contacts: &[Contact]) -> String {
    let headers: Vec<String> = ATTRIBUTES.iter().map(|a| a.label.to_uppercase()).collect();
    let rows: Vec<Vec<String>> = contacts.iter().map(|c| c.row().to_vec()).collect();
    render_table(&headers, &rows)
}

/// Boxed table, columns sized to their widest cell:
///
/// ```text
/// +----+------+
/// | ID | Name |
/// +----+------+
/// | 0  | Ann  |
/// +----+------+
/// ```
pub(crate) fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let border = widths.iter().fold(String::from("+"), |mut line, w| {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
        line
    });

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&render_row(headers, &widths));
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row, &widths));
    }
    if !rows.is_empty() {
        out.push_str(&border);
        out.push('\n');
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width.saturating_sub(cell.width());
        line.push_str(&format!(" {}{} |", cell, " ".repeat(padding)));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex::model::ContactFields;

    #[test]
    fn table_pads_to_widest_cell() {
        let table = render_table(
            &["ID".to_string(), "Name".to_string()],
            &[
                vec!["0".to_string(), "Ann".to_string()],
                vec!["1".to_string(), "Zoë Smith".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "+----+-----------+");
        assert_eq!(lines[1], "| ID | Name      |");
        assert_eq!(lines[3], "| 0  | Ann       |");
        assert_eq!(lines[4], "| 1  | Zoë Smith |");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn empty_table_has_header_only() {
        let table = render_table(&["A".to_string()], &[]);
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn contact_table_uses_uppercased_labels() {
        let contact = Contact::new(ContactFields::named("Ann"));
        let table = render_contacts(&[contact]);
        assert!(table.contains("NAME"));
        assert!(table.contains("PHONE NUMBER"));
        assert!(table.contains("BIRTHDAY DATE"));
        assert!(table.contains("| Ann "));
    }
}
