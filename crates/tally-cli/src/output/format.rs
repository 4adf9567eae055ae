use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Fixed-width table sized to its content: a header row followed by the data
/// rows, columns padded to their widest value.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths = column_widths(columns, rows);
    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();

    let mut output = Vec::with_capacity(rows.len() + 1);
    output.push(format_row(columns, &header, &widths));
    for row in rows {
        output.push(format_row(columns, row, &widths));
    }
    output
}

fn column_widths(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = columns
        .iter()
        .map(|column| column.name.len())
        .collect::<Vec<usize>>();

    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.chars().count());
            }
        }
    }

    widths
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let mut pieces = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        let width = *widths.get(index).unwrap_or(&0);
        let value = cells.get(index).cloned().unwrap_or_default();

        let piece = match column.align {
            Align::Left => format!("{value:<width$}"),
            Align::Right => format!("{value:>width$}"),
        };
        pieces.push(piece);
    }

    let gap = " ".repeat(COLUMN_GAP);
    format!(
        "{}{}",
        " ".repeat(INDENT),
        pieces.join(&gap).trim_end().to_string()
    )
}
