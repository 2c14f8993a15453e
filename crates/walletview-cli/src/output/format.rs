//! Plain-text layout helpers shared by the text renderers.
//!
//! Widths are measured in `char`s so currency symbols and accented names
//! line up.

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

impl<'a> Column<'a> {
    pub const fn left(name: &'a str) -> Self {
        Self {
            name,
            align: Align::Left,
        }
    }

    pub const fn right(name: &'a str) -> Self {
        Self {
            name,
            align: Align::Right,
        }
    }
}

const DEFAULT_WIDTH: usize = 120;
const MIN_WIDTH: usize = 40;
const INDENT: usize = 2;
const GAP: &str = "  ";
const MIN_COLUMN_WIDTH: usize = 6;

/// Render width from `COLUMNS`, never narrower than 40.
pub fn terminal_width() -> usize {
    let configured = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_WIDTH);
    cmp::max(configured, MIN_WIDTH)
}

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|(label, _)| display_width(label))
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{}  {value}", pad(label, label_width, Align::Left)))
        .collect()
}

/// Renders an aligned table that wraps long cells. When the columns cannot
/// fit `max_width` even at their minimum widths, each row becomes a labelled
/// block instead.
pub fn render_table_or_blocks(
    columns: &[Column<'_>],
    rows: &[Vec<String>],
    max_width: usize,
    block_label: &str,
) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let Some(widths) = fit_widths(columns, rows, max_width) else {
        return render_blocks(columns, rows, block_label);
    };

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();
    let mut output = vec![format_line(columns, &header, &widths)];

    for row in rows {
        let wrapped = widths
            .iter()
            .enumerate()
            .map(|(index, width)| wrap_text(row.get(index).map_or("", String::as_str), *width))
            .collect::<Vec<Vec<String>>>();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        for line in 0..height {
            let cells = wrapped
                .iter()
                .map(|chunks| chunks.get(line).cloned().unwrap_or_default())
                .collect::<Vec<String>>();
            output.push(format_line(columns, &cells, &widths));
        }
    }

    output
}

fn fit_widths(columns: &[Column<'_>], rows: &[Vec<String>], max_width: usize) -> Option<Vec<usize>> {
    let mut widths = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .fold(display_width(column.name), cmp::max)
        })
        .collect::<Vec<usize>>();
    let floors = columns
        .iter()
        .map(|column| cmp::max(display_width(column.name), MIN_COLUMN_WIDTH))
        .collect::<Vec<usize>>();

    let gaps = GAP.len() * columns.len().saturating_sub(1);
    let budget = max_width.saturating_sub(INDENT + gaps);
    if floors.iter().sum::<usize>() > budget {
        return None;
    }

    let mut total = widths.iter().sum::<usize>();
    while total > budget {
        // Shrink the widest column that still has room above its floor.
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floors[*index])
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index)?;
        widths[candidate] -= 1;
        total -= 1;
    }

    Some(widths)
}

fn format_line(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let pieces = columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (column, width))| {
            pad(cells.get(index).map_or("", String::as_str), *width, column.align)
        })
        .collect::<Vec<String>>();

    format!("{}{}", " ".repeat(INDENT), pieces.join(GAP))
        .trim_end()
        .to_string()
}

fn render_blocks(columns: &[Column<'_>], rows: &[Vec<String>], block_label: &str) -> Vec<String> {
    let label_width = columns
        .iter()
        .map(|column| display_width(column.name) + 1)
        .max()
        .unwrap_or(0);

    let mut output = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        if row_index > 0 {
            output.push(String::new());
        }
        output.push(format!("  {block_label} {}:", row_index + 1));
        for (column_index, column) in columns.iter().enumerate() {
            let label = format!("{}:", column.name);
            let value = row.get(column_index).map_or("", String::as_str);
            output.push(format!("    {}  {value}", pad(&label, label_width, Align::Left)));
        }
    }

    output
}

fn wrap_text(value: &str, width: usize) -> Vec<String> {
    if width == 0 || display_width(value) <= width {
        return vec![value.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in value.split_whitespace() {
        let needed = if current.is_empty() {
            display_width(word)
        } else {
            display_width(&current) + 1 + display_width(word)
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if display_width(word) <= width {
            current.push_str(word);
        } else {
            let mut chunks = split_chars(word, width);
            current = chunks.pop().unwrap_or_default();
            lines.extend(chunks);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn split_chars(token: &str, width: usize) -> Vec<String> {
    token
        .chars()
        .collect::<Vec<char>>()
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn pad(value: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    match align {
        Align::Left => format!("{value}{fill}"),
        Align::Right => format!("{fill}{value}"),
    }
}
