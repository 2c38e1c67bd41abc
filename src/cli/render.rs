//! ASCII table rendering for select results

use crate::record::Row;

/// Renders rows as a bordered grid with one column per header.
///
/// Cells missing from a row render empty.
///
/// ```text
/// +----+------------+
/// | ID | title      |
/// +----+------------+
/// | 1  | The Hobbit |
/// +----+------------+
/// ```
pub fn render_table(headers: &[&str], rows: &[Row]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| row.get(*h).map(|v| v.to_string()).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut out = border.clone();
    push_line(&mut out, headers.iter().copied(), &widths);
    out.push_str(&border);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    if !cells.is_empty() {
        out.push_str(&border);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.zip(widths) {
        let pad = width - cell.chars().count();
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(pad + 1));
        out.push('|');
    }
    out.push('\n');
}
