/// Layout knobs for [`render`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    /// Terminal width to shrink into; `None` never truncates.
    pub max_width: Option<usize>,
    pub bold_header: bool,
}

const GAP: &str = "  ";
const MIN_COLUMN: usize = 4;

/// Aligned plain-text table: header, dashed rule, one line per row.
/// Numeric cells are right-aligned.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink(&mut widths, max_width);
    }

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(text, width)| pad(&clip(text, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let rule = "-".repeat(header.trim_end().chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(if options.bold_header {
        format!("\u{1b}[1m{}\u{1b}[0m", header.trim_end())
    } else {
        header.trim_end().to_string()
    });
    lines.push(rule);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("", String::as_str);
                pad(&clip(cell, *width), *width, is_numeric(cell))
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest column one step at a time until the table fits.
fn shrink(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some((index, width)) = widths
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|(_, width)| *width)
        else {
            return;
        };
        if width <= MIN_COLUMN {
            return;
        }
        widths[index] -= 1;
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped = text.chars().take(width.saturating_sub(1)).collect::<String>();
    clipped.push('…');
    clipped
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

fn is_numeric(cell: &str) -> bool {
    let cell = cell.strip_prefix('$').unwrap_or(cell);
    !cell.is_empty() && cell.chars().all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-'))
}
