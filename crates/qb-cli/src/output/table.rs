//! Plain-text tables for question, job, and category listings.

use qb_core::enums::JobStatus;

const GAP: &str = "  ";

/// Free-text columns. These give up width first on a narrow terminal;
/// ids, dates, difficulty, and status always print in full.
const FLEXIBLE: &[&str] = &[
    "title",
    "question",
    "answer",
    "name",
    "company",
    "position",
    "location",
    "notes",
    "url",
    "tags",
    "related_questions",
    "value",
];

/// Narrowest a free-text column is squeezed to.
const MIN_FLEXIBLE: usize = 8;

const GREEN: &str = "32";
const YELLOW: &str = "33";
const RED: &str = "31";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

struct Column<'a> {
    header: &'a str,
    width: usize,
    flexible: bool,
    right_align: bool,
}

impl<'a> Column<'a> {
    fn measure(index: usize, header: &'a str, rows: &[Vec<String>]) -> Self {
        let cells = || rows.iter().filter_map(|row| row.get(index));
        let width = cells()
            .map(|cell| cell.chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0);
        // Difficulty, counts, and totals; "-" stands in for a missing value.
        let right_align =
            cells().any(|cell| cell != "-") && cells().all(|cell| cell == "-" || is_number(cell));
        Self {
            header,
            width,
            flexible: FLEXIBLE.contains(&header),
            right_align,
        }
    }

    fn cell(&self, value: &str, color: bool) -> String {
        let clipped = clip(value, self.width);
        let width = self.width;
        let padded = if self.right_align {
            format!("{clipped:>width$}")
        } else {
            format!("{clipped:<width$}")
        };
        match color.then(|| paint_code(self.header, value)).flatten() {
            Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
            None => padded,
        }
    }
}

/// Render rows under `headers` as an aligned table with a dashed rule.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut columns = headers
        .iter()
        .enumerate()
        .map(|(index, header)| Column::measure(index, header, rows))
        .collect::<Vec<_>>();
    if let Some(max_width) = options.max_width {
        squeeze(&mut columns, max_width);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(
        columns
            .iter()
            .map(|column| format!("{:<1$}", clip(column.header, column.width), column.width))
            .collect::<Vec<_>>()
            .join(GAP),
    );
    lines.push(
        columns
            .iter()
            .map(|column| "-".repeat(column.width))
            .collect::<Vec<_>>()
            .join(GAP),
    );
    for row in rows {
        lines.push(
            columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    column.cell(row.get(index).map_or("-", String::as_str), options.color)
                })
                .collect::<Vec<_>>()
                .join(GAP),
        );
    }
    lines.join("\n")
}

/// Share what the fixed columns leave over among the free-text ones.
/// Columns narrower than their share keep their width and hand the rest on.
fn squeeze(columns: &mut [Column<'_>], max_width: usize) {
    let gaps = columns.len().saturating_sub(1) * GAP.len();
    let fixed: usize = columns
        .iter()
        .filter(|column| !column.flexible)
        .map(|column| column.width)
        .sum();
    let mut budget = max_width.saturating_sub(fixed + gaps);

    let mut flexible = columns
        .iter_mut()
        .filter(|column| column.flexible)
        .collect::<Vec<_>>();
    flexible.sort_by_key(|column| column.width);

    let mut remaining = flexible.len();
    for column in flexible {
        let share = (budget / remaining).max(MIN_FLEXIBLE);
        column.width = column.width.min(share);
        budget = budget.saturating_sub(column.width);
        remaining -= 1;
    }
}

fn is_number(cell: &str) -> bool {
    !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

/// Job status by pipeline stage, mastery by state. Other columns stay plain.
fn paint_code(header: &str, value: &str) -> Option<&'static str> {
    match header {
        "status" => {
            let status = JobStatus::PIPELINE
                .into_iter()
                .find(|status| status.as_str() == value)?;
            Some(if matches!(status, JobStatus::Offer) {
                GREEN
            } else if status.is_active() {
                YELLOW
            } else {
                RED
            })
        }
        "mastered" => (value == "true").then_some(GREEN),
        _ => None,
    }
}
