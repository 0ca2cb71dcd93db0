//! Text Table
//!
//! Column definitions with cell renderers, laid out as fixed-width text.

/// Column width specification
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Exactly this many characters; longer cells are cut with "…"
    Fixed(usize),
    /// As wide as the widest cell or header, capped at `max`
    Flex { max: Option<usize> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { max: None }
    }
}

/// Column definition for a [`TextTable`]
pub struct Column<R> {
    /// Column header label
    pub label: String,
    pub width: ColumnWidth,
    /// Right-align cells (action columns)
    pub align_right: bool,
    render: Box<dyn Fn(&R) -> String + Send + Sync>,
}

impl<R> Column<R> {
    pub fn new(label: impl Into<String>, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            width: ColumnWidth::default(),
            align_right: false,
            render: Box::new(render),
        }
    }

    pub fn fixed_width(mut self, width: usize) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn max_width(mut self, max: usize) -> Self {
        self.width = ColumnWidth::Flex { max: Some(max) };
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align_right = true;
        self
    }

    pub fn render_cell(&self, row: &R) -> String {
        (self.render)(row)
    }
}

/// Table of rows rendered column by column
pub struct TextTable<R> {
    columns: Vec<Column<R>>,
    empty_message: String,
}

impl<R> TextTable<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            empty_message: "No data".to_string(),
        }
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    fn resolve_width(column: &Column<R>, cells: &[String]) -> usize {
        match column.width {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Flex { max } => {
                let widest = cells
                    .iter()
                    .map(|c| display_width(c))
                    .chain(std::iter::once(display_width(&column.label)))
                    .max()
                    .unwrap_or(0);
                max.map_or(widest, |m| widest.min(m))
            }
        }
    }

    /// Header, separator and one line per row
    pub fn render(&self, rows: &[R]) -> String {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|col| rows.iter().map(|row| col.render_cell(row)).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(col, cells)| Self::resolve_width(col, cells))
            .collect();

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(self.line(self.columns.iter().map(|c| c.label.clone()), &widths));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );

        if rows.is_empty() {
            lines.push(self.empty_message.clone());
        }
        for i in 0..rows.len() {
            lines.push(self.line(cells.iter().map(|col| col[i].clone()), &widths));
        }

        lines.join("\n")
    }

    fn line(&self, values: impl Iterator<Item = String>, widths: &[usize]) -> String {
        let parts: Vec<String> = values
            .zip(widths)
            .zip(&self.columns)
            .map(|((value, width), col)| pad(&truncate(&value, *width), *width, col.align_right))
            .collect();
        parts.join("  ").trim_end().to_string()
    }
}

/// Cut `value` to `width` characters, marking the cut with "…"
pub fn truncate(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Character-count width; the dashboard text is plain ASCII/Latin
fn display_width(s: &str) -> usize {
    s.chars().count()
}
