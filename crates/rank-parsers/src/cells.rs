/// Turn scraped table cells into one rank band per line.
///
/// Whitespace runs (newlines included) collapse to a single space and a cell
/// holding several bands, e.g. `"Iron 1 1.08% Iron 2 2.17%"`, is split at each
/// `"% "` boundary. Empty cells are dropped. With `skip_header` the first
/// non-empty cell is discarded.
pub fn collapse_cells<I, S>(cells: I, skip_header: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cells = cells
        .into_iter()
        .map(|cell| collapse_whitespace(cell.as_ref()))
        .filter(|cell| !cell.is_empty())
        .skip(usize::from(skip_header));

    let mut lines = Vec::new();
    for cell in cells {
        split_bands(&cell, &mut lines);
    }
    lines
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_bands(cell: &str, out: &mut Vec<String>) {
    let mut parts = cell.split("% ").peekable();
    while let Some(part) = parts.next() {
        if part.is_empty() {
            continue;
        }
        if parts.peek().is_some() {
            out.push(format!("{part}%"));
        } else {
            out.push(part.to_string());
        }
    }
}
