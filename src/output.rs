//! Output formatting for query results.
//!
//! Results are printed as plain tab-separated lines: one header line with the
//! column names, then one line per row.

use std::io::{self, Write};

use crate::db::QueryResult;

/// Text printed for SQL NULL cells.
pub const NULL_TEXT: &str = "null";

/// Print a result table and return the number of data rows written.
///
/// The header is only written once a row is about to print, so an empty
/// result writes nothing at all.
pub fn print_result(result: &QueryResult, out: &mut dyn Write) -> io::Result<usize> {
    let mut count = 0;
    for row in &result.rows {
        if count == 0 {
            writeln!(out, "{}", result.headers.join("\t"))?;
        }
        let cells: Vec<&str> = row
            .iter()
            .map(|cell| cell.as_deref().unwrap_or(NULL_TEXT))
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::result_of;
    use rstest::rstest;

    fn render(result: &QueryResult) -> (usize, String) {
        let mut out = Vec::new();
        let count = print_result(result, &mut out).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[rstest]
    fn test_empty_result_prints_nothing() {
        let (count, text) = render(&result_of(&["doctor_id", "name"], &[]));
        assert_eq!(count, 0);
        assert_eq!(text, "");
    }

    #[rstest]
    #[case(1, 1)]
    #[case(3, 4)]
    #[case(5, 2)]
    fn test_one_header_and_one_line_per_row(#[case] rows: usize, #[case] columns: usize) {
        let headers: Vec<String> = (0..columns).map(|c| format!("col{}", c)).collect();
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
        let data: Vec<Vec<&str>> = (0..rows).map(|_| vec!["v"; columns]).collect();

        let (count, text) = render(&result_of(&header_refs, &data));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(count, rows);
        assert_eq!(lines.len(), rows + 1);
        assert_eq!(lines[0], header_refs.join("\t"));
        for line in lines {
            assert_eq!(line.split('\t').count(), columns);
        }
    }

    #[rstest]
    fn test_null_cells_render_as_null() {
        let mut result = result_of(&["name", "specialty"], &[vec!["Smith", "x"]]);
        result.rows[0][1] = None;

        let (_, text) = render(&result);
        assert_eq!(text, "name\tspecialty\nSmith\tnull\n");
    }
}
