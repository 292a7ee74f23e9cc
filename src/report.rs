use std::io::Write;

use crate::benchmark::ResultRecord;

/// Renders the console report: three lines per record followed by a blank line.
pub fn render(results: &[ResultRecord]) -> String {
    let mut out: String = String::new();
    for record in results.iter() {
        let label: &str = record.label.as_str();
        out.push_str(&format!("{} - Insert Time: {:.6} seconds\n", label, record.insert_seconds));
        out.push_str(&format!("{} - Search Time: {:.6} seconds\n", label, record.search_seconds));
        out.push_str(&format!("{} - Memory Usage: {} bytes\n", label, record.memory_bytes));
        out.push('\n');
    }
    out
}

/// Writes the result sink as a JSON array, one object per record in the order tested.
pub fn write_json<W>(writer: W, results: &[ResultRecord]) -> serde_json::Result<()>
where
    W: Write,
{
    serde_json::to_writer_pretty(writer, results)
}
