use crate::error::Result;
use crate::types::{ReportLayout, RunReport, Snapshot};
use std::fmt::Write;

/// Number of leading genome symbols shown in the table.
pub const GENOME_PREVIEW: usize = 20;

fn preview(genome: &str) -> &str {
    match genome.char_indices().nth(GENOME_PREVIEW) {
        Some((end, _)) => &genome[..end],
        None => genome,
    }
}

impl RunReport {
    /// Tab-separated report: a header, then the initial and final states.
    pub fn render_table(&self) -> String {
        let layout = self.variant.layout();
        let mut table = String::new();

        match layout {
            ReportLayout::Genome => table.push_str("Time\tGenome\tScore\tLength\n"),
            ReportLayout::ProteinSize => table.push_str("Time\tProtSize\tGenomeSize\n"),
        }
        render_row(&mut table, layout, &self.first, 2);
        render_row(&mut table, layout, &self.last, 1);
        table
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The initial row prints the score to two decimals, the final row to one.
fn render_row(table: &mut String, layout: ReportLayout, snapshot: &Snapshot, precision: usize) {
    // writing into a String cannot fail
    let _ = match layout {
        ReportLayout::Genome => writeln!(
            table,
            "{}\t{}\t{:.*}\t{}",
            snapshot.time,
            preview(&snapshot.genome),
            precision,
            snapshot.score,
            snapshot.length
        ),
        ReportLayout::ProteinSize => writeln!(
            table,
            "{}\t{}\t{}",
            snapshot.time, snapshot.score as usize, snapshot.length
        ),
    };
}
