//! Text rendering of a [`Summary`]: the result panel, the per-year segment
//! breakdown, the two-bar chart and the exported summary document.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::Amount;
use crate::currency::{format_eur, format_per_km};
use crate::tco::Summary;

pub const DEFAULT_TITLE: &str = "TCO Comparator Results";

const CHART_TITLE: &str = "Confronto TCO";
const CHART_WIDTH: i64 = 40;
const BAR: char = '█';

/// The six lines of the summary document, in order.
pub fn document_lines(summary: &Summary, title: &str) -> [String; 6] {
    [
        title.to_string(),
        format!("TCO Acquisto: {}", format_eur(summary.purchase)),
        format!("TCO Noleggio: {}", format_eur(summary.rental)),
        format!("Differenza: {}", format_eur(summary.difference)),
        format!("€/km Acquisto: {}", format_per_km(summary.cost_per_km_purchase)),
        format!("€/km Noleggio: {}", format_per_km(summary.cost_per_km_rental)),
    ]
}

pub fn write_document(
    mut writer: impl Write,
    summary: &Summary,
    title: &str,
) -> io::Result<()> {
    for line in document_lines(summary, title) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Write the summary document to `path`, replacing any existing file.
pub fn export_document(path: impl AsRef<Path>, summary: &Summary, title: &str) -> io::Result<()> {
    let file = File::create(path)?;
    write_document(BufWriter::new(file), summary, title)
}

/// Full on-screen report.
pub fn render_report(summary: &Summary, title: &str) -> String {
    let mut out = String::new();
    for line in document_lines(summary, title) {
        out.push_str(&line);
        out.push('\n');
    }

    let annual = &summary.annual;
    out.push('\n');
    // writing to a String cannot fail
    let _ = writeln!(out, "Costi stimati annui per segmento: {}", summary.segment);
    let _ = writeln!(out, "- Bollo: {}", format_eur(annual.tax));
    let _ = writeln!(out, "- Assicurazione: {}", format_eur(annual.insurance));
    let _ = writeln!(out, "- Manutenzione: {}", format_eur(annual.maintenance));
    let _ = writeln!(out, "- Pneumatici: {}", format_eur(annual.tires));

    out.push('\n');
    out.push_str(&render_chart(summary.purchase, summary.rental));
    out
}

/// Horizontal two-bar chart, bars scaled to the larger total.
pub fn render_chart(purchase: Amount, rental: Amount) -> String {
    let max = purchase.max(rental);
    let mut out = String::new();
    let _ = writeln!(out, "{CHART_TITLE}");
    for (label, value) in [("Acquisto", purchase), ("Noleggio", rental)] {
        let bar: String = std::iter::repeat_n(BAR, bar_len(value, max)).collect();
        let _ = writeln!(out, "{label:<9}|{bar} {}", format_eur(value));
    }
    out
}

fn bar_len(value: Amount, max: Amount) -> usize {
    if value <= Amount::ZERO || max <= Amount::ZERO {
        return 0;
    }
    (value.decimal() * Decimal::from(CHART_WIDTH) / max.decimal())
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_usize()
        .unwrap_or(0)
}
