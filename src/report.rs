// src/report.rs
//
// Markdown rendering. Pure projection of the scan/coverage/gap results:
// same input, same bytes.

use crate::gaps::Gap;
use crate::reference::{Coverage, Field};
use crate::scan::{ListingScan, ProfileScan};

/// Everything the report shows, borrowed from the earlier stages.
pub struct AuditInput<'a> {
    pub listings_name: &'a str,
    pub profiles_name: &'a str,
    pub listings: &'a ListingScan,
    pub profiles: &'a ProfileScan,
    pub generic_head_names: &'a [String],
    pub full_profile_count: usize,
    pub coverage: &'a Coverage,
    pub gaps: &'a [Gap],
}

pub fn render(input: &AuditInput<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_line!(lines, "# School data audit");
    push_line!(lines);
    listings_section(&mut lines, input);
    profiles_section(&mut lines, input);
    coverage_section(&mut lines, input.coverage);
    gaps_section(&mut lines, input.gaps);

    lines.join("\n")
}

fn listings_section(lines: &mut Vec<String>, input: &AuditInput<'_>) {
    let l = input.listings;
    push_line!(lines, "## 1. School cards (listings – {})", input.listings_name);
    push_line!(lines);
    push_line!(lines, "- Total listings: {}", l.all_slugs.len());
    push_line!(lines, "- With contact (phone/email/website): {}", l.with_contact.len());
    push_line!(lines, "- With exam results (IB/IGCSE etc.): {}", l.with_exam_results.len());
    let missing = l.missing_contact().len();
    if missing > 0 {
        push_line!(lines, "- **Missing contact:** {missing} schools");
    }
    push_line!(lines);
}

fn profiles_section(lines: &mut Vec<String>, input: &AuditInput<'_>) {
    let p = input.profiles;
    push_line!(
        lines,
        "## 2. Full profiles ({} schools in {})",
        input.full_profile_count,
        input.profiles_name
    );
    push_line!(lines);

    let names = input
        .generic_head_names
        .iter()
        .map(|n| str_repr(n))
        .collect::<Vec<_>>()
        .join(" / ");
    push_line!(lines, "- With generic head ({names}): {}", p.generic_head.len());
    for slug in &p.generic_head {
        push_line!(lines, "  - {slug}");
    }
    if !p.missing.is_empty() {
        push_line!(
            lines,
            "- Known profiles missing from {}: {} → {}",
            input.profiles_name,
            p.missing.len(),
            list_repr(&p.missing)
        );
    }
    push_line!(lines);
}

fn coverage_section(lines: &mut Vec<String>, c: &Coverage) {
    let n = c.total;
    push_line!(lines, "## 3. CSV export coverage (what CSV has)");
    push_line!(lines);
    push_line!(lines, "- Address ({}): {}/{n}", Field::AddressFull.key(), c.address.len());
    push_line!(
        lines,
        "- Head ({}): {}/{n} → {}",
        Field::HeadName.key(),
        c.head.len(),
        list_repr(&c.head)
    );
    push_line!(
        lines,
        "- Inspection ({} or {}): {}/{n}",
        Field::LastInspected.key(),
        Field::InspectionRating.key(),
        c.inspection.len()
    );
    push_line!(lines, "- Facilities: {}/{n}", c.facilities.len());
    push_line!(
        lines,
        "- IB ({}/{}): {}/{n} → {}",
        Field::IbAverage.key(),
        Field::IbPassRate.key(),
        c.ib.len(),
        list_repr(&c.ib)
    );
    push_line!(lines, "- Founded year: {}/{n}", c.founded.len());
    push_line!(lines);
}

fn gaps_section(lines: &mut Vec<String>, gaps: &[Gap]) {
    push_line!(lines, "## 4. Listing fields that could be filled from CSV");
    push_line!(lines);
    for g in gaps {
        push_line!(lines, "- **{}**: {}", g.slug, g.kinds_joined());
    }
    push_line!(lines);
}

/// `['a', 'b']`, items quoted by `str_repr`.
fn list_repr<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let inner = items
        .into_iter()
        .map(|s| str_repr(s))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

/// Quoted string in the usual repr form: single quotes unless the text has a
/// `'` and no `"`, backslash and control characters escaped.
fn str_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c < ' ' || ('\u{7f}'..='\u{9f}').contains(&c) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
