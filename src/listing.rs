use crate::instructions::{InstrDesc, WORD_BITS};
use crate::program::{ListingEntry, Program};

/// Debug view: one row per source line, word first. Blank lines keep their
/// row so the listing lines up with the source.
pub fn fmt_listing(entries: &[ListingEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let word = e.word.map(|w| w.to_string()).unwrap_or_default();
        let row = format!("{:<8}  {}", word, e.source);
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Column layout of the program: each section of `section_words` words is
/// drawn as 8 rows, row `i` holding bit `i` (MSB first) of every word.
pub fn fmt_columns(program: &Program, section_words: usize) -> String {
    let mut sections = Vec::new();
    for section in program.sections(section_words) {
        let mut rows = String::new();
        for bit in 0..WORD_BITS {
            let row: Vec<&str> = section
                .chunks(WORD_BITS)
                .map(|word| if word[bit] { "X" } else { "_" })
                .collect();
            rows.push_str(&row.join(" "));
            rows.push('\n');
        }
        sections.push(rows);
    }
    sections.join("\n")
}

/// Table row: mnemonic, family, template, and a marker for reserved entries.
pub fn fmt_desc(d: &InstrDesc) -> String {
    let row = format!(
        "{:<6} {:<8} {} {}",
        d.mnemonic,
        format!("{:?}", d.family).to_lowercase(),
        d.template(),
        if d.implemented { "" } else { "(reserved)" }
    );
    row.trim_end().to_string()
}
