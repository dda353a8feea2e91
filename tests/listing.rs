use pretty_assertions::assert_eq;
use redstone8::instructions::lookup;
use redstone8::listing::{fmt_columns, fmt_desc, fmt_listing};
use redstone8::{encode_program, Assembler, ProgramConfig};

#[test]
fn listing_pairs_words_with_source() {
    let cfg = ProgramConfig {
        keep_listing: true,
        ..ProgramConfig::default()
    };
    let p = Assembler::new(cfg).assemble("li $0 3\n\nbrn -9   # loop\n").unwrap();
    let expected = "\
01000110  li $0 3

01110111  brn -9   # loop
";
    assert_eq!(fmt_listing(p.listing()), expected);
}

#[test]
fn columns_draw_one_row_per_bit() {
    let p = encode_program("li $0 3\njmp 10\nhlt\n").unwrap();
    // 01000110 / 10001010 / 00000000, read top to bottom
    let expected = "\
_ X _
X _ _
_ _ _
_ _ _
_ X _
X _ _
X X _
_ _ _
";
    assert_eq!(fmt_columns(&p, 16), expected);
}

#[test]
fn columns_start_a_new_section_per_storage_unit() {
    let p = encode_program("sec\nsec\nsec\n").unwrap();
    let section_of_two = "_ _\n_ _\n_ _\n_ _\n_ _\nX X\nX X\nX X\n";
    let section_of_one = "_\n_\n_\n_\n_\nX\nX\nX\n";
    assert_eq!(
        fmt_columns(&p, 2),
        format!("{section_of_two}\n{section_of_one}")
    );
}

#[test]
fn empty_program_draws_nothing() {
    let p = encode_program("\n\n").unwrap();
    assert_eq!(fmt_columns(&p, 16), "");
}

#[test]
fn table_rows_flag_reserved_entries() {
    assert_eq!(fmt_desc(lookup("add").unwrap()), "add    alu      001000sd");
    assert_eq!(fmt_desc(lookup("mul").unwrap()), "mul    alu      000011sd (reserved)");
}
