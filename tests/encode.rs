use redstone8::{encode_line, EncodeError, Encoder, ErrorKind, Rs8Encoder, Word};

fn enc(line: &str) -> String {
    encode_line(line).unwrap().unwrap().to_string()
}

fn kind(line: &str) -> ErrorKind {
    encode_line(line).unwrap_err().kind()
}

#[test]
fn load_immediate_packs_value_then_register() {
    assert_eq!(enc("li $0 3"), "01000110");
    assert_eq!(enc("li $1 15"), "01011111");
    assert!(enc("li $0 3").starts_with("010"));
}

#[test]
fn jump_takes_six_bit_target() {
    assert_eq!(enc("jmp 10"), "10001010");
    assert_eq!(enc("jmp 0"), "10000000");
    assert_eq!(enc("jmp 63"), "10111111");
    assert_eq!(kind("jmp 64"), ErrorKind::OutOfRange);
}

#[test]
fn branch_back_is_biased() {
    assert_eq!(enc("brn -9"), "01110111");
    assert_eq!(enc("brn -16"), "01110000");
    assert_eq!(kind("brn 0"), ErrorKind::OutOfRange);
    assert_eq!(kind("brn 3"), ErrorKind::OutOfRange);
}

#[test]
fn register_pairs_put_source_above_destination() {
    assert_eq!(enc("add $0 $1"), "00100010");
    assert_eq!(enc("add $1 $0"), "00100001");
    assert_eq!(enc("sub $1 $1"), "00101011");
    assert_eq!(enc("subb $0 $0"), "00101100");
    assert_eq!(enc("xor $1 $0"), "00111001");
    assert_eq!(enc("cmp $0 $1"), "00001010");
}

#[test]
fn unary_ops_take_destination_only() {
    assert_eq!(enc("asr $1"), "00010001");
    assert_eq!(enc("asl $0"), "00010010");
    assert_eq!(enc("inc $1"), "00011001");
    assert_eq!(enc("dec $0"), "00011010");
    assert_eq!(enc("cmb $1"), "00000101");
}

#[test]
fn skips_pad_count_to_two_bits() {
    assert_eq!(enc("scs 1"), "01100001");
    assert_eq!(enc("scc 0"), "01100100");
    assert_eq!(enc("szs 2"), "01101010");
    assert_eq!(enc("szc 3"), "01101111");
    assert_eq!(kind("szc 4"), ErrorKind::OutOfRange);
}

#[test]
fn memory_ops_address_sixteen_bytes() {
    assert_eq!(enc("ldr $1 8"), "11010001");
    assert_eq!(enc("str $0 10"), "11110100");
    assert_eq!(kind("str $0 16"), ErrorKind::OutOfRange);
}

#[test]
fn zero_operand_ops_are_fixed_literals() {
    let cases = [
        ("hlt", "00000000"),
        ("wait", "00000001"),
        ("ret", "00000010"),
        ("call", "00000011"),
        ("clc", "00000110"),
        ("sec", "00000111"),
    ];
    let enc = Rs8Encoder::new();
    for (mn, bits) in cases {
        for _ in 0..3 {
            assert_eq!(enc.encode(mn).unwrap(), Some(bits.parse::<Word>().unwrap()), "{mn}");
        }
    }
}

#[test]
fn mnemonics_are_case_insensitive() {
    assert_eq!(enc("LI $0 3"), "01000110");
    assert_eq!(enc("Hlt"), "00000000");
    assert_eq!(enc("jMp 10"), "10001010");
}

#[test]
fn comments_and_padding_are_ignored() {
    assert_eq!(enc("li $0 3     # load three"), "01000110");
    assert_eq!(enc("  hlt  "), "00000000");
    assert_eq!(enc("brn -9 # jmp 5"), "01110111");
}

#[test]
fn blank_and_comment_lines_encode_to_nothing() {
    for line in ["", "   ", "# just a note", "\t"] {
        assert_eq!(encode_line(line).unwrap(), None, "{line:?}");
    }
}

#[test]
fn unknown_mnemonic_is_its_own_error() {
    let err = encode_line("foo").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownInstruction);
    assert_eq!(
        err,
        EncodeError::UnknownInstruction { mnemonic: "foo".into(), line: "foo".into() }
    );
}

#[test]
fn combine_accepts_both_spellings() {
    assert_eq!(enc("cmd $1"), "00000101");
    assert_eq!(enc("cmd $0"), enc("cmb $0"));
    assert_eq!(enc("CMD $1"), enc("cmb $1"));
}

#[test]
fn reserved_mnemonics_fail_not_implemented() {
    for line in ["inp $0", "out $1", "mul $0 $1", "MUL $1 $0"] {
        assert_eq!(kind(line), ErrorKind::NotImplemented, "{line}");
    }
    // reserved before operands are looked at
    assert_eq!(kind("mul"), ErrorKind::NotImplemented);
}

#[test]
fn operand_errors_name_the_operand_and_line() {
    let err = encode_line("add $0 $2").unwrap_err();
    match &err {
        EncodeError::Operand { index, line, source } => {
            assert_eq!(*index, 1);
            assert_eq!(line, "add $0 $2");
            assert_eq!(source.kind(), ErrorKind::InvalidOperand);
        }
        other => panic!("unexpected error {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("add $0 $2"), "{msg}");
    assert!(msg.contains("$2"), "{msg}");
}

#[test]
fn operand_count_must_match() {
    assert_eq!(kind("li $0"), ErrorKind::InvalidOperand);
    assert_eq!(kind("hlt $0"), ErrorKind::InvalidOperand);
    assert_eq!(kind("add $0 $1 $0"), ErrorKind::InvalidOperand);
    assert!(matches!(
        encode_line("jmp").unwrap_err(),
        EncodeError::OperandCount { expected: 1, found: 0, .. }
    ));
}
