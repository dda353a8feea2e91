use crate::field::FieldKind;

/// Bits in one instruction word.
pub const WORD_BITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `00 xxxx s d`, two registers.
    Alu,
    /// `00 xxxxx d`, destination register only.
    Unary,
    /// `00000 xxx`, no operands.
    Control,
    /// `0111 nnnn`, backward branch.
    Branch,
    /// `0110 bb ii`, conditional skip.
    Skip,
    /// `010 nnnn d`, load immediate.
    LoadImm,
    /// `10 aaaaaa`, absolute jump.
    Jump,
    /// `11 x aaaa d`, RAM load/store.
    Memory,
}

/// A variable part of a template, filled from operand `operand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub kind: FieldKind,
    pub operand: usize,
}

/// Encoding template of one mnemonic. `fixed` holds the high-order bits,
/// `slots` follow it from high to low.
#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub family: Family,
    pub fixed: &'static str,
    pub slots: &'static [Slot],
    pub implemented: bool,
}

impl InstrDesc {
    /// Number of source operands the mnemonic takes.
    pub fn arity(&self) -> usize {
        self.slots.iter().map(|s| s.operand + 1).max().unwrap_or(0)
    }

    /// Fixed bits plus slot widths; 8 for every table entry.
    pub fn width(&self) -> usize {
        self.fixed.len()
            + self
                .slots
                .iter()
                .map(|s| s.kind.width() as usize)
                .sum::<usize>()
    }

    pub fn fixed_bits(&self) -> u16 {
        self.fixed
            .bytes()
            .fold(0, |acc, b| (acc << 1) | u16::from(b == b'1'))
    }

    /// Bit layout with slot letters, e.g. `001000sd` or `0111nnnn`.
    pub fn template(&self) -> String {
        let mut out = String::from(self.fixed);
        for slot in self.slots {
            let c = match slot.kind {
                FieldKind::Register if slot.operand == 0 => 'd',
                FieldKind::Register => 's',
                FieldKind::Unsigned(_) | FieldKind::Branch => 'n',
                FieldKind::Skip => 'i',
            };
            out.extend(std::iter::repeat(c).take(slot.kind.width() as usize));
        }
        out
    }
}

const fn reg(operand: usize) -> Slot {
    Slot {
        kind: FieldKind::Register,
        operand,
    }
}

const NONE: &[Slot] = &[];
// `op $d $s`: source bit sits above destination bit
const DST_SRC: &[Slot] = &[reg(1), reg(0)];
const DST: &[Slot] = &[reg(0)];
const BACK: &[Slot] = &[Slot {
    kind: FieldKind::Branch,
    operand: 0,
}];
const COUNT: &[Slot] = &[Slot {
    kind: FieldKind::Skip,
    operand: 0,
}];
const DST_NIBBLE: &[Slot] = &[
    Slot {
        kind: FieldKind::Unsigned(4),
        operand: 1,
    },
    reg(0),
];
const TARGET: &[Slot] = &[Slot {
    kind: FieldKind::Unsigned(6),
    operand: 0,
}];

const fn op(
    mnemonic: &'static str,
    family: Family,
    fixed: &'static str,
    slots: &'static [Slot],
) -> InstrDesc {
    InstrDesc {
        mnemonic,
        family,
        fixed,
        slots,
        implemented: true,
    }
}

// Reserved encodings: the hardware has no port or multiplier wiring yet.
const fn reserved(
    mnemonic: &'static str,
    family: Family,
    fixed: &'static str,
    slots: &'static [Slot],
) -> InstrDesc {
    InstrDesc {
        mnemonic,
        family,
        fixed,
        slots,
        implemented: false,
    }
}

pub const TABLE: &[InstrDesc] = &[
    op("add", Family::Alu, "001000", DST_SRC),
    op("adc", Family::Alu, "001001", DST_SRC),
    op("sub", Family::Alu, "001010", DST_SRC),
    op("subb", Family::Alu, "001011", DST_SRC),
    op("and", Family::Alu, "001100", DST_SRC),
    op("or", Family::Alu, "001101", DST_SRC),
    op("xor", Family::Alu, "001110", DST_SRC),
    op("not", Family::Alu, "001111", DST_SRC),
    op("asr", Family::Unary, "0001000", DST),
    op("asl", Family::Unary, "0001001", DST),
    op("ror", Family::Unary, "0001010", DST),
    op("rol", Family::Unary, "0001011", DST),
    op("inc", Family::Unary, "0001100", DST),
    op("dec", Family::Unary, "0001101", DST),
    reserved("inp", Family::Unary, "0001110", DST),
    reserved("out", Family::Unary, "0001111", DST),
    op("cmp", Family::Alu, "000010", DST_SRC),
    reserved("mul", Family::Alu, "000011", DST_SRC),
    op("cmb", Family::Unary, "0000010", DST),
    op("sec", Family::Control, "00000111", NONE),
    op("clc", Family::Control, "00000110", NONE),
    op("call", Family::Control, "00000011", NONE),
    op("ret", Family::Control, "00000010", NONE),
    op("wait", Family::Control, "00000001", NONE),
    op("hlt", Family::Control, "00000000", NONE),
    op("brn", Family::Branch, "0111", BACK),
    op("scs", Family::Skip, "011000", COUNT),
    op("scc", Family::Skip, "011001", COUNT),
    op("szs", Family::Skip, "011010", COUNT),
    op("szc", Family::Skip, "011011", COUNT),
    op("li", Family::LoadImm, "010", DST_NIBBLE),
    op("jmp", Family::Jump, "10", TARGET),
    op("ldr", Family::Memory, "110", DST_NIBBLE),
    op("str", Family::Memory, "111", DST_NIBBLE),
];

/// Alternate spellings, resolved to the table entry they name.
pub const ALIASES: &[(&str, &str)] = &[("cmd", "cmb")];

/// Case-insensitive mnemonic lookup, aliases included.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(mnemonic))
        .map_or(mnemonic, |&(_, target)| target);
    TABLE
        .iter()
        .find(|d| d.mnemonic.eq_ignore_ascii_case(name))
}
