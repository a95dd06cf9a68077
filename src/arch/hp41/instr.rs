//! Instruction enumeration and decoding

use crate::analysis::Result;
use crate::arch::hp41::glyph::{self, APPEND};
use crate::arch::hp41::{xrom, Operand, Target};
use crate::input;
use crate::memory::walker::{self, Location};
use crate::memory::MemoryImage;
use serde::Serialize;
use std::fmt;

/// Single byte functions in the `0x40`-`0x8F` range.
static FIXED_ROWS: [&str; 80] = [
    // 0x40
    "+", "-", "*", "/", "X<Y?", "X>Y?", "X<=Y?", "Σ+", "Σ-", "HMS+", "HMS-", "MOD", "%", "%CH",
    "P-R", "R-P",
    // 0x50
    "LN", "X^2", "SQRT", "Y^X", "CHS", "E^X", "LOG", "10^X", "E^X-1", "SIN", "COS", "TAN",
    "ASIN", "ACOS", "ATAN", "DEC",
    // 0x60
    "1/X", "ABS", "FACT", "X≠0?", "X>0?", "LN1+X", "X<0?", "X=0?", "INT", "FRC", "D-R", "R-D",
    "HMS", "HR", "RND", "OCT",
    // 0x70
    "CLΣ", "X<>Y", "PI", "CLST", "R^", "RDN", "LASTX", "CLX", "X=Y?", "X≠Y?", "SIGN", "X<=0?",
    "MEAN", "SDEV", "AVIEW", "CLD",
    // 0x80
    "DEG", "RAD", "GRAD", "ENTER^", "STOP", "RTN", "BEEP", "CLA", "ASHF", "PSE", "CLRG", "AOFF",
    "AON", "OFF", "PROMPT", "ADV",
];

/// Two byte register operations in the `0x90`-`0x9B` range.
static REGISTER_OPS: [&str; 12] = [
    "RCL", "STO", "ST+", "ST-", "ST*", "ST/", "ISG", "DSE", "VIEW", "ΣREG", "ASTO", "ARCL",
];

/// Two byte display format operations in the `0x9C`-`0x9F` range.
static DISPLAY_OPS: [&str; 4] = ["FIX", "SCI", "ENG", "TONE"];

/// Two byte flag operations in the `0xA8`-`0xAD` range.
static FLAG_OPS: [&str; 6] = ["SF", "CF", "FS?C", "FC?C", "FS?", "FC?"];

/// The global branch forms that take an inline name.
static GLOBAL_REFS: [&str; 3] = ["GTO", "XEQ", "W"];

/// A global label, as found in program memory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Label {
    /// The label's name, with calculator glyphs translated.
    pub name: String,

    /// The keycode the label is assigned to, if any.
    pub key: Option<u8>,
}

/// The decoding shape of an opcode byte.
///
/// Every byte belongs to exactly one class, and each class has exactly one
/// way of consuming its operand bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpcodeClass {
    /// `LBL 00` through `LBL 14`.
    ShortLabel,

    /// Digit entry, which continues until the next non-digit byte.
    Digit,

    /// Single byte functions with no operand.
    Fixed,

    /// `GTO"`, `XEQ"` and `W"` followed by an inline name.
    GlobalRef,

    /// `RCL 00` through `RCL 15`.
    ShortRecall,

    /// `STO 00` through `STO 15`.
    ShortStore,

    RegisterOp,
    DisplayFormat,
    Xrom,
    FlagOp,
    IndirectBranch,

    /// Two byte `GTO 00` through `GTO 14`, plus the reserved `0xB0` which
    /// has the same shape.
    ShortGoto,

    /// Global labels and ends.
    GlobalMarker,

    Exchange,
    LongLabel,
    LongGoto,
    LongExecute,
    Text,
    Unknown,
}

impl OpcodeClass {
    pub fn of(opcode: u8) -> Self {
        match opcode {
            0x01..=0x0F => OpcodeClass::ShortLabel,
            0x10..=0x1A => OpcodeClass::Digit,
            0x1B | 0x1C | 0x40..=0x8F => OpcodeClass::Fixed,
            0x1D..=0x1F => OpcodeClass::GlobalRef,
            0x20..=0x2F => OpcodeClass::ShortRecall,
            0x30..=0x3F => OpcodeClass::ShortStore,
            0x90..=0x9B => OpcodeClass::RegisterOp,
            0x9C..=0x9F => OpcodeClass::DisplayFormat,
            0xA0..=0xA7 => OpcodeClass::Xrom,
            0xA8..=0xAD => OpcodeClass::FlagOp,
            0xAE => OpcodeClass::IndirectBranch,
            0xB0..=0xBF => OpcodeClass::ShortGoto,
            0xC0..=0xCD => OpcodeClass::GlobalMarker,
            0xCE => OpcodeClass::Exchange,
            0xCF => OpcodeClass::LongLabel,
            0xD0..=0xDF => OpcodeClass::LongGoto,
            0xE0..=0xEF => OpcodeClass::LongExecute,
            0xF0..=0xFF => OpcodeClass::Text,
            0x00 | 0xAF => OpcodeClass::Unknown,
        }
    }
}

/// A decoded HP-41 instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Instruction {
    /// An opcode that does not start any known instruction. `0xB0` still
    /// consumes a postfix byte; `0x00` and `0xAF` stand alone.
    Unknown(u8),

    /// A single byte function such as `RTN` or `+`.
    Fixed(&'static str),

    /// `LBL nn` in its single byte form.
    ShortLabel(u8),

    /// A run of digit entry bytes, e.g. `3.14`.
    Number(String),

    /// `GTO "name"`, `XEQ "name"` or `W "name"`.
    GlobalRef(&'static str, String),

    /// `RCL nn` in its single byte form.
    ShortRecall(u8),

    /// `STO nn` in its single byte form.
    ShortStore(u8),

    /// A two byte register operation such as `STO IND X`.
    RegisterOp(&'static str, Operand),

    /// `FIX`, `SCI`, `ENG` or `TONE` with its digit.
    DisplayFormat(&'static str, u8),

    /// A call into an extension module.
    Xrom { module: u8, function: u8 },

    /// A flag set, clear or test.
    FlagOp(&'static str, Operand),

    /// `GTO IND` or `XEQ IND`.
    ///
    /// The high bit of the postfix picks `GTO` or `XEQ`, so the target is
    /// always classified with that bit set and renders as an indirect
    /// operand: `AE 05` is `GTO IND 05`, never a direct `GTO 05`.
    IndirectBranch(&'static str, Operand),

    /// `GTO nn` in its two byte form.
    ShortGoto(u8),

    /// A global label.
    Label(Label),

    /// The end of a program.
    End,

    /// The end of program memory.
    FinalEnd,

    /// `X<> operand`
    Exchange(Operand),

    /// `LBL` in its two byte form.
    LongLabel(Target),

    /// `GTO` in its three byte form.
    Goto(Target),

    /// `XEQ` in its three byte form.
    Execute(Target),

    /// A text line. `append` is set when it starts with the append glyph.
    Text { append: bool, text: String },
}

/// An instruction together with where it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub instruction: Instruction,

    /// The raw bytes of the instruction, in program order.
    pub bytes: Vec<u8>,

    /// Where the instruction starts.
    pub location: Location,

    /// Where the next instruction starts.
    pub next: Location,
}

impl Decoded {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The raw bytes as an uppercase hex string.
    pub fn hex(&self) -> String {
        input::format_hex(&self.bytes)
    }
}

impl Instruction {
    /// Decode the instruction at `location`.
    ///
    /// Decoding never fails on a valid location; bytes that do not form an
    /// instruction come back as `Instruction::Unknown`. Only reads outside of
    /// the image, or walks below its bottom, are errors.
    pub fn decode(image: &MemoryImage, location: Location) -> Result<Decoded> {
        let opcode = image.byte(location)?;
        let mut bytes = vec![opcode];
        let mut next = walker::next(location)?;

        // Reads one more byte of the instruction, advancing `next`.
        macro_rules! operand_byte {
            () => {{
                let b = image.byte(next)?;
                bytes.push(b);
                next = walker::next(next)?;
                b
            }};
        }

        let instruction = match OpcodeClass::of(opcode) {
            OpcodeClass::Unknown => Instruction::Unknown(opcode),
            OpcodeClass::ShortLabel => Instruction::ShortLabel(opcode - 0x01),
            OpcodeClass::ShortRecall => Instruction::ShortRecall(opcode - 0x20),
            OpcodeClass::ShortStore => Instruction::ShortStore(opcode - 0x30),
            OpcodeClass::Fixed => Instruction::Fixed(match opcode {
                0x1B => "EEX",
                0x1C => "NEG",
                _ => FIXED_ROWS[(opcode - 0x40) as usize],
            }),
            OpcodeClass::Digit => {
                let mut number = String::new();
                number.push(digit(opcode));

                loop {
                    let b = image.byte(next)?;
                    if OpcodeClass::of(b) != OpcodeClass::Digit {
                        break;
                    }

                    number.push(digit(b));
                    bytes.push(b);
                    next = walker::next(next)?;
                }

                Instruction::Number(number)
            }
            OpcodeClass::GlobalRef => {
                let header = image.byte(next)?;

                if header < 0xF0 {
                    Instruction::Unknown(opcode)
                } else {
                    bytes.push(header);
                    let (name, after) =
                        image.read_run(walker::next(next)?, (header - 0xF0) as usize)?;
                    next = after;
                    bytes.extend_from_slice(&name);

                    Instruction::GlobalRef(
                        GLOBAL_REFS[(opcode - 0x1D) as usize],
                        glyph::translate(&name),
                    )
                }
            }
            OpcodeClass::RegisterOp => Instruction::RegisterOp(
                REGISTER_OPS[(opcode - 0x90) as usize],
                Operand::classify(operand_byte!()),
            ),
            OpcodeClass::DisplayFormat => {
                Instruction::DisplayFormat(DISPLAY_OPS[(opcode - 0x9C) as usize], operand_byte!())
            }
            OpcodeClass::Xrom => {
                let low = operand_byte!();

                Instruction::Xrom {
                    module: ((opcode - 0xA0) << 2) | (low >> 6),
                    function: low & 0x3F,
                }
            }
            OpcodeClass::FlagOp => Instruction::FlagOp(
                FLAG_OPS[(opcode - 0xA8) as usize],
                Operand::classify(operand_byte!()),
            ),
            OpcodeClass::IndirectBranch => {
                let postfix = operand_byte!();
                let mnemonic = if postfix < 0x80 { "GTO" } else { "XEQ" };

                Instruction::IndirectBranch(mnemonic, Operand::classify(postfix | 0x80))
            }
            OpcodeClass::ShortGoto => {
                operand_byte!();

                match opcode {
                    0xB0 => Instruction::Unknown(opcode),
                    _ => Instruction::ShortGoto(opcode - 0xB1),
                }
            }
            OpcodeClass::Exchange => Instruction::Exchange(Operand::classify(operand_byte!())),
            OpcodeClass::LongLabel => Instruction::LongLabel(Target::classify(operand_byte!())),
            OpcodeClass::LongGoto => {
                operand_byte!();
                Instruction::Goto(Target::classify(operand_byte!()))
            }
            OpcodeClass::LongExecute => {
                operand_byte!();
                Instruction::Execute(Target::classify(operand_byte!()))
            }
            OpcodeClass::GlobalMarker => {
                operand_byte!();
                let kind = operand_byte!();

                if kind >= 0xF0 {
                    let (field, after) = image.read_run(next, (kind - 0xF0) as usize)?;
                    next = after;
                    bytes.extend_from_slice(&field);

                    let (key, name) = match field.split_first() {
                        Some((key, name)) => ((*key != 0).then(|| *key), name),
                        None => (None, &field[..]),
                    };

                    Instruction::Label(Label {
                        name: glyph::translate(name),
                        key,
                    })
                } else if kind & 0x20 != 0 {
                    Instruction::FinalEnd
                } else {
                    Instruction::End
                }
            }
            OpcodeClass::Text => {
                let (text, after) = image.read_run(next, (opcode - 0xF0) as usize)?;
                next = after;
                bytes.extend_from_slice(&text);

                match text.split_first() {
                    Some((&APPEND, rest)) => Instruction::Text {
                        append: true,
                        text: glyph::translate(rest),
                    },
                    _ => Instruction::Text {
                        append: false,
                        text: glyph::translate(&text),
                    },
                }
            }
        };

        Ok(Decoded {
            instruction,
            bytes,
            location,
            next,
        })
    }

    /// Whether this instruction ends a program.
    pub fn is_end(&self) -> bool {
        matches!(self, Instruction::End | Instruction::FinalEnd)
    }
}

/// The character a digit entry byte stands for.
fn digit(opcode: u8) -> char {
    match opcode {
        0x1A => '.',
        _ => char::from(b'0' + (opcode - 0x10)),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Unknown(b) => write!(f, "??({:02X})", b),
            Instruction::Fixed(m) => write!(f, "{}", m),
            Instruction::ShortLabel(n) => write!(f, "LBL {:02}", n),
            Instruction::Number(n) => write!(f, "{}", n),
            Instruction::GlobalRef(m, name) => write!(f, "{} \"{}\"", m, name),
            Instruction::ShortRecall(n) => write!(f, "RCL {:02}", n),
            Instruction::ShortStore(n) => write!(f, "STO {:02}", n),
            Instruction::RegisterOp(m, op) => write!(f, "{} {}", m, op),
            Instruction::DisplayFormat(m, d) => write!(f, "{} {}", m, d),
            Instruction::Xrom { module, function } => match xrom::lookup(*module, *function) {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "XROM {:02},{:02}", module, function),
            },
            Instruction::FlagOp(m, op) => write!(f, "{} {}", m, op),
            Instruction::IndirectBranch(m, op) => write!(f, "{} {}", m, op),
            Instruction::ShortGoto(n) => write!(f, "GTO {:02}", n),
            Instruction::Label(label) => write!(f, "LBL \"{}\"", label.name),
            Instruction::End => write!(f, "END"),
            Instruction::FinalEnd => write!(f, ".END."),
            Instruction::Exchange(op) => write!(f, "X<> {}", op),
            Instruction::LongLabel(t) => write!(f, "LBL {}", t),
            Instruction::Goto(t) => write!(f, "GTO {}", t),
            Instruction::Execute(t) => write!(f, "XEQ {}", t),
            Instruction::Text { append: true, text } => write!(f, "⊢\"{}\"", text),
            Instruction::Text { append: false, text } => write!(f, "\"{}\"", text),
        }
    }
}
