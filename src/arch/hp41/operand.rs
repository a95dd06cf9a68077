//! Operand encodings shared by register, flag and branch instructions.

use serde::Serialize;
use std::fmt;

/// Stack and extended register names, indexed from postfix 112.
static STACK_LETTERS: [&str; 16] = [
    "T", "Z", "Y", "X", "L", "M", "N", "O", "P", "Q", "⊢", "a", "b", "c", "d", "e",
];

/// Local alpha label names, indexed from postfix 102.
static LABEL_LETTERS: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// The operand of a two-byte register, flag or indirect branch instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Operand {
    /// A numbered register or flag, e.g. `STO 05`.
    Direct(u8),

    /// A stack register, e.g. `STO X`.
    Stack(&'static str),

    /// A numbered register whose contents name the real target.
    Indirect(u8),

    /// A stack register whose contents name the real target.
    IndirectStack(&'static str),
}

impl Operand {
    /// Classify an operand byte.
    pub fn classify(postfix: u8) -> Self {
        match postfix {
            0..=111 => Operand::Direct(postfix),
            112..=127 => Operand::Stack(STACK_LETTERS[(postfix - 112) as usize]),
            128..=239 => Operand::Indirect(postfix - 128),
            240..=255 => Operand::IndirectStack(STACK_LETTERS[(postfix - 240) as usize]),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Direct(n) => write!(f, "{:02}", n),
            Operand::Stack(s) => write!(f, "{}", s),
            Operand::Indirect(n) => write!(f, "IND {:02}", n),
            Operand::IndirectStack(s) => write!(f, "IND {}", s),
        }
    }
}

/// The target of a local label or local branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Target {
    /// A numbered label, e.g. `LBL 01`.
    Number(u8),

    /// A lettered label, e.g. `LBL A` or `LBL a`.
    Letter(&'static str),

    /// An indirect target, only valid for branches.
    Operand(Operand),
}

impl Target {
    /// Classify a label postfix byte.
    ///
    /// Keyable labels are `00`-`99`, then `A`-`J` from 102. Postfixes 100 and
    /// 101 cannot be keyed in but do appear in hand-made code, and are shown
    /// as the three digit numbers they encode.
    pub fn classify(postfix: u8) -> Self {
        match postfix {
            0..=101 => Target::Number(postfix),
            102..=111 => Target::Letter(LABEL_LETTERS[(postfix - 102) as usize]),
            112..=127 => Target::Letter(STACK_LETTERS[(postfix - 112) as usize]),
            128..=255 => Target::Operand(Operand::classify(postfix)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Number(n) => write!(f, "{:02}", n),
            Target::Letter(s) => write!(f, "{}", s),
            Target::Operand(op) => write!(f, "{}", op),
        }
    }
}
