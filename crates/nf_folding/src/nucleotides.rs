use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

/// Shorter sequences are rejected by the validator.
pub const MIN_SEQUENCE_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    InvalidLength(String, usize),         // normalized input and its length
    InvalidAlphabet(String, char, usize), // normalized input, offending char and position
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidLength(s, n) => {
                write!(f, "Invalid length: '{}' has {} nucleotides, at least {} are required",
                    s, n, MIN_SEQUENCE_LENGTH)
            }
            SequenceError::InvalidAlphabet(s, c, i) => {
                write!(f, "Invalid nucleotide '{}' at position {} in '{}' (use A, C, G, U)",
                    c, i, s)
            }
        }
    }
}

impl std::error::Error for SequenceError {}


#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U }
pub const BCOUNT: usize = 4; // 4 Base variants for tables.

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' => Ok(Base::U),
            _ => Err(SequenceError::InvalidAlphabet(c.to_string(), c, 0)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        };
        write!(f, "{}", c)
    }
}


/// A validated RNA sequence.
#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct NucleotideVec(Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for NucleotideVec {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    /// Uppercases the input, then checks the length before the alphabet.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let normalized = s.to_uppercase();
        let length = normalized.chars().count();
        if length < MIN_SEQUENCE_LENGTH {
            return Err(SequenceError::InvalidLength(normalized, length));
        }

        let mut vec = Vec::with_capacity(length);
        for (i, c) in normalized.chars().enumerate() {
            match Base::try_from(c) {
                Ok(base) => vec.push(base),
                Err(_) => {
                    return Err(SequenceError::InvalidAlphabet(normalized.clone(), c, i));
                }
            }
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

const PAIR_LOOKUP: [[PairTypeRNA; BCOUNT]; BCOUNT] = {
    use Base::*;
    use PairTypeRNA::*;
    let mut table = [[NN; BCOUNT]; BCOUNT];
    table[A as usize][U as usize] = AU;
    table[U as usize][A as usize] = UA;
    table[C as usize][G as usize] = CG;
    table[G as usize][C as usize] = GC;
    table[G as usize][U as usize] = GU;
    table[U as usize][G as usize] = UG;
    table
};

/// The pair formed by (5' base, 3' base). Order matters: the lookup
/// lists both orientations of every allowed pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairTypeRNA { AU, UA, CG, GC, GU, UG, NN }

impl From<(Base, Base)> for PairTypeRNA {
    fn from(pair: (Base, Base)) -> Self {
        PAIR_LOOKUP[pair.0 as usize][pair.1 as usize]
    }
}

impl fmt::Display for PairTypeRNA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PairTypeRNA::AU => "A-U",
            PairTypeRNA::UA => "U-A",
            PairTypeRNA::CG => "C-G",
            PairTypeRNA::GC => "G-C",
            PairTypeRNA::GU => "G-U",
            PairTypeRNA::UG => "U-G",
            PairTypeRNA::NN => "N-N",
        };
        write!(f, "{}", s)
    }
}

impl PairTypeRNA {
    pub fn can_pair(&self) -> bool {
       self != &PairTypeRNA::NN
    }
}
