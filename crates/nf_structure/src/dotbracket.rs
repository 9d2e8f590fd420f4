use std::fmt;
use std::ops::Deref;
use std::convert::TryFrom;

use crate::PairList;
use crate::PairTable;
use crate::StructureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired, // '.'
    Open,     // '('
    Close,    // ')'
}

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            _ => Err(StructureError::InvalidToken(format!("character '{}'", c), "dot-bracket".into(), 0)),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Open => '(',
            DotBracket::Close => ')',
            DotBracket::Unpaired => '.',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    /// Number of opening brackets, i.e. base pairs if balanced.
    pub fn count_open(&self) -> usize {
        self.0.iter().filter(|&&db| db == DotBracket::Open).count()
    }

    pub fn count_close(&self) -> usize {
        self.0.iter().filter(|&&db| db == DotBracket::Close).count()
    }
}

impl Deref for DotBracketVec {
    type Target = [DotBracket];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match DotBracket::try_from(c) {
                Ok(db) => vec.push(db),
                Err(StructureError::InvalidToken(tok, src, _)) => {
                    return Err(StructureError::InvalidToken(tok, src, i));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(DotBracketVec(vec))
    }
}

impl From<&PairTable> for DotBracketVec {
    fn from(pt: &PairTable) -> Self {
        let result = pt.iter().enumerate()
            .map(|(i, &j_opt)| match j_opt {
                None => DotBracket::Unpaired,
                Some(j) if j > i => DotBracket::Open,
                Some(j) if j < i => DotBracket::Close,
                Some(_) => unreachable!("PairTable construction prevents self-pairing! ({})", i),
            })
            .collect();
        DotBracketVec(result)
    }
}

impl From<&PairList> for DotBracketVec {
    fn from(pl: &PairList) -> Self {
        let mut result = vec![DotBracket::Unpaired; pl.length()];
        for pair in pl.iter() {
            result[pair.i()] = DotBracket::Open;
            result[pair.j()] = DotBracket::Close;
        }
        DotBracketVec(result)
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for db in &self.0 {
            write!(f, "{}", char::from(*db))?;
        }
        Ok(())
    }
}
