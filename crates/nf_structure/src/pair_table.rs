use std::ops::Deref;
use std::convert::TryFrom;

use crate::StructureError;
use crate::{DotBracket, DotBracketVec};
use crate::PairList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(pub Vec<Option<usize>>);

impl Deref for PairTable {
    type Target = [Option<usize>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let db = DotBracketVec::try_from(s)?;
        PairTable::try_from(&db)
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stack: Vec<usize> = Vec::new();
        let mut table = vec![None; db.len()];

        for (i, dot) in db.iter().enumerate() {
            match dot {
                DotBracket::Open => stack.push(i),
                DotBracket::Close => {
                    let j = stack.pop().ok_or(StructureError::UnmatchedClose(i))?;
                    table[i] = Some(j);
                    table[j] = Some(i);
                }
                DotBracket::Unpaired => {}
            }
        }

        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }

        Ok(PairTable(table))
    }
}

impl TryFrom<&PairList> for PairTable {
    type Error = StructureError;

    fn try_from(pl: &PairList) -> Result<Self, Self::Error> {
        let n = pl.length();
        let mut table = vec![None; n];

        for pair in pl.iter() {
            let (i, j) = (pair.i(), pair.j());
            if i >= j || j >= n {
                return Err(StructureError::InvalidPair(i, j));
            }
            for k in [i, j] {
                if table[k].is_some() {
                    return Err(StructureError::ConflictingPair(k));
                }
            }
            table[i] = Some(j);
            table[j] = Some(i);
        }

        // Every closing position must match the innermost open pair.
        let mut stack: Vec<(usize, usize)> = Vec::new();
        for (k, &partner) in table.iter().enumerate() {
            match partner {
                Some(l) if l > k => stack.push((k, l)),
                Some(l) => {
                    let (oi, oj) = stack.pop().ok_or(StructureError::UnmatchedClose(k))?;
                    if oi != l {
                        return Err(StructureError::CrossingPair((oi, oj), (l, k)));
                    }
                }
                None => (),
            }
        }

        Ok(PairTable(table))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pair;

    #[test]
    fn test_valid_pair_table() {
        let pt = PairTable::try_from("((..))").unwrap();
        assert_eq!(pt.len(), 6);
        assert_eq!(pt[0], Some(5));
        assert_eq!(pt[1], Some(4));
        assert_eq!(pt[2], None);
        assert_eq!(pt[3], None);
        assert_eq!(pt[4], Some(1));
        assert_eq!(pt[5], Some(0));
    }

    #[test]
    fn test_unmatched_open() {
        let err = PairTable::try_from("(()").unwrap_err();
        assert_eq!(format!("{}", err), "Unmatched '(' at position 0");
    }

    #[test]
    fn test_unmatched_close() {
        let err = PairTable::try_from("())").unwrap_err();
        assert_eq!(format!("{}", err), "Unmatched ')' at position 2");
    }

    #[test]
    fn test_invalid_token() {
        let err = PairTable::try_from("(x)").unwrap_err();
        assert_eq!(format!("{}", err), "Invalid character 'x' in dot-bracket at position 1");
    }

    #[test]
    fn test_from_pair_list() {
        let mut pl = PairList::new(7);
        pl.push(Pair::new(0, 6));
        pl.push(Pair::new(2, 4));
        let pt = PairTable::try_from(&pl).unwrap();
        assert_eq!(pt, PairTable::try_from("(.(.).)").unwrap());
    }

    #[test]
    fn test_from_pair_list_conflict() {
        let mut pl = PairList::new(6);
        pl.push(Pair::new(0, 5));
        pl.push(Pair::new(1, 5));
        let err = PairTable::try_from(&pl).unwrap_err();
        assert!(matches!(err, StructureError::ConflictingPair(5)));
    }

    #[test]
    fn test_from_pair_list_crossing() {
        let mut pl = PairList::new(6);
        pl.push(Pair::new(0, 3));
        pl.push(Pair::new(1, 5));
        let err = PairTable::try_from(&pl).unwrap_err();
        assert!(matches!(err, StructureError::CrossingPair((1, 5), (0, 3))));
        assert_eq!(format!("{}", err), "Base pairs (1, 5) and (0, 3) are crossing");
    }
}
