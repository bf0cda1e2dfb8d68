use std::{fmt, str::FromStr};

use bitvec::vec::BitVec;

use crate::error::{LinecodeError, LinecodeResult};

/// A non-empty sequence of bits, kept in the order they were entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitString(BitVec<u32>);

impl BitString {
    pub fn parse(text: &str) -> LinecodeResult<Self> {
        if text.is_empty() {
            return Err(LinecodeError::EmptyInput);
        }
        let mut bits = BitVec::with_capacity(text.len());
        for (position, symbol) in text.chars().enumerate() {
            match symbol {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(LinecodeError::InvalidInput { symbol, position }),
            }
        }
        Ok(Self(bits))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }
}

impl FromStr for BitString {
    type Err = LinecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::BitString;
    use crate::error::LinecodeError;

    #[test]
    fn test_parse_keeps_entry_order() {
        let bits = BitString::parse("1101").unwrap();
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![true, true, false, true]);
        assert_eq!(bits.to_string(), "1101");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(BitString::parse(""), Err(LinecodeError::EmptyInput));
    }

    #[test]
    fn test_parse_reports_first_bad_symbol() {
        assert_eq!(
            "10a2".parse::<BitString>(),
            Err(LinecodeError::InvalidInput {
                symbol: 'a',
                position: 2
            })
        );
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(matches!(
            BitString::parse("10 1"),
            Err(LinecodeError::InvalidInput { symbol: ' ', .. })
        ));
    }
}
