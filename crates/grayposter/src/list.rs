//! Parsing of user-typed numbers: `"10,80,150"` lists and level counts.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::{Levels, PosterizeError, Result};

/// Comma-separated list of intensities in 0-255.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueList(Vec<u8>);

impl ValueList {
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl FromStr for ValueList {
    type Err = PosterizeError;

    fn from_str(s: &str) -> Result<Self> {
        s.split(',').map(parse_intensity).collect::<Result<Vec<_>>>().map(ValueList)
    }
}

impl Deref for ValueList {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

fn parse_integer(item: &str) -> Result<i64> {
    let item = item.trim();
    item.parse::<i64>()
        .map_err(|_| PosterizeError::InvalidNumber(item.to_string()))
}

fn parse_intensity(item: &str) -> Result<u8> {
    let n = parse_integer(item)?;
    u8::try_from(n).map_err(|_| PosterizeError::ValueOutOfRange(n))
}

/// Parse a level count such as `"4"`.
pub fn parse_levels(s: &str) -> Result<Levels> {
    let n = parse_integer(s)?;
    let count = u16::try_from(n).map_err(|_| PosterizeError::InvalidLevels(n))?;
    Levels::new(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let list: ValueList = "10,80,150,200,255".parse().unwrap();
        assert_eq!(&*list, &[10, 80, 150, 200, 255]);
        assert_eq!(list.to_string(), "10,80,150,200,255");
    }

    #[test]
    fn test_parse_list_whitespace() {
        let list: ValueList = " 1, 2 ,3 ".parse().unwrap();
        assert_eq!(list.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_list_errors() {
        assert!(matches!(
            "".parse::<ValueList>(),
            Err(PosterizeError::InvalidNumber(_))
        ));
        assert!(matches!(
            "1,,2".parse::<ValueList>(),
            Err(PosterizeError::InvalidNumber(_))
        ));
        assert!(matches!(
            "1,abc".parse::<ValueList>(),
            Err(PosterizeError::InvalidNumber(s)) if s == "abc"
        ));
        assert!(matches!(
            "1,256".parse::<ValueList>(),
            Err(PosterizeError::ValueOutOfRange(256))
        ));
        assert!(matches!(
            "-1".parse::<ValueList>(),
            Err(PosterizeError::ValueOutOfRange(-1))
        ));
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!(parse_levels(" 3 ").unwrap().count(), 3);
        assert!(matches!(
            parse_levels("three"),
            Err(PosterizeError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_levels("1"),
            Err(PosterizeError::InvalidLevels(1))
        ));
        assert!(matches!(
            parse_levels("70000"),
            Err(PosterizeError::InvalidLevels(70000))
        ));
        assert!(matches!(
            parse_levels("-4"),
            Err(PosterizeError::InvalidLevels(-4))
        ));
    }
}
