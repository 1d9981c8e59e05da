use std::{fmt, str::FromStr};

use crate::fraction::{Fraction, FractionError};

/// Parses `"<integer>/<integer>"`, substituting `0/1` after reporting any error.
pub fn parse_fraction(token: &str) -> Fraction {
  match try_parse_fraction(token) {
    Ok(fraction) => fraction,
    Err(err) => {
      log::error!("{err}");
      Fraction::sentinel()
    }
  }
}

pub fn try_parse_fraction(token: &str) -> Result<Fraction, ParserError> {
  let (numerator, denominator) = token
    .split_once('/')
    .ok_or_else(|| ParserError::MissingSeparator(token.to_string()))?;
  let numerator = parse_integer(numerator)?;
  let denominator = parse_integer(denominator)?;
  Ok(Fraction::try_new(numerator, denominator)?)
}

fn parse_integer(text: &str) -> Result<i64, ParserError> {
  text
    .trim()
    .parse::<i64>()
    .map_err(|_| ParserError::InvalidInteger(text.to_string()))
}

impl FromStr for Fraction {
  type Err = ParserError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    try_parse_fraction(s)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
  MissingSeparator(String),
  InvalidInteger(String),
  Fraction(FractionError),
}

impl fmt::Display for ParserError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParserError::MissingSeparator(token) => {
        write!(f, "Invalid fraction format. (expected a/b, found '{token}')")
      }
      ParserError::InvalidInteger(text) => {
        write!(f, "Invalid fraction format. ('{text}' is not an integer)")
      }
      ParserError::Fraction(err) => write!(f, "{err}"),
    }
  }
}

impl std::error::Error for ParserError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ParserError::Fraction(err) => Some(err),
      _ => None,
    }
  }
}

impl From<FractionError> for ParserError {
  fn from(err: FractionError) -> Self {
    ParserError::Fraction(err)
  }
}
