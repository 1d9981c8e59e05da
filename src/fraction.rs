use std::{
  fmt,
  ops::{Add, Div, Mul, Sub},
};

use num::{One, Zero};

/// A rational number kept in lowest terms with a positive denominator.
///
/// Arithmetic happens in `i64` and wraps on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
  numerator: i64,
  denominator: i64,
}

/// Euclid's algorithm on signed values. The sign of the result follows the
/// last non-zero remainder, `reduce` fixes it up afterwards.
fn gcd(mut a: i64, mut b: i64) -> i64 {
  while b != 0 {
    let temp = b;
    b = a.wrapping_rem(b);
    a = temp;
  }
  a
}

fn lcm(a: i64, b: i64) -> i64 {
  a.wrapping_mul(b).wrapping_div(gcd(a, b))
}

impl Fraction {
  /// Builds a reduced fraction. A zero denominator is reported and replaced
  /// by `0/1`.
  pub fn new(numerator: i64, denominator: i64) -> Self {
    match Self::try_new(numerator, denominator) {
      Ok(fraction) => fraction,
      Err(err) => {
        log::error!("{err}");
        Self::sentinel()
      }
    }
  }

  pub fn try_new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
    if denominator == 0 {
      return Err(FractionError::ZeroDenominator);
    }
    let mut fraction = Self {
      numerator,
      denominator,
    };
    fraction.reduce();
    // `i64::MIN` has no positive counterpart.
    if fraction.denominator < 0 {
      return Err(FractionError::DenominatorOverflow);
    }
    Ok(fraction)
  }

  /// The value substituted for failed operations.
  pub fn sentinel() -> Self {
    Self::zero()
  }

  #[cfg(test)]
  pub fn numerator(&self) -> i64 {
    self.numerator
  }

  #[cfg(test)]
  pub fn denominator(&self) -> i64 {
    self.denominator
  }

  /// Division that refuses a zero divisor instead of substituting `0/1`.
  pub fn checked_div(self, rhs: Self) -> Result<Self, FractionError> {
    if rhs.is_zero() {
      return Err(FractionError::DivisionByZero);
    }
    Ok(Self::new(
      self.numerator.wrapping_mul(rhs.denominator),
      self.denominator.wrapping_mul(rhs.numerator),
    ))
  }

  fn reduce(&mut self) {
    let g = gcd(self.numerator, self.denominator);
    self.numerator = self.numerator.wrapping_div(g);
    self.denominator = self.denominator.wrapping_div(g);
    if self.denominator < 0 {
      self.numerator = self.numerator.wrapping_neg();
      self.denominator = self.denominator.wrapping_neg();
    }
    log::trace!("reduced by {g} to {self}");
  }

  // Shared by `+` and `-`: bring both numerators onto the common denominator.
  fn scaled_numerators(&self, other: &Self) -> (i64, i64, i64) {
    let common = lcm(self.denominator, other.denominator);
    let left = self
      .numerator
      .wrapping_mul(common.wrapping_div(self.denominator));
    let right = other
      .numerator
      .wrapping_mul(common.wrapping_div(other.denominator));
    (left, right, common)
  }
}

impl Default for Fraction {
  fn default() -> Self {
    Self::sentinel()
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numerator, self.denominator)
  }
}

impl Add for Fraction {
  type Output = Fraction;

  fn add(self, rhs: Self) -> Self::Output {
    let (left, right, common) = self.scaled_numerators(&rhs);
    Fraction::new(left.wrapping_add(right), common)
  }
}

impl Sub for Fraction {
  type Output = Fraction;

  fn sub(self, rhs: Self) -> Self::Output {
    let (left, right, common) = self.scaled_numerators(&rhs);
    Fraction::new(left.wrapping_sub(right), common)
  }
}

impl Mul for Fraction {
  type Output = Fraction;

  fn mul(self, rhs: Self) -> Self::Output {
    Fraction::new(
      self.numerator.wrapping_mul(rhs.numerator),
      self.denominator.wrapping_mul(rhs.denominator),
    )
  }
}

impl Div for Fraction {
  type Output = Fraction;

  fn div(self, rhs: Self) -> Self::Output {
    match self.checked_div(rhs) {
      Ok(quotient) => quotient,
      Err(err) => {
        log::error!("{err}");
        Fraction::sentinel()
      }
    }
  }
}

impl Zero for Fraction {
  fn zero() -> Self {
    Self {
      numerator: 0,
      denominator: 1,
    }
  }

  fn is_zero(&self) -> bool {
    self.numerator == 0
  }
}

impl One for Fraction {
  fn one() -> Self {
    Self {
      numerator: 1,
      denominator: 1,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
  ZeroDenominator,
  DenominatorOverflow,
  DivisionByZero,
}

impl fmt::Display for FractionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FractionError::ZeroDenominator => write!(f, "Denominator cannot be zero."),
      FractionError::DenominatorOverflow => {
        write!(f, "Denominator cannot be made positive in 64 bits.")
      }
      FractionError::DivisionByZero => write!(f, "Division by zero."),
    }
  }
}

impl std::error::Error for FractionError {}
