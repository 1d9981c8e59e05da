/// The three whitespace separated tokens of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
  pub left: &'a str,
  pub operator: &'a str,
  pub right: &'a str,
}

/// Splits `<fracA> <op> <fracB>`. Missing tokens come back empty, extra ones
/// are dropped. Blank lines give `None`.
pub fn tokenize(line: &str) -> Option<Statement<'_>> {
  let mut tokens = line.split_whitespace();
  let left = tokens.next()?;
  let operator = tokens.next().unwrap_or("");
  let right = tokens.next().unwrap_or("");
  Some(Statement {
    left,
    operator,
    right,
  })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

impl Operator {
  pub fn from_symbol(symbol: &str) -> Option<Operator> {
    match symbol {
      "+" => Some(Operator::Add),
      "-" => Some(Operator::Subtract),
      "*" => Some(Operator::Multiply),
      "/" => Some(Operator::Divide),
      _ => None,
    }
  }
}

impl std::fmt::Display for Operator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Operator::Add => write!(f, "+"),
      Operator::Subtract => write!(f, "-"),
      Operator::Multiply => write!(f, "*"),
      Operator::Divide => write!(f, "/"),
    }
  }
}
