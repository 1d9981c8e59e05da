use std::fmt;

use crate::{
  fraction::Fraction,
  parser::parse_fraction,
  tokenizer::{tokenize, Operator},
};

/// One evaluated line, keeping the operand text as it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
  pub left: String,
  pub operator: Operator,
  pub right: String,
  pub result: Fraction,
}

impl Evaluation {
  /// The `<fracA> <op> <fracB>` part, without the result.
  pub fn expression(&self) -> String {
    format!("{} {} {}", self.left, self.operator, self.right)
  }
}

impl fmt::Display for Evaluation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} = {}", self.expression(), self.result)
  }
}

/// Evaluates every non-blank line of `input`.
pub fn evaluate(input: &str) -> Vec<Result<Evaluation, ExtendedEvaluationError>> {
  let mut evaluations = vec![];
  for (index, line) in input.lines().enumerate() {
    match evaluate_line(line) {
      Ok(Some(evaluation)) => evaluations.push(Ok(evaluation)),
      Ok(None) => {}
      Err(err) => evaluations.push(Err(ExtendedEvaluationError::LocatedEvaluationError(
        err,
        index + 1,
      ))),
    }
  }
  evaluations
}

/// Evaluates a single `<fracA> <op> <fracB>` line. Blank lines give `Ok(None)`.
pub fn evaluate_line(line: &str) -> Result<Option<Evaluation>, EvaluationError> {
  let Some(statement) = tokenize(line) else {
    return Ok(None);
  };
  let operator = Operator::from_symbol(statement.operator)
    .ok_or_else(|| EvaluationError::UnknownOperator(statement.operator.to_string()))?;
  let left = parse_fraction(statement.left);
  let right = parse_fraction(statement.right);
  let result = apply(operator, left, right);
  log::debug!("{left} {operator} {right} => {result}");
  Ok(Some(Evaluation {
    left: statement.left.to_string(),
    operator,
    right: statement.right.to_string(),
    result,
  }))
}

pub fn apply(operator: Operator, left: Fraction, right: Fraction) -> Fraction {
  match operator {
    Operator::Add => left + right,
    Operator::Subtract => left - right,
    Operator::Multiply => left * right,
    Operator::Divide => left / right,
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
  UnknownOperator(String),
}

impl fmt::Display for EvaluationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EvaluationError::UnknownOperator(symbol) => write!(f, "Unknown operator '{symbol}'."),
    }
  }
}

impl std::error::Error for EvaluationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendedEvaluationError {
  LocatedEvaluationError(EvaluationError, usize),
}

impl fmt::Display for ExtendedEvaluationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ExtendedEvaluationError::LocatedEvaluationError(err, line) => {
        write!(f, "line {line}: {err}")
      }
    }
  }
}

impl std::error::Error for ExtendedEvaluationError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ExtendedEvaluationError::LocatedEvaluationError(err, _) => Some(err),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_logger::captured_errors;

  fn result_of(line: &str) -> String {
    evaluate_line(line)
      .expect("line should evaluate")
      .expect("line should not be blank")
      .to_string()
  }

  #[test]
  fn scenario_lines() {
    assert_eq!(result_of("1/2 + 1/3"), "1/2 + 1/3 = 5/6");
    assert_eq!(result_of("2/4 - 1/4"), "2/4 - 1/4 = 1/4");
    assert_eq!(result_of("3/5 * 2/3"), "3/5 * 2/3 = 2/5");
    assert_eq!(result_of("1/2 / 0/3"), "1/2 / 0/3 = 0/1");
  }

  #[test]
  fn division_by_zero_line_prints_diagnostic() {
    let (line, errors) = captured_errors(|| result_of("1/2 / 0/3"));
    assert_eq!(line, "1/2 / 0/3 = 0/1");
    assert_eq!(errors, vec!["Division by zero.".to_string()]);
  }

  #[test]
  fn unknown_operator_parses_no_operands() {
    let (evaluated, errors) = captured_errors(|| evaluate_line("1/x % 5/0"));
    assert!(evaluated.is_err());
    assert!(errors.is_empty(), "{errors:?}");
  }

  #[test]
  fn operands_are_echoed_unreduced() {
    assert_eq!(result_of("6/8 * 1/1"), "6/8 * 1/1 = 3/4");
  }

  #[test]
  fn malformed_operand_counts_as_zero() {
    assert_eq!(result_of("1/2 + 3"), "1/2 + 3 = 1/2");
    assert_eq!(result_of("5/0 + 1/4"), "5/0 + 1/4 = 1/4");
  }

  #[test]
  fn unknown_operator_is_skipped() {
    assert_eq!(
      evaluate_line("1/2 % 1/3"),
      Err(EvaluationError::UnknownOperator("%".to_string()))
    );
    assert_eq!(
      evaluate_line("1/2"),
      Err(EvaluationError::UnknownOperator("".to_string()))
    );
  }

  #[test]
  fn blank_line_evaluates_to_nothing() {
    assert_eq!(evaluate_line("   "), Ok(None));
  }

  #[test]
  fn whole_input_locates_errors() {
    let input = "1/2 + 1/3\n\n1/2 % 1/3\n3/5 * 2/3\n";
    let results = evaluate(input);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().result, Fraction::new(5, 6));
    assert_eq!(
      results[1],
      Err(ExtendedEvaluationError::LocatedEvaluationError(
        EvaluationError::UnknownOperator("%".to_string()),
        3
      ))
    );
    assert_eq!(results[2].as_ref().unwrap().to_string(), "3/5 * 2/3 = 2/5");
  }

  #[test]
  fn apply_dispatches_each_operator() {
    let a = Fraction::new(1, 2);
    let b = Fraction::new(1, 4);
    assert_eq!(apply(Operator::Add, a, b), Fraction::new(3, 4));
    assert_eq!(apply(Operator::Subtract, a, b), Fraction::new(1, 4));
    assert_eq!(apply(Operator::Multiply, a, b), Fraction::new(1, 8));
    assert_eq!(apply(Operator::Divide, a, b), Fraction::new(2, 1));
  }
}
