use colored::Colorize;
use std::{env, io::Write, process::ExitCode};

mod evaluator;
mod fraction;
mod parser;
#[cfg(test)]
mod test_logger;
mod tokenizer;

/// Read when no path is given and the file exists in the working directory.
const DEFAULT_INPUT: &str = "input.txt";

#[derive(Debug, PartialEq, Eq)]
enum Mode {
  Repl,
  File(String),
  Usage,
}

fn select_mode(args: &[String], default_input_exists: bool) -> Mode {
  match args.len() {
    1 if default_input_exists => Mode::File(DEFAULT_INPUT.to_string()),
    1 => Mode::Repl,
    2 => Mode::File(args[1].clone()),
    _ => Mode::Usage,
  }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
  env_logger::init();
  let args: Vec<String> = env::args().collect();
  let default_input_exists = std::path::Path::new(DEFAULT_INPUT).is_file();
  match select_mode(&args, default_input_exists) {
    Mode::Repl => {
      repl()?;
      Ok(ExitCode::SUCCESS)
    }
    Mode::File(path) => run_file(&path),
    Mode::Usage => {
      eprintln!("Usage: fraction-calc [input-file]");
      Ok(ExitCode::from(2))
    }
  }
}

fn repl() -> Result<(), Box<dyn std::error::Error>> {
  println!("Welcome to the fraction calculator!");
  println!("Currently running in REPL mode.");
  println!("To run a file, pass the file path as the first argument,");
  println!("or start from a directory containing '{DEFAULT_INPUT}'.");
  println!("Example: fraction-calc ./demos/input.txt");
  println!("Enter one operation per line, e.g. '1/2 + 1/3'.");
  println!("To exit, type 'exit' or 'quit'.\n");
  let mut execution_count = 1;
  loop {
    print!("{} >>> ", execution_count);
    std::io::stdout().flush()?;
    let mut input = String::new();
    if std::io::stdin().read_line(&mut input)? == 0 {
      println!();
      break;
    }
    let input = input.trim();
    if input == "exit" || input == "quit" {
      println!("Goodbye!");
      break;
    }
    match evaluator::evaluate_line(input) {
      Ok(Some(evaluation)) => {
        let result = evaluation.result.to_string().bold();
        println!("{execution_count}: {result}");
        execution_count += 1;
      }
      Ok(None) => {}
      Err(err) => log::error!("{err}"),
    }
  }
  Ok(())
}

fn run_file(path: &str) -> Result<ExitCode, Box<dyn std::error::Error>> {
  let path = std::path::Path::new(path);
  let input = match std::fs::read_to_string(path) {
    Ok(input) => input,
    Err(err) => {
      log::error!("Could not open input file '{}': {}", path.display(), err);
      return Ok(ExitCode::FAILURE);
    }
  };
  let mut stdout = std::io::stdout().lock();
  for evaluated in evaluator::evaluate(&input) {
    match evaluated {
      Ok(evaluation) => {
        let expression = evaluation.expression().italic();
        let result = evaluation.result.to_string().bold();
        writeln!(stdout, "{expression} = {result}")?;
      }
      Err(err) => log::error!("{err}"),
    }
  }
  Ok(ExitCode::SUCCESS)
}
