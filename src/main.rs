use std::{
  io::{self, BufRead, Write},
  process::ExitCode,
};

use clap::Parser;
use log::error;

use loxcc::vm::{InterpretResult, VM};

/// A single-pass bytecode compiler and stack VM for a small expression
/// language: arithmetic, comparison, boolean and nil values.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Source file to run. With no path, starts a REPL.
  path: Option<String>,

  /// Print chunk disassembly and a stack trace before each instruction.
  #[arg(short, long)]
  trace: bool,
}

fn main() -> ExitCode {
  let args = match Args::try_parse() {
    Ok(args) => args,
    Err(err) => {
      let _ = err.print();
      return ExitCode::from(64);
    }
  };

  let vm = VM::new(args.trace);

  match args.path.as_deref() {
    Some(path) => run_file(vm, path),
    None => run_repl(vm),
  }
}

fn run_file(mut vm: VM, path: &str) -> ExitCode {
  match std::fs::read_to_string(path) {
    Ok(source) => match vm.interpret(&source) {
      InterpretResult::Ok => ExitCode::SUCCESS,
      InterpretResult::CompileError => ExitCode::from(65),
      InterpretResult::RuntimeError => ExitCode::from(70),
    },
    Err(err) => {
      error!("failed to read {}: {}", path, err);
      ExitCode::from(74)
    }
  }
}

fn run_repl(mut vm: VM) -> ExitCode {
  print!("> ");
  let _ = io::stdout().flush();

  let stdin = io::stdin();
  for line in stdin.lock().lines() {
    let line = match line {
      Ok(line) => line,
      Err(_) => break,
    };
    vm.interpret(&line);
    print!("> ");
    let _ = io::stdout().flush();
  }

  ExitCode::SUCCESS
}
