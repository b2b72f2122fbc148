// Copyright (c) 2021 Thomas J. Otterson
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! `pla-table`, a command-line front end to the PLA truth table.
//!
//! The tool reports results on stdout and errors on stderr, and nothing else. It installs
//! no `log` backend, so the library's log records are dropped here; programs that embed
//! the library and want them install their own logger.

use std::{
    env,
    ffi::OsString,
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
    process,
};

use c64_pla::{
    chips::ic82s100::{input_pin, output_pin},
    evaluate, Input, InputVector, Output, TableError, TruthTable,
};

const USAGE_TEXT: &str = "\
Usage: pla-table <command> [options]

Commands:
  dump [-o <file>]  Write the 64k truth table (default file: pla.bin)
  verify <file>     Check a truth table file against the PLA equations
  eval <input>      Evaluate one input vector ($hex, 0xhex, or decimal)

Options:
  -o, --output <file>  Output file path for dump
  -h, --help           Show this help message
";

const DEFAULT_OUTPUT: &str = "pla.bin";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Dump { output: PathBuf },
    Verify { input: PathBuf },
    Eval { input: InputVector },
    Help,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<Command, String> {
    let first = args.next().ok_or_else(|| "missing command".to_string())?;
    if first == "--help" || first == "-h" {
        return Ok(Command::Help);
    }

    match &*first.to_string_lossy() {
        "dump" => parse_dump_args(args),
        "verify" => {
            let input = single_operand(args, "table path")?;
            Ok(Command::Verify {
                input: PathBuf::from(input),
            })
        }
        "eval" => {
            let input = single_operand(args, "input vector")?;
            let value = parse_value(&input.to_string_lossy())?;
            Ok(Command::Eval {
                input: InputVector::new(value),
            })
        }
        other => Err(format!("unknown command: {}", other)),
    }
}

fn parse_dump_args(mut args: impl Iterator<Item = OsString>) -> Result<Command, String> {
    let mut output = None;

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Ok(Command::Help);
        }
        if arg == "-o" || arg == "--output" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for -o".to_string())?;
            output = Some(PathBuf::from(value));
            continue;
        }
        return Err(format!("unexpected argument: {}", arg.to_string_lossy()));
    }

    Ok(Command::Dump {
        output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    })
}

fn single_operand(
    args: impl Iterator<Item = OsString>,
    what: &str,
) -> Result<OsString, String> {
    let mut operand = None;
    for arg in args {
        if arg.to_string_lossy().starts_with('-') && arg.len() > 1 {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }
        if operand.is_some() {
            return Err(format!("more than one {} provided", what));
        }
        operand = Some(arg);
    }
    operand.ok_or_else(|| format!("missing {}", what))
}

fn parse_value(text: &str) -> Result<u16, String> {
    let parsed = if let Some(hex) = text.strip_prefix('$') {
        u16::from_str_radix(hex, 16)
    } else if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        u16::from_str_radix(hex, 16)
    } else {
        text.parse::<u16>()
    };
    parsed.map_err(|e| format!("invalid input vector '{}': {}", text, e))
}

fn run_dump(output: PathBuf) -> Result<(), TableError> {
    let table = TruthTable::generate();
    let mut writer = BufWriter::new(File::create(&output)?);
    table.write_to(&mut writer)?;
    println!(
        "Wrote {} entries to {} (checksum {:08x})",
        table.as_bytes().len(),
        output.display(),
        table.checksum()
    );
    Ok(())
}

fn run_verify(input: PathBuf) -> Result<(), TableError> {
    let mut reader = BufReader::new(File::open(&input)?);
    let table = TruthTable::read_from(&mut reader)?;
    table.verify()?;
    println!(
        "{} matches the PLA equations (checksum {:08x})",
        input.display(),
        table.checksum()
    );
    Ok(())
}

fn run_eval(input: InputVector) {
    let output = evaluate(input);

    println!("input  {} (${:04x})", input, input.value());
    for signal in Input::ALL.iter() {
        println!(
            "  {:<8} pin {:>2}  {}",
            signal_label(signal.name(), signal.active_low()),
            input_pin(*signal),
            input.level(*signal) as u8
        );
    }

    println!("output {} (${:02x})", output, output.value());
    for signal in Output::ALL.iter() {
        println!(
            "  {:<8} pin {:>2}  {}",
            signal_label(signal.name(), true),
            output_pin(*signal),
            output.level(*signal) as u8
        );
    }

    let devices = output.devices();
    if devices.is_empty() {
        println!("selected: none");
    } else {
        let names = devices
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<String>>();
        println!("selected: {}", names.join(", "));
    }
}

fn signal_label(name: &str, active_low: bool) -> String {
    if active_low {
        format!("/{}", name)
    } else {
        name.to_string()
    }
}

fn main() {
    let command = match parse_args(env::args_os().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            eprint!("{}", USAGE_TEXT);
            process::exit(2);
        }
    };

    let result = match command {
        Command::Help => {
            print!("{}", USAGE_TEXT);
            Ok(())
        }
        Command::Dump { output } => run_dump(output),
        Command::Verify { input } => run_verify(input),
        Command::Eval { input } => {
            run_eval(input);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = OsString> {
        list.iter()
            .map(OsString::from)
            .collect::<Vec<OsString>>()
            .into_iter()
    }

    #[test]
    fn dump_defaults_output() {
        assert_eq!(
            parse_args(args(&["dump"])),
            Ok(Command::Dump {
                output: PathBuf::from("pla.bin")
            })
        );
        assert_eq!(
            parse_args(args(&["dump", "-o", "out.bin"])),
            Ok(Command::Dump {
                output: PathBuf::from("out.bin")
            })
        );
    }

    #[test]
    fn eval_accepts_radix_prefixes() {
        let expected = Ok(Command::Eval {
            input: InputVector::new(0x3aae),
        });
        assert_eq!(parse_args(args(&["eval", "$3aae"])), expected);
        assert_eq!(parse_args(args(&["eval", "0x3AAE"])), expected);
        assert_eq!(parse_args(args(&["eval", "15022"])), expected);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["frobnicate"])).is_err());
        assert!(parse_args(args(&["verify"])).is_err());
        assert!(parse_args(args(&["verify", "a", "b"])).is_err());
        assert!(parse_args(args(&["eval", "$10000"])).is_err());
        assert!(parse_args(args(&["dump", "-o"])).is_err());
    }

    #[test]
    fn help() {
        assert_eq!(parse_args(args(&["-h"])), Ok(Command::Help));
        assert_eq!(parse_args(args(&["dump", "--help"])), Ok(Command::Help));
    }
}
