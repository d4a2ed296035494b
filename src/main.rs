use std::fs;

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use southscript::interpreter::{session::Interpreter, value::core::ValueKind};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// southscript runs SouthScript programs, a small expression language with a
/// southern drawl.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells southscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of the program once it has run.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Only install these built-in functions (comma separated).
    #[arg(long, value_delimiter = ',')]
    builtins: Option<Vec<String>>,

    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The program, or with `--file` the path of a script. Starts an
    /// interactive session when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let interpreter = match &args.builtins {
        Some(names) => {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            Interpreter::with_builtins(&names).unwrap_or_else(|e| {
                                                  eprintln!("{e}");
                                                  std::process::exit(1);
                                              })
        },
        None => Interpreter::new(),
    };

    let Some(contents) = args.contents else {
        run_repl(&interpreter);
        return;
    };

    let (source_name, script) = if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });
        (contents, script)
    } else {
        ("<stdin>".to_string(), contents)
    };

    match interpreter.run(&source_name, &script) {
        Ok(Some(value)) if args.pipe_mode => println!("{value}"),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Installs the log subscriber; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "southscript=debug",
        _ => "southscript=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(true)
                             .init();
}

/// Reads programs line by line until Ctrl-C or Ctrl-D.
///
/// Lists are not echoed, so loops run for their side effects stay quiet.
fn run_repl(interpreter: &Interpreter) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            std::process::exit(1);
        },
    };

    loop {
        match rl.readline("SouthScript > ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match interpreter.run("<stdin>", &line) {
                    Ok(Some(value)) if !matches!(value.kind, ValueKind::List(_)) => {
                        println!("{value}");
                    },
                    Ok(_) => {},
                    Err(e) => println!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Quittin'");
                break;
            },
            Err(err) => {
                error!(%err, "failed to read line");
                break;
            },
        }
    }
}
