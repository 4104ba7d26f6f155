//! `json-pointer` — read or set a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer '<pointer>' [generation]
//!   json-pointer set '<pointer>' '<json-value>'
//!
//! The document is read from stdin. Set `RUST_LOG=debug` to trace `set`.

use json_pointer_resolver::cli::Command;
use std::io::{self, Read, Write};

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match command.run(buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = stdout
                .write_all(result.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
            {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
