//! `maps-diff`: print the channel update between two map-object snapshots.
//!
//! Usage:
//!   maps-diff <kind> <previous.json> <current.json> [--diff] [--no-check-duplicates]
//!
//! Each file holds a JSON array of objects of `<kind>` (`markers`, `polygons`,
//! `polylines`, `circles` or `tileOverlays`) in the channel wire format. The
//! update payload is printed to stdout; `{}` means nothing changed.
//! Set `RUST_LOG=maps_object_updates=debug` to see what the differ did.

use std::io::{self, Write};

use maps_object_updates::cli::{run, DiffArgs};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = DiffArgs::parse(&args).and_then(|args| run(&args));
    let payload = match result {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let text = match serde_json::to_string_pretty(&payload) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{text}") {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
