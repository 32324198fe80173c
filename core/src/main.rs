use std::{env, process};

use math::gauss;
use polyrec_core::{input::Document, points, report, system, verify, Result};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            println!("Usage: polyrec <input.json>");
            return;
        }
    };

    if let Err(err) = run(&path) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(path: &str) -> Result<()> {
    let doc = Document::from_path(path)?;
    let selection = points::select(&doc)?;
    let (matrix, rhs) = system::assemble(selection.selected())?;
    let coeffs = gauss::solve(matrix, rhs)?;

    print!("{}", report::render(&coeffs));

    for inconsistency in verify::cross_validate(&coeffs, selection.spare()) {
        eprintln!("warning: {inconsistency}");
    }

    Ok(())
}
