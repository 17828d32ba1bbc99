// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! Read an `.nl` model and print the sparse Jacobian of its
//! constraint bodies at the initial point.
//!
//! ```text
//!     nl_jac <file.nl> [--forward | --reverse]
//! ```
//!
//! Reverse mode is the default. Set `RUST_LOG=debug` for reader and
//! facade diagnostics.
// ---------------------------------------------------------------------------
// use
use nlad::{
    Error,
    Mode,
    diff::diff_row,
    evaluate,
    jacobian,
    read_model,
};
// ---------------------------------------------------------------------------
//
// main
fn main() {
    env_logger::init();
    //
    let args : Vec<String> = std::env::args().collect();
    let mut path : Option<&str> = None;
    let mut mode = Mode::Reverse;
    for arg in args[1 ..].iter() {
        match arg.as_str() {
            "--forward" => mode = Mode::Forward,
            "--reverse" => mode = Mode::Reverse,
            _           => path = Some(arg),
        }
    }
    let Some(path) = path else {
        eprintln!("No file provided. Please provide an nl file.");
        eprintln!("usage: nl_jac <file.nl> [--forward | --reverse]");
        std::process::exit(1);
    };
    //
    if let Err(e) = run(path, mode) {
        eprintln!("nl_jac: {e}");
        std::process::exit(1);
    }
}
//
// run
fn run(path: &str, mode: Mode) -> Result<(), Error> {
    let model = read_model(path)?;
    let nvar  = model.variables.len();
    let ncon  = model.constraints.len();
    //
    println!("{path} has {nvar} variables");
    println!("{path} has {ncon} constraints");
    //
    for variable in model.variables.iter() {
        println!(
            "Variable {:2}: value = {}", variable.index, variable.value,
        );
    }
    for (i, body) in model.constraints.iter().enumerate() {
        println!("Constraint {i:2}: body = {body}");
    }
    for (i, body) in model.constraints.iter().enumerate() {
        let value = evaluate(body, &model.variables);
        println!("Constraint {i:2}: value = {value}");
    }
    //
    for (i, body) in model.constraints.iter().enumerate() {
        let row = diff_row(body, &model.variables, mode)?;
        println!("Constraint {i} derivative:");
        println!("{row}");
    }
    //
    let jac = jacobian(&model.constraints, &model.variables, mode)?;
    println!("Constraint Jacobian:");
    println!("{jac}");
    //
    Ok(())
}
