// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
// ---------------------------------------------------------------------------
//! This module reads the body of a textual `.nl` file.
//!
//! Link to [parent module](super)
//!
//! The body is a sequence of segments, each introduced by a one letter
//! tag. The reader models the `C` segments (constraint bodies in
//! prefix form) and the `x` segment (variable initial values); every
//! other segment (`r` , `b` , `k` , `J` , `G` , `O` , ...) is skipped,
//! since bounds and the linear parts of constraints are outside this
//! crate's scope.
// ---------------------------------------------------------------------------
// use
use std::io::BufRead;
use std::str::FromStr;
//
use crate::Error;
use crate::IndexT;
use crate::expr::Node;
use crate::nl::header::{
    N_HEADER_LINE,
    NlHeader,
};
use crate::nl::opcode::op_from_code;
use crate::variable::VarTable;
// ---------------------------------------------------------------------------
//
// NlModel
/// A model read from an `.nl` file: the header counts, the variable
/// table with initial values, and one expression tree per constraint
/// body.
#[derive(Clone, Debug)]
pub struct NlModel {
    pub header      : NlHeader,
    pub variables   : VarTable,
    pub constraints : Vec<Node>,
}
// ---------------------------------------------------------------------------
//
// LineSource
/// Lines of the input with a running line number for diagnostics.
struct LineSource<R: BufRead> {
    lines   : std::io::Lines<R>,
    line_no : usize,
}
//
impl<R: BufRead> LineSource<R> {
    //
    fn new(input: R) -> Self {
        Self{ lines : input.lines(), line_no : 0 }
    }
    //
    // next_line
    fn next_line(&mut self) -> Result< Option<String>, Error > {
        match self.lines.next() {
            None       => Ok(None),
            Some(line) => {
                self.line_no += 1;
                Ok( Some(line?) )
            }
        }
    }
    //
    // expect_line
    fn expect_line(&mut self, context: &str) -> Result<String, Error> {
        self.next_line()?.ok_or_else( || Error::parse( format!(
            "unexpected end of file {context}",
        )))
    }
}
// ---------------------------------------------------------------------------
//
// read_model
/// Read an `.nl` file from disk; see [read_from] .
pub fn read_model<P>(path: P) -> Result<NlModel, Error>
where
    P : AsRef<std::path::Path>,
{
    let file = std::fs::File::open(path)?;
    read_from( std::io::BufReader::new(file) )
}
//
// read_from
/// Read a textual `.nl` model: the ten line header, then one segment
/// at a time. Every constraint declared by the header must have a `C`
/// segment.
pub fn read_from<R: BufRead>(input: R) -> Result<NlModel, Error> {
    let mut source = LineSource::new(input);
    //
    // header
    let mut header_lines = Vec::with_capacity(N_HEADER_LINE);
    for _ in 0 .. N_HEADER_LINE {
        header_lines.push( source.expect_line("inside the header")? );
    }
    let header = NlHeader::parse(&header_lines)?;
    log::debug!(
        "nl header: {} variable(s), {} constraint(s), {} objective(s)",
        header.nvar, header.ncon, header.nobj,
    );
    //
    // variables, constraints
    let mut variables   = VarTable::new(header.nvar);
    let mut constraints : Vec< Option<Node> > = Vec::new();
    constraints.resize_with(header.ncon, || None);
    //
    while let Some(line) = source.next_line()? {
        match line.chars().next() {
            //
            // constraint body in prefix form
            Some('C') => {
                let cidx : usize = tag_value(&line, source.line_no)?;
                if cidx >= header.ncon {
                    return Err( Error::parse( format!(
                        "line {}: constraint index {cidx} out of bounds \
                         for {} constraint(s)",
                        source.line_no, header.ncon,
                    )));
                }
                let expr = read_expr(&mut source, header.nvar)?;
                constraints[cidx] = Some(expr);
            }
            //
            // variable initial values
            Some('x') => {
                let count : usize = tag_value(&line, source.line_no)?;
                for _ in 0 .. count {
                    let line = source.expect_line(
                        "inside the variable value segment",
                    )?;
                    let mut tokens = line.split_whitespace();
                    let vidx : usize =
                        token_value(tokens.next(), &line, source.line_no)?;
                    let value : f64 =
                        token_value(tokens.next(), &line, source.line_no)?;
                    if vidx >= header.nvar {
                        return Err( Error::parse( format!(
                            "line {}: variable index {vidx} out of bounds \
                             for {} variable(s)",
                            source.line_no, header.nvar,
                        )));
                    }
                    variables.set_value(vidx as IndexT, value);
                }
            }
            //
            // segment this reader does not model
            _ => (),
        }
    }
    //
    let constraints = constraints
        .into_iter()
        .enumerate()
        .map( |(i, expr)| expr.ok_or_else( || Error::parse( format!(
            "no C segment for constraint {i}",
        ))))
        .collect::< Result< Vec<Node>, Error > >()?;
    //
    log::debug!(
        "read nl model with {} constraint bodies", constraints.len(),
    );
    Ok( NlModel{ header, variables, constraints } )
}
// ---------------------------------------------------------------------------
//
// read_expr
/// One expression in `.nl` prefix form: an `o` line introduces an
/// operator and is followed by its arguments, a `v` line is a variable
/// reference, and an `n` line a constant. N-ary operators appear in
/// their binary `.nl` form here and become n-ary capable nodes.
fn read_expr<R: BufRead>(
    source : &mut LineSource<R> ,
    nvar   : usize              ,
) -> Result<Node, Error> {
    let line = source.expect_line("inside an expression")?;
    match line.chars().next() {
        Some('n') => {
            let value : f64 = tag_value(&line, source.line_no)?;
            Ok( Node::constant(value) )
        }
        Some('v') => {
            let vidx : usize = tag_value(&line, source.line_no)?;
            if vidx >= nvar {
                return Err( Error::parse( format!(
                    "line {}: variable index {vidx} out of bounds \
                     for {} variable(s)", source.line_no, nvar,
                )));
            }
            Ok( Node::var(vidx as IndexT) )
        }
        Some('o') => {
            let code : usize = tag_value(&line, source.line_no)?;
            let op    = op_from_code(code)?;
            let nargs = op.arity().nl_nargs();
            let mut args = Vec::with_capacity(nargs);
            for _ in 0 .. nargs {
                args.push( read_expr(source, nvar)? );
            }
            Node::operator(op, args)
        }
        _ => Err( Error::parse( format!(
            "line {}: unexpected expression line {:?}",
            source.line_no, line,
        ))),
    }
}
// ---------------------------------------------------------------------------
//
// tag_value
/// Parse the value following a one letter segment tag; e.g. the 3 of
/// `x3` or the 2.5 of `n2.5` .
fn tag_value<T: FromStr>(line: &str, line_no: usize) -> Result<T, Error> {
    let token = line[1 ..].split_whitespace().next().unwrap_or("");
    token.parse().map_err( |_| Error::parse( format!(
        "line {line_no}: cannot parse {token:?} in segment line {line:?}",
    )))
}
//
// token_value
/// Parse one whitespace separated token of a data line.
fn token_value<T: FromStr>(
    token   : Option<&str> ,
    line    : &str         ,
    line_no : usize        ,
) -> Result<T, Error> {
    let token = token.ok_or_else( || Error::parse( format!(
        "line {line_no}: missing value in data line {line:?}",
    )))?;
    token.parse().map_err( |_| Error::parse( format!(
        "line {line_no}: cannot parse {token:?} in data line {line:?}",
    )))
}
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    //
    const SAMPLE: &str = "\
g3 0 1 0\t# problem sample
 2 1 1 0 0
 1 1
 0 0
 2 0 0
 0 0 0 1
 0 0 0 0 0
 2 2
 0 0
 0 0 0 0 0
C0
o0
o5
v0
n2
o41
v1
x2
0 1.5
1 -0.5
";
    //
    #[test]
    fn read_sample() {
        let model = read_from( SAMPLE.as_bytes() ).unwrap();
        assert_eq!( model.header.nvar, 2 );
        assert_eq!( model.header.ncon, 1 );
        assert_eq!( model.variables.value(0),  1.5 );
        assert_eq!( model.variables.value(1), -0.5 );
        assert_eq!(
            model.constraints[0].to_string(),
            "((v0 ^ 2.000) + sin(v1))",
        );
    }
    //
    #[test]
    fn missing_constraint() {
        // header declares one constraint and the body has no C segment
        let text = SAMPLE.replace("C0", "S0");
        let result = read_from( text.as_bytes() );
        assert!( matches!( result, Err( Error::Parse(_) ) ) );
    }
    //
    #[test]
    fn unsupported_opcode() {
        // o4 is rem, which has no operator kind
        let text = SAMPLE.replace("o5", "o4");
        let result = read_from( text.as_bytes() );
        assert!( matches!(
            result, Err( Error::UnsupportedOperator(4) )
        ));
    }
}
