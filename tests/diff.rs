// SPDX-License-Identifier: EPL-2.0 OR GPL-2.0-or-later
// SPDX-FileCopyrightText: Bradley M. Bell <bradbell@seanet.com>
// SPDX-FileContributor: 2026 Bradley M. Bell
//
// Derivative rows for a three variable model at
// x = v0 = 1.1, y = v1 = -2.2, z = v2 = 3.3 .
use nlad::{
    CsrMatrix,
    IndexT,
    Mode,
    Node,
    OpKind,
    VarTable,
    diff::diff_row,
    forward_diff_row,
    reverse_diff_row,
};
//
// var_table
fn var_table() -> VarTable {
    VarTable::from_values( vec![ 1.1, -2.2, 3.3 ] )
}
//
// row_pairs
/// The single row of a 1 x n matrix as (index, value) pairs sorted by
/// index; discovery order is an implementation detail the scenarios
/// do not depend on.
fn row_pairs(csr: &CsrMatrix) -> Vec<(IndexT, f64)> {
    assert_eq!( csr.nrow(), 1 );
    csr.check().unwrap();
    let (indices, values) = csr.row(0);
    let mut pairs : Vec<(IndexT, f64)> =
        indices.iter().cloned().zip( values.iter().cloned() ).collect();
    pairs.sort_by_key( |&(j, _)| j );
    pairs
}
//
// assert_row
/// Both modes produce the expected pairs and agree with each other to
/// within 1e-10 relative or 1e-12 absolute.
fn assert_row(expr: &Node, vars: &VarTable, expect: &[(IndexT, f64)]) {
    let forward = forward_diff_row(expr, vars).unwrap();
    let reverse = reverse_diff_row(expr, vars).unwrap();
    for csr in [ &forward, &reverse ] {
        let pairs = row_pairs(csr);
        assert_eq!( pairs.len(), expect.len() );
        for (have, want) in pairs.iter().zip(expect) {
            assert_eq!( have.0, want.0 );
            let tol = 1e-12_f64.max( 1e-10 * want.1.abs() );
            assert!(
                (have.1 - want.1).abs() <= tol,
                "column {}: {} != {}", have.0, have.1, want.1,
            );
        }
    }
}
// ---------------------------------------------------------------------------
//
// test_constant
// f = 5.4 : a row with no non-zeros
fn test_constant() {
    let vars = var_table();
    let expr = Node::constant(5.4);
    let row  = forward_diff_row(&expr, &vars).unwrap();
    assert_eq!( row.nrow(), 1 );
    assert_eq!( row.ncol(), 3 );
    assert_eq!( row.nnz(),  0 );
    assert_eq!( row.indptr(), &[0, 0] );
    assert_row(&expr, &vars, &[]);
}
//
// test_single_variable
// f = x : the identity derivative
fn test_single_variable() {
    let vars = var_table();
    let expr = Node::var(0);
    let row  = reverse_diff_row(&expr, &vars).unwrap();
    assert_eq!( row.nnz(), 1 );
    assert_eq!( row.indices(), &[0] );
    assert_eq!( row.values(),  &[1.0] );
    assert_row(&expr, &vars, &[ (0, 1.0) ]);
}
//
// test_product
// f = x * z
fn test_product() {
    let vars = var_table();
    let expr = Node::operator(
        OpKind::Product, vec![ Node::var(0), Node::var(2) ],
    ).unwrap();
    assert_row(&expr, &vars, &[ (0, 3.3), (2, 1.1) ]);
}
//
// test_repeated_variable
// f = (x * z) * z : z appears twice but gets one column,
// with value 2 x z
fn test_repeated_variable() {
    let vars = var_table();
    let expr = product_xzz();
    assert_row(&expr, &vars, &[ (0, 10.89), (2, 7.26) ]);
}
//
// test_value_update
// after x <- -7.5 the same expression gives new derivative values
fn test_value_update() {
    let mut vars = var_table();
    let expr = product_xzz();
    vars.set_value(0, -7.5);
    assert_row(&expr, &vars, &[ (0, 10.89), (2, -49.5) ]);
}
//
// product_xzz
fn product_xzz() -> Node {
    let inner = Node::operator(
        OpKind::Product, vec![ Node::var(0), Node::var(2) ],
    ).unwrap();
    Node::operator( OpKind::Product, vec![ inner, Node::var(2) ] ).unwrap()
}
//
// test_sin_plus_square
// f = sin(x) + x^2 : two mentions of x collapse to one column with
// value cos(x) + 2 x
fn test_sin_plus_square() {
    let vars = var_table();
    let sin = Node::operator( OpKind::Sin, vec![ Node::var(0) ] ).unwrap();
    let square = Node::operator(
        OpKind::Power, vec![ Node::var(0), Node::constant(2.0) ],
    ).unwrap();
    let expr = Node::operator( OpKind::Sum, vec![ sin, square ] ).unwrap();
    //
    let expect = (1.1_f64).cos() + 2.0 * 1.1;
    assert_row(&expr, &vars, &[ (0, expect) ]);
}
//
#[test]
fn scenarios() {
    test_constant();
    test_single_variable();
    test_product();
    test_repeated_variable();
    test_value_update();
    test_sin_plus_square();
}
// ---------------------------------------------------------------------------
//
// test_sparsity
// a column appears exactly when its variable appears in the expression
fn test_sparsity() {
    let vars = var_table();
    let expr = Node::operator(
        OpKind::Sum,
        vec![
            Node::operator(
                OpKind::Product, vec![ Node::var(0), Node::var(2) ],
            ).unwrap(),
            Node::constant(5.43),
        ],
    ).unwrap();
    for mode in [ Mode::Forward, Mode::Reverse ] {
        let row = diff_row(&expr, &vars, mode).unwrap();
        let mut columns : Vec<IndexT> = row.indices().to_vec();
        columns.sort();
        // y = v1 does not appear; x and z each get one column
        assert_eq!( columns, vec![0, 2] );
        assert!( row.values().iter().all( |&v| v != 0.0 ) );
    }
}
//
// test_linearity
// row( 2 g + 3 h ) = 2 row(g) + 3 row(h) , columnwise
fn test_linearity() {
    let vars = var_table();
    let g = Node::operator(
        OpKind::Product, vec![ Node::var(0), Node::var(2) ],
    ).unwrap();
    let h = Node::operator( OpKind::Sin, vec![ Node::var(1) ] ).unwrap();
    let combined = Node::operator(
        OpKind::Sum,
        vec![
            Node::operator(
                OpKind::Product, vec![ Node::constant(2.0), g.clone() ],
            ).unwrap(),
            Node::operator(
                OpKind::Product, vec![ Node::constant(3.0), h.clone() ],
            ).unwrap(),
        ],
    ).unwrap();
    //
    let row_g = row_pairs( &reverse_diff_row(&g, &vars).unwrap() );
    let row_h = row_pairs( &reverse_diff_row(&h, &vars).unwrap() );
    let row_f = row_pairs( &reverse_diff_row(&combined, &vars).unwrap() );
    //
    let mut expect : Vec<(IndexT, f64)> = Vec::new();
    for (j, v) in row_g {
        expect.push( (j, 2.0 * v) );
    }
    for (j, v) in row_h {
        expect.push( (j, 3.0 * v) );
    }
    expect.sort_by_key( |&(j, _)| j );
    //
    assert_eq!( row_f.len(), expect.len() );
    for (have, want) in row_f.iter().zip(&expect) {
        assert_eq!( have.0, want.0 );
        assert!( (have.1 - want.1).abs() <= 1e-12 );
    }
}
//
// test_mode_agreement
// forward and reverse rows are equal for a compound expression using
// every differentiable position of the operator set
fn test_mode_agreement() {
    let vars = var_table();
    // ( (sqrt(z) + exp(x)) - x / z ) ^ 2.000 * cos(y)
    // the power base is positive at this point
    let sqrt = Node::operator( OpKind::Sqrt, vec![ Node::var(2) ] ).unwrap();
    let exp  = Node::operator( OpKind::Exp,  vec![ Node::var(0) ] ).unwrap();
    let cos  = Node::operator( OpKind::Cos,  vec![ Node::var(1) ] ).unwrap();
    let ratio = Node::operator(
        OpKind::Division, vec![ Node::var(0), Node::var(2) ],
    ).unwrap();
    let sum = Node::operator( OpKind::Sum, vec![ sqrt, exp ] ).unwrap();
    let diff = Node::operator( OpKind::Subtraction, vec![ sum, ratio ] )
        .unwrap();
    let power = Node::operator(
        OpKind::Power, vec![ diff, Node::constant(2.0) ],
    ).unwrap();
    let expr = Node::operator( OpKind::Product, vec![ power, cos ] ).unwrap();
    //
    let forward = row_pairs( &forward_diff_row(&expr, &vars).unwrap() );
    let reverse = row_pairs( &reverse_diff_row(&expr, &vars).unwrap() );
    assert_eq!( forward.len(), reverse.len() );
    for (f, r) in forward.iter().zip(&reverse) {
        assert_eq!( f.0, r.0 );
        let tol = 1e-12_f64.max( 1e-10 * r.1.abs() );
        assert!( (f.1 - r.1).abs() <= tol );
    }
}
//
#[test]
fn properties() {
    test_sparsity();
    test_linearity();
    test_mode_agreement();
}
// ---------------------------------------------------------------------------
//
// test_division_by_zero
fn test_division_by_zero() {
    let vars = var_table();
    // x / (y - y) has a zero denominator at every point
    let denominator = Node::operator(
        OpKind::Subtraction, vec![ Node::var(1), Node::var(1) ],
    ).unwrap();
    let expr = Node::operator(
        OpKind::Division, vec![ Node::var(0), denominator ],
    ).unwrap();
    for mode in [ Mode::Forward, Mode::Reverse ] {
        let result = diff_row(&expr, &vars, mode);
        assert!( matches!(
            result, Err( nlad::Error::Domain{ op : "/", .. } )
        ));
    }
}
//
// test_sqrt_of_negative
fn test_sqrt_of_negative() {
    let vars = var_table();
    // y < 0
    let expr = Node::operator( OpKind::Sqrt, vec![ Node::var(1) ] ).unwrap();
    let result = reverse_diff_row(&expr, &vars);
    assert!( matches!(
        result, Err( nlad::Error::Domain{ op : "sqrt", .. } )
    ));
}
//
// test_log_of_negative
fn test_log_of_negative() {
    let vars = var_table();
    let expr = Node::operator( OpKind::Log, vec![ Node::var(1) ] ).unwrap();
    let result = forward_diff_row(&expr, &vars);
    assert!( matches!(
        result, Err( nlad::Error::Domain{ op : "log", .. } )
    ));
}
//
// test_power_degenerate_base
// the partial with respect to the exponent is defined as zero when the
// base is exactly 0 or 1
fn test_power_degenerate_base() {
    let vars = VarTable::from_values( vec![ 0.0, 2.0 ] );
    let expr = Node::operator(
        OpKind::Power, vec![ Node::var(0), Node::var(1) ],
    ).unwrap();
    let pairs = row_pairs( &reverse_diff_row(&expr, &vars).unwrap() );
    // d/d(exponent) is the second pair
    assert_eq!( pairs[1], (1, 0.0) );
    //
    let vars = VarTable::from_values( vec![ 1.0, 2.0 ] );
    let pairs = row_pairs( &reverse_diff_row(&expr, &vars).unwrap() );
    assert_eq!( pairs[0], (0, 2.0) );
    assert_eq!( pairs[1], (1, 0.0) );
}
//
#[test]
fn domain_errors() {
    test_division_by_zero();
    test_sqrt_of_negative();
    test_log_of_negative();
    test_power_degenerate_base();
}
