//! # Birkhoff decomposition walkthrough
//!
//! Decomposes a 4×4 doubly stochastic matrix, prints each weighted
//! permutation and checks that the terms add back up to the input.
//!
//! Run with: `cargo run --example decompose`

use birkhoff_core::{BirkhoffDecomposer, SquareMatrix};

fn print_matrix(m: &SquareMatrix) {
    for row in m.rows() {
        let cells: Vec<String> = row.iter().map(|x| format!("{x:6.3}")).collect();
        println!("    [{}]", cells.join(" "));
    }
}

fn main() {
    let sixths = [
        [1.0, 4.0, 0.0, 1.0],
        [2.0, 1.0, 3.0, 0.0],
        [2.0, 1.0, 1.0, 2.0],
        [1.0, 0.0, 2.0, 3.0],
    ];
    let rows: Vec<Vec<f64>> = sixths
        .iter()
        .map(|r| r.iter().map(|x| x / 6.0).collect())
        .collect();
    let m = match SquareMatrix::from_rows(&rows) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("bad input: {e}");
            return;
        }
    };

    println!("Input (row sums {:?}):", m.row_sums());
    print_matrix(&m);

    let d = match BirkhoffDecomposer::default().decompose(&m) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("decomposition failed: {e}");
            return;
        }
    };

    println!();
    println!("{} terms:", d.len());
    for (k, t) in d.iter().enumerate() {
        println!("  #{k}  coefficient {:.4}  columns {:?}", t.coefficient, t.permutation.columns());
        print_matrix(&t.permutation.to_matrix());
    }

    println!();
    println!("coefficient sum  {:.6}", d.coefficient_sum());
    println!("max deviation    {:.3e}", d.max_deviation(&m));
    println!("birkhoff-core    v{}", birkhoff_core::VERSION);
}
