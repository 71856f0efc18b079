use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use relp_sparse::data::linear_algebra::matrix::SparseMatrix;
use relp_sparse::io::{render_dense, render_nonzero};

/// Builds two sparse matrices, adds one to the other and prints them.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Number of rows of both matrices
    #[arg(long, default_value_t = 10)]
    rows: usize,
    /// Number of columns of both matrices
    #[arg(long, default_value_t = 10)]
    columns: usize,
    /// Log structural changes to the matrices
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let default_level = if opts.verbose { "relp_sparse=trace" } else { "relp_sparse=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(rows = opts.rows, columns = opts.columns, "building matrices");
    let mut matrix = SparseMatrix::<i64>::new(opts.rows, opts.columns)
        .context("Couldn't create the first matrix")?;
    for (i, j, value) in [(3, 5, 5), (3, 7, 7), (3, 2, 2), (3, 2, 0), (5, 6, 6), (5, 4, 4), (7, 3, 3), (7, 1, 1)] {
        matrix.set_value(i, j, value)
            .with_context(|| format!("Couldn't write {} at ({}, {})", value, i, j))?;
    }
    print!("{}", render_dense(&matrix));
    print!("{}", render_nonzero(&matrix));

    let mut addition = SparseMatrix::new(opts.rows, opts.columns)
        .context("Couldn't create the second matrix")?;
    for (i, j, value) in [(1, 9, 5), (3, 8, 6), (9, 9, 9)] {
        addition.set_value(i, j, value)
            .with_context(|| format!("Couldn't write {} at ({}, {})", value, i, j))?;
    }
    matrix.add_matrix(&addition).context("Couldn't add the matrices")?;
    print!("{}", render_nonzero(&matrix));

    for (i, j) in [(1, 9), (3, 5), (7, 7)] {
        println!("{}", matrix.get_value(i, j)?);
    }

    Ok(())
}
