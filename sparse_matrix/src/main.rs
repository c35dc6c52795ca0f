use anyhow::{Context, Result};
use sparse_matrix::{MatrixError, Operation, SparseMatrix};
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sparse_matrix",
    about = "Add, subtract or multiply two sparse matrix files"
)]
struct Opt {
    /// Left operand
    #[structopt(parse(from_os_str))]
    matrix1: PathBuf,

    /// Right operand
    #[structopt(parse(from_os_str))]
    matrix2: PathBuf,

    /// One of: add, subtract, multiply
    operation: String,

    /// Also save the result as a matrix file
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Print the result as JSON
    #[structopt(long)]
    json: bool,

    /// Log debug output to stderr when RUST_LOG is not set
    #[structopt(short, long)]
    verbose: bool,
}

fn main() {
    let opt = Opt::from_args();

    let default_filter = if opt.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = run(&opt) {
        // Library errors are reported by their message alone
        match err.downcast_ref::<MatrixError>() {
            Some(matrix_err) => println!("{}", matrix_err),
            None => eprintln!("{:#}", err),
        }
        process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<()> {
    // Both files are loaded before the operation name is checked
    let matrix1 = SparseMatrix::load(&opt.matrix1)?;
    let matrix2 = SparseMatrix::load(&opt.matrix2)?;

    let op = match opt.operation.parse::<Operation>() {
        Ok(op) => op,
        Err(unknown) => {
            log::debug!("unknown operation {:?}", unknown.0);
            println!("{}", unknown);
            return Ok(());
        }
    };

    let result = matrix1.apply(op, &matrix2)?;

    if opt.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to encode result")?;
        println!("{}", json);
    } else {
        result.print_matrix();
    }

    if let Some(path) = &opt.output {
        result
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
