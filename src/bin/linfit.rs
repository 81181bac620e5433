//! Multi-feature linear least-squares regression over stdin.
//!
//! Reads lines of `y x0 ... x_{k-1}` until EOF (k fixed by the first valid
//! line) and prints the coefficient vector β minimizing Σ (y − β·x)².
//!
//! ```text
//! usage: linfit [-g] < data.dat
//! ```

use std::io::{self, BufRead};
use std::process;

use tabfit::engine::formatter::{format_formula, format_listing};
use tabfit::io::reader::RecordParser;
use tabfit::prelude::*;

fn usage() -> ! {
    eprintln!("usage: linfit [-g] < data.dat");
    eprintln!("  -g   print the result as a gnuplottable formula");
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut gnuplot = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-g" => gnuplot = true,
            _ => usage(),
        }
    }

    let mut fit = match LinearFitBuilder::new().build::<f64>() {
        Ok(fit) => fit,
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    };

    let mut parser = RecordParser::<f64>::new(None);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("{err}");
                process::exit(1);
            }
        };

        if let Some(record) = parser.push(&line) {
            if let Err(err) = fit.observe(record[0], &record[1..]) {
                log::error!("{err}");
                process::exit(1);
            }
        }
    }

    let beta = match fit.solve() {
        Ok(beta) => beta,
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    };

    if gnuplot {
        // Features are read as positional powers of x for the formula.
        let exponents: Vec<u32> = (0..beta.len() as u32).collect();
        println!("{}", format_formula(&beta, &exponents));
    } else {
        print!("{}", format_listing(&beta));
    }
}
