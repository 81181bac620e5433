//! Single-feature polynomial least-squares regression over stdin.
//!
//! Reads 2-field lines (`y x` by default, `x y` with --xy) until EOF and
//! prints the coefficients β minimizing Σ (y − Σᵢ βᵢ·x^{pᵢ})² over the
//! configured exponent range.
//!
//! ```text
//! usage: polyfit [-k MAX] [--kmin MIN] [-e | -o] [--xy] [-g] < data.dat
//! ```

use std::io::{self, BufRead};
use std::process;

use tabfit::engine::formatter::format_listing;
use tabfit::io::reader::RecordParser;
use tabfit::prelude::*;

fn usage() -> ! {
    eprintln!("usage: polyfit [-k MAX] [--kmin MIN] [-e | -o] [--xy] [-g] < data.dat");
    eprintln!("  -k MAX      max order of the polynomial (default 2)");
    eprintln!("  --kmin MIN  min order of the polynomial (default 0)");
    eprintln!("  -e          even powers only");
    eprintln!("  -o          odd powers only");
    eprintln!("  --xy        input is x, y pairs (default: y, x pairs)");
    eprintln!("  -g          print the result as a gnuplottable formula");
    process::exit(1);
}

fn fatal(err: TabfitError) -> ! {
    log::error!("{err}");
    process::exit(1);
}

fn parse_order(args: &[String], i: usize) -> usize {
    let raw = args.get(i).unwrap_or_else(|| usage());
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            log::error!("order {raw}: must be a nonnegative integer");
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut kmin = 0usize;
    let mut kmax = 2usize;
    let mut even = false;
    let mut odd = false;
    let mut xy = false;
    let mut gnuplot = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-k" | "--kmax" => {
                i += 1;
                kmax = parse_order(&args, i);
            }
            "--kmin" => {
                i += 1;
                kmin = parse_order(&args, i);
            }
            "-e" => even = true,
            "-o" => odd = true,
            "--xy" | "-xy" => xy = true,
            "-g" => gnuplot = true,
            _ => usage(),
        }
        i += 1;
    }

    if even && odd {
        fatal(TabfitError::MutuallyExclusive {
            first: "-e",
            second: "-o",
        });
    }
    let parity = if even {
        Parity::Even
    } else if odd {
        Parity::Odd
    } else {
        Parity::Any
    };

    let mut fit = match PolyFitBuilder::new()
        .min_degree(kmin)
        .max_degree(kmax)
        .parity(parity)
        .build::<f64>()
    {
        Ok(fit) => fit,
        Err(err) => fatal(err),
    };

    let mut parser = RecordParser::<f64>::new(Some(2));
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
            let (y, x) = if xy {
                (record[1], record[0])
            } else {
                (record[0], record[1])
            };
            if let Err(err) = fit.observe(x, y) {
                fatal(err);
            }
        }
    }

    if xy {
        log::info!("Read {} x-y pairs.", fit.count());
    } else {
        log::info!("Read {} y-x pairs.", fit.count());
    }

    let beta = match fit.solve() {
        Ok(beta) => beta,
        Err(err) => fatal(err),
    };

    if gnuplot {
        println!("{}", fit.formula(&beta));
    } else {
        print!("{}", format_listing(&beta));
    }
}
