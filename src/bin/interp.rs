//! Local polynomial interpolation over a reference dataset file.
//!
//! Reads a dataset of whitespace-separated `x y1 ...` lines named on the
//! command line, then interpolates the first column of every stdin line
//! against it and prints `x y1' ...` per accepted query.
//!
//! ```text
//! usage: interp [-n DEG] [--clip] dataset.dat < queries.dat > out.dat
//! ```

use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use tabfit::io::reader::read_table;
use tabfit::prelude::*;

fn usage() -> ! {
    eprintln!("usage: interp [-n DEG] [--clip] dataset.dat < queries.dat > out.dat");
    eprintln!("  -n DEG   degree of interpolation: 0 = lookup nearest, 1 = linear (2 points),");
    eprintln!("           2 = quadratic (3 points), ... (default 1)");
    eprintln!("  --clip   do not extrapolate outside of the dataset bounds");
    process::exit(1);
}

fn fatal(err: TabfitError) -> ! {
    log::error!("{err}");
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut degree = 1usize;
    let mut clip = false;
    let mut path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--degree" => {
                i += 1;
                let raw = args.get(i).unwrap_or_else(|| usage());
                degree = match raw.parse() {
                    Ok(d) => d,
                    Err(_) => {
                        log::error!("degree -n {raw}: must be a nonnegative integer");
                        process::exit(1);
                    }
                };
            }
            "--clip" | "-clip" => clip = true,
            "-h" | "--help" => usage(),
            flag if flag.starts_with('-') => usage(),
            positional => {
                if path.is_some() {
                    usage();
                }
                path = Some(positional.to_string());
            }
        }
        i += 1;
    }

    let path = path.unwrap_or_else(|| usage());

    let table = match read_table::<f64>(Path::new(&path)) {
        Ok(table) => table,
        Err(err) => fatal(err),
    };
    if table.rows.is_empty() {
        log::error!("{path} contains no data");
        process::exit(1);
    }
    log::info!(
        "dataset {} records of {} columns.",
        table.rows.len(),
        table.rows[0].len()
    );

    let dataset = match Dataset::from_rows(table.rows) {
        Ok(dataset) => dataset,
        Err(err) => fatal(err),
    };

    let model = match InterpolatorBuilder::new()
        .degree(degree)
        .clip(clip)
        .build(dataset)
    {
        Ok(model) => model,
        Err(err) => fatal(err),
    };

    let stdin = io::stdin();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("{err}");
                process::exit(1);
            }
        };

        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let field = trimmed.split_whitespace().next().unwrap_or("");
        let x: f64 = match field.parse() {
            Ok(x) => x,
            Err(err) => {
                log::warn!("line {}: {err}", number + 1);
                continue;
            }
        };

        if let Some(values) = model.query(x) {
            let mut out = x.to_string();
            for v in values {
                out.push(' ');
                out.push_str(&v.to_string());
            }
            println!("{out}");
        }
    }
}
