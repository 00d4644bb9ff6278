use std::env;
use std::fs;
use std::io::{self, Read};

use anyhow::{anyhow, Context, Result};

fn main() -> Result<()> {
    let input = parse_args()?;

    let payload = match input.as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("Failed to read stdin")?;
            buffer
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?,
    };

    let report = gradecard::render_text_report(&payload)?;
    println!("{report}");
    Ok(())
}

fn parse_args() -> Result<Option<String>> {
    let mut input = env::var("GRADECARD_REPORT_INPUT").ok();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                input = Some(args.next().ok_or_else(|| anyhow!("--input missing value"))?);
            }
            "--help" | "-h" => {
                println!("usage: report_card [--input <request.json | ->]");
                std::process::exit(0);
            }
            _ => return Err(anyhow!("Unknown argument: {arg}")),
        }
    }

    Ok(input)
}
