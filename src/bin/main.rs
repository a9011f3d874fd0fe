// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use extenso_rs::{Amount, CurrencyUnit, CurrencyVerbalizer, VerbalizeError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Extenso - Spell out monetary amounts in Portuguese
///
/// Verbalizes amounts given as arguments, or every row of a CSV file,
/// and writes the written-out form to stdout.
#[derive(Parser, Debug)]
#[command(name = "extenso-rs")]
#[command(about = "Spells out monetary amounts in Brazilian Portuguese", long_about = None)]
struct Args {
    /// Amounts to verbalize (e.g. 430.50, or 430,50 with --localized)
    #[arg(value_name = "AMOUNT", required_unless_present = "file")]
    amounts: Vec<String>,

    /// CSV file with an `amount` column; writes `amount,extenso` rows
    #[arg(short, long, value_name = "FILE", conflicts_with = "amounts")]
    file: Option<PathBuf>,

    /// Read amounts in Brazilian format ("R$ 1.234,56")
    #[arg(short, long)]
    localized: bool,

    /// Prefix the written form with the numeric value: "R$ 430,50 (...)"
    #[arg(long)]
    figure: bool,

    /// Currency unit, singular
    #[arg(long, default_value = "real")]
    singular: String,

    /// Currency unit, plural
    #[arg(long, default_value = "reais")]
    plural: String,

    /// Sub-unit, singular
    #[arg(long, default_value = "centavo")]
    sub_singular: String,

    /// Sub-unit, plural
    #[arg(long, default_value = "centavos")]
    sub_plural: String,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn verbalizer(&self) -> CurrencyVerbalizer {
        CurrencyVerbalizer::new(CurrencyUnit::new(
            &self.singular,
            &self.plural,
            &self.sub_singular,
            &self.sub_plural,
        ))
    }

    fn options(&self) -> RenderOptions {
        RenderOptions {
            localized: self.localized,
            figure: self.figure,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let verbalizer = args.verbalizer();
    let options = args.options();

    if let Some(path) = &args.file {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error opening file '{}': {}", path.display(), e);
                process::exit(1);
            }
        };

        let records = match process_csv(BufReader::new(file), &verbalizer, options) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Error processing amounts: {}", e);
                process::exit(1);
            }
        };
        info!(rows = records.len(), "verbalized csv rows");

        if let Err(e) = write_records(&records, std::io::stdout()) {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
        return;
    }

    // All or nothing: a failed amount must not leave partial output behind.
    let lines = match render_all(&args.amounts, &verbalizer, options) {
        Ok(lines) => lines,
        Err((input, e)) => {
            eprintln!("Error verbalizing '{}': {}", input, e);
            process::exit(1);
        }
    };
    for line in lines {
        println!("{}", line);
    }
}

/// Installs a compact stderr subscriber; stdout carries only results.
fn init_logger(verbose: bool) {
    let default = if verbose {
        "extenso_rs=debug,info"
    } else {
        "extenso_rs=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Input parsing and output shape shared by both modes.
#[derive(Debug, Clone, Copy, Default)]
struct RenderOptions {
    localized: bool,
    figure: bool,
}

fn parse_amount(text: &str, options: RenderOptions) -> Result<Amount, VerbalizeError> {
    if options.localized {
        Amount::parse_localized(text)
    } else {
        Amount::from_str(text)
    }
}

fn render(
    text: &str,
    verbalizer: &CurrencyVerbalizer,
    options: RenderOptions,
) -> Result<(Amount, String), VerbalizeError> {
    let amount = parse_amount(text, options)?;
    let words = if options.figure {
        verbalizer.receipt_clause(amount)?
    } else {
        verbalizer.verbalize_amount(amount)?
    };
    Ok((amount, words))
}

/// Verbalizes every argument, stopping at the first failure.
fn render_all<'a>(
    inputs: &'a [String],
    verbalizer: &CurrencyVerbalizer,
    options: RenderOptions,
) -> Result<Vec<String>, (&'a str, VerbalizeError)> {
    inputs
        .iter()
        .map(|input| {
            render(input, verbalizer, options)
                .map(|(_, words)| words)
                .map_err(|e| (input.as_str(), e))
        })
        .collect()
}

/// Raw CSV record. Only the `amount` column is read; others are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    amount: String,
}

/// Output row: normalized amount and its written form.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct OutputRecord {
    amount: Amount,
    extenso: String,
}

/// Verbalize the `amount` column of a CSV reader.
///
/// Rows that are malformed or hold an amount that cannot be verbalized are
/// skipped with a warning; they never produce an output row.
///
/// # Errors
///
/// Returns a CSV error if the header cannot be read.
fn process_csv<R: Read>(
    reader: R,
    verbalizer: &CurrencyVerbalizer,
    options: RenderOptions,
) -> Result<Vec<OutputRecord>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);
    rdr.headers()?;

    let mut records = Vec::new();
    for (line, result) in rdr.deserialize::<CsvRecord>().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(line = line + 2, error = %e, "skipping malformed row");
                continue;
            }
        };

        match render(&record.amount, verbalizer, options) {
            Ok((amount, extenso)) => {
                debug!(%amount, "verbalized");
                records.push(OutputRecord { amount, extenso });
            }
            Err(e) => warn!(line = line + 2, amount = %record.amount, error = %e, "skipping amount"),
        }
    }

    Ok(records)
}

/// Write verbalized rows as CSV.
///
/// # CSV Format
///
/// Columns: `amount, extenso`
///
/// ```csv
/// amount,extenso
/// 430.50,Quatrocentos e trinta reais e cinquenta centavos
/// ```
fn write_records<W: Write>(records: &[OutputRecord], writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
