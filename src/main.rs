use std::ops::RangeInclusive;

use anyhow::Result;
use clap::Parser;
use paschal::{
    EasterMethod, EasterRecord, REFERENCE_YEAR_RANGES, parse_methods, parse_year_range,
    setup_logging, tabulate, write_csv,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "paschal", about = "Tabulate Easter dates as CSV")]
struct Cli {
    #[arg(
        long,
        short,
        env = "PASCHAL_METHOD",
        default_value = "all",
        help = "Methods to compute: julian, orthodox, western (or 1, 2, 3), comma-separated, or all"
    )]
    method: String,

    #[arg(
        allow_hyphen_values = true,
        help = "Years as YEAR or START:END (inclusive); defaults to 1200:1300 1700:1850 1920:2100"
    )]
    ranges: Vec<String>,
}

fn main() -> Result<()> {
    setup_logging()?;
    let cli = Cli::parse();

    let methods = parse_methods(&cli.method)?;
    let ranges = get_year_ranges(&cli.ranges)?;

    let rows = write_csv(std::io::stdout().lock(), records(&methods, &ranges))?;
    info!(rows, "wrote Easter table");

    Ok(())
}

fn get_year_ranges(args: &[String]) -> Result<Vec<RangeInclusive<i32>>> {
    if args.is_empty() {
        return Ok(REFERENCE_YEAR_RANGES.to_vec());
    }
    let ranges = args
        .iter()
        .map(|arg| parse_year_range(arg))
        .collect::<Result<_, _>>()?;
    Ok(ranges)
}

// method-major order: every range for the first method, then the next method
fn records<'a>(
    methods: &'a [EasterMethod],
    ranges: &'a [RangeInclusive<i32>],
) -> impl Iterator<Item = EasterRecord> + 'a {
    methods.iter().flat_map(move |&method| {
        ranges
            .iter()
            .flat_map(move |years| tabulate(method, years.clone()))
    })
}
