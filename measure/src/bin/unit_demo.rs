/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::Parser;
use log::info;

use measure::literals::{celsius, day, fahrenheit, h, km, m, min, s};
use measure::{
    unit_cast, Celsius, Days, Fahrenheit, Feet, Inches, Kilometers, Meters,
    Miles, Millimeters, Minutes, Seconds, UnitError,
};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit conversion demo
///
/// Constructs lengths, temperatures and durations, converts between
/// their units and shows that mixing dimensions is refused.
struct Args {
    /// Leading spaces for the length section.
    #[clap(long, short, default_value_t = 2)]
    indent: usize,
    /// Increase verbosity. This option can be specified multiple times.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => simplelog::LevelFilter::Off,
        1 => simplelog::LevelFilter::Error,
        2 => simplelog::LevelFilter::Warn,
        3 => simplelog::LevelFilter::Info,
        4 => simplelog::LevelFilter::Debug,
        5.. => simplelog::LevelFilter::Trace,
    };

    if let Err(e) = simplelog::TermLogger::init(
        log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), UnitError> {
    info!("running length section");
    println!("--- testing length assign and operation");
    let dist1 = km(5);
    let dist2 = m(500);
    let dist3 = (dist1 - dist2)?;
    let dist4 = (dist1 + dist2)?;
    println!("{}", dist1.indented(args.indent));
    println!("{}", dist2.indented(args.indent));
    println!("{}", dist3.indented(args.indent));
    println!("{}", dist4.indented(args.indent));
    println!("---");

    println!("--- testing length cast");
    println!("{}", unit_cast::<Kilometers, Meters>(dist1)?);
    println!("{}", unit_cast::<Kilometers, Millimeters>(dist1)?);
    println!("{}", unit_cast::<Meters, Millimeters>(dist2)?);
    println!("{}", unit_cast::<Meters, Inches>(m(1))?);
    println!("{}", unit_cast::<Meters, Feet>(m(1))?);
    println!("{}", unit_cast::<Meters, Miles>(m(1))?);
    println!("---");

    info!("running temperature section");
    println!("--- testing temperature assign and operators");
    let temp_c = celsius(21.5);
    let temp_f = fahrenheit(77);
    println!("{}", temp_c);
    println!("{}", temp_f);
    println!("{}", (temp_c + temp_f)?);
    println!("{}", (temp_f + temp_c)?);
    println!("---");

    println!("--- testing temperature cast");
    println!("{}", unit_cast::<Celsius, Fahrenheit>(temp_c)?);
    println!("{}", unit_cast::<Fahrenheit, Celsius>(temp_f)?);
    println!("---");

    info!("running time section");
    println!("--- testing time assign and operators");
    let time_1 = min(48.5);
    let time_2 = s(120);
    let time_3 = h(3.5);
    let time_4 = day(0.1);
    println!("{}", time_1);
    println!("{}", time_2);
    println!("{}", time_3);
    println!("{}", time_4);
    println!("---");

    println!("--- testing time cast");
    println!("{}", unit_cast::<Seconds, Minutes>(time_2)?);
    println!("{}", unit_cast::<Days, Minutes>(time_4)?);
    println!("---");

    println!("--- testing cast fail");
    for res in [
        unit_cast::<Fahrenheit, Meters>(temp_f).map(|q| q.erase()),
        (temp_f + dist1).map(|q| q.erase()),
    ] {
        match res {
            Err(UnitError::IncompatibleDimension { .. }) => println!("ok"),
            Ok(q) => println!("unexpected: {}", q),
        }
    }
    println!("---");

    println!("{}", day(3));
    Ok(())
}
