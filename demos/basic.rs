use spherical_geodesy::{DmsFormat, Point, dms};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} \"<lat>, <lon>\" \"<lat>, <lon>\"", args[0]);
        std::process::exit(1);
    }

    let from: Point = args[1].parse()?;
    let to: Point = args[2].parse()?;

    println!("From: {from}");
    println!("To:   {to}");

    println!("\n=== Great circle ===");
    println!("Distance:      {} km", from.distance_to(&to));
    println!(
        "Bearing:       {}",
        dms::to_brng(from.bearing_to(&to), DmsFormat::Dms, None)
    );
    println!(
        "Final bearing: {}",
        dms::to_brng(from.final_bearing_to(&to), DmsFormat::Dms, None)
    );
    println!("Midpoint:      {}", from.midpoint_to(&to));

    println!("\n=== Rhumb line ===");
    println!("Distance:      {} km", from.rhumb_distance_to(&to));
    println!(
        "Bearing:       {}",
        dms::to_brng(from.rhumb_bearing_to(&to), DmsFormat::Dms, None)
    );
    println!("Midpoint:      {}", from.rhumb_midpoint_to(&to));

    Ok(())
}
