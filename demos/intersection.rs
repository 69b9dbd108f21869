use spherical_geodesy::{DmsFormat, Point, intersection};

fn main() {
    let stansted = Point::new(51.8853, 0.2545);
    let cdg = Point::new(49.0034, 2.5735);

    match intersection(&stansted, 108.547, &cdg, 32.435) {
        Some(crossing) => {
            println!("Paths cross at {}", crossing);
            println!("({})", crossing.to_string_formatted(DmsFormat::D, None));
            println!("{} km from Stansted", stansted.distance_to(&crossing));
            println!("{} km from CDG", cdg.distance_to(&crossing));
        }
        None => println!("No unique intersection"),
    }
}
