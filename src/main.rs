use maidenhead_rs::{Locator, MaidenheadError, locator_bearing, locator_distance};

fn main() -> Result<(), MaidenheadError> {
    let home = Locator::parse("IO91lk")?;

    println!("Locator: {}", home);
    println!("Centre: ({}, {})", home.centre().0, home.centre().1);
    println!("Bounding box: {:?}", home.bounding_box());

    let km = locator_distance("IO91lk", "JN58td")?;
    let deg = locator_bearing("IO91lk", "JN58td")?;
    println!("IO91lk -> JN58td: {:.1} km at {:.1} deg", km, deg);

    Ok(())
}
