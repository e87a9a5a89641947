use snapmath::{Interval, LinearMap, SnapExt, checked_map_range};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // snap a cursor position to a 0.25 unit grid
    let cursor = 3.618f32;
    println!("cursor        {cursor}");
    println!("round to 0.25 {}", cursor.round_to_nearest(0.25));
    println!("floor to 0.25 {}", cursor.floor_to_nearest(0.25));
    println!("ceil to 0.25  {}", cursor.ceil_to_nearest(0.25));

    // joystick axis in [-1, 1] to a byte
    let axis = LinearMap::try_new(Interval::new(-1.0f64, 1.0), Interval::new(0.0, 255.0))?;
    for x in [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5] {
        let byte = axis.apply(x);
        println!("axis {x:>5} -> {byte:>7.2} -> {:>5}", axis.inverse().apply(byte));
    }

    // serialized mapping
    println!("{}", serde_json::to_string_pretty(&axis)?);

    match checked_map_range(1.0f64, 2.0, 2.0, 0.0, 1.0) {
        Ok(value) => println!("unexpected {value}"),
        Err(e) => println!("degenerate range: {e}"),
    }
    Ok(())
}
