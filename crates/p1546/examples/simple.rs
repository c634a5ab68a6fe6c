use p1546::{predict, ClutterEnvironment, P1546Input, PathSegment, PathZone};

fn main() {
    println!("P1546 Point-to-Area Prediction - Simple Example");
    println!("===============================================");

    // 600 MHz broadcast transmitter, 75 m effective height, rural receiver
    // 50 km away.
    let input = P1546Input {
        frequency: 600.0,
        time_percentage: 50.0,
        heff: 75.0,
        h2: 10.0,
        r2: 10.0,
        clutter: ClutterEnvironment::Rural,
        path: vec![PathSegment {
            zone: PathZone::Land,
            length: 50.0,
        }],
        terrain_info_available: true,
        location_percentage: 50.0,
        sigma_l: 0.0,
        tx_power: 1.0,
        ha: None,
        hb: None,
        r1: None,
        tca: None,
        tx_terrain_height: 0.0,
        rx_terrain_height: 0.0,
        eff1: None,
        eff2: None,
    };

    match predict(&input) {
        Ok(p) => {
            println!("Path: 50 km over land");
            println!("Frequency: {:.1} MHz", input.frequency);
            println!("Time percentage: {:.0}%", input.time_percentage);
            println!();
            println!("Field Strength: {:.2} dB(uV/m)", p.field_strength);
            println!(
                "Basic Transmission Loss: {:.2} dB",
                p.basic_transmission_loss
            );
        }
        Err(e) => eprintln!("prediction failed: {e}"),
    }
}
