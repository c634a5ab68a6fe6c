use p1546::{predict, ClutterEnvironment, P1546Input, PathSegment, PathZone};

fn input_at(distance: f64, zone: PathZone) -> P1546Input {
    P1546Input {
        frequency: 100.0,
        time_percentage: 50.0,
        heff: 150.0,
        h2: 10.0,
        r2: 10.0,
        clutter: ClutterEnvironment::Rural,
        path: vec![PathSegment {
            zone,
            length: distance,
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
    }
}

fn main() {
    println!("P1546 Point-to-Area Prediction - Coverage Curve");
    println!("===============================================");
    println!();
    println!("100 MHz, h1 = 150 m, 50% time, 50% locations, 1 kW e.r.p.");
    println!();
    println!("{:>8}  {:>14}  {:>14}", "d (km)", "E land", "E cold sea");
    println!("{:>8}  {:>14}  {:>14}", "", "(dB(uV/m))", "(dB(uV/m))");

    for d in [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0] {
        let land = predict(&input_at(d, PathZone::Land)).unwrap();
        let sea = predict(&input_at(d, PathZone::ColdSea)).unwrap();
        println!(
            "{:>8.0}  {:>14.2}  {:>14.2}",
            d, land.field_strength, sea.field_strength
        );
    }
}
