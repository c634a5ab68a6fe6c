/// Constants for the P.1546 field-strength calculation

/// Number of nominal time percentages for which curves are tabulated.
pub const NUM_TIME_PERCENTAGES: usize = 3;
/// Number of nominal frequencies for which curves are tabulated.
pub const NUM_FREQUENCIES: usize = 3;
/// Number of nominal distances for which curves are tabulated.
pub const NUM_DISTANCES: usize = 78;
/// Number of nominal transmitting/base antenna heights for which curves are tabulated.
pub const NUM_HEIGHTS: usize = 8;

/// Nominal time percentages (%).
pub const TIME_PERCENTAGES: [f64; NUM_TIME_PERCENTAGES] = [1.0, 10.0, 50.0];

/// Nominal frequencies (MHz).
pub const FREQUENCIES: [f64; NUM_FREQUENCIES] = [100.0, 600.0, 2000.0];

/// Nominal transmitting/base antenna heights (m).
pub const HEIGHTS: [f64; NUM_HEIGHTS] = [10.0, 20.0, 37.5, 75.0, 150.0, 300.0, 600.0, 1200.0];

/// Nominal distances (km), Table 1.
pub const DISTANCES: [f64; NUM_DISTANCES] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0,
    18.0, 19.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0,
    85.0, 90.0, 95.0, 100.0, 110.0, 120.0, 130.0, 140.0, 150.0, 160.0, 170.0, 180.0, 190.0,
    200.0, 225.0, 250.0, 275.0, 300.0, 325.0, 350.0, 375.0, 400.0, 425.0, 450.0, 475.0, 500.0,
    525.0, 550.0, 575.0, 600.0, 625.0, 650.0, 675.0, 700.0, 725.0, 750.0, 775.0, 800.0, 825.0,
    850.0, 875.0, 900.0, 925.0, 950.0, 975.0, 1000.0,
];

/// The knife-edge diffraction approximation J(nu) is only defined above this
/// value of nu; at or below it the correction is zero.
pub const NU_LIMIT: f64 = -0.7806;

/// Ceiling on the transmitting/base antenna height h1 used for curve
/// selection (m). The recommendation is not valid above this height; the
/// caller clamps rather than rejects.
pub const MAX_H1: f64 = 3000.0;
