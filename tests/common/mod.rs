use approx::assert_relative_eq;
use skyobs::position_source::RectPosition;
use skyobs::AstrometricPosition;

/// Geocenter → Sun for a circular Earth orbit of 1 AU, equatorial frame.
pub fn circular_sun(t: f64) -> RectPosition {
    let n = std::f64::consts::TAU / 365.25;
    let l = n * (t - 60000.0);
    let eps = 23.439_f64.to_radians();
    RectPosition::new(-l.cos(), -l.sin() * eps.cos(), -l.sin() * eps.sin())
}

/// Sun → asteroid on a circular orbit of 2.5 AU in the ecliptic, equatorial frame.
pub fn circular_asteroid(t: f64) -> RectPosition {
    let n = 0.01720209895 / 2.5_f64.powf(1.5);
    let l = n * (t - 60000.0) + 2.0;
    let eps = 23.439_f64.to_radians();
    RectPosition::new(
        2.5 * l.cos(),
        2.5 * l.sin() * eps.cos(),
        2.5 * l.sin() * eps.sin(),
    )
}

pub fn assert_position_close(a: &AstrometricPosition, b: &AstrometricPosition, epsilon: f64) {
    assert_relative_eq!(a.ra.radians(), b.ra.radians(), epsilon = epsilon);
    assert_relative_eq!(a.dec, b.dec, epsilon = epsilon);
    assert_relative_eq!(a.elongation, b.elongation, epsilon = epsilon);
    assert_relative_eq!(a.phase, b.phase, epsilon = epsilon);
    assert_relative_eq!(a.r, b.r, epsilon = epsilon);
    assert_relative_eq!(a.delta, b.delta, epsilon = epsilon);
}
