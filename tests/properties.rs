use approx::{assert_abs_diff_eq, assert_relative_eq};

use pendulum_sim::angle::wrap_angle;
use pendulum_sim::pendulum::{presets, DoublePendulum, Pendulum, PendulumParams};
use pendulum_sim::sim::Method;
use pendulum_sim::system::PendulumSystem;
use pendulum_sim::types::{SimConfig, G0};

/// 0.5 omega^2 - (g/l) cos(theta) at every sample.
fn energy(p: &Pendulum, gravity: f64) -> Vec<f64> {
    p.trajectory()
        .iter()
        .map(|s| 0.5 * s[1] * s[1] - (gravity / p.length()) * s[0].cos())
        .collect()
}

fn bits(values: impl Iterator<Item = f64>) -> Vec<u64> {
    values.map(f64::to_bits).collect()
}

fn max_drift(e: &[f64]) -> f64 {
    e.iter().map(|v| (v - e[0]).abs()).fold(0.0, f64::max)
}

#[test]
fn rk4_agrees_with_adaptive_over_first_period() {
    let config = SimConfig::default();
    let params = PendulumParams::new(1.0, 1.0, 5.0, 0.0);
    let rk4 = Pendulum::new(params, &config, Method::RungeKutta4).unwrap();
    let reference = Pendulum::new(params, &config, Method::Adaptive).unwrap();

    let period = 2.0 * std::f64::consts::PI * (1.0 / G0).sqrt();
    let times = config.time_grid();
    let mut checked = 0;
    for (i, _) in times.iter().enumerate().take_while(|(_, t)| **t <= period) {
        assert_abs_diff_eq!(rk4.trajectory()[i][0], reference.trajectory()[i][0], epsilon = 1e-4);
        checked += 1;
    }
    assert!(checked > 50);
}

#[test]
fn energy_drift_shrinks_with_timestep() {
    let params = PendulumParams::new(1.0, 1.0, 60.0, 0.0);
    let coarse = SimConfig { duration: 10.0, samples: 500, ..Default::default() };
    let fine = SimConfig { samples: 2000, ..coarse.clone() };

    let drift = |config: &SimConfig, method| {
        let p = Pendulum::new(params, config, method).unwrap();
        max_drift(&energy(&p, config.gravity))
    };

    let euler_coarse = drift(&coarse, Method::Euler);
    let euler_fine = drift(&fine, Method::Euler);
    let rk4_coarse = drift(&coarse, Method::RungeKutta4);
    let rk4_fine = drift(&fine, Method::RungeKutta4);

    assert!(euler_fine < euler_coarse);
    assert!(rk4_fine < rk4_coarse);
    assert!(rk4_coarse < euler_coarse);
    assert!(rk4_fine < 1e-5);
}

#[test]
fn adaptive_conserves_energy() {
    let config = SimConfig { duration: 20.0, samples: 400, ..Default::default() };
    let p = Pendulum::new(PendulumParams::new(2.0, 1.0, 120.0, 0.0), &config, Method::Adaptive).unwrap();
    assert!(max_drift(&energy(&p, config.gravity)) < 1e-4);
}

#[test]
fn construction_is_reproducible() {
    let config = SimConfig::default();
    for method in [Method::Euler, Method::RungeKutta4, Method::Adaptive] {
        let a = presets::classic_double(&config, method).unwrap();
        let b = presets::classic_double(&config, method).unwrap();
        // Compare bit patterns so a NaN from a blown-up Euler run still matches itself.
        let flat = |dp: &DoublePendulum| bits(dp.trajectory().iter().flat_map(|s| s.iter().copied()));
        assert_eq!(flat(&a), flat(&b));
        assert_eq!(bits(a.position().iter().copied()), bits(b.position().iter().copied()));
    }
}

#[test]
fn pendulum_at_rest_stays_at_rest() {
    let config = SimConfig::default();
    for method in [Method::Euler, Method::RungeKutta4, Method::Adaptive] {
        let p = Pendulum::new(PendulumParams::new(1.0, 1.0, 0.0, 0.0), &config, method).unwrap();
        assert_eq!(p.trajectory().len(), 1000);
        for s in p.trajectory() {
            assert_eq!(s[0], 0.0);
            assert_eq!(s[1], 0.0);
        }
    }
}

#[test]
fn positions_lie_on_circle() {
    let config = SimConfig::default();
    let p = Pendulum::new(PendulumParams::new(0.8, 1.0, 100.0, 3.0), &config, Method::Adaptive).unwrap();
    for row in p.position().row_iter() {
        assert_relative_eq!(row[0] * row[0] + row[1] * row[1], 0.64, epsilon = 1e-12);
    }
}

#[test]
fn wrap_is_periodic_and_bounded() {
    for k in -4..=4 {
        for theta in [-3.0, -1.0, 0.0, 0.5, 2.5] {
            let w = wrap_angle(theta + std::f64::consts::TAU * k as f64);
            assert!(w > -std::f64::consts::PI && w <= std::f64::consts::PI);
            assert_abs_diff_eq!(w, wrap_angle(theta), epsilon = 1e-12);
        }
    }
}

#[test]
fn double_pendulum_system_example() {
    let config = SimConfig { duration: 30.0, samples: 1000, ..Default::default() };
    let p1 = Pendulum::new(PendulumParams::new(1.0, 2.0, 120.0, 0.0), &config, Method::Adaptive).unwrap();
    let p2 = Pendulum::new(PendulumParams::new(1.0, 2.0, 120.0, 0.0), &config, Method::Adaptive).unwrap();
    let dp = DoublePendulum::from_pendulums(&p1, &p2, &config, Method::Adaptive).unwrap();
    let system = PendulumSystem::new(vec![dp.into()]).unwrap();

    assert!(system.has_double());
    let pos = &system.positions()[0];
    assert_eq!(pos.shape(), (1000, 4));

    let th = 120_f64.to_radians();
    assert_relative_eq!(pos[(0, 0)], th.sin());
    assert_relative_eq!(pos[(0, 1)], th.sin() + th.sin());
    assert_relative_eq!(pos[(0, 2)], -th.cos());
    assert_relative_eq!(pos[(0, 3)], -th.cos() - th.cos());
}

#[test]
fn gravity_is_configurable() {
    let params = PendulumParams::new(1.0, 1.0, 20.0, 0.0);
    let earth = SimConfig { duration: 2.0, samples: 100, ..Default::default() };
    let moon = SimConfig { gravity: 1.62, ..earth.clone() };
    let a = Pendulum::new(params, &earth, Method::RungeKutta4).unwrap();
    let b = Pendulum::new(params, &moon, Method::RungeKutta4).unwrap();
    // Weaker gravity swings slower, so the angle has dropped less after 0.3 s.
    let i = 15;
    assert!(b.trajectory()[i][0] > a.trajectory()[i][0]);
}
