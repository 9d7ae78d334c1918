//! Gauss-Legendre integrator and geometry benchmarks
//!
//! - Performance of a single particle tick for each force law
//! - Cost of the sub-step count used by the simulation plugin
//! - Accuracy against the free-particle closed form (error reported as a
//!   duration scaled by 1e18, lower is better)
//! - Principal decomposition of affine transforms

use criterion::{BenchmarkId, Criterion, PlotConfiguration, criterion_group, criterion_main};
use std::hint::black_box;

extern crate radiation2d;
use radiation2d::geometry::{AffineTransform, Point};
use radiation2d::physics::integrators::gauss_legendre_8;
use radiation2d::physics::math::{PhaseState, Scalar, Vector};
use radiation2d::physics::particle::Particle;
use radiation2d::physics::trajectory::Trajectory;

// =============================================================================
// Performance Benchmarks
// =============================================================================

fn bench_particle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_tick");

    let initial = Particle::new(PhaseState::new(-0.5, 0.0, 0.5, 0.25));
    let laws = [("free", None), ("tracking", Some(Vector::new(1.0, 1.0)))];

    for (name, follow) in laws {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut particle = black_box(initial);
                particle.advance(black_box(1.0 / 60.0), follow, 10);
                black_box(particle.state());
            });
        });
    }

    group.finish();
}

fn bench_substeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("substeps");
    group
        .plot_config(PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic));

    let racetrack = Trajectory::Racetrack(2.0);

    for steps in [1, 4, 10, 40] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut particle = Particle::at_rest(Vector::ZERO);
                for tick in 0..60 {
                    let target = racetrack.position(tick as Scalar / 60.0);
                    particle.advance(1.0 / 60.0, Some(target), steps);
                }
                black_box(particle.state());
            });
        });
    }

    group.finish();
}

// =============================================================================
// Accuracy Benchmarks
// =============================================================================

fn bench_free_particle_accuracy(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_particle_accuracy");

    for steps in [1, 2, 5, 10] {
        group.bench_function(BenchmarkId::new("steps_per_unit_time", steps), |b| {
            b.iter_custom(|iters| {
                let mut total_error = 0.0;

                for _ in 0..iters {
                    let psi: Scalar = 1.5;
                    let initial = PhaseState::new(-psi, 0.0, psi.sinh(), 0.0);
                    let rhs = |s: PhaseState| {
                        let p = Vector::new(s.z, s.w);
                        let v = p / (1.0 + p.length_squared()).sqrt();
                        PhaseState::new(v.x, v.y, -p.x, -p.y)
                    };

                    let state = gauss_legendre_8(initial, 5.0, 5 * steps, rhs);
                    let exact_momentum = psi.sinh() * (-5.0 as Scalar).exp();
                    let exact_position = -exact_momentum.asinh();
                    total_error +=
                        (state.x - exact_position).abs() + (state.z - exact_momentum).abs();
                }

                // Errors sit near machine precision, so scale them well up
                let avg_error = total_error / iters as f64;
                std::time::Duration::from_nanos((avg_error * 1e18) as u64)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Geometry Benchmarks
// =============================================================================

fn bench_principal_decomposition(c: &mut Criterion) {
    let transform = AffineTransform::rotation(0.3)
        * AffineTransform::scale_xy(1.7, -0.6)
        * AffineTransform::rotation(-1.2)
        + Point::new(0.25, -2.5);

    c.bench_function("principal_decomposition", |b| {
        b.iter(|| {
            let decomposition = black_box(transform).principal_decomposition();
            black_box(decomposition.recompose(transform.shift_point()));
        });
    });
}

// =============================================================================
// Benchmark Groups
// =============================================================================

criterion_group!(performance, bench_particle_tick, bench_substeps);

criterion_group!(accuracy, bench_free_particle_accuracy);

criterion_group!(geometry, bench_principal_decomposition);

criterion_main!(performance, accuracy, geometry);
