//! Gauss-Legendre collocation integration method
//!
//! The 4-stage Gauss-Legendre implicit Runge-Kutta scheme is the
//! highest-order method obtainable from four stages. It is A-stable and
//! symplectic, so damped or conservative oscillators keep
//! their phase-space structure over long runs where explicit schemes drift.

use super::PhaseVector;
use crate::physics::math::Scalar;

/// Number of collocation stages
const STAGES: usize = 4;

/// Default cap on fixed-point sweeps per step
pub const DEFAULT_MAX_ITERATIONS: usize = 16;

/// 8th-order Gauss-Legendre integrator (GL8)
///
/// Each step solves the implicit stage equations
///
/// ```text
/// k_i = f(y + h * Σ_j a_ij * k_j),    i = 1..4
/// y(t+h) = y(t) + h * Σ_i b_i * k_i
/// ```
///
/// where the nodes `c_i` are the roots of the shifted Legendre polynomial
/// `P4(2t - 1)` and `a_ij = ∫_0^{c_i} ℓ_j(t) dt` for the Lagrange basis `ℓ_j`
/// on those nodes.
///
/// # Stage Solve
///
/// Stages are found by Picard (fixed-point) iteration. The first sub-step
/// seeds every stage with `f(y)`; each following sub-step starts from the
/// converged stages of the one before it. Sweeps stop once the largest
/// stage change falls to `f64::EPSILON` relative to the largest stage value,
/// or after `max_iterations` sweeps, whichever comes first. The last iterate
/// is accepted either way: the map is contractive for `h * L * |A| < 1`,
/// which holds for the smooth, mildly nonlinear right-hand sides used here.
/// With `h = 0.1` and a unit Lipschitz constant about ten sweeps suffice.
///
/// # Mathematical Properties
///
/// - **Order of accuracy**: O(h⁸) global error
/// - **Symplectic**: Yes, for Hamiltonian right-hand sides
/// - **Stability**: A-stable
/// - **Right-hand side evaluations**: 4 per sweep
///
/// # Reference
///
/// Butcher (1964) "Implicit Runge-Kutta processes", Mathematics of
/// Computation 18(85), 50-64. DOI: 10.1090/S0025-5718-1964-0159424-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaussLegendre8 {
    max_iterations: usize,
}

impl GaussLegendre8 {
    /// Collocation nodes `c_i`
    pub const NODES: [Scalar; STAGES] = [
        0.069_431_844_202_973_71,
        0.330_009_478_207_571_87,
        0.669_990_521_792_428_1,
        0.930_568_155_797_026_3,
    ];

    /// Runge-Kutta matrix `a_ij`
    pub const COEFFICIENTS: [[Scalar; STAGES]; STAGES] = [
        [
            0.086_963_711_284_363_46,
            -0.026_604_180_084_998_794,
            0.012_627_462_689_404_725,
            -0.003_555_149_685_795_683_3,
        ],
        [
            0.188_118_117_499_868_06,
            0.163_036_288_715_636_52,
            -0.027_880_428_602_470_895,
            0.006_735_500_594_538_156,
        ],
        [
            0.167_191_921_974_188_78,
            0.353_953_006_033_743_97,
            0.163_036_288_715_636_52,
            -0.014_190_694_931_141_144,
        ],
        [
            0.177_482_572_254_522_6,
            0.313_445_114_741_868_37,
            0.352_676_757_516_271_87,
            0.086_963_711_284_363_46,
        ],
    ];

    /// Quadrature weights `b_i`
    pub const WEIGHTS: [Scalar; STAGES] = [
        0.173_927_422_568_726_92,
        0.326_072_577_431_273_05,
        0.326_072_577_431_273_05,
        0.173_927_422_568_726_92,
    ];

    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set the cap on fixed-point sweeps per step (at least one sweep runs)
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn name(&self) -> &'static str {
        "gauss_legendre_8"
    }

    pub fn convergence_order(&self) -> usize {
        2 * STAGES
    }

    pub fn stages(&self) -> usize {
        STAGES
    }

    /// Advance `state` by `step`, split into `steps` equal sub-steps
    ///
    /// Zero sub-steps leave the state untouched.
    pub fn advance<S, F>(&self, state: S, step: Scalar, steps: usize, rhs: F) -> S
    where
        S: PhaseVector,
        F: Fn(S) -> S,
    {
        if steps == 0 {
            return state;
        }

        let h = step / steps as Scalar;
        let mut stages = [rhs(state); STAGES];
        let mut state = state;

        for _ in 0..steps {
            self.solve_stages(state, h, &mut stages, &rhs);

            let mut increment = S::ZERO;
            for (k, b) in stages.iter().zip(Self::WEIGHTS) {
                increment = increment + *k * b;
            }
            state = state + increment * h;
        }

        state
    }

    /// Picard iteration on the stage derivatives, starting from `stages`
    fn solve_stages<S, F>(&self, state: S, h: Scalar, stages: &mut [S; STAGES], rhs: &F)
    where
        S: PhaseVector,
        F: Fn(S) -> S,
    {
        for _ in 0..self.max_iterations {
            let mut updated = [S::ZERO; STAGES];
            for (i, row) in Self::COEFFICIENTS.iter().enumerate() {
                let mut combination = S::ZERO;
                for (k, a) in stages.iter().zip(row) {
                    combination = combination + *k * *a;
                }
                updated[i] = rhs(state + combination * h);
            }

            let mut change: Scalar = 0.0;
            let mut magnitude: Scalar = 0.0;
            for (new, old) in updated.iter().zip(stages.iter()) {
                change = change.max((*new - *old).max_norm());
                magnitude = magnitude.max(new.max_norm());
            }

            *stages = updated;

            if change <= Scalar::EPSILON * magnitude {
                break;
            }
        }
    }
}

impl Default for GaussLegendre8 {
    fn default() -> Self {
        Self::new()
    }
}

/// Advance `state` with the default GL8 settings
pub fn gauss_legendre_8<S, F>(state: S, step: Scalar, steps: usize, rhs: F) -> S
where
    S: PhaseVector,
    F: Fn(S) -> S,
{
    GaussLegendre8::new().advance(state, step, steps, rhs)
}
