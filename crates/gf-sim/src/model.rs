//! TransientModel trait for pluggable dynamic systems.

use crate::error::SimResult;

/// Trait for transient (dynamic) system models.
///
/// A model supplies its state type, the initial condition, the right-hand
/// side `x_dot = f(t, x)`, and elementwise state arithmetic so integrators
/// can form Runge-Kutta stages without knowing the state layout.
pub trait TransientModel {
    /// State type (must be Clone, for snapshots).
    type State: Clone;

    /// Return the initial state at t = 0.
    fn initial_state(&self) -> Self::State;

    /// Compute the state derivative dxdt = f(t, x).
    ///
    /// Takes &mut self to allow models to cache intermediate solves.
    fn rhs(&mut self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}
