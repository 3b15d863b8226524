//! Concrete calendar implementations.

/// United States federal calendar.
pub mod united_states;
