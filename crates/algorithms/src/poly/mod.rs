//! Polynomial ring engine for Z_q[X]/(X^256 + 1), q = 3329
//!
//! Bottom-up: [`reduce`] holds the scalar reduction kernel, [`ntt`] the
//! transform and base multiplication, [`polynomial`] the ring element,
//! [`serialize`] byte encodings and [`sampling`] the noise and uniform
//! samplers.

pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod reduce;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::ntt::{base_multiplier, inv_ntt, ntt};
    pub use super::polynomial::Polynomial;
    pub use super::reduce::{barrett_reduce, csubq, fqmul, montgomery_reduce};
    pub use super::sampling::{get_noise_poly, rej_uniform, CbdSampler, DefaultSamplers};
    pub use super::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};
}
