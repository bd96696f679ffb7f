/// Data layer: distribution, sampling, and series files.
///
/// Architecture:
/// ```text
///   a b N  +  z₁ … z_N
///        │
///        ▼
///   ┌──────────┐
///   │  input   │  validate bounds → Grid, read temperatures
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ sampler  │  f(x, μ, z) on the grid → Series, Extrema
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  <i>.txt per series + plot script entry
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  <i>.txt → Series (viewer)
///   └──────────┘
/// ```

pub mod input;
pub mod loader;
pub mod model;
pub mod physics;
pub mod sampler;
pub mod writer;
