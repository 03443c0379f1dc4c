//! Graph model, JSON loading, and built-in samples
//!
//! The model is a dense adjacency matrix with node labels. Algorithms
//! consume it through read-only views (neighbor iteration, edge lists),
//! so the matrix itself never changes after construction.

pub mod loader;
pub mod model;
pub mod samples;

pub use loader::{default_labels, load_json, load_path};
pub use model::{grid_coords, Edge, Graph};
pub use samples::{sample, SAMPLE_NAMES};
