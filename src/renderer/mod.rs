//! Rendering data for a GPU backend
//!
//! Produces triangle lists of colored vertices; the host owns the device,
//! surface and pipeline.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{FieldProjection, build_frame, build_frame_ndc};
pub use vertex::Vertex;
