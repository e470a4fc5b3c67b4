pub mod attainment;
pub mod curve;
pub mod policy;

pub use attainment::{attainment, raw_result, validate_input, AttainmentLine};
pub use curve::{linspace, marker_position, markers, sample_curve, DEFAULT_SAMPLES};
pub use policy::{ScalePolicy, TARGET_RESULT};
