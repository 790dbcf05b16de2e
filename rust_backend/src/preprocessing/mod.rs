pub mod pipeline;
pub mod reshaper;

pub use pipeline::{
    compute_capacity, CapacityPipeline, CapacityReport, PipelineConfig, PipelineDiagnostics,
};
pub use reshaper::{reshape_volumes, VolumeTable};
