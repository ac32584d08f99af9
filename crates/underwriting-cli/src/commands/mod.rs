pub mod pipeline;
pub mod underwriting;
