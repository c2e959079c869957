pub mod analyze;
pub mod explain;
pub mod inputs;
pub mod issues;
