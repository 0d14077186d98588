// Service exports
pub mod batch;

pub use batch::BatchRunner;
