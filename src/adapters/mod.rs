// Adapters layer: turning external records (booking forms, spec files, CSV batches) into move specifications.

pub mod batch;
pub mod booking;
pub mod spec_file;
