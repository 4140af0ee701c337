// Report rendering over the optimizer's documents
pub mod reporting;
