// Optimizer documents
pub mod optimization_log;
pub mod parameter_history;
pub mod strategy_parameters;
pub mod trading_journal;

// Performance summary over journal and optimizer timeline
pub mod performance_comparison;

// Data source trait
pub mod repositories;

// Display helpers
pub mod formatting;

// Domain-specific error types
pub mod errors;
