/// Conflict analysis domain - pure graph classification logic, no I/O
pub mod domain;
pub mod policies;
pub mod services;
