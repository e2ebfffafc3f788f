/// Domain layer - pure prerequisite analysis with no I/O
pub mod domain;
pub mod policies;
pub mod services;
