/// Pattern mode selection between matrix and direct-draw generation
pub mod mode;
/// Generation parameters and validation
pub mod parameters;
/// Frame-driven generation session with cached matrix
pub mod session;
/// Symmetry strategies filling the connection grid
pub mod strategies;
