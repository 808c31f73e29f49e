/// Crate-wide result type; errors carry their context chain via anyhow.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
