use crate::application::read_models::ConflictReadModel;
use crate::shared::Result;

/// ConflictFormatter port for rendering an analysed dependency graph
///
/// This port abstracts the output formats (plain report, Graphviz dot,
/// JSON) so the use case never depends on a concrete renderer.
pub trait ConflictFormatter {
    /// Renders the read model
    ///
    /// # Arguments
    /// * `model` - Categorised nodes, edges and clusters of the analysed graph
    ///
    /// # Returns
    /// The rendered document as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ConflictReadModel) -> Result<String>;
}
