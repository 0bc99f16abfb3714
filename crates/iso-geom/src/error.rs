/// Errors from render configuration. Raised at construction time only;
/// projection itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// The clipping frame has no interior, so a centroid grid origin
    /// cannot be resolved.
    #[error("frame polygon is degenerate: no centroid to resolve the grid origin")]
    DegenerateFrame,
}
