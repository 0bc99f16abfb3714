/// Invalid geometry configuration, reported when a shape is constructed.
/// Compilation never raises; everything it touches was validated here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    DegeneratePolygon { count: usize },

    #[error("regular polygon needs at least 3 sides, got {sides}")]
    TooFewSides { sides: usize },

    #[error("per-side texture list has {actual} entries for a volume with {expected} sides")]
    SideCountMismatch { expected: usize, actual: usize },
}
