use geo::Geometry;

/// The external stroking collaborator. [`Scene::render`] drives a sink
/// with the compiled geometry list in draw order.
///
/// [`Scene::render`]: crate::Scene::render
pub trait RenderSink {
    /// Select the stroke for subsequent geometry on the given layer.
    fn stroke(&mut self, layer: i32);

    /// Disable stroking for subsequent geometry. Used for layer 0, the
    /// reserved "no visible stroke" layer.
    fn no_stroke(&mut self);

    /// Emit one geometry under the current stroke state.
    fn geometry(&mut self, geometry: &Geometry<f64>);
}
