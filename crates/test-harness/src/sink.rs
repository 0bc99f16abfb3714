//! A recording render sink for asserting draw order and stroke handling.

use geo::Geometry;

use iso_scene::RenderSink;

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Stroke(i32),
    NoStroke,
    Geometry(Geometry<f64>),
}

/// Records every call so tests can assert on draw order and stroke state.
#[derive(Debug, Default)]
pub struct MockSink {
    pub events: Vec<SinkEvent>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers passed to `stroke`, in call order.
    pub fn stroked_layers(&self) -> Vec<i32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Stroke(layer) => Some(*layer),
                _ => None,
            })
            .collect()
    }

    pub fn no_stroke_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::NoStroke))
            .count()
    }

    pub fn geometry_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::Geometry(_)))
            .count()
    }
}

impl RenderSink for MockSink {
    fn stroke(&mut self, layer: i32) {
        self.events.push(SinkEvent::Stroke(layer));
    }

    fn no_stroke(&mut self) {
        self.events.push(SinkEvent::NoStroke);
    }

    fn geometry(&mut self, geometry: &Geometry<f64>) {
        self.events.push(SinkEvent::Geometry(geometry.clone()));
    }
}
