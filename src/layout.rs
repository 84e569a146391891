//! Layout engine: deterministic screen positions for every neuron.
//!
//! Inputs sit on a vertical line at the left edge of the target rect, outputs
//! at the right edge, hidden neurons at the horizontal midpoint. All columns
//! are inset by half the visual diameter so discs stay inside the rect.

use glam::Vec2;
use hashbrown::HashMap;

use crate::network::{Network, Neuron, NeuronId};

/// Axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Positions for one render pass, keyed by neuron id.
///
/// Recomputed at the start of every pass; the hit tester and the draw
/// orchestrator both read from the same instance so geometry always agrees.
#[derive(Debug, Clone, Default)]
pub struct NeuronLayout {
    positions: HashMap<NeuronId, Vec2>,
}

impl NeuronLayout {
    /// Solve positions for all three layers of `network` inside `rect`,
    /// given the fixed visual `diameter` of a neuron disc.
    pub fn solve(rect: Rect, network: &Network, diameter: f32) -> Self {
        let inset = diameter * 0.5;
        let y_min = rect.y + inset;
        let y_max = rect.bottom() - inset;

        let mut layout = Self {
            positions: HashMap::with_capacity(network.neuron_count()),
        };
        layout.place_column(&network.inputs, rect.x + inset, y_min, y_max);
        layout.place_column(&network.hidden, rect.x + rect.w * 0.5, y_min, y_max);
        layout.place_column(&network.outputs, rect.right() - inset, y_min, y_max);
        layout
    }

    /// Distribute one layer along the vertical span `[y_min, y_max]` at a
    /// fixed `x`. First neuron at the top bound, last at the bottom bound.
    /// A lone neuron sits at the center of the span; an empty layer places
    /// nothing.
    fn place_column(&mut self, layer: &[Neuron], x: f32, y_min: f32, y_max: f32) {
        match layer.len() {
            0 => {}
            1 => {
                self.positions
                    .insert(layer[0].id, Vec2::new(x, 0.5 * (y_min + y_max)));
            }
            n => {
                let step = (y_max - y_min) / (n - 1) as f32;
                for (i, neuron) in layer.iter().enumerate() {
                    self.positions
                        .insert(neuron.id, Vec2::new(x, y_min + step * i as f32));
                }
            }
        }
    }

    pub fn position(&self, id: NeuronId) -> Option<Vec2> {
        self.positions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Neuron;

    const DIAMETER: f32 = 15.0;

    fn layer(first_id: u32, count: usize) -> Vec<Neuron> {
        (0..count as u32)
            .map(|i| Neuron::input(NeuronId(first_id + i), format!("n{}", first_id + i)))
            .collect()
    }

    fn net(inputs: usize, hidden: usize, outputs: usize) -> Network {
        Network {
            inputs: layer(0, inputs),
            hidden: layer(100, hidden),
            outputs: layer(200, outputs),
        }
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn layout_is_deterministic() {
        let network = net(3, 5, 2);
        let rect = Rect::new(10.0, 20.0, 640.0, 480.0);
        let a = NeuronLayout::solve(rect, &network, DIAMETER);
        let b = NeuronLayout::solve(rect, &network, DIAMETER);
        for n in network.layers().into_iter().flatten() {
            assert_eq!(a.position(n.id), b.position(n.id));
        }
    }

    #[test]
    fn layers_form_vertical_columns() {
        let network = net(4, 4, 4);
        let rect = Rect::new(50.0, 0.0, 400.0, 300.0);
        let layout = NeuronLayout::solve(rect, &network, DIAMETER);

        for n in &network.inputs {
            assert_close(layout.position(n.id).unwrap().x, 50.0 + DIAMETER / 2.0);
        }
        for n in &network.hidden {
            assert_close(layout.position(n.id).unwrap().x, 50.0 + 200.0);
        }
        for n in &network.outputs {
            assert_close(layout.position(n.id).unwrap().x, 450.0 - DIAMETER / 2.0);
        }
    }

    #[test]
    fn column_spans_full_height_with_uniform_spacing() {
        let network = net(0, 5, 0);
        let rect = Rect::new(0.0, 100.0, 300.0, 215.0);
        let layout = NeuronLayout::solve(rect, &network, DIAMETER);

        let ys: Vec<f32> = network
            .hidden
            .iter()
            .map(|n| layout.position(n.id).unwrap().y)
            .collect();
        assert_close(ys[0], 100.0 + DIAMETER / 2.0);
        assert_close(*ys.last().unwrap(), 315.0 - DIAMETER / 2.0);
        let step = ys[1] - ys[0];
        for pair in ys.windows(2) {
            assert_close(pair[1] - pair[0], step);
        }
    }

    #[test]
    fn single_neuron_layer_sits_at_span_center() {
        let network = net(0, 0, 1);
        let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
        let layout = NeuronLayout::solve(rect, &network, DIAMETER);

        let pos = layout.position(NeuronId(200)).unwrap();
        assert_close(pos.x, 292.5);
        assert_close(pos.y, 100.0);
    }

    #[test]
    fn empty_layers_place_nothing() {
        let network = net(0, 0, 0);
        let layout = NeuronLayout::solve(Rect::new(0.0, 0.0, 100.0, 100.0), &network, DIAMETER);
        assert!(layout.is_empty());
    }
}
