//! Hit testing of the pointer against the current layout.

use glam::Vec2;

use crate::layout::NeuronLayout;
use crate::network::{Network, NeuronId};

/// Return the first neuron whose visual disc contains `pointer`, scanning
/// input, then hidden, then output layer. Ties across overlapping discs
/// resolve to that fixed priority. Pure function of the pass geometry.
pub fn neuron_under(
    network: &Network,
    layout: &NeuronLayout,
    pointer: Vec2,
    diameter: f32,
) -> Option<NeuronId> {
    let radius_sq = (diameter * 0.5) * (diameter * 0.5);
    for layer in network.layers() {
        for neuron in layer {
            if let Some(pos) = layout.position(neuron.id) {
                if pos.distance_squared(pointer) <= radius_sq {
                    return Some(neuron.id);
                }
            }
        }
    }
    None
}
