//! Read-only data model of the visualized network.
//!
//! The visualizer only ever queries this model; it never mutates it. The
//! host owns the network and updates activations between frames. Draw
//! positions are deliberately NOT stored here; they live in the pass-scoped
//! [`crate::layout::NeuronLayout`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a neuron, unique within one [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NeuronId(pub u32);

/// A weighted incoming connection of a working neuron.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Connection {
    pub source: NeuronId,
    pub weight: f32,
}

/// Role of a neuron. Input neurons have no incoming connections; working
/// neurons (hidden or output) carry an ordered list of them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NeuronKind {
    Input,
    Working { incoming: Vec<Connection> },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neuron {
    pub id: NeuronId,
    pub name: String,
    /// Current signed output of the neuron.
    pub activation: f32,
    pub kind: NeuronKind,
}

impl Neuron {
    pub fn input(id: NeuronId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            activation: 0.0,
            kind: NeuronKind::Input,
        }
    }

    pub fn working(id: NeuronId, name: impl Into<String>, incoming: Vec<Connection>) -> Self {
        Self {
            id,
            name: name.into(),
            activation: 0.0,
            kind: NeuronKind::Working { incoming },
        }
    }

    /// Incoming connections; empty for input neurons.
    pub fn incoming(&self) -> &[Connection] {
        match &self.kind {
            NeuronKind::Input => &[],
            NeuronKind::Working { incoming } => incoming,
        }
    }
}

/// Three ordered layers of neurons. Layer order and membership are stable
/// for the duration of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Network {
    pub inputs: Vec<Neuron>,
    pub hidden: Vec<Neuron>,
    pub outputs: Vec<Neuron>,
}

impl Network {
    /// Layers in input -> hidden -> output order.
    pub fn layers(&self) -> [&[Neuron]; 3] {
        [&self.inputs, &self.hidden, &self.outputs]
    }

    /// Layers that can carry incoming connections.
    pub fn working_layers(&self) -> [&[Neuron]; 2] {
        [&self.hidden, &self.outputs]
    }

    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.layers()
            .into_iter()
            .flatten()
            .find(|n| n.id == id)
    }

    pub fn neuron_count(&self) -> usize {
        self.inputs.len() + self.hidden.len() + self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neuron_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_neurons_have_no_incoming() {
        let n = Neuron::input(NeuronId(0), "bias");
        assert!(n.incoming().is_empty());
    }

    #[test]
    fn neuron_lookup_crosses_layers() {
        let net = Network {
            inputs: vec![Neuron::input(NeuronId(0), "in")],
            hidden: vec![Neuron::working(
                NeuronId(1),
                "h0",
                vec![Connection {
                    source: NeuronId(0),
                    weight: 0.5,
                }],
            )],
            outputs: vec![Neuron::working(
                NeuronId(2),
                "out",
                vec![Connection {
                    source: NeuronId(1),
                    weight: -0.25,
                }],
            )],
        };

        assert_eq!(net.neuron_count(), 3);
        assert_eq!(net.neuron(NeuronId(1)).unwrap().name, "h0");
        assert_eq!(net.neuron(NeuronId(2)).unwrap().incoming().len(), 1);
        assert!(net.neuron(NeuronId(9)).is_none());
    }
}
