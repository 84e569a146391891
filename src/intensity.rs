//! Connection intensity normalization.
//!
//! Line brightness is scaled relative to the strongest connection in the
//! whole network so the palette stays comparable as weights drift.

use crate::network::Network;

/// Maximum absolute incoming-connection weight across all working neurons.
/// Returns 0.0 when the network carries no connections at all.
pub fn strongest_connection(network: &Network) -> f32 {
    let mut strongest = 0.0f32;
    for layer in network.working_layers() {
        for neuron in layer {
            for conn in neuron.incoming() {
                strongest = strongest.max(conn.weight.abs());
            }
        }
    }
    strongest
}

/// Visual intensity of one connection: `sqrt(|weight| / strongest)`, always
/// in `[0, 1]`. A zero `strongest` (no connections, or all weights zero)
/// yields 0.0 rather than NaN.
pub fn normalized(weight: f32, strongest: f32) -> f32 {
    if strongest <= 0.0 {
        return 0.0;
    }
    (weight.abs() / strongest).sqrt().min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Connection, Network, Neuron, NeuronId};

    fn conn(source: u32, weight: f32) -> Connection {
        Connection {
            source: NeuronId(source),
            weight,
        }
    }

    fn net_with_weights(hidden: &[f32], output: &[f32]) -> Network {
        Network {
            inputs: vec![Neuron::input(NeuronId(0), "in")],
            hidden: vec![Neuron::working(
                NeuronId(1),
                "h",
                hidden.iter().map(|&w| conn(0, w)).collect(),
            )],
            outputs: vec![Neuron::working(
                NeuronId(2),
                "out",
                output.iter().map(|&w| conn(1, w)).collect(),
            )],
        }
    }

    #[test]
    fn strongest_spans_hidden_and_output_layers() {
        let net = net_with_weights(&[0.3, -0.9], &[0.4]);
        assert_eq!(strongest_connection(&net), 0.9);

        let net = net_with_weights(&[0.3], &[-1.7, 0.2]);
        assert_eq!(strongest_connection(&net), 1.7);
    }

    #[test]
    fn network_without_connections_has_zero_strength() {
        let net = Network {
            inputs: vec![Neuron::input(NeuronId(0), "in")],
            hidden: vec![],
            outputs: vec![Neuron::working(NeuronId(1), "out", vec![])],
        };
        assert_eq!(strongest_connection(&net), 0.0);
    }

    #[test]
    fn normalized_stays_in_unit_interval() {
        let weights = [-2.0, -0.5, 0.0, 0.25, 2.0];
        let strongest = 2.0;
        for w in weights {
            let v = normalized(w, strongest);
            assert!((0.0..=1.0).contains(&v), "intensity {v} out of range");
        }
        assert_eq!(normalized(2.0, strongest), 1.0);
        assert_eq!(normalized(0.0, strongest), 0.0);
    }

    #[test]
    fn zero_strength_network_normalizes_to_zero() {
        let net = net_with_weights(&[0.0, 0.0], &[0.0]);
        let strongest = strongest_connection(&net);
        assert_eq!(strongest, 0.0);
        for layer in net.working_layers() {
            for neuron in layer {
                for c in neuron.incoming() {
                    let v = normalized(c.weight, strongest);
                    assert_eq!(v, 0.0);
                    assert!(v.is_finite());
                }
            }
        }
    }
}
