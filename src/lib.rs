//! Live, read-only visualization of a layered neural network: neurons in
//! vertical columns, activation-coded discs, weight-coded connection lines,
//! and pointer-driven highlighting of a neuron's connection neighborhood.

pub mod hover;
pub mod intensity;
pub mod layout;
pub mod network;
pub mod render;

pub use glam::Vec2;
pub use layout::{NeuronLayout, Rect};
pub use network::{Connection, Network, Neuron, NeuronId, NeuronKind};
pub use render::{Canvas, LabelAlign, LabelStyle, NetworkVisualizer, Rgba, VisualStyle};
