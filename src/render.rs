//! Draw orchestrator: one full visualization pass per frame.
//!
//! A pass recomputes the layout, hit-tests the pointer, normalizes
//! connection intensity, then walks the layers in output -> hidden -> input
//! order emitting calls into a [`Canvas`] backend. The pass holds no state
//! beyond the frame; everything is rebuilt on the next call.

use glam::Vec2;

use crate::hover;
use crate::intensity;
use crate::layout::{NeuronLayout, Rect};
use crate::network::{Connection, Network, Neuron, NeuronId, NeuronKind};

/// RGBA color, all channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing backend the orchestrator emits into. The implementing type owns
/// its rendering context (font handle, target surface); the orchestrator
/// never touches globals.
pub trait Canvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);
    fn text(&mut self, text: &str, pos: Vec2, color: Rgba);
    /// Rendered width of `text` in the canvas's current font.
    fn text_width(&self, text: &str) -> f32;
}

/// Horizontal anchoring of a neuron label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    /// Text starts at the offset point.
    Left,
    /// Text ends at the offset point (shifted left by its measured width).
    Right,
}

/// Per-layer label placement: offset from the neuron center plus alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub offset: Vec2,
    pub align: LabelAlign,
}

/// Visual parameters of a pass. `diameter` drives layout insets, hit-test
/// radius, and disc sizes, so all three always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualStyle {
    pub diameter: f32,
    pub line_thickness: f32,
    pub ring_color: Rgba,
    pub positive_color: Rgba,
    pub negative_color: Rgba,
    pub label_color: Rgba,
    pub input_labels: Option<LabelStyle>,
    pub hidden_labels: Option<LabelStyle>,
    pub output_labels: Option<LabelStyle>,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            diameter: 15.0,
            line_thickness: 1.0,
            ring_color: Rgba::WHITE,
            positive_color: Rgba::GREEN,
            negative_color: Rgba::RED,
            label_color: Rgba::WHITE,
            // Input names read right-to-left into the margin, output names
            // read outward to the right. Hidden neurons stay unlabeled.
            input_labels: Some(LabelStyle {
                offset: Vec2::new(-10.0, -10.0),
                align: LabelAlign::Right,
            }),
            hidden_labels: None,
            output_labels: Some(LabelStyle {
                offset: Vec2::new(10.0, -10.0),
                align: LabelAlign::Left,
            }),
        }
    }
}

/// Read-only inspector over a network's runtime state.
///
/// Attach a network once, then call [`NetworkVisualizer::draw`] every frame
/// with the current bounding rect and pointer position. Drawing with no
/// network attached is a defined no-op.
#[derive(Debug, Clone, Default)]
pub struct NetworkVisualizer {
    network: Option<Network>,
    style: VisualStyle,
}

impl NetworkVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: VisualStyle) -> Self {
        Self {
            network: None,
            style,
        }
    }

    /// Set or replace the visualized network.
    pub fn attach_network(&mut self, network: Network) {
        self.network = Some(network);
    }

    /// Remove and return the attached network, if any.
    pub fn detach(&mut self) -> Option<Network> {
        self.network.take()
    }

    pub fn network(&self) -> Option<&Network> {
        self.network.as_ref()
    }

    /// Host-side access for updating activations between frames.
    pub fn network_mut(&mut self) -> Option<&mut Network> {
        self.network.as_mut()
    }

    pub fn style(&self) -> &VisualStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut VisualStyle {
        &mut self.style
    }

    /// The neuron whose disc would be under `pointer` for a pass into
    /// `rect`. Uses the same geometry as [`NetworkVisualizer::draw`].
    pub fn hovered_neuron(&self, rect: Rect, pointer: Vec2) -> Option<&Neuron> {
        let network = self.network.as_ref()?;
        let layout = NeuronLayout::solve(rect, network, self.style.diameter);
        let id = hover::neuron_under(network, &layout, pointer, self.style.diameter)?;
        network.neuron(id)
    }

    /// One full visualization pass: layout, hit test, normalization, then
    /// draw calls for every layer in output -> hidden -> input order.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, rect: Rect, pointer: Vec2) {
        let Some(network) = &self.network else {
            return;
        };

        let layout = NeuronLayout::solve(rect, network, self.style.diameter);
        let hovered = hover::neuron_under(network, &layout, pointer, self.style.diameter);
        let strongest = intensity::strongest_connection(network);

        self.draw_layer(
            canvas,
            &network.outputs,
            &layout,
            hovered,
            strongest,
            self.style.output_labels,
        );
        self.draw_layer(
            canvas,
            &network.hidden,
            &layout,
            hovered,
            strongest,
            self.style.hidden_labels,
        );
        self.draw_layer(
            canvas,
            &network.inputs,
            &layout,
            hovered,
            strongest,
            self.style.input_labels,
        );
    }

    fn draw_layer<C: Canvas>(
        &self,
        canvas: &mut C,
        layer: &[Neuron],
        layout: &NeuronLayout,
        hovered: Option<NeuronId>,
        strongest: f32,
        labels: Option<LabelStyle>,
    ) {
        for neuron in layer {
            self.draw_neuron(canvas, neuron, layout, hovered, strongest, labels);
        }
    }

    fn draw_neuron<C: Canvas>(
        &self,
        canvas: &mut C,
        neuron: &Neuron,
        layout: &NeuronLayout,
        hovered: Option<NeuronId>,
        strongest: f32,
        labels: Option<LabelStyle>,
    ) {
        let Some(pos) = layout.position(neuron.id) else {
            return;
        };

        if let NeuronKind::Working { incoming } = &neuron.kind {
            self.draw_connections(canvas, neuron.id, pos, incoming, layout, hovered, strongest);
        }

        canvas.stroke_circle(pos, self.style.diameter * 0.5 + 1.0, self.style.ring_color);
        let inner_radius = neuron.activation.abs() * self.style.diameter * 0.5;
        if inner_radius > 0.0 {
            let color = if neuron.activation < 0.0 {
                self.style.negative_color
            } else {
                self.style.positive_color
            };
            canvas.fill_circle(pos, inner_radius, color);
        }

        if let Some(label) = labels {
            let mut at = pos + label.offset;
            if label.align == LabelAlign::Right {
                at.x -= canvas.text_width(&neuron.name);
            }
            canvas.text(&neuron.name, at, self.style.label_color);
        }
    }

    /// Emit this neuron's incoming connection lines. While a neuron is
    /// hovered, the whole frame is restricted to that neuron's neighborhood:
    /// lines it owns, plus lines sourced from it.
    #[allow(clippy::too_many_arguments)]
    fn draw_connections<C: Canvas>(
        &self,
        canvas: &mut C,
        id: NeuronId,
        pos: Vec2,
        incoming: &[Connection],
        layout: &NeuronLayout,
        hovered: Option<NeuronId>,
        strongest: f32,
    ) {
        for conn in incoming {
            if let Some(hovered) = hovered {
                if id != hovered && conn.source != hovered {
                    continue;
                }
            }
            let Some(source_pos) = layout.position(conn.source) else {
                continue;
            };

            // Sign picks the channel, normalized strength its intensity.
            // Alpha stays at 1: a zero-strength network draws opaque black.
            let value = intensity::normalized(conn.weight, strongest);
            let color = if conn.weight > 0.0 {
                Rgba::new(0.0, value, 0.0, 1.0)
            } else {
                Rgba::new(value, 0.0, 0.0, 1.0)
            };
            canvas.line(pos, source_pos, self.style.line_thickness, color);
        }
    }
}
