//! Macroquad host for the nnscope visualizer.
//!
//! Opens a window, animates a small demo network (or one loaded from a JSON
//! file via `--network <path>`), and renders it every frame. Hovering a
//! neuron isolates its connection neighborhood; the HUD shows its details.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use macroquad::color::{Color, DARKGRAY, WHITE};
use macroquad::input::mouse_position;
use macroquad::rand::{gen_range, srand};
use macroquad::shapes::{draw_circle, draw_circle_lines, draw_line};
use macroquad::text::{draw_text, measure_text};
use macroquad::time::get_time;
use macroquad::window::{clear_background, next_frame, screen_height, screen_width, Conf};
use thiserror::Error;
use tracing::{info, warn};

use nnscope::{
    Canvas, Connection, Network, NetworkVisualizer, Neuron, NeuronId, Rect, Rgba, Vec2,
};

// Space reserved for the HUD line above the network rect.
const TOP_UI_H: f32 = 48.0;
const UI_MARGIN: f32 = 12.0;
const HUD_FONT_SIZE: f32 = 18.0;

#[derive(Debug, Clone, Default)]
struct VisArgs {
    network_path: Option<PathBuf>,
}

impl VisArgs {
    fn from_env_and_args() -> Self {
        let mut network_path = env::var("NNSCOPE_NETWORK").ok().map(PathBuf::from);

        let mut args = env::args().skip(1);
        while let Some(a) = args.next() {
            if a.as_str() == "--network" {
                if let Some(v) = args.next() {
                    network_path = Some(PathBuf::from(v));
                }
            }
        }

        Self { network_path }
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse network file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("network file contains no neurons")]
    Empty,
}

fn load_network(path: &Path) -> Result<Network, LoadError> {
    let text = fs::read_to_string(path)?;
    let network: Network = serde_json::from_str(&text)?;
    if network.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(network)
}

/// Small fully-connected 3-4-2 network with seeded random weights.
fn demo_network() -> Network {
    srand(42);

    let inputs: Vec<Neuron> = ["bias", "left eye", "right eye"]
        .iter()
        .enumerate()
        .map(|(i, name)| Neuron::input(NeuronId(i as u32), *name))
        .collect();

    let mut next_id = inputs.len() as u32;
    let mut hidden = Vec::new();
    for i in 0..4 {
        let incoming = inputs
            .iter()
            .map(|src| Connection {
                source: src.id,
                weight: gen_range(-1.0, 1.0),
            })
            .collect();
        hidden.push(Neuron::working(NeuronId(next_id), format!("h{i}"), incoming));
        next_id += 1;
    }

    let mut outputs = Vec::new();
    for name in ["turn", "speed"] {
        let incoming = hidden
            .iter()
            .map(|src| Connection {
                source: src.id,
                weight: gen_range(-1.0, 1.0),
            })
            .collect();
        outputs.push(Neuron::working(NeuronId(next_id), name, incoming));
        next_id += 1;
    }

    Network {
        inputs,
        hidden,
        outputs,
    }
}

/// Feed the inputs with smooth periodic signals and run one forward pass so
/// the discs and lines have live values to encode.
fn step_activations(network: &mut Network, t: f32) {
    for (i, n) in network.inputs.iter_mut().enumerate() {
        n.activation = (t * (0.4 + 0.3 * i as f32)).sin();
    }

    let mut values: HashMap<NeuronId, f32> = network
        .layers()
        .into_iter()
        .flatten()
        .map(|n| (n.id, n.activation))
        .collect();

    for layer in [&mut network.hidden, &mut network.outputs] {
        for neuron in layer.iter_mut() {
            let sum: f32 = neuron
                .incoming()
                .iter()
                .map(|c| c.weight * values.get(&c.source).copied().unwrap_or(0.0))
                .sum();
            neuron.activation = sum.tanh();
            values.insert(neuron.id, neuron.activation);
        }
    }
}

fn to_color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

/// Canvas backend over macroquad's immediate-mode primitives. Carries the
/// font size used for labels and their measurement.
struct MacroCanvas {
    font_size: f32,
}

impl Canvas for MacroCanvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        draw_circle(center.x, center.y, radius, to_color(color));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        draw_circle_lines(center.x, center.y, radius, 1.0, to_color(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba) {
        draw_line(from.x, from.y, to.x, to.y, thickness, to_color(color));
    }

    fn text(&mut self, text: &str, pos: Vec2, color: Rgba) {
        draw_text(text, pos.x, pos.y, self.font_size, to_color(color));
    }

    fn text_width(&self, text: &str) -> f32 {
        measure_text(text, None, self.font_size as u16, 1.0).width
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "nnscope".to_owned(),
        window_width: 800,
        window_height: 600,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = VisArgs::from_env_and_args();
    let network = match &args.network_path {
        Some(path) => match load_network(path) {
            Ok(n) => {
                info!(path = %path.display(), neurons = n.neuron_count(), "loaded network");
                n
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to demo network");
                demo_network()
            }
        },
        None => demo_network(),
    };

    let mut viz = NetworkVisualizer::new();
    viz.attach_network(network);
    let mut canvas = MacroCanvas {
        font_size: HUD_FONT_SIZE,
    };

    loop {
        clear_background(Color::new(0.07, 0.07, 0.09, 1.0));

        let t = get_time() as f32;
        if let Some(network) = viz.network_mut() {
            step_activations(network, t);
        }

        let rect = Rect::new(
            UI_MARGIN,
            TOP_UI_H,
            screen_width() - 2.0 * UI_MARGIN,
            screen_height() - TOP_UI_H - UI_MARGIN,
        );
        let (mx, my) = mouse_position();
        let pointer = Vec2::new(mx, my);

        viz.draw(&mut canvas, rect, pointer);

        draw_line(0.0, TOP_UI_H - 8.0, screen_width(), TOP_UI_H - 8.0, 1.0, DARKGRAY);
        let status = match viz.hovered_neuron(rect, pointer) {
            Some(n) => format!(
                "{}  activation {:+.3}  incoming {}",
                n.name,
                n.activation,
                n.incoming().len()
            ),
            None => "hover a neuron to isolate its connections".to_string(),
        };
        draw_text(&status, UI_MARGIN, UI_MARGIN + HUD_FONT_SIZE, HUD_FONT_SIZE, WHITE);

        next_frame().await;
    }
}
