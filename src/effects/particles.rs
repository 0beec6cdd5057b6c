//! Particle field and floating wireframe shapes behind the hero section.
//!
//! The scene is generated once from the seeded RNG and handed to the
//! renderer; afterwards only a small [`FrameState`] crosses the port each
//! animation frame.

use log::{debug, info};
use rand::Rng;

use crate::app::ports::{Collaborator, RendererPort};
use crate::config::ParticleConfig;
use crate::error::{Error, Result};
use crate::store::Theme;

const POINT_SPREAD: f64 = 10.0;
const SHAPE_SPREAD: f64 = 15.0;
const MAX_SPIN: f64 = 0.01;
const FIELD_SPIN: [f64; 2] = [0.0003, 0.0005];
const BOB_AMPLITUDE: f64 = 0.5;
const CAMERA_REACH: f64 = 0.5;
const CAMERA_Z: f64 = 3.0;
const SHAPE_COLORS: [u32; 2] = [0x6366f1, 0x8b5cf6];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Torus,
}

impl ShapeKind {
    const ALL: [ShapeKind; 4] = [
        ShapeKind::Tetrahedron,
        ShapeKind::Octahedron,
        ShapeKind::Icosahedron,
        ShapeKind::Torus,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub origin: [f64; 3],
    pub rotation: [f64; 3],
    /// Radians added per frame on each axis.
    pub spin: [f64; 3],
    pub color: u32,
}

/// Everything the renderer needs to build the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescriptor {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub shapes: Vec<Shape>,
    pub camera_z: f64,
}

impl SceneDescriptor {
    pub fn generate<R: Rng>(config: &ParticleConfig, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(config.count);
        let mut colors = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            positions.push([
                centered(rng, POINT_SPREAD) as f32,
                centered(rng, POINT_SPREAD) as f32,
                centered(rng, POINT_SPREAD) as f32,
            ]);
            let hue = rng.random::<f64>() * 0.2 + 0.5;
            let [r, g, b] = hsl_to_rgb(hue, 0.7, 0.6);
            colors.push([r as f32, g as f32, b as f32]);
        }

        let shapes = (0..config.shapes)
            .map(|_| {
                let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
                let color = SHAPE_COLORS[usize::from(rng.random::<bool>())];
                Shape {
                    kind,
                    origin: [
                        centered(rng, SHAPE_SPREAD),
                        centered(rng, SHAPE_SPREAD),
                        centered(rng, SHAPE_SPREAD),
                    ],
                    rotation: [
                        rng.random::<f64>() * core::f64::consts::PI,
                        rng.random::<f64>() * core::f64::consts::PI,
                        rng.random::<f64>() * core::f64::consts::PI,
                    ],
                    spin: [
                        centered(rng, 2.0 * MAX_SPIN),
                        centered(rng, 2.0 * MAX_SPIN),
                        centered(rng, 2.0 * MAX_SPIN),
                    ],
                    color,
                }
            })
            .collect();

        Self {
            positions,
            colors,
            shapes,
            camera_z: CAMERA_Z,
        }
    }
}

/// Uniform in `[-spread/2, spread/2)`.
fn centered<R: Rng>(rng: &mut R, spread: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * spread
}

/// HSL (all components in `[0, 1]`) to RGB in `[0, 1]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFrame {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

/// Per-frame transform update sent to the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameState {
    pub field_rotation: [f64; 2],
    pub shapes: Vec<ShapeFrame>,
    pub camera: [f64; 2],
}

pub fn tint_for(theme: Theme, config: &ParticleConfig) -> u32 {
    match theme {
        Theme::Dark => config.dark_tint,
        Theme::Light => config.light_tint,
    }
}

pub struct ParticleField {
    renderer: Box<dyn RendererPort>,
    shapes: Vec<Shape>,
    frame: FrameState,
    /// Pointer in normalised device coordinates.
    pointer: [f64; 2],
    follow_rate: f64,
    visible: bool,
}

impl ParticleField {
    /// Generate the scene and hand it to the renderer.  A renderer that
    /// refuses the scene makes the field unavailable.
    pub fn attach<R: Rng>(
        mut renderer: Box<dyn RendererPort>,
        config: &ParticleConfig,
        theme: Theme,
        rng: &mut R,
    ) -> Result<Self> {
        let scene = SceneDescriptor::generate(config, rng);
        if let Err(e) = renderer.init(&scene) {
            info!("Particles: renderer init failed ({e}), skipping");
            return Err(Error::CollaboratorUnavailable(Collaborator::Renderer));
        }
        renderer.set_tint(tint_for(theme, config));
        info!(
            "Particles: {} points, {} shapes",
            scene.positions.len(),
            scene.shapes.len()
        );
        let frame = FrameState {
            field_rotation: [0.0, 0.0],
            shapes: scene
                .shapes
                .iter()
                .map(|s| ShapeFrame {
                    position: s.origin,
                    rotation: s.rotation,
                })
                .collect(),
            camera: [0.0, 0.0],
        };
        Ok(Self {
            renderer,
            shapes: scene.shapes,
            frame,
            pointer: [0.0, 0.0],
            follow_rate: config.camera_follow_rate,
            visible: true,
        })
    }

    pub fn on_pointer(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.pointer = [
            x / f64::from(width) * 2.0 - 1.0,
            -(y / f64::from(height)) * 2.0 + 1.0,
        ];
    }

    /// Advance one frame at `time_s` seconds and render it.
    pub fn frame(&mut self, time_s: f64) {
        if !self.visible {
            return;
        }
        self.frame.field_rotation[0] += FIELD_SPIN[0];
        self.frame.field_rotation[1] += FIELD_SPIN[1];

        for (i, (shape, out)) in self.shapes.iter().zip(self.frame.shapes.iter_mut()).enumerate() {
            for axis in 0..3 {
                out.rotation[axis] += shape.spin[axis];
            }
            out.position[1] = shape.origin[1] + (time_s + i as f64).sin() * BOB_AMPLITUDE;
        }

        for axis in 0..2 {
            let target = self.pointer[axis] * CAMERA_REACH;
            self.frame.camera[axis] = crate::anim::approach(self.frame.camera[axis], target, self.follow_rate);
        }
        self.renderer.render(&self.frame);
    }

    pub fn set_theme(&mut self, theme: Theme, config: &ParticleConfig) {
        debug!("Particles: tint for {}", theme.as_str());
        self.renderer.set_tint(tint_for(theme, config));
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.renderer.set_visible(visible);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    pub fn frame_state(&self) -> &FrameState {
        &self.frame
    }
}
