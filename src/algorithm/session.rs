//! Generation session: parameters, seeded randomness, the cached matrix and
//! the in-flight transition between two patterns
//!
//! A session is driven one frame at a time. `generate` draws a new target
//! pattern and starts a transition; every `render_frame` call redraws the whole
//! scene at the next interpolation factor until the transition settles. Only
//! the frame counter is carried between frames.

use crate::algorithm::mode::{DirectDrawMotif, PatternMode};
use crate::algorithm::parameters::GenerationParameters;
use crate::io::configuration::{
    ANIMATION_STEP, LATTICE_MARGIN, LIMIT_MAX, LIMIT_MIN, RECURSIVE_BASE_CAP,
    RECURSIVE_BASE_FRACTION,
};
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::math::interpolation::frame_factor;
use crate::render::fractal::{FractalMotif, draw_fractal};
use crate::render::recursive::{RecursiveMotif, draw_recursive};
use crate::render::tiles::{TileLayout, TileRenderer};
use crate::render::{Palette, Surface};
use crate::spatial::SymmetryMatrix;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Record of the most recent generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generation {
    /// Mode the pattern was produced in
    pub mode: PatternMode,
    /// Connection threshold drawn for this generation
    pub limit: f64,
    /// 1-based generation counter
    pub sequence: u64,
    /// Parameters in force when the pattern was generated
    pub parameters: GenerationParameters,
}

/// Outcome of drawing one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStatus {
    /// The transition continues; `progress` is the factor just drawn
    Animating {
        /// Interpolation factor of the drawn frame
        progress: f64,
    },
    /// The drawn frame is the settled pattern
    Complete,
}

/// Drives pattern generation and animation for one canvas
#[derive(Debug, Clone)]
pub struct KolamSession {
    parameters: GenerationParameters,
    palette: Palette,
    rng: StdRng,
    matrix: SymmetryMatrix,
    generation: Option<Generation>,
    /// Next frame index of the running transition
    transition: Option<u32>,
    step: f64,
}

impl KolamSession {
    /// Create a session seeded for reproducible generation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `parameters` fail validation
    pub fn new(parameters: GenerationParameters, palette: Palette, seed: u64) -> Result<Self> {
        parameters.validate()?;
        Ok(Self {
            parameters,
            palette,
            rng: StdRng::seed_from_u64(seed),
            matrix: SymmetryMatrix::new(parameters.grid_size),
            generation: None,
            transition: None,
            step: ANIMATION_STEP,
        })
    }

    /// Override the per-frame interpolation increment
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `step` lies in `(0, 1]`
    pub fn with_step(mut self, step: f64) -> Result<Self> {
        if !(step > 0.0 && step <= 1.0) {
            return Err(invalid_parameter(
                "step",
                &step,
                &"must be in the range (0, 1]",
            ));
        }
        self.step = step;
        Ok(self)
    }

    /// Replace the parameters used by the next generation
    ///
    /// The cached pattern keeps the parameters it was generated with.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `parameters` fail validation
    pub fn set_parameters(&mut self, parameters: GenerationParameters) -> Result<()> {
        parameters.validate()?;
        self.parameters = parameters;
        Ok(())
    }

    /// Switch colours; takes effect on the next drawn frame
    pub const fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Parameters for the next generation
    pub const fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }

    /// Colours used for drawing
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cached connection matrix
    pub const fn matrix(&self) -> &SymmetryMatrix {
        &self.matrix
    }

    /// Most recent generation, if any
    pub const fn last_generation(&self) -> Option<&Generation> {
        self.generation.as_ref()
    }

    /// Whether a transition is still in flight
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Interpolation factor the next frame will be drawn at, 1 when settled
    pub fn progress(&self) -> f64 {
        self.transition
            .map_or(1.0, |frame| frame_factor(frame, self.step))
    }

    /// Frames a full transition takes, including the settled frame
    pub fn frames_per_transition(&self) -> u32 {
        (1.0 / self.step).ceil() as u32 + 1
    }

    /// Draw a new target pattern and start the transition towards it
    ///
    /// The previous target becomes the transition's starting point. A grid size
    /// change discards the cached matrix and starts from an all-rounded lattice.
    ///
    /// # Errors
    ///
    /// Returns `GenerationInProgress` if the previous transition has not settled
    pub fn generate(&mut self) -> Result<&Generation> {
        if self.transition.is_some() {
            return Err(KolamError::GenerationInProgress {
                progress: self.progress(),
            });
        }

        let parameters = self.parameters;
        if self.matrix.grid_size() != parameters.grid_size {
            tracing::debug!(
                from = self.matrix.grid_size(),
                to = parameters.grid_size,
                "grid size changed, resetting matrix"
            );
            self.matrix = SymmetryMatrix::new(parameters.grid_size);
        }

        let mode = parameters.pattern_mode();
        let limit = self.rng.random_range(LIMIT_MIN..LIMIT_MAX);
        self.matrix.advance();
        mode.strategy()
            .apply(&mut self.matrix.next, limit, &mut self.rng);

        let sequence = self.generation.map_or(1, |last| last.sequence + 1);
        tracing::info!(
            strategy = %mode.strategy(),
            limit,
            sequence,
            connected = self.matrix.next.count_connected(),
            "generated pattern"
        );

        self.transition = Some(0);
        Ok(&*self.generation.insert(Generation {
            mode,
            limit,
            sequence,
            parameters,
        }))
    }

    /// Draw the next animation frame onto `surface`
    ///
    /// Each call clears and redraws the whole scene. Once the factor reaches 1
    /// the transition ends and further calls redraw the settled pattern.
    ///
    /// # Errors
    ///
    /// Returns `NothingToRedraw` before the first generation
    pub fn render_frame<S: Surface>(&mut self, surface: &mut S) -> Result<FrameStatus> {
        let generation = self.generation.ok_or(KolamError::NothingToRedraw)?;

        let Some(frame) = self.transition else {
            self.draw_scene(surface, &generation, None, 1.0);
            return Ok(FrameStatus::Complete);
        };

        let t = frame_factor(frame, self.step);
        self.draw_scene(surface, &generation, Some(t), 1.0);

        if t >= 1.0 {
            self.transition = None;
            tracing::debug!(sequence = generation.sequence, "transition settled");
            Ok(FrameStatus::Complete)
        } else {
            self.transition = Some(frame + 1);
            Ok(FrameStatus::Animating { progress: t })
        }
    }

    /// Jump the running transition straight to its settled state
    pub fn finish(&mut self) {
        if self.transition.take().is_some() {
            tracing::debug!("transition finished early");
        }
    }

    /// Redraw the settled pattern once at `scale`
    ///
    /// Spacing, margin, thickness and motif sizes are all multiplied by
    /// `scale`; the surface is expected to be scaled the same way. The cached
    /// matrix is reused, so no randomness is consumed.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `NothingToRedraw` before the first generation
    /// - `InvalidParameter` if `scale` is not a positive number
    pub fn redraw<S: Surface>(&self, surface: &mut S, scale: f64) -> Result<()> {
        let generation = self.generation.ok_or(KolamError::NothingToRedraw)?;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(invalid_parameter(
                "scale",
                &scale,
                &"must be a positive number",
            ));
        }
        self.draw_scene(surface, &generation, None, scale);
        Ok(())
    }

    fn draw_scene<S: Surface>(
        &self,
        surface: &mut S,
        generation: &Generation,
        t: Option<f64>,
        scale: f64,
    ) {
        let parameters = &generation.parameters;
        let palette = &self.palette;
        let center = surface.center();
        let line_thickness = parameters.line_thickness * scale;
        surface.clear(palette.background);

        match generation.mode {
            PatternMode::Matrix(_) => {
                let renderer = TileRenderer {
                    layout: TileLayout::centered(
                        center,
                        parameters.grid_size,
                        parameters.tile_spacing * scale,
                        LATTICE_MARGIN * scale,
                    ),
                    line_thickness,
                    stroke: palette.lines,
                    dot: palette.dots,
                };
                match t {
                    Some(t) => renderer.render(&self.matrix, t, surface),
                    None => renderer.render_settled(&self.matrix.next, surface),
                }
            }
            PatternMode::DirectDraw(DirectDrawMotif::Recursive { depth }) => {
                let canvas = f64::from(surface.width().min(surface.height()));
                let base_size =
                    (canvas * RECURSIVE_BASE_FRACTION).min(RECURSIVE_BASE_CAP * scale);
                draw_recursive(
                    surface,
                    &RecursiveMotif {
                        center,
                        base_size,
                        depth,
                        line_thickness,
                        stroke: palette.lines,
                        dot: palette.dots,
                    },
                );
            }
            PatternMode::DirectDraw(DirectDrawMotif::Fractal { motif_size }) => {
                let canvas_size = f64::from(surface.width().min(surface.height()));
                draw_fractal(
                    surface,
                    &FractalMotif {
                        center,
                        canvas_size,
                        line_thickness,
                        stroke: palette.lines,
                        dot: palette.dots,
                        motif_size: motif_size * scale,
                    },
                );
            }
        }
    }
}
