//! Responsive scaler state: design-width scaling and height correction.
//!
//! DESIGN
//! ======
//! Every page is authored against a fixed design width and scaled uniformly
//! to the real viewport. When the layout is scaled down, the outer frame is
//! clamped to `content_height * scale_factor` so the document scroll length
//! matches what is visible. At or above the design width the frame is left at
//! its natural height.
//!
//! The state is a plain value so the same transitions drive the browser
//! component and the tests.

#[cfg(test)]
#[path = "scaler_test.rs"]
mod scaler_test;

/// Width, in layout units, that all page content is authored against.
pub const DESIGN_WIDTH: f64 = 1440.0;

/// Per-instance scaler state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalerState {
    design_width: f64,
    measurement: Measurement,
}

/// Measurement lifecycle of a mounted scaler.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Measurement {
    /// Nothing observed yet (before mount, or after unmount).
    #[default]
    Unmeasured,
    /// Latest observed scale factor and unscaled content height.
    Measured { scale_factor: f64, content_height: f64 },
}

/// Outer frame height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameHeight {
    Auto,
    Px(f64),
}

/// Vertical overflow of the outer frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
}

/// Computed style of the outer frame. Width always spans the viewport and
/// horizontal overflow is always clipped, so only the varying parts are kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    pub height: FrameHeight,
    pub overflow_y: Overflow,
}

impl FrameStyle {
    /// Render as an inline `style` attribute.
    #[must_use]
    pub fn to_css(&self) -> String {
        let height = match self.height {
            FrameHeight::Auto => "auto".to_owned(),
            FrameHeight::Px(px) => format!("{px}px"),
        };
        let overflow_y = match self.overflow_y {
            Overflow::Visible => "visible",
            Overflow::Hidden => "hidden",
        };
        format!("width: 100vw; height: {height}; overflow-x: hidden; overflow-y: {overflow_y}; position: relative;")
    }
}

impl Default for ScalerState {
    fn default() -> Self {
        Self::new(DESIGN_WIDTH)
    }
}

impl ScalerState {
    /// Create an unmeasured scaler for `design_width`. Non-positive or
    /// non-finite widths fall back to [`DESIGN_WIDTH`].
    #[must_use]
    pub fn new(design_width: f64) -> Self {
        let design_width = if design_width.is_finite() && design_width > 0.0 { design_width } else { DESIGN_WIDTH };
        Self { design_width, measurement: Measurement::Unmeasured }
    }

    #[must_use]
    pub fn design_width(&self) -> f64 {
        self.design_width
    }

    #[must_use]
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    #[must_use]
    pub fn is_measured(&self) -> bool {
        matches!(self.measurement, Measurement::Measured { .. })
    }

    /// Current scale factor; `1.0` until the first measurement.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        match self.measurement {
            Measurement::Unmeasured => 1.0,
            Measurement::Measured { scale_factor, .. } => scale_factor,
        }
    }

    /// Latest unscaled content height; `0.0` until the first measurement.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        match self.measurement {
            Measurement::Unmeasured => 0.0,
            Measurement::Measured { content_height, .. } => content_height,
        }
    }

    /// Whether the frame is in the scaled-down branch (`scale_factor < 1`).
    #[must_use]
    pub fn is_scaling_down(&self) -> bool {
        self.scale_factor() < 1.0
    }

    /// Recompute the scale factor from a viewport width.
    ///
    /// Unusable widths (`None`, negative, non-finite) leave the scale factor
    /// as it was; the next resize event supplies a fresh value.
    pub fn on_viewport_width(&mut self, viewport_width: Option<f64>) {
        let Some(width) = viewport_width.filter(|w| w.is_finite() && *w >= 0.0) else {
            return;
        };
        let scale_factor = width / self.design_width;
        self.measurement = Measurement::Measured { scale_factor, content_height: self.content_height() };
    }

    /// Record the unscaled content height. A missing or invalid measurement
    /// counts as zero until the next observation corrects it.
    pub fn on_content_height(&mut self, content_height: Option<f64>) {
        let content_height = content_height
            .filter(|h| h.is_finite() && *h >= 0.0)
            .unwrap_or(0.0);
        self.measurement = Measurement::Measured { scale_factor: self.scale_factor(), content_height };
    }

    /// Drop all measurements (used on unmount).
    pub fn reset(&mut self) {
        self.measurement = Measurement::Unmeasured;
    }

    /// Outer frame style for the current measurement.
    #[must_use]
    pub fn frame_style(&self) -> FrameStyle {
        let scale_factor = self.scale_factor();
        if scale_factor >= 1.0 {
            FrameStyle { height: FrameHeight::Auto, overflow_y: Overflow::Visible }
        } else {
            FrameStyle { height: FrameHeight::Px(self.content_height() * scale_factor), overflow_y: Overflow::Hidden }
        }
    }

    /// Inline style of the fixed-width stage that carries the scale transform.
    #[must_use]
    pub fn stage_css(&self) -> String {
        format!(
            "width: {}px; transform: scale({}); transform-origin: top center;",
            self.design_width,
            self.scale_factor()
        )
    }
}
