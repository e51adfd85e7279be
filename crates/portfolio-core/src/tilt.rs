//! Pointer-driven 3D tilt for interactive cards.
//!
//! The calculator is a pure function of a pointer sample. It has no notion of
//! the pointer leaving the card; callers reset to [`TiltVector::NEUTRAL`] on
//! leave (see [`crate::motion::TiltCard::pointer_leave`]).

use glam::Vec2;

/// Each axis contributes at most this much depth lift.
pub const DEPTH_LIFT_PER_AXIS: f32 = 8.0;
/// Hard cap on the summed depth lift.
pub const MAX_DEPTH_LIFT: f32 = 12.0;

/// Bounding rectangle of the target element in viewport space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// False for collapsed or non-finite rectangles; either would put NaN in the tilt.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Pointer position plus the element rectangle captured at the same instant.
///
/// `rect` is `None` when the element handle is no longer available (for
/// example the card was removed between the event and the read).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub pointer: Vec2,
    pub rect: Option<Rect>,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, rect: Rect) -> Self {
        Self {
            pointer: Vec2::new(x, y),
            rect: Some(rect),
        }
    }

    pub fn detached(x: f32, y: f32) -> Self {
        Self {
            pointer: Vec2::new(x, y),
            rect: None,
        }
    }
}

/// Rotation in degrees around X and Y plus a depth lift in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltVector {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub translate_z: f32,
}

impl TiltVector {
    pub const NEUTRAL: TiltVector = TiltVector {
        rotate_x: 0.0,
        rotate_y: 0.0,
        translate_z: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// CSS `transform` value for this tilt under the given perspective.
    pub fn to_css_transform(&self, perspective_px: f32) -> String {
        format!(
            "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) translateZ({:.3}px)",
            perspective_px, self.rotate_x, self.rotate_y, self.translate_z
        )
    }
}

/// Map a pointer sample to a tilt bounded by `max_tilt_degrees`.
///
/// Moving the pointer up tilts the top edge toward the viewer, so `rotate_x`
/// has the opposite sign of the vertical offset. Samples outside the
/// rectangle are clamped rather than extrapolated.
pub fn compute_tilt(sample: &PointerSample, max_tilt_degrees: f32) -> TiltVector {
    let rect = match sample.rect {
        Some(r) if r.is_usable() => r,
        _ => return TiltVector::NEUTRAL,
    };
    if !sample.pointer.is_finite() || !max_tilt_degrees.is_finite() {
        return TiltVector::NEUTRAL;
    }
    let max_tilt = max_tilt_degrees.abs();

    let offset = sample.pointer - rect.center();
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;

    let rotate_y = (offset.x / half_w) * max_tilt;
    let rotate_x = -(offset.y / half_h) * max_tilt;
    let lift = (offset.x / rect.width).abs() * DEPTH_LIFT_PER_AXIS
        + (offset.y / rect.height).abs() * DEPTH_LIFT_PER_AXIS;

    TiltVector {
        // `+ 0.0` folds -0.0 into 0.0 so a centered pointer is exactly neutral
        rotate_x: rotate_x.clamp(-max_tilt, max_tilt) + 0.0,
        rotate_y: rotate_y.clamp(-max_tilt, max_tilt) + 0.0,
        translate_z: lift.min(MAX_DEPTH_LIFT),
    }
}
