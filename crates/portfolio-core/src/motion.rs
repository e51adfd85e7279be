//! Frame-rate independent smoothing for tilt cards.
//!
//! Cards do not jump to the computed tilt; each axis follows its target
//! through a damped spring stepped once per animation frame.

use crate::tilt::{compute_tilt, PointerSample, TiltVector};

// Longest frame we integrate; anything beyond (tab switch, debugger pause)
// is treated as this long.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
// Fixed substep keeps stiff springs stable at low frame rates.
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 120.0;
// Below both thresholds an axis snaps to its target and stops.
pub const SETTLE_EPSILON: f32 = 1e-3;

#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Unit-mass damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
}

impl SpringState {
    pub fn is_settled_at(&self, target: f32) -> bool {
        (self.value - target).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON
    }
}

impl Spring {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    /// Advance `state` toward `target` by `dt_sec`. Returns true while moving.
    pub fn step(&self, state: &mut SpringState, target: f32, dt_sec: f32) -> bool {
        if state.is_settled_at(target) {
            state.value = target;
            state.velocity = 0.0;
            return false;
        }
        let mut remaining = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let accel = self.stiffness * (target - state.value) - self.damping * state.velocity;
            state.velocity += accel * h;
            state.value += state.velocity * h;
            remaining -= h;
        }
        if state.is_settled_at(target) {
            state.value = target;
            state.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Tilt tuning for one family of cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPreset {
    pub max_tilt_degrees: f32,
    pub spring: Spring,
}

impl TiltPreset {
    pub const PROJECT_CARD: TiltPreset = TiltPreset {
        max_tilt_degrees: 5.0,
        spring: Spring::new(250.0, 30.0),
    };
    pub const ABOUT_CARD: TiltPreset = TiltPreset {
        max_tilt_degrees: 4.0,
        spring: Spring::new(300.0, 30.0),
    };
    pub const STAT_CARD: TiltPreset = TiltPreset {
        max_tilt_degrees: 3.0,
        spring: Spring::new(300.0, 30.0),
    };

    /// Resolve a `data-tilt` attribute: a preset name or a bare degree value.
    pub fn from_attr(value: &str) -> Option<TiltPreset> {
        match value.trim() {
            "" | "project" => Some(Self::PROJECT_CARD),
            "about" => Some(Self::ABOUT_CARD),
            "stat" => Some(Self::STAT_CARD),
            other => other
                .parse::<f32>()
                .ok()
                .filter(|deg| deg.is_finite() && *deg > 0.0)
                .map(|deg| TiltPreset {
                    max_tilt_degrees: deg,
                    ..Self::PROJECT_CARD
                }),
        }
    }
}

/// Per-card tilt state: where the card is heading and where it currently is.
#[derive(Clone, Debug)]
pub struct TiltCard {
    pub preset: TiltPreset,
    target: TiltVector,
    rotate_x: SpringState,
    rotate_y: SpringState,
    translate_z: SpringState,
}

impl TiltCard {
    pub fn new(preset: TiltPreset) -> Self {
        Self {
            preset,
            target: TiltVector::NEUTRAL,
            rotate_x: SpringState::default(),
            rotate_y: SpringState::default(),
            translate_z: SpringState::default(),
        }
    }

    pub fn pointer_move(&mut self, sample: &PointerSample) {
        self.target = compute_tilt(sample, self.preset.max_tilt_degrees);
    }

    pub fn pointer_leave(&mut self) {
        self.target = TiltVector::NEUTRAL;
    }

    pub fn target(&self) -> TiltVector {
        self.target
    }

    pub fn current(&self) -> TiltVector {
        TiltVector {
            rotate_x: self.rotate_x.value,
            rotate_y: self.rotate_y.value,
            translate_z: self.translate_z.value,
        }
    }

    /// Advance all three axes. Returns true while any axis is still moving.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        let spring = self.preset.spring;
        let x = spring.step(&mut self.rotate_x, self.target.rotate_x, dt_sec);
        let y = spring.step(&mut self.rotate_y, self.target.rotate_y, dt_sec);
        let z = spring.step(&mut self.translate_z, self.target.translate_z, dt_sec);
        x || y || z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilt::Rect;

    fn run(card: &mut TiltCard, frames: usize) {
        for _ in 0..frames {
            card.step(1.0 / 60.0);
        }
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.25), 4.0);
    }

    #[test]
    fn card_converges_to_target_and_back() {
        let mut card = TiltCard::new(TiltPreset::PROJECT_CARD);
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        card.pointer_move(&PointerSample::new(100.0, 50.0, rect));
        run(&mut card, 240);
        let cur = card.current();
        assert!((cur.rotate_y - 5.0).abs() < 1e-3);
        assert!((cur.translate_z - 4.0).abs() < 1e-3);
        assert!(!card.step(1.0 / 60.0));

        card.pointer_leave();
        assert!(card.target().is_neutral());
        run(&mut card, 240);
        assert!(card.current().is_neutral());
    }

    #[test]
    fn settled_card_is_idle_until_target_changes() {
        let mut card = TiltCard::new(TiltPreset::STAT_CARD);
        assert!(!card.step(1.0 / 60.0));

        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        card.pointer_move(&PointerSample::new(80.0, 20.0, rect));
        assert!(card.step(1.0 / 60.0));
        run(&mut card, 240);
        assert!(!card.step(1.0 / 60.0));

        // Same sample again: nothing to animate.
        card.pointer_move(&PointerSample::new(80.0, 20.0, rect));
        assert!(!card.step(1.0 / 60.0));

        card.pointer_leave();
        assert!(card.step(1.0 / 60.0));
    }

    #[test]
    fn huge_dt_stays_stable() {
        let mut card = TiltCard::new(TiltPreset::ABOUT_CARD);
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        card.pointer_move(&PointerSample::new(0.0, 0.0, rect));
        for _ in 0..50 {
            card.step(5.0);
            let cur = card.current();
            assert!(cur.rotate_x.is_finite() && cur.rotate_y.is_finite());
            assert!(cur.rotate_y.abs() < 8.0);
        }
    }

    #[test]
    fn preset_from_attr() {
        assert_eq!(TiltPreset::from_attr("stat"), Some(TiltPreset::STAT_CARD));
        assert_eq!(TiltPreset::from_attr(""), Some(TiltPreset::PROJECT_CARD));
        assert_eq!(
            TiltPreset::from_attr("2.5").map(|p| p.max_tilt_degrees),
            Some(2.5)
        );
        assert_eq!(TiltPreset::from_attr("-1"), None);
        assert_eq!(TiltPreset::from_attr("wobbly"), None);
    }
}
