use super::curve::Curve;

/// Document-relative vertical extent of the element a scroll range tracks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SourceBounds {
    pub top: f64,
    pub height: f64,
}

impl SourceBounds {
    pub const EMPTY: SourceBounds = SourceBounds { top: 0.0, height: 0.0 };

    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// How far the viewport's top edge has travelled through the element,
    /// in `[0, 1]`. A zero-sized or unmeasurable element reports 0.
    pub fn progress(&self, scroll_offset: f64) -> f64 {
        if !self.height.is_finite() || self.height <= 0.0 || !self.top.is_finite() {
            return 0.0;
        }
        let raw = (scroll_offset - self.top) / self.height;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }
}

/// The visual values one element receives for a single render tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTransform {
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl ElementTransform {
    pub const IDENTITY: ElementTransform = ElementTransform {
        translate_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Inline style declarations for this transform.
    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0) scale({:.4}); opacity: {:.4}; will-change: transform, opacity;",
            self.translate_y,
            self.scale,
            self.opacity.clamp(0.0, 1.0),
        )
    }
}

impl Default for ElementTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Channel curves for one tracked element. Channels that are not set keep
/// their identity value.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementTrack<K> {
    pub key: K,
    translate_y: Curve,
    opacity: Curve,
    scale: Curve,
}

impl<K: Copy + PartialEq> ElementTrack<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            translate_y: Curve::constant(ElementTransform::IDENTITY.translate_y),
            opacity: Curve::constant(ElementTransform::IDENTITY.opacity),
            scale: Curve::constant(ElementTransform::IDENTITY.scale),
        }
    }

    pub fn translate_y(mut self, curve: Curve) -> Self {
        self.translate_y = curve;
        self
    }

    pub fn opacity(mut self, curve: Curve) -> Self {
        self.opacity = curve;
        self
    }

    pub fn scale(mut self, curve: Curve) -> Self {
        self.scale = curve;
        self
    }

    pub fn evaluate(&self, progress: f64) -> ElementTransform {
        ElementTransform {
            translate_y: self.translate_y.evaluate(progress),
            opacity: self.opacity.evaluate(progress),
            scale: self.scale.evaluate(progress),
        }
    }
}

/// Values for every tracked element at one progress value.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformSnapshot<K> {
    pub progress: f64,
    values: Vec<(K, ElementTransform)>,
}

impl<K: Copy + PartialEq> TransformSnapshot<K> {
    pub fn get(&self, key: K) -> ElementTransform {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
            .unwrap_or_default()
    }
}

/// A tracked region plus the elements whose styles follow it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollRange<K> {
    bounds: SourceBounds,
    tracks: Vec<ElementTrack<K>>,
}

impl<K: Copy + PartialEq> ScrollRange<K> {
    pub fn new(tracks: Vec<ElementTrack<K>>) -> Self {
        Self {
            bounds: SourceBounds::EMPTY,
            tracks,
        }
    }

    pub fn set_bounds(&mut self, bounds: SourceBounds) {
        self.bounds = bounds;
    }

    pub fn evaluate(&self, scroll_offset: f64) -> TransformSnapshot<K> {
        self.snapshot_at(self.bounds.progress(scroll_offset))
    }

    /// Snapshot before any scrolling has happened.
    pub fn at_rest(&self) -> TransformSnapshot<K> {
        self.snapshot_at(0.0)
    }

    fn snapshot_at(&self, progress: f64) -> TransformSnapshot<K> {
        TransformSnapshot {
            progress,
            values: self
                .tracks
                .iter()
                .map(|track| (track.key, track.evaluate(progress)))
                .collect(),
        }
    }
}

/// Elements of the home page hero that fade out as the visitor scrolls past.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeroElement {
    Heading,
    Subtext,
    Button,
    Globe,
}

fn three_point(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Curve {
    // Literal control points below are increasing; a failure here is a typo.
    Curve::new([a, b, c]).unwrap_or_else(|err| {
        log::warn!("invalid hero curve, holding start value: {err}");
        Curve::constant(a.1)
    })
}

/// Staggered hero exit: the heading is gone by 30% of the section, the
/// subtext and button follow, and the globe lingers until 90%.
pub fn hero_range() -> ScrollRange<HeroElement> {
    ScrollRange::new(vec![
        ElementTrack::new(HeroElement::Heading)
            .translate_y(three_point((0.0, 0.0), (0.5, -60.0), (0.9, -120.0)))
            .opacity(three_point((0.0, 1.0), (0.15, 0.5), (0.3, 0.0))),
        ElementTrack::new(HeroElement::Subtext)
            .translate_y(three_point((0.0, 0.0), (0.5, -40.0), (0.9, -90.0)))
            .opacity(three_point((0.0, 1.0), (0.25, 0.4), (0.45, 0.0))),
        ElementTrack::new(HeroElement::Button)
            .translate_y(three_point((0.0, 0.0), (0.5, -30.0), (0.9, -60.0)))
            .opacity(three_point((0.0, 1.0), (0.35, 0.5), (0.6, 0.0))),
        ElementTrack::new(HeroElement::Globe)
            .translate_y(three_point((0.0, 0.0), (0.5, 80.0), (1.0, 160.0)))
            .opacity(three_point((0.0, 1.0), (0.6, 0.6), (0.9, 0.0)))
            .scale(three_point((0.0, 1.0), (0.5, 0.9), (1.0, 0.75))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HeroElement; 4] = [
        HeroElement::Heading,
        HeroElement::Subtext,
        HeroElement::Button,
        HeroElement::Globe,
    ];

    #[test]
    fn progress_follows_the_tracked_section() {
        let bounds = SourceBounds::new(1000.0, 500.0);
        assert_eq!(bounds.progress(1000.0), 0.0);
        assert_eq!(bounds.progress(1250.0), 0.5);
        assert_eq!(bounds.progress(1600.0), 1.0);
    }

    #[test]
    fn progress_is_clamped_on_both_sides() {
        let bounds = SourceBounds::new(1000.0, 500.0);
        for offset in [-200.0, 0.0, 400.0, 999.0] {
            assert_eq!(bounds.progress(offset), 0.0);
        }
        for offset in [1500.0, 1501.0, 10_000.0] {
            assert_eq!(bounds.progress(offset), 1.0);
        }
    }

    #[test]
    fn degenerate_bounds_report_zero_progress() {
        assert_eq!(SourceBounds::EMPTY.progress(800.0), 0.0);
        assert_eq!(SourceBounds::new(100.0, -20.0).progress(800.0), 0.0);
        assert_eq!(SourceBounds::new(100.0, f64::NAN).progress(800.0), 0.0);
        assert_eq!(SourceBounds::new(f64::INFINITY, 300.0).progress(800.0), 0.0);
    }

    #[test]
    fn snapshot_before_section_is_the_curve_start() {
        let mut range = hero_range();
        range.set_bounds(SourceBounds::new(400.0, 800.0));
        let snapshot = range.evaluate(0.0);
        assert_eq!(snapshot, range.at_rest());
        for key in ALL {
            let value = snapshot.get(key);
            assert_eq!(value.translate_y, 0.0);
            assert_eq!(value.opacity, 1.0);
            assert_eq!(value.scale, 1.0);
        }
    }

    #[test]
    fn snapshot_past_section_is_terminal() {
        let mut range = hero_range();
        range.set_bounds(SourceBounds::new(0.0, 800.0));
        let snapshot = range.evaluate(5000.0);
        assert_eq!(snapshot.progress, 1.0);
        for key in ALL {
            assert_eq!(snapshot.get(key).opacity, 0.0);
        }
        assert_eq!(snapshot.get(HeroElement::Globe).scale, 0.75);
        assert_eq!(snapshot.get(HeroElement::Heading).translate_y, -120.0);
    }

    #[test]
    fn elements_disappear_in_a_staggered_order() {
        let mut range = hero_range();
        range.set_bounds(SourceBounds::new(0.0, 1000.0));

        let at_300 = range.evaluate(300.0);
        assert_eq!(at_300.get(HeroElement::Heading).opacity, 0.0);
        assert!(at_300.get(HeroElement::Subtext).opacity > 0.0);
        assert!(at_300.get(HeroElement::Button).opacity > 0.0);
        assert!(at_300.get(HeroElement::Globe).opacity > 0.0);

        let at_700 = range.evaluate(700.0);
        assert_eq!(at_700.get(HeroElement::Button).opacity, 0.0);
        assert!(at_700.get(HeroElement::Globe).opacity > 0.0);

        assert_eq!(range.evaluate(900.0).get(HeroElement::Globe).opacity, 0.0);
    }

    #[test]
    fn opacity_channels_never_rise_while_scrolling_down() {
        let mut range = hero_range();
        range.set_bounds(SourceBounds::new(200.0, 600.0));
        let mut previous = range.evaluate(0.0);
        for offset in (0..=900).step_by(5) {
            let next = range.evaluate(offset as f64);
            for key in ALL {
                assert!(next.get(key).opacity <= previous.get(key).opacity + 1e-12);
            }
            previous = next;
        }
    }

    fn channels(value: ElementTransform) -> [f64; 3] {
        [value.translate_y, value.opacity, value.scale]
    }

    #[test]
    fn every_hero_channel_moves_toward_its_end_value() {
        let range = hero_range();
        for track in &range.tracks {
            let start = channels(track.evaluate(0.0));
            let end = channels(track.evaluate(1.0));
            let mut previous = start;
            for step in 1..=400 {
                let next = channels(track.evaluate(step as f64 / 400.0));
                for channel in 0..3 {
                    let direction = (end[channel] - start[channel]).signum();
                    let delta = next[channel] - previous[channel];
                    if start[channel] == end[channel] {
                        assert_eq!(delta, 0.0, "{:?} channel {channel} moved", track.key);
                    } else {
                        assert!(
                            delta * direction >= -1e-12,
                            "{:?} channel {channel} reversed at step {step}",
                            track.key
                        );
                    }
                }
                previous = next;
            }
        }
    }

    #[test]
    fn resized_bounds_take_effect_on_next_evaluation() {
        let mut range = hero_range();
        range.set_bounds(SourceBounds::new(0.0, 1000.0));
        assert_eq!(range.evaluate(500.0).progress, 0.5);
        range.set_bounds(SourceBounds::new(0.0, 2000.0));
        assert_eq!(range.evaluate(500.0).progress, 0.25);
    }

    #[test]
    fn untracked_key_gets_identity() {
        let range: ScrollRange<HeroElement> =
            ScrollRange::new(vec![ElementTrack::new(HeroElement::Heading)]);
        assert_eq!(range.at_rest().get(HeroElement::Globe), ElementTransform::IDENTITY);
    }

    #[test]
    fn style_clamps_opacity() {
        let style = ElementTransform {
            translate_y: -12.5,
            opacity: 1.3,
            scale: 0.9,
        }
        .style();
        assert!(style.contains("translate3d(0, -12.50px, 0)"));
        assert!(style.contains("scale(0.9000)"));
        assert!(style.contains("opacity: 1.0000"));
    }
}
