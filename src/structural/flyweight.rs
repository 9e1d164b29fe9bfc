// Flyweight: one shared circle per colour; positions are supplied per draw.

use std::collections::HashMap;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::FlyweightSettings;
use crate::console::Transcript;

/// The flyweight. Colour is intrinsic; position is passed to `draw`.
#[derive(Debug, PartialEq, Eq)]
pub struct ColoredCircle {
    color: String,
}

impl ColoredCircle {
    fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn draw(&self, x: u32, y: u32, out: &mut Transcript) {
        out.say(format!("Drawing a {} circle at ({x}, {y})", self.color));
    }
}

/// Caller-owned pool handing out shared circles.
#[derive(Debug, Default)]
pub struct CirclePool {
    circles: HashMap<String, Rc<ColoredCircle>>,
}

impl CirclePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_circle(&mut self, color: &str) -> Rc<ColoredCircle> {
        if let Some(circle) = self.circles.get(color) {
            return Rc::clone(circle);
        }

        debug!(color, "creating flyweight");
        let circle = Rc::new(ColoredCircle::new(color));
        self.circles.insert(color.to_string(), Rc::clone(&circle));
        circle
    }

    /// Number of distinct flyweights created so far.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

#[derive(Debug)]
pub struct Placement {
    pub circle: Rc<ColoredCircle>,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Default)]
pub struct CircleRenderer {
    placements: Vec<Placement>,
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_circle(
        &mut self,
        pool: &mut CirclePool,
        color: &str,
        x: u32,
        y: u32,
        out: &mut Transcript,
    ) {
        let circle = pool.get_circle(color);
        circle.draw(x, y, out);
        self.placements.push(Placement { circle, x, y });
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

pub fn demo(out: &mut Transcript, settings: &FlyweightSettings) {
    if let Err(err) = settings.validate() {
        out.error(err.to_string());
        return;
    }

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut pool = CirclePool::new();
    let mut renderer = CircleRenderer::new();

    for _ in 0..settings.draws {
        let Some(color) = settings.palette.choose(&mut rng) else {
            break;
        };
        let x = rng.gen_range(1..=settings.max_coordinate);
        let y = rng.gen_range(1..=settings.max_coordinate);
        renderer.add_circle(&mut pool, color, x, y, out);
    }

    out.say(format!(
        "Drew {} circles using {} shared flyweights.",
        renderer.placements().len(),
        pool.len()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_color_is_shared() {
        let mut pool = CirclePool::new();
        let a = pool.get_circle("Red");
        let b = pool.get_circle("Red");

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_different_colors_are_distinct() {
        let mut pool = CirclePool::new();
        let red = pool.get_circle("Red");
        let blue = pool.get_circle("Blue");

        assert!(!Rc::ptr_eq(&red, &blue));
        assert_eq!(blue.color(), "Blue");
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_renderer_keeps_extrinsic_state() {
        let mut pool = CirclePool::new();
        let mut renderer = CircleRenderer::new();
        let mut out = Transcript::buffered();

        renderer.add_circle(&mut pool, "Green", 3, 4, &mut out);
        renderer.add_circle(&mut pool, "Green", 10, 20, &mut out);

        let placements = renderer.placements();
        assert!(Rc::ptr_eq(&placements[0].circle, &placements[1].circle));
        assert_eq!((placements[1].x, placements[1].y), (10, 20));
        assert_eq!(
            out.lines(),
            [
                "Drawing a Green circle at (3, 4)",
                "Drawing a Green circle at (10, 20)",
            ]
        );
    }

    #[test]
    fn test_demo_respects_settings() {
        let settings = FlyweightSettings {
            draws: 5,
            palette: vec!["Red".to_string()],
            max_coordinate: 1,
            seed: Some(7),
        };
        let mut out = Transcript::buffered();
        demo(&mut out, &settings);

        assert_eq!(out.count("Drawing a Red circle at (1, 1)"), 5);
        assert_eq!(out.last(), Some("Drew 5 circles using 1 shared flyweights."));
    }

    #[test]
    fn test_demo_reports_invalid_settings() {
        let settings = FlyweightSettings {
            max_coordinate: 0,
            seed: Some(1),
            ..FlyweightSettings::default()
        };
        let mut out = Transcript::buffered();
        demo(&mut out, &settings);

        assert_eq!(
            out.lines(),
            ["Invalid demo configuration: flyweight.max_coordinate must be at least 1"]
        );
    }

    #[test]
    fn test_seeded_demo_is_repeatable() {
        let settings = FlyweightSettings {
            seed: Some(99),
            ..FlyweightSettings::default()
        };
        let mut first = Transcript::buffered();
        let mut second = Transcript::buffered();
        demo(&mut first, &settings);
        demo(&mut second, &settings);

        assert_eq!(first.lines(), second.lines());
        assert_eq!(first.len(), settings.draws + 1);
    }

    proptest! {
        #[test]
        fn prop_pool_size_matches_distinct_colors(colors in proptest::collection::vec("[a-d]", 0..40)) {
            let mut pool = CirclePool::new();
            for color in &colors {
                pool.get_circle(color);
            }

            let distinct: std::collections::HashSet<&String> = colors.iter().collect();
            prop_assert_eq!(pool.len(), distinct.len());
        }
    }
}
