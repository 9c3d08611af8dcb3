//! Parameters for the decorative motion effects.
//!
//! The animations themselves are CSS keyframes (see `input.css`); these
//! helpers only compute per-element inputs such as delays, offsets and tilt.

pub const MAX_TILT_DEG: f64 = 5.0;

/// Hero tilt around the Y axis for a pointer at `pointer_x` in a window
/// `width` pixels wide: 0° at the centre, ±5° at the edges.
pub fn hero_tilt(pointer_x: f64, width: f64) -> f64 {
    if !width.is_finite() || width <= 0.0 || !pointer_x.is_finite() {
        return 0.0;
    }
    let half = width / 2.0;
    ((pointer_x - half) / half * MAX_TILT_DEG).clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
}

/// Animation delay for the `index`th element of a staggered group.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{:.2}s", index as f64 * step_secs)
}

/// Hover colour of the `index`th letter of the hero first name.
pub fn first_name_hover_color(index: usize) -> &'static str {
    match index {
        0 | 1 => "#000000",
        2 => "#FFFFFF",
        3 => "#009736",
        _ => "#CE1126",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub drift_px: f64,
}

// Low discrepancy sequence, identical on server and client
fn fract(x: f64) -> f64 {
    x - x.floor()
}

const GOLDEN: f64 = 0.618_033_988_749_895;
const SILVER: f64 = 0.414_213_562_373_095;

pub fn particle_field(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let i = i as f64 + 1.0;
            let u = fract(i * GOLDEN);
            let v = fract(i * SILVER);
            Particle {
                left_pct: u * 100.0,
                top_pct: v * 100.0,
                duration_secs: 3.0 + 2.0 * fract(i * (GOLDEN + SILVER)),
                delay_secs: 2.0 * v,
                drift_px: u * 20.0 - 10.0,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashLetter {
    pub ch: char,
    pub color: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_secs: f64,
}

/// The alternating "SESESE" letters of the loading splash.
pub fn splash_letters() -> Vec<SplashLetter> {
    (0..6)
        .map(|i| {
            let (ch, color) = if i % 2 == 0 {
                ('S', "#14b8a6")
            } else {
                ('E', "#8b5cf6")
            };
            SplashLetter {
                ch,
                color,
                left_pct: 20.0 + i as f64 * 10.0,
                top_pct: 40.0 + (i as f64).sin() * 10.0,
                delay_secs: i as f64 * 0.15,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_tilt_bounds() {
        assert_eq!(hero_tilt(500.0, 1000.0), 0.0);
        assert_eq!(hero_tilt(0.0, 1000.0), -5.0);
        assert_eq!(hero_tilt(1000.0, 1000.0), 5.0);
        assert_eq!(hero_tilt(750.0, 1000.0), 2.5);
        // pointer dragged past the window edge
        assert_eq!(hero_tilt(-300.0, 1000.0), -5.0);
        assert_eq!(hero_tilt(4000.0, 1000.0), 5.0);
    }

    #[test]
    fn test_hero_tilt_degenerate_window() {
        assert_eq!(hero_tilt(10.0, 0.0), 0.0);
        assert_eq!(hero_tilt(f64::NAN, 800.0), 0.0);
        assert_eq!(hero_tilt(10.0, f64::INFINITY), 0.0);
        assert_eq!(hero_tilt(10.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_particles_stay_on_screen() {
        let field = particle_field(20);
        assert_eq!(field.len(), 20);
        for p in &field {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((3.0..5.0).contains(&p.duration_secs));
            assert!((-10.0..10.0).contains(&p.drift_px));
        }
        assert_eq!(field, particle_field(20));
    }

    #[test]
    fn test_splash_letters_alternate() {
        let letters = splash_letters();
        let text: String = letters.iter().map(|l| l.ch).collect();
        assert_eq!(text, "SESESE");
        assert_eq!(letters[0].color, letters[2].color);
        assert_ne!(letters[0].color, letters[1].color);
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 0.1), "0.00s");
        assert_eq!(stagger_delay(3, 0.15), "0.45s");
        assert_eq!(first_name_hover_color(4), "#CE1126");
    }
}
