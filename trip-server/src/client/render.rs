//! Text rendering for booking results.

use std::fmt::Write as _;

use crate::web::BookingResult;

/// One star in the 4-star comfort display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Filled,
    Half,
    Empty,
}

/// Number of stars in the comfort display.
pub const STAR_COUNT: usize = 4;

/// Map a comfort rating onto the 4-star display.
///
/// Star `i` (1-based) is filled when `i <= floor(rating)`, half when
/// `i - 0.5 <= rating`, and empty otherwise. A rating of 2.5 therefore
/// shows two filled stars, one half star, and one empty star.
pub fn star_rating(rating: f64) -> [Star; STAR_COUNT] {
    std::array::from_fn(|idx| {
        let position = (idx + 1) as f64;
        if position <= rating.floor() {
            Star::Filled
        } else if position - 0.5 <= rating {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

/// Render the star display as text.
pub fn render_stars(rating: f64) -> String {
    star_rating(rating)
        .iter()
        .map(|star| match star {
            Star::Filled => '★',
            Star::Half => '⯪',
            Star::Empty => '☆',
        })
        .collect()
}

/// Render a booking as a text summary.
pub fn render_booking(result: &BookingResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "===== BOOKING SUCCESSFUL =====");
    let _ = writeln!(out, "Booking Reference: {}", result.booking_ref);
    let _ = writeln!(
        out,
        "Journey: {} → {}",
        result.journey.departure, result.journey.destination
    );
    let _ = writeln!(out, "Optimization Priority: {}", result.journey.priority);

    let _ = writeln!(out);
    let _ = writeln!(out, "Complete Route:");
    let _ = writeln!(out, "  {}", result.route.join(" → "));

    let _ = writeln!(out);
    let _ = writeln!(out, "Segment Details:");
    for (idx, segment) in result.segments.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} → {}", idx + 1, segment.start, segment.end);
        let _ = writeln!(out, "     - Class: {}", segment.comfort);
        let _ = writeln!(out, "     - Cost: ₹{:.2}", segment.cost);
        let _ = writeln!(
            out,
            "     - Duration: {} mins (Traffic: {})",
            segment.duration, segment.traffic
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total Cost: ₹{:.2}", result.total_cost);
    let _ = writeln!(
        out,
        "Total Travel Time: {} mins ({}h {}m)",
        result.total_time,
        result.total_time / 60,
        result.total_time % 60
    );
    let _ = writeln!(
        out,
        "Comfort Rating: {:.1}/4  {}",
        result.comfort_rating,
        render_stars(result.comfort_rating)
    );

    if let Some(warning) = &result.weather_warning {
        let _ = writeln!(out);
        let _ = writeln!(out, "WEATHER WARNING: {warning}");
    }

    let _ = writeln!(out, "=============================");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::{JourneySummary, SegmentResult};
    use crate::domain::{ComfortClass, Priority, Traffic};

    fn sample_result() -> BookingResult {
        BookingResult {
            booking_ref: "BK12345".to_string(),
            journey: JourneySummary {
                departure: "Delhi".to_string(),
                destination: "Mumbai".to_string(),
                priority: Priority::Time,
            },
            route: vec![
                "Delhi".to_string(),
                "Bhopal".to_string(),
                "Mumbai".to_string(),
            ],
            segments: vec![
                SegmentResult {
                    start: "Delhi".to_string(),
                    end: "Bhopal".to_string(),
                    comfort: ComfortClass::Economy,
                    cost: 500.25,
                    duration: 60,
                    traffic: Traffic::Low,
                },
            ],
            total_cost: 1500.0,
            total_time: 150,
            comfort_rating: 2.5,
            weather_warning: None,
        }
    }

    #[test]
    fn half_star_boundary() {
        use Star::*;

        assert_eq!(star_rating(2.5), [Filled, Filled, Half, Empty]);
        assert_eq!(star_rating(0.0), [Empty, Empty, Empty, Empty]);
        assert_eq!(star_rating(4.0), [Filled, Filled, Filled, Filled]);
        assert_eq!(star_rating(1.0), [Filled, Empty, Empty, Empty]);
        assert_eq!(star_rating(3.4), [Filled, Filled, Filled, Empty]);
        assert_eq!(star_rating(3.5), [Filled, Filled, Filled, Half]);
    }

    #[test]
    fn stars_render_as_text() {
        assert_eq!(render_stars(2.5), "★★⯪☆");
        assert_eq!(render_stars(4.0), "★★★★");
    }

    #[test]
    fn booking_summary_contains_key_lines() {
        let text = render_booking(&sample_result());

        assert!(text.contains("Booking Reference: BK12345"));
        assert!(text.contains("Journey: Delhi → Mumbai"));
        assert!(text.contains("Optimization Priority: Time"));
        assert!(text.contains("Delhi → Bhopal → Mumbai"));
        assert!(text.contains("- Class: Economy"));
        assert!(text.contains("Total Cost: ₹1500.00"));
        assert!(text.contains("Total Travel Time: 150 mins (2h 30m)"));
        assert!(text.contains("Comfort Rating: 2.5/4"));
        assert!(!text.contains("WEATHER WARNING"));
    }

    #[test]
    fn weather_warning_is_rendered_when_present() {
        let mut result = sample_result();
        result.weather_warning = Some("Expect fog along parts of this route.".to_string());

        let text = render_booking(&result);
        assert!(text.contains("WEATHER WARNING: Expect fog along parts of this route."));
    }
}
