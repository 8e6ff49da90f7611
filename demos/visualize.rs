//! Renders a noisy track next to its simplified and smoothed versions.
//!
//! Run with: cargo run --example visualize

use tracesimp::curves::smooth_path;
use tracesimp::io::smooth_path_to_svg;
use tracesimp::{Point2, Simplifier};

use std::f64::consts::PI;
use std::fs::{self, File};
use std::io::{self, Write};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const OUTPUT: &str = "screenshots/simplification.svg";

fn main() -> io::Result<()> {
    let original = generate_noisy_curve(1000, 12.0, 12345);

    println!("tolerance  default mode                       highest quality");
    for tolerance in [0.5, 2.0, 5.0, 10.0] {
        let (_, fast) = Simplifier::new()
            .with_tolerance(tolerance)
            .simplify_with_report(&original);
        let (_, best) = Simplifier::new()
            .with_tolerance(tolerance)
            .highest_quality(true)
            .simplify_with_report(&original);
        println!("{tolerance:>9.1}  {:<33}  {best}", fast.to_string());
    }

    fs::create_dir_all("screenshots")?;
    render(&original, 5.0)?;
    println!("Generated {OUTPUT}");
    Ok(())
}

/// SVG helper to create an SVG document
struct Svg {
    content: String,
    width: f64,
    height: f64,
}

impl Svg {
    fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
        self.content.push('\n');
    }

    fn polyline(&mut self, points: &[Point2<f64>], stroke: &str, stroke_width: f64) {
        let pts: String = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            pts, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn path(&mut self, d: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            d, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, text: &str, font_size: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="{}" fill="{}">{}</text>"#,
            x, y, font_size, fill, text
        ));
        self.content.push('\n');
    }

    fn save(&self, path: &str) -> io::Result<()> {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
<rect width="100%" height="100%" fill="#1a1a2e"/>
{}
</svg>"##,
            self.width, self.height, self.width, self.height, self.content
        );
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())
    }
}

/// Noisy sine wave standing in for a recorded track.
fn generate_noisy_curve(num_points: usize, noise_scale: f64, seed: u64) -> Vec<Point2<f64>> {
    let mut state = seed;
    (0..num_points)
        .map(|i| {
            let t = i as f64 / (num_points - 1) as f64;
            let x = t * 350.0 + 25.0;
            let base_y = 200.0 + (t * 4.0 * PI).sin() * 120.0;

            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let noise = ((state as f64 / u64::MAX as f64) - 0.5) * noise_scale;

            Point2::new(x, base_y + noise)
        })
        .collect()
}

fn render(original: &[Point2<f64>], tolerance: f64) -> io::Result<()> {
    let mut svg = Svg::new(WIDTH, HEIGHT);

    // Left panel: radial pre-pass + Douglas-Peucker, stroked straight
    let (fast, fast_report) = Simplifier::new()
        .with_tolerance(tolerance)
        .simplify_with_report(original);

    svg.text(100.0, 30.0, "Radial + Douglas-Peucker", 16.0, "#e0e0e0");
    svg.polyline(original, "#4a4a6a", 1.0);
    svg.polyline(&fast, "#00d4ff", 2.0);
    for p in &fast {
        svg.circle(p.x, p.y, 3.0, "#00d4ff");
    }
    svg.text(25.0, 370.0, &fast_report.to_string(), 12.0, "#808080");

    // Right panel: highest quality, stroked as a smoothed path
    let (best, best_report) = Simplifier::new()
        .with_tolerance(tolerance)
        .highest_quality(true)
        .simplify_with_report(original);
    let shift = |p: &Point2<f64>| p.translate(400.0, 0.0);
    let original_shifted: Vec<_> = original.iter().map(shift).collect();
    let best_shifted: Vec<_> = best.iter().map(shift).collect();

    svg.text(500.0, 30.0, "Highest quality, smoothed", 16.0, "#e0e0e0");
    svg.polyline(&original_shifted, "#4a4a6a", 1.0);
    svg.path(&smooth_path_to_svg(&smooth_path(&best_shifted)), "#ff6b6b", 2.0);
    for p in &best_shifted {
        svg.circle(p.x, p.y, 3.0, "#ff6b6b");
    }
    svg.text(425.0, 370.0, &best_report.to_string(), 12.0, "#808080");

    svg.text(
        250.0,
        390.0,
        &format!("Original track (gray), tolerance {tolerance}"),
        12.0,
        "#606060",
    );

    svg.save(OUTPUT)
}
