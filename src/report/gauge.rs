//! @acp:module "BMI Gauge"
//! @acp:summary "Horizontal text gauge with colored BMI bands"
//! @acp:domain cli
//! @acp:layer output

use console::Color;

use super::renderer::Palette;
use crate::assess::{BmiBand, GAUGE_MAX, GAUGE_MIN};

fn band_glyph(band: BmiBand) -> char {
    match band {
        BmiBand::Underweight => '.',
        BmiBand::Normal => '=',
        BmiBand::Overweight => '+',
        BmiBand::Obese => '#',
    }
}

pub(crate) fn band_color(band: BmiBand) -> Color {
    match band {
        BmiBand::Underweight => Color::Blue,
        BmiBand::Normal => Color::Green,
        BmiBand::Overweight => Color::Yellow,
        BmiBand::Obese => Color::Red,
    }
}

/// Column of the marker for `bmi`, clamped into the gauge
fn marker_column(bmi: f64, width: usize) -> usize {
    let span = GAUGE_MAX - GAUGE_MIN;
    let fraction = ((bmi - GAUGE_MIN) / span).clamp(0.0, 1.0);
    ((fraction * width as f64) as usize).min(width - 1)
}

/// Render the gauge as three lines: marker, bar, scale
///
/// Each cell takes the band of the BMI at its midpoint. Values outside
/// 10–40 pin the marker to the nearest end.
pub fn render_gauge(bmi: f64, width: usize, palette: &Palette) -> String {
    let width = width.max(1);
    let span = GAUGE_MAX - GAUGE_MIN;
    let marker = marker_column(bmi, width);

    let mut bar = String::new();
    let mut run = String::new();
    let mut run_band: Option<BmiBand> = None;

    for cell in 0..width {
        let midpoint = GAUGE_MIN + (cell as f64 + 0.5) * span / width as f64;
        let band = BmiBand::classify(midpoint);
        if let Some(prev) = run_band.filter(|&b| b != band) {
            bar.push_str(&palette.fg(&run, band_color(prev)));
            run.clear();
        }
        run_band = Some(band);
        run.push(band_glyph(band));
    }
    if let Some(band) = run_band {
        bar.push_str(&palette.fg(&run, band_color(band)));
    }

    let min_label = format!("{}", GAUGE_MIN);
    let max_label = format!("{}", GAUGE_MAX);
    let gap = width.saturating_sub(min_label.len() + max_label.len());

    format!(
        "{}v {}\n{}\n{}{}{}",
        " ".repeat(marker),
        palette.bold(&format!("{:.1}", bmi)),
        bar,
        min_label,
        " ".repeat(gap),
        max_label
    )
}
