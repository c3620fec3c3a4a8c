//! SVG rendering of pulled sequences
//!
//! Draws sample index against value so the shape of a sampled function
//! (and the effect of its shaping parameters) can be checked by eye.

use std::fs;
use std::io;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no finite values to plot")]
    Empty,
    #[error("failed to draw plot: {0}")]
    Drawing(String),
    #[error("failed to prepare output directory: {0}")]
    Io(#[from] io::Error),
}

fn drawing(err: impl std::fmt::Display) -> PlotError {
    PlotError::Drawing(err.to_string())
}

/// Value range covering every finite sample, padded so flat lines stay visible
fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    })?;

    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
    Some((min - pad, max + pad))
}

/// Write `values` as a line chart to an SVG file at `path`
///
/// Non-finite samples are skipped. Missing parent directories are created.
///
/// # Example
/// ```no_run
/// use unary_pattern::pattern::UnaryFunction;
/// use unary_pattern::plot::plot_sequence_svg;
///
/// let values: Vec<f64> = UnaryFunction::sample(f64::sin, 0.0, 6.28, 64).collect();
/// plot_sequence_svg("sine.svg", "sine", &values).unwrap();
/// ```
pub fn plot_sequence_svg(
    path: impl AsRef<Path>,
    title: &str,
    values: &[f64],
) -> Result<(), PlotError> {
    let (y_min, y_max) = value_range(values).ok_or(PlotError::Empty)?;
    let max_index = values.len().saturating_sub(1).max(1) as f64;

    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let root = SVGBackend::new(path, (800, 400)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..max_index, y_min..y_max)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("Step")
        .y_desc("Value")
        .x_labels(10)
        .y_labels(10)
        .draw()
        .map_err(drawing)?;

    chart
        .draw_series(LineSeries::new(
            values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, &v)| (i as f64, v)),
            BLUE.stroke_width(2),
        ))
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("unary_pattern_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_value_range() {
        assert_eq!(value_range(&[]), None);
        assert_eq!(value_range(&[f64::NAN]), None);

        let (lo, hi) = value_range(&[0.0, 10.0, f64::INFINITY]).unwrap();
        assert!((lo + 0.5).abs() < 1e-9);
        assert!((hi - 10.5).abs() < 1e-9);

        // Flat sequences get a unit margin
        assert_eq!(value_range(&[2.0, 2.0]), Some((1.0, 3.0)));
    }

    #[test]
    fn test_plot_writes_svg() {
        let path = temp_path("plot.svg");
        let values = vec![0.0, 0.0625, 0.25, 0.5625, 1.0];
        plot_sequence_svg(&path, "square", &values).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("square"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_plot_empty() {
        let path = temp_path("empty.svg");
        assert!(matches!(
            plot_sequence_svg(&path, "empty", &[]),
            Err(PlotError::Empty)
        ));
    }

    #[test]
    fn test_plot_creates_parent_dirs() {
        let dir = temp_path("nested");
        let path = dir.join("deeper").join("plot.svg");
        plot_sequence_svg(&path, "nested", &[1.0, 2.0]).unwrap();
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_plot_parent_is_a_file() {
        let blocker = temp_path("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let result = plot_sequence_svg(blocker.join("plot.svg"), "blocked", &[1.0]);
        assert!(matches!(result, Err(PlotError::Io(_))));

        fs::remove_file(&blocker).unwrap();
    }
}
