use std::f64::consts::TAU;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use unary_pattern::pattern::{Param, Pattern, SamplerParams, UnaryFunction};
use unary_pattern::plot::plot_sequence_svg;

/// Shapes available from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    Sine,
    Square,
    Cube,
    Saw,
    Exp,
}

impl Shape {
    fn function(self) -> fn(f64) -> f64 {
        match self {
            Shape::Sine => |x| (x * TAU).sin(),
            Shape::Square => |x| x * x,
            Shape::Cube => |x| x * x * x,
            Shape::Saw => |x| x - x.floor(),
            Shape::Exp => f64::exp,
        }
    }
}

/// Sample a function and plot the resulting pattern to SVG
#[derive(Debug, Parser)]
#[command(name = "plot-pattern")]
struct Args {
    /// Function to sample
    #[arg(long, value_enum, default_value = "sine")]
    shape: Shape,
    #[arg(long, default_value_t = 0.0)]
    start: f64,
    #[arg(long, default_value_t = 1.0)]
    stop: f64,
    #[arg(long, default_value_t = 100)]
    steps: usize,
    #[arg(long, default_value_t = 1.0)]
    rate: f64,
    #[arg(long, default_value_t = 0.0)]
    phase: f64,
    #[arg(long, default_value_t = 1.0)]
    mul: f64,
    #[arg(long, default_value_t = 0.0)]
    offset: f64,
    /// Output SVG path
    output: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.steps == 0 {
        bail!("steps must be at least 1");
    }

    let mut pattern = UnaryFunction::new(
        args.shape.function(),
        SamplerParams {
            start: Param::from(args.start),
            stop: Param::from(args.stop),
            rate: Param::from(args.rate),
            phase: Param::from(args.phase),
            mul: Param::from(args.mul),
            offset: Param::from(args.offset),
            ..SamplerParams::default().with_steps(args.steps)
        },
    );

    let title = format!("{:?}: {}", args.shape, pattern);
    let values = pattern.next_n(args.steps);
    info!(count = values.len(), "sampled pattern");

    plot_sequence_svg(&args.output, &title, &values)
        .with_context(|| format!("writing {}", args.output))?;
    info!(output = %args.output, "plot written");

    Ok(())
}
