use std::f64::consts::TAU;

use tracing_subscriber::EnvFilter;
use unary_pattern::pattern::{
    CallableUnaryFunction, Param, Pattern, PatternState, SamplerParams, Sequence, UnaryFunction,
    Value,
};

fn print_values(label: &str, values: &[f64]) {
    print!("  {:<28} [", label);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{:.3}", value);
    }
    println!("]");
}

fn demo_constant_params() {
    println!("\n=== Constant Parameters ===\n");

    let mut square = UnaryFunction::sample(|x| x * x, 0.0, 1.0, 5);
    println!("  {}", square);
    print_values("square over [0, 1]:", &square.next_n(5));
    println!("  state after run: {:?}", square.state());

    let mut shaped = UnaryFunction::new(
        |x| x * x,
        SamplerParams {
            rate: Param::from(2.0),
            phase: Param::from(0.5),
            mul: Param::from(2.0),
            offset: Param::from(1.0),
            ..SamplerParams::default().with_steps(3)
        },
    );
    print_values("rate 2, phase 0.5, x2 + 1:", &shaped.next_n(3));
}

fn demo_modulated_params() {
    println!("\n=== Sources and Callables ===\n");

    // A sine sweep whose amplitude fades out and whose centre steps through a chord
    let mut pitches = UnaryFunction::new(
        f64::sin,
        SamplerParams {
            stop: Param::from(TAU),
            mul: Param::callable(|t| 12.0 * (1.0 - t)),
            offset: Param::source(Sequence::new(vec![60.0, 64.0, 67.0])),
            ..SamplerParams::default().with_steps(9)
        },
    );
    println!("  {}", pitches);
    print_values("fading sine over a chord:", &pitches.next_n(9));

    // Step count itself can move between runs
    let mut ramp = UnaryFunction::new(
        |x| x,
        SamplerParams::default().with_steps(Value::source(Sequence::new(vec![4.0, 4.0, 4.0, 4.0, 2.0]))),
    );
    print_values("ramp with moving steps:", &ramp.next_n(8));
    println!("  state: {:?}", ramp.state());

    ramp.reset();
    print_values("same ramp after reset:", &ramp.next_n(8));
}

fn demo_callable_only() {
    println!("\n=== Callable-Only Sampler ===\n");

    let params = SamplerParams {
        mul: Param::callable(|_| 2.0),
        offset: Param::callable(|t| t),
        ..SamplerParams::callable_defaults().with_steps(3)
    };
    match CallableUnaryFunction::new(|x| x * x, params) {
        Ok(mut f) => {
            print_values("x^2 * 2 + t:", &f.next_n(3));
            println!("  exhausted: {}", f.state() == PatternState::Exhausted);
        }
        Err(e) => println!("  error: {}", e),
    }

    let rejected = CallableUnaryFunction::new(
        |x| x,
        SamplerParams {
            phase: Param::from(0.25),
            ..SamplerParams::callable_defaults()
        },
    );
    if let Err(e) = rejected {
        println!("  constant phase rejected: {}", e);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Unary Function Patterns");
    println!("=======================");

    demo_constant_params();
    demo_modulated_params();
    demo_callable_only();

    println!("\n=======================");
    println!("All demos complete!");
}
