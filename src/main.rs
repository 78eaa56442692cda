use boxflow::{BoxflowError, Document, FixedAdvanceMeasurer, InputConstraints, LayoutConfig};
use std::env;
use std::fs;

/// Lays out a JSON node tree with a fixed-advance measurer and prints every
/// node's box.
fn main() -> Result<(), BoxflowError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Lays out a JSON node tree and prints the resolved boxes.");
        eprintln!();
        eprintln!("Usage: {} <path/to/tree.json> [width] [height]", args[0]);
        std::process::exit(1);
    }

    let width = parse_dimension(args.get(2), 800.0);
    let height = parse_dimension(args.get(3), 600.0);

    let json = fs::read_to_string(&args[1])?;
    let (document, root) = Document::from_json(&json)?;
    let map = document.layout(
        root,
        &FixedAdvanceMeasurer::default(),
        LayoutConfig::default(),
        InputConstraints::new(width, height),
    )?;

    for (id, result) in map.iter() {
        let r = result.rect;
        println!(
            "#{:<4} x={:<8.2} y={:<8.2} w={:<8.2} h={:<8.2} lines={} fragments={}",
            id.index(),
            r.x,
            r.y,
            r.w,
            r.h,
            result.lines().len(),
            result.inline_fragments().len()
        );
    }
    Ok(())
}

fn parse_dimension(arg: Option<&String>, default: f64) -> f64 {
    match arg.map(|s| s.parse::<f64>()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            eprintln!("Ignoring invalid dimension ({}), using {}", e, default);
            default
        }
        None => default,
    }
}
