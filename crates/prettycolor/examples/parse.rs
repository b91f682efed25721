use std::io::{stdin, BufRead, Result};

use prettycolor::opt::Options;
use prettycolor::{Color, CompatibilityLevel};

const LEVELS: [CompatibilityLevel; 4] = [
    CompatibilityLevel::Basic,
    CompatibilityLevel::Css1,
    CompatibilityLevel::Css2,
    CompatibilityLevel::Css3,
];

fn show(color: Option<Color>) -> String {
    color.map_or_else(|| "-".to_owned(), |color| color.to_string())
}

fn report(text: &str) {
    println!("{:?}", text);
    for level in LEVELS {
        println!("    {:<8} {}", level.to_string(), show(Color::parse_at(level, text)));
    }
    println!("    {:<8} {}", "legacy", show(Color::parse_legacy(text)));

    let options = Options::with_legacy_fallback();
    println!("    {:<8} {}", "either", show(options.parse(text)));
}

/// Parse the command line arguments as colors, or each line of standard input
/// if there are no arguments. Set `RUST_LOG=trace` to see the legacy
/// algorithm at work.
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        for text in args {
            report(&text);
        }
        return Ok(());
    }

    for line in stdin().lock().lines() {
        report(&line?);
    }

    Ok(())
}
