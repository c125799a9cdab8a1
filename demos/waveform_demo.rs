/// Render all six schemes for one bit string, then dump the run as JSON
use encoding_techniques_rs::encoding::{Polarity, Scheme, encode, parse_bits};
use encoding_techniques_rs::ui::chart;
use encoding_techniques_rs::utils::dump::WaveformDump;

fn main() {
    let bits = parse_bits("10110").expect("demo input is binary");

    for initial in [Polarity::High, Polarity::Low] {
        println!("=== initial signal {} ===", initial.label());
        println!();
        print!("{}", chart::render(&encode(&bits, initial), &Scheme::ALL));
        println!();
    }

    println!("=== JSON dump (initial signal +1) ===");
    let points = encode(&bits, Polarity::High);
    let dump = WaveformDump::new(&bits, Polarity::High, points);
    println!(
        "{}",
        serde_json::to_string_pretty(&dump).expect("dump serializes")
    );
}
