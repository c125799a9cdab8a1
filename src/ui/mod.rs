pub mod chart;

pub fn print_banner() {
    println!("Data Encoding Techniques");
}
