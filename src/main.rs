fn main() {
    if let Err(e) = graphical_interface::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
