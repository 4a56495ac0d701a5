fn main() {
    if let Err(err) = greet::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
