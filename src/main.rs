fn main() {
    if let Err(err) = arclogo::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
