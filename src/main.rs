fn main() {
    if let Err(error) = history_mate::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
