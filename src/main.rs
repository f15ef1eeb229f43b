use utm_command::runtime::modes;

fn main() {
    if let Err(e) = modes::run_cli() {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
}
