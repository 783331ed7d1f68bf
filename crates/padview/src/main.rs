fn main() {
	let mut stdout = std::io::stdout();
	if let Err(error) = padview::run_demo(&mut stdout) {
		eprintln!("{error}");
		std::process::exit(1);
	}
}
