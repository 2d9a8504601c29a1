use env_logger::Env;
use rle_codec::cli;

fn main() {
	// Integrity mismatches are logged at warn; keep them visible by default.
	env_logger::Builder::from_env(Env::default().default_filter_or(cli::DEFAULT_LOG_FILTER)).init();
	log::debug!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

	if let Err(e) = cli::run() {
		eprintln!("Error: {}", e);
		std::process::exit(1);
	}
}
