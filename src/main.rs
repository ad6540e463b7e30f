use chess_rules::config::EngineConfig;
use chess_rules::uci;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = uci::run_uci_loop(EngineConfig::from_env()) {
        error!("uci loop stopped: {e}");
        std::process::exit(1);
    }
}
