use authlisten::application::config::loader::ConfigLoader;
use authlisten::application::config::models::Config;
use authlisten::application::server::redirect_listener::RedirectListener;
use authlisten::common::logger::Logger;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config_file]", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => match ConfigLoader::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error parsing config file: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut listener = RedirectListener::new(config.listener);
    match listener.run() {
        Ok(outcome) => {
            Logger::info(&format!(
                "Processed {} connection(s)",
                outcome.connections
            ));
            // The caller continues the exchange with this code
            match outcome.authorization_code {
                Some(code) => println!("{}", code),
                None => Logger::warn("No authorization code was captured"),
            }
        }
        Err(e) => {
            eprintln!("Listener error: {}", e);
            std::process::exit(1);
        }
    }
}
