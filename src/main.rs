use internship_matcher::config::{LoggingSettings, Settings};
use internship_matcher::core::Matcher;
use internship_matcher::handler;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber; stdout is reserved for the response.
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // A broken config must not break the stdout protocol
    let settings = Settings::load().unwrap_or_default();
    init_logging(&settings.logging);

    debug!("Configuration loaded");

    let matcher = Matcher::default();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let exit_code = match handler::run(stdin.lock(), stdout.lock(), &matcher) {
        Ok(code) => code,
        Err(e) => {
            error!("Failed to write response: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
