mod analysis;
mod app;
mod config;
mod locale;
mod picture;
mod ui;

use app::CepAnalyzer;
use config::Config;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    // No credential, no window: an analysis can never succeed without it
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    iced::application("CEP Analyzer", CepAnalyzer::update, CepAnalyzer::view)
        .subscription(CepAnalyzer::subscription)
        .theme(CepAnalyzer::theme)
        .window_size(iced::Size::new(1100.0, 760.0))
        .centered()
        .run_with(move || CepAnalyzer::new(config))
}
