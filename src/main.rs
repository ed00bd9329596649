use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    fintrust_client::client::gui::app::FinTrustApp::run(iced::Settings::default())
}
