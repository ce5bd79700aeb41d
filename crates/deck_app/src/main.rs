mod app;
mod effects;
mod input;
mod logging;
mod render;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080/".to_string());
    app::run(&base_url)
}
