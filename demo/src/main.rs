use demo::config::DemoConfig;
use demo::smoke;

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (for development)
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Codec version: {}", codec::codec_version());

    let config = DemoConfig::load_from_env()?;
    log::info!(
        "Pointer diagnostics: warn={} error={}",
        config.diagnostics.warn_on_pointer,
        config.diagnostics.error_on_pointer
    );

    let codec = smoke::build_codec(config.diagnostics);

    let from_buffer = smoke::buffer_roundtrip(&codec, config.value)?;
    println!("{}", from_buffer);

    let from_stream = smoke::stream_roundtrip(&codec, config.value)?;
    println!("{}", from_stream);

    Ok(())
}
