use env_logger::Target;

pub fn init() {
    // Respect RUST_LOG if set, otherwise default to info.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();
}
