use flock2d::FlockConfig;

fn main() {
    env_logger::init();

    if let Err(e) = flock2d::run(FlockConfig::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
