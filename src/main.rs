use elastic1d::core::Scenario;
use elastic1d::error::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    elastic1d::report(&Scenario::default(), &mut out)
}
