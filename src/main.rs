mod cli;
mod fs;
mod logging;
mod platform;
mod project;
mod runner;

fn main() -> anyhow::Result<()> {
    platform::init();
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
