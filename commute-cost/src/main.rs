use clap::Parser;
use commute_cost::app::CommuteApp;

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CommuteApp::parse();
    log::info!("starting commute-cost at {}", chrono::Local::now().to_rfc3339());
    match args.run() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
