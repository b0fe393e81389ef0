use clap::Parser;
use sort_divide::utils::logger;
use sort_divide::{ConsoleProgram, RecordSorter, SorterArgs};

fn main() {
    let _args = SorterArgs::parse();

    logger::init_cli_logger();
    tracing::debug!("Starting record sorter");

    let sorter = RecordSorter::default();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = sorter.run(&mut stdout) {
        tracing::error!("❌ Record sorter failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
