use sort_divide::utils::logger;
use sort_divide::{ConsoleProgram, DivideArgs, SafeDivider};

fn main() {
    let args = DivideArgs::parse_operands(std::env::args_os()).unwrap_or_else(|e| e.exit());

    logger::init_cli_logger();
    tracing::debug!("Safe divider args: {:?}", args);

    let divider = SafeDivider::new(args.dividend, args.divisor);
    let mut stdout = std::io::stdout().lock();

    // Bad operands are reported on stdout and still exit 0.
    if let Err(e) = divider.run(&mut stdout) {
        tracing::error!("❌ Safe divider failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
