use clap::Parser;
use rust_quiz_editor::{logging, Args};

fn main() {
    let args = Args::parse();

    // The gallery owns the terminal, so it runs without a log subscriber.
    if args.command.needs_questions() {
        logging::init();
    }

    if let Err(e) = rust_quiz_editor::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
