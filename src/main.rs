use clap::Parser;
use env_logger::Env;
use securescope::answers::ReaderAnswers;
use securescope::cli::Args;
use securescope::reports::SummaryReportParser;
use securescope::ui::Console;
use securescope::AssessmentSession;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Initialize logging based on verbosity and quiet flags
    let log_level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    log::info!("SecureScope starting with args: {:?}", args);

    let console = if args.quiet {
        Console::muted()
    } else {
        Console::stdout()
    };
    console.clear_screen();
    console.banner();

    let options = args.session_options()?;
    let parser = SummaryReportParser::new();
    let session = AssessmentSession::new(options, &parser, &console);

    match &args.answers {
        Some(path) => {
            let mut answers = ReaderAnswers::from_file(path)?;
            session.run(&mut answers)?;
        }
        None => {
            let mut answers = ReaderAnswers::stdin();
            session.run(&mut answers)?;
        }
    }

    Ok(())
}
