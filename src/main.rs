use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod engine;
mod error;
mod logging;
mod quote;
mod sequence;
mod share;
mod store;
mod templates;
mod utils;

use config::{Config, GlobalArgs};
use share::ShareChannel;

const LONG_ABOUT: &str = "\
Calmquote shows one calming quote at a time and helps you share it.

Quotes come from a JSON file (a list of {quote, author, meaning, instruction,
category, tags} records). Random quotes are drawn from a shuffled pass, so no
quote repeats until every quote has been shown once. The pass and the quote on
display are remembered in .calmquote/ between runs.

The daily quote is the same for everyone using the same quote file on the
same UTC day.";

const AFTER_HELP: &str = "\
EXAMPLES:
    Show a new quote:
        $ calmquote next

    Show today's quote:
        $ calmquote daily

    Copy the quote on display to the clipboard:
        $ calmquote share

    Get a WhatsApp link instead of opening the browser:
        $ calmquote share whatsapp --print-url

    See where you are in the current pass:
        $ calmquote status

FILES:
    quotes.json                     Quote list (--quotes, CALMQUOTE_QUOTES)
    .calmquote/sequence.v1.json     Pass order, position and current quote";

#[derive(Parser)]
#[command(name = "calmquote")]
#[command(version)]
#[command(about = "A calming quote of the moment, without repeats")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the next quote of the shuffled pass
    #[command(long_about = "\
Show the next quote of the shuffled pass.

Every quote is shown exactly once per pass. When the pass is used up it is
reshuffled before the next quote is served. If the quote file changed since
the last run, a new pass starts.")]
    Next,

    /// Show the quote of the day
    #[command(long_about = "\
Show the quote of the day.

The choice depends only on the UTC date and the number of quotes, never on
earlier runs. The quote becomes the one on display for `share`.")]
    Daily {
        /// Day to show instead of today (YYYY-MM-DD, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Share the quote on display
    #[command(
        long_about = "\
Share the quote on display.

The share text lists the quote, its author, meaning, suggested practice,
category and tags (empty parts are left out), followed by where it was
shared from.

Link channels open the browser; with --print-url the link is printed instead.
If a channel cannot be used, the text falls back to the clipboard and, failing
that, is printed for copying by hand.",
        after_help = "\
EXAMPLES:
    $ calmquote share
    $ calmquote share print
    $ calmquote share pinterest --print-url"
    )]
    Share {
        /// Where to share
        #[arg(value_enum, default_value_t = ShareChannel::Copy)]
        channel: ShareChannel,

        /// Print share links instead of opening them
        #[arg(long)]
        print_url: bool,
    },

    /// Display the quote collection and pass progress
    Status,

    /// Forget the pass and the quote on display
    Reset,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    let config = Config::from_args(&cli.global);

    let result = match cli.command {
        Commands::Next => commands::next::run(&config),
        Commands::Daily { date } => commands::daily::run(&config, date),
        Commands::Share { channel, print_url } => {
            let options = commands::share::ShareOptions { channel, print_url };
            commands::share::run(&config, options)
        }
        Commands::Status => commands::status::run(&config),
        Commands::Reset => commands::reset::run(&config),
    };

    if let Err(e) = result {
        if matches!(e, error::Error::Load(_)) {
            println!("{}", templates::LOAD_FAILED);
        }
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
