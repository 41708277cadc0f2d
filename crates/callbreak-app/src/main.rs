use anyhow::{Context, Result, bail};
use callbreak_app::cli::{Cli, Command};
use callbreak_app::config;
use callbreak_app::controller::TrackerController;
use callbreak_app::logging::init_logging;
use callbreak_app::render;
use callbreak_app::store::StateStore;
use callbreak_core::model::card::Card;
use callbreak_core::model::suit::Suit;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let store = StateStore::new(config::state_file(cli.state_file));
    let mut tracker = TrackerController::open(store);

    match cli.command {
        Command::Play { cards } => {
            for token in cards {
                let card: Card = token
                    .parse()
                    .with_context(|| format!("cannot parse card '{token}'"))?;
                tracker
                    .play(card)
                    .with_context(|| format!("cannot play {card}"))?;
            }
            print_view(&tracker);
        }
        Command::Undo => match tracker.undo() {
            Some(card) => println!("Removed {card}"),
            None => println!("Nothing to undo"),
        },
        Command::Reset => {
            tracker.reset();
            println!("Game cleared");
        }
        Command::Trump { suit } => {
            let Some(trump) = Suit::from_token(&suit) else {
                bail!("unrecognized suit '{suit}'");
            };
            tracker.set_trump(trump).context("cannot change trump")?;
            println!("Trump is now {trump}");
        }
        Command::Show => print_view(&tracker),
        Command::Status => println!("{}", tracker.status_text()),
    }

    Ok(())
}

fn print_view(tracker: &TrackerController) {
    print!(
        "{}",
        render::render_view(&tracker.view(), &tracker.session().used())
    );
    println!("{}", tracker.status_text());
}
