use anyhow::Result;
use log::{error, info};
use serde::Serialize;
use showdown_core::{Hand, WinState};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(about = "Rank and compare five card poker hands")]
struct Opt {
    #[structopt(
        short,
        long,
        parse(from_occurrences),
        help = "Log more (-v for debug, -vv for trace)"
    )]
    verbose: u8,
    #[structopt(long, help = "Print results as JSON")]
    json: bool,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(about = "Print the class of a hand, e.g. \"3h 4d 5s Ks 5c\"")]
    Classify { hand: Hand },
    #[structopt(about = "Tell which of two hands wins")]
    Compare { first: Hand, second: Hand },
}

#[derive(Serialize)]
struct Classified {
    hand: String,
    label: &'static str,
    rank: usize,
}

impl Classified {
    fn new(hand: &Hand) -> Self {
        let (rank, label) = showdown_core::classify(hand);
        Self {
            hand: hand.to_string(),
            label,
            rank,
        }
    }
}

impl std::fmt::Display for Classified {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (rank {})", self.hand, self.label, self.rank)
    }
}

#[derive(Serialize)]
struct Compared {
    first: Classified,
    second: Classified,
    /// From the first hand's point of view.
    result: WinState,
}

impl Compared {
    fn new(first: &Hand, second: &Hand) -> Self {
        Self {
            first: Classified::new(first),
            second: Classified::new(second),
            result: first.showdown(second),
        }
    }
}

impl std::fmt::Display for Compared {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.first)?;
        writeln!(f, "{}", self.second)?;
        match self.result {
            WinState::Win => write!(f, "first hand wins"),
            WinState::Lose => write!(f, "second hand wins"),
            WinState::Tie => write!(f, "tie"),
        }
    }
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn render<T: Serialize + std::fmt::Display>(out: &T, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(out)?)
    } else {
        Ok(out.to_string())
    }
}

fn run(opt: Opt) -> Result<()> {
    let out = match opt.cmd {
        Command::Classify { hand } => render(&Classified::new(&hand), opt.json)?,
        Command::Compare { first, second } => {
            info!("Comparing {} against {}", first, second);
            render(&Compared::new(&first, &second), opt.json)?
        }
    };
    println!("{}", out);
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    env_logger::builder()
        .filter_level(log_level(opt.verbose))
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
