use clap::Parser;
use scyther::{
    parse_status, BallKind, GameRng, Pokedex, PokedexConfig, RandomSource, WildPokemon,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Throw balls at a wild Generation 1 Pokemon.
#[derive(Parser, Debug)]
#[command(name = "scyther", version)]
struct Args {
    /// Base HP stat of the species
    #[arg(long, default_value_t = 70)]
    base_hp: u8,

    /// Fixed HP IV (0-15); rolled like the original games when omitted
    #[arg(long)]
    hp_ivs: Option<u8>,

    #[arg(long, default_value_t = 25)]
    level: u8,

    #[arg(long, default_value_t = 45)]
    catch_rate: u8,

    /// Starting status: normal, poisoned, burned, paralyzed, asleep, frozen
    #[arg(long, default_value = "normal")]
    status: String,

    #[arg(long, default_value = "Scyther")]
    name: String,

    /// Make the target impossible to catch (the Pokemon Tower ghost)
    #[arg(long)]
    uncatchable: bool,

    /// Load base HP, catch rate and name from the pokedex by number
    #[arg(long)]
    species: Option<u16>,

    /// Seed for a reproducible encounter
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between wobbles
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,
}

enum Command {
    Throw(BallKind),
    SetHp(u16),
    SetStatus(String),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(Command::Show);
    };

    match word.to_lowercase().as_str() {
        "hp" => parts
            .next()
            .and_then(|value| value.parse().ok())
            .map(Command::SetHp)
            .ok_or_else(|| "Usage: hp <number>".to_string()),
        "status" => parts
            .next()
            .map(|key| Command::SetStatus(key.to_string()))
            .ok_or_else(|| "Usage: status <key>".to_string()),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => BallKind::from_str(other)
            .map(Command::Throw)
            .map_err(|_| format!("Unknown command '{}'. Type 'help'.", other)),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  poke | great | ultra | safari | master   throw a ball");
    println!("  hp <number>                              set current HP");
    println!("  status <key>                             set status");
    println!("  show                                     show the target");
    println!("  quit                                     run away");
}

fn build_target(args: &Args, rng: &mut dyn RandomSource) -> Result<WildPokemon, Box<dyn Error>> {
    let (base_hp, catch_rate, name) = match args.species {
        Some(id) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let mut pokedex = Pokedex::new(PokedexConfig::from_env());
            let record = runtime.block_on(pokedex.get(id))?;
            (record.base_hp, record.catch_rate, record.display_name())
        }
        None => (args.base_hp, args.catch_rate, args.name.clone()),
    };

    let mut builder = WildPokemon::builder(base_hp)
        .level(args.level)
        .catch_rate(catch_rate)
        .status(&args.status)
        .name(&name)
        .uncatchable(args.uncatchable);
    if let Some(hp_ivs) = args.hp_ivs {
        builder = builder.hp_ivs(hp_ivs);
    }

    Ok(builder.build(rng)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(GameRng::seeded(seed)),
        None => Box::new(GameRng::from_entropy()),
    };

    let mut target = build_target(&args, rng.as_mut())?;
    tracing::info!(pokemon = %target, hp_ivs = target.hp_ivs(), "encounter started");

    println!("A wild {} appeared!", target.name());
    println!("{}", target);
    print_help();

    let stdin = io::stdin();
    let delay = Duration::from_millis(args.delay_ms);
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(Command::Throw(ball)) => {
                println!("You threw a {}!", ball);
                let outcome = target.throw_ball(ball, rng.as_mut());
                for _ in 0..outcome.shakes() {
                    println!("Wobble...");
                    thread::sleep(delay);
                }
                if outcome.is_caught() {
                    println!("All right! {} was caught!", target.name());
                    break;
                }
                println!("{}", outcome.message());
            }
            Ok(Command::SetHp(hp)) => {
                target.set_hp(hp);
                println!("{}", target);
            }
            Ok(Command::SetStatus(key)) => match parse_status(&key) {
                Ok(status) => {
                    target.set_status(status);
                    println!("{}", target);
                }
                Err(err) => println!("{}", err),
            },
            Ok(Command::Show) => println!("{}", target),
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => {
                println!("Got away safely!");
                break;
            }
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}
