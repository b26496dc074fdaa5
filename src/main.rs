use std::process;

use balanced_bst::demo::{random_values, DemoConfig};
use balanced_bst::Tree;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Builds a random balanced tree, skews it with inserts, and rebalances it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Seed for the random values
    #[arg(long, default_value_t = DemoConfig::default().seed)]
    seed: u64,

    /// How many random values to draw
    #[arg(long, default_value_t = DemoConfig::default().count)]
    count: usize,

    /// Smallest value that may be drawn
    #[arg(long, default_value_t = DemoConfig::default().min, allow_negative_numbers = true)]
    min: i32,

    /// Values are drawn below this bound
    #[arg(long, default_value_t = DemoConfig::default().max, allow_negative_numbers = true)]
    max: i32,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

impl From<&Cli> for DemoConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            seed: cli.seed,
            count: cli.count,
            min: cli.min,
            max: cli.max,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&DemoConfig::from(&cli)) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(?level, "logging initialized");
}

fn run(config: &DemoConfig) -> balanced_bst::Result<()> {
    let values = random_values(config)?;
    info!(seed = config.seed, count = values.len(), "drew random values");

    let mut tree = Tree::new(values);
    report(&tree);

    // Values above the drawn range all land on the rightmost spine.
    let skew = config.max..config.max.saturating_add(5);
    for value in skew {
        tree.insert(value);
    }
    println!("After inserting values above {}:", config.max);
    report(&tree);

    tree.rebalance();
    println!("After rebalancing:");
    report(&tree);

    let minimum = tree.find_minimum()?;
    println!(
        "Minimum {} sits at depth {:?}",
        minimum.value(),
        tree.depth(minimum)
    );
    Ok(())
}

fn report(tree: &Tree<i32>) {
    print!("{tree}");
    println!("balanced: {}, height: {}", tree.is_balanced(), tree.height());
    println!("level order: {:?}", tree.level_order());
    println!("preorder:    {:?}", tree.preorder());
    println!("inorder:     {:?}", tree.inorder());
    println!("postorder:   {:?}", tree.postorder());
    println!();
}
