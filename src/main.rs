use std::error::Error;

use clap::Parser;
use wayaccess::osm::{AccessParser, Options, Profile, Way};
use wayaccess::{EdgeFlags, FlagArray, Tag, Tags};

#[derive(Parser)]
struct Cli {
    /// Tags of the way, as key=value pairs
    tags: Vec<Tag>,

    /// Profile options in the key=value|key=value form, e.g. "block_fords=true"
    #[arg(long)]
    options: Option<Options>,

    /// Treat fords as impassable (overrides --options)
    #[arg(long)]
    block_fords: bool,

    /// Treat access=private as permitted (overrides --options)
    #[arg(long)]
    allow_private: bool,

    /// Mark the way as part of a roundabout
    #[arg(long)]
    roundabout: bool,

    /// Tag of the barrier node represented by the way, as a key=value pair;
    /// makes the way a barrier edge
    #[arg(long = "node-tag")]
    node_tags: Vec<Tag>,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    let mut options = cli.options.unwrap_or_default();
    options.block_fords |= cli.block_fords;
    options.block_private &= !cli.allow_private;
    let profile = Profile::bicycle(&options);
    let parser = AccessParser::new(&profile);
    log::debug!("{:?}", parser.profile());

    let tags = Tags::from_iter(cli.tags);
    let way = if cli.node_tags.is_empty() {
        Way::new(0, tags)
    } else {
        Way::barrier_edge(0, tags, Tags::from_iter(cli.node_tags))
    };

    let mut roundabouts = FlagArray::new();
    roundabouts.set_bool(false, 0, cli.roundabout);

    let mut access = FlagArray::new();
    let outcome = parser.handle_way_tags(0, &mut access, &roundabouts, &way);
    let (forward, backward) = access.get(0);

    let outcome = if outcome.can_skip() {
        "skip"
    } else if outcome.is_ferry() {
        "ferry"
    } else {
        debug_assert!(outcome.is_routable());
        "routable"
    };
    println!("{} forward={} backward={}", outcome, forward, backward);

    Ok(())
}
