//! Command implementations for the wordforest CLI.

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{GraphOrigin, LoadedGraph, WordForestEngine};
use crate::error::Result;
use crate::graph::WordGraph;

/// Word pairs queried by the demo command, each asked in both directions.
pub const DEMO_PAIRS: [(&str, &str); 11] = [
    ("cat", "dog"),
    ("ape", "man"),
    ("pig", "sty"),
    ("pen", "ink"),
    ("one", "two"),
    ("bat", "cry"),
    ("goat", "fish"),
    ("bake", "farm"),
    ("lawn", "brat"),
    ("snake", "cards"),
    ("plant", "graph"),
];

/// Execute a CLI command.
pub fn execute_command(args: WordForestArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let engine = WordForestEngine::new(config)?;

    match &args.command {
        Command::Build(build_args) => build(&engine, build_args, &args),
        Command::Connected(pair) => {
            let loaded = load(&engine, &args)?;
            output_result(&connection(&loaded.graph, &pair.from, &pair.to), &args)
        }
        Command::Path(pair) => {
            let loaded = load(&engine, &args)?;
            output_result(&ladder(&loaded.graph, &pair.from, &pair.to), &args)
        }
        Command::Stats(stats_args) => {
            let loaded = load(&engine, &args)?;
            output_result(&stats(&loaded, stats_args.detailed), &args)
        }
        Command::Demo => {
            let loaded = load(&engine, &args)?;
            output_result(&demo(&loaded.graph), &args)
        }
    }
}

fn load(engine: &WordForestEngine, args: &WordForestArgs) -> Result<LoadedGraph> {
    let store = engine.open_store()?;
    let loaded = engine.load_or_build(&store)?;
    info!(
        "Graph {} in {}ms",
        loaded.origin,
        loaded.elapsed.as_millis()
    );
    warn_ignored_overrides(&loaded, args);
    Ok(loaded)
}

/// Dictionary flags have no effect on a restored graph.
fn warn_ignored_overrides(loaded: &LoadedGraph, args: &WordForestArgs) -> Vec<&'static str> {
    if loaded.origin != GraphOrigin::Restored {
        return Vec::new();
    }
    let ignored = args.build_overrides();
    if !ignored.is_empty() {
        warn!(
            "{} ignored because the graph was restored from a snapshot; run `build --force` to rebuild",
            ignored.join(", ")
        );
    }
    ignored
}

/// Build (or with `--force`, rebuild) the graph and report what was saved.
fn build(engine: &WordForestEngine, build_args: &BuildArgs, args: &WordForestArgs) -> Result<()> {
    let store = engine.open_store()?;
    let loaded = if build_args.force {
        engine.rebuild(&store)?
    } else {
        engine.load_or_build(&store)?
    };
    warn_ignored_overrides(&loaded, args);

    let graph = &loaded.graph;
    output_result(
        &BuildResult {
            origin: loaded.origin,
            snapshot: store.file_name(),
            total_words: graph.total_words(),
            total_forests: graph.total_forests(),
            distinct_lengths: graph.distinct_lengths(),
            load_stats: loaded.load_stats,
            duration_ms: loaded.elapsed.as_millis() as u64,
        },
        args,
    )
}

/// Answer a connectivity query.
pub fn connection(graph: &WordGraph, from: &str, to: &str) -> ConnectionResult {
    let reachability = graph.reachability(from, to);
    ConnectionResult {
        from: from.to_string(),
        to: to.to_string(),
        connected: reachability.is_connected(),
        reachability,
    }
}

/// Answer a shortest ladder query.
pub fn ladder(graph: &WordGraph, from: &str, to: &str) -> PathResult {
    let ladder = graph.shortest_path(from, to);
    PathResult {
        from: from.to_string(),
        to: to.to_string(),
        reachability: graph.reachability(from, to),
        steps: ladder.as_ref().map(|words| words.len() - 1),
        ladder,
    }
}

/// Summarize the graph, optionally per word length.
pub fn stats(loaded: &LoadedGraph, detailed: bool) -> GraphStats {
    let graph = &loaded.graph;
    GraphStats {
        origin: loaded.origin,
        total_words: graph.total_words(),
        total_forests: graph.total_forests(),
        distinct_lengths: graph.distinct_lengths(),
        lengths: detailed.then(|| graph.length_stats()),
    }
}

/// Run every demo pair forwards and backwards.
pub fn demo(graph: &WordGraph) -> DemoResults {
    let queries = DEMO_PAIRS
        .iter()
        .flat_map(|&(a, b)| [(a, b), (b, a)])
        .map(|(from, to)| ladder(graph, from, to))
        .collect();
    DemoResults { queries }
}
