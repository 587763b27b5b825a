//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordForestArgs};
use crate::dictionary::LoadStats;
use crate::engine::GraphOrigin;
use crate::error::Result;
use crate::graph::{LengthStats, Reachability};

/// Result of the build command.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub origin: GraphOrigin,
    pub snapshot: String,
    pub total_words: usize,
    pub total_forests: usize,
    pub distinct_lengths: usize,
    pub load_stats: Option<LoadStats>,
    pub duration_ms: u64,
}

/// Result of a connectivity query.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionResult {
    pub from: String,
    pub to: String,
    pub connected: bool,
    pub reachability: Reachability,
}

/// Result of a shortest ladder query.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub reachability: Reachability,
    pub ladder: Option<Vec<String>>,
    pub steps: Option<usize>,
}

/// Forest statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphStats {
    pub origin: GraphOrigin,
    pub total_words: usize,
    pub total_forests: usize,
    pub distinct_lengths: usize,
    pub lengths: Option<Vec<LengthStats>>,
}

/// Results of the built-in sample queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResults {
    pub queries: Vec<PathResult>,
}

/// Output a result in the requested format.
pub fn output_result<T>(result: &T, args: &WordForestArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => {
            print!("{result}");
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordForestArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl fmt::Display for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            GraphOrigin::Built => writeln!(f, "Built forests and saved {}", self.snapshot)?,
            GraphOrigin::Restored => writeln!(f, "Restored forests from {}", self.snapshot)?,
        }
        if let Some(stats) = &self.load_stats {
            writeln!(
                f,
                "Lines read: {} (accepted {}, rejected {})",
                stats.lines_read, stats.accepted, stats.rejected
            )?;
        }
        writeln!(
            f,
            "Assigned {} words into {} forests across {} word lengths",
            self.total_words, self.total_forests, self.distinct_lengths
        )?;
        writeln!(f, "Time: {}ms", self.duration_ms)
    }
}

impl fmt::Display for ConnectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let answer = if self.connected { "Yes" } else { "No" };
        writeln!(f, "Are {} and {} connected? {answer}", self.from, self.to)?;
        if !self.connected {
            writeln!(f, "  ({})", self.reachability)?;
        }
        Ok(())
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ladder {
            Some(ladder) => writeln!(
                f,
                "Path from {} to {}: {} ({} steps)",
                self.from,
                self.to,
                ladder.join(" -> "),
                self.steps.unwrap_or_default()
            ),
            None => writeln!(
                f,
                "No path from {} to {} ({})",
                self.from, self.to, self.reachability
            ),
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forest Statistics ({}):", self.origin)?;
        writeln!(f, "Total words: {}", self.total_words)?;
        writeln!(f, "Total forests: {}", self.total_forests)?;
        writeln!(f, "Distinct word lengths: {}", self.distinct_lengths)?;

        if let Some(lengths) = &self.lengths {
            writeln!(f)?;
            writeln!(f, "{:>6} {:>8} {:>8} {:>8}", "length", "words", "forests", "largest")?;
            for stats in lengths {
                writeln!(
                    f,
                    "{:>6} {:>8} {:>8} {:>8}",
                    stats.word_length, stats.words, stats.forests, stats.largest_forest
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for DemoResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for query in &self.queries {
            let answer = if query.reachability.is_connected() {
                "Yes"
            } else {
                "No"
            };
            writeln!(f, "Are {} and {} connected? {answer}", query.from, query.to)?;
            write!(f, "{query}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_result(ladder: Option<Vec<&str>>) -> PathResult {
        let reachability = if ladder.is_some() {
            Reachability::Connected
        } else {
            Reachability::Disconnected
        };
        let ladder: Option<Vec<String>> =
            ladder.map(|words| words.into_iter().map(String::from).collect());
        PathResult {
            from: "cat".to_string(),
            to: "dog".to_string(),
            reachability,
            steps: ladder.as_ref().map(|l| l.len() - 1),
            ladder,
        }
    }

    #[test]
    fn test_path_display() {
        let found = path_result(Some(vec!["cat", "cot", "cog", "dog"]));
        assert_eq!(
            found.to_string(),
            "Path from cat to dog: cat -> cot -> cog -> dog (3 steps)\n"
        );

        let missing = path_result(None);
        assert!(missing.to_string().starts_with("No path from cat to dog"));
    }

    #[test]
    fn test_connection_display() {
        let result = ConnectionResult {
            from: "cat".to_string(),
            to: "goat".to_string(),
            connected: false,
            reachability: Reachability::LengthMismatch { left: 3, right: 4 },
        };
        let text = result.to_string();
        assert!(text.starts_with("Are cat and goat connected? No"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(path_result(Some(vec!["cat", "cot"]))).unwrap();
        assert_eq!(value["reachability"]["status"], "connected");
        assert_eq!(value["steps"], 1);
        assert_eq!(value["ladder"][1], "cot");
    }

    #[test]
    fn test_stats_display_lists_lengths() {
        let stats = GraphStats {
            origin: GraphOrigin::Built,
            total_words: 5,
            total_forests: 2,
            distinct_lengths: 2,
            lengths: Some(vec![LengthStats {
                word_length: 3,
                words: 4,
                forests: 1,
                largest_forest: 4,
            }]),
        };
        let text = stats.to_string();
        assert!(text.contains("Total forests: 2"));
        assert!(text.contains("largest"));
    }
}
