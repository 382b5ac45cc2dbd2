//! Command-line arguments.

use clap::{Parser, ValueEnum};
use merge_sort::Decomposition;

use crate::sequence::{ValueList, parse_values};

/// Print a sequence of integers before and after merge sorting it.
#[derive(Parser, Debug)]
#[command(name = "merge-sort")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Values to sort; each argument may hold a comma-separated list.
    /// Defaults to a fixed ten-element sample.
    #[arg(value_parser = parse_values, allow_negative_numbers = true)]
    pub values: Vec<ValueList>,

    /// How the range is split into halves
    #[arg(short, long, value_enum, default_value_t = Strategy::Recursive)]
    pub strategy: Strategy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    Recursive,
    ExplicitStack,
}

impl From<Strategy> for Decomposition {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Recursive => Decomposition::Recursive,
            Strategy::ExplicitStack => Decomposition::ExplicitStack,
        }
    }
}

impl Cli {
    /// Flattened values, or `None` when nothing was passed.
    pub fn sequence(&self) -> Option<Vec<i64>> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().flat_map(|list| list.0.iter().copied()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_values_means_default_sample() {
        let cli = Cli::try_parse_from(["merge-sort"]).unwrap();
        assert_eq!(cli.sequence(), None);
        assert_eq!(cli.strategy, Strategy::Recursive);
    }

    #[test]
    fn mixes_separate_and_comma_separated_values() {
        let cli = Cli::try_parse_from(["merge-sort", "3", "1,4", "5, -1"]).unwrap();
        assert_eq!(cli.sequence(), Some(vec![3, 1, 4, 5, -1]));
    }

    #[test]
    fn negative_first_value_is_not_a_flag() {
        let cli = Cli::try_parse_from(["merge-sort", "-7", "2"]).unwrap();
        assert_eq!(cli.sequence(), Some(vec![-7, 2]));
    }

    #[test]
    fn strategy_flag() {
        let cli = Cli::try_parse_from(["merge-sort", "--strategy", "explicit-stack", "2", "1"])
            .unwrap();
        assert_eq!(Decomposition::from(cli.strategy), Decomposition::ExplicitStack);
    }

    #[test]
    fn rejects_non_integer_values() {
        assert!(Cli::try_parse_from(["merge-sort", "1,x,3"]).is_err());
        assert!(Cli::try_parse_from(["merge-sort", "1,,3"]).is_err());
    }
}
