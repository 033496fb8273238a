//! Command-line configuration for the two binaries.
//!
//! Running either binary without arguments performs the plain demonstration.

use crate::random_numbers::{parse_count, DrawMode, Entropy, PrintSettings};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "random_numbers",
    version,
    about = "Print values pulled from an infinite lazy random sequence"
)]
pub struct RandomArgs {
    /// How many values to print. Negative counts print nothing.
    #[arg(short = 'n', long, allow_negative_numbers = true, value_parser = count_parser)]
    pub count: Option<i64>,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Consume one shared sequence instead of a fresh one per value.
    #[arg(long)]
    pub shared: bool,
}

impl RandomArgs {
    pub fn settings(&self) -> PrintSettings {
        PrintSettings {
            entropy: self.seed.map_or(Entropy::Os, Entropy::Seeded),
            mode: if self.shared {
                DrawMode::Shared
            } else {
                DrawMode::FreshPerDraw
            },
        }
    }
}

fn count_parser(input: &str) -> Result<i64, String> {
    parse_count(input).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(
    name = "unpacking_demo",
    version,
    about = "Walk through tuple, nested, swap, and rest destructuring"
)]
pub struct UnpackArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_use_defaults() {
        let args = RandomArgs::try_parse_from(["random_numbers"]).unwrap();
        assert_eq!(args.count, None);
        assert_eq!(args.settings(), PrintSettings::default());
    }

    #[test]
    fn test_count_and_seed() {
        let args = RandomArgs::try_parse_from([
            "random_numbers",
            "--count",
            "10",
            "--seed",
            "9",
            "--shared",
        ])
        .unwrap();
        assert_eq!(args.count, Some(10));
        assert_eq!(
            args.settings(),
            PrintSettings {
                entropy: Entropy::Seeded(9),
                mode: DrawMode::Shared,
            }
        );
    }

    #[test]
    fn test_negative_count_is_accepted() {
        let args = RandomArgs::try_parse_from(["random_numbers", "-n", "-4"]).unwrap();
        assert_eq!(args.count, Some(-4));
    }

    #[test]
    fn test_non_integer_count_is_rejected() {
        let err = RandomArgs::try_parse_from(["random_numbers", "--count", "many"]).unwrap_err();
        assert!(err.to_string().contains("invalid argument 'many'"));
    }

    #[test]
    fn test_unpack_takes_no_arguments() {
        assert!(UnpackArgs::try_parse_from(["unpacking_demo"]).is_ok());
        assert!(UnpackArgs::try_parse_from(["unpacking_demo", "extra"]).is_err());
    }
}
