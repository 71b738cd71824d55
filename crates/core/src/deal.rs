//! Deal module - random color assignment for a new board
//!
//! Picks `card_count / 2` distinct colors from a palette, uses each exactly
//! twice, and shuffles the result. Seeded dealing is reproducible, which the
//! tests and `--seed` rely on.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{ConfigError, DealError, Result};
use crate::types::Rgb;

/// RNG for dealing: seeded when a seed is given, otherwise from OS entropy.
pub fn deal_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// Deal `card_count` colors from `palette`, each chosen color appearing twice.
pub fn deal_colors<R: Rng + ?Sized>(
    palette: &[Rgb],
    card_count: usize,
    rng: &mut R,
) -> Result<Vec<Rgb>> {
    if card_count == 0 {
        return Err(ConfigError::NoCards.into());
    }
    if card_count % 2 != 0 {
        return Err(ConfigError::OddCardCount(card_count).into());
    }

    let mut distinct: Vec<Rgb> = Vec::with_capacity(palette.len());
    for &c in palette {
        if !distinct.contains(&c) {
            distinct.push(c);
        }
    }

    let pairs = card_count / 2;
    if distinct.len() < pairs {
        return Err(DealError::PaletteTooSmall {
            needed: pairs,
            available: distinct.len(),
        });
    }

    let mut colors: Vec<Rgb> = distinct
        .choose_multiple(rng, pairs)
        .flat_map(|&c| [c, c])
        .collect();
    colors.shuffle(rng);

    tracing::debug!(cards = card_count, "dealt board");
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PALETTE;

    fn occurrences(colors: &[Rgb], c: Rgb) -> usize {
        colors.iter().filter(|&&x| x == c).count()
    }

    #[test]
    fn test_every_color_appears_twice() {
        let mut rng = deal_rng(Some(7));
        let colors = deal_colors(&PALETTE, 16, &mut rng).unwrap();

        assert_eq!(colors.len(), 16);
        for &c in &colors {
            assert_eq!(occurrences(&colors, c), 2);
            assert!(PALETTE.contains(&c));
        }
    }

    #[test]
    fn test_seeded_deal_is_reproducible() {
        let a = deal_colors(&PALETTE, 16, &mut deal_rng(Some(42))).unwrap();
        let b = deal_colors(&PALETTE, 16, &mut deal_rng(Some(42))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_whole_palette_can_be_used() {
        let colors = deal_colors(&PALETTE, 18, &mut deal_rng(Some(1))).unwrap();
        for c in PALETTE {
            assert_eq!(occurrences(&colors, c), 2);
        }
    }

    #[test]
    fn test_rejects_invalid_counts() {
        let mut rng = deal_rng(Some(1));
        assert_eq!(
            deal_colors(&PALETTE, 0, &mut rng),
            Err(DealError::Config(ConfigError::NoCards))
        );
        assert_eq!(
            deal_colors(&PALETTE, 7, &mut rng),
            Err(DealError::Config(ConfigError::OddCardCount(7)))
        );
    }

    #[test]
    fn test_rejects_small_palette() {
        let mut rng = deal_rng(Some(1));
        // Duplicates in the palette do not count twice.
        let palette = [PALETTE[0], PALETTE[0], PALETTE[1]];
        assert_eq!(
            deal_colors(&palette, 6, &mut rng),
            Err(DealError::PaletteTooSmall {
                needed: 3,
                available: 2
            })
        );
    }
}
