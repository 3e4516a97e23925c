//! Five-star rendering of a 0-10 vote average.

pub const MAX_STARS: u8 = 5;

/// Visual state of a single star slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Star count derived from `vote_average`.
///
/// `filled` counts the half star when `half` is set; the half star is always
/// the last filled slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StarRating {
    filled: u8,
    half: bool,
}

impl StarRating {
    /// Two vote points per star. A remainder above 0.5 earns one more star,
    /// drawn half-filled.
    pub fn from_vote_average(vote_average: f64) -> Self {
        let whole = (vote_average / 2.0).floor();
        let rounds_up = vote_average % 2.0 > 0.5;

        // NaN and negatives saturate to zero.
        let mut filled = whole.clamp(0.0, f64::from(MAX_STARS)) as u8;
        let mut half = false;
        if rounds_up && filled < MAX_STARS {
            filled += 1;
            half = true;
        }

        Self { filled, half }
    }

    pub fn filled(&self) -> u8 {
        self.filled
    }

    pub fn has_half(&self) -> bool {
        self.half
    }

    pub fn stars(&self) -> [Star; MAX_STARS as usize] {
        let mut stars = [Star::Empty; MAX_STARS as usize];
        let filled = usize::from(self.filled);
        for (index, star) in stars.iter_mut().enumerate().take(filled) {
            let last = index + 1 == self.filled as usize;
            *star = if last && self.half { Star::Half } else { Star::Full };
        }
        stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_count(v: f64) -> u8 {
        let base = (v / 2.0).floor() as u8;
        let bump = u8::from(v % 2.0 > 0.5);
        (base + bump).min(MAX_STARS)
    }

    #[test]
    fn count_matches_policy_across_range() {
        for tenth in 0..=100 {
            let v = f64::from(tenth) / 10.0;
            assert_eq!(
                StarRating::from_vote_average(v).filled(),
                expected_count(v),
                "vote average {v}"
            );
        }
    }

    #[test]
    fn perfect_score_has_no_half_star() {
        let rating = StarRating::from_vote_average(10.0);
        assert_eq!(rating.filled(), 5);
        assert!(!rating.has_half());
        assert_eq!(rating.stars(), [Star::Full; 5]);
    }

    #[test]
    fn remainder_above_half_adds_trailing_half_star() {
        let rating = StarRating::from_vote_average(7.246);
        assert_eq!(rating.filled(), 4);
        assert_eq!(
            rating.stars(),
            [Star::Full, Star::Full, Star::Full, Star::Half, Star::Empty]
        );
    }

    #[test]
    fn remainder_at_or_below_half_rounds_down() {
        let rating = StarRating::from_vote_average(6.5);
        assert_eq!(rating.filled(), 3);
        assert!(!rating.has_half());
        assert_eq!(
            rating.stars(),
            [Star::Full, Star::Full, Star::Full, Star::Empty, Star::Empty]
        );
    }

    #[test]
    fn low_scores() {
        assert_eq!(
            StarRating::from_vote_average(0.0).stars(),
            [Star::Empty; 5]
        );
        assert_eq!(
            StarRating::from_vote_average(1.0).stars(),
            [Star::Half, Star::Empty, Star::Empty, Star::Empty, Star::Empty]
        );
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(StarRating::from_vote_average(-3.0).filled(), 0);
        assert_eq!(StarRating::from_vote_average(14.0).filled(), 5);
        assert_eq!(StarRating::from_vote_average(f64::NAN).filled(), 0);
    }
}
