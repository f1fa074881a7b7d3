use super::DemoContext;
use crate::runtime::RuntimeResult;

pub const WIN_THRESHOLD: f64 = 5.0;

/// One hidden draw and whether it cleared the (possibly lowered) threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Round {
    pub score: f64,
    pub won: bool,
}

/// Draws a score in `[0, 10)` and compares it against the threshold lowered
/// by `good_luck` (no bias when `None`).
pub fn play(rng: &mut fastrand::Rng, good_luck: Option<f64>) -> Round {
    let score = rng.f64() * 10.0;
    let won = score >= WIN_THRESHOLD - good_luck.unwrap_or(0.0);
    Round { score, won }
}

pub fn run(ctx: &mut DemoContext) -> RuntimeResult<()> {
    let DemoContext { console, rng } = ctx;

    // named version: `game` stays reachable after the call
    let mut game = || {
        let round = play(rng, None);
        console.log(round.won);
    };
    game();

    // anonymous, invoked once where it is defined
    (|| {
        let round = play(rng, None);
        log::debug!("hidden score {:.3}", round.score);
        console.log(round.won);
    })();

    (|good_luck: f64| {
        let round = play(rng, Some(good_luck));
        log::debug!("hidden score {:.3} with luck {good_luck}", round.score);
        console.log(round.won);
    })(5.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_matches_drawn_score() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..200 {
            let round = play(&mut rng, None);
            assert!((0.0..10.0).contains(&round.score));
            assert_eq!(round.won, round.score >= 5.0);
        }
    }

    #[test]
    fn bias_lowers_the_threshold() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..200 {
            let round = play(&mut rng, Some(2.5));
            assert_eq!(round.won, round.score >= 2.5);
        }
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..50 {
            assert!(play(&mut rng, Some(5.0)).won);
        }
    }

    #[test]
    fn no_bias_equals_zero_bias() {
        let a = play(&mut fastrand::Rng::with_seed(42), None);
        let b = play(&mut fastrand::Rng::with_seed(42), Some(0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn logs_three_outcomes_consistent_with_seed() {
        let mut ctx = DemoContext::buffered(99);
        run(&mut ctx).unwrap();

        let mut replay = fastrand::Rng::with_seed(99);
        let expected: Vec<String> = [None, None, Some(5.0)]
            .into_iter()
            .map(|luck| play(&mut replay, luck).won.to_string())
            .collect();
        assert_eq!(ctx.console.lines(), expected);
        assert_eq!(ctx.console.lines()[2], "true");
    }
}
