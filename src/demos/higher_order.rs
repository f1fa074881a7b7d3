use super::DemoContext;
use crate::runtime::{RuntimeResult, Value};

pub const REFERENCE_YEAR: i64 = 2019;

/// Maps every element through `f` into a new sequence of the same length.
pub fn array_calc<T, U>(arr: &[T], mut f: impl FnMut(&T) -> U) -> Vec<U> {
    let mut results = Vec::with_capacity(arr.len());
    for el in arr {
        results.push(f(el));
    }
    results
}

pub fn calculate_age(year_of_birth: &i64) -> i64 {
    REFERENCE_YEAR - year_of_birth
}

pub fn is_full_age(age: &i64) -> bool {
    *age >= 18
}

/// Defined for ages 18 through 81 inclusive; `-1` everywhere else.
pub fn max_heart_rate(age: &i64) -> i64 {
    if (18..=81).contains(age) {
        round_half_up(206.9 - 0.67 * *age as f64) as i64
    } else {
        -1
    }
}

/// Halves round towards positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

pub fn run(ctx: &mut DemoContext) -> RuntimeResult<()> {
    let years = [1990_i64, 1987, 1765, 2018, 1983];

    let ages = array_calc(&years, calculate_age);
    let full_ages = array_calc(&ages, is_full_age);
    let rates = array_calc(&ages, max_heart_rate);

    ctx.console.log(Value::from(ages));
    ctx.console.log(Value::from(full_ages));
    ctx.console.log(Value::from(rates));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEARS: [i64; 5] = [1990, 1987, 1765, 2018, 1983];

    #[test]
    fn prints_ages_adults_and_rates() {
        let mut ctx = DemoContext::buffered(1);
        run(&mut ctx).unwrap();
        assert_eq!(
            ctx.console.lines(),
            vec![
                "[ 29, 32, 254, 1, 36 ]",
                "[ true, true, true, false, true ]",
                "[ 187, 185, -1, -1, 183 ]",
            ]
        );
    }

    #[test]
    fn heart_rate_bounds_are_inclusive() {
        assert_eq!(max_heart_rate(&17), -1);
        assert_eq!(max_heart_rate(&18), 195);
        assert_eq!(max_heart_rate(&81), 153);
        assert_eq!(max_heart_rate(&82), -1);
        assert_eq!(max_heart_rate(&-5), -1);
        for age in 18..=81 {
            let expected = round_half_up(206.9 - 0.67 * age as f64) as i64;
            assert_eq!(max_heart_rate(&age), expected);
        }
    }

    #[test]
    fn transform_preserves_order_and_input() {
        let input = YEARS;
        let ages = array_calc(&input, calculate_age);
        assert_eq!(ages, vec![29, 32, 254, 1, 36]);
        assert_eq!(input, YEARS);
        assert_eq!(
            array_calc(&ages, is_full_age),
            vec![true, true, true, false, true]
        );
    }

    #[test]
    fn identity_twice_and_empty_input() {
        let once = array_calc(&YEARS, |y| *y);
        let twice = array_calc(&once, |y| *y);
        assert_eq!(twice, YEARS.to_vec());
        assert!(array_calc(&[] as &[i64], calculate_age).is_empty());
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(185.46), 185.0);
    }
}
