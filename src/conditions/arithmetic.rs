//! Integer katas: FizzBuzz, factorials, digit manipulation and radix output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::strings::reverse_string;

/// Result of [`get_fizz_buzz`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FizzBuzz {
    Fizz,
    Buzz,
    FizzBuzz,
    /// Divisible by neither 3 nor 5: the input is returned unchanged.
    Number(i64),
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::Fizz => write!(f, "Fizz"),
            FizzBuzz::Buzz => write!(f, "Buzz"),
            FizzBuzz::FizzBuzz => write!(f, "FizzBuzz"),
            FizzBuzz::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Classic FizzBuzz for a single number.
pub fn get_fizz_buzz(num: i64) -> FizzBuzz {
    match (num % 3 == 0, num % 5 == 0) {
        (true, true) => FizzBuzz::FizzBuzz,
        (true, false) => FizzBuzz::Fizz,
        (false, true) => FizzBuzz::Buzz,
        (false, false) => FizzBuzz::Number(num),
    }
}

/// Factorial of `n`, or `None` once the product overflows `u64` (n > 20).
pub fn get_factorial(n: u32) -> Option<u64> {
    (2..=n as u64).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

/// Sum of every integer in `[n1, n2]`, or `None` when it does not fit in
/// `i64`. An empty range sums to 0.
pub fn get_sum_between_numbers(n1: i64, n2: i64) -> Option<i64> {
    if n1 > n2 {
        return Some(0);
    }
    let (low, high) = (n1 as i128, n2 as i128);
    // Arithmetic series, exact in i128 for any i64 bounds.
    let doubled = (low + high).checked_mul(high - low + 1)?;
    i64::try_from(doubled / 2).ok()
}

/// Reverse the decimal digits of `num`, keeping its sign.
///
/// Trailing zeros of the input become leading zeros of the result and are
/// dropped: `1200` reverses to `21`. The result always fits in `i64`.
pub fn reverse_integer(num: i32) -> i64 {
    let digits = reverse_string(&num.unsigned_abs().to_string());
    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, b| acc * 10 + (b - b'0') as i64);
    if num < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Luhn checksum validation of a card number.
///
/// Starting from the rightmost digit, every second digit is doubled (minus 9
/// when the double exceeds 9) and the number is valid when the digit sum is a
/// multiple of 10.
pub fn is_credit_card_number(ccn: u64) -> bool {
    let sum: u64 = ccn
        .to_string()
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = (b - b'0') as u64;
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}

/// Sum the digits of `n` repeatedly until a single digit remains.
pub fn get_digital_root(mut n: u64) -> u64 {
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

/// Positional representation of `num` in radix `n`.
///
/// Only radixes 2 through 10 are supported; anything else yields `None`.
pub fn to_nary_string(mut num: u64, n: u32) -> Option<String> {
    if !(2..=10).contains(&n) {
        return None;
    }
    let radix = n as u64;
    let mut digits = String::new();
    loop {
        digits.push(char::from(b'0' + (num % radix) as u8));
        num /= radix;
        if num == 0 {
            break;
        }
    }
    // Digits were produced least significant first.
    Some(reverse_string(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fizz_buzz() {
        assert_eq!(get_fizz_buzz(2), FizzBuzz::Number(2));
        assert_eq!(get_fizz_buzz(3), FizzBuzz::Fizz);
        assert_eq!(get_fizz_buzz(4), FizzBuzz::Number(4));
        assert_eq!(get_fizz_buzz(5), FizzBuzz::Buzz);
        assert_eq!(get_fizz_buzz(15), FizzBuzz::FizzBuzz);
        assert_eq!(get_fizz_buzz(20), FizzBuzz::Buzz);
        assert_eq!(get_fizz_buzz(21), FizzBuzz::Fizz);
        assert_eq!(get_fizz_buzz(15).to_string(), "FizzBuzz");
        assert_eq!(get_fizz_buzz(7).to_string(), "7");
    }

    #[test]
    fn test_factorial() {
        assert_eq!(get_factorial(0), Some(1));
        assert_eq!(get_factorial(1), Some(1));
        assert_eq!(get_factorial(5), Some(120));
        assert_eq!(get_factorial(10), Some(3_628_800));
        assert_eq!(get_factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(get_factorial(21), None);
    }

    #[test]
    fn test_sum_between_numbers() {
        assert_eq!(get_sum_between_numbers(1, 2), Some(3));
        assert_eq!(get_sum_between_numbers(5, 10), Some(45));
        assert_eq!(get_sum_between_numbers(-1, 1), Some(0));
        assert_eq!(get_sum_between_numbers(-10, -5), Some(-45));
        assert_eq!(get_sum_between_numbers(7, 7), Some(7));
        assert_eq!(get_sum_between_numbers(3, 1), Some(0));
    }

    #[test]
    fn test_sum_between_numbers_bounds() {
        assert_eq!(get_sum_between_numbers(0, 1_000_000_000), Some(500_000_000_500_000_000));
        assert_eq!(get_sum_between_numbers(0, 1_000_000_000_000), None);
        assert_eq!(get_sum_between_numbers(i64::MAX, i64::MAX), Some(i64::MAX));
        assert_eq!(get_sum_between_numbers(i64::MIN, i64::MIN), Some(i64::MIN));
        assert_eq!(get_sum_between_numbers(-i64::MAX, i64::MAX), Some(0));
        assert_eq!(get_sum_between_numbers(i64::MAX - 1, i64::MAX), None);
        assert_eq!(get_sum_between_numbers(i64::MIN, i64::MAX), Some(i64::MIN));
        assert_eq!(get_sum_between_numbers(0, i64::MAX), None);
    }

    #[test]
    fn test_reverse_integer() {
        assert_eq!(reverse_integer(12345), 54321);
        assert_eq!(reverse_integer(1111), 1111);
        assert_eq!(reverse_integer(87354), 45378);
        assert_eq!(reverse_integer(34143), 34143);
        assert_eq!(reverse_integer(1200), 21);
        assert_eq!(reverse_integer(-123), -321);
        assert_eq!(reverse_integer(i32::MAX), 7_463_847_412);
        assert_eq!(reverse_integer(i32::MIN), -8_463_847_412);
    }

    #[test]
    fn test_credit_card_numbers() {
        for valid in [
            79927398713,
            4012888888881881,
            5123456789012346,
            378282246310005,
            371449635398431,
        ] {
            assert!(is_credit_card_number(valid), "{} should be valid", valid);
        }
        for invalid in [4571234567890111, 5436468789016589, 4916123456789012] {
            assert!(!is_credit_card_number(invalid), "{} should be invalid", invalid);
        }
    }

    #[test]
    fn test_digital_root() {
        assert_eq!(get_digital_root(12345), 6);
        assert_eq!(get_digital_root(23456), 2);
        assert_eq!(get_digital_root(10000), 1);
        assert_eq!(get_digital_root(165536), 8);
        assert_eq!(get_digital_root(7), 7);
    }

    #[test]
    fn test_nary_string() {
        assert_eq!(to_nary_string(1024, 2).as_deref(), Some("10000000000"));
        assert_eq!(to_nary_string(6561, 3).as_deref(), Some("100000000"));
        assert_eq!(to_nary_string(365, 2).as_deref(), Some("101101101"));
        assert_eq!(to_nary_string(365, 3).as_deref(), Some("111112"));
        assert_eq!(to_nary_string(365, 4).as_deref(), Some("11231"));
        assert_eq!(to_nary_string(365, 10).as_deref(), Some("365"));
        assert_eq!(to_nary_string(0, 2).as_deref(), Some("0"));
        assert_eq!(to_nary_string(365, 1), None);
        assert_eq!(to_nary_string(365, 16), None);
    }
}
