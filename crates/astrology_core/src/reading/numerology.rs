//! Numerology figures: the life path number and the cardinal number.

use chrono::NaiveDate;

/// Sums that are never reduced further.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces a digit sum until it is a single digit or a master number.
///
/// Applying this to its own output is a no-op, including for 11, 22 and 33.
pub fn reduce_life_path(mut sum: u32) -> u32 {
    while sum > 9 && !MASTER_NUMBERS.contains(&sum) {
        sum = digit_sum(sum);
    }
    sum
}

/// Life path number from a string of digits. Non-digit characters are skipped.
pub fn life_path_from_digits(digits: &str) -> u32 {
    let sum = digits.chars().filter_map(|c| c.to_digit(10)).sum();
    reduce_life_path(sum)
}

/// Life path number of a birth date, using the digits of `YYYYMMDD`.
pub fn life_path_number(birth_date: NaiveDate) -> u32 {
    life_path_from_digits(&birth_date.format("%Y%m%d").to_string())
}

/// Secondary figure derived from the length of the name, in `1..=9`.
pub fn cardinal_number(name: &str) -> u32 {
    (name.chars().count() % 9) as u32 + 1
}
