//! `@ip`: every IPv4 address that can be written with a string of digits.
//!
//! The digits are cut into exactly four groups of one to three digits, each
//! worth less than 256. Leading zeros are allowed.

use super::{CommandError, Reply};

const GROUPS: usize = 4;
const MAX_GROUP_LEN: usize = 3;

pub(super) fn run(arg: Option<&str>) -> Result<Vec<Reply>, CommandError> {
    let digits = arg.unwrap_or_default();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(vec![Reply::Say("0".into())]);
    }

    let addresses = restore_addresses(digits);
    let mut replies = Vec::with_capacity(addresses.len() * 2 + 1);
    replies.push(Reply::Say(addresses.len().to_string()));
    for (i, address) in addresses.into_iter().enumerate() {
        if i > 0 {
            replies.push(Reply::Pause);
        }
        replies.push(Reply::Say(address));
    }
    Ok(replies)
}

fn is_octet(group: &str) -> bool {
    (1..=MAX_GROUP_LEN).contains(&group.len()) && group.parse::<u16>().is_ok_and(|v| v < 256)
}

/// All dotted partitions of `digits`, shortest first group first.
///
/// Only cut points are chosen: every digit is used exactly once and in its
/// original order. Never sort, dedupe or reorder digits here.
pub fn restore_addresses(digits: &str) -> Vec<String> {
    let mut found = Vec::new();
    if !digits.is_ascii() || digits.len() < GROUPS || digits.len() > GROUPS * MAX_GROUP_LEN {
        return found;
    }

    // Depth-first over cut positions; the stack never exceeds GROUPS - 1
    // cuts, the last group takes whatever remains.
    let mut cuts: Vec<usize> = Vec::with_capacity(GROUPS - 1);
    let mut next_len = 1;
    loop {
        let start = cuts.last().copied().unwrap_or(0);
        if cuts.len() == GROUPS - 1 {
            if is_octet(&digits[start..]) {
                let mut address = String::with_capacity(digits.len() + GROUPS - 1);
                let mut from = 0;
                for &cut in &cuts {
                    address.push_str(&digits[from..cut]);
                    address.push('.');
                    from = cut;
                }
                address.push_str(&digits[from..]);
                found.push(address);
            }
        } else if next_len <= MAX_GROUP_LEN && start + next_len < digits.len() {
            let end = start + next_len;
            if is_octet(&digits[start..end]) {
                cuts.push(end);
                next_len = 1;
                continue;
            }
            next_len += 1;
            continue;
        }

        // Backtrack: widen the previous group by one digit.
        let Some(last) = cuts.pop() else { break };
        let prev_start = cuts.last().copied().unwrap_or(0);
        next_len = last - prev_start + 1;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngExt;

    fn said(replies: &[Reply]) -> Vec<&str> {
        replies
            .iter()
            .filter_map(|r| match r {
                Reply::Say(text) => Some(text.as_str()),
                Reply::Pause => None,
            })
            .collect()
    }

    #[test]
    fn test_classic_example() {
        assert_eq!(restore_addresses("25525511135"), vec!["255.255.11.135", "255.255.111.35"]);

        let replies = run(Some("25525511135")).unwrap();
        assert_eq!(
            replies,
            vec![
                Reply::Say("2".into()),
                Reply::Say("255.255.11.135".into()),
                Reply::Pause,
                Reply::Say("255.255.111.35".into()),
            ]
        );
    }

    #[test]
    fn test_non_digits_reply_zero() {
        for arg in [Some("abc"), Some("12a4"), Some(""), Some("1.2.3.4"), Some(" 1234"), None] {
            assert_eq!(run(arg).unwrap(), vec![Reply::Say("0".into())], "arg {:?}", arg);
        }
    }

    #[test]
    fn test_leading_zeros_allowed() {
        assert_eq!(restore_addresses("0000"), vec!["0.0.0.0"]);
        assert_eq!(
            restore_addresses("01001"),
            vec!["0.1.0.01", "0.1.00.1", "0.10.0.1", "01.0.0.1"]
        );
    }

    #[test]
    fn test_enumeration_order() {
        assert_eq!(
            restore_addresses("11111"),
            vec!["1.1.1.11", "1.1.11.1", "1.11.1.1", "11.1.1.1"]
        );
    }

    #[test]
    fn test_lengths_out_of_range() {
        assert!(restore_addresses("123").is_empty());
        assert!(restore_addresses("1111111111111").is_empty());
        assert_eq!(restore_addresses("255255255255"), vec!["255.255.255.255"]);
        assert!(restore_addresses("256256256256").is_empty());

        let replies = run(Some("12")).unwrap();
        assert_eq!(replies, vec![Reply::Say("0".into())]);
    }

    #[test]
    fn test_no_pause_before_first_address() {
        let replies = run(Some("1111")).unwrap();
        assert_eq!(replies, vec![Reply::Say("1".into()), Reply::Say("1.1.1.1".into())]);
    }

    /// Nested loops over the first three group lengths, last one implied.
    fn enumerate_by_lengths(digits: &str) -> Vec<String> {
        let mut found = Vec::new();
        let n = digits.len();
        for a in 1..=3 {
            for b in 1..=3 {
                for c in 1..=3 {
                    if a + b + c >= n || n - (a + b + c) > 3 {
                        continue;
                    }
                    let groups = [
                        &digits[..a],
                        &digits[a..a + b],
                        &digits[a + b..a + b + c],
                        &digits[a + b + c..],
                    ];
                    if groups.iter().all(|g| g.parse::<u16>().unwrap() < 256) {
                        found.push(groups.join("."));
                    }
                }
            }
        }
        found
    }

    #[test]
    fn test_matches_nested_loop_enumeration() {
        for digits in ["0", "1234", "25525511135", "101023", "000000000000", "999999999999"] {
            assert_eq!(restore_addresses(digits), enumerate_by_lengths(digits), "{}", digits);
        }

        let mut rng = rand::rng();
        for _ in 0..2000 {
            let len = rng.random_range(1..=12);
            // small alphabet so valid partitions are common
            let digits: String = (0..len)
                .map(|_| char::from(b"0125"[rng.random_range(0..4)]))
                .collect();
            assert_eq!(restore_addresses(&digits), enumerate_by_lengths(&digits), "{}", digits);
        }
    }

    #[test]
    fn test_random_digit_strings_keep_their_digits() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let len = rng.random_range(4..=12);
            let digits: String = (0..len)
                .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
                .collect();

            let replies = run(Some(&digits)).unwrap();
            let texts = said(&replies);
            let count: usize = texts[0].parse().unwrap();
            assert_eq!(count, enumerate_by_lengths(&digits).len(), "{}", digits);
            assert_eq!(texts.len(), count + 1);

            for address in &texts[1..] {
                let groups: Vec<&str> = address.split('.').collect();
                assert_eq!(groups.len(), 4, "{} from {}", address, digits);
                for group in &groups {
                    assert!((1..=3).contains(&group.len()));
                    assert!(group.parse::<u16>().unwrap() < 256);
                }
                assert_eq!(groups.concat(), digits);
            }
        }
    }
}
