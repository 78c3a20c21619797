//! Fallback nickname generator.
//!
//! Used when the configuration names no nickname. Produces names like
//! `BusyCog42`, never longer than the classic 9-character IRC limit.

use rand::RngExt;

const ADJECTIVES: &[&str] = &["Tiny", "Busy", "Lazy", "Shy", "Odd", "Calm", "Wry", "Zany", "Glad", "Keen"];

const NOUNS: &[&str] = &["Bot", "Owl", "Cog", "Elf", "Imp", "Bee", "Ant", "Yak", "Orb"];

pub fn generate_nickname() -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let num: u8 = rng.random_range(0..100);
    format!("{}{}{}", adj, noun, num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_nicknames_are_valid() {
        for _ in 0..100 {
            let nick = generate_nickname();
            assert!(nick.len() <= 9, "{}", nick);
            assert!(nick.chars().all(|c| c.is_ascii_alphanumeric()), "{}", nick);
            assert!(nick.starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }
}
