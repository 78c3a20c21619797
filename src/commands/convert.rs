//! `@convert`: hexadecimal to decimal and back.

use num_bigint::{BigInt, Sign};

use super::{CommandError, Reply};

pub(super) fn run(arg: Option<&str>) -> Result<Vec<Reply>, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument)?;
    Ok(vec![Reply::Say(convert(arg)?)])
}

/// `0x`-prefixed input is read as hex and printed in decimal; anything else
/// is read as decimal and printed as lowercase `0x` hex.
pub fn convert(input: &str) -> Result<String, CommandError> {
    let invalid = || CommandError::InvalidNumber { input: input.to_string() };

    if let Some(hex) = input.strip_prefix("0x") {
        let hex = hex.trim_end();
        // parse_bytes takes a sign, "0x-1" is not a number
        if hex.starts_with(['+', '-']) {
            return Err(invalid());
        }
        let value = BigInt::parse_bytes(hex.as_bytes(), 16).ok_or_else(invalid)?;
        return Ok(value.to_str_radix(10));
    }

    let value = BigInt::parse_bytes(input.trim().as_bytes(), 10).ok_or_else(invalid)?;
    let digits = value.magnitude().to_str_radix(16);
    if value.sign() == Sign::Minus {
        Ok(format!("-0x{}", digits))
    } else {
        Ok(format!("0x{}", digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_decimal() {
        assert_eq!(convert("0x1A").unwrap(), "26");
        assert_eq!(convert("0xff").unwrap(), "255");
        assert_eq!(convert("0x0").unwrap(), "0");
    }

    #[test]
    fn test_decimal_to_hex() {
        assert_eq!(convert("26").unwrap(), "0x1a");
        assert_eq!(convert("0").unwrap(), "0x0");
        assert_eq!(convert(" 4096 ").unwrap(), "0x1000");
        assert_eq!(convert("-26").unwrap(), "-0x1a");
        assert_eq!(convert("+10").unwrap(), "0xa");
    }

    #[test]
    fn test_values_wider_than_machine_integers() {
        assert_eq!(
            convert("0xffffffffffffffffffffffffffffffffff").unwrap(),
            "87112285931760246646623899502532662132735"
        );
        assert_eq!(
            convert("340282366920938463463374607431768211456").unwrap(),
            "0x100000000000000000000000000000000"
        );
        assert_eq!(
            convert("-340282366920938463463374607431768211456").unwrap(),
            "-0x100000000000000000000000000000000"
        );
    }

    #[test]
    fn test_invalid_input() {
        for input in ["", "abc", "0x", "0xzz", "0x-1", "1.5", "12 34", "0X1A"] {
            assert!(
                matches!(convert(input), Err(CommandError::InvalidNumber { .. })),
                "expected failure for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_run_without_argument() {
        assert!(matches!(run(None), Err(CommandError::MissingArgument)));
        assert_eq!(run(Some("255")).unwrap(), vec![Reply::Say("0xff".into())]);
    }
}
