fn format_with_commas(digits: &str) -> String {
    let mut result = String::new();
    let mut count = 0;

    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}

/// Two decimals with thousands separators, e.g. `5,700.00`.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{sign}{}.{fraction}", format_with_commas(whole))
}

pub fn format_win_rate(win_rate: f64) -> String {
    format!("{win_rate:.2}%")
}

pub fn format_rank(rank: u32) -> String {
    format!("[{rank}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_get_grouped() {
        assert_eq!(format_amount(5700.0), "5,700.00");
        assert_eq!(format_amount(1671.57), "1,671.57");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_amount(-1500.25), "-1,500.25");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn win_rate_and_rank() {
        assert_eq!(format_win_rate(34.07), "34.07%");
        assert_eq!(format_win_rate(50.0), "50.00%");
        assert_eq!(format_rank(3), "[3]");
    }
}
