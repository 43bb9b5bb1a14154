//! Indian-Rupee and date rendering for remark strings
//!
//! The engine formats currency only inside human-readable remarks; all other
//! currency presentation belongs to the consumer of the result. Amounts are
//! integer rupees rendered with the Indian 2-2-3 grouping (`₹1,23,456`).

/// Format an integer rupee amount with the `₹` sign and Indian grouping.
///
/// # Example
/// ```
/// use tn_payroll_engine::format::format_inr;
///
/// assert_eq!(format_inr(900), "₹900");
/// assert_eq!(format_inr(56_100), "₹56,100");
/// assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
/// ```
pub fn format_inr(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::new();
    let len = digits.len();
    if len <= 3 {
        grouped.push_str(&digits);
    } else {
        // Last three digits form one group; the rest group in pairs.
        let head = &digits[..len - 3];
        let tail = &digits[len - 3..];
        let mut parts: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let split = rest.len() - 2;
            let (left, right) = rest.split_at(split);
            parts.push(right);
            rest = left;
        }
        parts.push(rest);
        for part in parts.iter().rev() {
            grouped.push_str(part);
            grouped.push(',');
        }
        grouped.push_str(tail);
    }

    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}
