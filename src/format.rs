/// Formats like C's `%.{precision}g`.
pub fn general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exp < -4 || exp >= precision as i32 {
        format!(
            "{}e{}{:02}",
            trim_zeros(mantissa),
            if exp < 0 { '-' } else { '+' },
            exp.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

pub fn results(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|v| general(*v, precision))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integers_and_fractions() {
        assert_eq!(general(4.0, 17), "4");
        assert_eq!(general(100.0, 17), "100");
        assert_eq!(general(-2.5, 17), "-2.5");
        assert_eq!(general(0.5, 17), "0.5");
        assert_eq!(general(0.1, 17), "0.10000000000000001");
        assert_eq!(general(1.0 / 3.0, 6), "0.333333");
    }

    #[test]
    fn exponent_form() {
        assert_eq!(general(1e20, 17), "1e+20");
        assert_eq!(general(1e17, 17), "1e+17");
        assert_eq!(general(123456789.0, 6), "1.23457e+08");
        assert_eq!(general(1e-5, 6), "1e-05");
        assert_eq!(general(0.0001, 6), "0.0001");
        assert_eq!(general(999999.7, 6), "1e+06");
    }

    #[test]
    fn special_values() {
        assert_eq!(general(f64::NAN, 17), "nan");
        assert_eq!(general(f64::INFINITY, 17), "inf");
        assert_eq!(general(f64::NEG_INFINITY, 17), "-inf");
        assert_eq!(general(0.0, 17), "0");
        assert_eq!(general(-0.0, 17), "-0");
    }

    #[test]
    fn joined() {
        assert_eq!(results(&[1.0, 2.5, -3.0], 17), "1, 2.5, -3");
        assert_eq!(results(&[], 17), "");
    }
}
