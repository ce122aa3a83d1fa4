//! Positional verb formatting over `FieldValue` arguments
//!
//! Supports `%v %s %q %d %f %F %e %t %x %X %%` with the `- + 0 space` flags,
//! width and precision. Formatting never fails: a verb that does not fit its
//! argument renders as `%!d(string=hi)`, a verb with no argument left renders
//! as `%!d(MISSING)`, and unused arguments are listed in a trailing
//! `%!(EXTRA kind=value, ...)`.

use super::field_set::FieldValue;
use std::fmt::Write;

/// Upper bound for width and precision values
const MAX_PADDING: usize = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    minus: bool,
    plus: bool,
    zero: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Format `args` into `format`.
pub fn sprintf(format: &str, args: &[FieldValue]) -> String {
    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut chars = format.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = read_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(read_number(&mut chars).unwrap_or(0));
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next_arg) {
            Some(arg) => {
                next_arg += 1;
                match format_one(verb, spec, arg) {
                    Some(body) => out.push_str(&pad(body, spec, arg.is_numeric())),
                    None => {
                        let _ = write!(out, "%!{}({}={})", verb, arg.kind(), arg);
                    }
                }
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next_arg < args.len() {
        let extra = args[next_arg..]
            .iter()
            .map(|a| format!("{}={}", a.kind(), a))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(out, "%!(EXTRA {})", extra);
    }

    out
}

/// Build a format string with one verb per argument, chosen by its kind.
pub fn default_format(args: &[FieldValue]) -> String {
    args.iter()
        .map(|arg| match arg {
            FieldValue::String(_) => "%s",
            FieldValue::Int(_) => "%d",
            FieldValue::Bool(_) => "%t",
            FieldValue::Float(_) | FieldValue::Null | FieldValue::Structured(_) => "%v",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        let next = value.unwrap_or(0).saturating_mul(10).saturating_add(d as usize);
        value = Some(next.min(MAX_PADDING));
        chars.next();
    }
    value
}

fn signed(mut body: String, negative: bool, spec: Spec) -> String {
    if !negative {
        if spec.plus {
            body.insert(0, '+');
        } else if spec.space {
            body.insert(0, ' ');
        }
    }
    body
}

fn format_one(verb: char, spec: Spec, arg: &FieldValue) -> Option<String> {
    let body = match (verb, arg) {
        ('f' | 'F', FieldValue::Float(f)) => {
            let precision = spec.precision.unwrap_or(6);
            signed(format!("{:.*}", precision, f), f.is_sign_negative(), spec)
        }
        ('v', FieldValue::Float(f)) if spec.precision.is_some() => {
            let digits = spec.precision.unwrap_or_default();
            signed(general(*f, digits), f.is_sign_negative(), spec)
        }
        ('v', FieldValue::Int(i)) | ('d', FieldValue::Int(i)) => {
            signed(i.to_string(), *i < 0, spec)
        }
        ('v', _) => arg.to_string(),
        ('s', FieldValue::String(s)) => match spec.precision {
            Some(p) => s.chars().take(p).collect(),
            None => s.clone(),
        },
        ('s', FieldValue::Structured(_) | FieldValue::Null) => arg.to_string(),
        ('q', FieldValue::String(s)) => format!("{:?}", s),
        ('e', FieldValue::Float(f)) => {
            let precision = spec.precision.unwrap_or(6);
            signed(exponent(*f, precision), f.is_sign_negative(), spec)
        }
        ('t', FieldValue::Bool(b)) => b.to_string(),
        ('x', FieldValue::Int(i)) => signed(hex(*i, false), *i < 0, spec),
        ('X', FieldValue::Int(i)) => signed(hex(*i, true), *i < 0, spec),
        ('x', FieldValue::String(s)) => s.bytes().map(|b| format!("{:02x}", b)).collect(),
        ('X', FieldValue::String(s)) => s.bytes().map(|b| format!("{:02X}", b)).collect(),
        _ => return None,
    };
    Some(body)
}

/// Scientific notation with a signed, at least two-digit exponent: `1.5e+00`.
fn exponent(f: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, f);
    match raw.split_once('e') {
        Some((mantissa, exp)) => with_exponent(mantissa, exp.parse().unwrap_or(0)),
        None => raw,
    }
}

fn with_exponent(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
}

/// `%g`-style output: `digits` significant digits, trailing zeros removed,
/// scientific notation for very small or large exponents.
fn general(f: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if f == 0.0 || !f.is_finite() {
        return f.to_string();
    }

    let raw = format!("{:.*e}", digits - 1, f);
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits = i32::try_from(digits).unwrap_or(i32::MAX);

    if exp < -4 || exp >= digits {
        with_exponent(trim_fraction(mantissa), exp)
    } else {
        let decimals = usize::try_from(digits - 1 - exp).unwrap_or(0);
        trim_fraction(&format!("{:.*}", decimals, f)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn hex(i: i64, upper: bool) -> String {
    let magnitude = i.unsigned_abs();
    let digits = if upper {
        format!("{:X}", magnitude)
    } else {
        format!("{:x}", magnitude)
    };
    if i < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn pad(body: String, spec: Spec, numeric: bool) -> String {
    let len = body.chars().count();
    let Some(width) = spec.width.filter(|w| *w > len) else {
        return body;
    };
    let fill = width - len;
    if spec.minus {
        return format!("{}{}", body, " ".repeat(fill));
    }
    if spec.zero && !numeric {
        return format!("{}{}", "0".repeat(fill), body);
    }
    if spec.zero && body.chars().any(|c| c.is_ascii_digit()) {
        let sign_len = body
            .chars()
            .next()
            .filter(|c| matches!(c, '-' | '+' | ' '))
            .map(char::len_utf8)
            .unwrap_or(0);
        let (sign, digits) = body.split_at(sign_len);
        return format!("{}{}{}", sign, "0".repeat(fill), digits);
    }
    format!("{}{}", " ".repeat(fill), body)
}
