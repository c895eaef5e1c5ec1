//! Up/down stepper for a numeric input.
//!
//! Values are read the way the browser's `parseInt` reads them: leading
//! whitespace, an optional sign, then digits; anything after the digits is
//! ignored and a value without digits counts as 0.

pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 9999;

/// The input element a stepper drives. Attribute getters return the raw
/// text (empty when the attribute is absent).
pub trait NumericField {
    fn value(&self) -> String;
    fn min(&self) -> String;
    fn max(&self) -> String;
    fn set_value(&self, value: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKey {
    Up,
    Down,
}

impl StepKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(StepKey::Up),
            "ArrowDown" => Some(StepKey::Down),
            _ => None,
        }
    }
}

pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let run = &digits[..end];
    if run.is_empty() {
        return None;
    }
    // Too many digits for an i64 still means a very large number.
    Some(match format!("{}{}", if negative { "-" } else { "" }, run).parse::<i64>() {
        Ok(value) => value,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    })
}

/// Value after an increment, or `None` when `value` already reached `max`.
pub fn next_up(value: &str, max: &str) -> Option<i64> {
    let current = parse_int(value).unwrap_or(0);
    let max = parse_int(max).unwrap_or(DEFAULT_MAX);
    (current < max).then(|| current + 1)
}

/// Value after a decrement, or `None` when `value` already reached `min`.
pub fn next_down(value: &str, min: &str) -> Option<i64> {
    let current = parse_int(value).unwrap_or(0);
    let min = parse_int(min).unwrap_or(DEFAULT_MIN);
    (current > min).then(|| current - 1)
}

pub struct Stepper<F> {
    field: F,
}

impl<F: NumericField> Stepper<F> {
    pub fn new(field: F) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Returns whether the input changed.
    pub fn increment(&self) -> bool {
        self.write(next_up(&self.field.value(), &self.field.max()))
    }

    /// Returns whether the input changed.
    pub fn decrement(&self) -> bool {
        self.write(next_down(&self.field.value(), &self.field.min()))
    }

    /// Applies an arrow key. Returns `true` when the key belongs to the
    /// stepper, in which case the caller suppresses its default action,
    /// even if the value was already at its bound.
    pub fn handle_key(&self, key: &str) -> bool {
        match StepKey::from_key(key) {
            Some(StepKey::Up) => {
                self.increment();
                true
            }
            Some(StepKey::Down) => {
                self.decrement();
                true
            }
            None => false,
        }
    }

    fn write(&self, next: Option<i64>) -> bool {
        match next {
            Some(value) => {
                self.field.set_value(&value.to_string());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Input {
        value: RefCell<String>,
        min: String,
        max: String,
    }

    impl Input {
        fn new(value: &str, min: &str, max: &str) -> Self {
            Self {
                value: RefCell::new(value.to_string()),
                min: min.to_string(),
                max: max.to_string(),
            }
        }
    }

    impl NumericField for Input {
        fn value(&self) -> String {
            self.value.borrow().clone()
        }
        fn min(&self) -> String {
            self.min.clone()
        }
        fn max(&self) -> String {
            self.max.clone()
        }
        fn set_value(&self, value: &str) {
            *self.value.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn parse_int_reads_leading_integer() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  -7px"), Some(-7));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int("+5"), Some(5));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int("123456789012345678901234"), Some(i64::MAX));
    }

    #[test]
    fn increment_at_max_is_a_noop() {
        let stepper = Stepper::new(Input::new("10", "0", "10"));
        assert!(!stepper.increment());
        assert_eq!(stepper.field().value(), "10");
    }

    #[test]
    fn decrement_at_min_is_a_noop() {
        let stepper = Stepper::new(Input::new("2", "2", ""));
        assert!(!stepper.decrement());
        assert_eq!(stepper.field().value(), "2");
    }

    #[test]
    fn non_numeric_value_counts_as_zero() {
        let stepper = Stepper::new(Input::new("abc", "", ""));
        assert!(stepper.increment());
        assert_eq!(stepper.field().value(), "1");

        let stepper = Stepper::new(Input::new("abc", "", ""));
        assert!(!stepper.decrement());
        assert_eq!(stepper.field().value(), "abc");
    }

    #[test]
    fn missing_bounds_use_defaults() {
        assert_eq!(next_up("9998", ""), Some(9999));
        assert_eq!(next_up("9999", "oops"), None);
        assert_eq!(next_down("1", ""), Some(0));
        assert_eq!(next_down("0", ""), None);
        assert_eq!(next_up("99999999999999999999", ""), None);
        assert_eq!(next_down("-99999999999999999999", ""), None);
    }

    #[test]
    fn declared_zero_max_is_honoured() {
        assert_eq!(next_up("0", "0"), None);
    }

    #[test]
    fn arrow_keys_are_consumed_others_are_not() {
        let stepper = Stepper::new(Input::new("5", "0", "5"));
        assert!(stepper.handle_key("ArrowUp"));
        assert_eq!(stepper.field().value(), "5");
        assert!(stepper.handle_key("ArrowDown"));
        assert_eq!(stepper.field().value(), "4");
        assert!(!stepper.handle_key("Enter"));
        assert_eq!(stepper.field().value(), "4");
    }
}
