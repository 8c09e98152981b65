//! Class-token joiner
//!
//! The one generic utility in the design system: joins class-name-like
//! tokens from heterogeneous inputs, skipping anything falsy, preserving
//! input order. Strings and numbers are included verbatim, sequences flatten
//! recursively, and (label, flag) maps include each label iff its flag is
//! set.

/// A single input to [`cn`]
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// Included verbatim unless empty
    Str(String),
    /// Included as its decimal rendering
    Num(i64),
    /// Flattened recursively
    Seq(Vec<ClassValue>),
    /// Each label included iff its flag is true, in order
    Map(Vec<(String, bool)>),
    /// Skipped (the null/false/undefined of the input grammar)
    None,
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl From<i64> for ClassValue {
    fn from(n: i64) -> Self {
        ClassValue::Num(n)
    }
}

impl From<bool> for ClassValue {
    // A bare boolean carries no token either way
    fn from(_: bool) -> Self {
        ClassValue::None
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => ClassValue::None,
        }
    }
}

impl From<Vec<ClassValue>> for ClassValue {
    fn from(seq: Vec<ClassValue>) -> Self {
        ClassValue::Seq(seq)
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((label, on): (&str, bool)) -> Self {
        ClassValue::Map(vec![(label.to_string(), on)])
    }
}

/// Conditionally join class tokens into a space-separated string
///
/// Order-preserving and side-effect-free; falsy and empty inputs vanish.
///
/// ```rust
/// use leximius_ui::{cn, ClassValue};
///
/// let classes = cn([
///     ClassValue::from("a"),
///     ClassValue::None,
///     ClassValue::Seq(vec!["b".into(), ClassValue::None]),
///     ClassValue::Map(vec![("d".to_string(), true), ("e".to_string(), false)]),
/// ]);
/// assert_eq!(classes, "a b d");
/// ```
pub fn cn(inputs: impl IntoIterator<Item = ClassValue>) -> String {
    let mut classes: Vec<String> = vec![];
    collect(inputs, &mut classes);
    classes.join(" ")
}

fn collect(inputs: impl IntoIterator<Item = ClassValue>, classes: &mut Vec<String>) {
    for input in inputs {
        match input {
            ClassValue::Str(s) => {
                if !s.is_empty() {
                    classes.push(s);
                }
            }
            ClassValue::Num(n) => classes.push(n.to_string()),
            ClassValue::Seq(seq) => collect(seq, classes),
            ClassValue::Map(pairs) => {
                for (label, on) in pairs {
                    if on && !label.is_empty() {
                        classes.push(label);
                    }
                }
            }
            ClassValue::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_and_maps() {
        let result = cn([
            ClassValue::from("a"),
            ClassValue::None,
            ClassValue::Seq(vec!["b".into(), ClassValue::None]),
            ClassValue::Map(vec![("d".to_string(), true), ("e".to_string(), false)]),
        ]);
        assert_eq!(result, "a b d");
    }

    #[test]
    fn test_order_preserved() {
        let result = cn([
            ClassValue::Map(vec![("z".to_string(), true)]),
            ClassValue::from("a"),
            ClassValue::from(7i64),
        ]);
        assert_eq!(result, "z a 7");
    }

    #[test]
    fn test_nested_sequences_flatten() {
        let result = cn([ClassValue::Seq(vec![
            "outer".into(),
            ClassValue::Seq(vec!["inner".into(), ClassValue::Seq(vec!["deep".into()])]),
        ])]);
        assert_eq!(result, "outer inner deep");
    }

    #[test]
    fn test_empty_and_falsy_inputs_vanish() {
        assert_eq!(cn([]), "");
        assert_eq!(
            cn([
                ClassValue::from(""),
                ClassValue::None,
                ClassValue::from(false),
                ClassValue::Seq(vec![]),
                ClassValue::Map(vec![("off".to_string(), false)]),
            ]),
            ""
        );
    }

    #[test]
    fn test_option_conversion() {
        let some: ClassValue = Some("present").into();
        let none: ClassValue = Option::<&str>::None.into();
        assert_eq!(cn([some, none]), "present");
    }
}
