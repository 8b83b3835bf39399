//! Display impls for dice, labels, cycles and win percentages
use crate::{Cycle, Die, Label};
use std::fmt::Display;

/// Formats a ratio as a percentage with exactly one decimal digit.
///
/// Ties on the binary value round half to even, the same result a decimal `round(x, 1)` gives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPercent(pub f64);

impl Display for DisplayPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

pub struct DisplayList<T> {
    inner: std::cell::RefCell<T>,
    separator: &'static str,
}

impl<T> DisplayList<T> {
    pub fn new(inner: T) -> Self {
        Self::with_separator(inner, ", ")
    }

    pub fn with_separator(inner: T, separator: &'static str) -> Self {
        Self {
            inner: std::cell::RefCell::new(inner),
            separator,
        }
    }
}

impl<T> Display for DisplayList<T>
where
    T: Iterator,
    T::Item: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::ops::DerefMut;

        let mut iter = self.inner.borrow_mut();

        write!(f, "[")?;
        if let Some(item) = iter.next() {
            write!(f, "{item}")?;
            for item in iter.deref_mut() {
                write!(f, "{}{item}", self.separator)?;
            }
        }
        write!(f, "]")
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DisplayList::new(self.faces().iter()))
    }
}

impl Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [x, y, z] = self.labels();
        write!(f, "{x} > {y} > {z} > {x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(100.0 => "100.0")]
    #[test_case(0.0 => "0.0")]
    #[test_case(20.0 / 36.0 * 100.0 => "55.6")]
    #[test_case(16.0 / 36.0 * 100.0 => "44.4")]
    #[test_case(0.25 => "0.2"; "tie rounds to even")]
    #[test_case(0.35 => "0.3"; "binary value just below tie")]
    fn display_percent(value: f64) -> String {
        DisplayPercent(value).to_string()
    }

    #[test]
    fn display_die() {
        let die = Die::new(vec![1, -2, 3]).unwrap();
        assert_eq!(die.to_string(), "[1, -2, 3]");
    }

    #[test]
    fn display_list_with_separator() {
        let list = DisplayList::with_separator(["A", "B", "C"].iter(), " ");
        assert_eq!(list.to_string(), "[A B C]");
        assert_eq!(DisplayList::new(std::iter::empty::<u8>()).to_string(), "[]");
    }
}
