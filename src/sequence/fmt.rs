use std::fmt;

use super::LinkedSequence;

const SEPARATOR: &str = " <- ";

/// Renders the elements front to back, joined by `" <- "`. An empty sequence
/// renders as an empty string.
impl<T: fmt::Display> fmt::Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            fmt::Display::fmt(first, f)?;
            for element in iter {
                f.write_str(SEPARATOR)?;
                fmt::Display::fmt(element, f)?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
