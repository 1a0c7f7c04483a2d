//! Tab-completion helpers for interactive shells.

/// Produces completion candidates for a partially typed buffer.
pub trait Completer {
    fn complete(&self, buffer: &str) -> Vec<String>;
}

type StringsSupplier = Box<dyn Fn() -> Vec<String> + Send + Sync>;

/// Completes against a set of strings obtained from a supplier on every
/// call, so the candidate set may change between completions.
pub struct StringsCompleter {
    supplier: StringsSupplier,
}

impl StringsCompleter {
    pub fn new(supplier: impl Fn() -> Vec<String> + Send + Sync + 'static) -> Self {
        Self {
            supplier: Box::new(supplier),
        }
    }

    /// Completer over a fixed list of strings.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let strings: Vec<String> = strings.into_iter().map(Into::into).collect();
        Self::new(move || strings.clone())
    }

    pub fn strings(&self) -> Vec<String> {
        (self.supplier)()
    }

    pub fn all_candidates(&self) -> Vec<String> {
        self.strings()
    }

    /// Candidates starting with `buffer`, in supplier order.
    pub fn candidates(&self, buffer: &str) -> Vec<String> {
        self.strings()
            .into_iter()
            .filter(|candidate| candidate.starts_with(buffer))
            .collect()
    }
}

impl Completer for StringsCompleter {
    fn complete(&self, buffer: &str) -> Vec<String> {
        if buffer.is_empty() {
            self.all_candidates()
        } else {
            self.candidates(buffer)
        }
    }
}

impl std::fmt::Debug for StringsCompleter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringsCompleter").finish_non_exhaustive()
    }
}
