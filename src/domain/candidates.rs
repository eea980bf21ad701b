//! Ordered candidate lists for external tools and files.

/// An ordered list of executable names or paths. Earlier entries are preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    entries: Vec<String>,
}

impl CandidateList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { entries: entries.into_iter().map(Into::into).collect() }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Return the first entry accepted by `probe`, together with the probe's result.
    ///
    /// Entries after the first hit are never probed.
    pub fn resolve_first<T, F>(&self, mut probe: F) -> Option<(&str, T)>
    where
        F: FnMut(&str) -> Option<T>,
    {
        self.entries.iter().find_map(|entry| probe(entry).map(|hit| (entry.as_str(), hit)))
    }
}

/// Whether a candidate names a path rather than a bare executable name.
pub fn is_path_like(candidate: &str) -> bool {
    candidate.contains('/') || candidate.contains('\\')
}
