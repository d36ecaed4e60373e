use smallvec::SmallVec;

/// Which directory grammar a template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKind {
    /// Native model output published under the project's own layout.
    Native,
    /// CMIP6 data reference syntax.
    Cmip6,
    /// The CMIP6 per-variable sub-tree.
    Cmip6Variables,
}

/// A positional grammar for paths below the serving root.
///
/// Every dataset segment maps to the facet at the same position in
/// `facets`; the segment after the last facet is the file name. The leading
/// segments must equal `prefix` for the template to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTemplate {
    pub kind: TemplateKind,
    pub name: &'static str,
    pub prefix: &'static [&'static str],
    pub facets: &'static [&'static str],
    pub separator: &'static str,
}

impl ProjectTemplate {
    /// Number of path segments below the serving root, file name included.
    pub fn arity(&self) -> usize {
        self.facets.len() + 1
    }

    /// Whether the leading segments of `segments` are this template's prefix.
    pub fn recognizes(&self, segments: &[&str]) -> bool {
        segments.len() >= self.prefix.len()
            && self
                .prefix
                .iter()
                .zip(segments)
                .all(|(expected, actual)| expected == actual)
    }

    /// Builds the path below the serving root for the given facet values.
    ///
    /// Returns `None` if the value count is wrong, a value is empty or
    /// contains '/', or the prefix positions do not carry the prefix.
    pub fn compose(&self, values: &[&str], file_id: &str) -> Option<String> {
        if values.len() != self.facets.len() || !self.recognizes(values) {
            return None;
        }

        let valid = |s: &&str| !s.is_empty() && !s.contains('/');
        if !values.iter().all(valid) || !valid(&file_id) {
            return None;
        }

        let mut path = values.join("/");
        path.push('/');
        path.push_str(file_id);
        Some(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub name: &'static str,
    pub value: String,
}

/// Result of decomposing a path: the dataset it belongs to, the file name,
/// and the named facets in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFacets {
    pub template: &'static str,
    pub dataset_id: String,
    pub file_id: String,
    pub facets: SmallVec<[Facet; 10]>,
}

impl DatasetFacets {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.facets
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
