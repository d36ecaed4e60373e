use crate::error::LineError;
use crate::template::builtin::{DEFAULT_SERVING_ROOT, builtin_templates};
use crate::template::error::TemplateError;
use crate::template::types::ProjectTemplate;

/// Selects the project template for a normalized request path.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    serving_root: String,
    templates: Vec<&'static ProjectTemplate>,
}

/// A path that matched a template. `remainder` is the part below the
/// serving root, without a leading slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'p> {
    pub template: &'static ProjectTemplate,
    pub remainder: &'p str,
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::builtin(DEFAULT_SERVING_ROOT)
            .unwrap_or_else(|e| unreachable!("built-in template table is invalid: {e}"))
    }
}

impl PathClassifier {
    pub fn builtin(serving_root: &str) -> Result<Self, TemplateError> {
        Self::new(serving_root, builtin_templates())
    }

    pub fn new(
        serving_root: &str,
        templates: impl IntoIterator<Item = &'static ProjectTemplate>,
    ) -> Result<Self, TemplateError> {
        if !serving_root.starts_with('/') || !serving_root.ends_with('/') {
            return Err(TemplateError::InvalidServingRoot {
                root: serving_root.to_string(),
            });
        }

        let mut accepted: Vec<&'static ProjectTemplate> = Vec::new();
        for template in templates {
            validate_template(template)?;

            if let Some(existing) = accepted.iter().find(|t| t.prefix == template.prefix) {
                return Err(TemplateError::DuplicatePrefix {
                    first: existing.name,
                    second: template.name,
                    prefix: template.prefix.join("/"),
                });
            }

            accepted.push(template);
        }

        // The most specific prefix wins --> sort descending by segment count.
        accepted.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));

        Ok(Self {
            serving_root: serving_root.to_string(),
            templates: accepted,
        })
    }

    pub fn serving_root(&self) -> &str {
        &self.serving_root
    }

    pub fn templates(&self) -> &[&'static ProjectTemplate] {
        &self.templates
    }

    /// `path` must already be normalized (see `normalize_request_path`).
    pub fn classify<'p>(&self, path: &'p str) -> Result<Classified<'p>, LineError> {
        let remainder = path
            .strip_prefix(self.serving_root.as_str())
            .or_else(|| {
                // Normalization strips trailing slashes, so the bare root
                // arrives without one.
                (path == self.serving_root.trim_end_matches('/')).then_some("")
            })
            .ok_or_else(|| LineError::unrecognized(path))?;

        let segments: Vec<&str> = remainder.split('/').collect();

        self.templates
            .iter()
            .copied()
            .find(|t| t.recognizes(&segments))
            .map(|template| Classified {
                template,
                remainder,
            })
            .ok_or_else(|| LineError::unrecognized(path))
    }

    /// Full request path for a remainder produced by `ProjectTemplate::compose`.
    pub fn request_path(&self, remainder: &str) -> String {
        format!("{}{}", self.serving_root, remainder)
    }
}

fn validate_template(template: &'static ProjectTemplate) -> Result<(), TemplateError> {
    if template.prefix.is_empty() {
        return Err(TemplateError::EmptyPrefix {
            template: template.name,
        });
    }

    if template.prefix.len() > template.facets.len() {
        return Err(TemplateError::PrefixTooLong {
            template: template.name,
        });
    }

    for (i, facet) in template.facets.iter().enumerate() {
        if template.facets[..i].contains(facet) {
            return Err(TemplateError::DuplicateFacet {
                template: template.name,
                facet: *facet,
            });
        }
    }

    Ok(())
}
