use thiserror::Error;

/// Problems with a template table or serving root, detected when a
/// `PathClassifier` is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("serving root must start and end with '/': {root}")]
    InvalidServingRoot { root: String },

    #[error("template '{template}' has an empty recognition prefix")]
    EmptyPrefix { template: &'static str },

    #[error("templates '{first}' and '{second}' share the prefix '{prefix}'")]
    DuplicatePrefix {
        first: &'static str,
        second: &'static str,
        prefix: String,
    },

    #[error("template '{template}' names facet '{facet}' more than once")]
    DuplicateFacet {
        template: &'static str,
        facet: &'static str,
    },

    #[error("template '{template}' prefix is longer than its facet list")]
    PrefixTooLong { template: &'static str },
}
