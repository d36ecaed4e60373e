use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::AddAssign;

pub const ALL_KEY: &str = "ALL";

/// What a bucket breaks metrics down by: everything, one project template,
/// or one facet value within a project template.
///
/// Facet buckets are scoped by template so that facets sharing a name
/// across grammars (`experiment`, `variable`) are not summed together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BucketKey {
    All,
    Project {
        project: String,
    },
    Facet {
        project: String,
        name: String,
        value: String,
    },
}

impl BucketKey {
    pub fn project(project: impl Into<String>) -> Self {
        Self::Project {
            project: project.into(),
        }
    }

    pub fn facet(
        project: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Facet {
            project: project.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::All => f.write_str(ALL_KEY),
            BucketKey::Project { project } => f.write_str(project),
            BucketKey::Facet {
                project,
                name,
                value,
            } => write!(f, "{project}/{name}={value}"),
        }
    }
}

impl Serialize for BucketKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("BucketKey", 3)?;
        match self {
            BucketKey::All => {
                s.serialize_field("project", &Option::<&str>::None)?;
                s.serialize_field("facet", ALL_KEY)?;
                s.serialize_field("value", &Option::<&str>::None)?;
            }
            BucketKey::Project { project } => {
                s.serialize_field("project", &Some(project))?;
                s.serialize_field("facet", &Option::<&str>::None)?;
                s.serialize_field("value", &Option::<&str>::None)?;
            }
            BucketKey::Facet {
                project,
                name,
                value,
            } => {
                s.serialize_field("project", &Some(project))?;
                s.serialize_field("facet", name)?;
                s.serialize_field("value", &Some(value))?;
            }
        }
        s.end()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsBucket {
    pub request_count: u64,
    pub total_bytes: u64,
}

impl MetricsBucket {
    pub fn new(request_count: u64, total_bytes: u64) -> Self {
        Self {
            request_count,
            total_bytes,
        }
    }
}

impl AddAssign for MetricsBucket {
    fn add_assign(&mut self, other: Self) {
        self.request_count += other.request_count;
        self.total_bytes += other.total_bytes;
    }
}
