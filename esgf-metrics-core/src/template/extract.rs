use crate::error::LineError;
use crate::template::classifier::Classified;
use crate::template::types::{DatasetFacets, Facet};

/// Decomposes a classified path into dataset id, file id and facets.
///
/// The segment count must equal the template's arity exactly: fewer means a
/// truncated path, more means nesting the template does not describe.
pub fn extract_facets(classified: &Classified<'_>) -> Result<DatasetFacets, LineError> {
    let template = classified.template;
    let segments: Vec<&str> = classified.remainder.split('/').collect();

    if segments.len() != template.arity() || segments.iter().any(|s| s.is_empty()) {
        return Err(LineError::SegmentCountMismatch {
            template: template.name,
            expected: template.arity(),
            found: segments.iter().filter(|s| !s.is_empty()).count(),
        });
    }

    let (file_id, dataset_segments) = segments
        .split_last()
        .ok_or(LineError::SegmentCountMismatch {
            template: template.name,
            expected: template.arity(),
            found: 0,
        })?;

    let facets = template
        .facets
        .iter()
        .zip(dataset_segments)
        .map(|(name, value)| Facet {
            name: *name,
            value: value.to_string(),
        })
        .collect();

    Ok(DatasetFacets {
        template: template.name,
        dataset_id: dataset_segments.join(template.separator),
        file_id: file_id.to_string(),
        facets,
    })
}
