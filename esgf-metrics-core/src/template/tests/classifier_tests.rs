use crate::error::LineError;
use crate::template::{
    DEFAULT_SERVING_ROOT, E3SM_CMIP6, PathClassifier, ProjectTemplate, TemplateError,
    TemplateKind,
};

static SHADOW_CMIP6: ProjectTemplate = ProjectTemplate {
    kind: TemplateKind::Cmip6,
    name: "shadow",
    prefix: &["CMIP6"],
    facets: &["mip_era", "activity"],
    separator: ".",
};

static REPEATED_FACET: ProjectTemplate = ProjectTemplate {
    kind: TemplateKind::Native,
    name: "repeated",
    prefix: &["X"],
    facets: &["project", "realm", "realm"],
    separator: ".",
};

static NO_PREFIX: ProjectTemplate = ProjectTemplate {
    kind: TemplateKind::Native,
    name: "no-prefix",
    prefix: &[],
    facets: &["project"],
    separator: ".",
};

fn classify_kind(path: &str) -> TemplateKind {
    let classifier = PathClassifier::default();
    classifier.classify(path).unwrap().template.kind
}

//-----------------------------------------------------------------------------
// Template selection
//-----------------------------------------------------------------------------
#[test]
fn native_path_selects_native_template() {
    let path = "/thredds/fileServer/user_pub_work/E3SM/1_0/historical/1deg_atm_60-30km_ocean/land/native/model-output/mon/ens1/v1/f.nc";

    assert_eq!(classify_kind(path), TemplateKind::Native);
}

#[test]
fn cmip6_path_selects_cmip6_template() {
    let path = "/thredds/fileServer/user_pub_work/CMIP6/CMIP/E3SM-Project/E3SM-1-0/historical/r1i1p1f1/Amon/wap/gr/v20191220/wap.nc";

    assert_eq!(classify_kind(path), TemplateKind::Cmip6);
}

#[test]
fn variables_subtree_wins_over_general_cmip6() {
    // Both "CMIP6" and "CMIP6/cmip6_variables" are prefixes of this path.
    let path = "/thredds/fileServer/user_pub_work/CMIP6/cmip6_variables/E3SM-1-0/historical/r1i1p1f1/Amon/tas/v20191220/tas.nc";

    assert_eq!(classify_kind(path), TemplateKind::Cmip6Variables);
}

#[test]
fn selection_does_not_depend_on_declaration_order() {
    let forward = PathClassifier::builtin(DEFAULT_SERVING_ROOT).unwrap();
    let mut reversed_input = crate::template::builtin_templates();
    reversed_input.reverse();
    let reversed = PathClassifier::new(DEFAULT_SERVING_ROOT, reversed_input).unwrap();
    let path = "/thredds/fileServer/user_pub_work/CMIP6/cmip6_variables/a/b/c/d/e/f/g.nc";

    assert_eq!(
        forward.classify(path).unwrap().template.kind,
        reversed.classify(path).unwrap().template.kind
    );
}

#[test]
fn prefix_must_match_whole_segment() {
    let classifier = PathClassifier::default();
    let path = "/thredds/fileServer/user_pub_work/E3SM-extra/1_0/f.nc";

    assert!(matches!(
        classifier.classify(path),
        Err(LineError::UnrecognizedPath { .. })
    ));
}

#[test]
fn remainder_excludes_serving_root() {
    let classifier = PathClassifier::default();
    let path = "/thredds/fileServer/user_pub_work/E3SM/a/b.nc";

    let classified = classifier.classify(path).unwrap();

    assert_eq!(classified.remainder, "E3SM/a/b.nc");
}

//-----------------------------------------------------------------------------
// Unrecognized paths
//-----------------------------------------------------------------------------
#[test]
fn path_outside_serving_root_is_unrecognized() {
    let classifier = PathClassifier::default();

    let result = classifier.classify("/thredds/catalog/esgcet/catalog.xml");

    assert_eq!(
        result,
        Err(LineError::UnrecognizedPath {
            path: "/thredds/catalog/esgcet/catalog.xml".to_string()
        })
    );
}

#[test]
fn unknown_project_is_unrecognized() {
    let classifier = PathClassifier::default();

    let result = classifier.classify("/thredds/fileServer/user_pub_work/CMIP5/x/y.nc");

    assert!(matches!(result, Err(LineError::UnrecognizedPath { .. })));
}

#[test]
fn bare_serving_root_is_unrecognized() {
    let classifier = PathClassifier::default();

    let result = classifier.classify("/thredds/fileServer/user_pub_work");

    assert!(matches!(result, Err(LineError::UnrecognizedPath { .. })));
}

//-----------------------------------------------------------------------------
// Table validation
//-----------------------------------------------------------------------------
#[test]
fn duplicate_prefix_is_rejected() {
    let result = PathClassifier::new(DEFAULT_SERVING_ROOT, [&E3SM_CMIP6, &SHADOW_CMIP6]);

    assert!(matches!(
        result,
        Err(TemplateError::DuplicatePrefix {
            first: "E3SM CMIP6",
            second: "shadow",
            ..
        })
    ));
}

#[test]
fn repeated_facet_is_rejected() {
    let result = PathClassifier::new(DEFAULT_SERVING_ROOT, [&REPEATED_FACET]);

    assert_eq!(
        result.unwrap_err(),
        TemplateError::DuplicateFacet {
            template: "repeated",
            facet: "realm"
        }
    );
}

#[test]
fn empty_prefix_is_rejected() {
    let result = PathClassifier::new(DEFAULT_SERVING_ROOT, [&NO_PREFIX]);

    assert!(matches!(result, Err(TemplateError::EmptyPrefix { .. })));
}

#[test]
fn serving_root_needs_slashes() {
    let result = PathClassifier::builtin("thredds/fileServer");

    assert!(matches!(
        result,
        Err(TemplateError::InvalidServingRoot { .. })
    ));
}
