use crate::template::types::{ProjectTemplate, TemplateKind};

pub const DEFAULT_SERVING_ROOT: &str = "/thredds/fileServer/user_pub_work/";

/// `E3SM/<model_version>/<experiment>/<resolution>/<realm>/<regridding>/<data_type>/<time_frequency>/<ensemble_member>/<version>/<file>`
pub static E3SM_NATIVE: ProjectTemplate = ProjectTemplate {
    kind: TemplateKind::Native,
    name: "E3SM",
    prefix: &["E3SM"],
    facets: &[
        "project",
        "model_version",
        "experiment",
        "resolution",
        "realm",
        "regridding",
        "data_type",
        "time_frequency",
        "ensemble_member",
        "version",
    ],
    separator: ".",
};

/// `CMIP6/<activity>/<institution>/<source_id>/<experiment>/<member_id>/<table_id>/<variable_id>/<grid_label>/<version>/<file>`
pub static E3SM_CMIP6: ProjectTemplate = ProjectTemplate {
    kind: TemplateKind::Cmip6,
    name: "E3SM CMIP6",
    prefix: &["CMIP6"],
    facets: &[
        "mip_era",
        "activity",
        "institution",
        "source_id",
        "experiment",
        "member_id",
        "table_id",
        "variable_id",
        "grid_label",
        "version",
    ],
    separator: ".",
};

/// `CMIP6/cmip6_variables/<source_id>/<experiment>/<member_id>/<table_id>/<variable_id>/<version>/<file>`
pub static E3SM_CMIP6_VARIABLES: ProjectTemplate = ProjectTemplate {
    kind: TemplateKind::Cmip6Variables,
    name: "E3SM CMIP6 variables",
    prefix: &["CMIP6", "cmip6_variables"],
    facets: &[
        "mip_era",
        "collection",
        "source_id",
        "experiment",
        "member_id",
        "table_id",
        "variable_id",
        "version",
    ],
    separator: ".",
};

pub fn builtin_templates() -> [&'static ProjectTemplate; 3] {
    [&E3SM_NATIVE, &E3SM_CMIP6, &E3SM_CMIP6_VARIABLES]
}
