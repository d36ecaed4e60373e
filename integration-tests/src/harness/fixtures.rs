use esgf_metrics_core::conf::{LogsConfig, MetricsConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SERVING_ROOT: &str = "/thredds/fileServer/user_pub_work";

pub const NATIVE_PATH: &str = "E3SM/1_0/historical/1deg_atm_60-30km_ocean/land/native/model-output/mon/ens1/v1/20180215.DECKv1b_H1.ne30_oEC.edison.clm2.h0.1850-01.nc";

pub const CMIP6_PATH: &str = "CMIP6/CMIP/E3SM-Project/E3SM-1-0/historical/r1i1p1f1/Amon/wap/gr/v20191220/wap_Amon_E3SM-1-0_historical_r1i1p1f1_gr_190001-192412.nc";

pub const VARIABLES_PATH: &str =
    "CMIP6/cmip6_variables/E3SM-1-0/historical/r1i1p1f1/Amon/tas/v20191220/tas_Amon_E3SM-1-0.nc";

/// A combined-format access-log line for a file below the serving root.
pub fn access_line(client: &str, ts: &str, method: &str, rel: &str, status: u16, bytes: &str) -> String {
    format!(
        r#"{client} - - [{ts}] "{method} {SERVING_ROOT}/{rel} HTTP/1.1" {status} {bytes} "-" "Wget/1.14 (linux-gnu)""#
    )
}

/// A throwaway logs root laid out as `<root>/<node>/access_log-YYYYMMDD`.
pub struct LogTree {
    dir: TempDir,
}

impl LogTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_log(&self, node: &str, file_name: &str, lines: &[String]) -> PathBuf {
        let node_dir = self.root().join(node);
        fs::create_dir_all(&node_dir).unwrap();

        let path = node_dir.join(file_name);
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(&path, text).unwrap();
        path
    }

    /// Config file pointing at this tree, written at its root.
    pub fn write_config(&self, pipeline_block: &str) -> PathBuf {
        let path = self.root().join("esgf-metrics.hcl");
        let text = format!(
            "logs {{\n  root = \"{}\"\n}}\n\n{pipeline_block}\n",
            self.root().display()
        );
        fs::write(&path, text).unwrap();
        path
    }

    pub fn config(&self) -> MetricsConfig {
        MetricsConfig {
            logs: LogsConfig {
                root: self.root().to_path_buf(),
                ..LogsConfig::default()
            },
            ..MetricsConfig::default()
        }
    }
}

impl Default for LogTree {
    fn default() -> Self {
        Self::new()
    }
}
