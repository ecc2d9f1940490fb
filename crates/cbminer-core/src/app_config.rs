use std::path::PathBuf;

/// Runtime configuration, sourced from environment variables.
///
/// Directory/file settings are combined by the CLI: input files are read
/// from `input_dir`, reports written under `output_dir`.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub company_names_file: String,
    pub vc_names_file: String,
    pub startup_output_file: String,
    pub investor_output_file: String,
    /// Inclusive lower bound on a round's funded year.
    pub start_year: i32,
    /// Allowed round-category codes, lower-cased at load time.
    pub round_types: Vec<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("input_dir", &self.input_dir)
            .field("output_dir", &self.output_dir)
            .field("company_names_file", &self.company_names_file)
            .field("vc_names_file", &self.vc_names_file)
            .field("startup_output_file", &self.startup_output_file)
            .field("investor_output_file", &self.investor_output_file)
            .field("start_year", &self.start_year)
            .field("round_types", &self.round_types)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl AppConfig {
    /// Full path of an input file.
    #[must_use]
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    /// Full path of an output file.
    #[must_use]
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}
