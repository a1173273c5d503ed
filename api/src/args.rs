use clap::{Args as ClapArgs, Parser};
use labelsight_core::{
    domain::{
        capture::{DEFAULT_MAX_IMAGE_BYTES, FacingMode},
        common::{CaptureConfig, LLMConfig, LabelsightConfig},
    },
    infrastructure::llm::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL},
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "labelsight",
    version,
    about = "Photograph food packaging and get a per-ingredient risk table"
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub capture: CaptureArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/labelsight`. Empty means served at `/`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list; `*` allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: Url,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CaptureArgs {
    #[arg(
        long = "max-image-bytes",
        env = "MAX_IMAGE_BYTES",
        default_value_t = DEFAULT_MAX_IMAGE_BYTES
    )]
    pub max_image_bytes: usize,

    /// `environment` (back camera) or `user` (front camera).
    #[arg(
        long = "default-facing-mode",
        env = "DEFAULT_FACING_MODE",
        default_value = "environment"
    )]
    pub default_facing_mode: FacingMode,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for LabelsightConfig {
    fn from(args: Args) -> Self {
        LabelsightConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url.to_string(),
                timeout_secs: args.llm.timeout_secs,
            },
            capture: CaptureConfig {
                max_image_bytes: args.capture.max_image_bytes,
                default_facing_mode: args.capture.default_facing_mode,
            },
        }
    }
}
