use std::path::PathBuf;

use clap::{ArgAction, Parser};
use snapmeal_core::domain::common::{DatabaseConfig, LLMConfig, SessionConfig, SnapMealConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "snapmeal-api", version, about = "Meal photo nutrition analysis API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub openai: OpenAIArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(
        id = "database_host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database_port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "snapmeal")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(
        id = "server_host",
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        id = "server_port",
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/v1`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum accepted request body, in bytes. Base64 photos are large.
    #[arg(
        long = "server-body-limit",
        env = "SERVER_BODY_LIMIT",
        default_value_t = 20 * 1024 * 1024
    )]
    pub body_limit: usize,

    #[arg(
        long = "server-metrics",
        env = "SERVER_METRICS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics: bool,

    #[arg(long = "tls-cert-path", env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<PathBuf>,

    #[arg(long = "tls-key-path", env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OpenAIArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    #[arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = 1500)]
    pub max_tokens: u32,

    #[arg(long = "openai-temperature", env = "OPENAI_TEMPERATURE", default_value_t = 0.3)]
    pub temperature: f32,

    #[arg(long = "openai-timeout-secs", env = "OPENAI_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    #[arg(long = "session-secret", env = "SESSION_SECRET", hide_env_values = true)]
    pub secret: String,

    #[arg(long = "session-ttl-hours", env = "SESSION_TTL_HOURS", default_value_t = 720)]
    pub ttl_hours: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `EnvFilter` directives, e.g. `info,snapmeal_core=debug`.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub json: bool,
}

impl From<Args> for SnapMealConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                openai_api_key: args.openai.api_key,
                openai_model: args.openai.model,
                openai_base_url: args.openai.base_url,
                max_tokens: args.openai.max_tokens,
                temperature: args.openai.temperature,
                timeout_secs: args.openai.timeout_secs,
            },
            session: SessionConfig {
                secret: args.session.secret,
                ttl_hours: args.session.ttl_hours,
            },
        }
    }
}
