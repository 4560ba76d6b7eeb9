use imposter_engine::settings::GameSettings;
use imposter_engine::topic::LOCAL_RANDOM;
use imposter_topics::ProviderKind;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub imposters: usize,
    pub jester: bool,
    pub reveal_role: bool,
    pub teaming: bool,
    pub hint: bool,
    pub category: String,
    pub timer: u32,
    pub provider: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub imposters: ValueSource,
    pub jester: ValueSource,
    pub reveal_role: ValueSource,
    pub teaming: ValueSource,
    pub hint: ValueSource,
    pub category: ValueSource,
    pub timer: ValueSource,
    pub provider: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            imposters: ValueSource::Default,
            jester: ValueSource::Default,
            reveal_role: ValueSource::Default,
            teaming: ValueSource::Default,
            hint: ValueSource::Default,
            category: ValueSource::Default,
            timer: ValueSource::Default,
            provider: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let settings = GameSettings::default();
        Self {
            seed: None,
            imposters: settings.imposter_count,
            jester: settings.jester_enabled,
            reveal_role: settings.reveal_role_on_elimination,
            teaming: settings.imposter_teaming,
            hint: settings.outsider_category_hint,
            category: LOCAL_RANDOM.into(),
            timer: settings.timer_secs,
            provider: ProviderKind::default().to_string(),
        }
    }
}

impl ConfigResolved {
    /// Layers every value that did not come from the built-in defaults on top
    /// of `base`, typically the settings saved with the roster.
    pub fn settings_over(&self, mut base: GameSettings) -> GameSettings {
        let (c, s) = (&self.config, &self.sources);
        let set = |src: ValueSource| src != ValueSource::Default;
        if set(s.imposters) {
            base.imposter_count = c.imposters;
        }
        if set(s.jester) {
            base.jester_enabled = c.jester;
        }
        if set(s.reveal_role) {
            base.reveal_role_on_elimination = c.reveal_role;
        }
        if set(s.teaming) {
            base.imposter_teaming = c.teaming;
        }
        if set(s.hint) {
            base.outsider_category_hint = c.hint;
        }
        if set(s.category) {
            base.category = c.category.clone();
        }
        if set(s.timer) {
            base.timer_secs = c.timer;
        }
        base
    }

    pub fn provider(&self) -> ProviderKind {
        // validated on load
        self.config.provider.parse().unwrap_or_default()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the file named by `IMPOSTER_CONFIG`, then the
/// `IMPOSTER_*` overrides, reading variables through `env`.
pub fn load_from(env: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var("IMPOSTER_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.imposters {
            cfg.imposters = v;
            sources.imposters = ValueSource::File;
        }
        if let Some(v) = f.jester {
            cfg.jester = v;
            sources.jester = ValueSource::File;
        }
        if let Some(v) = f.reveal_role {
            cfg.reveal_role = v;
            sources.reveal_role = ValueSource::File;
        }
        if let Some(v) = f.teaming {
            cfg.teaming = v;
            sources.teaming = ValueSource::File;
        }
        if let Some(v) = f.hint {
            cfg.hint = v;
            sources.hint = ValueSource::File;
        }
        if let Some(v) = f.category {
            cfg.category = v;
            sources.category = ValueSource::File;
        }
        if let Some(v) = f.timer {
            cfg.timer = v;
            sources.timer = ValueSource::File;
        }
        if let Some(v) = f.provider {
            cfg.provider = v;
            sources.provider = ValueSource::File;
        }
    }

    if let Some(seed) = var("IMPOSTER_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(n) = var("IMPOSTER_IMPOSTERS") {
        cfg.imposters = n
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid imposter count".into()))?;
        sources.imposters = ValueSource::Env;
    }
    if let Some(v) = var("IMPOSTER_JESTER") {
        cfg.jester = parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid jester".into()))?;
        sources.jester = ValueSource::Env;
    }
    if let Some(v) = var("IMPOSTER_REVEAL_ROLE") {
        cfg.reveal_role =
            parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid reveal_role".into()))?;
        sources.reveal_role = ValueSource::Env;
    }
    if let Some(v) = var("IMPOSTER_TEAMING") {
        cfg.teaming =
            parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid teaming".into()))?;
        sources.teaming = ValueSource::Env;
    }
    if let Some(v) = var("IMPOSTER_HINT") {
        cfg.hint = parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid hint".into()))?;
        sources.hint = ValueSource::Env;
    }
    if let Some(v) = var("IMPOSTER_CATEGORY") {
        cfg.category = v;
        sources.category = ValueSource::Env;
    }
    if let Some(v) = var("IMPOSTER_TIMER") {
        cfg.timer = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid timer".into()))?;
        sources.timer = ValueSource::Env;
    }
    if let Some(v) = var("IMPOSTER_PROVIDER") {
        cfg.provider = v;
        sources.provider = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    imposters: Option<usize>,
    #[serde(default)]
    jester: Option<bool>,
    #[serde(default)]
    reveal_role: Option<bool>,
    #[serde(default)]
    teaming: Option<bool>,
    #[serde(default)]
    hint: Option<bool>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    timer: Option<u32>,
    #[serde(default)]
    provider: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.imposters == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: imposters must be >=1".into(),
        ));
    }
    cfg.provider
        .parse::<ProviderKind>()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    Ok(())
}

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
