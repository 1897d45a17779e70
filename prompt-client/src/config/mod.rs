use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub proxy: ProxySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProxySettings {
    /// Full URL of the proxy's generate endpoint.
    #[serde(default = "default_proxy_url")]
    pub url: String,
    /// Model identifier sent with every prompt.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            url: default_proxy_url(),
            model: default_model(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_proxy_url() -> String {
    "http://localhost:8080/generate".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    // Check if we're already in prompt-client directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("prompt-client") {
        base_path.join("config")
    } else {
        base_path.join("prompt-client").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
