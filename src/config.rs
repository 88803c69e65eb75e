use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    /// Prefijo de todas las rutas del backend (el proxy de desarrollo sirve `/api`)
    pub api_base_url: String,
    /// Host desde el que se sirven las imágenes subidas
    pub image_base_url: String,
    pub request_timeout_ms: u32,
    pub retry_attempts: u32,
    pub retry_base_delay_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api_base_url: "/api".to_string(),
            image_base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: 5000,
            retry_attempts: 2,
            retry_base_delay_ms: 300,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = option_env!("ENVIRONMENT")
            .unwrap_or("development")
            .to_string();

        // En producción las imágenes se sirven desde el mismo origen
        let default_image_base = if environment == "production" {
            String::new()
        } else {
            defaults.image_base_url.clone()
        };

        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.api_base_url),
            image_base_url: option_env!("IMAGE_BASE_URL")
                .map(|s| s.to_string())
                .unwrap_or(default_image_base),
            request_timeout_ms: parse_or(option_env!("REQUEST_TIMEOUT_MS"), defaults.request_timeout_ms),
            retry_attempts: parse_or(option_env!("RETRY_ATTEMPTS"), defaults.retry_attempts),
            retry_base_delay_ms: parse_or(option_env!("RETRY_BASE_DELAY_MS"), defaults.retry_base_delay_ms),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            environment,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
