/// Claves de localStorage que forman la sesión
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_TOKEN_TYPE: &str = "tokenType";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_ROLE: &str = "role";
pub const STORAGE_KEY_LOGGED_IN: &str = "loggedIn";

pub const SESSION_KEYS: [&str; 5] = [
    STORAGE_KEY_TOKEN,
    STORAGE_KEY_TOKEN_TYPE,
    STORAGE_KEY_USER,
    STORAGE_KEY_ROLE,
    STORAGE_KEY_LOGGED_IN,
];

/// Endpoints que nunca llevan cabecera Authorization
pub const PUBLIC_PATHS: [&str; 3] = [
    "/auth/login",
    "/auth/register/customer",
    "/auth/register/vendor",
];

/// Alérgenos que el editor de plantillas ofrece (el id es la posición + 1)
pub const ALLERGENS: [&str; 7] = ["gluten", "dairy", "eggs", "shellfish", "soy", "nuts", "sesame"];

/// Importes predefinidos de recarga (en libras)
pub const TOP_UP_PRESETS: [u32; 3] = [10, 20, 50];
pub const TOP_UP_MIN: f64 = 5.0;
pub const TOP_UP_MAX: f64 = 100.0;
