use chrono::NaiveDateTime;

/// `12.5` -> `£12.50`
pub fn format_gbp(amount: f64) -> String {
    if amount < 0.0 {
        format!("-£{:.2}", amount.abs())
    } else {
        format!("£{:.2}", amount)
    }
}

/// Fracción decimal a porcentaje entero: `0.25` -> `25%`
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Probabilidad con un decimal: `0.125` -> `12.5%`
pub fn format_probability(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

/// Rutas relativas de imágenes subidas -> URL servida por el backend
pub fn resolve_image_url(path: Option<&str>, image_base: &str) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }

    let base = image_base.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{}{}", base, path))
    } else {
        Some(format!("{}/{}", base, path))
    }
}
