use crate::models::{ForecastDataPoint, ForecastWeek};
use crate::utils::{format_percent, format_probability};

/// Una fila del gráfico de barras (ventas previstas frente a no-shows)
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBar {
    pub bundle_name: String,
    pub predicted: f64,
    pub no_show: f64,
    /// Ancho relativo (0-100) respecto al mayor valor de la semana
    pub predicted_width: f64,
    pub no_show_width: f64,
    pub chance_of_no_show: String,
    pub confidence: Option<String>,
    pub recommendation: Option<String>,
    pub rationale: Option<String>,
}

fn width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

fn bar(point: &ForecastDataPoint, max: f64) -> ForecastBar {
    ForecastBar {
        bundle_name: point.bundle_name.clone(),
        predicted: point.predicted_sales,
        no_show: point.no_show,
        predicted_width: width(point.predicted_sales, max),
        no_show_width: width(point.no_show, max),
        chance_of_no_show: format_probability(point.chance_of_no_show),
        confidence: point.confidence.map(format_percent),
        recommendation: point.recommendation.clone(),
        rationale: point.rationale.clone(),
    }
}

pub fn forecast_bars(week: &ForecastWeek) -> Vec<ForecastBar> {
    let max = week
        .datapoints
        .iter()
        .flat_map(|p| [p.predicted_sales, p.no_show])
        .fold(0.0, f64::max);
    week.datapoints.iter().map(|p| bar(p, max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_busiest_bundle() {
        let week: ForecastWeek = serde_json::from_value(serde_json::json!({
            "week_date": "2026-02-18",
            "datapoints": [
                {"bundle_name": "Pastry Bag", "predicted": 10, "no_show": 1, "chance_of_no_show": 0.125, "confidence": 0.8},
                {"bundle_name": "Sushi Bag", "predicted_sales": 5, "no_show": 0}
            ]
        }))
        .unwrap();

        let bars = forecast_bars(&week);

        assert_eq!(bars[0].predicted_width, 100.0);
        assert_eq!(bars[0].no_show_width, 10.0);
        assert_eq!(bars[0].chance_of_no_show, "12.5%");
        assert_eq!(bars[0].confidence.as_deref(), Some("80%"));
        assert_eq!(bars[1].predicted_width, 50.0);
        assert_eq!(bars[1].confidence, None);
    }

    #[test]
    fn empty_week_has_no_bars() {
        let week = ForecastWeek {
            week_date: "2026-02-18".into(),
            datapoints: Vec::new(),
        };
        assert!(forecast_bars(&week).is_empty());
    }
}
