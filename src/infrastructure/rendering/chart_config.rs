use serde::Serialize;
use serde_json::{Value, json};

use crate::{config::PanelConfig, domain::chart::ChartSeries};

/// One line of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: &'static str,
    pub data: Vec<Option<f64>>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u8; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

/// Full `new Chart(canvas, config)` argument for the sentiment line chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub responsive: bool,
    pub options: Value,
}

impl LineChartConfig {
    pub fn new(config: &PanelConfig, series: &ChartSeries) -> Self {
        Self {
            kind: "line",
            data: ChartData {
                labels: series.labels.clone(),
                datasets: vec![
                    LineDataset {
                        label: "sentiment",
                        data: series.history.clone(),
                        background_color: "blue",
                        border_color: "blue",
                        border_dash: None,
                    },
                    LineDataset {
                        label: "prediction",
                        data: series.forecast.clone(),
                        background_color: "white",
                        border_color: "green",
                        border_dash: Some([6, 6]),
                    },
                ],
            },
            responsive: true,
            options: line_options(config),
        }
    }
}

fn line_options(config: &PanelConfig) -> Value {
    let grid = json!({ "color": "rgb(100,100,100)", "borderDash": [5, 5] });
    json!({
        "fill": false,
        "interaction": { "intersect": false },
        "radius": 0,
        "plugins": { "tooltip": { "mode": "index", "intersect": false } },
        "hover": { "mode": "index", "intersect": false },
        "scales": {
            "x": {
                "title": { "display": true, "text": "time" },
                "grid": grid.clone(),
            },
            "y": {
                "title": { "display": true, "text": "sentiment" },
                "min": config.y_min,
                "max": config.y_max,
                "ticks": { "stepSize": config.y_step },
                "grid": grid,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartState;

    #[test]
    fn initial_config_has_two_aligned_datasets() {
        let config = PanelConfig::default();
        let series = ChartState::new(config.axis(), config.sentiment_scale).series();
        let chart = serde_json::to_value(LineChartConfig::new(&config, &series)).unwrap();

        assert_eq!(chart["type"], "line");
        assert_eq!(chart["data"]["labels"].as_array().unwrap().len(), 10);
        let datasets = chart["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[1]["borderDash"], json!([6, 6]));
        assert!(datasets[0].get("borderDash").is_none());
        // history padded on the right, forecast on the left
        assert_eq!(datasets[0]["data"][7], Value::Null);
        assert_eq!(datasets[1]["data"][5], Value::Null);
        assert_eq!(datasets[1]["data"][6], json!(0.0));
        assert_eq!(chart["options"]["scales"]["y"]["ticks"]["stepSize"], json!(0.5));
    }
}
