// init_config.rs
// Handles loading and parsing optional overrides from lab_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{BalloonSign, SimConfig};
use crate::layout::{Layout, Rect};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    pub layout: Option<LayoutConfig>,
    pub tuning: Option<TuningConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub sweater: Option<RectConfig>,
    pub wall: Option<RectConfig>,
    pub balloon_radius: Option<f32>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RectConfig {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectConfig {
    fn to_rect(self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TuningConfig {
    pub balloon_sign: Option<String>,
    pub balloon_magnitude: Option<f32>,
    pub mobile_fraction: Option<f32>,
    pub show_field_lines: Option<bool>,
    pub stick_distance: Option<f32>,
    pub transfer_needed: Option<u32>,
    pub transfer_interval_ms: Option<f64>,
    pub transfer_time_ms: Option<f32>,
    pub proximity_threshold: Option<f32>,
    pub rub_speed_threshold: Option<f32>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("lab_config.toml")
    }

    /// Fold the overrides into the given layout and tuning. Unknown balloon
    /// signs are reported and skipped; numeric values are clamped by
    /// `SimConfig::sanitize`.
    pub fn apply(&self, layout: &mut Layout, config: &mut SimConfig) {
        if let Some(l) = &self.layout {
            if let Some(rows) = l.rows {
                layout.rows = rows;
            }
            if let Some(cols) = l.cols {
                layout.cols = cols;
            }
            if let Some(sweater) = l.sweater {
                layout.sweater = sweater.to_rect();
            }
            if let Some(wall) = l.wall {
                layout.wall = wall.to_rect();
            }
            if let Some(radius) = l.balloon_radius {
                layout.balloon_radius = radius;
            }
        }
        if let Some(t) = &self.tuning {
            if let Some(name) = &t.balloon_sign {
                match parse_sign(name) {
                    Ok(sign) => config.balloon_sign = sign,
                    Err(e) => eprintln!("lab_config.toml: {}", e),
                }
            }
            if let Some(v) = t.balloon_magnitude {
                config.balloon_magnitude = v;
            }
            if let Some(v) = t.mobile_fraction {
                config.mobile_fraction = v;
            }
            if let Some(v) = t.show_field_lines {
                config.show_field_lines = v;
            }
            if let Some(v) = t.stick_distance {
                config.stick_distance = v;
            }
            if let Some(v) = t.transfer_needed {
                config.transfer_needed = v;
            }
            if let Some(v) = t.transfer_interval_ms {
                config.transfer_interval_ms = v;
            }
            if let Some(v) = t.transfer_time_ms {
                config.transfer_time_ms = v;
            }
            if let Some(v) = t.proximity_threshold {
                config.proximity_threshold = v;
            }
            if let Some(v) = t.rub_speed_threshold {
                config.rub_speed_threshold = v;
            }
        }
        config.sanitize();
    }
}

fn parse_sign(name: &str) -> Result<BalloonSign, String> {
    match name {
        "Negative" => Ok(BalloonSign::Negative),
        "Neutral" => Ok(BalloonSign::Neutral),
        "Positive" => Ok(BalloonSign::Positive),
        other => Err(format!("unknown balloon sign: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_fold_into_defaults() {
        let parsed: InitConfig = toml::from_str(
            r#"
            [layout]
            rows = 4
            cols = 5

            [tuning]
            balloon_sign = "Positive"
            balloon_magnitude = 99.0
            mobile_fraction = -0.5
            "#,
        )
        .expect("fixture should parse");

        let mut layout = Layout::default();
        let mut config = SimConfig::default();
        parsed.apply(&mut layout, &mut config);

        assert_eq!(layout.rows, 4);
        assert_eq!(layout.cols, 5);
        assert_eq!(config.balloon_sign, BalloonSign::Positive);
        assert_eq!(
            config.balloon_magnitude,
            crate::config::BALLOON_MAGNITUDE_MAX,
            "magnitude should clamp to its upper bound"
        );
        assert_eq!(config.mobile_fraction, 0.0, "fraction should clamp to zero");
    }

    #[test]
    fn unknown_sign_keeps_default() {
        let parsed: InitConfig = toml::from_str("[tuning]\nballoon_sign = \"Sideways\"\n")
            .expect("fixture should parse");
        let mut layout = Layout::default();
        let mut config = SimConfig::default();
        parsed.apply(&mut layout, &mut config);
        assert_eq!(config.balloon_sign, BalloonSign::default());
    }
}
