//! Python bindings via PyO3

use crate::config::Color;
use crate::formatter::ConfigProvider;
use crate::score::ScoreInput;
use once_cell::sync::Lazy;
use pyo3::prelude::*;

/// Process-wide active configuration
static PROVIDER: Lazy<ConfigProvider> = Lazy::new(ConfigProvider::new);

type PyColor = (f32, f32, f32, f32);

fn to_py_color(color: Color) -> PyColor {
    (color.r, color.g, color.b, color.a)
}

/// Load and activate a JSON judgment configuration
///
/// # Raises
/// ValueError if the JSON is malformed or the configuration is invalid;
/// the previous configuration stays active
#[pyfunction]
fn init_config(json: &str) -> PyResult<()> {
    PROVIDER.load_json(json)?;
    Ok(())
}

/// Check if a configuration is active
#[pyfunction]
fn is_config_initialized() -> bool {
    PROVIDER.is_active()
}

/// Deactivate the configuration; `judge` falls back to the stock popup
#[pyfunction]
fn clear_config() {
    PROVIDER.clear();
}

/// Judge a single cut
///
/// # Arguments
/// * `score` - Total cut score
/// * `before`, `after`, `accuracy` - Score components
/// * `time_dependence` - Signed timing offset
/// * `max_score` - Maximum achievable score (default: 115)
/// * `base_color` - Color used by the stock popup when no config is active
///
/// # Returns
/// `((r, g, b, a), text)`
#[pyfunction]
#[pyo3(signature = (score, before, after, accuracy, time_dependence, max_score=None, base_color=None))]
fn judge(
    score: i32,
    before: i32,
    after: i32,
    accuracy: i32,
    time_dependence: f64,
    max_score: Option<i32>,
    base_color: Option<PyColor>,
) -> (PyColor, String) {
    let mut input = ScoreInput::new(score, before, after, accuracy, time_dependence);
    if let Some(max_score) = max_score {
        input = input.with_max_score(max_score);
    }

    let base = base_color
        .map(|(r, g, b, a)| Color::new(r, g, b, a))
        .unwrap_or(Color::WHITE);

    let formatted = PROVIDER.formatter().format(&input, base);
    (to_py_color(formatted.color), formatted.text)
}

/// Python module definition
#[pymodule]
fn hit_score_judge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_config, m)?)?;
    m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(clear_config, m)?)?;
    m.add_function(wrap_pyfunction!(judge, m)?)?;
    Ok(())
}
