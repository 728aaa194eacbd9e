//! Structured JSON report.

use serde_json::json;

use crate::error::Result;
use crate::scoring::EvaluationView;

/// Format an evaluation as pretty-printed JSON with a tool envelope.
pub fn render_json(view: &EvaluationView) -> Result<String> {
    let output = json!({
        "tool": "quality-scorecard",
        "version": env!("CARGO_PKG_VERSION"),
        "report": view,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricInputs;
    use crate::scoring::Evaluator;
    use chrono::{DateTime, Utc};

    #[test]
    fn json_report_roundtrips_as_value() {
        let ts: DateTime<Utc> = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let view = Evaluator::new().evaluate_at(&MetricInputs::new(2.0, 80.0, 5.0, 90.0), ts);
        let out = render_json(&view).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tool"], "quality-scorecard");
        assert_eq!(value["report"]["record"]["final_score"], 4.12);
        assert_eq!(value["report"]["tier"], "Good");
        assert_eq!(
            value["report"]["recommendations"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
    }
}
