//! BMI calculation handler
//!
//! Parses query parameters, validates presence, computes the Body Mass Index
//! and classifies it into a category. The whole handler is a pure function of
//! the query string.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

use crate::config::HttpConfig;
use crate::http::{self, query};

/// Error message returned whenever a required parameter is missing or unusable
pub const MISSING_PARAMS_MESSAGE: &str = "Missing required parameters: gender, height, weight";

/// BMI classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// Classify an unrounded BMI value. Lower bounds are inclusive:
    /// 18.5 is Normal, 25 is Overweight, 30 is Obese.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Successful calculation response body
#[derive(Debug, Serialize)]
struct BmiReport<'a> {
    gender: &'a str,
    height: f64,
    weight: f64,
    bmi: f64,
    category: &'static str,
}

/// Handle `GET /bmi-calculator`
///
/// Required query parameters: `gender` (non-empty string, echoed back),
/// `height` (meters), `weight` (kilograms). Any missing, non-numeric or zero
/// parameter yields a 400 with a fixed error body.
pub fn handle_bmi(raw_query: Option<&str>, http_config: &HttpConfig) -> Response<Full<Bytes>> {
    let params = query::parse(raw_query.unwrap_or(""));

    let gender = params.get("gender").map_or("", String::as_str);
    let height = numeric_param(&params, "height");
    let weight = numeric_param(&params, "weight");

    if gender.is_empty() || is_unusable(height) || is_unusable(weight) {
        return http::error_response(StatusCode::BAD_REQUEST, MISSING_PARAMS_MESSAGE, http_config);
    }

    let bmi = weight / (height * height);

    let report = BmiReport {
        gender,
        height,
        weight,
        bmi: round_to_two_decimals(bmi),
        category: Category::from_bmi(bmi).as_str(),
    };

    http::json_response(StatusCode::OK, &report, http_config)
}

/// Read a numeric parameter, defaulting to 0 when missing or non-numeric
fn numeric_param(params: &HashMap<String, String>, key: &str) -> f64 {
    params.get(key).and_then(|v| v.parse().ok()).unwrap_or(0.0)
}

/// A zero (or NaN) value is indistinguishable from an absent parameter
/// and is rejected. This conflation is intentional and must be preserved.
#[allow(clippy::float_cmp)]
fn is_unusable(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

/// Round to two decimal places, half away from zero
fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn http_config() -> HttpConfig {
        HttpConfig {
            server_name: "test".to_string(),
            enable_cors: true,
        }
    }

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(Category::from_bmi(16.0), Category::Underweight);
        assert_eq!(Category::from_bmi(18.49), Category::Underweight);
        assert_eq!(Category::from_bmi(18.5), Category::Normal);
        assert_eq!(Category::from_bmi(24.99), Category::Normal);
        assert_eq!(Category::from_bmi(25.0), Category::Overweight);
        assert_eq!(Category::from_bmi(29.99), Category::Overweight);
        assert_eq!(Category::from_bmi(30.0), Category::Obese);
        assert_eq!(Category::from_bmi(45.0), Category::Obese);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_rounding() {
        assert_eq!(round_to_two_decimals(22.857_142_857_142_858), 22.86);
        assert_eq!(round_to_two_decimals(17.578_125), 17.58);
        assert_eq!(round_to_two_decimals(30.864_197_530_864_196), 30.86);
        assert_eq!(round_to_two_decimals(22.0), 22.0);
    }

    #[tokio::test]
    async fn test_normal_calculation() {
        let resp = handle_bmi(Some("gender=male&height=1.75&weight=70"), &http_config());
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["gender"], "male");
        assert_eq!(body["height"], 1.75);
        assert_eq!(body["weight"], 70.0);
        assert_eq!(body["bmi"], 22.86);
        assert_eq!(body["category"], "Normal");
    }

    #[tokio::test]
    async fn test_underweight_calculation() {
        let resp = handle_bmi(Some("gender=female&height=1.60&weight=45"), &http_config());
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["bmi"], 17.58);
        assert_eq!(body["category"], "Underweight");
    }

    #[tokio::test]
    async fn test_obese_calculation() {
        let resp = handle_bmi(Some("gender=male&height=1.80&weight=100"), &http_config());
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["bmi"], 30.86);
        assert_eq!(body["category"], "Obese");
    }

    #[tokio::test]
    async fn test_missing_height_rejected() {
        let resp = handle_bmi(Some("gender=male&weight=70"), &http_config());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            &bytes[..],
            br#"{"error":"Missing required parameters: gender, height, weight"}"#
        );
    }

    #[tokio::test]
    async fn test_zero_values_rejected() {
        for q in [
            "gender=male&height=0&weight=70",
            "gender=male&height=1.75&weight=0",
            "gender=male&height=0.0&weight=70",
        ] {
            let resp = handle_bmi(Some(q), &http_config());
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "query: {q}");
        }
    }

    #[tokio::test]
    async fn test_non_numeric_rejected() {
        let resp = handle_bmi(Some("gender=male&height=tall&weight=70"), &http_config());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_gender_rejected() {
        let resp = handle_bmi(Some("gender=&height=1.75&weight=70"), &http_config());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_no_query_rejected() {
        let resp = handle_bmi(None, &http_config());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_values_pass_validation() {
        // Only zero/NaN values are conflated with "missing"; negatives flow
        // through the computation unchanged.
        let resp = handle_bmi(Some("gender=male&height=-1.75&weight=70"), &http_config());
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_idempotent_bodies() {
        let q = Some("gender=male&height=1.75&weight=70");
        let first = handle_bmi(q, &http_config())
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes();
        let second = handle_bmi(q, &http_config())
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(first, second);
    }
}
