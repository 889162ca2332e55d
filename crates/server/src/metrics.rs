use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static HOUSE_WRITES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "house_admin_house_writes_total",
        "Successful house writes by operation",
        &["op"]
    )
    .expect("register house_writes_total")
});

pub static FORM_REJECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "house_admin_form_rejections_total",
        "Form submissions rejected by validation",
        &["form"]
    )
    .expect("register form_rejections_total")
});

pub fn record_write(op: &str) {
    HOUSE_WRITES_TOTAL.with_label_values(&[op]).inc();
}

pub fn record_rejection(form: &str) {
    FORM_REJECTIONS_TOTAL.with_label_values(&[form]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_writes_show_up_in_exposition() {
        record_write("create");
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("house_admin_house_writes_total"));
        assert!(body.contains("op=\"create\""));
    }
}
