//! Métricas HTTP en formato Prometheus
//!
//! Cada instancia tiene su propio `Registry`, se crea una vez al arrancar y
//! se comparte vía `AppState`.

use std::time::Duration;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Etiqueta para requests que no coinciden con ninguna ruta
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

pub struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_latency: HistogramVec,
    errors_total: IntCounterVec,
}

impl HttpMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total de requests HTTP"),
            &["endpoint", "method"],
        )?;
        let request_latency = HistogramVec::new(
            HistogramOpts::new(
                "http_request_latency_seconds",
                "Latencia de los requests HTTP en segundos",
            ),
            &["endpoint", "method"],
        )?;
        let errors_total = IntCounterVec::new(
            Opts::new("http_errors_total", "Total de respuestas HTTP con error"),
            &["endpoint", "method", "status_code"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_latency.clone()))?;
        registry.register(Box::new(errors_total.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_latency,
            errors_total,
        })
    }

    /// Registrar un request terminado
    pub fn observe(&self, method: &str, endpoint: &str, status: u16, elapsed: Duration) {
        self.requests_total
            .with_label_values(&[endpoint, method])
            .inc();
        self.request_latency
            .with_label_values(&[endpoint, method])
            .observe(elapsed.as_secs_f64());

        if status >= 400 {
            let status = status.to_string();
            self.errors_total
                .with_label_values(&[endpoint, method, status.as_str()])
                .inc();
        }
    }

    /// Exposición en formato texto de Prometheus
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_counters_and_histogram() {
        let metrics = HttpMetrics::new().unwrap();
        metrics.observe("GET", "/veiculos", 200, Duration::from_millis(3));
        metrics.observe("GET", "/veiculos", 200, Duration::from_millis(5));

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"http_requests_total{endpoint="/veiculos",method="GET"} 2"#));
        assert!(text.contains(r#"http_request_latency_seconds_count{endpoint="/veiculos",method="GET"} 2"#));
        assert!(!text.contains("http_errors_total{"));
    }

    #[test]
    fn test_error_responses_are_counted() {
        let metrics = HttpMetrics::new().unwrap();
        metrics.observe("DELETE", "/veiculo/:placa", 404, Duration::from_millis(1));
        metrics.observe("POST", "/veiculo", 500, Duration::from_millis(1));

        let text = metrics.render().unwrap();
        assert!(text.contains(
            r#"http_errors_total{endpoint="/veiculo/:placa",method="DELETE",status_code="404"} 1"#
        ));
        assert!(text.contains(
            r#"http_errors_total{endpoint="/veiculo",method="POST",status_code="500"} 1"#
        ));
    }

    #[test]
    fn test_instances_are_independent() {
        let a = HttpMetrics::new().unwrap();
        let b = HttpMetrics::new().unwrap();
        a.observe("GET", "/", 200, Duration::from_millis(1));
        assert!(!b.render().unwrap().contains("http_requests_total{"));
    }
}
