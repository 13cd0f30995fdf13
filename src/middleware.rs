use crate::metrics::Metrics;
use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::time::Instant;
use tracing::debug;

/// `endpoint` label for requests that matched no registered route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// # Request Metrics Middleware
///
/// Wraps the whole application and, after every response is produced,
/// increments `http_requests_total{method, endpoint, status}`. Framework
/// generated responses (unknown route, wrong method, JSON parse failure)
/// are counted like any other.
///
/// `endpoint` is the matched route pattern, not the raw path, so the label
/// set stays bounded; every unknown path lands on [`UNMATCHED_ENDPOINT`].
pub struct RequestMetrics {
    metrics: Metrics,
}

impl RequestMetrics {
    pub fn new(metrics: Metrics) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsMiddleware {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

pub struct RequestMetricsMiddleware<S> {
    service: S,
    metrics: Metrics,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().to_string();
        let path = req.path().to_string();
        let endpoint = req
            .match_pattern()
            .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string());
        let metrics = self.metrics.clone();
        let started = Instant::now();
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            metrics.observe_request(&method, &endpoint, status.as_u16());
            debug!(
                method = %method,
                path = %path,
                endpoint = %endpoint,
                status = status.as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request handled"
            );

            result
        })
    }
}
