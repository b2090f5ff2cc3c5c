/*!
 * Per-IP fixed-window rate limiting, applied on the login scope to slow
 * down credential stuffing. Counters live in a `DashMap` shared by all
 * workers.
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use dashmap::DashMap;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{
    rc::Rc,
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::warn;

use crate::models::ErrorCode;

use super::create_error_response;

/// Map size above which a `check` call sweeps out expired windows before
/// inserting, so the counter map stays bounded by the active client set.
const SWEEP_THRESHOLD: usize = 1024;

#[derive(Debug)]
struct WindowState {
    window_start: Instant,
    count: u32,
}

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window: Duration,
    counters: Arc<DashMap<String, WindowState>>,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
            counters: Arc::new(DashMap::new()),
        }
    }

    /// Returns whether the request fits into the current window.
    fn check(&self, key: &str) -> bool {
        let now = Instant::now();

        if self.counters.len() > SWEEP_THRESHOLD {
            self.counters
                .retain(|_, state| now.duration_since(state.window_start) < self.window);
        }

        let mut entry = self
            .counters
            .entry(key.to_string())
            .or_insert_with(|| WindowState {
                window_start: now,
                count: 0,
            });

        if now.duration_since(entry.window_start) >= self.window {
            entry.window_start = now;
            entry.count = 0;
        }

        entry.count += 1;
        entry.count <= self.max_requests
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limiter: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limiter: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limiter = self.limiter.clone();

        Box::pin(async move {
            let peer = req
                .connection_info()
                .realip_remote_addr()
                .unwrap_or("unknown")
                .to_string();

            if !limiter.check(&peer) {
                warn!("Rate limit exceeded for {} on {}", peer, req.path());
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::TOO_MANY_REQUESTS,
                        ErrorCode::TooManyRequests,
                        "Too many requests, slow down",
                    )
                    .map_into_right_body(),
                ));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_allows_up_to_limit() {
        let limiter = RateLimit::new(3, 60);
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
    }

    #[test]
    fn test_windows_are_per_key() {
        let limiter = RateLimit::new(1, 60);
        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
        assert!(limiter.check("5.6.7.8"));
    }

    #[test]
    fn test_expired_windows_are_evicted() {
        // A zero-length window makes every earlier entry stale immediately.
        let limiter = RateLimit::new(1, 0);
        for i in 0..=SWEEP_THRESHOLD {
            limiter.check(&format!("10.0.{}.{}", i / 256, i % 256));
        }
        assert!(limiter.counters.len() > SWEEP_THRESHOLD);

        assert!(limiter.check("203.0.113.7"));
        assert!(limiter.counters.len() <= 2);
    }
}
