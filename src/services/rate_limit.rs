use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use governor::{DefaultKeyedRateLimiter, Quota};
use serde_json::json;
use std::{
    future::Future,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::NonZeroU32,
    pin::Pin,
    sync::Arc,
};
use tower::{Layer, Service};

/// One token bucket per client address.
pub type ClientRateLimiter = Arc<DefaultKeyedRateLimiter<IpAddr>>;

pub const RATE_LIMITED_MESSAGE: &str =
    "Anda terlalu banyak melakukan permintaan. Silakan coba lagi nanti.";

/// `per_minute` requests per minute for each client, all of which may be spent at once.
pub fn create_rate_limiter(per_minute: u32) -> ClientRateLimiter {
    let per_minute = NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN);
    Arc::new(DefaultKeyedRateLimiter::keyed(Quota::per_minute(per_minute)))
}

/// Address a request is charged to.
///
/// With `trust_proxy` the right-most `X-Forwarded-For` entry wins, as that is
/// the hop our own proxy appended. Otherwise, or when the header is absent or
/// unparsable, the TCP peer from `ConnectInfo` is used.
pub fn client_ip<B>(request: &Request<B>, trust_proxy: bool) -> IpAddr {
    let forwarded = trust_proxy
        .then(|| request.headers().get("x-forwarded-for"))
        .flatten()
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.rsplit(',').next())
        .and_then(|hop| hop.trim().parse::<IpAddr>().ok());

    forwarded
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        })
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

#[derive(Clone)]
pub struct RateLimitLayer {
    limiter: ClientRateLimiter,
    trust_proxy: bool,
}

impl RateLimitLayer {
    pub fn new(limiter: ClientRateLimiter, trust_proxy: bool) -> Self {
        Self {
            limiter,
            trust_proxy,
        }
    }
}

impl<S> Layer<S> for RateLimitLayer {
    type Service = RateLimitService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RateLimitService {
            inner,
            limiter: self.limiter.clone(),
            trust_proxy: self.trust_proxy,
        }
    }
}

#[derive(Clone)]
pub struct RateLimitService<S> {
    inner: S,
    limiter: ClientRateLimiter,
    trust_proxy: bool,
}

impl<S> Service<Request<Body>> for RateLimitService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut std::task::Context<'_>) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let limiter = self.limiter.clone();
        let client = client_ip(&request, self.trust_proxy);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            if limiter.check_key(&client).is_err() {
                tracing::warn!(%client, path = %request.uri().path(), "rate limit exceeded");
                return Ok(rate_limited());
            }
            inner.call(request).await
        })
    }
}

fn rate_limited() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({ "message": RATE_LIMITED_MESSAGE })),
    )
        .into_response()
}
