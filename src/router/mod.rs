//! In-process stand-in for the identity API.
//!
//! Requests are matched by exact path against [`ROUTES`] after stripping the
//! mount prefix. Nothing here can fail: unknown paths produce a 404 response.

pub mod handlers;
pub mod request;
pub mod response;

use rand::{thread_rng, RngCore};
use tracing::{debug, debug_span, warn};
use uuid::Uuid;

pub use request::{Params, Request};
pub use response::Response;

pub const DEFAULT_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Path prefix every route is mounted under.
    pub prefix: String,
    /// Reported by the health endpoint.
    pub version: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

pub struct RequestContext<'a> {
    pub params: &'a Params,
    pub rng: &'a mut dyn RngCore,
    pub config: &'a RouterConfig,
}

pub type Handler = fn(&mut RequestContext) -> Response;

pub struct Route {
    pub path: &'static str,
    pub handler: Handler,
}

pub static ROUTES: &[Route] = &[
    Route { path: "/health", handler: handlers::health },
    Route { path: "/person", handler: handlers::person },
    Route { path: "/email", handler: handlers::email },
    Route { path: "/phone", handler: handlers::phone },
    Route { path: "/address", handler: handlers::address },
    Route { path: "/identity", handler: handlers::identity },
];

#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    pub fn new(mut config: RouterConfig) -> Self {
        let trimmed = config.prefix.trim_end_matches('/').len();
        config.prefix.truncate(trimmed);
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Find the route for `path`, if any.
    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        let inner = path.strip_prefix(self.config.prefix.as_str())?;
        ROUTES.iter().find(|route| route.path == inner)
    }

    pub fn handle(&self, request: &Request) -> Response {
        self.handle_with_rng(request, &mut thread_rng())
    }

    pub fn handle_with_rng(&self, request: &Request, rng: &mut dyn RngCore) -> Response {
        let span = debug_span!("request", id = %Uuid::new_v4(), path = %request.path);
        let _enter = span.enter();

        let Some(route) = self.resolve(&request.path) else {
            warn!(path = %request.path, "no route matched");
            return Response::not_found();
        };

        let mut ctx = RequestContext {
            params: &request.params,
            rng,
            config: &self.config,
        };
        let response = (route.handler)(&mut ctx);
        debug!(status = response.status, "request handled");
        response
    }
}
