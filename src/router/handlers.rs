use serde_json::json;

use crate::generator::{self, locale::en};
use crate::random::pick_one;
use crate::router::response::Response;
use crate::router::RequestContext;

pub fn health(ctx: &mut RequestContext) -> Response {
    Response::ok(&json!({ "status": "ok", "version": ctx.config.version }))
}

pub fn person(ctx: &mut RequestContext) -> Response {
    Response::ok(&generator::person(&mut *ctx.rng))
}

/// Names from the request win; missing or empty ones are picked at random.
pub fn email(ctx: &mut RequestContext) -> Response {
    let first = match ctx.params.get_non_empty("first_name") {
        Some(name) => name.to_string(),
        None => pick_one(&mut *ctx.rng, en::FIRST_NAMES).to_string(),
    };
    let last = match ctx.params.get_non_empty("last_name") {
        Some(name) => name.to_string(),
        None => pick_one(&mut *ctx.rng, en::LAST_NAMES).to_string(),
    };
    let email = generator::email(&mut *ctx.rng, &first, &last);
    Response::ok(&json!({ "email": email }))
}

pub fn phone(ctx: &mut RequestContext) -> Response {
    let phone = generator::phone_number(&mut *ctx.rng, ctx.params.country());
    Response::ok(&json!({ "phone": phone }))
}

pub fn address(ctx: &mut RequestContext) -> Response {
    let address = generator::address(
        &mut *ctx.rng,
        ctx.params.country(),
        ctx.params.format_valid(),
    );
    Response::ok(&address)
}

pub fn identity(ctx: &mut RequestContext) -> Response {
    let identity = generator::build_identity(
        &mut *ctx.rng,
        ctx.params.country(),
        ctx.params.format_valid(),
    );
    Response::ok(&identity)
}
