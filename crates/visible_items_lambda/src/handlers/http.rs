use std::sync::atomic::{AtomicBool, Ordering};

use lambda_http::http::header::{HeaderName, HeaderValue, CONTENT_TYPE, ORIGIN};
use lambda_http::http::StatusCode;
use lambda_http::request::RequestContext;
use lambda_http::{Body, Request, RequestExt, Response};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, info_span};
use visible_items_core::cors::CorsPolicy;
use visible_items_core::routing::Route;

use crate::adapters::item_store::ItemStore;
use crate::config::HandlerConfig;
use crate::handlers::list_visible_items::list_visible_items;

const JSON_CONTENT_TYPE: &str = "application/json";

static COLD_START: ColdStart = ColdStart::new();

/// True for the first invocation served by this execution environment only.
struct ColdStart(AtomicBool);

impl ColdStart {
    const fn new() -> Self {
        Self(AtomicBool::new(true))
    }

    fn take(&self) -> bool {
        self.0.swap(false, Ordering::Relaxed)
    }
}

/// Invocation metadata stamped on every log line of a request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct InvocationFields {
    correlation_id: String,
    function_name: String,
    function_request_id: String,
    xray_trace_id: String,
}

impl InvocationFields {
    fn from_request(request: &Request) -> Self {
        let mut fields = Self {
            correlation_id: correlation_id(request).unwrap_or_default(),
            ..Self::default()
        };
        if let Some(context) = request.lambda_context_ref() {
            fields.function_name = context.env_config.function_name.clone();
            fields.function_request_id = context.request_id.clone();
            fields.xray_trace_id = context.xray_trace_id.clone().unwrap_or_default();
        }
        fields
    }
}

/// Turns one HTTP request into a response. Every failure is rendered as a
/// status code, so the Lambda invocation itself never errors.
pub fn handle_request(
    request: &Request,
    config: &HandlerConfig,
    store: &dyn ItemStore,
) -> Response<Body> {
    let invocation = InvocationFields::from_request(request);
    let span = info_span!(
        "handle_request",
        cold_start = COLD_START.take(),
        function_name = %invocation.function_name,
        function_request_id = %invocation.function_request_id,
        xray_trace_id = %invocation.xray_trace_id,
        correlation_id = %invocation.correlation_id,
        method = %request.method(),
        path = %request.uri().path(),
    );
    let _entered = span.enter();

    let route = config
        .router
        .route(request.method().as_str(), request.uri().path());
    let mut response = match route {
        Route::ListVisibleItems => match list_visible_items(store) {
            Ok(envelope) => json_response(StatusCode::OK, &envelope),
            Err(error) => {
                error!(error = %error, "failed to list visible items");
                status_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        },
        Route::Preflight => empty_response(StatusCode::NO_CONTENT),
        Route::NotFound => status_response(StatusCode::NOT_FOUND, "Not found"),
    };

    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok());
    apply_cors_headers(&mut response, &config.cors, origin, route == Route::Preflight);

    info!(
        route = route.as_str(),
        status = response.status().as_u16(),
        "request_completed"
    );
    response
}

/// API Gateway request id when the event carries one, else the Lambda
/// invocation id.
fn correlation_id(request: &Request) -> Option<String> {
    let gateway_id = match request.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(context)) => context.request_id.clone(),
        Some(RequestContext::ApiGatewayV2(context)) => context.request_id.clone(),
        _ => None,
    };
    gateway_id.or_else(|| {
        request
            .lambda_context_ref()
            .map(|context| context.request_id.clone())
    })
}

fn apply_cors_headers(
    response: &mut Response<Body>,
    policy: &CorsPolicy,
    origin: Option<&str>,
    preflight: bool,
) {
    for (name, value) in policy.response_headers(origin, preflight) {
        if let Ok(value) = HeaderValue::from_str(&value) {
            response
                .headers_mut()
                .insert(HeaderName::from_static(name), value);
        }
    }
}

fn json_response(status: StatusCode, payload: &impl Serialize) -> Response<Body> {
    match serde_json::to_string(payload) {
        Ok(body) => response_with_body(status, Body::from(body)),
        Err(error) => {
            error!(error = %error, "failed to serialize response body");
            status_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn status_response(status: StatusCode, message: &str) -> Response<Body> {
    let body = json!({
        "statusCode": status.as_u16(),
        "message": message,
    });
    response_with_body(status, Body::from(body.to_string()))
}

fn response_with_body(status: StatusCode, body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    response
}

fn empty_response(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::Empty);
    *response.status_mut() = status;
    response
}
