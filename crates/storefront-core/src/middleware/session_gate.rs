//! Session gate middleware
//!
//! Consults an [`AccessPolicy`] before the wrapped service runs. A protected
//! request without a session marker never reaches the handler.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpResponse,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;
use std::sync::Arc;
use tracing::info;

use crate::access::{Access, AccessPolicy};
use crate::errors::{ErrorBody, AUTH_REQUIRED};
use crate::session::SessionMarker;

/// What a denied request gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyResponse {
    /// `307` to a login page. Used by page-serving layers.
    RedirectTo(String),
    /// `401` with a JSON error body. Used by API layers.
    Unauthorized,
}

impl DenyResponse {
    fn respond(&self) -> HttpResponse {
        match self {
            DenyResponse::RedirectTo(location) => HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, location.as_str()))
                .finish(),
            DenyResponse::Unauthorized => HttpResponse::Unauthorized()
                .json(ErrorBody::new("Authentication required", AUTH_REQUIRED)),
        }
    }
}

/// Session gate middleware
#[derive(Clone)]
pub struct SessionGate {
    policy: Arc<AccessPolicy>,
    deny: DenyResponse,
}

impl SessionGate {
    pub fn new(policy: AccessPolicy, deny: DenyResponse) -> Self {
        Self {
            policy: Arc::new(policy),
            deny,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionGateService {
            service: Rc::new(service),
            policy: Arc::clone(&self.policy),
            deny: self.deny.clone(),
        })
    }
}

pub struct SessionGateService<S> {
    service: Rc<S>,
    policy: Arc<AccessPolicy>,
    deny: DenyResponse,
}

impl<S, B> Service<ServiceRequest> for SessionGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let marker = SessionMarker::from_request(req.request());

        match self.policy.check(req.method(), req.path(), marker) {
            Access::Granted => {
                let service = Rc::clone(&self.service);
                Box::pin(async move {
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                })
            }
            Access::Denied => {
                info!(method = %req.method(), path = %req.path(), "session marker missing, request denied");
                let response = self.deny.respond();
                let (http_req, _payload) = req.into_parts();
                Box::pin(async move {
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                })
            }
        }
    }
}
