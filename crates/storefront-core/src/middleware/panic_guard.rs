//! Converts a panicking handler into a generic `500` so one bad request
//! cannot take the worker down with it.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, HttpResponse,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::rc::Rc;
use tracing::error;

use crate::errors::ErrorBody;

pub struct PanicGuard;

impl<S, B> Transform<S, ServiceRequest> for PanicGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = PanicGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(PanicGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct PanicGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for PanicGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        // the router needs sole ownership of the request, so keep copies only
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let outcome = AssertUnwindSafe(async move { service.call(req).await })
                .catch_unwind()
                .await;

            outcome.unwrap_or_else(|panic| {
                error!(
                    %method,
                    %path,
                    panic = panic_message(panic.as_ref()),
                    "Handler panicked"
                );
                let response = HttpResponse::InternalServerError().json(ErrorBody::internal());
                Err(InternalError::from_response("handler panicked", response).into())
            })
        })
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic>")
}
