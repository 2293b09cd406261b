//! RPC procedure plumbing shared by all namespaces.
//!
//! A procedure is addressed as `<namespace>.<name>` below the RPC prefix. Queries are
//! served over GET, mutations over POST with a JSON body. `Namespace` registers the
//! handlers of one namespace and answers wrong-method calls with a typed error;
//! `RpcInput` deserializes the request body into the procedure's input DTO.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    handler::Handler,
    http::{Method, Uri},
    routing::{get, post, MethodRouter},
    Router,
};
use serde::de::DeserializeOwned;

use crate::server::{
    error::AppError,
    state::AppState,
    validation::{parse_payload, ValidationError},
};

/// Procedure payload deserialized from the request body.
///
/// Unlike `Json`, the content type is not checked and an empty body reads as `{}`.
/// Rejections surface as `AppError::InvalidInput`, i.e. a 400 error envelope.
/// Must be the last extractor of a handler since it consumes the body.
pub struct RpcInput<T>(pub T);

impl<T, S> FromRequest<S> for RpcInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::MalformedJson(rejection.body_text()))?;

        Ok(Self(parse_payload(&bytes)?))
    }
}

/// Builder grouping the procedures of one namespace into a router.
pub struct Namespace {
    name: &'static str,
    router: Router<AppState>,
}

impl Namespace {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            router: Router::new(),
        }
    }

    /// Registers a read-only procedure served over GET.
    pub fn query<H, T>(self, procedure: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.register(procedure, get(handler))
    }

    /// Registers a state-changing procedure served over POST.
    pub fn mutation<H, T>(self, procedure: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.register(procedure, post(handler))
    }

    fn register(mut self, procedure: &str, method_router: MethodRouter<AppState>) -> Self {
        let path = format!("/{}.{}", self.name, procedure);

        self.router = self
            .router
            .route(&path, method_router.fallback(method_not_supported));
        self
    }

    pub fn into_router(self) -> Router<AppState> {
        self.router
    }
}

async fn method_not_supported(method: Method) -> AppError {
    AppError::MethodNotSupported(method.to_string())
}

/// Fallback for paths below the RPC prefix that name no registered procedure.
pub async fn procedure_not_found(uri: Uri) -> AppError {
    AppError::ProcedureNotFound(uri.path().trim_start_matches('/').to_string())
}
