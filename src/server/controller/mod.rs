//! HTTP handlers.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into validated parameters, call a service and convert the result back into a
//! DTO. Request bodies, query strings and path segments go through the `Api*` extractors below
//! so malformed input is answered with the usual `{ "error": ... }` body and status 400.

pub mod assignment;
pub mod auth;
pub mod retailer;
pub mod sales_rep;
pub mod taxonomy;
pub mod user;

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// `axum::Json` with rejections mapped to `AppError`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with rejections mapped to `AppError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path` with rejections mapped to `AppError`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
