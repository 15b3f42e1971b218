//! Extractors whose rejections render as [`AppError`].
//!
//! Axum's own `Query`, `Path` and `Json` reject with plain-text bodies. These
//! wrappers keep the JSON error envelope for malformed requests too.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// [`axum::extract::Query`] rejecting with a validation error.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);

/// [`axum::extract::Path`] rejecting with a validation error.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);

/// [`axum::Json`] rejecting with a validation error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);
