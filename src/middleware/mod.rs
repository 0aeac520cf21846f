// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (visitor identity, security headers).

pub mod security;
pub mod visitor;

pub use visitor::{ensure_visitor, Visitor, VISITOR_COOKIE};
