//! Identity-scoped API facades.
//!
//! Each module adds an `impl ApiClient` block for one API resource. Every
//! method names its [`crate::http::AuthScope`] at definition time; nothing
//! is inferred from the request path.
//!
//! | Module | Scope | Resources |
//! |---|---|---|
//! | [`auth`] | public / user | register, login, me |
//! | [`users`] | user | credits, plan upgrade |
//! | [`insights`] | user | search, export |
//! | [`pricing`] | public | plan listing |
//! | [`seo`] | public | per-page SEO metadata |
//! | [`admin`] | public / admin | admin login, plan CRUD, settings, users |

pub mod admin;
pub mod auth;
pub mod insights;
pub mod pricing;
pub mod seo;
pub mod users;
