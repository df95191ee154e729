// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod catalog;
pub mod report;
pub mod user;

pub use catalog::{Catalog, EducationItem, Incentive, NewsItem, RankingEntry, Terms};
pub use report::Report;
pub use user::User;
