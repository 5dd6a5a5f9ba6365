// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod factors;
pub mod user;

pub use activity::{CarbonActivity, Category, UserActivity};
pub use factors::CarbonFactors;
pub use user::User;
