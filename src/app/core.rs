// SPDX-License-Identifier: GPL-3.0-only

pub mod catalog;
pub mod models;
pub mod session;
pub mod utils;

pub use catalog::Catalog;
