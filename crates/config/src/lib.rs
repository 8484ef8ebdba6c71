// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod app_config;
pub mod chain;
mod env;
pub mod error;
pub mod schema;
pub mod section;

pub use app_config::*;
pub use chain::*;
pub use env::*;
pub use error::*;
pub use section::*;
