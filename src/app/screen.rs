// SPDX-License-Identifier: GPL-3.0-only

mod finished;
mod playing;
pub mod session;
mod setup;

pub use session::SessionScreen;
