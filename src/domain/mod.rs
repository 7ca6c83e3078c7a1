// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod answers;
mod choice;
mod commit;
mod workflow;

pub use answers::*;
pub use choice::*;
pub use commit::*;
pub use workflow::*;
