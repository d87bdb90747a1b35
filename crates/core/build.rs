// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

use std::error;
use vergen::{Emitter, RustcBuilder};

fn main() -> Result<(), Box<dyn error::Error>> {
    let rustc = RustcBuilder::all_rustc()?;
    Emitter::default().add_instructions(&rustc)?.emit()?;
    Ok(())
}
