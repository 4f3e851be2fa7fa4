// Copyright 2026 the Glyphline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_buffer;
mod test_itemize;
pub(crate) mod utils;
