// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use thiserror::Error;

/// Why a "create a new page" suggestion could not be turned into a link.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CreatePageError {
    #[error("Creating pages is not available.")]
    Unavailable,
    #[error("Could not create page \"{title}\": {reason}")]
    Failed { title: String, reason: String },
}
