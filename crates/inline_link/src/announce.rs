// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Spoken feedback for assistive technology.

use strum_macros::{AsRefStr, Display};

/// How urgently a screen reader should read a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Politeness {
    Assertive,
}

/// The outcome of a link change, as read out to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
pub enum Announcement {
    #[strum(serialize = "Link inserted.")]
    Inserted,
    #[strum(serialize = "Link edited.")]
    Edited,
    #[strum(serialize = "Link removed.")]
    Removed,
    #[strum(
        serialize = "Warning: the link has been inserted but may have errors. Please test it."
    )]
    InsertedWithWarning,
}

impl Announcement {
    pub fn message(&self) -> &str {
        self.as_ref()
    }

    pub fn politeness(&self) -> Politeness {
        Politeness::Assertive
    }
}

/// Something that can speak a message, e.g. an ARIA live region.
pub trait Announcer {
    fn speak(&mut self, message: &str, politeness: Politeness);
}

/// Writes announcements to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn speak(&mut self, message: &str, politeness: Politeness) {
        log::info!("[{politeness}] {message}");
    }
}
