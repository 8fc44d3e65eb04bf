//! Linked view over one approach and its object

use std::fmt;

use crate::model::{ApproachEvent, AstroObject, EventId};

/// An approach event paired with its resolved object
///
/// Only a `Dataset` hands these out, so `neo()` is never absent.
#[derive(Debug, Clone, Copy)]
pub struct Approach<'a> {
    id: EventId,
    event: &'a ApproachEvent,
    neo: &'a AstroObject,
}

impl<'a> Approach<'a> {
    pub(crate) fn new(id: EventId, event: &'a ApproachEvent, neo: &'a AstroObject) -> Self {
        Self { id, event, neo }
    }

    /// Position of this approach in the dataset's canonical order
    pub fn id(&self) -> EventId {
        self.id
    }

    /// The approach event
    pub fn event(&self) -> &'a ApproachEvent {
        self.event
    }

    /// The object making the approach
    pub fn neo(&self) -> &'a AstroObject {
        self.neo
    }

    /// True if both views point at the same event of the same dataset
    pub fn same_event(&self, other: &Approach<'_>) -> bool {
        std::ptr::eq(self.event, other.event)
    }
}

impl fmt::Display for Approach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.event.time_str(),
            self.neo.fullname(),
            self.event.distance,
            self.event.velocity
        )
    }
}
