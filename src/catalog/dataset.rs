//! Dataset construction and lookup
//!
//! # API
//!
//! - `build(objects, events)` - Link approaches to objects and build indices
//! - `find_by_designation(designation)` - Exact primary key lookup
//! - `find_by_name(name)` - Exact name lookup
//! - `approaches()` - Canonical approach sequence, in source order
//! - `approaches_of(object)` - One object's approaches, in source order

use std::collections::HashMap;

use crate::model::{ApproachEvent, AstroObject, EventId, ObjectId};
use crate::observability::{log_event_with_fields, Event, ObservationScope};

use super::errors::{CatalogError, CatalogResult};
use super::view::Approach;

/// An immutable, cross-linked catalog of objects and their approaches
#[derive(Debug)]
pub struct Dataset {
    /// All objects, in source order
    objects: Vec<AstroObject>,

    /// All approaches, in source (chronological) order
    events: Vec<ApproachEvent>,

    /// Resolved object of each approach, aligned with `events`
    owners: Vec<ObjectId>,

    /// Primary designation -> object
    by_designation: HashMap<String, ObjectId>,

    /// Non-empty name -> first object carrying that name
    by_name: HashMap<String, ObjectId>,
}

impl Dataset {
    /// Builds a fully linked dataset.
    ///
    /// Behavior:
    /// - Index objects by designation; a repeated designation rejects the build
    /// - Index named objects by name; the first object with a name wins
    /// - Resolve every approach's designation and append it to its object
    ///
    /// On an unresolved designation: returns NEODB_DATA_INTEGRITY (FATAL).
    /// Nothing partially linked escapes a failed build.
    pub fn build(
        mut objects: Vec<AstroObject>,
        events: Vec<ApproachEvent>,
    ) -> CatalogResult<Self> {
        let object_count = objects.len().to_string();
        let event_count = events.len().to_string();
        let scope = ObservationScope::with_fields(
            "DATASET_BUILD",
            &[("objects", object_count.as_str()), ("approaches", event_count.as_str())],
        );

        let mut by_designation = HashMap::with_capacity(objects.len());
        let mut by_name = HashMap::new();

        for (position, neo) in objects.iter_mut().enumerate() {
            let id = ObjectId(position);
            if by_designation.contains_key(neo.designation()) {
                let err = CatalogError::duplicate_designation(position, neo.designation());
                scope.fail_fatal(err.message());
                return Err(err);
            }
            by_designation.insert(neo.designation().to_string(), id);

            if let Some(name) = neo.name().filter(|n| !n.is_empty()) {
                by_name.entry(name.to_string()).or_insert(id);
            }

            neo.approaches.clear();
        }

        let mut owners = Vec::with_capacity(events.len());
        for (position, event) in events.iter().enumerate() {
            let owner = match by_designation.get(event.designation()) {
                Some(&id) => id,
                None => {
                    let err = CatalogError::unresolved_designation(position, event.designation());
                    scope.fail_fatal(err.message());
                    return Err(err);
                }
            };
            owners.push(owner);
            objects[owner.0].approaches.push(EventId(position));
        }

        let names = by_name.len().to_string();
        scope.complete_with_fields(&[("named", names.as_str())]);

        Ok(Self {
            objects,
            events,
            owners,
            by_designation,
            by_name,
        })
    }

    /// Finds an object by its exact primary designation.
    ///
    /// No normalization: matching is case- and whitespace-sensitive.
    pub fn find_by_designation(&self, designation: &str) -> Option<&AstroObject> {
        let found = self
            .by_designation
            .get(designation)
            .map(|id| &self.objects[id.0]);
        if found.is_none() {
            log_event_with_fields(Event::LookupMiss, &[("designation", designation)]);
        }
        found
    }

    /// Finds an object by its exact name.
    ///
    /// Empty names are never indexed, so `""` always misses. When several
    /// objects share a name, some object with that name is returned.
    pub fn find_by_name(&self, name: &str) -> Option<&AstroObject> {
        let found = self.by_name.get(name).map(|id| &self.objects[id.0]);
        if found.is_none() {
            log_event_with_fields(Event::LookupMiss, &[("name", name)]);
        }
        found
    }

    /// Returns the linked approach with the given id
    pub fn approach(&self, id: EventId) -> Option<Approach<'_>> {
        let event = self.events.get(id.0)?;
        let owner = self.owners[id.0];
        Some(Approach::new(id, event, &self.objects[owner.0]))
    }

    /// All objects, in source order
    pub fn objects(&self) -> &[AstroObject] {
        &self.objects
    }

    /// Number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of approaches
    pub fn approach_count(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the dataset holds no approaches
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Lazily walks the canonical approach sequence
    pub fn approaches(&self) -> impl Iterator<Item = Approach<'_>> + '_ {
        self.events
            .iter()
            .zip(self.owners.iter())
            .enumerate()
            .map(move |(i, (event, owner))| {
                Approach::new(EventId(i), event, &self.objects[owner.0])
            })
    }

    /// Lazily walks one object's approaches, in canonical order
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a AstroObject,
    ) -> impl Iterator<Item = Approach<'a>> + 'a {
        neo.approach_ids()
            .iter()
            .map(move |id| Approach::new(*id, &self.events[id.0], neo))
    }
}
