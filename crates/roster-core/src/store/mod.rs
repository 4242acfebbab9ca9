//! In-memory stores for resources and appointments.
//!
//! Both stores share one generic [`Store`] over the [`Record`] trait. A store
//! owns its list outright: consumers read snapshots through [`Store::list`]
//! and mutate only through `create`, `update` and `remove`. Every applied
//! mutation is published synchronously to subscribers; mutations that change
//! nothing publish nothing.
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use roster_core::{
//!     models::{Resource, ResourceType},
//!     store::{ResourceStore, StoreEvent},
//! };
//!
//! let mut store = ResourceStore::new();
//! let seen = Rc::new(RefCell::new(0));
//! let counter = Rc::clone(&seen);
//! store.subscribe(move |_event: &StoreEvent<Resource>| *counter.borrow_mut() += 1);
//!
//! store.create(Resource::new("Room A", ResourceType::Room))?;
//! assert_eq!(*seen.borrow(), 1);
//! # Ok::<(), roster_core::RosterError>(())
//! ```

use std::fmt;

use log::debug;
use ulid::Ulid;

use crate::{
    error::Result,
    models::{Appointment, Resource},
    params::{UpdateAppointment, UpdateResource},
};


/// Result of an update or removal that looked an entity up by id.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The entity was found and the mutation was applied
    Applied,
    /// No entity with the requested id exists; nothing changed
    NotFound,
}

impl Outcome {
    /// Returns true if the mutation was applied.
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Change notification published to store subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent<T> {
    Created(T),
    /// Carries the entity as it is after the merge
    Updated(T),
    Removed(T),
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An entity a [`Store`] can hold.
pub trait Record: Clone {
    /// Partial update applied by [`Store::update`].
    type Update;

    /// Human-readable entity name used in log lines.
    const KIND: &'static str;

    fn id(&self) -> Ulid;

    fn update_id(update: &Self::Update) -> Ulid;

    /// Checks run before an entity is appended.
    fn validate_new(&self) -> Result<()>;

    /// Checks run before an update is merged.
    fn validate_update(update: &Self::Update) -> Result<()>;

    /// Shallow-merges `update` into `self`.
    fn merge(&mut self, update: Self::Update);
}

impl Record for Resource {
    type Update = UpdateResource;

    const KIND: &'static str = "resource";

    fn id(&self) -> Ulid {
        self.id
    }

    fn update_id(update: &UpdateResource) -> Ulid {
        update.id
    }

    fn validate_new(&self) -> Result<()> {
        Ok(())
    }

    fn validate_update(_update: &UpdateResource) -> Result<()> {
        Ok(())
    }

    fn merge(&mut self, update: UpdateResource) {
        self.apply(update);
    }
}

impl Record for Appointment {
    type Update = UpdateAppointment;

    const KIND: &'static str = "appointment";

    fn id(&self) -> Ulid {
        self.id
    }

    fn update_id(update: &UpdateAppointment) -> Ulid {
        update.id
    }

    fn validate_new(&self) -> Result<()> {
        self.validate()
    }

    fn validate_update(update: &UpdateAppointment) -> Result<()> {
        Appointment::validate_update(update)
    }

    fn merge(&mut self, update: UpdateAppointment) {
        self.apply(update);
    }
}

type Callback<T> = Box<dyn FnMut(&StoreEvent<T>)>;

/// Authoritative in-memory list of records with change subscriptions.
pub struct Store<T: Record> {
    items: Vec<T>,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_subscription: u64,
}

/// Store of schedulable resources.
pub type ResourceStore = Store<Resource>;

/// Store of appointments.
pub type AppointmentStore = Store<Appointment>;

impl<T: Record> Store<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Creates a store seeded with `items` (e.g. a loaded snapshot). Seeding
    /// publishes nothing and skips validation.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Appends `entity` and returns the full updated list. The caller supplies
    /// a fresh id; duplicates are not detected.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RosterError::Validation`] if the entity fails its
    /// creation checks; the store is left unchanged.
    pub fn create(&mut self, entity: T) -> Result<Vec<T>> {
        entity.validate_new()?;
        self.items.push(entity.clone());
        self.publish(&StoreEvent::Created(entity));
        Ok(self.list())
    }

    /// Shallow-merges `update` into the entity with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RosterError::Validation`] if the update fails its
    /// checks; the store is left unchanged.
    pub fn update(&mut self, update: T::Update) -> Result<Outcome> {
        T::validate_update(&update)?;
        let id = T::update_id(&update);
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            debug!("Update of unknown {} {id} ignored", T::KIND);
            return Ok(Outcome::NotFound);
        };
        item.merge(update);
        let updated = item.clone();
        self.publish(&StoreEvent::Updated(updated));
        Ok(Outcome::Applied)
    }

    /// Removes the entity with `id`.
    pub fn remove(&mut self, id: Ulid) -> Outcome {
        let Some(position) = self.items.iter().position(|item| item.id() == id) else {
            debug!("Removal of unknown {} {id} ignored", T::KIND);
            return Outcome::NotFound;
        };
        let removed = self.items.remove(position);
        self.publish(&StoreEvent::Removed(removed));
        Outcome::Applied
    }

    /// Snapshot of the current list, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Borrowed view of the current list.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Copy of the entity with `id`, if present.
    pub fn get(&self, id: Ulid) -> Option<T> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    /// Returns true if an entity with `id` is present.
    pub fn contains(&self, id: Ulid) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers `callback` to run after every applied mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent<T>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drops a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    fn publish(&mut self, event: &StoreEvent<T>) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("items", &self.items)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
