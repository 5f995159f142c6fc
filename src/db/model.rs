//! In-memory state the commands operate on.
//!
//! `Model` owns the address book and the active filter. The displayed
//! list is derived from both on every read. Presentation code learns about
//! changes through `subscribe`; listeners run synchronously after each
//! change.

use std::fmt;

use super::persons::{AddressBook, BookError};
use crate::models::Person;

/// Predicate selecting the displayed persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonFilter {
    All,
    /// Any keyword equals (ignoring case) a name word, tag, remark or module.
    Keywords(Vec<String>),
}

impl PersonFilter {
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::Keywords(keywords) => keywords.iter().any(|keyword| {
                person.name.words().any(|w| w.eq_ignore_ascii_case(keyword))
                    || person.tags.iter().any(|t| t.name().eq_ignore_ascii_case(keyword))
                    || person.remarks.iter().any(|r| r.name().eq_ignore_ascii_case(keyword))
                    || person.modules.iter().any(|m| m.name().eq_ignore_ascii_case(keyword))
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    PersonAdded(Person),
    PersonReplaced { old: Person, new: Person },
    PersonRemoved(Person),
    Cleared,
    FilterChanged,
}

pub type Listener = Box<dyn FnMut(&ModelEvent)>;

pub struct Model {
    book: AddressBook,
    filter: PersonFilter,
    revision: u64,
    listeners: Vec<Listener>,
}

impl Model {
    /// Standing predicate that shows every person.
    pub const SHOW_ALL: PersonFilter = PersonFilter::All;

    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            filter: Self::SHOW_ALL,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    pub fn persons(&self) -> &[Person] {
        self.book.persons()
    }

    /// Persons matching the active filter, in address-book order.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.book
            .persons()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    /// Number of successful address-book mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.book.contains(person)
    }

    /// Append a person and show the full list again.
    pub fn add_person(&mut self, person: Person) -> Result<(), BookError> {
        self.book.add(person.clone())?;
        self.bump(ModelEvent::PersonAdded(person));
        self.update_filter(Self::SHOW_ALL);
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), BookError> {
        self.book.set(target, edited.clone())?;
        self.bump(ModelEvent::PersonReplaced {
            old: target.clone(),
            new: edited,
        });
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<(), BookError> {
        let removed = self.book.remove(target)?;
        self.bump(ModelEvent::PersonRemoved(removed));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.book.clear();
        self.bump(ModelEvent::Cleared);
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
        self.notify(&ModelEvent::FilterChanged);
    }

    fn bump(&mut self, event: ModelEvent) {
        self.revision += 1;
        self.notify(&event);
    }

    fn notify(&mut self, event: &ModelEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("book", &self.book)
            .field("filter", &self.filter)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
