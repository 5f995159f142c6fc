use thiserror::Error;

use crate::models::Person;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("Operation would result in duplicate persons")]
    DuplicatePerson,
    #[error("The person does not exist in the address book")]
    PersonNotFound,
}

/// Ordered list of persons, unique by `Person::is_same_person`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list, rejecting the whole list if it holds duplicates.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, BookError> {
        let mut book = Self::new();
        for person in persons {
            book.add(person)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    // ==================== CREATE ====================

    pub fn add(&mut self, person: Person) -> Result<(), BookError> {
        if self.contains(&person) {
            return Err(BookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    // ==================== UPDATE ====================

    /// Replace `target` with `edited` at the same position.
    pub fn set(&mut self, target: &Person, edited: Person) -> Result<(), BookError> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(BookError::PersonNotFound)?;

        if !target.is_same_person(&edited) && self.contains(&edited) {
            return Err(BookError::DuplicatePerson);
        }

        self.persons[position] = edited;
        Ok(())
    }

    // ==================== DELETE ====================

    pub fn remove(&mut self, target: &Person) -> Result<Person, BookError> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(BookError::PersonNotFound)?;
        Ok(self.persons.remove(position))
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{alice, benson, carl, typical_address_book, PersonBuilder};

    #[test]
    fn test_from_persons_rejects_duplicates() {
        let twin = PersonBuilder::from(&alice()).phone("11111111").build();
        let result = AddressBook::from_persons(vec![alice(), twin]);
        assert_eq!(result.unwrap_err(), BookError::DuplicatePerson);
    }

    #[test]
    fn test_add_and_contains() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        book.add(alice()).unwrap();
        assert!(book.contains(&alice()));
        assert!(book.contains(&PersonBuilder::from(&alice()).remarks(&["x"]).build()));
        assert!(!book.contains(&benson()));

        assert_eq!(book.add(alice()).unwrap_err(), BookError::DuplicatePerson);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_set_keeps_position() {
        let mut book = typical_address_book();
        let edited = PersonBuilder::from(&benson()).remarks(&["neighbour"]).build();

        book.set(&benson(), edited.clone()).unwrap();
        assert_eq!(book.persons()[1], edited);
        assert_eq!(book.len(), 4);
    }

    #[test]
    fn test_set_rejects_duplicate_and_missing() {
        let mut book = typical_address_book();
        let renamed_to_alice = PersonBuilder::from(&benson()).name("Alice Pauline").build();
        assert_eq!(
            book.set(&benson(), renamed_to_alice).unwrap_err(),
            BookError::DuplicatePerson
        );

        let stranger = PersonBuilder::new("Elle Meyer").build();
        assert_eq!(
            book.set(&stranger, carl()).unwrap_err(),
            BookError::PersonNotFound
        );
        assert_eq!(book, typical_address_book());
    }

    #[test]
    fn test_remove() {
        let mut book = typical_address_book();
        let removed = book.remove(&carl()).unwrap();
        assert_eq!(removed, carl());
        assert!(!book.contains(&carl()));
        assert_eq!(book.remove(&carl()).unwrap_err(), BookError::PersonNotFound);
    }
}
