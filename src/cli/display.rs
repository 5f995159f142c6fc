use crate::db::Model;
use crate::models::Person;

/// Print the displayed list, one numbered line per person.
pub fn print_person_list(model: &Model) {
    let persons = model.filtered_persons();
    if persons.is_empty() {
        println!("  (no persons)");
        return;
    }
    for line in person_list_lines(&persons) {
        println!("{}", line);
    }
}

pub fn person_list_lines(persons: &[&Person]) -> Vec<String> {
    let width = persons.len().to_string().len();
    persons
        .iter()
        .enumerate()
        .map(|(i, person)| format!("{:>width$}. {}", i + 1, summary_line(person)))
        .collect()
}

/// Name followed by the fields that are present, labels in brackets.
pub fn summary_line(person: &Person) -> String {
    let mut parts = vec![person.name.to_string()];
    if let Some(ref phone) = person.phone {
        parts.push(phone.to_string());
    }
    if let Some(ref email) = person.email {
        parts.push(email.to_string());
    }

    let labels: String = person
        .tags
        .iter()
        .map(|t| format!("[{}]", t))
        .chain(person.remarks.iter().map(|r| format!("({})", r)))
        .chain(person.modules.iter().map(|m| format!("<{}>", m)))
        .collect::<Vec<_>>()
        .join(" ");
    if !labels.is_empty() {
        parts.push(labels);
    }
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{alice, benson, carl, PersonBuilder};

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line(&benson()),
            "Benson Meier  98765432  johnd@example.com  [friends] [owesMoney] (roommate) <CS2101>"
        );
        assert_eq!(summary_line(&PersonBuilder::new("Zed").build()), "Zed");
    }

    #[test]
    fn test_list_lines_are_numbered_from_one() {
        let (a, c) = (alice(), carl());
        let lines = person_list_lines(&[&a, &c]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. Alice Pauline"));
        assert!(lines[1].starts_with("2. Carl Kurz"));
    }

    #[test]
    fn test_list_lines_pad_index() {
        let people: Vec<Person> = (0..10)
            .map(|i| PersonBuilder::new(&format!("Person {}", i)).build())
            .collect();
        let refs: Vec<&Person> = people.iter().collect();
        let lines = person_list_lines(&refs);
        assert!(lines[0].starts_with(" 1. Person 0"));
        assert!(lines[9].starts_with("10. Person 9"));
    }
}
