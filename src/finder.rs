use crate::models::Person;

/// Returns the male roots that share a name with at least one of their
/// grandchildren, in input order. Only children's children are inspected and
/// the comparison is a case-sensitive string match on `name`.
pub fn find_matching_grandfathers(persons: &[Person]) -> Vec<&Person> {
    persons
        .iter()
        .filter(|person| person.is_male())
        .filter(|person| {
            // `any` stops at the first matching grandchild
            person
                .grandchildren()
                .any(|grandchild| grandchild.name == person.name)
        })
        .collect()
}
