use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// One individual in a family tree. Children are owned nested records, so the
/// whole dataset is a plain tree of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub children: Vec<Person>,
    pub sex: Sex,
}

impl Person {
    pub fn new(name: &str, surname: &str, sex: Sex) -> Self {
        Self {
            name: name.to_string(),
            surname: surname.to_string(),
            children: Vec::new(),
            sex,
        }
    }

    pub fn with_children(mut self, children: Vec<Person>) -> Self {
        self.children = children;
        self
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    /// Children's children, in order.
    pub fn grandchildren(&self) -> impl Iterator<Item = &Person> {
        self.children.iter().flat_map(|child| child.children.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_children_default_to_empty() {
        let person: Person =
            serde_json::from_str(r#"{"name":"Ann","surname":"Lee","sex":"Female"}"#).unwrap();
        assert!(person.children.is_empty());
        assert_eq!(person.sex, Sex::Female);
    }

    #[test]
    fn unknown_sex_is_rejected() {
        let parsed =
            serde_json::from_str::<Person>(r#"{"name":"Ann","surname":"Lee","sex":"female"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn grandchildren_are_yielded_in_order() {
        let person = Person::new("Tom", "Henson", Sex::Male).with_children(vec![
            Person::new("Amy", "Henson", Sex::Female).with_children(vec![
                Person::new("Eric", "Henson", Sex::Male),
                Person::new("Grace", "Henson", Sex::Female),
            ]),
            Person::new("Will", "Henson", Sex::Male),
            Person::new("Sally", "Henson", Sex::Female)
                .with_children(vec![Person::new("Judy", "Farley", Sex::Female)]),
        ]);

        let names: Vec<&str> = person.grandchildren().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Eric", "Grace", "Judy"]);
    }
}
