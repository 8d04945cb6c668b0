use serde::Serialize;

/// An engineering branch a participant can belong to.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct Branch {
    pub name: &'static str,
    pub value: &'static str,
}

pub const BRANCHES: &[Branch] = &[
    Branch { name: "Aerospace Engineering", value: "aerospace" },
    Branch { name: "Civil Engineering", value: "civil" },
    Branch { name: "Computer Science and Engineering", value: "cse" },
    Branch { name: "Computer Science and Communication Engineering", value: "csce" },
    Branch { name: "Computer Science and Systems Engineering", value: "csse" },
    Branch { name: "Electronics and Computer Science Engineering", value: "ecse" },
    Branch { name: "Electronics and Electrical Engineering", value: "eee" },
    Branch { name: "Electrical Engineering", value: "ee" },
    Branch { name: "Electronics and Telecommunication Engineering", value: "ete" },
    Branch { name: "Information Technology", value: "it" },
    Branch { name: "Mechanical Engineering", value: "mechanical" },
];

/// Looks up a branch by its value.
pub fn find(value: &str) -> Option<&'static Branch> {
    BRANCHES.iter().find(|b| b.value == value)
}

/// Display name for a branch value, falling back to the raw value when unknown.
pub fn display_name(value: &str) -> &str {
    find(value).map(|b| b.name).unwrap_or(value)
}
